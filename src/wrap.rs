//! The boundary that turns faults into values.
//!
//! [`wrap`] is the only place in the crate that catches anything. Every other
//! combinator works purely on [`Outcome`]s produced here.

use std::error::Error ;
use std::future::Future ;
use std::panic::{ self, AssertUnwindSafe };

use futures::future::{ self, BoxFuture, Ready };
use futures::FutureExt ;

use crate::{ Attempt, FailureInfo, Outcome };



/// An operation wrapped so that it resolves to an [`Outcome`] instead of failing.
///
/// Created with [`wrap`] or [`wrap_sync`].
#[derive( Clone )]
pub struct Wrap<F> {
	operation: F,
}

impl<F> std::fmt::Debug for Wrap<F> {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::result::Result<(), std::fmt::Error> {
		f.debug_struct( "Wrap" )
			.field( "operation", &"<closure>" )
			.finish()
	}
}

/// Wraps an asynchronous fallible operation.
///
/// The operation takes its arguments as one value (use a tuple for several) and
/// returns a future of `Result<T, E>`. Invoking the wrapped operation:
/// - resolves to [`Outcome::Success`] with the value on `Ok`
/// - resolves to a single-entry [`Outcome::Failure`] on `Err`, with the error's
/// 	`Display` as the message and its `source()` as the cause
/// - resolves to a single-entry [`Outcome::Failure`] if the operation panics,
/// 	either when called or while its future is polled
///
/// ```
/// use std::convert::Infallible ;
/// use atmp::{ wrap, Attempt, Outcome };
///
/// # futures::executor::block_on( async {
/// let add = wrap(|( a, b ): ( i32, i32 )| async move { Ok::<_, Infallible>( a + b ) });
/// assert_eq!( add.attempt(( 1, 2 )).await, Outcome::Success( 3 ));
///
/// let faulty = wrap(|( a, b ): ( i32, i32 )| async move {
/// 	if a == 1 { return Err( "a is 1" ) }
/// 	Ok( a + b )
/// });
/// let ( value, failures ) = faulty.attempt(( 1, 2 )).await.into_pair();
/// assert!( value.is_none() );
/// assert_eq!( failures.unwrap().first().message(), "a is 1" );
/// # });
/// ```
pub fn wrap<F>( operation: F ) -> Wrap<F> {
	Wrap { operation }
}

/// Wraps a synchronous fallible operation, normalizing it to the asynchronous contract.
///
/// Behaves exactly like [`wrap`]; the operation runs when the wrapped operation is invoked.
pub fn wrap_sync<Args, T, E, F>( operation: F ) -> Wrap<impl Fn( Args ) -> Ready<Result<T, E>> + Send + Sync>
where
	F: Fn( Args ) -> Result<T, E> + Send + Sync,
{
	wrap( move | args | future::ready( operation( args )))
}

impl<Args, F, Fut, T, E> Attempt<Args> for Wrap<F>
where
	F: Fn( Args ) -> Fut + Send + Sync,
	Fut: Future<Output = Result<T, E>> + Send + 'static,
	T: Send + 'static,
	E: Into<Box<dyn Error + Send + Sync>>,
{
	type Value = T ;

	fn attempt<'a>( &'a self, args: Args ) -> BoxFuture<'a, Outcome<T>>
	where
		Args: 'a,
	{
		let pending = match panic::catch_unwind( AssertUnwindSafe(|| ( self.operation )( args ))) {
			Ok( pending ) => pending,
			Err( payload ) => return future::ready( captured( FailureInfo::from_panic( payload ), "panic" )).boxed(),
		};

		AssertUnwindSafe( pending )
			.catch_unwind()
			.map(| settled | match settled {
				Ok( Ok( value )) => Outcome::Success( value ),
				Ok( Err( error )) => captured( FailureInfo::from_error( error ), "error" ),
				Err( payload ) => captured( FailureInfo::from_panic( payload ), "panic" ),
			})
			.boxed()
	}
}

fn captured<T>( failure: FailureInfo, kind: &'static str ) -> Outcome<T> {
	tracing::debug!( kind, error = %failure.message(), "wrapped operation failed" );
	Outcome::failed( failure )
}
