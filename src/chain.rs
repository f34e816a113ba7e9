//! Sequential composition.
//!
//! A chain is a tuple of attempts where every step after the first takes the
//! previous step's value as its only argument. Steps run strictly one after
//! another: step `n + 1` is only started once step `n` has succeeded, and the
//! first failure is returned as is.
//!
//! Chains of one to eight steps are supported.

use futures::future::BoxFuture ;
use futures::FutureExt ;

use crate::{ Attempt, Outcome };



/// A tuple of attempts that can run as a [`Sequence`].
///
/// Every value that is fed to a following step is cloned, since it is also
/// kept in the resulting tuple.
pub trait SequenceSteps<Args>: Send + Sync {
	/// One value per step, in step order.
	type Values: Send + 'static ;
	fn run<'a>( &'a self, args: Args ) -> BoxFuture<'a, Outcome<Self::Values>>
	where
		Args: 'a ;
}

/// A tuple of attempts that can run as a [`Pipe`].
pub trait PipeSteps<Args>: Send + Sync {
	/// The value of the last step.
	type Last: Send + 'static ;
	fn run<'a>( &'a self, args: Args ) -> BoxFuture<'a, Outcome<Self::Last>>
	where
		Args: 'a ;
}

/// Chains attempts and keeps every intermediate value. See [`sequence`].
#[derive( Debug, Clone )]
pub struct Sequence<S>( S );

/// Chains attempts and keeps only the last value. See [`pipe`].
#[derive( Debug, Clone )]
pub struct Pipe<S>( S );

/// Runs a tuple of attempts in order, feeding each value into the next step.
///
/// On success the value is a tuple of every step's value, so a single step
/// still yields a one-element tuple. On failure, nothing after the failing step runs.
///
/// ```
/// use std::convert::Infallible ;
/// use atmp::{ sequence, wrap, Attempt, Outcome };
///
/// # futures::executor::block_on( async {
/// let add = wrap(|( a, b ): ( i32, i32 )| async move { Ok::<_, Infallible>( a + b ) });
/// let text = wrap(| n: i32 | async move { Ok::<_, Infallible>( n.to_string() ) });
///
/// let both = sequence(( add, text ));
/// assert_eq!( both.attempt(( 1, 2 )).await, Outcome::Success(( 3, "3".to_string() )));
/// # });
/// ```
pub fn sequence<S>( steps: S ) -> Sequence<S> { Sequence( steps ) }

/// Runs a tuple of attempts in order like [`sequence`], yielding only the last value.
///
/// ```
/// use std::convert::Infallible ;
/// use atmp::{ pipe, wrap, Attempt, Outcome };
///
/// # futures::executor::block_on( async {
/// let add = wrap(|( a, b ): ( i32, i32 )| async move { Ok::<_, Infallible>( a + b ) });
/// let text = wrap(| n: i32 | async move { Ok::<_, Infallible>( n.to_string() ) });
///
/// assert_eq!( pipe(( add, text )).attempt(( 1, 2 )).await, Outcome::Success( "3".to_string() ));
/// # });
/// ```
pub fn pipe<S>( steps: S ) -> Pipe<S> { Pipe( steps ) }

impl<Args, S: SequenceSteps<Args>> Attempt<Args> for Sequence<S> {
	type Value = S::Values ;
	fn attempt<'a>( &'a self, args: Args ) -> BoxFuture<'a, Outcome<S::Values>>
	where
		Args: 'a,
	{
		self.0.run( args )
	}
}

impl<Args, S: PipeSteps<Args>> Attempt<Args> for Pipe<S> {
	type Value = S::Last ;
	fn attempt<'a>( &'a self, args: Args ) -> BoxFuture<'a, Outcome<S::Last>>
	where
		Args: 'a,
	{
		self.0.run( args )
	}
}

// Unwraps a step's value or returns its failure from the enclosing async block.
macro_rules! settle {
	( $outcome:expr, $step:expr ) => {
		match $outcome {
			Outcome::Success( value ) => value,
			Outcome::Failure( failures ) => {
				tracing::debug!( step = $step, failures = ?failures.len(), "chain short-circuited" );
				return Outcome::Failure( failures );
			}
		}
	};
}

macro_rules! chain_steps {
	(
		[ $First:ident $first:ident ]
		$( [ $Step:ident $step:ident : $Prev:ident $prev:ident @ $index:tt ] )*
		=> $Last:ident
	) => {

		impl<Args, $First, $( $Step ),*> SequenceSteps<Args> for ( $First, $( $Step, )* )
		where
			Args: Send,
			$First: Attempt<Args>,
			$( $Step: Attempt<$Prev::Value>, $Prev::Value: Clone, )*
		{
			type Values = ( $First::Value, $( $Step::Value, )* );

			fn run<'a>( &'a self, args: Args ) -> BoxFuture<'a, Outcome<Self::Values>>
			where
				Args: 'a,
			{
				async move {
					let $first = settle!( self.0.attempt( args ).await, 0 );
					$( let $step = settle!( self.$index.attempt( $prev.clone() ).await, $index ); )*
					Outcome::Success(( $first, $( $step, )* ))
				}.boxed()
			}
		}

		impl<Args, $First, $( $Step ),*> PipeSteps<Args> for ( $First, $( $Step, )* )
		where
			Args: Send,
			$First: Attempt<Args>,
			$( $Step: Attempt<$Prev::Value>, )*
		{
			type Last = $Last::Value ;

			fn run<'a>( &'a self, args: Args ) -> BoxFuture<'a, Outcome<Self::Last>>
			where
				Args: 'a,
			{
				async move {
					let value = settle!( self.0.attempt( args ).await, 0 );
					$( let value = settle!( self.$index.attempt( value ).await, $index ); )*
					Outcome::Success( value )
				}.boxed()
			}
		}

	};
}

chain_steps!( [ A0 v0 ] => A0 );
chain_steps!( [ A0 v0 ] [ A1 v1 : A0 v0 @ 1 ] => A1 );
chain_steps!( [ A0 v0 ] [ A1 v1 : A0 v0 @ 1 ] [ A2 v2 : A1 v1 @ 2 ] => A2 );
chain_steps!( [ A0 v0 ] [ A1 v1 : A0 v0 @ 1 ] [ A2 v2 : A1 v1 @ 2 ] [ A3 v3 : A2 v2 @ 3 ] => A3 );
chain_steps!(
	[ A0 v0 ] [ A1 v1 : A0 v0 @ 1 ] [ A2 v2 : A1 v1 @ 2 ] [ A3 v3 : A2 v2 @ 3 ]
	[ A4 v4 : A3 v3 @ 4 ]
	=> A4
);
chain_steps!(
	[ A0 v0 ] [ A1 v1 : A0 v0 @ 1 ] [ A2 v2 : A1 v1 @ 2 ] [ A3 v3 : A2 v2 @ 3 ]
	[ A4 v4 : A3 v3 @ 4 ] [ A5 v5 : A4 v4 @ 5 ]
	=> A5
);
chain_steps!(
	[ A0 v0 ] [ A1 v1 : A0 v0 @ 1 ] [ A2 v2 : A1 v1 @ 2 ] [ A3 v3 : A2 v2 @ 3 ]
	[ A4 v4 : A3 v3 @ 4 ] [ A5 v5 : A4 v4 @ 5 ] [ A6 v6 : A5 v5 @ 6 ]
	=> A6
);
chain_steps!(
	[ A0 v0 ] [ A1 v1 : A0 v0 @ 1 ] [ A2 v2 : A1 v1 @ 2 ] [ A3 v3 : A2 v2 @ 3 ]
	[ A4 v4 : A3 v3 @ 4 ] [ A5 v5 : A4 v4 @ 5 ] [ A6 v6 : A5 v5 @ 6 ] [ A7 v7 : A6 v6 @ 7 ]
	=> A7
);
