//! Transformers over an attempt's success value or failure entries.
//!
//! Transformers are plain functions and are not guarded: one that panics unwinds
//! to whoever awaits the composed attempt.

use futures::future::BoxFuture ;
use futures::FutureExt ;

use crate::{ Attempt, FailureInfo, Outcome };



/// Attempt whose success value is passed through a transformer. See [`map`].
#[derive( Clone )]
pub struct Map<A, F> {
	inner: A,
	transform: F,
}

/// Attempt whose failure entries are passed through a transformer. See [`map_error`].
#[derive( Clone )]
pub struct MapError<A, F> {
	inner: A,
	transform: F,
}

impl<A, F> Map<A, F> {
	pub(crate) fn new( inner: A, transform: F ) -> Self { Self { inner, transform } }
}

impl<A, F> MapError<A, F> {
	pub(crate) fn new( inner: A, transform: F ) -> Self { Self { inner, transform } }
}

impl<A: std::fmt::Debug, F> std::fmt::Debug for Map<A, F> {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::result::Result<(), std::fmt::Error> {
		f.debug_struct( "Map" )
			.field( "inner", &self.inner )
			.field( "transform", &"<closure>" )
			.finish()
	}
}

impl<A: std::fmt::Debug, F> std::fmt::Debug for MapError<A, F> {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::result::Result<(), std::fmt::Error> {
		f.debug_struct( "MapError" )
			.field( "inner", &self.inner )
			.field( "transform", &"<closure>" )
			.finish()
	}
}

/// Applies `transform` to the value of every successful invocation of `attempt`.
///
/// Failures pass through untouched and the transformer is not called for them.
///
/// ```
/// use std::convert::Infallible ;
/// use atmp::{ map, wrap, Attempt, Outcome };
///
/// # futures::executor::block_on( async {
/// let add = wrap(|( a, b ): ( i32, i32 )| async move { Ok::<_, Infallible>( a + b ) });
/// let is_four = map( add, | sum: i32 | sum + 1 == 4 );
/// assert_eq!( is_four.attempt(( 1, 2 )).await, Outcome::Success( true ));
/// # });
/// ```
pub fn map<Args, A, F, U>( attempt: A, transform: F ) -> Map<A, F>
where
	A: Attempt<Args>,
	F: Fn( A::Value ) -> U + Send + Sync,
{
	Map::new( attempt, transform )
}

/// Applies `transform` to every failure entry of `attempt`, keeping order and count.
///
/// Successes pass through untouched.
pub fn map_error<Args, A, F>( attempt: A, transform: F ) -> MapError<A, F>
where
	A: Attempt<Args>,
	F: Fn( FailureInfo ) -> FailureInfo + Send + Sync,
{
	MapError::new( attempt, transform )
}

impl<Args, A, F, U> Attempt<Args> for Map<A, F>
where
	A: Attempt<Args>,
	F: Fn( A::Value ) -> U + Send + Sync,
	U: Send + 'static,
{
	type Value = U ;

	fn attempt<'a>( &'a self, args: Args ) -> BoxFuture<'a, Outcome<U>>
	where
		Args: 'a,
	{
		self.inner.attempt( args )
			.map(| outcome | outcome.map( &self.transform ))
			.boxed()
	}
}

impl<Args, A, F> Attempt<Args> for MapError<A, F>
where
	A: Attempt<Args>,
	F: Fn( FailureInfo ) -> FailureInfo + Send + Sync,
{
	type Value = A::Value ;

	fn attempt<'a>( &'a self, args: Args ) -> BoxFuture<'a, Outcome<A::Value>>
	where
		Args: 'a,
	{
		self.inner.attempt( args )
			.map(| outcome | outcome.map_failures( &self.transform ))
			.boxed()
	}
}
