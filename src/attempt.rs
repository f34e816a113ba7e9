//! The wrapped-operation abstraction shared by every combinator.

use std::sync::Arc ;

use futures::future::BoxFuture ;

use crate::{ Outcome, FailureInfo };
use crate::map::{ Map, MapError };



/// An operation that reports failure through its [`Outcome`] instead of raising.
///
/// `Args` is the single argument the operation takes; operations with several
/// parameters take a tuple. Implementations never panic out of [`attempt`]( Self::attempt )
/// and never resolve to anything but an [`Outcome`]. Values are produced fresh on
/// every call: nothing is cached between invocations.
///
/// The trait is object safe, see [`BoxedAttempt`].
pub trait Attempt<Args>: Send + Sync {

	/// What a successful invocation produces.
	type Value: Send + 'static ;

	/// Starts the operation with `args` and returns a future of its outcome.
	fn attempt<'a>( &'a self, args: Args ) -> BoxFuture<'a, Outcome<Self::Value>>
	where
		Args: 'a ;

	/// Transforms the success value, see [`map`]( crate::map() ).
	fn map<F, U>( self, transform: F ) -> Map<Self, F>
	where
		Self: Sized,
		F: Fn( Self::Value ) -> U + Send + Sync,
	{
		Map::new( self, transform )
	}

	/// Transforms each failure entry, see [`map_error`]( crate::map_error() ).
	fn map_error<F>( self, transform: F ) -> MapError<Self, F>
	where
		Self: Sized,
		F: Fn( FailureInfo ) -> FailureInfo + Send + Sync,
	{
		MapError::new( self, transform )
	}

	/// Erases the concrete type so differently built attempts can share a container.
	fn boxed( self ) -> BoxedAttempt<Args, Self::Value>
	where
		Self: Sized + 'static,
	{
		Box::new( self )
	}

}

/// A type-erased [`Attempt`].
pub type BoxedAttempt<Args, T> = Box<dyn Attempt<Args, Value = T>>;

impl<Args, A: Attempt<Args> + ?Sized> Attempt<Args> for Box<A> {
	type Value = A::Value ;
	fn attempt<'a>( &'a self, args: Args ) -> BoxFuture<'a, Outcome<Self::Value>>
	where
		Args: 'a,
	{
		( **self ).attempt( args )
	}
}

impl<Args, A: Attempt<Args> + ?Sized> Attempt<Args> for Arc<A> {
	type Value = A::Value ;
	fn attempt<'a>( &'a self, args: Args ) -> BoxFuture<'a, Outcome<Self::Value>>
	where
		Args: 'a,
	{
		( **self ).attempt( args )
	}
}
