//! Concurrent fan-out over named attempts.

use std::hash::Hash ;

use futures::future::{ self, BoxFuture };
use futures::FutureExt ;
use itertools::{ Either, Itertools };
use nonempty_collections::{ NEMap, NEVec, IntoNonEmptyIterator, NonEmptyIterator };

use crate::{ Attempt, Outcome };



/// Runs every member attempt against the same arguments. See [`collect`].
///
/// The key order is fixed when the collection is built and is the order in
/// which failures are reported.
#[derive( Debug, Clone )]
pub struct Collect<K, A> {
	attempts: Vec<( K, A )>,
}

impl<K, A> Collect<K, A> {

	/// Keys in the order failures are reported.
	pub fn keys( &self ) -> impl Iterator<Item = &K> {
		self.attempts.iter().map(|( key, _ )| key )
	}

}

/// Runs every attempt in `attempts` concurrently with a copy of the same arguments.
///
/// All members always run to completion; one failing does not stop or cancel the
/// others. If every member succeeds, the value maps each key to its member's value.
/// Otherwise the outcome is a failure holding every member's failures, concatenated
/// in key order, and the successful values are dropped.
///
/// Members must share a value type; [`Attempt::map`] and [`Attempt::boxed`] bring
/// differently built attempts to a common [`BoxedAttempt`]( crate::BoxedAttempt ).
///
/// ```
/// use std::convert::Infallible ;
/// use atmp::{ collect, wrap, Attempt, nem };
///
/// # futures::executor::block_on( async {
/// let both = collect( nem!{
/// 	"sum" => wrap(|( a, b ): ( i32, i32 )| async move { Ok::<_, Infallible>( a + b ) }).boxed(),
/// 	"product" => wrap(|( a, b ): ( i32, i32 )| async move { Ok::<_, Infallible>( a * b ) }).boxed()
/// });
/// let values = both.attempt(( 3, 4 )).await.into_result().unwrap();
/// assert_eq!( values.get( &"sum" ), Some( &7 ));
/// assert_eq!( values.get( &"product" ), Some( &12 ));
/// # });
/// ```
pub fn collect<K, A>( attempts: NEMap<K, A> ) -> Collect<K, A>
where
	K: Eq + Hash,
{
	Collect { attempts: attempts.into_iter().collect() }
}

impl<Args, K, A> Attempt<Args> for Collect<K, A>
where
	Args: Clone + Send,
	K: Clone + Eq + Hash + Send + Sync + 'static,
	A: Attempt<Args>,
{
	type Value = NEMap<K, A::Value>;

	fn attempt<'a>( &'a self, args: Args ) -> BoxFuture<'a, Outcome<Self::Value>>
	where
		Args: 'a,
	{
		let pending = self.attempts.iter()
			.map(|( key, attempt )| attempt.attempt( args.clone() ).map( move | outcome | ( key, outcome )))
			.collect::<Vec<_>>();

		async move {

			let total = pending.len();
			let ( values, failures ): ( Vec<_>, Vec<_> ) = future::join_all( pending ).await
				.into_iter()
				.partition_map(|( key, outcome )| match outcome {
					Outcome::Success( value ) => Either::Left(( key.clone(), value )),
					Outcome::Failure( failures ) => Either::Right( failures ),
				});

			let failed = failures.len();
			match NEVec::try_from_vec( failures.into_iter().flatten().collect()) {
				Some( failures ) => {
					tracing::debug!( failed, total, "collect settled with failures" );
					Outcome::Failure( failures )
				}
				None => match NEVec::try_from_vec( values ) {
					Some( values ) => Outcome::Success( values.into_nonempty_iter().collect() ),
					None => unreachable!( "a collection always holds at least one attempt" ),
				},
			}

		}.boxed()
	}
}
