//! Failures as values for fallible async operations.
//!
//! `atmp` wraps an operation that may fail into an [`Attempt`]: a callable that
//! never raises and always resolves to an [`Outcome`]. Attempts compose through a
//! small, fixed set of combinators.
//!
//! # Core Concepts
//!
//! - [`Outcome`]: either [`Outcome::Success`] with a value, or [`Outcome::Failure`]
//! 	with a non-empty list of [`FailureInfo`]s. Never both, never an empty failure list.
//!
//! - [`FailureInfo`]: a normalized failure with a `message`, the original fault as
//! 	its [`Exception`], and an optional `cause`.
//!
//! - [`Attempt`]: the wrapped operation. It takes one argument value (a tuple when
//! 	the operation has several parameters) and returns a future of an [`Outcome`].
//!
//! # Combinators
//!
//! - [`wrap`] / [`wrap_sync`]: the only boundary where faults (`Err` values and
//! 	panics) are caught and turned into failures.
//! - [`sequence`]: runs a tuple of attempts in order, each consuming the previous
//! 	value, and keeps every intermediate value. Stops at the first failure.
//! - [`pipe`]: like [`sequence`] but keeps only the last value.
//! - [`collect`]: runs named attempts concurrently against the same arguments and
//! 	gathers all values, or all failures.
//! - [`map`] / [`map_error`]: transform the value or each failure entry of an attempt.
//!
//! # Example
//!
//! ```
//! use std::convert::Infallible ;
//! use atmp::{ pipe, wrap, wrap_sync, Attempt, Outcome };
//!
//! # futures::executor::block_on( async {
//! let parse = wrap_sync(| text: &'static str | text.parse::<i32>() );
//! let double = wrap(| n: i32 | async move { Ok::<_, Infallible>( n * 2 ) });
//! let parse_and_double = pipe(( parse, double ));
//!
//! assert_eq!( parse_and_double.attempt( "21" ).await, Outcome::Success( 42 ));
//!
//! // The failing step's error becomes the failure; `double` never runs.
//! let ( value, failures ) = parse_and_double.attempt( "twenty" ).await.into_pair();
//! assert!( value.is_none() );
//! assert_eq!( failures.unwrap().first().message(), "invalid digit found in string" );
//! # });
//! ```
//!
//! # Concurrency
//!
//! No runtime is required. Chains run their steps strictly one after another on the
//! caller's task; [`collect`] polls all of its members concurrently on the caller's
//! task. Nothing is ever cancelled and no timeouts are imposed: an operation that
//! never completes keeps the composed attempt pending.
//!
//! # Logging
//!
//! Failures observed at the boundaries (a fault caught by [`wrap`], a chain stopping
//! early, a collection with failed members) are reported as `debug` events through
//! [`tracing`]( https://docs.rs/tracing ). No subscriber is installed by this crate.

mod attempt ;
mod chain ;
mod collect ;
mod failure ;
mod map ;
mod outcome ;
mod wrap ;

#[doc( no_inline )]
pub use nonempty_collections::{ NEMap, NEVec, nem, nev };

pub use attempt::{ Attempt, BoxedAttempt };
pub use chain::{ sequence, pipe, Sequence, Pipe, SequenceSteps, PipeSteps };
pub use collect::{ collect, Collect };
pub use failure::{ FailureInfo, Exception };
pub use map::{ map, map_error, Map, MapError };
pub use outcome::{ Outcome, Failures };
pub use wrap::{ wrap, wrap_sync, Wrap };
