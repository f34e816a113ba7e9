//! The value every [`Attempt`]( crate::Attempt ) resolves to.

use nonempty_collections::{ NEVec, NonEmptyIterator, IntoNonEmptyIterator };

use crate::FailureInfo ;



/// An ordered list of failures that always holds at least one entry.
pub type Failures = NEVec<FailureInfo>;

/// The outcome of one invocation of an [`Attempt`]( crate::Attempt ).
///
/// Exactly one branch is populated, and the failure branch is never empty.
/// [`Outcome::into_pair`] gives the positional `( value, failures )` view.
#[must_use]
#[derive( Debug, Clone, PartialEq, Eq )]
pub enum Outcome<T> {
	/// The operation produced a value.
	Success( T ),
	/// The operation failed; entries keep the order in which they were produced.
	Failure( Failures ),
}

impl<T> Outcome<T> {

	/// A failure holding exactly one entry.
	pub fn failed( failure: FailureInfo ) -> Self {
		Self::Failure( NEVec::new( failure ))
	}

	#[inline] pub fn is_success( &self ) -> bool { matches!( self, Self::Success( _ )) }

	#[inline] pub fn is_failure( &self ) -> bool { matches!( self, Self::Failure( _ )) }

	/// The value, if the operation succeeded.
	pub fn value( &self ) -> Option<&T> {
		match self {
			Self::Success( value ) => Some( value ),
			Self::Failure( _ ) => None,
		}
	}

	/// The failures, if the operation failed.
	pub fn failures( &self ) -> Option<&Failures> {
		match self {
			Self::Success( _ ) => None,
			Self::Failure( failures ) => Some( failures ),
		}
	}

	/// Splits the outcome into `( value, failures )`, value first.
	///
	/// ```
	/// use atmp::{ FailureInfo, Outcome };
	///
	/// let ( value, failures ) = Outcome::Success( 3 ).into_pair();
	/// assert_eq!( value, Some( 3 ));
	/// assert!( failures.is_none() );
	///
	/// let ( value, failures ) = Outcome::<i32>::failed( FailureInfo::new( "a is 1" )).into_pair();
	/// assert!( value.is_none() );
	/// assert_eq!( failures.unwrap().first().message(), "a is 1" );
	/// ```
	pub fn into_pair( self ) -> ( Option<T>, Option<Failures> ) {
		match self {
			Self::Success( value ) => ( Some( value ), None ),
			Self::Failure( failures ) => ( None, Some( failures )),
		}
	}

	/// Converts into a standard [`Result`] so `?` can be used on it.
	pub fn into_result( self ) -> Result<T, Failures> {
		match self {
			Self::Success( value ) => Ok( value ),
			Self::Failure( failures ) => Err( failures ),
		}
	}

	/// Transforms the value; failures pass through untouched.
	pub fn map<U>( self, transform: impl FnOnce( T ) -> U ) -> Outcome<U> {
		match self {
			Self::Success( value ) => Outcome::Success( transform( value )),
			Self::Failure( failures ) => Outcome::Failure( failures ),
		}
	}

	/// Transforms every failure entry, preserving order and count.
	pub fn map_failures( self, transform: impl FnMut( FailureInfo ) -> FailureInfo ) -> Self {
		match self {
			Self::Success( value ) => Self::Success( value ),
			Self::Failure( failures ) => Self::Failure(
				failures.into_nonempty_iter().map( transform ).collect()
			),
		}
	}

}

impl<T> From<Outcome<T>> for Result<T, Failures> {
	fn from( outcome: Outcome<T> ) -> Self { outcome.into_result() }
}

impl<T> From<Result<T, Failures>> for Outcome<T> {
	fn from( result: Result<T, Failures> ) -> Self {
		match result {
			Ok( value ) => Self::Success( value ),
			Err( failures ) => Self::Failure( failures ),
		}
	}
}
