//! Normalized failure records.
//!
//! Every fault an [`Attempt`]( crate::Attempt ) observes ends up as a [`FailureInfo`].
//! Errors returned by an operation carry a message of their own (their `Display`),
//! while panics carry an opaque payload that is coerced to text.

use std::any::Any ;
use std::error::Error ;
use std::sync::{ Arc, Mutex, PoisonError };

use pipe_trait::Pipe ;



/// Text used for panic payloads that are neither `&'static str` nor `String`.
const OPAQUE_PANIC: &str = "Box<dyn Any>";

/// The original fault a [`FailureInfo`] was built from, kept for diagnostics.
#[derive( Clone )]
pub enum Exception {
	/// The operation resolved to `Err`.
	Error( Arc<dyn Error + Send + Sync> ),
	/// The operation panicked, either when called or while being polled.
	Panic( Arc<Mutex<Box<dyn Any + Send>>> ),
}

impl Exception {

	/// Returns the error if this exception came from an `Err` value.
	pub fn as_error( &self ) -> Option<&( dyn Error + Send + Sync + 'static )> {
		match self {
			Self::Error( error ) => Some( &**error ),
			Self::Panic( _ ) => None,
		}
	}

	/// Attempts to downcast the original error to its concrete type.
	///
	/// Errors that were converted from plain strings have no public concrete type
	/// and never downcast.
	pub fn downcast_ref<E: Error + 'static>( &self ) -> Option<&E> {
		self.as_error()?.downcast_ref::<E>()
	}

	/// Whether the fault was a panic rather than an `Err`.
	#[inline] pub fn is_panic( &self ) -> bool { matches!( self, Self::Panic( _ )) }

	/// Runs `inspect` against the panic payload, if this exception is a panic.
	pub fn with_panic_payload<R>( &self, inspect: impl FnOnce( &( dyn Any + Send )) -> R ) -> Option<R> {
		match self {
			Self::Error( _ ) => None,
			Self::Panic( payload ) => {
				let payload = payload.lock().unwrap_or_else( PoisonError::into_inner );
				Some( inspect( &**payload ))
			}
		}
	}

}

impl std::fmt::Debug for Exception {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::result::Result<(), std::fmt::Error> {
		match self {
			Self::Error( error ) => f.debug_tuple( "Error" ).field( error ).finish(),
			Self::Panic( _ ) => f.debug_tuple( "Panic" ).field( &"<payload>" ).finish(),
		}
	}
}

/// A normalized, immutable failure record.
///
/// Built by [`wrap`]( crate::wrap() ) from a fault, or by hand when a
/// [`map_error`]( crate::map_error() ) transformer rewrites an entry.
///
/// Equality compares the message and the cause only; the exception is opaque.
#[derive( thiserror::Error, Debug, Clone )]
#[error( "{message}" )]
pub struct FailureInfo {
	/// Human-readable description of what went wrong
	message: String,
	/// The original fault, if this entry was built from one
	exception: Option<Exception>,
	/// Secondary context the fault exposed
	cause: Option<String>,
}

impl FailureInfo {

	/// Creates a failure with only a message.
	pub fn new( message: impl Into<String> ) -> Self {
		Self { message: message.into(), exception: None, cause: None }
	}

	/// Normalizes an error value.
	///
	/// The message is the error's `Display`, the cause is the `Display` of its
	/// [`source`]( Error::source ), and the error itself becomes the exception.
	///
	/// ```
	/// use atmp::FailureInfo ;
	///
	/// let failure = FailureInfo::from_error( "a is 1" );
	/// assert_eq!( failure.message(), "a is 1" );
	/// assert!( failure.cause().is_none() );
	/// ```
	pub fn from_error( error: impl Into<Box<dyn Error + Send + Sync>> ) -> Self {
		let error: Arc<dyn Error + Send + Sync> = Into::<Box<dyn Error + Send + Sync>>::into( error ).pipe( Arc::from );
		Self {
			message: error.to_string(),
			cause: error.source().map( ToString::to_string ),
			exception: Some( Exception::Error( error )),
		}
	}

	/// Normalizes a panic payload, as produced by [`std::panic::catch_unwind`].
	pub fn from_panic( payload: Box<dyn Any + Send> ) -> Self {
		let message = match payload.downcast_ref::<&'static str>() {
			Some( message ) => ( *message ).to_string(),
			None => match payload.downcast_ref::<String>() {
				Some( message ) => message.clone(),
				None => OPAQUE_PANIC.to_string(),
			},
		};
		Self {
			message,
			exception: Some( Exception::Panic( Arc::new( Mutex::new( payload )))),
			cause: None,
		}
	}

	/// Replaces the message, keeping the exception and cause.
	pub fn with_message( mut self, message: impl Into<String> ) -> Self {
		self.message = message.into();
		self
	}

	/// Attaches secondary context.
	pub fn with_cause( mut self, cause: impl Into<String> ) -> Self {
		self.cause = Some( cause.into() );
		self
	}

	/// Attaches the original fault.
	pub fn with_exception( mut self, exception: Exception ) -> Self {
		self.exception = Some( exception );
		self
	}

	/// Human-readable description of what went wrong.
	#[inline] pub fn message( &self ) -> &str { &self.message }

	/// The original fault, if this entry was built from one.
	#[inline] pub fn exception( &self ) -> Option<&Exception> { self.exception.as_ref() }

	/// Secondary context the fault exposed.
	#[inline] pub fn cause( &self ) -> Option<&str> { self.cause.as_deref() }

}

impl PartialEq for FailureInfo {
	fn eq( &self, other: &Self ) -> bool {
		self.message == other.message && self.cause == other.cause
	}
}

impl Eq for FailureInfo {}
