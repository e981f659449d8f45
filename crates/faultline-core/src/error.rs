//! Error types raised when an outcome is accessed on the wrong branch
//!
//! Both kinds describe a contract violation by the caller, never the fault
//! itself:
//! - [`UnexpectedFailure`] - a success was expected but the outcome holds a fault
//! - [`UnexpectedSuccess`] - a failure was expected but the outcome succeeded

use std::borrow::Cow;
use thiserror::Error;

/// Default message of [`UnexpectedFailure`]
pub const FAILURE_MESSAGE: &str = "result was a failure";

/// Default message of [`UnexpectedSuccess`]
pub const SUCCESS_MESSAGE: &str = "result was a success";

/// A success-expecting accessor found a failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct UnexpectedFailure<F> {
    message: Cow<'static, str>,
    fault: F,
}

impl<F> UnexpectedFailure<F> {
    /// Create the error with the default message
    pub fn new(fault: F) -> Self {
        Self::with_message(FAILURE_MESSAGE, fault)
    }

    /// Create the error with a custom message
    pub fn with_message(message: impl Into<Cow<'static, str>>, fault: F) -> Self {
        Self {
            message: message.into(),
            fault,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The fault the outcome was holding
    pub fn fault(&self) -> &F {
        &self.fault
    }

    pub fn into_fault(self) -> F {
        self.fault
    }
}

/// A failure-expecting accessor found a success
///
/// `V` is the success payload captured from the outcome. The fault-only
/// [`Outcome`](crate::Outcome) has no payload and reports `()`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct UnexpectedSuccess<V = ()> {
    message: Cow<'static, str>,
    value: V,
}

impl<V> UnexpectedSuccess<V> {
    /// Create the error with the default message
    pub fn new(value: V) -> Self {
        Self::with_message(SUCCESS_MESSAGE, value)
    }

    /// Create the error with a custom message
    pub fn with_message(message: impl Into<Cow<'static, str>>, value: V) -> Self {
        Self {
            message: message.into(),
            value,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The value the outcome was holding
    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_value(self) -> V {
        self.value
    }
}

/// Build the default error for a success-expecting accessor
pub(crate) fn unexpected_failure<F: Clone>(fault: &F) -> UnexpectedFailure<F> {
    raised(UnexpectedFailure::new(fault.clone()))
}

/// Build the default error for a failure-expecting accessor
pub(crate) fn unexpected_success<V: Clone>(value: &V) -> UnexpectedSuccess<V> {
    raised(UnexpectedSuccess::new(value.clone()))
}

/// Log a default error on its way to the caller
pub(crate) fn raised<E: std::fmt::Display>(error: E) -> E {
    log::debug!("Outcome accessed on the wrong branch: {}", error);
    error
}
