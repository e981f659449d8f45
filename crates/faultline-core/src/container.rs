//! Fault-side behavior shared by every outcome container
//!
//! [`FaultContainer`] is implemented by both [`Outcome`](crate::Outcome) and
//! [`ValueOutcome`](crate::ValueOutcome). Implementors supply
//! [`FaultContainer::as_result`]; the safe accessors, the `ensure_*`
//! assertions and the `get_fault_or_throw*` accessors are derived from it.
//!
//! Raising accessors come in four forms:
//! - no suffix: the default error object of this crate
//! - `_err`: a pre-built error
//! - `_else`: a factory receiving the payload the outcome actually holds
//! - `_with`: a factory receiving nothing

use crate::error::{unexpected_failure, unexpected_success, UnexpectedFailure, UnexpectedSuccess};

/// A success/failure container with an optional fault
pub trait FaultContainer {
    /// Payload of the failure branch
    type Fault;

    /// Payload of the success branch
    ///
    /// `()` when the container carries no success value. Errors raised
    /// because the container is unexpectedly a success carry this payload.
    type Success;

    /// Borrow whichever payload is active
    fn as_result(&self) -> Result<&Self::Success, &Self::Fault>;

    fn is_success(&self) -> bool {
        self.as_result().is_ok()
    }

    fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The fault, if this is a failure
    fn try_get_fault(&self) -> Option<&Self::Fault> {
        self.as_result().err()
    }

    /// The success payload, if this is a success
    fn try_get_success(&self) -> Option<&Self::Success> {
        self.as_result().ok()
    }

    /// The fault if this is a failure, otherwise `Fault::default()`
    fn get_fault_or_default(&self) -> Self::Fault
    where
        Self::Fault: Clone + Default,
    {
        self.try_get_fault().cloned().unwrap_or_default()
    }

    // =========================================================================
    // Success assertions
    // =========================================================================

    /// Assert success, reporting the fault otherwise
    fn ensure_succeeded(&self) -> Result<(), UnexpectedFailure<Self::Fault>>
    where
        Self::Fault: Clone,
    {
        self.ensure_succeeded_else(unexpected_failure)
    }

    fn ensure_succeeded_err<E>(&self, error: E) -> Result<(), E> {
        self.ensure_succeeded_with(|| error)
    }

    fn ensure_succeeded_else<E, O>(&self, op: O) -> Result<(), E>
    where
        O: FnOnce(&Self::Fault) -> E,
    {
        match self.try_get_fault() {
            Some(fault) => Err(op(fault)),
            None => Ok(()),
        }
    }

    fn ensure_succeeded_with<E, O>(&self, op: O) -> Result<(), E>
    where
        O: FnOnce() -> E,
    {
        self.ensure_succeeded_else(|_| op())
    }

    // =========================================================================
    // Failure assertions
    // =========================================================================

    /// Assert failure, reporting the success payload otherwise
    fn ensure_failure(&self) -> Result<(), UnexpectedSuccess<Self::Success>>
    where
        Self::Success: Clone,
    {
        self.ensure_failure_else(unexpected_success)
    }

    fn ensure_failure_err<E>(&self, error: E) -> Result<(), E> {
        self.ensure_failure_with(|| error)
    }

    fn ensure_failure_else<E, O>(&self, op: O) -> Result<(), E>
    where
        O: FnOnce(&Self::Success) -> E,
    {
        match self.try_get_success() {
            Some(value) => Err(op(value)),
            None => Ok(()),
        }
    }

    fn ensure_failure_with<E, O>(&self, op: O) -> Result<(), E>
    where
        O: FnOnce() -> E,
    {
        self.ensure_failure_else(|_| op())
    }

    // =========================================================================
    // Fault retrieval
    // =========================================================================

    /// The fault, or the default error carrying the success payload
    fn get_fault_or_throw(&self) -> Result<&Self::Fault, UnexpectedSuccess<Self::Success>>
    where
        Self::Success: Clone,
    {
        self.get_fault_or_throw_else(unexpected_success)
    }

    fn get_fault_or_throw_err<E>(&self, error: E) -> Result<&Self::Fault, E> {
        self.get_fault_or_throw_with(|| error)
    }

    fn get_fault_or_throw_else<E, O>(&self, op: O) -> Result<&Self::Fault, E>
    where
        O: FnOnce(&Self::Success) -> E,
    {
        match self.as_result() {
            Ok(value) => Err(op(value)),
            Err(fault) => Ok(fault),
        }
    }

    fn get_fault_or_throw_with<E, O>(&self, op: O) -> Result<&Self::Fault, E>
    where
        O: FnOnce() -> E,
    {
        self.get_fault_or_throw_else(|_| op())
    }
}
