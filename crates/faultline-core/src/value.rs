//! Value-side behavior of containers that carry a success payload

use crate::container::FaultContainer;
use crate::error::{unexpected_failure, UnexpectedFailure};

/// A [`FaultContainer`] whose success branch carries a value
///
/// Because the success payload is a real value here, the default errors of
/// [`FaultContainer::ensure_failure`] and [`FaultContainer::get_fault_or_throw`]
/// carry the value that was unexpectedly produced.
pub trait ValueContainer: FaultContainer {
    /// The value, if this is a success
    fn try_get_value(&self) -> Option<&Self::Success> {
        self.try_get_success()
    }

    /// Demultiplex both payloads in one call
    ///
    /// `Ok(value)` on success, `Err(fault)` on failure.
    fn try_get_value_or_fault(&self) -> Result<&Self::Success, &Self::Fault> {
        self.as_result()
    }

    /// The value if this is a success, otherwise `Success::default()`
    fn get_value_or_default(&self) -> Self::Success
    where
        Self::Success: Clone + Default,
    {
        self.try_get_value().cloned().unwrap_or_default()
    }

    /// The value, or the default error carrying the fault
    fn get_value_or_throw(&self) -> Result<&Self::Success, UnexpectedFailure<Self::Fault>>
    where
        Self::Fault: Clone,
    {
        self.get_value_or_throw_else(unexpected_failure)
    }

    fn get_value_or_throw_err<E>(&self, error: E) -> Result<&Self::Success, E> {
        self.get_value_or_throw_with(|| error)
    }

    fn get_value_or_throw_else<E, O>(&self, op: O) -> Result<&Self::Success, E>
    where
        O: FnOnce(&Self::Fault) -> E,
    {
        self.as_result().map_err(op)
    }

    fn get_value_or_throw_with<E, O>(&self, op: O) -> Result<&Self::Success, E>
    where
        O: FnOnce() -> E,
    {
        self.get_value_or_throw_else(|_| op())
    }
}
