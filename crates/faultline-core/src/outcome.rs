//! Concrete outcome containers
//!
//! - [`Outcome`] - success without a payload, or a fault
//! - [`ValueOutcome`] - success with a value, or a fault
//!
//! # Conversions
//!
//! Both containers are built from markers ([`succeed`](crate::succeed),
//! [`succeed_with`](crate::succeed_with), [`fail`](crate::fail)) or from a
//! `std::result::Result` through `From`/`Into`.
//!
//! A bare fault or a bare value does not convert on its own. When the fault
//! and value types coincide (`ValueOutcome<String, String>`) a bare payload
//! cannot say which branch it belongs to, so the marker or `Ok`/`Err` form
//! is always required.

use crate::container::FaultContainer;
use crate::error::{raised, UnexpectedFailure, UnexpectedSuccess};
use crate::marker::{FailureMarker, SuccessMarker};
use crate::state::State;
use crate::value::ValueContainer;

/// Outcome of an operation that produces nothing on success
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome<F> {
    state: State<F, ()>,
}

impl<F> Outcome<F> {
    pub fn succeed() -> Self {
        Self {
            state: State::Success(()),
        }
    }

    pub fn fail(fault: F) -> Self {
        Self {
            state: State::Failure(fault),
        }
    }

    pub fn into_result(self) -> Result<(), F> {
        self.state.into_result()
    }

    pub fn into_fault(self) -> Option<F> {
        self.into_result().err()
    }

    /// Take the fault without cloning it
    pub fn into_fault_or_throw(self) -> Result<F, UnexpectedSuccess> {
        match self.state {
            State::Failure(fault) => Ok(fault),
            State::Success(()) => Err(raised(UnexpectedSuccess::new(()))),
        }
    }
}

impl<F> FaultContainer for Outcome<F> {
    type Fault = F;
    type Success = ();

    fn as_result(&self) -> Result<&(), &F> {
        self.state.as_result()
    }

    fn is_success(&self) -> bool {
        self.state.is_success()
    }
}

impl<F> From<SuccessMarker> for Outcome<F> {
    fn from(_: SuccessMarker) -> Self {
        Self::succeed()
    }
}

impl<F> From<FailureMarker<F>> for Outcome<F> {
    fn from(marker: FailureMarker<F>) -> Self {
        Self::fail(marker.into_inner())
    }
}

impl<F> From<Result<(), F>> for Outcome<F> {
    fn from(result: Result<(), F>) -> Self {
        Self {
            state: result.into(),
        }
    }
}

impl<F> From<Outcome<F>> for Result<(), F> {
    fn from(outcome: Outcome<F>) -> Self {
        outcome.into_result()
    }
}

/// Outcome of an operation that produces a `V` on success
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueOutcome<F, V> {
    state: State<F, V>,
}

impl<F, V> ValueOutcome<F, V> {
    pub fn succeed(value: V) -> Self {
        Self {
            state: State::Success(value),
        }
    }

    pub fn fail(fault: F) -> Self {
        Self {
            state: State::Failure(fault),
        }
    }

    pub fn into_result(self) -> Result<V, F> {
        self.state.into_result()
    }

    pub fn into_value(self) -> Option<V> {
        self.into_result().ok()
    }

    pub fn into_fault(self) -> Option<F> {
        self.into_result().err()
    }

    /// Take the value without cloning it
    pub fn into_value_or_throw(self) -> Result<V, UnexpectedFailure<F>> {
        self.into_result()
            .map_err(|fault| raised(UnexpectedFailure::new(fault)))
    }

    /// Take the fault without cloning it
    pub fn into_fault_or_throw(self) -> Result<F, UnexpectedSuccess<V>> {
        match self.state {
            State::Failure(fault) => Ok(fault),
            State::Success(value) => Err(raised(UnexpectedSuccess::new(value))),
        }
    }
}

impl<F, V> FaultContainer for ValueOutcome<F, V> {
    type Fault = F;
    type Success = V;

    fn as_result(&self) -> Result<&V, &F> {
        self.state.as_result()
    }

    fn is_success(&self) -> bool {
        self.state.is_success()
    }
}

impl<F, V> ValueContainer for ValueOutcome<F, V> {}

impl<F, V> From<SuccessMarker<V>> for ValueOutcome<F, V> {
    fn from(marker: SuccessMarker<V>) -> Self {
        Self::succeed(marker.into_inner())
    }
}

impl<F, V> From<FailureMarker<F>> for ValueOutcome<F, V> {
    fn from(marker: FailureMarker<F>) -> Self {
        Self::fail(marker.into_inner())
    }
}

impl<F, V> From<Result<V, F>> for ValueOutcome<F, V> {
    fn from(result: Result<V, F>) -> Self {
        Self {
            state: result.into(),
        }
    }
}

impl<F, V> From<ValueOutcome<F, V>> for Result<V, F> {
    fn from(outcome: ValueOutcome<F, V>) -> Self {
        outcome.into_result()
    }
}
