//! faultline core - value-or-fault outcome containers
//!
//! This crate provides explicit, inspectable success/failure outcomes:
//! - [`Outcome<F>`] for operations that only report a fault
//! - [`ValueOutcome<F, V>`] for operations that produce a value or a fault
//! - [`FaultContainer`] and [`ValueContainer`] with the shared accessors
//! - Markers ([`succeed`], [`succeed_with`], [`fail`]) converted with `into()`
//! - Error types returned when an outcome is read on the wrong branch
//!
//! ```
//! use faultline_core::{fail, succeed_with, FaultContainer, ValueContainer, ValueOutcome};
//!
//! fn divide(a: i32, b: i32) -> ValueOutcome<&'static str, i32> {
//!     if b == 0 {
//!         return fail("division by zero").into();
//!     }
//!     succeed_with(a / b).into()
//! }
//!
//! assert_eq!(divide(8, 2).get_value_or_throw(), Ok(&4));
//! assert_eq!(divide(1, 0).try_get_fault(), Some(&"division by zero"));
//! ```

pub mod container;
pub mod error;
pub mod marker;
pub mod outcome;
mod state;
pub mod value;

// Re-export commonly used types
pub use container::FaultContainer;
pub use error::{UnexpectedFailure, UnexpectedSuccess};
pub use marker::{fail, succeed, succeed_with, FailureMarker, SuccessMarker};
pub use outcome::{Outcome, ValueOutcome};
pub use value::ValueContainer;
