//! Markers that state success or failure intent at a return site
//!
//! A marker has no accessors of its own. It is converted with `into()` into
//! whichever container the surrounding function returns:
//!
//! ```
//! use faultline_core::{fail, succeed_with, ValueOutcome};
//!
//! fn parse_port(raw: &str) -> ValueOutcome<String, u16> {
//!     match raw.parse::<u16>() {
//!         Ok(port) => succeed_with(port).into(),
//!         Err(_) => fail(format!("not a port: {}", raw)).into(),
//!     }
//! }
//!
//! assert_eq!(parse_port("8080"), ValueOutcome::succeed(8080));
//! ```

/// Success intent, carrying `V` (nothing by default)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SuccessMarker<V = ()>(V);

/// Failure intent, carrying the fault
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FailureMarker<F>(F);

impl<V> SuccessMarker<V> {
    pub fn into_inner(self) -> V {
        self.0
    }
}

impl<F> FailureMarker<F> {
    pub fn into_inner(self) -> F {
        self.0
    }
}

/// Success without a payload
pub fn succeed() -> SuccessMarker {
    SuccessMarker(())
}

/// Success carrying `value`
pub fn succeed_with<V>(value: V) -> SuccessMarker<V> {
    SuccessMarker(value)
}

/// Failure carrying `fault`
pub fn fail<F>(fault: F) -> FailureMarker<F> {
    FailureMarker(fault)
}
