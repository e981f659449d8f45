//! Two-variant storage shared by every outcome container

/// Which payload of an outcome is meaningful
///
/// The discriminant alone decides the branch. A payload that is itself
/// empty (`None`, `()`, `""`) is still the active payload of its branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum State<F, V> {
    Success(V),
    Failure(F),
}

impl<F, V> State<F, V> {
    pub(crate) fn is_success(&self) -> bool {
        matches!(self, State::Success(_))
    }

    pub(crate) fn as_result(&self) -> Result<&V, &F> {
        match self {
            State::Success(value) => Ok(value),
            State::Failure(fault) => Err(fault),
        }
    }

    pub(crate) fn into_result(self) -> Result<V, F> {
        match self {
            State::Success(value) => Ok(value),
            State::Failure(fault) => Err(fault),
        }
    }
}

impl<F, V> From<Result<V, F>> for State<F, V> {
    fn from(result: Result<V, F>) -> Self {
        match result {
            Ok(value) => State::Success(value),
            Err(fault) => State::Failure(fault),
        }
    }
}
