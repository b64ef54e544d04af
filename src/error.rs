use std::backtrace::Backtrace;
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors the solver can report to a caller.
///
/// A contradiction found while solving is *not* an error: it means a search
/// branch (or the whole puzzle) admits no filling, which the engine reports
/// through an empty solution list.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("puzzle has no rows or no columns")]
    EmptyPuzzle,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<SolverError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<SolverError> for Error {
    fn from(inner: SolverError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}
