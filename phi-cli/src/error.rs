use phi_error::Error;
use std::io;

/// Utility enum to package one or multiple errors.
pub enum ReplError {
    /// Multiple errors that can occur during lexing and parsing.
    Many(Vec<Error>),

    /// Single error that can occur while building or differentiating a tree.
    One(Error),
}

impl ReplError {
    /// Report the errors in this [`ReplError`] to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type actually does not have a `Display` implementation, so
    /// we can only use its `eprint` method to print to stderr.
    ///
    /// [`Report`]: https://docs.rs/ariadne/latest/ariadne/struct.Report.html
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        match self {
            Self::Many(errs) => errs.iter().try_for_each(|err| err.report_to_stderr(src_id, input)),
            Self::One(err) => err.report_to_stderr(src_id, input),
        }
    }
}

impl From<Vec<Error>> for ReplError {
    fn from(errs: Vec<Error>) -> Self {
        Self::Many(errs)
    }
}

impl From<Error> for ReplError {
    fn from(err: Error) -> Self {
        Self::One(err)
    }
}

/// An error, together with the source code that its spans point into.
pub struct SourcedError<'a> {
    /// The error.
    pub error: ReplError,

    /// The source code the error was found in.
    pub source: &'a str,
}

impl<'a> SourcedError<'a> {
    /// Pairs the error with the source code it was found in.
    pub fn new(error: impl Into<ReplError>, source: &'a str) -> Self {
        Self { error: error.into(), source }
    }
}
