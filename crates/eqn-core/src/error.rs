//! Errors that abort an evaluation.

use eqn_surface::ParseError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A term names a variable that is never defined.
    #[error("undefined variable `{reference}` referenced by `{variable}`")]
    UnresolvableReference { variable: String, reference: String },

    /// The variables in `cycle` depend on each other and never bottom out in
    /// literals. The first name is repeated at the end.
    #[error("cyclic dependency: {}", .cycle.join(" -> "))]
    CyclicDependency { cycle: Vec<String> },

    /// The sum for `variable` does not fit in 64 bits.
    #[error("value of `{variable}` is out of range")]
    Overflow { variable: String },
}
