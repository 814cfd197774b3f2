use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every way a run can fail. Each is reported once, by `main`.
#[derive(Error, Debug)]
pub(crate) enum Error {
    #[error("incorrect usage ({0}); expected `eqn <INPUT> <OUTPUT>`")]
    Usage(String),

    #[error("cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Eval(#[from] eqn_core::Error),
}
