//! Module containing the universal error type for shader packing
use crate::pack::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Universal error type for shader packing
#[derive(Error, Debug)]
pub enum Error {
    /// No input shaders were given
    #[error("at least one shader required")]
    NoShaders,

    /// A shader file could not be read
    #[error("could not read shader {0:?}")]
    ReadError(PathBuf, #[source] std::io::Error),

    /// An output file could not be created or written
    #[error("could not write {0:?}")]
    WriteError(PathBuf, #[source] std::io::Error),

    /// IO error; see inner code for details
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    /// Strict mode found problems with the derived symbol names
    #[error("{} problem(s) with shader names: {}", .0.len(), join(.0))]
    Diagnostics(Vec<Diagnostic>),
}

fn join(ds: &[Diagnostic]) -> String {
    ds.iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
