//! Error handling for the Stencil library.
//! Defines custom error types and results used throughout the crate.

use std::io;
use thiserror::Error;

/// Custom error types for Stencil operations.
///
/// This enum represents all possible errors that can occur while loading
/// project settings from a template tree. It implements the standard Error
/// trait through thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur during template rendering
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents a dependency specifier string that does not match the
    /// `[@org/]name[@version]` grammar
    #[error("Invalid package specifier: '{0}'.")]
    InvalidPackageSpecifier(String),

    /// Represents invalid caller-supplied project options
    #[error("Configuration error: {0}.")]
    ConfigError(String),
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;
