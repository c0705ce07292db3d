//! # Skin Error Types

use std::path::PathBuf;

use thiserror::Error;
use veneer_core::CoerceError;

/// A scripting-bridge lookup matched no direct child.
///
/// The message names what was asked for, where, and every id that was
/// actually there, so script authors can spot naming mismatches.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "could not find a child with id \"{requested}\" in \"{container}\"; available children: {}",
    .available.join(", ")
)]
pub struct LookupError {
    /// Id the script asked for.
    pub requested: String,
    /// Resolved id of the searched container.
    pub container: String,
    /// Resolved ids of the container's direct children, in order.
    pub available: Vec<String>,
}

/// Errors raised while building a skin tree from declarations.
#[derive(Error, Debug)]
pub enum BuildError {
    /// The declaration names an element kind this runtime does not know.
    #[error("unknown element kind \"{kind}\"")]
    UnknownElement {
        /// Declared kind.
        kind: String,
    },

    /// Children or scripts were declared on an element that cannot hold them.
    #[error("element \"{kind}\" cannot contain children or scripts")]
    NotAContainer {
        /// Declared kind.
        kind: String,
    },

    /// An attribute value failed coercion.
    #[error("invalid value for \"{key}\" on <{element}>: {source}")]
    Attribute {
        /// Element kind being built.
        element: String,
        /// Attribute key.
        key: String,
        /// Coercion failure.
        #[source]
        source: CoerceError,
    },

    /// A declaration document could not be read.
    #[error("failed to read skin document {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The declaration document is not valid TOML for this schema.
    #[error("invalid skin document: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for tree building.
pub type BuildResult<T> = Result<T, BuildError>;
