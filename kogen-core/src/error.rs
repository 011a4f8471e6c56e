use std::path::PathBuf;

use crate::config::ConfigError;
use crate::route_table::PatchError;

/// Error type for a single generator invocation.
///
/// Every variant is fatal: the invocation aborts and nothing is retried.
#[derive(Debug)]
pub enum GenError {
    /// A filesystem read or write failed.
    Io(std::io::Error),
    /// The persisted generator settings could not be loaded.
    Config(ConfigError),
    /// The route table could not be parsed or patched.
    Patch(PatchError),
    /// The project has no `routes.js` at the expected location.
    RoutesNotFound(PathBuf),
    /// A destination file already exists and overwriting was not requested.
    Conflict(PathBuf),
    /// The view name is empty.
    MissingName,
}

impl std::fmt::Display for GenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenError::Io(e) => write!(f, "I/O error: {e}"),
            GenError::Config(e) => write!(f, "{e}"),
            GenError::Patch(e) => write!(f, "Route table error: {e}"),
            GenError::RoutesNotFound(path) => {
                write!(f, "Route table not found: {}", path.display())
            }
            GenError::Conflict(path) => write!(
                f,
                "File '{}' already exists (use --force to overwrite)",
                path.display()
            ),
            GenError::MissingName => write!(f, "View name must not be empty"),
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenError::Io(e) => Some(e),
            GenError::Config(e) => Some(e),
            GenError::Patch(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GenError {
    fn from(e: std::io::Error) -> Self {
        GenError::Io(e)
    }
}

impl From<ConfigError> for GenError {
    fn from(e: ConfigError) -> Self {
        GenError::Config(e)
    }
}

impl From<PatchError> for GenError {
    fn from(e: PatchError) -> Self {
        GenError::Patch(e)
    }
}
