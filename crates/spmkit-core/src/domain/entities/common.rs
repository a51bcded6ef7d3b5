use std::fmt;
use std::path::{Component, Path, PathBuf};

use super::DomainError;

/// A path inside the project root.
///
/// Never absolute and never contains `..`; both are checked on every
/// construction, so a `RelativePath` joined onto the root stays under it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        check(&path)?;
        Ok(Self(path))
    }

    pub fn join(&self, segment: impl AsRef<Path>) -> Result<Self, DomainError> {
        let segment = segment.as_ref();
        check(segment)?;
        Ok(Self(self.0.join(segment)))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

fn check(path: &Path) -> Result<(), DomainError> {
    let shown = || path.display().to_string();
    for component in path.components() {
        match component {
            Component::RootDir | Component::Prefix(_) => {
                return Err(DomainError::AbsolutePathNotAllowed { path: shown() });
            }
            Component::ParentDir => {
                return Err(DomainError::PathEscapesRoot { path: shown() });
            }
            Component::CurDir | Component::Normal(_) => {}
        }
    }
    Ok(())
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
