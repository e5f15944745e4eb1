//! File entries yielded by the source tree walk

use std::ffi::OsStr;
use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};

use super::errors::DomainError;

/// A single non-directory entry found under the source root.
///
/// `name` and `extension` are lossy UTF-8 renderings used for
/// classification only; the destination of a promotion is always computed
/// from the raw file name so non-UTF-8 names survive the copy untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    path: PathBuf,
    name: String,
    extension: String,
}

impl FileEntry {
    /// Build an entry from a path, splitting out its file name and extension.
    ///
    /// The extension is everything after the last `.` in the file name, so a
    /// file literally named `.png` has extension `png`. A name without a dot
    /// has an empty extension.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| DomainError::InvalidPath(path.display().to_string()))?;

        let extension = name
            .rfind('.')
            .map(|idx| name[idx + 1..].to_string())
            .unwrap_or_default();

        Ok(Self {
            path,
            name,
            extension,
        })
    }

    /// Full path of the entry as produced by the walk.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name, lossily decoded.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Extension without the leading dot, case preserved.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Raw file name component, used to compute flattened destinations.
    #[must_use]
    pub fn file_name(&self) -> &OsStr {
        // from_path guarantees a file name exists
        self.path.file_name().unwrap_or_default()
    }
}

impl Display for FileEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_name_and_extension() {
        let entry = FileEntry::from_path("tasks/a/logo.PNG").unwrap();
        assert_eq!(entry.name(), "logo.PNG");
        assert_eq!(entry.extension(), "PNG");
        assert_eq!(entry.path(), Path::new("tasks/a/logo.PNG"));
        assert_eq!(entry.file_name(), OsStr::new("logo.PNG"));
    }

    #[test]
    fn extension_is_last_dot_suffix() {
        let entry = FileEntry::from_path("x/archive.tar.png").unwrap();
        assert_eq!(entry.extension(), "png");

        let entry = FileEntry::from_path("x/.png").unwrap();
        assert_eq!(entry.name(), ".png");
        assert_eq!(entry.extension(), "png");
    }

    #[test]
    fn missing_extension_is_empty() {
        let entry = FileEntry::from_path("x/README").unwrap();
        assert_eq!(entry.extension(), "");
    }

    #[test]
    fn rejects_path_without_file_name() {
        let err = FileEntry::from_path("/").unwrap_err();
        assert_eq!(err, DomainError::InvalidPath("/".to_string()));
    }

    #[test]
    fn display_shows_path() {
        let entry = FileEntry::from_path("tasks/b/icon.png").unwrap();
        assert_eq!(entry.to_string(), "tasks/b/icon.png");
    }
}
