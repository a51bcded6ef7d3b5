//! Non-colliding project paths.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::application::ports::Filesystem;

/// Return `desired` if nothing exists there, otherwise the first free
/// `<stem>-N<.ext>` sibling, counting from 1.
///
/// This is a probe, not a reservation: another process can still create the
/// returned path before the caller does.
pub fn resolve_versioned_path(fs: &dyn Filesystem, desired: &Path) -> PathBuf {
    if !fs.exists(desired) {
        return desired.to_path_buf();
    }

    let mut n: u32 = 1;
    loop {
        let candidate = versioned_candidate(desired, n);
        if !fs.exists(&candidate) {
            debug!(
                desired = %desired.display(),
                resolved = %candidate.display(),
                "Path taken, using versioned sibling"
            );
            return candidate;
        }
        n += 1;
    }
}

fn versioned_candidate(desired: &Path, n: u32) -> PathBuf {
    let stem = desired.file_stem().unwrap_or(desired.as_os_str());
    let mut file_name = OsString::from(stem);
    file_name.push(format!("-{n}"));
    if let Some(ext) = desired.extension() {
        file_name.push(".");
        file_name.push(ext);
    }
    desired.with_file_name(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use std::collections::HashSet;

    fn fs_with(existing: &[&str]) -> MockFilesystem {
        let existing: HashSet<PathBuf> = existing.iter().map(PathBuf::from).collect();
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(move |p| existing.contains(p));
        fs
    }

    #[test]
    fn free_path_is_returned_unchanged() {
        let fs = fs_with(&[]);
        assert_eq!(
            resolve_versioned_path(&fs, Path::new("/work/demo")),
            PathBuf::from("/work/demo")
        );
    }

    #[test]
    fn taken_path_gets_first_free_suffix() {
        let fs = fs_with(&["/work/demo", "/work/demo-1"]);
        let resolved = resolve_versioned_path(&fs, Path::new("/work/demo"));
        assert_eq!(resolved, PathBuf::from("/work/demo-2"));
        assert_ne!(resolved, PathBuf::from("/work/demo"));
    }

    #[test]
    fn suffix_goes_before_extension() {
        assert_eq!(
            versioned_candidate(Path::new("/work/pkg.swift"), 3),
            PathBuf::from("/work/pkg-3.swift")
        );
    }
}
