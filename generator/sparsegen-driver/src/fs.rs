//! Filesystem utilities for the generator driver.
use std::{fs, path::Path};

use sparsegen_reporting::errors::{GeneratorError, GeneratorResult};

/// Return true if `source` is more recently modified than `target`, or if
/// `target` does not exist. It is an error for `source` not to exist: the
/// staleness reference must always be present.
pub fn newer(source: &Path, target: &Path) -> GeneratorResult<bool> {
    if !source.exists() {
        return Err(GeneratorError::MissingSource { path: source.to_path_buf() });
    }
    if !target.exists() {
        return Ok(true);
    }

    let source_mtime = fs::metadata(source)?.modified()?;
    let target_mtime = fs::metadata(target)?.modified()?;

    Ok(source_mtime > target_mtime)
}

#[cfg(test)]
mod tests {
    use std::{
        fs::File,
        time::{Duration, SystemTime},
    };

    use super::*;

    #[test]
    fn a_missing_target_is_always_stale() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source");
        File::create(&source).unwrap();

        assert!(newer(&source, &dir.path().join("missing")).unwrap());
    }

    #[test]
    fn a_missing_source_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("target");
        File::create(&target).unwrap();

        let err = newer(&dir.path().join("missing"), &target).unwrap_err();
        assert!(matches!(err, GeneratorError::MissingSource { .. }));
    }

    #[test]
    fn mtime_ordering_decides_staleness() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source");
        let target = dir.path().join("target");
        File::create(&source).unwrap();
        let target_file = File::create(&target).unwrap();

        // target written after the source: up to date
        assert!(!newer(&source, &target).unwrap());

        // backdate the target below the source: stale again
        target_file
            .set_modified(SystemTime::now() - Duration::from_secs(120))
            .unwrap();
        assert!(newer(&source, &target).unwrap());
    }
}
