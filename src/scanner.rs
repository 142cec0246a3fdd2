use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::HarnessError;

/// One PNG file discovered in the target directory: the path handed to the
/// external tools and the bare name printed in the comparison block.
#[derive(Debug, Clone)]
pub struct PngEntry {
    pub path: PathBuf,
    pub name: String,
}

/// Case-sensitive: `.PNG` and `.Png` are not matched.
pub fn is_png_name(name: &str) -> bool {
    name.ends_with(".png")
}

/// Lists the PNG files directly inside `dir`, sorted by file name so runs
/// are reproducible regardless of the filesystem's listing order.
pub fn list_pngs(dir: &Path) -> Result<Vec<PngEntry>, HarnessError> {
    let mut entries = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| HarnessError::FilesystemError {
            path: dir.to_path_buf(),
            source: e
                .into_io_error()
                .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "directory walk failed")),
        })?;

        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if !is_png_name(&name) {
            continue;
        }
        entries.push(PngEntry {
            path: entry.into_path(),
            name,
        });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn filters_to_png_suffix_case_sensitive() {
        assert!(is_png_name("a.png"));
        assert!(is_png_name("weird.name.png"));
        assert!(!is_png_name("a.PNG"));
        assert!(!is_png_name("a.Png"));
        assert!(!is_png_name("notes.txt"));
        assert!(!is_png_name("png"));
    }

    #[test]
    fn lists_only_top_level_png_files_sorted() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.png"), b"x").unwrap();
        fs::write(dir.path().join("a.png"), b"x").unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();
        fs::write(dir.path().join("upper.PNG"), b"x").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("c.png"), b"x").unwrap();

        let entries = list_pngs(dir.path()).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a.png", "b.png"]);
    }

    #[test]
    fn empty_directory_yields_no_entries() {
        let dir = tempdir().unwrap();
        assert!(list_pngs(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_a_filesystem_error() {
        let dir = tempdir().unwrap();
        let gone = dir.path().join("does-not-exist");
        let err = list_pngs(&gone).unwrap_err();
        assert!(matches!(err, HarnessError::FilesystemError { .. }));
    }
}
