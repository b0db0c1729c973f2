use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Files produced by one case, found under `<root>/<suite>/<name>`.
///
/// Any case may lack artifacts, so an unset root, a missing directory or an
/// unreadable one all give an empty list.
pub fn files_for_case(root: Option<&str>, suite: &str, name: &str) -> Vec<String> {
    let root = match root {
        Some(root) => root,
        None => return Vec::new(),
    };
    let dir = match case_directory(root, suite, name) {
        Some(dir) => dir,
        None => {
            info!("tesults-files has invalid characters in path");
            return Vec::new();
        }
    };
    match list_files(&dir) {
        Ok(files) => files,
        Err(err) => {
            trace!("No files for {}/{} in {}: {}", suite, name, dir.display(), err);
            Vec::new()
        }
    }
}

fn case_directory(root: &str, suite: &str, name: &str) -> Option<PathBuf> {
    let segments = [root, suite, name];
    if segments.iter().any(|segment| segment.contains('\0')) {
        return None;
    }
    Some(Path::new(root).join(suite).join(name))
}

fn list_files(dir: &Path) -> io::Result<Vec<String>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path.display().to_string());
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_root_has_no_files() {
        assert!(files_for_case(None, "MathTests", "Adds").is_empty());
    }

    #[test]
    fn test_missing_directory_has_no_files() {
        let root = tempfile::tempdir().unwrap();
        let root_path = root.path().display().to_string();
        assert!(files_for_case(Some(&root_path), "MathTests", "Adds").is_empty());
    }

    #[test]
    fn test_lists_only_immediate_files() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("MathTests").join("Adds");
        fs::create_dir_all(dir.join("nested")).unwrap();
        fs::write(dir.join("screenshot.png"), b"png").unwrap();
        fs::write(dir.join("output.log"), b"log").unwrap();
        fs::write(dir.join("nested").join("deep.txt"), b"deep").unwrap();

        let root_path = root.path().display().to_string();
        let files = files_for_case(Some(&root_path), "MathTests", "Adds");
        assert_eq!(
            files,
            vec![
                dir.join("output.log").display().to_string(),
                dir.join("screenshot.png").display().to_string(),
            ]
        );
    }

    #[test]
    fn test_invalid_characters_have_no_files() {
        let root = tempfile::tempdir().unwrap();
        let root_path = root.path().display().to_string();
        assert!(files_for_case(Some(&root_path), "Math\0Tests", "Adds").is_empty());
        assert_eq!(case_directory(&root_path, "MathTests", "Ad\0ds"), None);
    }
}
