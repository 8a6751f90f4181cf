use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::imaging::OutputFormat;

/// A source image discovered in the input folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputImage {
    /// Full path to the file
    pub path: PathBuf,

    /// File name as listed in the folder
    pub file_name: String,
}

impl InputImage {
    /// Build from a path, or `None` if the extension is not accepted
    pub fn from_path<P: Into<PathBuf>>(path: P, extensions: &[String]) -> Option<Self> {
        let path = path.into();
        if !is_accepted(&path, extensions) {
            return None;
        }

        let file_name = path.file_name()?.to_string_lossy().into_owned();
        Some(Self { path, file_name })
    }

    /// Name of the composite written for this input: the file stem with the
    /// output format's extension.
    pub fn output_file_name(&self, format: OutputFormat) -> OsString {
        output_file_name(&self.path, format)
    }
}

/// Case-insensitive check of the file extension against `extensions`
pub fn is_accepted(path: &Path, extensions: &[String]) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => extensions.iter().any(|accepted| accepted.eq_ignore_ascii_case(ext)),
        None => false,
    }
}

/// Strip the last extension of `path` and append the one for `format`
///
/// The stem is kept byte for byte, including names that are not valid UTF-8.
pub fn output_file_name(path: &Path, format: OutputFormat) -> OsString {
    let file_name = path.file_name().unwrap_or_default();
    Path::new(file_name)
        .with_extension(format.extension())
        .into_os_string()
}

/// List the accepted image files in `directory`, sorted by file name
///
/// Only regular files count; a directory named `something.png` is skipped.
pub fn discover_inputs(directory: &Path, extensions: &[String]) -> Result<Vec<InputImage>> {
    let mut inputs = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if !entry.file_type()?.is_file() && !path.is_file() {
            continue;
        }

        match InputImage::from_path(path, extensions) {
            Some(input) => inputs.push(input),
            None => debug!("Skipping {:?}: unsupported extension", entry.file_name()),
        }
    }

    inputs.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn extensions() -> Vec<String> {
        vec!["png".to_string(), "jpeg".to_string(), "jpg".to_string()]
    }

    #[test]
    fn test_extension_matching_ignores_case() {
        let exts = extensions();

        assert!(is_accepted(Path::new("a.png"), &exts));
        assert!(is_accepted(Path::new("a.PNG"), &exts));
        assert!(is_accepted(Path::new("a.Jpeg"), &exts));
        assert!(is_accepted(Path::new("dir/a.JPG"), &exts));
        assert!(!is_accepted(Path::new("a.gif"), &exts));
        assert!(!is_accepted(Path::new("a.png.txt"), &exts));
        assert!(!is_accepted(Path::new("png"), &exts));
        assert!(!is_accepted(Path::new(".png"), &exts));
    }

    #[test]
    fn test_output_name_replaces_extension() {
        let cases = [
            ("photo.png", "photo.png"),
            ("photo.PNG", "photo.png"),
            ("photo.jpg", "photo.png"),
            ("photo.JPG", "photo.png"),
            ("photo.jpeg", "photo.png"),
            ("Photo.JpEg", "Photo.png"),
            ("holiday.2024.jpg", "holiday.2024.png"),
        ];

        for (input, expected) in cases {
            assert_eq!(
                output_file_name(Path::new(input), OutputFormat::Png),
                OsString::from(expected)
            );
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_output_name_keeps_non_utf8_stem() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        // Latin-1 "café.jpg"
        let input = Path::new(OsStr::from_bytes(b"caf\xe9.jpg"));
        let output = output_file_name(input, OutputFormat::Png);

        assert_eq!(output.as_bytes(), b"caf\xe9.png");
    }

    #[test]
    fn test_discover_filters_and_sorts() {
        let dir = tempdir().unwrap();
        for name in ["c.jpg", "a.PNG", "b.jpeg", "notes.txt", "README"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        std::fs::create_dir(dir.path().join("folder.png")).unwrap();

        let inputs = discover_inputs(dir.path(), &extensions()).unwrap();
        let names: Vec<&str> = inputs.iter().map(|i| i.file_name.as_str()).collect();

        assert_eq!(names, vec!["a.PNG", "b.jpeg", "c.jpg"]);
        assert_eq!(inputs[0].path, dir.path().join("a.PNG"));
        assert_eq!(inputs[0].output_file_name(OutputFormat::Png), OsString::from("a.png"));
    }

    #[test]
    fn test_discover_missing_directory_fails() {
        let dir = tempdir().unwrap();
        assert!(discover_inputs(&dir.path().join("nope"), &extensions()).is_err());
    }
}
