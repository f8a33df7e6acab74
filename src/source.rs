use std::io;
use std::path::{Path, PathBuf};

/// Supplies the raw lines of a configuration document, in order.
pub trait LineSource {
    /// # Errors
    ///
    /// Returns [`io::Error`] if the content cannot be read.
    fn content(&self) -> io::Result<Vec<String>>;
}

impl<T: AsRef<str>> LineSource for [T] {
    fn content(&self) -> io::Result<Vec<String>> {
        Ok(self.iter().map(|l| l.as_ref().to_owned()).collect())
    }
}

impl<T: AsRef<str>, const N: usize> LineSource for [T; N] {
    fn content(&self) -> io::Result<Vec<String>> {
        self.as_slice().content()
    }
}

impl<T: AsRef<str>> LineSource for Vec<T> {
    fn content(&self) -> io::Result<Vec<String>> {
        self.as_slice().content()
    }
}

/// A whole document; split on `\n` and `\r\n`.
impl LineSource for str {
    fn content(&self) -> io::Result<Vec<String>> {
        Ok(self.lines().map(str::to_owned).collect())
    }
}

/// Reads a configuration document from disk each time it is asked.
#[derive(Debug, Clone)]
pub struct FileReader {
    path: PathBuf,
}

impl FileReader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSource for FileReader {
    fn content(&self) -> io::Result<Vec<String>> {
        let text = std::fs::read_to_string(&self.path)?;
        text.as_str().content()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_and_vec_sources() {
        let lines = ["a = true", "b = false"];
        assert_eq!(lines.content().unwrap(), vec!["a = true", "b = false"]);

        let owned = vec!["x".to_owned()];
        assert_eq!(owned.content().unwrap(), vec!["x"]);
    }

    #[test]
    fn str_source_splits_lines() {
        let doc = "a = true\r\n\n# c\nb = false";
        assert_eq!(
            doc.content().unwrap(),
            vec!["a = true", "", "# c", "b = false"]
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let reader = FileReader::new("/definitely/not/here.toggles");
        let err = reader.content().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
