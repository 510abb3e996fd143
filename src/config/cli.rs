use crate::utils::error::Result;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Where the pasted text comes from: a file, or standard input when no path is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    File(PathBuf),
    Stdin,
}

impl TextSource {
    pub fn new(path: Option<&str>) -> Self {
        match path {
            Some(path) if path != "-" => TextSource::File(PathBuf::from(path)),
            _ => TextSource::Stdin,
        }
    }

    pub fn read_text(&self) -> Result<String> {
        match self {
            TextSource::File(path) => {
                tracing::debug!("Reading pasted text from {}", path.display());
                Ok(fs::read_to_string(path)?)
            }
            TextSource::Stdin => {
                tracing::debug!("Reading pasted text from stdin");
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_dash_means_stdin() {
        assert_eq!(TextSource::new(Some("-")), TextSource::Stdin);
        assert_eq!(TextSource::new(None), TextSource::Stdin);
    }

    #[test]
    fn test_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all("Población total 6,822".as_bytes()).unwrap();

        let source = TextSource::new(file.path().to_str());
        assert_eq!(source.read_text().unwrap(), "Población total 6,822");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = TextSource::new(Some("/nonexistent/place-indicators/input.txt"));
        let err = source.read_text().unwrap_err();
        assert_eq!(err.kind(), crate::utils::error::ErrorKind::Io);
    }
}
