use crate::error::{Error, Result};
use log::debug;
use std::path::{Path, PathBuf};

pub const QUESTIONS_JSON: &str = "src/assets/questions.json";
pub const RAPPORT_TXT: &str = "questions_reponses.txt";
pub const MOTS_CLES_TXT: &str = "mots_cles_qcm.txt";
pub const ANTISECHE_HTML: &str = "cheatsheet.html";

/// Where a tool reads from and writes to. Relative paths resolve against
/// the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Paths {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    pub fn exportateur() -> Self {
        Self::new(QUESTIONS_JSON, RAPPORT_TXT)
    }

    pub fn antiseche() -> Self {
        Self::new(MOTS_CLES_TXT, ANTISECHE_HTML)
    }
}

pub fn read_to_string(path: &Path) -> Result<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            debug!("[Fichier] Read {} bytes from {:?}", content.len(), path);
            Ok(content)
        }
        Err(source) => Err(Error::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Writes the complete document in one call, replacing any existing file.
pub fn write(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("[Fichier] Wrote {} bytes to {:?}", contents.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn defaults_match_historical_locations() {
        let paths = Paths::exportateur();
        assert_eq!(paths.input, PathBuf::from("src/assets/questions.json"));
        assert_eq!(paths.output, PathBuf::from("questions_reponses.txt"));

        let paths = Paths::antiseche();
        assert_eq!(paths.input, PathBuf::from("mots_cles_qcm.txt"));
        assert_eq!(paths.output, PathBuf::from("cheatsheet.html"));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = read_to_string(Path::new("does/not/exist.txt")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Read);
    }
}
