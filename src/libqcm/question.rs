use crate::error::{Error, Result};
use crate::fichier;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub id: i64,
    pub question: String,
    pub options: Vec<String>,
    /// Zero-based indices into `options`, kept in the order given.
    pub correct_answers: Vec<usize>,
    pub explanation: Option<String>,
}

impl QuestionRecord {
    pub fn is_correct(&self, index: usize) -> bool {
        self.correct_answers.contains(&index)
    }

    /// `None` when missing or empty.
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref().filter(|e| !e.is_empty())
    }

    /// Entries of `correct_answers` that point past the last option.
    pub fn out_of_range_answers(&self) -> Vec<usize> {
        self.correct_answers
            .iter()
            .copied()
            .filter(|&i| i >= self.options.len())
            .collect()
    }
}

/// Display letter of an option: `A` for 0, `B` for 1 and so on by code
/// point. Indices past 25 keep counting (`[`, `\`, ...).
pub fn letter(index: usize) -> char {
    u32::try_from(index)
        .ok()
        .and_then(|i| 65u32.checked_add(i))
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

pub fn parse(path: &Path, json: &str) -> Result<Vec<QuestionRecord>> {
    serde_json::from_str(json).map_err(|source| Error::MalformedJson {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load(path: &Path) -> Result<Vec<QuestionRecord>> {
    let json = fichier::read_to_string(path)?;
    let questions = parse(path, &json)?;
    debug!("[Question] Loaded {} questions from {:?}", questions.len(), path);
    Ok(questions)
}
