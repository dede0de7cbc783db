//! Shared pieces of the QCM tooling: the question bank model, the text
//! report, the keyword cheatsheet and the whole-file I/O around them.

pub mod antiseche;
pub mod error;
pub mod fichier;
pub mod question;
pub mod rapport;

pub use error::{Error, ErrorKind, Result};
