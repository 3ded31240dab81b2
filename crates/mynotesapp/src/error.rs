use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotesError {
    /// The text handed to the importer is not a list of `{title, content}` records.
    #[error("Invalid notes file: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Note index {index} is out of range (collection has {len} notes)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("No note is selected")]
    NoSelection,

    #[error("Config error: {0}")]
    Config(String),
}

impl NotesError {
    pub fn is_format(&self) -> bool {
        matches!(self, NotesError::Format(_))
    }
}

pub type Result<T> = std::result::Result<T, NotesError>;
