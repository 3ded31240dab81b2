use crate::error::Result;
use crate::model::Note;

/// Abstract interface for the durable notes slot.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while NoteStore handles the "what" (ordering, selection, drafts).
pub trait StorageBackend {
    /// Load the stored collection.
    /// Returns Ok(None) when nothing has been stored yet.
    fn load(&self) -> Result<Option<Vec<Note>>>;

    /// Replace the stored collection.
    /// MUST be atomic so a crash never leaves a half-written collection.
    fn save(&self, notes: &[Note]) -> Result<()>;
}
