use crate::codec::{self, EXPORT_FILTER};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::note_store::NoteStore;
use crate::transfer::FileTransfer;
use log::{info, warn};

/// Replace the whole collection with the contents of a file chosen through `transfer`.
///
/// The file is read and decoded before the store is touched, so a read or
/// format failure leaves the collection and selection as they were.
pub fn run<B: StorageBackend>(
    store: &mut NoteStore<B>,
    transfer: &dyn FileTransfer,
) -> Result<CmdResult> {
    let Some(source) = transfer.pick_open_target(&EXPORT_FILTER)? else {
        return Ok(CmdResult::cancelled("Import cancelled."));
    };

    let text = transfer.read_text(&source)?;
    let notes = codec::deserialize(&text).inspect_err(|e| {
        warn!("rejected import from {}: {}", source.display(), e);
    })?;
    let count = notes.len();
    store.replace_all(notes)?;
    info!("imported {} notes from {}", count, source.display());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Imported {} notes from {}",
        count,
        source.display()
    )));
    Ok(result)
}
