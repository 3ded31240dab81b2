use crate::codec::{self, EXPORT_FILTER};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::interact::Notify;
use crate::store::backend::StorageBackend;
use crate::store::note_store::NoteStore;
use crate::transfer::FileTransfer;
use log::info;

/// Write the whole collection to a file chosen through `transfer`.
pub fn run<B: StorageBackend>(
    store: &NoteStore<B>,
    transfer: &dyn FileTransfer,
    notifier: &dyn Notify,
) -> Result<CmdResult> {
    let Some(target) = transfer.pick_save_target(&EXPORT_FILTER)? else {
        return Ok(CmdResult::cancelled("Export cancelled."));
    };
    let target = EXPORT_FILTER.apply_to(target);

    let text = codec::serialize(store.notes())?;
    transfer.write_text(&target, &text)?;
    info!("exported {} notes to {}", store.len(), target.display());

    notifier.notify(&format!(
        "Your notes have been successfully saved in {} file.",
        target.display()
    ));

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} notes to {}",
        store.len(),
        target.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotesError;
    use crate::interact::MemNotifier;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::transfer::MemTransfer;

    #[test]
    fn writes_serialized_collection_and_notifies() {
        let store = StoreFixture::new().with_notes(2).build();
        let transfer = MemTransfer::new(Some("backup.json"));
        let notifier = MemNotifier::new();

        let res = run(&store, &transfer, &notifier).unwrap();

        assert_eq!(
            transfer.file("backup.json").unwrap(),
            codec::serialize(store.notes()).unwrap()
        );
        assert_eq!(
            notifier.messages(),
            vec!["Your notes have been successfully saved in backup.json file."]
        );
        assert!(res.messages[0].content.contains("Exported 2 notes"));
    }

    #[test]
    fn appends_json_extension() {
        let store = StoreFixture::new().with_notes(1).build();
        let transfer = MemTransfer::new(Some("backup"));
        run(&store, &transfer, &MemNotifier::new()).unwrap();
        assert!(transfer.file("backup.json").is_some());
    }

    #[test]
    fn cancelled_picker_writes_nothing() {
        let store = StoreFixture::new().with_notes(1).build();
        let transfer = MemTransfer::new(None);
        let notifier = MemNotifier::new();

        let res = run(&store, &transfer, &notifier).unwrap();
        assert!(res.cancelled);
        assert!(notifier.messages().is_empty());
    }

    #[test]
    fn write_failure_is_io_error_without_notification() {
        let store = StoreFixture::new().with_notes(1).build();
        let transfer = MemTransfer::new(Some("backup.json")).failing_writes();
        let notifier = MemNotifier::new();

        let err = run(&store, &transfer, &notifier).unwrap_err();
        assert!(matches!(err, NotesError::Io(_)));
        assert!(notifier.messages().is_empty());
    }
}
