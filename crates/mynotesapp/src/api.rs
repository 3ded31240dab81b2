//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every UI (the CLI's one-shot commands and its interactive
//! shell both go through it).
//!
//! The facade:
//! - **Owns** the [`NoteStore`], so exactly one writer exists per process
//! - **Dispatches** to the appropriate command function
//! - **Applies policy** from [`NotesConfig`], e.g. skipping the delete prompt
//!
//! ## Generic Over StorageBackend
//!
//! `NotesApi<B: StorageBackend>` is generic over the persistence adapter:
//! - Production: `NotesApi<FsBackend>`
//! - Testing: `NotesApi<MemBackend>`

use crate::commands::{self, update::NoteUpdate, CmdResult};
use crate::config::NotesConfig;
use crate::error::Result;
use crate::interact::{AlwaysConfirm, Confirm, Notify};
use crate::store::backend::StorageBackend;
use crate::store::fs_backend::FsBackend;
use crate::store::note_store::NoteStore;
use crate::transfer::FileTransfer;

pub struct NotesApi<B: StorageBackend> {
    store: NoteStore<B>,
    confirm_delete: bool,
}

impl<B: StorageBackend> NotesApi<B> {
    pub fn new(store: NoteStore<B>) -> Self {
        Self {
            store,
            confirm_delete: true,
        }
    }

    pub fn with_confirm_delete(mut self, confirm_delete: bool) -> Self {
        self.confirm_delete = confirm_delete;
        self
    }

    pub fn store(&self) -> &NoteStore<B> {
        &self.store
    }

    pub fn list_notes(&self) -> CmdResult {
        commands::list::run(&self.store)
    }

    pub fn create_note(&mut self, title: Option<&str>, content: Option<&str>) -> Result<CmdResult> {
        commands::create::run(&mut self.store, title, content)
    }

    pub fn select_note(&mut self, index: usize) -> Result<CmdResult> {
        commands::select::run(&mut self.store, index)
    }

    pub fn update_active(&mut self, update: &NoteUpdate) -> Result<CmdResult> {
        commands::update::run(&mut self.store, update)
    }

    /// Select the note at `index`, then apply `update` to it.
    pub fn edit_note(&mut self, index: usize, update: &NoteUpdate) -> Result<CmdResult> {
        self.store.select(index)?;
        commands::update::run(&mut self.store, update)
    }

    pub fn delete_note(&mut self, index: usize, confirm: &dyn Confirm) -> Result<CmdResult> {
        if self.confirm_delete {
            commands::delete::run(&mut self.store, index, confirm)
        } else {
            commands::delete::run(&mut self.store, index, &AlwaysConfirm)
        }
    }

    pub fn export_notes(
        &self,
        transfer: &dyn FileTransfer,
        notifier: &dyn Notify,
    ) -> Result<CmdResult> {
        commands::export::run(&self.store, transfer, notifier)
    }

    pub fn import_notes(&mut self, transfer: &dyn FileTransfer) -> Result<CmdResult> {
        commands::import::run(&mut self.store, transfer)
    }
}

impl NotesApi<FsBackend> {
    /// Open the on-disk store described by `config`.
    pub fn from_config(config: &NotesConfig) -> Result<Self> {
        let backend = FsBackend::new(config.data_dir()?).with_file_name(&config.store_file);
        let store = NoteStore::open_with_title(backend, &config.default_title);
        Ok(Self::new(store).with_confirm_delete(config.confirm_delete))
    }
}
