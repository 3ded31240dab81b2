use super::prompt::{ConsoleNotifier, PromptTransfer, StdinConfirm};
use super::render::{print_full_note, print_messages, print_note_list};
use super::setup::Commands;
use super::shell;
use anyhow::{bail, Result};
use mynotesapp::commands::update::NoteUpdate;
use mynotesapp::store::fs_backend::FsBackend;
use mynotesapp::NotesApi;
use std::path::PathBuf;

pub(super) type Api = NotesApi<FsBackend>;

pub(super) fn dispatch(api: &mut Api, command: Commands) -> Result<()> {
    match command {
        Commands::List => handle_list(api),
        Commands::Add { title, content } => handle_add(api, title, content),
        Commands::View { number } => handle_view(api, number),
        Commands::Edit {
            number,
            title,
            content,
        } => handle_edit(api, number, NoteUpdate { title, content }),
        Commands::Delete { number } => handle_delete(api, number),
        Commands::Export { path } => handle_export(api, path),
        Commands::Import { path } => handle_import(api, path),
        Commands::Shell => shell::run(api),
    }
}

/// Turn a 1-based note number into a store position.
pub(super) fn position(api: &Api, number: usize) -> Result<usize> {
    let len = api.store().len();
    if number == 0 || number > len {
        match len {
            0 => bail!("There are no notes"),
            1 => bail!("No note {} (there is only note 1)", number),
            _ => bail!("No note {} (notes are numbered 1 to {})", number, len),
        }
    }
    Ok(number - 1)
}

pub(super) fn handle_list(api: &Api) -> Result<()> {
    let result = api.list_notes();
    print_note_list(&result.listed_notes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(api: &mut Api, title: Option<String>, content: Option<String>) -> Result<()> {
    let result = api.create_note(title.as_deref(), content.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_view(api: &mut Api, number: usize) -> Result<()> {
    let index = position(api, number)?;
    let result = api.select_note(index)?;
    for note in &result.listed_notes {
        print_full_note(note);
    }
    Ok(())
}

fn handle_edit(api: &mut Api, number: usize, update: NoteUpdate) -> Result<()> {
    if update.is_empty() {
        bail!("Nothing to change: pass --title and/or --content");
    }
    let index = position(api, number)?;
    let result = api.edit_note(index, &update)?;
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_delete(api: &mut Api, number: usize) -> Result<()> {
    let index = position(api, number)?;
    let result = api.delete_note(index, &StdinConfirm)?;
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_export(api: &Api, path: Option<PathBuf>) -> Result<()> {
    let result = api.export_notes(&PromptTransfer::new(path), &ConsoleNotifier)?;
    // On success the notifier has already told the user where the file went.
    if result.cancelled {
        print_messages(&result.messages);
    }
    Ok(())
}

pub(super) fn handle_import(api: &mut Api, path: Option<PathBuf>) -> Result<()> {
    let result = api.import_notes(&PromptTransfer::new(path))?;
    print_messages(&result.messages);
    Ok(())
}
