//! Interactive session.
//!
//! The shell plays the part of a note-taking window: the list on one side,
//! the editor holding the draft on the other. Each input line is one user
//! event, handled to completion before the next line is read.

use super::commands::{handle_delete, handle_export, handle_import, handle_list, position, Api};
use super::prompt::read_line;
use super::render::{print_draft, print_messages};
use super::styles;
use anyhow::Result;
use mynotesapp::commands::update::NoteUpdate;
use mynotesapp::commands::CmdMessage;
use std::path::PathBuf;

const HELP: &str = "\
list              show all notes
new               create a note at the top
select N          open note N in the editor
title TEXT        rename the open note
content TEXT      replace the open note's text (\\n for a line break)
show              show the editor
delete N          delete note N
export [PATH]     save all notes to a JSON file
import [PATH]     replace all notes from a JSON file
help              show this help
quit              leave the shell";

#[derive(Debug, PartialEq, Eq)]
enum Event {
    List,
    New,
    Select(usize),
    Title(String),
    Content(String),
    Show,
    Delete(usize),
    Export(Option<PathBuf>),
    Import(Option<PathBuf>),
    Help,
    Quit,
}

fn parse_event(line: &str) -> std::result::Result<Option<Event>, String> {
    let line = line.trim_start();
    if line.trim().is_empty() {
        return Ok(None);
    }
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim_end();

    let number = |rest: &str| {
        rest.trim()
            .parse::<usize>()
            .map_err(|_| format!("{} expects a note number", word))
    };
    let path = |rest: &str| {
        let rest = rest.trim();
        (!rest.is_empty()).then(|| PathBuf::from(rest))
    };

    let event = match word.trim() {
        "list" | "ls" => Event::List,
        "new" | "add" => Event::New,
        "select" | "open" => Event::Select(number(rest)?),
        "title" => Event::Title(rest.to_string()),
        "content" => Event::Content(rest.replace("\\n", "\n")),
        "show" => Event::Show,
        "delete" | "rm" => Event::Delete(number(rest)?),
        "export" => Event::Export(path(rest)),
        "import" => Event::Import(path(rest)),
        "help" | "?" => Event::Help,
        "quit" | "exit" | "q" => Event::Quit,
        other => return Err(format!("Unknown command: {} (try help)", other)),
    };
    Ok(Some(event))
}

pub(super) fn run(api: &mut Api) -> Result<()> {
    println!("{}", styles::INFO.apply_to("Type help for commands."));
    handle_list(api)?;

    while let Some(line) = read_line("mynotes> ")? {
        let event = match parse_event(&line) {
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(msg) => {
                print_messages(&[CmdMessage::error(msg)]);
                continue;
            }
        };
        if event == Event::Quit {
            break;
        }
        // A failed event is reported and the session goes on.
        if let Err(e) = handle_event(api, event) {
            print_messages(&[CmdMessage::error(format!("Error: {}", e))]);
        }
    }
    Ok(())
}

fn handle_event(api: &mut Api, event: Event) -> Result<()> {
    match event {
        Event::List => handle_list(api),
        Event::New => {
            let result = api.create_note(None, None)?;
            print_messages(&result.messages);
            show(api);
            Ok(())
        }
        Event::Select(number) => {
            let index = position(api, number)?;
            api.select_note(index)?;
            show(api);
            Ok(())
        }
        Event::Title(text) => edit(api, NoteUpdate::title(text)),
        Event::Content(text) => edit(api, NoteUpdate::content(text)),
        Event::Show => {
            show(api);
            Ok(())
        }
        Event::Delete(number) => {
            handle_delete(api, number)?;
            handle_list(api)
        }
        Event::Export(path) => handle_export(api, path),
        Event::Import(path) => {
            handle_import(api, path)?;
            handle_list(api)
        }
        Event::Help => {
            println!("{}", HELP);
            Ok(())
        }
        Event::Quit => Ok(()),
    }
}

fn edit(api: &mut Api, update: NoteUpdate) -> Result<()> {
    let result = api.update_active(&update)?;
    print_messages(&result.messages);
    Ok(())
}

fn show(api: &Api) {
    print_draft(api.store().active_index(), api.store().draft());
}
