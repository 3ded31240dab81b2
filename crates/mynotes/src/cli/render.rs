use super::styles;
use mynotesapp::commands::{CmdMessage, IndexedNote, MessageLevel};
use mynotesapp::Draft;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const ACTIVE_MARKER: &str = "▸";
const PREVIEW_CHARS: usize = 40;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        let style = match message.level {
            MessageLevel::Info => &*styles::INFO,
            MessageLevel::Success => &*styles::SUCCESS,
            MessageLevel::Warning => &*styles::WARNING,
            MessageLevel::Error => &*styles::ERROR,
        };
        println!("{}", style.apply_to(&message.content));
    }
}

pub(super) fn print_note_list(notes: &[IndexedNote]) {
    for line in notes.iter().map(note_line) {
        println!("{}", line);
    }
}

pub(super) fn print_full_note(note: &IndexedNote) {
    let heading = format!("{}. {}", note.index + 1, note.note.title);
    println!(
        "{} {}",
        styles::INDEX.apply_to(format!("{}.", note.index + 1)),
        styles::TITLE.apply_to(&note.note.title)
    );
    println!("{}", styles::RULE.apply_to("-".repeat(heading.width().min(LINE_WIDTH))));
    println!("{}", note.note.content);
}

/// The editor pane of the shell: what the draft currently holds.
pub(super) fn print_draft(active: Option<usize>, draft: &Draft) {
    match active {
        Some(index) => println!(
            "{} {}",
            styles::ACTIVE.apply_to(format!("[{}]", index + 1)),
            styles::TITLE.apply_to(&draft.title)
        ),
        None => println!("{}", styles::INFO.apply_to("[no note selected]")),
    }
    if !draft.content.is_empty() {
        println!("{}", draft.content);
    }
}

fn note_line(item: &IndexedNote) -> String {
    let marker = if item.active { ACTIVE_MARKER } else { " " };
    let idx = format!("{}. ", item.index + 1);

    let preview: String = item
        .note
        .content
        .chars()
        .take(PREVIEW_CHARS)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();

    let fixed = marker.width() + 1 + idx.width();
    let title = truncate_to_width(&item.note.title, LINE_WIDTH.saturating_sub(fixed));
    let remaining = LINE_WIDTH.saturating_sub(fixed + title.width() + 1);
    let preview = truncate_to_width(&preview, remaining);

    let title = if item.active {
        styles::ACTIVE.apply_to(title).to_string()
    } else {
        styles::TITLE.apply_to(title).to_string()
    };

    let mut line = format!("{} {}{}", marker, styles::INDEX.apply_to(idx), title);
    if !preview.is_empty() {
        line.push(' ');
        line.push_str(&styles::PREVIEW.apply_to(preview).to_string());
    }
    line
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    if max_width > 0 {
        result.push('…');
    }
    result
}
