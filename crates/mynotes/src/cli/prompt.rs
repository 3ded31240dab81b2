//! Terminal implementations of the library's collaborator traits.
//!
//! All of them read answers line by line from stdin, the same stream the
//! shell reads its commands from, so scripted sessions can answer prompts
//! inline.

use super::styles;
use log::{info, warn};
use mynotesapp::interact::{Confirm, Notify};
use mynotesapp::transfer::{FileFilter, FileTransfer, FixedPathTransfer};
use mynotesapp::Result;
use std::io::{self, stdin, stdout, Write};
use std::path::{Path, PathBuf};

/// Print `prompt` and read one line. `None` means stdin is exhausted.
pub(super) fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{}", styles::PROMPT.apply_to(prompt));
    stdout().flush()?;

    let mut input = String::new();
    if stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
}

fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Yes/no question on stdin. End of input counts as "no".
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, message: &str) -> bool {
        println!("{}", message);
        loop {
            match read_line("[y/n] ") {
                Ok(Some(answer)) => match parse_yes_no(&answer) {
                    Some(yes) => return yes,
                    None => println!("Please answer y or n."),
                },
                Ok(None) => return false,
                Err(e) => {
                    warn!("could not read confirmation: {}", e);
                    return false;
                }
            }
        }
    }
}

/// File picker that uses a path given on the command line, or asks for one.
/// An empty answer cancels.
pub struct PromptTransfer {
    preset: Option<PathBuf>,
    io: FixedPathTransfer,
}

impl PromptTransfer {
    pub fn new(preset: Option<PathBuf>) -> Self {
        Self {
            preset,
            io: FixedPathTransfer::new(None),
        }
    }

    fn pick(&self, verb: &str, filter: &FileFilter) -> Result<Option<PathBuf>> {
        if let Some(path) = &self.preset {
            return Ok(Some(path.clone()));
        }
        let prompt = format!(
            "{} ({} file, empty to cancel): ",
            verb,
            filter.extensions.join("/")
        );
        let answer = read_line(&prompt)?.unwrap_or_default();
        let answer = answer.trim();
        if answer.is_empty() {
            Ok(None)
        } else {
            Ok(Some(PathBuf::from(answer)))
        }
    }
}

impl FileTransfer for PromptTransfer {
    fn pick_save_target(&self, filter: &FileFilter) -> Result<Option<PathBuf>> {
        self.pick("Save notes to", filter)
    }

    fn pick_open_target(&self, filter: &FileFilter) -> Result<Option<PathBuf>> {
        self.pick("Load notes from", filter)
    }

    fn write_text(&self, path: &Path, text: &str) -> Result<()> {
        self.io.write_text(path, text)
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        self.io.read_text(path)
    }
}

pub struct ConsoleNotifier;

impl Notify for ConsoleNotifier {
    fn notify(&self, message: &str) {
        info!("notification: {}", message);
        println!("{}", styles::SUCCESS.apply_to(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mynotesapp::codec::EXPORT_FILTER;

    #[test]
    fn yes_no_answers() {
        assert_eq!(parse_yes_no("y"), Some(true));
        assert_eq!(parse_yes_no(" YES "), Some(true));
        assert_eq!(parse_yes_no("No"), Some(false));
        assert_eq!(parse_yes_no("maybe"), None);
        assert_eq!(parse_yes_no(""), None);
    }

    #[test]
    fn preset_path_skips_prompt() {
        let transfer = PromptTransfer::new(Some(PathBuf::from("out.json")));
        assert_eq!(
            transfer.pick_save_target(&EXPORT_FILTER).unwrap(),
            Some(PathBuf::from("out.json"))
        );
        assert_eq!(
            transfer.pick_open_target(&EXPORT_FILTER).unwrap(),
            Some(PathBuf::from("out.json"))
        );
    }

    #[test]
    fn reads_and_writes_real_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        let transfer = PromptTransfer::new(Some(path.clone()));

        transfer.write_text(&path, "[]").unwrap();
        assert_eq!(transfer.read_text(&path).unwrap(), "[]");
    }
}
