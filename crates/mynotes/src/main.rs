//! # mynotes CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/mynotes/src/cli/)                     │
//! │  - clap argument parsing (setup.rs)                      │
//! │  - dispatch + interactive shell (commands.rs, shell.rs)  │
//! │  - stdin prompts, pickers, notifications (prompt.rs)     │
//! │  - terminal rendering (render.rs, styles.rs)             │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  mynotesapp::NotesApi → commands → NoteStore             │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Users see 1-based note numbers; the library works with 0-based positions.
//! The conversion happens in `commands.rs` and nowhere else.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
