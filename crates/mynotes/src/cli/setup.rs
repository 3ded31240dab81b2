use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mynotes", bin_name = "mynotes", version)]
#[command(about = "A small personal note-taking tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the notes file
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Config file to use instead of the default mynotes.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Do not ask for confirmation
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List notes (default if no command)
    #[command(alias = "ls")]
    List,

    /// Create a new note at the top of the list
    #[command(alias = "n")]
    Add {
        /// Title of the note
        #[arg(short, long)]
        title: Option<String>,

        /// Content of the note
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Show a note
    View {
        /// Number of the note, as shown by `list`
        number: usize,
    },

    /// Edit a note's title and/or content
    Edit {
        /// Number of the note, as shown by `list`
        number: usize,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New content
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Delete a note
    #[command(alias = "rm")]
    Delete {
        /// Number of the note, as shown by `list`
        number: usize,
    },

    /// Export all notes to a JSON file
    Export {
        /// Target file (asks when omitted)
        path: Option<PathBuf>,
    },

    /// Replace all notes with the contents of a JSON file
    Import {
        /// Source file (asks when omitted)
        path: Option<PathBuf>,
    },

    /// Start an interactive session
    Shell,
}
