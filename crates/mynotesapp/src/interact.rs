//! User-facing collaborators the library calls out to but never implements
//! against a terminal: the yes/no prompt guarding delete, and the
//! fire-and-forget notification sent after a successful export.

use std::cell::{Cell, RefCell};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this note?";

pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

pub trait Notify {
    /// Must not block; the caller never waits on delivery.
    fn notify(&self, message: &str);
}

/// Answers yes without asking (`--yes`, or `confirm_delete = false`).
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

pub struct NeverConfirm;

impl Confirm for NeverConfirm {
    fn confirm(&self, _message: &str) -> bool {
        false
    }
}

/// Records prompts and notifications for tests.
#[derive(Default)]
pub struct MemNotifier {
    messages: RefCell<Vec<String>>,
}

impl MemNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notify for MemNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// A scripted prompt that gives a fixed answer and counts how often it was asked.
pub struct ScriptedConfirm {
    answer: bool,
    asked: Cell<usize>,
}

impl ScriptedConfirm {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: Cell::new(0),
        }
    }

    pub fn times_asked(&self) -> usize {
        self.asked.get()
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&self, _message: &str) -> bool {
        self.asked.set(self.asked.get() + 1);
        self.answer
    }
}
