use std::collections::VecDeque;

use super::{Command, CommandResult};
use crate::document::{Document, Snapshot};

/// Oldest snapshots are dropped once this many are stored.
pub const HISTORY_CAPACITY: usize = 100;

/// Undo/redo over whole-document snapshots.
///
/// A snapshot is pushed right before each mutating gesture or command;
/// pushing one starts a new branch and forgets anything that could be redone.
#[derive(Debug)]
pub struct CommandHistory {
    /// Stack of states that can be restored by undo, oldest first
    undo_stack: VecDeque<Snapshot>,
    /// Stack of states that can be restored by redo
    redo_stack: Vec<Snapshot>,
    capacity: usize,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHistory {
    /// Creates a new empty command history
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Remember the document as it is now, before it gets mutated.
    pub fn record(&mut self, document: &Document) {
        self.push(document.snapshot());
    }

    /// Push a snapshot taken earlier, e.g. at pointer-down of a gesture that
    /// only turned out to mutate once the pointer moved.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.undo_stack.push_back(snapshot);
        if self.undo_stack.len() > self.capacity {
            self.undo_stack.pop_front();
        }
        self.redo_stack.clear();
    }

    /// Validate, snapshot and run a command.
    pub fn execute(&mut self, command: Command, document: &mut Document) -> CommandResult {
        command.validate(document)?;
        log::debug!("Executing command: {}", command.name());
        self.record(document);
        command.execute(document);
        Ok(())
    }

    /// Restore the previous state. Returns false when there is nothing to undo.
    pub fn undo(&mut self, document: &mut Document) -> bool {
        let Some(previous) = self.undo_stack.pop_back() else {
            return false;
        };
        self.redo_stack.push(document.snapshot());
        document.restore(previous);
        log::debug!("Undo ({} left)", self.undo_stack.len());
        true
    }

    /// Re-apply the last undone state. Returns false when there is nothing to redo.
    pub fn redo(&mut self, document: &mut Document) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        self.undo_stack.push_back(document.snapshot());
        document.restore(next);
        log::debug!("Redo ({} left)", self.redo_stack.len());
        true
    }

    /// Returns true if there are states that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are states that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Clear the command history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Shape, ShapeKind};

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = CommandHistory::with_capacity(3);
        let mut doc = Document::default();
        for x in 0..5 {
            history.record(&doc);
            doc.insert(Shape::new(ShapeKind::Filled, 0, x, 0, 1, 1));
        }
        assert_eq!(history.undo_len(), 3);
        while history.undo(&mut doc) {}
        // The two oldest states are gone, so undo bottoms out after three steps.
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_undo_on_empty_is_noop() {
        let mut history = CommandHistory::new();
        let mut doc = Document::default();
        doc.insert(Shape::new(ShapeKind::Outline, 1, 0, 0, 1, 1));
        let before = doc.clone();
        assert!(!history.undo(&mut doc));
        assert!(!history.redo(&mut doc));
        assert_eq!(doc, before);
    }
}
