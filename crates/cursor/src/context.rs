// Chunk: docs/chunks/cursor_engine - Cursor and selection engine
//!
//! Read-only context handed to movement and command code.
//!
//! Commands never hold on to the model or configuration between calls; they
//! receive this context, inspect the buffer through it, and describe their
//! edits to a builder. The controller owns the only mutable access.

use lite_edit_buffer::TextModel;

use crate::config::EditorConfig;
use crate::language::LanguageServices;

/// Borrowed view of everything a command may consult.
pub struct EditContext<'a> {
    /// The buffer as it is before the command's edits
    pub model: &'a dyn TextModel,
    /// Current configuration, re-read on every command
    pub config: &'a EditorConfig,
    /// Optional language capabilities
    pub language: &'a LanguageServices,
}

impl<'a> EditContext<'a> {
    pub fn new(
        model: &'a dyn TextModel,
        config: &'a EditorConfig,
        language: &'a LanguageServices,
    ) -> Self {
        Self {
            model,
            config,
            language,
        }
    }

    /// The tab size, never zero.
    pub fn tab_size(&self) -> usize {
        self.config.tab_size()
    }
}
