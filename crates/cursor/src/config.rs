// Chunk: docs/chunks/editor_config - Tab size, indentation and word character settings

//! Editor configuration consulted by the column mapper and indent commands.
//!
//! The configuration is passed into every controller call rather than stored
//! on the controller, so a change between two commands is always picked up.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// User-facing editor settings.
///
/// Deserializes from a partial camelCase JSON object; missing keys take
/// their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    /// Width of a tab stop in visual columns.
    pub tab_size: usize,
    /// Whether indentation is written as spaces rather than tabs.
    pub insert_spaces: bool,
    /// Extra characters treated as part of a word.
    pub word_characters: String,
    /// Whether `Type("\n")` copies and adjusts indentation.
    pub auto_indent: bool,
    /// Whether cutting with an empty selection cuts the whole line.
    pub empty_selection_clipboard: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_size: 4,
            insert_spaces: true,
            word_characters: String::new(),
            auto_indent: true,
            empty_selection_clipboard: true,
        }
    }
}

impl EditorConfig {
    /// Parses a (possibly partial) JSON configuration object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: EditorConfig = serde_json::from_str(json)?;
        config.tab_size = config.tab_size.max(1);
        Ok(config)
    }

    /// The tab size, never zero.
    pub fn tab_size(&self) -> usize {
        self.tab_size.max(1)
    }

    /// Builds indentation text spanning `width` visual columns.
    ///
    /// With `insert_spaces` off, as many tabs as fit are used and the rest is
    /// padded with spaces.
    pub fn indentation_for_width(&self, width: usize) -> String {
        if self.insert_spaces {
            return " ".repeat(width);
        }
        let tab_size = self.tab_size();
        let mut indent = "\t".repeat(width / tab_size);
        indent.push_str(&" ".repeat(width % tab_size));
        indent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.tab_size, 4);
        assert!(config.insert_spaces);
        assert!(config.auto_indent);
        assert!(config.empty_selection_clipboard);
    }

    #[test]
    fn test_from_json_partial() {
        let config = EditorConfig::from_json(r#"{"tabSize": 2, "insertSpaces": false}"#).unwrap();
        assert_eq!(config.tab_size, 2);
        assert!(!config.insert_spaces);
        assert!(config.auto_indent);
    }

    #[test]
    fn test_from_json_zero_tab_size_is_normalized() {
        let config = EditorConfig::from_json(r#"{"tabSize": 0}"#).unwrap();
        assert_eq!(config.tab_size, 1);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(EditorConfig::from_json("{ not json").is_err());
        assert!(EditorConfig::from_json(r#"{"tabSize": "four"}"#).is_err());
    }

    #[test]
    fn test_indentation_for_width() {
        let mut config = EditorConfig::default();
        assert_eq!(config.indentation_for_width(6), "      ");
        config.insert_spaces = false;
        assert_eq!(config.indentation_for_width(6), "\t  ");
        assert_eq!(config.indentation_for_width(8), "\t\t");
    }
}
