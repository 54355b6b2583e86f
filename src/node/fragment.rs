//! Fragment node type
//!
//! The smallest unit of document source: a piece of text plus the knowledge
//! of whether it still needs escaping before emission.

use std::fmt;

use crate::escape::escape_latex;

use super::Command;

// =============================================================================
// Fragment
// =============================================================================

/// An immutable piece of LaTeX source.
///
/// Text fragments are escaped at render time; raw fragments are already
/// valid LaTeX and pass through verbatim. Plain strings convert to text
/// fragments, so raw output is always an explicit choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Fragment content
    pub content: String,
    /// Whether the content skips escaping on render
    pub raw: bool,
}

impl Fragment {
    /// Create a text fragment, escaped when rendered
    pub fn text(content: impl Into<String>) -> Self {
        Self { content: content.into(), raw: false }
    }

    /// Create a raw fragment, emitted verbatim
    pub fn raw(content: impl Into<String>) -> Self {
        Self { content: content.into(), raw: true }
    }

    /// Check if the content skips escaping
    pub fn is_raw(&self) -> bool {
        self.raw
    }

    /// Check if the content is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Content length in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Render to LaTeX source, escaping text fragments
    pub fn render(&self) -> String {
        if self.raw {
            self.content.clone()
        } else {
            escape_latex(&self.content)
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for Fragment {
    fn from(s: &str) -> Self {
        Self::text(s)
    }
}

impl From<String> for Fragment {
    fn from(s: String) -> Self {
        Self::text(s)
    }
}

impl From<Command> for Fragment {
    fn from(cmd: Command) -> Self {
        Self::raw(cmd.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_fragment_escapes() {
        let f = Fragment::text("50% done");
        assert!(!f.is_raw());
        assert_eq!(f.render(), r"50\% done");
    }

    #[test]
    fn test_raw_fragment_verbatim() {
        let f = Fragment::raw("c_B^2");
        assert!(f.is_raw());
        assert_eq!(f.render(), "c_B^2");
    }

    #[test]
    fn test_from_str_is_text() {
        let f = Fragment::from("a_b");
        assert!(!f.is_raw());
        assert_eq!(f.render(), r"a\_b");
    }

    #[test]
    fn test_from_command_is_raw() {
        let f = Fragment::from(Command::new("frac").arg(Fragment::raw("x")).arg(Fragment::raw("y")));
        assert!(f.is_raw());
        assert_eq!(f.content, r"\frac{x}{y}");
    }
}
