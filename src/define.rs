//! Custom command declarations
//!
//! Builds `\newcommand`-style declarations, detecting the argument count
//! from the `#1`/`#2` placeholders in the body when the caller does not
//! pin it.

use std::sync::LazyLock;

use compact_str::CompactString;
use regex::Regex;

use crate::node::{Fragment, Node};

// -- Placeholder scan: the digit after each `#` --
static RE_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(\d)").expect("valid placeholder regex"));

// =============================================================================
// DefinitionKind
// =============================================================================

/// Which declaration macro to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefinitionKind {
    /// `\newcommand` - errors if the command already exists
    #[default]
    New,
    /// `\renewcommand` - errors if the command does not exist
    Renew,
    /// `\providecommand` - silently keeps an existing definition
    Provide,
}

impl DefinitionKind {
    /// The declaration macro name
    pub fn command_name(self) -> &'static str {
        match self {
            DefinitionKind::New => "newcommand",
            DefinitionKind::Renew => "renewcommand",
            DefinitionKind::Provide => "providecommand",
        }
    }
}

// =============================================================================
// CommandDefinition
// =============================================================================

/// Builder for a custom command declaration.
///
/// Renders as `\newcommand{\name}[n][default]{body}`, with the bracket
/// groups positioned between the name and the body and omitted when not
/// needed. The argument count defaults to the highest placeholder index
/// referenced in the body; a body without placeholders declares a
/// zero-argument command.
///
/// # Example
/// ```
/// use texdom::define::newcommand;
///
/// let decl = newcommand("mycmd", "#1+#2").default_arg("lala");
/// assert_eq!(decl.render(), r"\newcommand{\mycmd}[2][lala]{#1+#2}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDefinition {
    /// Command name without the leading backslash
    pub name: CompactString,
    /// Definition body, placeholders included
    pub body: String,
    /// Explicit argument count; detected from the body when `None`
    pub arity: Option<usize>,
    /// Default value for the first argument
    pub default: Option<String>,
    /// Declaration macro variant
    pub kind: DefinitionKind,
}

impl CommandDefinition {
    /// Start a `\newcommand` declaration
    pub fn new(name: impl Into<CompactString>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
            arity: None,
            default: None,
            kind: DefinitionKind::New,
        }
    }

    /// Pin the argument count instead of detecting it
    pub fn arity(mut self, n: usize) -> Self {
        self.arity = Some(n);
        self
    }

    /// Give the first argument a default value
    pub fn default_arg(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Switch the declaration macro variant
    pub fn kind(mut self, kind: DefinitionKind) -> Self {
        self.kind = kind;
        self
    }

    /// The argument count that will be emitted
    pub fn detected_arity(&self) -> usize {
        self.arity.unwrap_or_else(|| {
            RE_PLACEHOLDER
                .captures_iter(&self.body)
                .filter_map(|captures| captures[1].parse().ok())
                .max()
                .unwrap_or(0)
        })
    }

    /// Render the declaration
    pub fn render(&self) -> String {
        let n = self.detected_arity();
        let mut out = format!("\\{}{{\\{}}}", self.kind.command_name(), self.name);
        match (&self.default, n) {
            (None, 0) => {}
            (None, n) => out.push_str(&format!("[{n}]")),
            (Some(default), n) => out.push_str(&format!("[{n}][{default}]")),
        }
        out.push('{');
        out.push_str(&self.body);
        out.push('}');
        out
    }
}

impl From<CommandDefinition> for Fragment {
    fn from(definition: CommandDefinition) -> Self {
        Fragment::raw(definition.render())
    }
}

impl From<CommandDefinition> for Node {
    fn from(definition: CommandDefinition) -> Self {
        Node::Fragment(definition.into())
    }
}

/// Shorthand for a `\newcommand` declaration.
pub fn newcommand(name: impl Into<CompactString>, body: impl Into<String>) -> CommandDefinition {
    CommandDefinition::new(name, body)
}

/// Shorthand for a `\renewcommand` declaration.
pub fn renewcommand(name: impl Into<CompactString>, body: impl Into<String>) -> CommandDefinition {
    CommandDefinition::new(name, body).kind(DefinitionKind::Renew)
}

/// Shorthand for a `\providecommand` declaration.
pub fn providecommand(name: impl Into<CompactString>, body: impl Into<String>) -> CommandDefinition {
    CommandDefinition::new(name, body).kind(DefinitionKind::Provide)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newcommand_detects_arity_with_default() {
        let decl = newcommand("mycmd", "#1+#2").default_arg("lala");
        assert_eq!(decl.detected_arity(), 2);
        assert_eq!(decl.render(), r"\newcommand{\mycmd}[2][lala]{#1+#2}");
    }

    #[test]
    fn test_newcommand_detects_highest_placeholder() {
        let decl = newcommand("swap", "#2#1");
        assert_eq!(decl.detected_arity(), 2);
        assert_eq!(decl.render(), r"\newcommand{\swap}[2]{#2#1}");
    }

    #[test]
    fn test_newcommand_zero_arity_omits_options() {
        let decl = newcommand("half", r"\frac{1}{2}");
        assert_eq!(decl.detected_arity(), 0);
        assert_eq!(decl.render(), r"\newcommand{\half}{\frac{1}{2}}");
    }

    #[test]
    fn test_explicit_arity_wins() {
        let decl = newcommand("pair", "#1").arity(2);
        assert_eq!(decl.render(), r"\newcommand{\pair}[2]{#1}");
    }

    #[test]
    fn test_renew_and_provide_variants() {
        assert_eq!(
            renewcommand("vec", r"\mathbf{#1}").render(),
            r"\renewcommand{\vec}[1]{\mathbf{#1}}"
        );
        assert_eq!(
            providecommand("half", r"\frac{1}{2}").render(),
            r"\providecommand{\half}{\frac{1}{2}}"
        );
    }
}
