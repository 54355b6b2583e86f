//! Command node type - a named LaTeX macro with options and arguments
//!
//! The explicit factory behind every macro the crate does not wrap by name:
//! `Command::new("frac").arg(..).arg(..)` covers the long tail. The `cmd!`
//! macro in `crate::macros` is the call-site sugar over this type.

use compact_str::CompactString;
use smallvec::SmallVec;

use super::Fragment;

// =============================================================================
// Command
// =============================================================================

/// A LaTeX macro invocation: `\name[options]{arg}{arg}`.
///
/// Options render as a single comma-joined bracket group; each argument gets
/// its own brace group. Argument content is emitted verbatim — math
/// arguments routinely contain `_`, `^` and friends that must not be
/// escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Macro name without the leading backslash
    pub name: CompactString,
    /// Bracket-group options
    pub options: SmallVec<[String; 2]>,
    /// Brace-group arguments
    pub arguments: SmallVec<[Fragment; 2]>,
}

impl Command {
    /// Create a command with no options or arguments
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            options: SmallVec::new(),
            arguments: SmallVec::new(),
        }
    }

    /// Append one option
    pub fn option(mut self, option: impl Into<String>) -> Self {
        self.options.push(option.into());
        self
    }

    /// Append one argument
    pub fn arg(mut self, argument: impl Into<Fragment>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    /// Append several arguments
    pub fn args<I>(mut self, arguments: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        self.arguments.extend(arguments.into_iter().map(Into::into));
        self
    }

    /// Render to LaTeX source
    pub fn render(&self) -> String {
        let mut out = String::new();
        crate::render::render_command(self, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_bare() {
        assert_eq!(Command::new("partial").render(), r"\partial");
    }

    #[test]
    fn test_command_arguments() {
        let cmd = Command::new("frac").arg("x").arg("y");
        assert_eq!(cmd.render(), r"\frac{x}{y}");
    }

    #[test]
    fn test_command_options_single_bracket_group() {
        let cmd = Command::new("sqrt").option("3").arg("x");
        assert_eq!(cmd.render(), r"\sqrt[3]{x}");

        let cmd = Command::new("usepackage")
            .option("margin=1in")
            .option("a4paper")
            .arg("geometry");
        assert_eq!(cmd.render(), r"\usepackage[margin=1in,a4paper]{geometry}");
    }

    #[test]
    fn test_command_arguments_verbatim() {
        // math arguments keep their operators untouched
        let cmd = Command::new("frac").arg("x_1").arg("y^2");
        assert_eq!(cmd.render(), r"\frac{x_1}{y^2}");
    }
}
