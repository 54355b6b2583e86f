//! Environment node type - begin/end delimited blocks
//!
//! The row-oriented building block for math material: `align*`, `cases`,
//! and the matrix environments all serialize through this type.

use compact_str::CompactString;
use smallvec::SmallVec;

use super::{Children, Fragment, Node};

/// Row terminator for math environments: the two-backslash line break.
pub const MATH_ROW_SEPARATOR: &str = "\\\\\n";

// =============================================================================
// Environment
// =============================================================================

/// A `\begin{name} .. \end{name}` block holding a sequence of rows.
///
/// The escape policy is fixed per environment rather than per call: math
/// environments disable it so operators survive untouched. Rows are joined
/// by `row_separator`; the content block is fenced with `%` line comments so
/// no spurious whitespace leaks into math mode.
#[derive(Debug, Clone)]
pub struct Environment {
    /// Environment name without the star
    pub name: CompactString,
    /// Whether the name renders with a trailing `*`
    pub starred: bool,
    /// Bracket-group options on the `\begin` line
    pub options: SmallVec<[String; 2]>,
    /// Brace-group arguments on the `\begin` line
    pub arguments: SmallVec<[Fragment; 2]>,
    /// Child nodes, one per row
    pub children: Children,
    /// Separator joining the rows
    pub row_separator: &'static str,
    /// Whether text children are escaped on render
    pub escape: bool,
    /// Render to the empty string when there is no content
    pub omit_if_empty: bool,
}

impl Environment {
    /// Create a generic environment: escaping on, newline-separated rows
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            starred: false,
            options: SmallVec::new(),
            arguments: SmallVec::new(),
            children: Children::new(),
            row_separator: "\n",
            escape: true,
            omit_if_empty: false,
        }
    }

    /// The starred `align*` environment, the base of equation blocks
    pub fn aligned() -> Self {
        Self {
            starred: true,
            row_separator: MATH_ROW_SEPARATOR,
            escape: false,
            ..Self::new("align")
        }
    }

    /// The `cases` environment for case distinctions
    pub fn cases() -> Self {
        Self {
            row_separator: MATH_ROW_SEPARATOR,
            escape: false,
            ..Self::new("cases")
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Mark the environment as starred
    pub fn starred(mut self) -> Self {
        self.starred = true;
        self
    }

    /// Append one option to the `\begin` line
    pub fn option(mut self, option: impl Into<String>) -> Self {
        self.options.push(option.into());
        self
    }

    /// Append one argument to the `\begin` line
    pub fn argument(mut self, argument: impl Into<Fragment>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    /// Render to the empty string when there is no content
    pub fn omit_if_empty(mut self) -> Self {
        self.omit_if_empty = true;
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Content
    // ─────────────────────────────────────────────────────────────────────────

    /// The name as it appears in `\begin`/`\end`, star included
    pub fn latex_name(&self) -> String {
        if self.starred {
            format!("{}*", self.name)
        } else {
            self.name.to_string()
        }
    }

    /// Append one row built from cells joined with `" & "`.
    ///
    /// Cells are joined without re-escaping under the environment's escape
    /// policy and appended as a single row. An empty cell sequence is a
    /// no-op.
    pub fn add_row<I>(&mut self, cells: I)
    where
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        let cells: Vec<String> = cells
            .into_iter()
            .map(Into::into)
            .map(|f| if self.escape { f.render() } else { f.content })
            .collect();
        if cells.is_empty() {
            return;
        }
        self.children
            .push(Node::Fragment(Fragment::raw(cells.join(" & "))));
    }

    /// Append an arbitrary child node
    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// Check if the environment has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.children.len()
    }

    /// Render to LaTeX source
    pub fn render(&self) -> String {
        let mut out = String::new();
        crate::render::render_environment(self, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aligned_rows() {
        let mut env = Environment::aligned();
        env.add_row(["x", "= 1"]);
        env.add_row(["y", "= 2"]);
        assert_eq!(
            env.render(),
            "\\begin{align*}%\nx & = 1\\\\\ny & = 2%\n\\end{align*}"
        );
    }

    #[test]
    fn test_add_row_does_not_escape_math() {
        let mut env = Environment::aligned();
        env.add_row(["c_B", "\\geq 0"]);
        assert_eq!(
            env.render(),
            "\\begin{align*}%\nc_B & \\geq 0%\n\\end{align*}"
        );
    }

    #[test]
    fn test_add_row_empty_is_noop() {
        let mut env = Environment::aligned();
        env.add_row(Vec::<&str>::new());
        assert!(env.is_empty());
    }

    #[test]
    fn test_cases() {
        let mut env = Environment::cases();
        env.add_row(["1", "x > 0"]);
        env.add_row(["0", "x \\leq 0"]);
        assert_eq!(
            env.render(),
            "\\begin{cases}%\n1 & x > 0\\\\\n0 & x \\leq 0%\n\\end{cases}"
        );
    }

    #[test]
    fn test_omit_if_empty() {
        let env = Environment::aligned().omit_if_empty();
        assert_eq!(env.render(), "");

        let env = Environment::aligned();
        assert_eq!(env.render(), "\\begin{align*}%\n%\n\\end{align*}");
    }

    #[test]
    fn test_generic_environment_escapes_rows() {
        let mut env = Environment::new("tabular");
        env.add_row(["50%", "a_b"]);
        assert_eq!(
            env.render(),
            "\\begin{tabular}%\n50\\% & a\\_b%\n\\end{tabular}"
        );
    }

    #[test]
    fn test_begin_line_options_and_arguments() {
        let mut env = Environment::new("tabular").argument(Fragment::raw("ll"));
        env.add_row(["a", "b"]);
        assert_eq!(
            env.render(),
            "\\begin{tabular}{ll}%\na & b%\n\\end{tabular}"
        );
    }
}
