//! Node types for the document tree.
//!
//! This module provides `Fragment`, `Command`, `Environment`, and `Document`
//! types plus the `Node` enum tying them together. Fragments carry the
//! escape flag, commands and environments compose them, the document owns
//! the top level.

mod command;
mod document;
mod environment;
mod fragment;

pub use command::Command;
pub use document::{Document, Package, PackageSpec};
pub use environment::{Environment, MATH_ROW_SEPARATOR};
pub use fragment::Fragment;

use smallvec::SmallVec;

/// Node in a document tree - a fragment, a command, or an environment.
#[derive(Debug, Clone)]
pub enum Node {
    Fragment(Fragment),
    Command(Command),
    Environment(Box<Environment>),
}

impl Node {
    crate::impl_node_accessors!(Fragment, Command, Environment);

    /// Render to LaTeX source
    pub fn render(&self) -> String {
        let mut out = String::new();
        crate::render::render_node(self, &mut out);
        out
    }
}

impl From<Fragment> for Node {
    fn from(f: Fragment) -> Self {
        Node::Fragment(f)
    }
}

impl From<Command> for Node {
    fn from(c: Command) -> Self {
        Node::Command(c)
    }
}

impl From<Environment> for Node {
    fn from(e: Environment) -> Self {
        Node::Environment(Box::new(e))
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Fragment(Fragment::text(s))
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Fragment(Fragment::text(s))
    }
}

/// Type alias for children collection.
pub type Children = SmallVec<[Node; 8]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_accessors() {
        let node = Node::from(Fragment::raw("x"));
        assert!(node.is_fragment());
        assert!(!node.is_command());
        assert_eq!(node.as_fragment().unwrap().content, "x");
        assert!(node.as_environment().is_none());
    }

    #[test]
    fn test_node_accessors_mut() {
        let mut node = Node::from(Environment::aligned());
        let env = node.as_environment_mut().unwrap();
        env.add_row(["a", "b"]);
        assert_eq!(node.as_environment().unwrap().row_count(), 1);
    }

    #[test]
    fn test_node_from_str_is_text() {
        let node = Node::from("100%");
        assert_eq!(node.render(), r"100\%");
    }
}
