//! Prelude module for common imports.
//!
//! ```ignore
//! use texdom::prelude::*;
//! ```

// Node types
pub use crate::node::{
    Children, Command, Document, Environment, Fragment, Node, Package, PackageSpec,
    MATH_ROW_SEPARATOR,
};

// Math builders
pub use crate::math::{
    column_vector, determinant, diff, display_math, inline_math, large, pdiff, subscript,
    superscript, vector, Delimiter, Matrix,
};

// Command declarations
pub use crate::define::{newcommand, providecommand, renewcommand, CommandDefinition, DefinitionKind};

// Build tooling
pub use crate::build::{check_latexmk_available, clean_aux, compile_tex, print_pdf, AUX_EXTENSIONS};

// Escaping
pub use crate::escape::escape_latex;

// Rendering
pub use crate::render::{render_document, render_node};

// Error
pub use crate::error::{TexError, TexResult};

// Command shorthand
pub use crate::cmd;
