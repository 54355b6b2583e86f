//! Math fragment builders
//!
//! Stateless free functions for the common mathematical fragments: scripts,
//! inline math, matrices and vectors, determinants, derivative notation.
//! Everything here produces raw fragments — math content is valid LaTeX by
//! construction and must not be escaped again.

use std::fmt;

use crate::error::{TexError, TexResult};
use crate::escape::escape_latex;
use crate::node::{Command, Environment, Fragment, Node};

/// Row terminator inside matrix environments; the `%` keeps math mode free
/// of spurious whitespace.
const MATRIX_ROW_SEPARATOR: &str = "\\\\%\n";

// =============================================================================
// Scripts and wrappers
// =============================================================================

/// Subscript: `base_sub`.
pub fn subscript(base: impl fmt::Display, sub: impl fmt::Display) -> Fragment {
    Fragment::raw(format!("{base}_{sub}"))
}

/// Superscript: `base^sup`.
pub fn superscript(base: impl fmt::Display, sup: impl fmt::Display) -> Fragment {
    Fragment::raw(format!("{base}^{sup}"))
}

/// Wrap a string in `\Large{..}`, escaping the input when asked.
pub fn large(s: &str, escape: bool) -> Fragment {
    let body = if escape { escape_latex(s) } else { s.to_string() };
    Fragment::raw(format!("\\Large{{{body}}}"))
}

/// Inline math: `$expr$`. The expression is taken as already valid math.
pub fn inline_math(expr: impl fmt::Display) -> Fragment {
    Fragment::raw(format!("${expr}$"))
}

/// Display math: `\[expr\]`.
pub fn display_math(expr: impl fmt::Display) -> Fragment {
    Fragment::raw(format!("\\[{expr}\\]"))
}

// =============================================================================
// Matrices
// =============================================================================

/// Delimiter pair wrapping a matrix-like fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    /// No delimiters: `matrix`
    None,
    /// Parentheses: `pmatrix`
    #[default]
    Paren,
    /// Square brackets: `bmatrix`
    Bracket,
    /// Curly braces: `Bmatrix`
    Brace,
    /// Single bars: `vmatrix`
    Bar,
    /// Double bars: `Vmatrix`
    DoubleBar,
}

impl Delimiter {
    /// The amsmath environment name for this delimiter pair
    pub fn env_name(self) -> &'static str {
        match self {
            Delimiter::None => "matrix",
            Delimiter::Paren => "pmatrix",
            Delimiter::Bracket => "bmatrix",
            Delimiter::Brace => "Bmatrix",
            Delimiter::Bar => "vmatrix",
            Delimiter::DoubleBar => "Vmatrix",
        }
    }
}

/// A matrix fragment: rows of rendered cells plus a delimiter style.
///
/// Cells are captured through `Display`, so any numeric type works and
/// formats the way it prints. The reshape helpers cover the vector forms:
/// [`Matrix::flattened`] is the row-vector reading of any input,
/// [`Matrix::column`] the column-vector one. No arithmetic happens here,
/// only shape reinterpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    /// Cell rows, row-major
    pub rows: Vec<Vec<String>>,
    /// Delimiter pair
    pub delimiter: Delimiter,
}

impl Matrix {
    /// Create a matrix from a 2-D input, row-major
    pub fn from_rows<R, C, T>(rows: R, delimiter: Delimiter) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = T>,
        T: fmt::Display,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(|cell| cell.to_string()).collect())
            .collect();
        Self { rows, delimiter }
    }

    /// Reshape to a single 1×N row, row-major
    pub fn flattened(self) -> Self {
        let cells: Vec<String> = self.rows.into_iter().flatten().collect();
        Self { rows: vec![cells], delimiter: self.delimiter }
    }

    /// Reshape to a single N×1 column, row-major
    pub fn column(self) -> Self {
        let rows = self
            .rows
            .into_iter()
            .flatten()
            .map(|cell| vec![cell])
            .collect();
        Self { rows, delimiter: self.delimiter }
    }

    /// Shape as (rows, columns of the first row)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.rows.first().map_or(0, Vec::len))
    }

    /// Lower into the generic environment this matrix renders as
    pub fn environment(&self) -> Environment {
        let mut env = Environment::new(self.delimiter.env_name());
        env.escape = false;
        env.row_separator = MATRIX_ROW_SEPARATOR;
        for row in &self.rows {
            env.push(Fragment::raw(row.join("&")));
        }
        env
    }

    /// Render to LaTeX source
    pub fn render(&self) -> String {
        self.environment().render()
    }
}

impl From<Matrix> for Fragment {
    fn from(matrix: Matrix) -> Self {
        Fragment::raw(matrix.render())
    }
}

impl From<Matrix> for Node {
    fn from(matrix: Matrix) -> Self {
        Node::Environment(Box::new(matrix.environment()))
    }
}

/// A 1-D sequence as a 1×N row matrix.
pub fn vector<I, T>(cells: I, delimiter: Delimiter) -> Matrix
where
    I: IntoIterator<Item = T>,
    T: fmt::Display,
{
    Matrix::from_rows([cells], delimiter)
}

/// A 1-D sequence as an N×1 column matrix.
pub fn column_vector<I, T>(cells: I, delimiter: Delimiter) -> Matrix
where
    I: IntoIterator<Item = T>,
    T: fmt::Display,
{
    vector(cells, delimiter).column()
}

/// A square matrix rendered between bars.
///
/// Fails with [`TexError::NotSquare`] before any formatting when the input
/// is not square (ragged rows included).
pub fn determinant<R, C, T>(rows: R) -> TexResult<Matrix>
where
    R: IntoIterator<Item = C>,
    C: IntoIterator<Item = T>,
    T: fmt::Display,
{
    let matrix = Matrix::from_rows(rows, Delimiter::Bar);
    let row_count = matrix.rows.len();
    for row in &matrix.rows {
        if row.len() != row_count {
            return Err(TexError::NotSquare { rows: row_count, cols: row.len() });
        }
    }
    Ok(matrix)
}

// =============================================================================
// Derivative notation
// =============================================================================

/// Ordinary derivative: `\frac{\mathrm{d}y}{\mathrm{d}x}`.
pub fn diff(y: impl fmt::Display, x: impl fmt::Display) -> Fragment {
    let differential = |v: &dyn fmt::Display| format!("\\mathrm{{d}}{v}");
    Command::new("frac")
        .arg(Fragment::raw(differential(&y)))
        .arg(Fragment::raw(differential(&x)))
        .into()
}

/// Partial derivative: `\frac{\partial{y}}{\partial{x}}`.
pub fn pdiff(y: impl fmt::Display, x: impl fmt::Display) -> Fragment {
    let partial = |v: &dyn fmt::Display| {
        Command::new("partial").arg(Fragment::raw(v.to_string())).render()
    };
    Command::new("frac")
        .arg(Fragment::raw(partial(&y)))
        .arg(Fragment::raw(partial(&x)))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscript_superscript() {
        assert_eq!(subscript("a", "b").render(), "a_b");
        assert_eq!(superscript("a", "b").render(), "a^b");
        assert_eq!(subscript("c", "B").render(), "c_B");
    }

    #[test]
    fn test_large() {
        assert_eq!(large("hello", true).render(), r"\Large{hello}");
        assert_eq!(large("50%", true).render(), "\\Large{50\\%}");
        assert_eq!(large(r"\alpha", false).render(), r"\Large{\alpha}");
    }

    #[test]
    fn test_inline_math() {
        assert_eq!(inline_math("c_B").render(), "$c_B$");
    }

    #[test]
    fn test_display_math() {
        assert_eq!(display_math("x^2").render(), r"\[x^2\]");
    }

    #[test]
    fn test_vector_is_row_shaped() {
        let v = vector([1, 2, 3], Delimiter::Paren);
        assert_eq!(v.shape(), (1, 3));
        assert_eq!(v.render(), "\\begin{pmatrix}%\n1&2&3%\n\\end{pmatrix}");
    }

    #[test]
    fn test_flattened_nested_input() {
        let v = Matrix::from_rows([[1, 2], [1, 2]], Delimiter::Paren).flattened();
        assert_eq!(v.shape(), (1, 4));
        assert_eq!(v.render(), "\\begin{pmatrix}%\n1&2&1&2%\n\\end{pmatrix}");
    }

    #[test]
    fn test_column_vector() {
        let v = column_vector([1, 2], Delimiter::Paren);
        assert_eq!(v.shape(), (2, 1));
        assert_eq!(v.render(), "\\begin{pmatrix}%\n1\\\\%\n2%\n\\end{pmatrix}");
    }

    #[test]
    fn test_matrix_rows_and_delimiters() {
        let m = Matrix::from_rows([[1, 2], [3, 4]], Delimiter::Bracket);
        assert_eq!(m.render(), "\\begin{bmatrix}%\n1&2\\\\%\n3&4%\n\\end{bmatrix}");
    }

    #[test]
    fn test_determinant_square() {
        let d = determinant([[1, 2], [3, 4]]).unwrap();
        assert_eq!(d.delimiter, Delimiter::Bar);
        assert_eq!(d.render(), "\\begin{vmatrix}%\n1&2\\\\%\n3&4%\n\\end{vmatrix}");
    }

    #[test]
    fn test_determinant_rejects_non_square() {
        let err = determinant([[1, 2, 3], [4, 5, 6]]).unwrap_err();
        assert!(matches!(err, TexError::NotSquare { rows: 2, cols: 3 }));
    }

    #[test]
    fn test_determinant_rejects_ragged() {
        let err = determinant(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert!(matches!(err, TexError::NotSquare { rows: 2, cols: 1 }));
    }

    #[test]
    fn test_diff() {
        assert_eq!(diff("x", "y").render(), r"\frac{\mathrm{d}x}{\mathrm{d}y}");
    }

    #[test]
    fn test_pdiff() {
        assert_eq!(pdiff("y", "x").render(), r"\frac{\partial{y}}{\partial{x}}");
    }

    #[test]
    fn test_float_cells_format_via_display() {
        let v = vector([1.5, 2.0], Delimiter::Paren);
        assert_eq!(v.render(), "\\begin{pmatrix}%\n1.5&2%\n\\end{pmatrix}");
    }
}
