//! Document type - the root container
//!
//! Owns the class declaration, package list, preamble and body, and knows
//! how to hand itself to the external build tooling.

use std::path::{Path, PathBuf};

use compact_str::CompactString;
use smallvec::SmallVec;

use crate::build;
use crate::error::TexResult;

use super::{Children, Node};

// =============================================================================
// Package
// =============================================================================

/// One `\usepackage` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    /// Package name
    pub name: CompactString,
    /// Bracket-group options
    pub options: SmallVec<[String; 2]>,
}

impl Package {
    /// Create a package declaration with no options
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self { name: name.into(), options: SmallVec::new() }
    }

    /// Create a package declaration with options
    pub fn with_options<I>(name: impl Into<CompactString>, options: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            name: name.into(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Render the `\usepackage` line
    pub fn render(&self) -> String {
        if self.options.is_empty() {
            format!("\\usepackage{{{}}}", self.name)
        } else {
            format!("\\usepackage[{}]{{{}}}", self.options.join(","), self.name)
        }
    }
}

// =============================================================================
// PackageSpec
// =============================================================================

/// A package name or an arbitrarily nested group of them.
///
/// [`Document::use_packages`] flattens the tree recursively to one
/// declaration per leaf, preserving order. Duplicates are kept; LaTeX
/// ignores repeated declarations itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageSpec {
    /// A single package name
    Name(String),
    /// A group of nested specs
    Group(Vec<PackageSpec>),
}

impl PackageSpec {
    /// Group several specs
    pub fn group<I>(specs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<PackageSpec>,
    {
        Self::Group(specs.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for PackageSpec {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for PackageSpec {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl<S: Into<PackageSpec>> From<Vec<S>> for PackageSpec {
    fn from(specs: Vec<S>) -> Self {
        Self::group(specs)
    }
}

impl<S: Into<PackageSpec>, const N: usize> From<[S; N]> for PackageSpec {
    fn from(specs: [S; N]) -> Self {
        Self::group(specs)
    }
}

// =============================================================================
// Document
// =============================================================================

/// Root document container.
///
/// Serializes to a complete compilable source: the optional editor build
/// directive, `\documentclass`, the package declarations, the preamble, and
/// the `document` body block.
#[derive(Debug, Clone)]
pub struct Document {
    /// Document class, e.g. `article`
    pub document_class: CompactString,
    /// Options on the `\documentclass` line
    pub class_options: SmallVec<[String; 2]>,
    /// TeX program directive emitted as a `%!TEX program = ..` first line
    pub tex_program: Option<CompactString>,
    /// Declared packages, in declaration order
    pub packages: Vec<Package>,
    /// Preamble nodes, after the package block
    pub preamble: Vec<Node>,
    /// Body nodes inside `\begin{document}`/`\end{document}`
    pub body: Children,
}

impl Document {
    /// Create a document with no build directive
    pub fn new(document_class: impl Into<CompactString>) -> Self {
        Self {
            document_class: document_class.into(),
            class_options: SmallVec::new(),
            tex_program: None,
            packages: Vec::new(),
            preamble: Vec::new(),
            body: Children::new(),
        }
    }

    /// Create a document that directs the build tool to XeLaTeX
    pub fn xelatex(document_class: impl Into<CompactString>) -> Self {
        Self {
            tex_program: Some(CompactString::const_new("xelatex")),
            ..Self::new(document_class)
        }
    }

    /// Append one option to the `\documentclass` line
    pub fn class_option(mut self, option: impl Into<String>) -> Self {
        self.class_options.push(option.into());
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Packages
    // ─────────────────────────────────────────────────────────────────────────

    /// Declare one package
    pub fn use_package(&mut self, name: impl Into<CompactString>) {
        self.packages.push(Package::new(name));
    }

    /// Declare one package with options
    pub fn use_package_with_options<I>(&mut self, name: impl Into<CompactString>, options: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.packages.push(Package::with_options(name, options));
    }

    /// Declare every package named in a spec tree, in order.
    ///
    /// Accepts a single name or any nesting of groups; see [`PackageSpec`].
    pub fn use_packages(&mut self, spec: impl Into<PackageSpec>) {
        self.flatten_spec(spec.into());
    }

    fn flatten_spec(&mut self, spec: PackageSpec) {
        match spec {
            PackageSpec::Name(name) => self.use_package(name),
            PackageSpec::Group(specs) => {
                for spec in specs {
                    self.flatten_spec(spec);
                }
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Content
    // ─────────────────────────────────────────────────────────────────────────

    /// Append one node to the body
    pub fn push(&mut self, node: impl Into<Node>) {
        self.body.push(node.into());
    }

    /// Append one node to the preamble
    pub fn push_preamble(&mut self, node: impl Into<Node>) {
        self.preamble.push(node.into());
    }

    /// Render the complete document source
    pub fn render(&self) -> String {
        crate::render::render_document(self)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Files and external tools
    // ─────────────────────────────────────────────────────────────────────────

    /// Write the rendered source to `<path>.tex` as UTF-8.
    ///
    /// The extension is forced to `.tex` whatever the caller passed; an
    /// existing file is overwritten whole. Returns the path written.
    pub fn write(&self, path: impl AsRef<Path>) -> TexResult<PathBuf> {
        let tex_path = path.as_ref().with_extension("tex");
        std::fs::write(&tex_path, self.render())?;
        Ok(tex_path)
    }

    /// Build a PDF with `latexmk -xelatex -f`.
    ///
    /// Writes the `.tex` file first if the derived path does not exist yet.
    /// Returns the combined captured build output on success; a non-zero
    /// exit surfaces [`crate::error::TexError::BuildFailed`] carrying that
    /// output. When `clean` is set, intermediate files are removed
    /// afterwards on a best-effort basis.
    pub fn to_pdf(&self, path: impl AsRef<Path>, clean: bool) -> TexResult<String> {
        let path = path.as_ref();
        let tex_path = path.with_extension("tex");
        if !tex_path.exists() {
            self.write(path)?;
        }
        let output = build::compile_tex(&tex_path)?;
        if clean {
            build::clean_aux(path);
        }
        Ok(output)
    }

    /// Build a PDF, hand it to the print spooler, then remove it.
    pub fn print(&self, path: impl AsRef<Path>) -> TexResult<()> {
        let path = path.as_ref();
        self.to_pdf(path, true)?;
        let pdf_path = path.with_extension("pdf");
        build::print_pdf(&pdf_path)?;
        std::fs::remove_file(&pdf_path)?;
        Ok(())
    }
}
