//! LaTeX rendering
//!
//! Serializes nodes and documents to LaTeX source strings. Types delegate
//! their `render()` methods here; the functions append into a shared
//! `String` buffer.

use crate::node::{Command, Document, Environment, Node};

// =============================================================================
// Node rendering
// =============================================================================

/// Render a node to LaTeX source.
pub fn render_node(node: &Node, output: &mut String) {
    match node {
        Node::Fragment(fragment) => output.push_str(&fragment.render()),
        Node::Command(command) => render_command(command, output),
        Node::Environment(environment) => render_environment(environment, output),
    }
}

/// Render a command invocation: `\name[options]{arg}{arg}`.
pub fn render_command(command: &Command, output: &mut String) {
    output.push('\\');
    output.push_str(&command.name);
    if !command.options.is_empty() {
        output.push('[');
        output.push_str(&command.options.join(","));
        output.push(']');
    }
    for argument in &command.arguments {
        output.push('{');
        output.push_str(&argument.content);
        output.push('}');
    }
}

/// Render an environment block.
///
/// The begin line carries the starred name, options and arguments; the
/// content block is fenced with `%` line comments and rows are joined by
/// the environment's separator. An empty environment configured with
/// `omit_if_empty` renders nothing.
pub fn render_environment(environment: &Environment, output: &mut String) {
    let rows: Vec<String> = environment
        .children
        .iter()
        .map(|child| render_row(child, environment.escape))
        .collect();
    let content = rows.join(environment.row_separator);

    if content.trim().is_empty() && environment.omit_if_empty {
        return;
    }

    let name = environment.latex_name();
    output.push_str("\\begin{");
    output.push_str(&name);
    output.push('}');
    if !environment.options.is_empty() {
        output.push('[');
        output.push_str(&environment.options.join(","));
        output.push(']');
    }
    for argument in &environment.arguments {
        output.push('{');
        output.push_str(&argument.content);
        output.push('}');
    }
    output.push_str("%\n");
    output.push_str(&content);
    output.push_str("%\n");
    output.push_str("\\end{");
    output.push_str(&name);
    output.push('}');
}

/// Render one environment child under the environment's escape policy.
fn render_row(node: &Node, escape: bool) -> String {
    match node {
        // the policy overrides the fragment flag when escaping is disabled
        Node::Fragment(fragment) if !escape => fragment.content.clone(),
        other => other.render(),
    }
}

// =============================================================================
// Document rendering
// =============================================================================

/// Render a document to a complete compilable source string.
pub fn render_document(document: &Document) -> String {
    let mut output = String::new();

    if let Some(program) = &document.tex_program {
        output.push_str("%!TEX program = ");
        output.push_str(program);
        output.push_str("\n\n");
    }

    output.push_str("\\documentclass");
    if !document.class_options.is_empty() {
        output.push('[');
        output.push_str(&document.class_options.join(","));
        output.push(']');
    }
    output.push('{');
    output.push_str(&document.document_class);
    output.push_str("}\n");

    for package in &document.packages {
        output.push_str(&package.render());
        output.push('\n');
    }

    for node in &document.preamble {
        render_node(node, &mut output);
        output.push('\n');
    }

    output.push_str("\\begin{document}\n");
    for node in &document.body {
        render_node(node, &mut output);
        output.push('\n');
    }
    output.push_str("\\end{document}\n");

    output
}
