//! LaTeX escaping.
//!
//! Text fragments pass through here at render time; raw fragments never do.

/// Escape LaTeX special characters.
///
/// The reserved characters `& % $ # _ { }` get a backslash prefix; `~`, `^`
/// and `\` have no single-character escape and map to their command forms.
/// A literal newline becomes a `\newline` break.
pub fn escape_latex(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str(r"\&"),
            '%' => out.push_str(r"\%"),
            '$' => out.push_str(r"\$"),
            '#' => out.push_str(r"\#"),
            '_' => out.push_str(r"\_"),
            '{' => out.push_str(r"\{"),
            '}' => out.push_str(r"\}"),
            '~' => out.push_str(r"\textasciitilde{}"),
            '^' => out.push_str(r"\textasciicircum{}"),
            '\\' => out.push_str(r"\textbackslash{}"),
            '\n' => out.push_str("\\newline%\n"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_reserved() {
        assert_eq!(escape_latex("50% of $10"), r"50\% of \$10");
        assert_eq!(escape_latex("a & b"), r"a \& b");
        assert_eq!(escape_latex("x_1"), r"x\_1");
        assert_eq!(escape_latex("{#}"), r"\{\#\}");
    }

    #[test]
    fn test_escape_command_forms() {
        assert_eq!(escape_latex("~"), r"\textasciitilde{}");
        assert_eq!(escape_latex("^"), r"\textasciicircum{}");
        assert_eq!(escape_latex(r"\"), r"\textbackslash{}");
    }

    #[test]
    fn test_escape_newline() {
        assert_eq!(escape_latex("a\nb"), "a\\newline%\nb");
    }

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape_latex("hello world"), "hello world");
    }
}
