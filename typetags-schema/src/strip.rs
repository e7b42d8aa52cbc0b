//! Line-comment removal.

/// Remove `//` comments from every line of schema text.
///
/// Line count and line boundaries are preserved exactly, so downstream
/// line-oriented scanning sees the original layout.
pub fn strip_line_comments(schema: &str) -> String {
    schema
        .lines()
        .map(|line| match line.find("//") {
            Some(idx) => &line[..idx],
            None => line,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_comment() {
        assert_eq!(strip_line_comments("id String // primary key"), "id String ");
    }

    #[test]
    fn whole_line_comment_becomes_empty_line() {
        let stripped = strip_line_comments("// header\nmodel User {");
        assert_eq!(stripped, "\nmodel User {");
    }

    #[test]
    fn preserves_line_count() {
        let input = "a // x\n// y\nb\n\nc // z";
        let stripped = strip_line_comments(input);
        assert_eq!(stripped.lines().count(), input.lines().count());
    }

    #[test]
    fn only_first_marker_matters() {
        assert_eq!(strip_line_comments("a // b // c"), "a ");
    }

    #[test]
    fn untouched_without_comments() {
        assert_eq!(strip_line_comments("model User {\n}"), "model User {\n}");
    }
}
