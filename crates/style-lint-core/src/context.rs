//! Per-line context handed to rules.

/// One line of a source file, as seen by a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// Opaque identifier of the file the line belongs to.
    pub file: &'a str,
    /// Line number (1-indexed).
    pub number: usize,
    /// Raw line text without its terminator.
    pub text: &'a str,
}

impl<'a> SourceLine<'a> {
    /// Creates a new source line.
    #[must_use]
    pub fn new(file: &'a str, number: usize, text: &'a str) -> Self {
        Self { file, number, text }
    }

    /// Converts a byte offset within the line into a 1-indexed character column.
    ///
    /// Offsets past the end of the line clamp to one past the last character.
    #[must_use]
    pub fn column_at(&self, byte_offset: usize) -> usize {
        let prefix = self.text.get(..byte_offset).unwrap_or(self.text);
        prefix.chars().count() + 1
    }
}

/// Splits file content into numbered lines.
///
/// `\n` and `\r\n` terminate a line and are not part of it. A trailing
/// terminator does not produce an extra empty line, and a lone `\r` is kept
/// as line content. Empty content yields no lines.
pub fn split_lines<'a>(file: &'a str, content: &'a str) -> impl Iterator<Item = SourceLine<'a>> {
    content
        .lines()
        .enumerate()
        .map(move |(i, text)| SourceLine::new(file, i + 1, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(content: &str) -> Vec<&str> {
        split_lines("f.cs", content).map(|l| l.text).collect()
    }

    #[test]
    fn test_split_numbering() {
        let lines: Vec<_> = split_lines("f.cs", "a\nb\nc").collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], SourceLine::new("f.cs", 1, "a"));
        assert_eq!(lines[2], SourceLine::new("f.cs", 3, "c"));
    }

    #[test]
    fn test_split_terminators() {
        assert!(texts("").is_empty());
        assert_eq!(texts("a\n"), vec!["a"]);
        assert_eq!(texts("a\n\n"), vec!["a", ""]);
        assert_eq!(texts("a\r\nb\nc"), vec!["a", "b", "c"]);
        assert_eq!(texts("a\rb"), vec!["a\rb"]);
        assert_eq!(texts("   \n"), vec!["   "]);
    }

    #[test]
    fn test_column_at() {
        let line = SourceLine::new("f.cs", 1, "  é foo(");
        assert_eq!(line.column_at(0), 1);
        assert_eq!(line.column_at(2), 3);
        // 'é' is two bytes but one character
        assert_eq!(line.column_at(5), 5);
        assert_eq!(line.column_at(100), 9);
    }
}
