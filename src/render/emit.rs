//! Writing [`DocBlock`]s as reStructuredText.

use std::fmt::Display;
use std::io::Write;

use itertools::Itertools;
use miette::IntoDiagnostic;
use miette::WrapErr;

use super::DocBlock;

/// The marker which opens a directive block.
const DIRECTIVE_MARKER: &str = "..  ";

/// The indent for every line after the title.
const BODY_INDENT: &str = "    ";

impl Display for DocBlock {
    /// The title after a `..  ` marker, then each body line indented by four spaces, then a blank
    /// separator.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{DIRECTIVE_MARKER}{}", self.title())?;
        writeln!(
            f,
            "{}",
            self.body()
                .iter()
                .format_with("\n", |line, f| f(&format_args!("{BODY_INDENT}{line}")))
        )?;
        write!(f, "\n\n")
    }
}

/// Write one block to `out`.
pub fn emit(out: &mut impl Write, block: &DocBlock) -> miette::Result<()> {
    write!(out, "{block}")
        .into_diagnostic()
        .wrap_err("Failed to write documentation")
}

#[cfg(test)]
mod tests {
    use expect_test::expect;
    use expect_test::Expect;
    use pretty_assertions::assert_eq;

    use super::*;

    fn check(lines: &[&str], expected: Expect) {
        let block = DocBlock::from_lines(lines).unwrap();
        expected.assert_eq(&format!("{:?}", block.to_string()));
    }

    #[test]
    fn test_display() {
        check(
            &["function:: pkg.foo()", "", "Does a thing."],
            expect![[r#""..  function:: pkg.foo()\n    \n    Does a thing.\n\n\n""#]],
        );
        check(
            &["class:: Puppy", "A puppy.", "  Indented."],
            expect![[r#""..  class:: Puppy\n    A puppy.\n      Indented.\n\n\n""#]],
        );
    }

    #[test]
    fn test_display_title_only() {
        check(
            &["data:: x"],
            expect![[r#""..  data:: x\n\n\n\n""#]],
        );
    }

    #[test]
    fn test_emit() {
        let mut out = Vec::new();
        for lines in [&["function:: a()", "First."][..], &["function:: b()"][..]] {
            emit(&mut out, &DocBlock::from_lines(lines).unwrap()).unwrap();
        }
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "..  function:: a()\n    First.\n\n\n..  function:: b()\n\n\n\n"
        );
    }

    #[test]
    fn test_emit_write_error() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let block = DocBlock::from_lines(&["data:: x"]).unwrap();
        let err = emit(&mut Closed, &block).unwrap_err();
        assert_eq!(err.to_string(), "Failed to write documentation");
    }
}
