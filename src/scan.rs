//! Line scanner and cursor for the decoder.
//!
//! The scanner splits raw input into physical lines, measures each line's
//! indentation and derives its depth (`indent / indent_width`). Blank lines
//! are set aside but keep their position so errors can still point at the
//! right place. In strict mode the scanner rejects tab indentation and any
//! indent that is not a whole multiple of the configured width; in lenient
//! mode a tab counts as one space and depth is floored.
//!
//! The [`Cursor`] walks the non-blank line stream with one-line lookahead,
//! which is all the recursive-descent parser needs.

use crate::error::{Error, Result};
use crate::options::DecodeOptions;

/// One non-blank physical line, pre-measured for the parser.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ParsedLine<'a> {
    /// Line content with indentation and trailing whitespace removed.
    pub content: &'a str,
    /// Leading indent in spaces.
    pub indent: usize,
    /// Logical nesting depth, `indent / indent_width`.
    pub depth: usize,
    /// 1-based physical line number.
    pub line: usize,
}

/// A logically empty line. Recorded so the cursor can skip it while error
/// messages keep accurate positions.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BlankLine {
    pub line: usize,
    #[allow(dead_code)]
    pub indent: usize,
    #[allow(dead_code)]
    pub depth: usize,
}

/// Splits `input` into parsed and blank lines. Accepts `\n` and `\r\n`
/// terminators.
pub(crate) fn scan<'a>(
    input: &'a str,
    options: &DecodeOptions,
) -> Result<(Vec<ParsedLine<'a>>, Vec<BlankLine>)> {
    let width = options.indent.max(1);
    let mut lines = Vec::new();
    let mut blanks = Vec::new();

    for (idx, raw) in input.split('\n').enumerate() {
        let line = idx + 1;
        let raw = raw.strip_suffix('\r').unwrap_or(raw);

        let mut indent = 0;
        let mut start = 0;
        for (pos, ch) in raw.char_indices() {
            match ch {
                ' ' => indent += 1,
                '\t' => {
                    if options.strict {
                        return Err(Error::indent(line, "tab character in indentation"));
                    }
                    indent += 1;
                }
                _ => {
                    start = pos;
                    break;
                }
            }
            start = pos + ch.len_utf8();
        }

        let content = raw[start..].trim_end();
        if content.is_empty() {
            blanks.push(BlankLine {
                line,
                indent,
                depth: indent / width,
            });
            continue;
        }

        if options.strict && indent % width != 0 {
            return Err(Error::indent(
                line,
                format!("indent of {indent} spaces is not a multiple of {width}"),
            ));
        }
        lines.push(ParsedLine {
            content,
            indent,
            depth: indent / width,
            line,
        });
    }

    Ok((lines, blanks))
}

/// Lookahead-1 cursor over the scanned line stream.
pub(crate) struct Cursor<'a, 'b> {
    lines: &'b [ParsedLine<'a>],
    pos: usize,
    last_physical_line: usize,
}

impl<'a, 'b> Cursor<'a, 'b> {
    pub fn new(lines: &'b [ParsedLine<'a>], blanks: &[BlankLine]) -> Self {
        let last_physical_line = lines
            .last()
            .map(|l| l.line)
            .into_iter()
            .chain(blanks.last().map(|b| b.line))
            .max()
            .unwrap_or(1);
        Cursor {
            lines,
            pos: 0,
            last_physical_line,
        }
    }

    /// Returns the next line without consuming it.
    pub fn peek(&self) -> Option<&'b ParsedLine<'a>> {
        self.lines.get(self.pos)
    }

    /// Consumes the next line.
    pub fn advance(&mut self) {
        if self.pos < self.lines.len() {
            self.pos += 1;
        }
    }

    /// The line number where the current block boundary sits: the next
    /// unconsumed line, or the last physical line (blank lines included)
    /// when input has run out.
    pub fn boundary_line(&self) -> usize {
        self.peek().map_or(self.last_physical_line, |l| l.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DecodeOptions;

    #[test]
    fn measures_depth() {
        let opts = DecodeOptions::new();
        let (lines, blanks) = scan("a: 1\n  b: 2\n\n    c: 3\n", &opts).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].depth, 0);
        assert_eq!(lines[1].depth, 1);
        assert_eq!(lines[2].depth, 2);
        assert_eq!(lines[2].line, 4);
        assert_eq!(blanks.len(), 2);
    }

    #[test]
    fn strict_rejects_odd_indent_and_tabs() {
        let opts = DecodeOptions::new();
        assert!(matches!(
            scan(" a: 1", &opts),
            Err(Error::Indent { line: 1, .. })
        ));
        assert!(matches!(
            scan("\ta: 1", &opts),
            Err(Error::Indent { line: 1, .. })
        ));
    }

    #[test]
    fn lenient_floors_depth() {
        let opts = DecodeOptions::new().with_strict(false);
        let (lines, _) = scan("   a: 1", &opts).unwrap();
        assert_eq!(lines[0].indent, 3);
        assert_eq!(lines[0].depth, 1);
    }
}
