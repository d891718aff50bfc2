//! Logical line splitting across mixed terminator styles.
//!
//! `\r\n`, `\r` and `\n` are all treated as a single line boundary, so text
//! assembled from different platforms splits identically everywhere.

/// Split `text` into its logical lines.
///
/// The returned iterator is lazy and borrows `text`; call this again to
/// restart from the beginning.
pub fn split_lines(text: &str) -> SplitLines<'_> {
    SplitLines { text, start: 0 }
}

/// Iterator over the logical lines of a piece of text.
///
/// A terminator separates lines, it does not start one: empty input yields
/// no lines, and a final segment without a trailing terminator is yielded
/// exactly once before the iterator fuses.
#[derive(Clone, Debug)]
pub struct SplitLines<'a> {
    text: &'a str,
    start: usize
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let bytes = self.text.as_bytes();
        let mut index = self.start;

        while index < bytes.len() {
            match bytes[index] {
                b'\r' => {
                    let line = &self.text[self.start..index];
                    // CRLF is one boundary, not two
                    self.start = if bytes.get(index + 1) == Some(&b'\n') {
                        index + 2
                    } else {
                        index + 1
                    };
                    return Some(line);
                }
                b'\n' => {
                    let line = &self.text[self.start..index];
                    self.start = index + 1;
                    return Some(line);
                }
                _ => index += 1
            }
        }

        if self.start < bytes.len() {
            // Trailing unterminated segment, yielded once
            let line = &self.text[self.start..];
            self.start = bytes.len();
            return Some(line);
        }

        None
    }
}

impl std::iter::FusedIterator for SplitLines<'_> {}
