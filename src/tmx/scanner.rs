//! Line-oriented scanning of TMX text.
//!
//! Tags are matched by substring, one line at a time. This is not an XML
//! parser: it only understands the layout Tiled writes.

use std::io::BufRead;

use crate::error::{Error, Result};

pub struct LineScanner<R> {
    reader: R,
    line: String,
    line_number: usize,
}

impl<R: BufRead> LineScanner<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, line: String::new(), line_number: 0 }
    }

    /// 1-based number of the last line read
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    fn advance(&mut self) -> Result<bool> {
        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Ok(false);
        }
        self.line_number += 1;
        Ok(true)
    }

    /// Next line, or `None` at end of input
    pub fn next_line(&mut self) -> Result<Option<&str>> {
        if !self.advance()? {
            return Ok(None);
        }
        Ok(Some(self.line.as_str()))
    }

    /// Next line, failing with `UnexpectedEof` at end of input
    pub fn expect_line(&mut self) -> Result<&str> {
        let line = self.line_number;
        self.next_line()?.ok_or(Error::UnexpectedEof { line })
    }

    /// Skip lines until one contains `<{tag}`; returns that line from the tag on.
    pub fn find_tag(&mut self, tag: &'static str) -> Result<&str> {
        loop {
            if !self.advance()? {
                return Err(Error::MissingTag { tag });
            }
            if let Some(pos) = find_open_tag(&self.line, tag) {
                return Ok(&self.line[pos..]);
            }
        }
    }
}

/// Byte offset of `<{tag}` within `line`
pub fn find_open_tag(line: &str, tag: &str) -> Option<usize> {
    line.match_indices('<')
        .map(|(pos, _)| pos)
        .find(|&pos| line[pos + 1..].starts_with(tag))
}

/// Value of the first occurrence of `name` in `tag`: the text between the
/// next pair of double quotes.
pub fn attribute<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let from = tag.find(name)?;
    let rest = &tag[from + name.len()..];
    let open = rest.find('"')? + 1;
    let len = rest[open..].find('"')?;
    Some(&rest[open..open + len])
}

/// Like [`attribute`], failing with `MissingAttribute`
pub fn require_attribute<'a>(
    tag: &'a str,
    tag_name: &'static str,
    name: &'static str,
) -> Result<&'a str> {
    attribute(tag, name).ok_or(Error::MissingAttribute { tag: tag_name, name })
}

/// Leading integer of `s`, the way C's `atoi` reads it (trailing text is ignored).
/// `None` if there are no leading digits.
pub fn parse_int(s: &str) -> Option<i32> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value = digits[..end]
        .bytes()
        .fold(0i64, |acc, b| (acc * 10 + (b - b'0') as i64).min(i32::MAX as i64 + 1));
    let value = if negative { -value } else { value };
    Some(value.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
}
