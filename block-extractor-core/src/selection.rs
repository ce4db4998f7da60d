//! Block selection model for the `--block` option

use std::fmt;

/// Which extracted blocks the caller wants back
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    /// Every completed block, joined by the separator
    #[default]
    All,
    /// A single block by zero-based position
    Index(usize),
    /// A negative or non-numeric request; never matches a block
    Unresolvable,
}

impl Selection {
    /// Parse a raw `--block` value.
    ///
    /// Reads an optional sign and the leading run of digits, ignoring
    /// anything after them, so `"1abc"` and `"1.5"` both select block 1.
    /// A missing or empty value means all blocks.
    pub fn parse(raw: Option<&str>) -> Self {
        let raw = match raw {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Selection::All,
        };

        let rest = raw.trim_start();
        let (negative, rest) = match rest.as_bytes().first() {
            Some(b'-') => (true, &rest[1..]),
            Some(b'+') => (false, &rest[1..]),
            _ => (false, rest),
        };

        let digit_count = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digit_count == 0 {
            return Selection::Unresolvable;
        }

        let digits = &rest[..digit_count];
        if negative && digits.bytes().any(|b| b != b'0') {
            return Selection::Unresolvable;
        }

        match digits.parse::<usize>() {
            Ok(index) => Selection::Index(index),
            Err(_) => Selection::Unresolvable,
        }
    }

    /// Resolve against the number of completed blocks
    pub fn index_in(&self, count: usize) -> Option<usize> {
        match *self {
            Selection::Index(index) if index < count => Some(index),
            _ => None,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => write!(f, "all blocks"),
            Selection::Index(index) => write!(f, "block {}", index),
            Selection::Unresolvable => write!(f, "no block"),
        }
    }
}
