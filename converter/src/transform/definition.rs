//! Definition field grammar.
//!
//! A definition packs a panel's name, dimensions, edge-banding flags and an
//! optional comment into one string:
//!
//! ```text
//! <name> <width>x<height> <4 flags><comment>
//! Widget 10x20 1010extra
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

/// Compiled definition pattern, shared by every conversion.
///
/// The name is greedy, so with several dimension tokens the last one that
/// still leaves a flag block wins. Name and comment never span a line
/// terminator (`\n`, `\r`, U+2028, U+2029).
pub static DEFINITION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([^\n\r\x{2028}\x{2029}]+) ([0-9]+)x([0-9]+) ([01]{4})([^\n\r\x{2028}\x{2029}]*)$",
    )
    .expect("definition pattern compiles")
});

/// A parsed definition field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub name: String,
    /// Width digits, verbatim.
    pub width: String,
    /// Height digits, verbatim.
    pub height: String,
    /// Edge flags in X1, X2, Y1, Y2 order, each `'0'` or `'1'`.
    pub flags: [char; 4],
    /// Whatever follows the flag block, possibly empty.
    pub comment: String,
}

impl Definition {
    /// Parse a definition field. Returns `None` unless the whole value
    /// matches the grammar.
    pub fn parse(field: &str) -> Option<Self> {
        let caps = DEFINITION_PATTERN.captures(field)?;

        let mut flags = ['0'; 4];
        for (slot, c) in flags.iter_mut().zip(caps[4].chars()) {
            *slot = c;
        }

        Some(Self {
            name: caps[1].to_string(),
            width: caps[2].to_string(),
            height: caps[3].to_string(),
            flags,
            comment: caps[5].to_string(),
        })
    }
}
