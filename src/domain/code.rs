use serde::Serialize;
use std::fmt;

/// Slots per row: digits run `1..=SLOTS_PER_ROW` before the letter advances.
pub const SLOTS_PER_ROW: u8 = 5;

const FIRST_ROW: u8 = b'A';
const LAST_ROW: u8 = b'Z';

/// Capacity of the code space, `A1` through `Z5`.
pub const MAX_SLOTS: usize = ((LAST_ROW - FIRST_ROW + 1) * SLOTS_PER_ROW) as usize;

/// The two-character keypad code of a slot, e.g. `A1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SlotCode(String);

impl SlotCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SlotCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Display for SlotCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hands out slot codes in row-major order: `A1..A5`, `B1..B5`, ...
///
/// Codes are never reused. Once `Z5` has been issued the generator is exhausted.
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    letter: u8,
    digit: u8,
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator {
    pub fn new() -> Self {
        Self {
            letter: FIRST_ROW,
            digit: 1,
        }
    }

    /// Returns the current code and advances, or `None` when exhausted.
    pub fn next_code(&mut self) -> Option<SlotCode> {
        if self.letter > LAST_ROW {
            return None;
        }
        let code = SlotCode(format!("{}{}", char::from(self.letter), self.digit));
        self.digit += 1;
        if self.digit > SLOTS_PER_ROW {
            self.letter += 1;
            self.digit = 1;
        }
        Some(code)
    }
}
