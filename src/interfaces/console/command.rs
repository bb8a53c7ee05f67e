use crate::domain::coin::Coin;

/// A line typed on the keypad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Insert(Coin),
    /// Any two-character input is taken as a slot code.
    Select(String),
    Return,
    Products,
    Unrecognized(String),
}

impl Command {
    /// Interprets one input line. Only the line terminator is stripped, so
    /// `" B3 "` counts as four characters.
    pub fn parse(line: &str) -> Self {
        let input = line.trim_end_matches(['\r', '\n']);
        if let Ok(coin) = input.parse::<Coin>() {
            return Command::Insert(coin);
        }
        match input {
            code if code.chars().count() == 2 => Command::Select(code.to_string()),
            "Return" => Command::Return,
            "Products" => Command::Products,
            other => Command::Unrecognized(other.to_string()),
        }
    }
}
