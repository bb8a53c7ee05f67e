use super::money::Money;
use std::str::FromStr;

/// Coins the machine accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coin {
    Penny,
    Nickel,
    Dime,
    Quarter,
}

impl Coin {
    pub const fn value(self) -> Money {
        match self {
            Coin::Penny => Money::from_cents(1),
            Coin::Nickel => Money::from_cents(5),
            Coin::Dime => Money::from_cents(10),
            Coin::Quarter => Money::from_cents(25),
        }
    }
}

impl FromStr for Coin {
    type Err = ();

    /// Names are matched exactly, as typed on the keypad.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Penny" => Ok(Coin::Penny),
            "Nickel" => Ok(Coin::Nickel),
            "Dime" => Ok(Coin::Dime),
            "Quarter" => Ok(Coin::Quarter),
            _ => Err(()),
        }
    }
}
