//! The keypad: turns typed lines into machine actions and prints the results.

pub mod command;
pub mod session;
