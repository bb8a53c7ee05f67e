use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fs::File;
use std::io::{Error, Write};
use std::path::Path;

/// Everything a customer might type, valid or not.
pub const KEYPAD: &[&str] = &[
    "Penny", "Nickel", "Dime", "Quarter", "Quarter", "Quarter", "A1", "A3", "B3", "B5", "Z9",
    "Return", "Dollar", "", "quarter",
];

/// Picks `count` random keypad lines, reproducibly for a given `seed`.
pub fn random_commands(seed: u64, count: usize) -> Vec<&'static str> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| *KEYPAD.choose(&mut rng).expect("keypad is not empty"))
        .collect()
}

pub fn generate_script(path: &Path, seed: u64, count: usize) -> Result<(), Error> {
    let mut file = File::create(path)?;
    for command in random_commands(seed, count) {
        writeln!(file, "{command}")?;
    }
    file.flush()?;
    Ok(())
}
