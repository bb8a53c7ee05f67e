use crate::domain::ports::StockSource;
use crate::domain::stock::StockEntry;
use crate::error::Result;
use rust_decimal::Decimal;

/// The snacks a freshly installed machine ships with.
///
/// Used when no stock file is given on the command line.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultStock;

impl DefaultStock {
    /// Creates the built-in stock source.
    pub fn new() -> Self {
        Self
    }
}

const DEFAULT_STOCK: [(&str, i64, u32); 10] = [
    ("Cheetos", 75, 10),
    ("Goldfish", 75, 10),
    ("Pretzels", 50, 7),
    ("Jolly Ranchers", 60, 4),
    ("Coca-Cola", 100, 12),
    ("Snickers", 50, 8),
    ("Stride Gum", 65, 3),
    ("Beef Jerky", 140, 1),
    ("Chex Mix", 70, 1),
    ("Popcorn", 35, 6),
];

impl StockSource for DefaultStock {
    fn load(&self) -> Result<Vec<StockEntry>> {
        Ok(DEFAULT_STOCK
            .iter()
            .map(|&(name, cents, quantity)| StockEntry::new(name, Decimal::new(cents, 2), quantity))
            .collect())
    }
}
