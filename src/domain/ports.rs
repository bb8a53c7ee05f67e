use super::stock::StockEntry;
use crate::error::Result;

/// Somewhere the machine's initial stock comes from.
pub trait StockSource {
    /// Returns the product lines in display order.
    fn load(&self) -> Result<Vec<StockEntry>>;
}

pub type StockSourceBox = Box<dyn StockSource>;
