use super::money::Money;
use super::product::Product;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Deserialize;

/// One product line to load into the machine at startup.
///
/// `price` is in dollars, e.g. `0.75`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct StockEntry {
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl StockEntry {
    pub fn new(name: impl Into<String>, price: Decimal, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Validates the price and splits the entry into a product and its quantity.
    pub fn into_product(self) -> Result<(Product, u32)> {
        let price = Money::try_from(self.price)?;
        Ok((Product::new(self.name, price), self.quantity))
    }
}
