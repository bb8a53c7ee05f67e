use crate::domain::catalog::Catalog;
use crate::domain::code::SlotCode;
use crate::domain::coin::Coin;
use crate::domain::ledger::Ledger;
use crate::domain::money::{DisplayPair, Money};
use crate::domain::ports::StockSource;
use crate::domain::product::Product;
use crate::error::{Result, VendingError};
use tracing::{debug, info, warn};

/// Outcome of a slot selection.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// The item was vended and all remaining change handed back.
    Purchased { product: Product, change: String },
    /// Bad code, empty slot or not enough money. The causes are not told apart.
    Rejected,
}

/// A vending machine: a [`Ledger`] for the money and a [`Catalog`] for the snacks.
///
/// The catalog decides whether an item can be vended; the machine then charges
/// the ledger and returns the leftover change, so a transaction always ends
/// with an empty balance.
#[derive(Debug, Default)]
pub struct VendingMachine {
    ledger: Ledger,
    catalog: Catalog,
}

impl VendingMachine {
    /// Creates an empty machine with no slots loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a machine loaded with every entry of `source`, in order.
    pub fn from_source(source: &dyn StockSource) -> Result<Self> {
        let mut machine = Self::new();
        for entry in source.load()? {
            let (product, quantity) = entry.into_product()?;
            machine.stock(product, quantity)?;
        }
        info!(slots = machine.catalog.slots().len(), "machine stocked");
        Ok(machine)
    }

    /// Loads a product into the next free slot.
    pub fn stock(&mut self, product: Product, quantity: u32) -> Result<SlotCode> {
        let code = self.catalog.add_slot(product, quantity)?;
        debug!(%code, quantity, "slot loaded");
        Ok(code)
    }

    /// Accepts a coin and returns the new balance.
    pub fn insert_coin(&mut self, coin: Coin) -> Result<DisplayPair> {
        let balance = self.ledger.add_money(coin.value())?;
        debug!(?coin, %balance, "coin inserted");
        Ok(balance)
    }

    /// Tries to buy the item in slot `code` with the money inserted so far.
    pub fn select(&mut self, code: &str) -> Result<Selection> {
        if !self.catalog.attempt_vend(code, self.ledger.current_value()) {
            warn!(code, balance = %self.ledger.current_value(), "selection rejected");
            return Ok(Selection::Rejected);
        }
        let product = self
            .catalog
            .find(code)
            .map(|slot| slot.product().clone())
            .ok_or_else(|| VendingError::UnknownCode(code.to_string()))?;
        self.ledger.purchase(product.price())?;
        let change = self.ledger.return_change(self.ledger.current_value())?;
        info!(code, product = product.name(), price = %product.price(), "item vended");
        Ok(Selection::Purchased { product, change })
    }

    /// Hands back everything inserted in the current transaction.
    pub fn refund(&mut self) -> String {
        let message = self.ledger.refund();
        debug!(%message, "refund");
        message
    }

    pub fn balance(&self) -> DisplayPair {
        self.ledger.current_value()
    }

    pub fn revenue(&self) -> Money {
        self.ledger.revenue()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stock::StockEntry;
    use rust_decimal_macros::dec;

    struct FixedStock(Vec<StockEntry>);

    impl StockSource for FixedStock {
        fn load(&self) -> Result<Vec<StockEntry>> {
            Ok(self.0.clone())
        }
    }

    fn machine() -> VendingMachine {
        let source = FixedStock(vec![
            StockEntry::new("Cheetos", dec!(0.75), 10),
            StockEntry::new("Pretzels", dec!(0.50), 7),
            StockEntry::new("Chex Mix", dec!(0.70), 0),
        ]);
        VendingMachine::from_source(&source).unwrap()
    }

    #[test]
    fn test_from_source_preserves_order() {
        let machine = machine();
        let names: Vec<&str> = machine
            .catalog()
            .slots()
            .iter()
            .map(|s| s.product().name())
            .collect();
        assert_eq!(names, ["Cheetos", "Pretzels", "Chex Mix"]);
    }

    #[test]
    fn test_from_source_rejects_invalid_price() {
        let source = FixedStock(vec![StockEntry::new("Gum", dec!(0.655), 1)]);
        assert!(matches!(
            VendingMachine::from_source(&source),
            Err(VendingError::ValidationError(_))
        ));
    }

    #[test]
    fn test_three_quarters_buy_cheetos() {
        let mut machine = machine();
        for _ in 0..3 {
            machine.insert_coin(Coin::Quarter).unwrap();
        }

        let selection = machine.select("A1").unwrap();
        assert_eq!(
            selection,
            Selection::Purchased {
                product: Product::new("Cheetos", Money::from_cents(75)),
                change: "Returning $0.00".to_string(),
            }
        );
        assert_eq!(machine.catalog().find("A1").unwrap().quantity(), 9);
        assert_eq!(machine.revenue(), Money::from_cents(75));
        assert_eq!(Money::from(machine.balance()), Money::ZERO);
    }

    #[test]
    fn test_purchase_returns_leftover_change() {
        let mut machine = machine();
        for _ in 0..3 {
            machine.insert_coin(Coin::Quarter).unwrap();
        }
        machine.insert_coin(Coin::Dime).unwrap();
        machine.insert_coin(Coin::Penny).unwrap();

        match machine.select("A2").unwrap() {
            Selection::Purchased { change, .. } => assert_eq!(change, "Returning $0.36"),
            Selection::Rejected => panic!("Expected purchase"),
        }
        assert_eq!(machine.revenue(), Money::from_cents(50));
        assert_eq!(Money::from(machine.balance()), Money::ZERO);
    }

    #[test]
    fn test_rejected_selection_keeps_balance() {
        let mut machine = machine();
        machine.insert_coin(Coin::Quarter).unwrap();
        machine.insert_coin(Coin::Quarter).unwrap();

        assert_eq!(machine.select("A1").unwrap(), Selection::Rejected);
        assert_eq!(machine.select("A3").unwrap(), Selection::Rejected);
        assert_eq!(machine.select("Z9").unwrap(), Selection::Rejected);
        assert_eq!(Money::from(machine.balance()), Money::from_cents(50));
        assert_eq!(machine.revenue(), Money::ZERO);
        assert_eq!(machine.catalog().find("A1").unwrap().quantity(), 10);
    }

    #[test]
    fn test_pennies_accumulate() {
        let mut machine = machine();
        machine.insert_coin(Coin::Penny).unwrap();
        let balance = machine.insert_coin(Coin::Penny).unwrap();
        assert_eq!(Money::from(balance), Money::from_cents(2));
    }

    #[test]
    fn test_refund() {
        let mut machine = machine();
        machine.insert_coin(Coin::Dime).unwrap();
        machine.insert_coin(Coin::Nickel).unwrap();

        assert_eq!(machine.refund(), "Returning $0.15");
        assert_eq!(Money::from(machine.balance()), Money::ZERO);
    }
}
