use super::code::{CodeGenerator, SlotCode};
use super::money::{DisplayPair, to_minor_units};
use super::product::Product;
use super::slot::Slot;
use crate::error::{Result, VendingError};

/// The machine's inventory: slots in the order they were loaded.
///
/// Each catalog owns its own [`CodeGenerator`], so slot codes are sequential
/// and unique within a machine.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    slots: Vec<Slot>,
    codes: CodeGenerator,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `quantity` units of `product` into the next free slot and
    /// returns the code assigned to it.
    pub fn add_slot(&mut self, product: Product, quantity: u32) -> Result<SlotCode> {
        let code = self.codes.next_code().ok_or(VendingError::CatalogFull)?;
        self.slots.push(Slot::new(code.clone(), product, quantity));
        Ok(code)
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn find(&self, code: &str) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.code() == code)
    }

    fn find_mut(&mut self, code: &str) -> Option<&mut Slot> {
        self.slots.iter_mut().find(|slot| slot.code() == code)
    }

    pub fn is_valid_code(&self, code: &str) -> bool {
        self.find(code).is_some()
    }

    /// Whether the slot still holds anything. Unknown codes are an error.
    pub fn is_in_stock(&self, code: &str) -> Result<bool> {
        self.find(code)
            .map(Slot::is_in_stock)
            .ok_or_else(|| VendingError::UnknownCode(code.to_string()))
    }

    /// Every product priced at or below `balance`, in slot order.
    pub fn affordable(&self, balance: DisplayPair) -> Vec<&Product> {
        let budget = to_minor_units(balance);
        self.slots
            .iter()
            .map(Slot::product)
            .filter(|product| product.price() <= budget)
            .collect()
    }

    /// Vends one item from `code` if the code exists, the slot is stocked and
    /// its product is affordable with `balance`.
    ///
    /// Charging the customer is left to the caller. Returns false, changing
    /// nothing, when any check fails.
    pub fn attempt_vend(&mut self, code: &str, balance: DisplayPair) -> bool {
        if !self.is_valid_code(code) || !matches!(self.is_in_stock(code), Ok(true)) {
            return false;
        }
        let Some(price) = self.find(code).map(|slot| slot.product().price()) else {
            return false;
        };
        // Products have no identity, so membership is decided on price.
        let affordable = self
            .affordable(balance)
            .iter()
            .any(|product| product.price() == price);
        if !affordable {
            return false;
        }
        self.find_mut(code).is_some_and(Slot::vend_item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::code::MAX_SLOTS;
    use crate::domain::money::Money;

    fn pair(cents: u64) -> DisplayPair {
        Money::from_cents(cents).to_display()
    }

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog
            .add_slot(Product::new("Cheetos", Money::from_cents(75)), 10)
            .unwrap();
        catalog
            .add_slot(Product::new("Pretzels", Money::from_cents(50)), 7)
            .unwrap();
        catalog
            .add_slot(Product::new("Beef Jerky", Money::from_cents(140)), 0)
            .unwrap();
        catalog
    }

    #[test]
    fn test_add_slot_assigns_codes_in_order() {
        let catalog = catalog();
        let codes: Vec<&str> = catalog.slots().iter().map(|s| s.code().as_str()).collect();
        assert_eq!(codes, ["A1", "A2", "A3"]);
    }

    #[test]
    fn test_add_slot_when_full() {
        let mut catalog = Catalog::new();
        for _ in 0..MAX_SLOTS {
            catalog
                .add_slot(Product::new("Gum", Money::from_cents(10)), 1)
                .unwrap();
        }
        let result = catalog.add_slot(Product::new("Gum", Money::from_cents(10)), 1);
        assert!(matches!(result, Err(VendingError::CatalogFull)));
        assert_eq!(catalog.slots().len(), MAX_SLOTS);
    }

    #[test]
    fn test_find_and_validity() {
        let catalog = catalog();
        assert_eq!(catalog.find("A2").unwrap().product().name(), "Pretzels");
        assert!(catalog.find("Z9").is_none());
        assert!(catalog.is_valid_code("A1"));
        assert!(!catalog.is_valid_code("a1"));
    }

    #[test]
    fn test_is_in_stock() {
        let catalog = catalog();
        assert!(catalog.is_in_stock("A1").unwrap());
        assert!(!catalog.is_in_stock("A3").unwrap());
        assert!(matches!(
            catalog.is_in_stock("Z9"),
            Err(VendingError::UnknownCode(code)) if code == "Z9"
        ));
    }

    #[test]
    fn test_affordable_filters_by_price() {
        let catalog = catalog();
        let names: Vec<&str> = catalog.affordable(pair(75)).iter().map(|p| p.name()).collect();
        assert_eq!(names, ["Cheetos", "Pretzels"]);
        assert!(catalog.affordable(pair(49)).is_empty());
        assert_eq!(catalog.affordable(pair(500)).len(), 3);
    }

    #[test]
    fn test_attempt_vend_success() {
        let mut catalog = catalog();
        assert!(catalog.attempt_vend("A1", pair(75)));
        assert_eq!(catalog.find("A1").unwrap().quantity(), 9);
    }

    #[test]
    fn test_attempt_vend_unaffordable() {
        let mut catalog = catalog();
        assert!(!catalog.attempt_vend("A1", pair(50)));
        assert_eq!(catalog.find("A1").unwrap().quantity(), 10);
    }

    #[test]
    fn test_attempt_vend_out_of_stock() {
        let mut catalog = catalog();
        assert!(!catalog.attempt_vend("A3", pair(1000)));
        assert_eq!(catalog.find("A3").unwrap().quantity(), 0);
    }

    #[test]
    fn test_attempt_vend_unknown_code() {
        let mut catalog = catalog();
        let before: Vec<u32> = catalog.slots().iter().map(Slot::quantity).collect();
        assert!(!catalog.attempt_vend("Z9", pair(1000)));
        let after: Vec<u32> = catalog.slots().iter().map(Slot::quantity).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_attempt_vend_with_duplicate_products() {
        let mut catalog = Catalog::new();
        catalog
            .add_slot(Product::new("Cola", Money::from_cents(100)), 1)
            .unwrap();
        catalog
            .add_slot(Product::new("Cola", Money::from_cents(100)), 1)
            .unwrap();

        assert_eq!(catalog.affordable(pair(100)).len(), 2);
        assert!(catalog.attempt_vend("A2", pair(100)));
        assert_eq!(catalog.find("A1").unwrap().quantity(), 1);
        assert_eq!(catalog.find("A2").unwrap().quantity(), 0);
    }
}
