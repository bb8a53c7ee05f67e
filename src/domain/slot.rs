use super::code::SlotCode;
use super::product::Product;

/// One row position in the machine: a product, its remaining stock and its code.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    code: SlotCode,
    product: Product,
    quantity: u32,
}

impl Slot {
    pub(crate) fn new(code: SlotCode, product: Product, quantity: u32) -> Self {
        Self {
            code,
            product,
            quantity,
        }
    }

    pub fn code(&self) -> &SlotCode {
        &self.code
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn is_in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// Takes one item out of the slot. Returns false if it was already empty.
    pub(crate) fn vend_item(&mut self) -> bool {
        if self.is_in_stock() {
            self.quantity -= 1;
            true
        } else {
            false
        }
    }
}
