use crate::domain::money::Money;
use crate::domain::slot::Slot;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct InventoryRow<'a> {
    code: &'a str,
    name: &'a str,
    price: String,
    quantity: u32,
}

/// Writes the end-of-session inventory as CSV.
///
/// One `code,name,price,quantity` row per slot, followed by a
/// `revenue,<amount>` trailer.
pub struct InventoryWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> InventoryWriter<W> {
    pub fn new(sink: W) -> Self {
        let writer = csv::WriterBuilder::new().flexible(true).from_writer(sink);
        Self { writer }
    }

    pub fn write_inventory(&mut self, slots: &[Slot], revenue: Money) -> Result<()> {
        for slot in slots {
            self.writer.serialize(InventoryRow {
                code: slot.code().as_str(),
                name: slot.product().name(),
                price: slot.product().price().to_string(),
                quantity: slot.quantity(),
            })?;
        }
        self.writer
            .write_record(["revenue", revenue.to_string().as_str()])?;
        self.writer.flush()?;
        Ok(())
    }
}
