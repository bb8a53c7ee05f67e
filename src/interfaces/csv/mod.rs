pub mod inventory_writer;
pub mod stock_reader;
