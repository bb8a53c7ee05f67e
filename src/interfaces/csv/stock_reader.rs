use crate::domain::ports::StockSource;
use crate::domain::stock::StockEntry;
use crate::error::{Result, VendingError};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

/// Reads stock entries from a CSV source with a `name, price, quantity` header.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<StockEntry>`.
/// Whitespace around fields is trimmed.
pub struct StockReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> StockReader<R> {
    /// Creates a new `StockReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes stock entries.
    pub fn entries(self) -> impl Iterator<Item = Result<StockEntry>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(VendingError::from))
    }
}

/// Stock loaded from a CSV file on disk.
pub struct CsvStockSource {
    path: PathBuf,
}

impl CsvStockSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StockSource for CsvStockSource {
    /// Reads the whole file. Any malformed row fails the load, since skipping
    /// it would shift the codes of every later slot.
    fn load(&self) -> Result<Vec<StockEntry>> {
        let file = File::open(&self.path)?;
        StockReader::new(file).entries().collect()
    }
}
