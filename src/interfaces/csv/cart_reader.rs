use crate::application::checkout::CartItem;
use crate::domain::ids::ListingId;
use crate::error::{PricingError, Result};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct CartRow {
    listing: ListingId,
    quantity: u32,
}

/// Streams cart items out of a `listing, quantity` CSV file.
///
/// Every row yields its own `Result`, so a bad row can be reported and
/// skipped while the rest of the cart is still read. Cells are trimmed, and a
/// quantity of 0 is rejected with the row's line number.
pub struct CartReader<R: Read> {
    records: csv::StringRecordsIntoIter<R>,
    headers: csv::StringRecord,
}

impl<R: Read> CartReader<R> {
    /// Reads the header row up front; a source whose header cannot be read
    /// is an error.
    pub fn new(source: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        let headers = reader.headers()?.clone();
        Ok(Self {
            records: reader.into_records(),
            headers,
        })
    }
}

impl<R: Read> Iterator for CartReader<R> {
    type Item = Result<CartItem>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = match self.records.next()? {
            Ok(record) => parse_row(&record, &self.headers),
            Err(e) => Err(e.into()),
        };
        Some(item)
    }
}

fn parse_row(record: &csv::StringRecord, headers: &csv::StringRecord) -> Result<CartItem> {
    let row: CartRow = record.deserialize(Some(headers))?;
    if row.quantity == 0 {
        let line = record.position().map_or(0, |position| position.line());
        return Err(PricingError::Validation(format!(
            "Cart row on line {} for listing {} has quantity 0",
            line, row.listing
        )));
    }
    Ok(CartItem {
        listing: row.listing,
        quantity: row.quantity,
    })
}
