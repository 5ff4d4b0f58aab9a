use crate::domain::ids::SellerId;
use crate::domain::money::Money;
use crate::error::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

#[derive(Serialize)]
struct PayableRow {
    seller: SellerId,
    payable: Money,
}

/// Writes per-seller payable amounts as `seller,payable` CSV rows, in
/// ascending seller order.
pub struct PayableWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> PayableWriter<W> {
    /// Creates a writer over `sink`; the header row is written with the
    /// first payable.
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes one row per seller and flushes the sink.
    pub fn write_payables(&mut self, payables: &BTreeMap<SellerId, Money>) -> Result<()> {
        for (seller, payable) in payables {
            self.writer.serialize(PayableRow {
                seller: *seller,
                payable: *payable,
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
