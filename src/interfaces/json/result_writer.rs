use crate::domain::pricing::PricingResult;
use crate::error::Result;
use std::io::Write;

/// Writes a pricing result as pretty-printed JSON followed by a newline.
pub fn write_result<W: Write>(mut sink: W, result: &PricingResult) -> Result<()> {
    serde_json::to_writer_pretty(&mut sink, result)?;
    writeln!(sink)?;
    sink.flush()?;
    Ok(())
}
