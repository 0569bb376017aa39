use crate::domain::model::SplitOutcome;
use crate::error::Result;
use std::io::Write;

/// Writes a split outcome as CSV.
///
/// Rows are sorted by participant id so the output is stable, with the
/// receipt-footer pair (subtotal, total billed) trailing the shares.
pub struct ShareWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ShareWriter<W> {
    /// Creates a new `ShareWriter` over any `Write` sink (e.g., Stdout).
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_outcome(&mut self, outcome: &SplitOutcome) -> Result<()> {
        self.writer.write_record(["participant", "amount"])?;

        let mut rows: Vec<_> = outcome.shares.iter().collect();
        rows.sort_by(|(a, _), (b, _)| a.cmp(b));
        for (participant, amount) in rows {
            self.writer
                .write_record([participant.as_str(), &amount.to_string()])?;
        }

        self.writer
            .write_record(["(subtotal)", &outcome.subtotal.to_string()])?;
        self.writer
            .write_record(["(total billed)", &outcome.total_billed.to_string()])?;
        self.writer.flush()?;
        Ok(())
    }
}
