use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::decisions::DecisionRecord;
use crate::output::format_pd;

const CSV_HEADERS: [&str; 8] = [
    "ID", "Client", "Amount", "Term", "Purpose", "PD", "Decision", "Date",
];

/// Write decision records as CSV. PD is rendered as a percentage, the date
/// as YYYY-MM-DD, matching what the listing views show.
pub fn write_csv<W: Write>(records: &[&DecisionRecord], writer: W) -> Result<()> {
    let mut w = csv::Writer::from_writer(writer);

    w.write_record(CSV_HEADERS)
        .context("Failed to write CSV headers")?;

    for record in records {
        w.write_record([
            record.id.to_string(),
            record.client_name.clone(),
            format!("{:.0}", record.amount),
            record.term_months.to_string(),
            record.purpose.clone(),
            format_pd(record.pd),
            record.decision.to_string(),
            record.requested_at.format("%Y-%m-%d").to_string(),
        ])
        .context("Failed to write CSV record")?;
    }

    w.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Export decision records to a CSV file at `path`.
pub fn export_csv(records: &[&DecisionRecord], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create CSV file at {}", path.display()))?;
    write_csv(records, file)
}
