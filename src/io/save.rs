//! Exporting result rows as CSV and JSON

use crate::error::Result;
use crate::eval::EnsembleRecord;
use std::io::Write;

const CSV_HEADER: [&str; 8] = [
    "ensemble",
    "label",
    "auc",
    "threshold",
    "accuracy_dummy",
    "accuracy",
    "f1_dummy",
    "f1",
];

/// Write records as a flat CSV table
///
/// Members collapse into a single `+`-joined field so every row stays
/// one line of scalars.
pub fn write_records_csv<W: Write>(records: &[EnsembleRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;
    for record in records {
        csv_writer.write_record(&[
            record.ensemble_name(),
            record.label.clone(),
            record.auc.to_string(),
            record.threshold.to_string(),
            record.accuracy_dummy.to_string(),
            record.accuracy.to_string(),
            record.f1_dummy.to_string(),
            record.f1.to_string(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Render records as a CSV string
pub fn records_to_csv(records: &[EnsembleRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    write_records_csv(records, &mut buffer)?;
    Ok(String::from_utf8(buffer).expect("CSV output is UTF-8"))
}

/// Render records as pretty JSON
pub fn records_to_json(records: &[EnsembleRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
