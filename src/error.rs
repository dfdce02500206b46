use derive_more::Display;

/// Batch-level ingest failures. Per-row problems (bad dates, missing
/// fields) never surface here; those rows are dropped where they stand.
#[derive(Debug, Display)]
pub enum IngestError {
    /// The upload could not be read as a spreadsheet at all.
    #[display(fmt = "Excel parsing failed: {}", _0)]
    MalformedSource(String),

    /// Every row was rejected, or the sheet had no data rows.
    #[display(fmt = "No valid data found in Excel file")]
    EmptyBatch,
}

impl std::error::Error for IngestError {}
