/// Errors that can occur while acquiring a run export.
///
/// Only transport failures are errors; malformed content never is.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// I/O error reading the export
    #[error("Failed to read run export: {0}")]
    IoError(#[from] std::io::Error),
}
