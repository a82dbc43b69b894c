use log::debug;

use crate::protocol::ProtocolInfo;

use super::Sample;

/// Number of leading header rows that never carry samples
pub const HEADER_ROWS: usize = 5;

/// Row holding the protocol descriptor line
///
/// Fixed by the analyser's export layout; not detected from content.
pub const METADATA_ROW: usize = 1;

/// Cell of [`METADATA_ROW`] holding the protocol descriptor line
pub const METADATA_CELL: usize = 1;

/// A data row must have strictly more cells than this
pub const MIN_DATA_CELLS: usize = 10;

/// Decode the protocol descriptor from the header block.
///
/// An export that ends within the header block is incomplete: it yields an
/// empty [`ProtocolInfo`], as does a missing row or cell.
pub fn decode_protocol<R: AsRef<[String]>>(rows: &[R]) -> ProtocolInfo {
    if rows.len() <= HEADER_ROWS {
        debug!("Export has only {} rows; no protocol descriptor", rows.len());
        return ProtocolInfo::default();
    }

    match rows
        .get(METADATA_ROW)
        .and_then(|row| row.as_ref().get(METADATA_CELL))
    {
        Some(line) => ProtocolInfo::from_line(line),
        None => {
            debug!("No protocol descriptor at row {METADATA_ROW}, cell {METADATA_CELL}");
            ProtocolInfo::default()
        }
    }
}

/// Decode the samples of every qualifying data row, in row order.
///
/// Header rows and rows with too few cells are dropped silently.
pub fn decode_samples<R: AsRef<[String]>>(rows: &[R]) -> Vec<Sample> {
    let samples: Vec<Sample> = rows
        .iter()
        .skip(HEADER_ROWS)
        .map(|row| row.as_ref())
        .filter(|cells| is_data_row(cells))
        .map(Sample::from_cells)
        .collect();

    let dropped = rows.len().saturating_sub(HEADER_ROWS) - samples.len();
    if dropped > 0 {
        debug!("Dropped {} short rows after the header block", dropped);
    }

    samples
}

/// Shape check for rows past the header block
pub fn is_data_row(cells: &[String]) -> bool {
    cells.len() > MIN_DATA_CELLS
}
