//! # Protocol Descriptor Parsing
//!
//! Run exports carry one free-text descriptor line in their header block that
//! names the protocol, the chemistry, the dosage and operator comments. This
//! module decodes that line independently of the tabular sample data, so a
//! damaged descriptor never blocks sample decoding (and vice versa).
//!
//! Two steps are involved:
//!
//! 1. **Segment parsing** ([`ProtocolInfo::parse_segments`]): the line is split on
//!    `|` and each positional segment has its label stripped.
//! 2. **Dosage extraction** ([`Dosage::parse`]): the dosage token (`"25.5/0.95 ppm"`)
//!    is matched for a coagulant/polymer pair.

mod dosage;
mod info;

#[cfg(test)]
mod tests;

pub use dosage::Dosage;
pub use info::{
    ProtocolInfo, CHEMISTRY_LABEL, COMMENTS_LABEL, DOSAGE_LABEL, SEGMENT_DELIMITER, TITLE_LABEL,
};
