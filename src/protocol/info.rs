use serde::{Deserialize, Serialize};

use super::Dosage;

/// Segment separator of the protocol descriptor line
pub const SEGMENT_DELIMITER: char = '|';

/// Label preceding the title in segment 0
pub const TITLE_LABEL: &str = "Protocol Title:";

/// Label preceding the chemistry in segment 1
pub const CHEMISTRY_LABEL: &str = "Run Chemistry:";

/// Label preceding the dosage token in segment 2
pub const DOSAGE_LABEL: &str = "Run Dosage:";

/// Label preceding the free-form comments in segment 3
pub const COMMENTS_LABEL: &str = "Comments:";

/// Protocol descriptor extracted from the header block of a run export.
///
/// A descriptor line looks like:
///
/// ```text
/// Protocol Title: Standard Protocol | Run Chemistry: Alum/PolyDADMAC | Run Dosage: 25.5/0.95 ppm | Comments: Demo
/// ```
///
/// Segments are positional. A missing segment, or a segment whose label is
/// not found, yields an empty string for that field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolInfo {
    /// Protocol title
    pub title: String,

    /// Coagulant/polymer chemistry (e.g., "Alum/PolyDADMAC")
    pub chemistry: String,

    /// Raw dosage token (e.g., "25.5/0.95 ppm")
    pub dosage: String,

    /// Operator comments
    pub comments: String,

    /// Coagulant dose, present only when `dosage` holds an `A/B` pair
    pub coagulant: Option<f64>,

    /// Polymer dose, present only when `dosage` holds an `A/B` pair
    pub polymer: Option<f64>,
}

impl ProtocolInfo {
    /// Parse a full descriptor line: labelled segments plus the doses
    /// extracted from the dosage token.
    pub fn from_line(line: &str) -> Self {
        let mut info = Self::parse_segments(line);
        info.apply_dosage();
        info
    }

    /// Parse the four labelled segments only; `coagulant` and `polymer` stay `None`.
    pub fn parse_segments(line: &str) -> Self {
        let segments: Vec<&str> = line.split(SEGMENT_DELIMITER).collect();
        let field = |index: usize, label: &str| {
            segments
                .get(index)
                .map(|segment| strip_label(segment, label))
                .unwrap_or_default()
        };

        Self {
            title: field(0, TITLE_LABEL),
            chemistry: field(1, CHEMISTRY_LABEL),
            dosage: field(2, DOSAGE_LABEL),
            comments: field(3, COMMENTS_LABEL),
            coagulant: None,
            polymer: None,
        }
    }

    /// Fill `coagulant`/`polymer` from the raw dosage token.
    ///
    /// Both doses are cleared when the token holds no numeric pair.
    pub fn apply_dosage(&mut self) {
        let dose = Dosage::parse(&self.dosage);
        self.coagulant = dose.map(|d| d.coagulant);
        self.polymer = dose.map(|d| d.polymer);
    }

    /// Both doses, if the dosage token was parseable
    pub fn doses(&self) -> Option<Dosage> {
        match (self.coagulant, self.polymer) {
            (Some(coagulant), Some(polymer)) => Some(Dosage { coagulant, polymer }),
            _ => None,
        }
    }

    /// True when no text field was recovered and no dose was parsed
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.chemistry.is_empty()
            && self.dosage.is_empty()
            && self.comments.is_empty()
            && self.coagulant.is_none()
            && self.polymer.is_none()
    }
}

/// Text after the first occurrence of `label`, trimmed; empty if the label is absent.
///
/// Matching is case-sensitive.
fn strip_label(segment: &str, label: &str) -> String {
    segment
        .find(label)
        .map(|start| segment[start + label.len()..].trim().to_string())
        .unwrap_or_default()
}
