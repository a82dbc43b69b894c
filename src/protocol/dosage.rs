use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Two decimal numbers separated by a forward slash; anything after the
/// second number (usually the unit) is ignored.
///
/// Numbers may omit either side of the point (`.5`, `25.`). The first one
/// must start at a number boundary, never inside a longer number.
const DOSAGE_PATTERN: &str = r"(?:^|[^\d.])(\d+(?:\.\d*)?|\.\d+)\s*/\s*(\d+(?:\.\d*)?|\.\d+)";

fn dosage_regex() -> Option<&'static Regex> {
    static DOSAGE_RE: OnceLock<Option<Regex>> = OnceLock::new();
    DOSAGE_RE
        .get_or_init(|| match Regex::new(DOSAGE_PATTERN) {
            Ok(re) => Some(re),
            Err(e) => {
                log::warn!("Could not compile dosage pattern: {}", e);
                None
            }
        })
        .as_ref()
}

/// Coagulant and polymer doses parsed from a compact `A/B unit` token.
///
/// Zero is a real dose, so a missing token is modelled as `None` at the call
/// site rather than as a zeroed `Dosage`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dosage {
    /// First number of the token
    pub coagulant: f64,

    /// Second number of the token
    pub polymer: f64,
}

impl Dosage {
    /// Extract the two doses from a dosage string such as `"25.5/0.95 ppm"`.
    ///
    /// Returns `None` when the string holds no `A/B` pair (e.g. `"N/A"`).
    pub fn parse(dosage: &str) -> Option<Self> {
        let captures = dosage_regex()?.captures(dosage)?;
        let coagulant = captures.get(1)?.as_str().parse::<f64>().ok()?;
        let polymer = captures.get(2)?.as_str().parse::<f64>().ok()?;
        Some(Self { coagulant, polymer })
    }
}
