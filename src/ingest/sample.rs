use serde::{Deserialize, Serialize};

/// Column holding the recorded date
pub const DATE_COLUMN: usize = 1;
/// Column holding the recorded wall-clock time
pub const TIME_COLUMN: usize = 2;
/// Column holding seconds since test start
pub const ELAPSED_TIME_COLUMN: usize = 3;
/// Column holding the floc count
pub const FLOC_COUNT_COLUMN: usize = 4;
/// Column holding the mean floc diameter
pub const MEAN_DIAMETER_COLUMN: usize = 5;
/// Column holding the mean floc volume
pub const MEAN_VOLUME_COLUMN: usize = 6;
/// Column holding the volume concentration (the charted quantity)
pub const VOL_CONCENTRATION_COLUMN: usize = 7;
/// Column holding the mixer speed
pub const RPM_COLUMN: usize = 8;
/// Column holding the velocity gradient (G value)
pub const G_VALUE_COLUMN: usize = 9;

/// One measurement epoch of a flocculation test run.
///
/// Date and time are kept exactly as recorded by the analyser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    /// Recorded date
    pub date: String,
    /// Recorded time of day
    pub time: String,
    /// Seconds since test start
    pub elapsed_time: f64,
    /// Number of flocs detected
    pub floc_count: f64,
    /// Mean floc diameter
    pub mean_diameter: f64,
    /// Mean floc volume
    pub mean_volume: f64,
    /// Floc volume concentration
    pub vol_concentration: f64,
    /// Mixer speed in revolutions per minute
    pub rpm: f64,
    /// Velocity gradient of the mixer
    pub g_value: f64,
}

impl Sample {
    /// Build a sample from the cells of a data row.
    ///
    /// Every numeric cell is parsed on its own; a missing or non-numeric
    /// cell becomes `0.0` without affecting the other fields.
    pub fn from_cells<S: AsRef<str>>(cells: &[S]) -> Self {
        let text = |index: usize| {
            cells
                .get(index)
                .map(|cell| cell.as_ref().to_string())
                .unwrap_or_default()
        };
        let number = |index: usize| {
            cells
                .get(index)
                .map(|cell| parse_number(cell.as_ref()))
                .unwrap_or(0.0)
        };

        Self {
            date: text(DATE_COLUMN),
            time: text(TIME_COLUMN),
            elapsed_time: number(ELAPSED_TIME_COLUMN),
            floc_count: number(FLOC_COUNT_COLUMN),
            mean_diameter: number(MEAN_DIAMETER_COLUMN),
            mean_volume: number(MEAN_VOLUME_COLUMN),
            vol_concentration: number(VOL_CONCENTRATION_COLUMN),
            rpm: number(RPM_COLUMN),
            g_value: number(G_VALUE_COLUMN),
        }
    }
}

/// Parse a numeric cell; anything that is not a finite number is `0.0`.
pub(crate) fn parse_number(cell: &str) -> f64 {
    cell.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}
