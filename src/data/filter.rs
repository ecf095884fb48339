use serde::{Deserialize, Serialize};

use super::model::{Racquet, RacquetDataset, BRANDS};

// ---------------------------------------------------------------------------
// Preference state
// ---------------------------------------------------------------------------

/// Slider bounds for the swingweight range.
pub const SWINGWEIGHT_BOUNDS: (f64, f64) = (250.0, 400.0);
/// Slider bounds for the static-weight range.
pub const WEIGHT_BOUNDS: (f64, f64) = (250.0, 350.0);
/// Step used by both range sliders; the two handles are kept at least one
/// step apart so min > max can never be constructed.
pub const RANGE_STEP: f64 = 5.0;

/// Player skill level selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    All,
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 4] = [
        Level::All,
        Level::Beginner,
        Level::Intermediate,
        Level::Advanced,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Level::All => "All",
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

/// Swing style selector; each concrete style requires an exact swing-speed
/// category match (slow = 1, moderate = 2, fast = 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwingStyle {
    #[default]
    All,
    Slow,
    Moderate,
    Fast,
}

impl SwingStyle {
    pub const ALL: [SwingStyle; 4] = [
        SwingStyle::All,
        SwingStyle::Slow,
        SwingStyle::Moderate,
        SwingStyle::Fast,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SwingStyle::All => "All",
            SwingStyle::Slow => "Slow",
            SwingStyle::Moderate => "Moderate",
            SwingStyle::Fast => "Fast",
        }
    }

    /// The swing-speed category this style demands, if any.
    fn required_speed(self) -> Option<f64> {
        match self {
            SwingStyle::All => None,
            SwingStyle::Slow => Some(1.0),
            SwingStyle::Moderate => Some(2.0),
            SwingStyle::Fast => Some(3.0),
        }
    }
}

/// User preferences driving the filter, the spec zone, and the ideal
/// target used for ranking.  Mutated only through UI handlers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prefs {
    pub level: Level,
    pub swing_style: SwingStyle,
    /// 1 (full control) … 5 (full power); 3 is neutral.
    pub power_pref: u8,
    /// Brand allow-list; empty means no brand restriction.
    pub brand_focuses: Vec<String>,
    /// Inclusive swingweight window [min, max].
    pub swingweight: (f64, f64),
    /// Inclusive weight window [min, max], grams.
    pub weight: (f64, f64),
}

impl Default for Prefs {
    fn default() -> Self {
        Prefs {
            level: Level::All,
            swing_style: SwingStyle::All,
            power_pref: 3,
            brand_focuses: BRANDS.iter().map(|b| b.to_string()).collect(),
            swingweight: SWINGWEIGHT_BOUNDS,
            weight: WEIGHT_BOUNDS,
        }
    }
}

impl Prefs {
    pub fn power_label(&self) -> &'static str {
        match self.power_pref {
            1 => "Control",
            2 => "Low Control",
            3 => "Neutral",
            4 => "Low Power",
            _ => "Power",
        }
    }
}

// ---------------------------------------------------------------------------
// Filter predicate
// ---------------------------------------------------------------------------

/// `true` when the value is present and inside the inclusive window.
/// A missing value fails the comparison and therefore excludes the record.
fn in_range(value: Option<f64>, (min, max): (f64, f64)) -> bool {
    value.is_some_and(|v| v >= min && v <= max)
}

/// Whether a single record passes every active preference predicate.
fn matches(r: &Racquet, prefs: &Prefs) -> bool {
    if !in_range(r.swing_weight, prefs.swingweight) {
        return false;
    }
    if !in_range(r.weight, prefs.weight) {
        return false;
    }
    if !prefs.brand_focuses.is_empty() && !prefs.brand_focuses.contains(&r.brand) {
        return false;
    }
    // Power gating: high preference wants power frames, low wants control
    // frames; 3 is neutral.
    if prefs.power_pref >= 4 && !r.power_level.is_some_and(|p| p >= 3.0) {
        return false;
    }
    if prefs.power_pref <= 2 && !r.power_level.is_some_and(|p| p <= 1.0) {
        return false;
    }
    match prefs.level {
        Level::Advanced => {
            if !r.head_size.is_some_and(|hs| hs < 102.0) {
                return false;
            }
            if !r.weight.is_some_and(|w| w > 290.0) {
                return false;
            }
        }
        Level::Beginner => {
            if !r.head_size.is_some_and(|hs| hs >= 100.0) {
                return false;
            }
            if !r.weight.is_some_and(|w| w <= 300.0) {
                return false;
            }
        }
        Level::All | Level::Intermediate => {}
    }
    if let Some(speed) = prefs.swing_style.required_speed() {
        if r.swing_speed != Some(speed) {
            return false;
        }
    }
    true
}

/// Return indices of records that pass all active preference predicates.
/// Pure and order-preserving: the result is a subsequence of the input.
pub fn filtered_indices(dataset: &RacquetDataset, prefs: &Prefs) -> Vec<usize> {
    dataset
        .racquets
        .iter()
        .enumerate()
        .filter(|(_, r)| matches(r, prefs))
        .map(|(i, _)| i)
        .collect()
}
