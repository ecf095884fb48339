use std::cmp::Ordering;

use super::filter::Prefs;
use super::model::{Racquet, RacquetDataset};

// ---------------------------------------------------------------------------
// Ideal target
// ---------------------------------------------------------------------------

/// Flex is not a slider, so the ideal frame stiffness is a fixed constant.
pub const IDEAL_FLEX: f64 = 65.0;

const WEIGHT_FACTOR: f64 = 0.5;
const SWINGWEIGHT_FACTOR: f64 = 1.0;
const FLEX_FACTOR: f64 = 0.2;

/// The synthetic "ideal" racquet derived from the midpoints of the active
/// preference windows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdealTarget {
    pub weight: f64,
    pub swing_weight: f64,
    pub flex: f64,
}

impl IdealTarget {
    pub fn from_prefs(prefs: &Prefs) -> Self {
        IdealTarget {
            weight: (prefs.weight.0 + prefs.weight.1) / 2.0,
            swing_weight: (prefs.swingweight.0 + prefs.swingweight.1) / 2.0,
            flex: IDEAL_FLEX,
        }
    }
}

/// Weighted L1 distance from the ideal target; lower is a better match.
/// `None` when any scored field is missing — such records rank after all
/// fully-specified ones.
pub fn match_score(r: &Racquet, ideal: &IdealTarget) -> Option<f64> {
    let weight = r.weight?;
    let swing_weight = r.swing_weight?;
    let flex = r.flex?;
    Some(
        (weight - ideal.weight).abs() * WEIGHT_FACTOR
            + (swing_weight - ideal.swing_weight).abs() * SWINGWEIGHT_FACTOR
            + (flex - ideal.flex).abs() * FLEX_FACTOR,
    )
}

// ---------------------------------------------------------------------------
// Top-N ranking
// ---------------------------------------------------------------------------

/// Rank `indices` (into `dataset.racquets`) against the preference-derived
/// ideal target and return the best `n`, ascending by score.  The sort is
/// stable, so ties keep their original subset order.  An empty subset
/// yields an empty result.
pub fn top_picks(
    dataset: &RacquetDataset,
    indices: &[usize],
    prefs: &Prefs,
    n: usize,
) -> Vec<usize> {
    let ideal = IdealTarget::from_prefs(prefs);
    let mut scored: Vec<(usize, Option<f64>)> = indices
        .iter()
        .map(|&i| (i, match_score(&dataset.racquets[i], &ideal)))
        .collect();
    scored.sort_by(|(_, a), (_, b)| match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    scored.into_iter().take(n).map(|(i, _)| i).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn racquet(id: &str, swing_weight: f64, weight: f64, flex: f64) -> Racquet {
        Racquet {
            brand: "Wilson".into(),
            model_name: id.into(),
            price: Some(200.0),
            head_size: Some(100.0),
            weight: Some(weight),
            swing_weight: Some(swing_weight),
            flex: Some(flex),
            power_level: Some(2.0),
            length: Some(27.0),
            swing_speed: Some(2.0),
            id: id.into(),
        }
    }

    #[test]
    fn ideal_target_uses_range_midpoints_and_fixed_flex() {
        let prefs = Prefs {
            swingweight: (290.0, 310.0),
            weight: (280.0, 320.0),
            ..Prefs::default()
        };
        let ideal = IdealTarget::from_prefs(&prefs);
        assert_eq!(ideal.swing_weight, 300.0);
        assert_eq!(ideal.weight, 300.0);
        assert_eq!(ideal.flex, IDEAL_FLEX);
    }

    #[test]
    fn score_weights_swingweight_heaviest() {
        let ideal = IdealTarget {
            weight: 300.0,
            swing_weight: 320.0,
            flex: 65.0,
        };
        let r = racquet("a", 330.0, 310.0, 70.0);
        // 0.5*10 + 1.0*10 + 0.2*5 = 16
        assert_eq!(match_score(&r, &ideal), Some(16.0));
    }

    #[test]
    fn top_picks_is_deterministic_and_ascending() {
        let ds = RacquetDataset::from_racquets(vec![
            racquet("far", 360.0, 340.0, 70.0),
            racquet("near", 325.0, 300.0, 65.0),
            racquet("mid", 340.0, 310.0, 68.0),
            racquet("nearest", 325.0, 302.0, 65.0),
        ]);
        let prefs = Prefs {
            swingweight: (250.0, 400.0),
            weight: (250.0, 350.0),
            ..Prefs::default()
        };
        let indices: Vec<usize> = (0..ds.len()).collect();
        let picks = top_picks(&ds, &indices, &prefs, 3);
        assert_eq!(picks, top_picks(&ds, &indices, &prefs, 3));
        assert_eq!(picks.len(), 3);
        // "near" (score 0) beats "nearest" (score 1) beats "mid".
        assert_eq!(picks, vec![1, 3, 2]);
    }

    #[test]
    fn ties_keep_subset_order() {
        let ds = RacquetDataset::from_racquets(vec![
            racquet("first", 330.0, 300.0, 65.0),
            racquet("second", 330.0, 300.0, 65.0),
            racquet("third", 330.0, 300.0, 65.0),
        ]);
        let prefs = Prefs::default();
        let picks = top_picks(&ds, &[0, 1, 2], &prefs, 3);
        assert_eq!(picks, vec![0, 1, 2]);
    }

    #[test]
    fn missing_scored_fields_rank_last() {
        let mut incomplete = racquet("noflex", 325.0, 300.0, 65.0);
        incomplete.flex = None;
        let ds = RacquetDataset::from_racquets(vec![
            incomplete,
            racquet("far_but_complete", 390.0, 345.0, 75.0),
        ]);
        let picks = top_picks(&ds, &[0, 1], &Prefs::default(), 3);
        assert_eq!(picks, vec![1, 0]);
    }

    #[test]
    fn empty_subset_yields_empty_output() {
        let ds = RacquetDataset::from_racquets(Vec::new());
        assert!(top_picks(&ds, &[], &Prefs::default(), 3).is_empty());
    }
}
