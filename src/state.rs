use crate::data::filter::{
    filtered_indices, Level, Prefs, SwingStyle, RANGE_STEP, SWINGWEIGHT_BOUNDS, WEIGHT_BOUNDS,
};
use crate::data::model::{Racquet, RacquetDataset};
use crate::data::ranking::top_picks;
use crate::data::stats::brand_counts;

/// How many racquets can be compared side by side.
pub const SELECTION_CAPACITY: usize = 3;
/// How many top picks are surfaced in the sidebar.
pub const TOP_PICKS: usize = 3;

// ---------------------------------------------------------------------------
// Selection – comparison picks, capacity 3
// ---------------------------------------------------------------------------

/// Progress of the comparison selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    /// Nothing selected.
    Idle,
    /// One selection; not enough to compare.
    Partial,
    /// Two or three selections; the comparison overlay may open.
    Ready,
}

/// Ordered set of up to three record ids chosen for comparison.
/// Toggle semantics: selecting an already-selected id removes it; a fourth
/// distinct id is ignored.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn toggle(&mut self, id: &str) {
        if let Some(pos) = self.ids.iter().position(|s| s == id) {
            self.ids.remove(pos);
        } else if self.ids.len() < SELECTION_CAPACITY {
            self.ids.push(id.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn phase(&self) -> SelectionPhase {
        match self.ids.len() {
            0 => SelectionPhase::Idle,
            1 => SelectionPhase::Partial,
            _ => SelectionPhase::Ready,
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.  Every derived view is a
/// pure recomputation from (dataset, prefs, zone brands); there is no
/// incremental caching.
pub struct AppState {
    /// Loaded dataset (None until the startup load or File → Open succeeds).
    pub dataset: Option<RacquetDataset>,

    /// User preferences (spec zone, level, style, power, brand focus).
    pub prefs: Prefs,

    /// Indices passing the preference filter, in source order.
    pub filtered: Vec<usize>,

    /// Brands clicked in the "brands in your zone" list; when non-empty the
    /// plotted/ranked subset is restricted to them.
    pub zone_brands: Vec<String>,

    /// `filtered` further restricted by `zone_brands`.
    pub plotted: Vec<usize>,

    /// Best-matching indices of `plotted`, ascending by distance to the
    /// ideal target.
    pub top_picks: Vec<usize>,

    /// (brand, count) over the filtered subset, descending by count.
    pub brand_stats: Vec<(String, usize)>,

    /// Comparison picks.
    pub selection: Selection,

    /// Whether the comparison overlay is open; forced shut when the
    /// selection drops below two.
    pub comparing: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a dataset load is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            prefs: Prefs::default(),
            filtered: Vec::new(),
            zone_brands: Vec::new(),
            plotted: Vec::new(),
            top_picks: Vec::new(),
            brand_stats: Vec::new(),
            selection: Selection::default(),
            comparing: false,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and rebuild every derived view.
    /// Selections refer to ids from the previous load, so they are dropped.
    pub fn set_dataset(&mut self, dataset: RacquetDataset) {
        self.dataset = Some(dataset);
        self.selection.clear();
        self.comparing = false;
        self.zone_brands.clear();
        self.status_message = None;
        self.loading = false;
        self.refilter();
    }

    /// Recompute filtered/plotted/top-picks/brand-stats from current state.
    pub fn refilter(&mut self) {
        let Some(ds) = &self.dataset else {
            self.filtered.clear();
            self.plotted.clear();
            self.top_picks.clear();
            self.brand_stats.clear();
            return;
        };

        self.filtered = filtered_indices(ds, &self.prefs);

        // Zone brands that vanished from the filtered set are pruned, so a
        // stale restriction can never blank the plot.
        self.zone_brands
            .retain(|b| self.filtered.iter().any(|&i| &ds.racquets[i].brand == b));

        self.plotted = if self.zone_brands.is_empty() {
            self.filtered.clone()
        } else {
            self.filtered
                .iter()
                .copied()
                .filter(|&i| self.zone_brands.contains(&ds.racquets[i].brand))
                .collect()
        };

        self.brand_stats = brand_counts(self.filtered.iter().map(|&i| &ds.racquets[i]));
        self.top_picks = top_picks(ds, &self.plotted, &self.prefs, TOP_PICKS);
    }

    // ---- preference mutators (each one triggers a recompute) ----

    pub fn set_level(&mut self, level: Level) {
        self.prefs.level = level;
        self.refilter();
    }

    pub fn set_swing_style(&mut self, style: SwingStyle) {
        self.prefs.swing_style = style;
        self.refilter();
    }

    pub fn set_power_pref(&mut self, value: u8) {
        self.prefs.power_pref = value.clamp(1, 5);
        self.refilter();
    }

    pub fn toggle_brand_focus(&mut self, brand: &str) {
        match self.prefs.brand_focuses.iter().position(|b| b == brand) {
            Some(pos) => {
                self.prefs.brand_focuses.remove(pos);
            }
            None => self.prefs.brand_focuses.push(brand.to_string()),
        }
        self.refilter();
    }

    /// Move the lower swingweight handle; clamped one step under the upper.
    pub fn set_swingweight_min(&mut self, value: f64) {
        let (lo, _) = SWINGWEIGHT_BOUNDS;
        self.prefs.swingweight.0 = value.clamp(lo, self.prefs.swingweight.1 - RANGE_STEP);
        self.refilter();
    }

    pub fn set_swingweight_max(&mut self, value: f64) {
        let (_, hi) = SWINGWEIGHT_BOUNDS;
        self.prefs.swingweight.1 = value.clamp(self.prefs.swingweight.0 + RANGE_STEP, hi);
        self.refilter();
    }

    pub fn set_weight_min(&mut self, value: f64) {
        let (lo, _) = WEIGHT_BOUNDS;
        self.prefs.weight.0 = value.clamp(lo, self.prefs.weight.1 - RANGE_STEP);
        self.refilter();
    }

    pub fn set_weight_max(&mut self, value: f64) {
        let (_, hi) = WEIGHT_BOUNDS;
        self.prefs.weight.1 = value.clamp(self.prefs.weight.0 + RANGE_STEP, hi);
        self.refilter();
    }

    // ---- zone brand restriction ----

    pub fn toggle_zone_brand(&mut self, brand: &str) {
        match self.zone_brands.iter().position(|b| b == brand) {
            Some(pos) => {
                self.zone_brands.remove(pos);
            }
            None => self.zone_brands.push(brand.to_string()),
        }
        self.refilter();
    }

    pub fn clear_zone_brands(&mut self) {
        self.zone_brands.clear();
        self.refilter();
    }

    // ---- selection / comparison machine ----

    pub fn toggle_selection(&mut self, id: &str) {
        self.selection.toggle(id);
        self.enforce_comparison_invariant();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.comparing = false;
    }

    /// Open the comparison overlay; only possible with two or more picks.
    pub fn enter_compare(&mut self) {
        if self.selection.phase() == SelectionPhase::Ready {
            self.comparing = true;
        }
    }

    pub fn exit_compare(&mut self) {
        self.comparing = false;
    }

    fn enforce_comparison_invariant(&mut self) {
        if self.comparing && self.selection.len() < 2 {
            self.comparing = false;
        }
    }

    /// Resolve the current selection to records, in selection order.
    /// Ids that no longer resolve (possible only across loads) are skipped.
    pub fn selected_racquets(&self) -> Vec<&Racquet> {
        let Some(ds) = &self.dataset else {
            return Vec::new();
        };
        self.selection
            .ids()
            .iter()
            .filter_map(|id| ds.by_id(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Racquet;

    fn racquet(id: &str, brand: &str, swing_weight: f64, weight: f64) -> Racquet {
        Racquet {
            brand: brand.into(),
            model_name: id.into(),
            price: Some(200.0),
            head_size: Some(100.0),
            weight: Some(weight),
            swing_weight: Some(swing_weight),
            flex: Some(65.0),
            power_level: Some(2.0),
            length: Some(27.0),
            swing_speed: Some(2.0),
            id: id.into(),
        }
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        state.set_dataset(RacquetDataset::from_racquets(vec![
            racquet("a", "Wilson", 300.0, 300.0),
            racquet("b", "Head", 310.0, 305.0),
            racquet("c", "Head", 320.0, 310.0),
            racquet("d", "Yonex", 330.0, 315.0),
        ]));
        state
    }

    #[test]
    fn selection_caps_at_three_and_toggles_off() {
        let mut sel = Selection::default();
        sel.toggle("a");
        sel.toggle("b");
        sel.toggle("c");
        assert_eq!(sel.phase(), SelectionPhase::Ready);

        // Fourth distinct id is a no-op.
        sel.toggle("d");
        assert_eq!(sel.ids(), ["a", "b", "c"]);

        // Toggling a member removes it regardless of fullness.
        sel.toggle("b");
        assert_eq!(sel.ids(), ["a", "c"]);
        sel.toggle("a");
        assert_eq!(sel.phase(), SelectionPhase::Partial);
        sel.clear();
        assert_eq!(sel.phase(), SelectionPhase::Idle);
    }

    #[test]
    fn compare_requires_two_and_closes_when_dropping_below() {
        let mut state = loaded_state();

        state.enter_compare();
        assert!(!state.comparing);

        state.toggle_selection("a");
        state.enter_compare();
        assert!(!state.comparing);

        state.toggle_selection("b");
        state.enter_compare();
        assert!(state.comparing);

        // Deselecting below two while comparing forces the overlay shut.
        state.toggle_selection("b");
        assert!(!state.comparing);
    }

    #[test]
    fn clear_selection_resets_to_idle() {
        let mut state = loaded_state();
        state.toggle_selection("a");
        state.toggle_selection("b");
        state.enter_compare();
        state.clear_selection();
        assert!(state.selection.is_empty());
        assert!(!state.comparing);
        assert_eq!(state.selection.phase(), SelectionPhase::Idle);
    }

    #[test]
    fn zone_brand_restriction_narrows_plotted_subset() {
        let mut state = loaded_state();
        assert_eq!(state.plotted, vec![0, 1, 2, 3]);

        state.toggle_zone_brand("Head");
        assert_eq!(state.plotted, vec![1, 2]);

        state.toggle_zone_brand("Head");
        assert_eq!(state.plotted, vec![0, 1, 2, 3]);
    }

    #[test]
    fn zone_brands_pruned_when_filtered_out() {
        let mut state = loaded_state();
        state.toggle_zone_brand("Yonex");
        assert_eq!(state.plotted, vec![3]);

        // Narrow the swingweight window so Yonex ("d", 330) falls out.
        state.set_swingweight_max(325.0);
        assert!(state.zone_brands.is_empty());
        assert_eq!(state.plotted, vec![0, 1, 2]);
    }

    #[test]
    fn range_setters_cannot_cross_handles() {
        let mut state = loaded_state();
        state.set_swingweight_min(500.0);
        assert_eq!(
            state.prefs.swingweight.0,
            state.prefs.swingweight.1 - RANGE_STEP
        );
        state.set_weight_max(0.0);
        assert_eq!(state.prefs.weight.1, state.prefs.weight.0 + RANGE_STEP);
        assert!(state.prefs.weight.0 <= state.prefs.weight.1);
    }

    #[test]
    fn brand_stats_follow_the_filtered_subset() {
        let state = loaded_state();
        assert_eq!(
            state.brand_stats,
            vec![
                ("Head".to_string(), 2),
                ("Wilson".to_string(), 1),
                ("Yonex".to_string(), 1),
            ]
        );
    }

    #[test]
    fn new_dataset_drops_stale_selection() {
        let mut state = loaded_state();
        state.toggle_selection("a");
        state.toggle_selection("b");
        state.set_dataset(RacquetDataset::from_racquets(vec![racquet(
            "fresh", "Wilson", 300.0, 300.0,
        )]));
        assert!(state.selection.is_empty());
        assert!(!state.comparing);
    }
}
