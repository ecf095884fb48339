use std::collections::BTreeMap;
use std::f64::consts::TAU;

use eframe::egui::{self, Align2, Color32, RichText, Ui};
use egui_plot::{Line, Plot, PlotPoint, PlotPoints, Points, Text};

use crate::color::{brand_color, text_color_on};
use crate::data::model::{Racquet, SpecKey};
use crate::data::stats::SpecRange;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Comparison overlay (radar chart + spec table)
// ---------------------------------------------------------------------------

/// Show the side-by-side comparison window while `state.comparing` holds.
pub fn comparison_overlay(ctx: &egui::Context, state: &mut AppState) {
    if !state.comparing {
        return;
    }
    let racquets: Vec<Racquet> = state
        .selected_racquets()
        .into_iter()
        .cloned()
        .collect();
    let ranges: BTreeMap<SpecKey, SpecRange> = state
        .dataset
        .as_ref()
        .map(|ds| ds.spec_ranges.clone())
        .unwrap_or_default();

    let mut close = false;
    egui::Window::new("Racquet Comparison")
        .collapsible(false)
        .resizable(true)
        .default_size([620.0, 680.0])
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                for r in &racquets {
                    let color = brand_color(&r.brand);
                    ui.label(
                        RichText::new(format!(" {} {} ", r.brand, r.model_name))
                            .color(text_color_on(color))
                            .background_color(color),
                    );
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
                    if ui.button("Close").clicked() {
                        close = true;
                    }
                });
            });
            ui.separator();
            radar_chart(ui, &racquets, &ranges);
            ui.separator();
            spec_table(ui, &racquets);
        });

    if close {
        state.exit_compare();
    }
}

// ---------------------------------------------------------------------------
// Radar chart
// ---------------------------------------------------------------------------

/// Angle of axis `i`, starting at the top and walking clockwise.
fn axis_angle(i: usize) -> f64 {
    TAU / 4.0 - (i as f64 / SpecKey::ALL.len() as f64) * TAU
}

/// Normalized radar value for one attribute: global-range normalization,
/// clamped to [0, 1]; a missing value or absent range maps to 0.
fn radar_value(r: &Racquet, key: SpecKey, ranges: &BTreeMap<SpecKey, SpecRange>) -> f64 {
    match (key.value(r), ranges.get(&key)) {
        (Some(v), Some(range)) if !v.is_nan() => range.normalize(v),
        _ => 0.0,
    }
}

fn radar_chart(ui: &mut Ui, racquets: &[Racquet], ranges: &BTreeMap<SpecKey, SpecRange>) {
    Plot::new("radar_chart")
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-1.45)
        .include_x(1.45)
        .include_y(-1.35)
        .include_y(1.35)
        .height(360.0)
        .show(ui, |plot_ui| {
            let n = SpecKey::ALL.len();

            // Grid rings and spokes.
            for ring in [0.25, 0.5, 0.75, 1.0] {
                let pts: Vec<[f64; 2]> = (0..=n)
                    .map(|i| {
                        let a = axis_angle(i % n);
                        [ring * a.cos(), ring * a.sin()]
                    })
                    .collect();
                plot_ui.line(
                    Line::new(PlotPoints::from(pts))
                        .color(Color32::from_gray(230))
                        .width(1.0),
                );
            }
            for (i, key) in SpecKey::ALL.iter().enumerate() {
                let a = axis_angle(i);
                plot_ui.line(
                    Line::new(PlotPoints::from(vec![[0.0, 0.0], [a.cos(), a.sin()]]))
                        .color(Color32::from_gray(230))
                        .width(1.0),
                );
                plot_ui.text(Text::new(
                    PlotPoint::new(1.18 * a.cos(), 1.18 * a.sin()),
                    RichText::new(key.label()).size(10.0),
                ));
            }

            // One closed polygon per racquet, in its brand colour.
            for r in racquets {
                let color = brand_color(&r.brand);
                let pts: Vec<[f64; 2]> = (0..=n)
                    .map(|i| {
                        let key = SpecKey::ALL[i % n];
                        let a = axis_angle(i % n);
                        let v = radar_value(r, key, ranges);
                        [v * a.cos(), v * a.sin()]
                    })
                    .collect();
                plot_ui.line(
                    Line::new(PlotPoints::from(pts.clone()))
                        .color(color)
                        .width(2.0),
                );
                plot_ui.points(Points::new(pts).color(color).radius(3.0));
            }
        });
}

// ---------------------------------------------------------------------------
// Spec table
// ---------------------------------------------------------------------------

fn spec_table(ui: &mut Ui, racquets: &[Racquet]) {
    egui::Grid::new("spec_table")
        .striped(true)
        .min_col_width(90.0)
        .show(ui, |ui: &mut Ui| {
            ui.label("");
            for r in racquets {
                let color = brand_color(&r.brand);
                ui.label(
                    RichText::new(format!("{}\n{}", r.brand, r.model_name))
                        .strong()
                        .color(text_color_on(color))
                        .background_color(color),
                );
            }
            ui.end_row();

            for key in SpecKey::ALL {
                ui.label(RichText::new(key.label()).strong());
                for r in racquets {
                    ui.label(display_value(key.value(r), key.suffix()));
                }
                ui.end_row();
            }
        });
}

/// Raw value with unit suffix; missing or NaN values render as `N/A`.
fn display_value(v: Option<f64>, suffix: &str) -> String {
    match v {
        Some(v) if !v.is_nan() => {
            if v.fract() == 0.0 {
                format!("{v:.0}{suffix}")
            } else {
                format!("{v}{suffix}")
            }
        }
        _ => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn racquet(flex: Option<f64>) -> Racquet {
        Racquet {
            brand: "Wilson".into(),
            model_name: "Blade 98".into(),
            price: Some(249.0),
            head_size: Some(98.0),
            weight: Some(305.0),
            swing_weight: Some(321.0),
            flex,
            power_level: Some(1.0),
            length: Some(27.0),
            swing_speed: Some(3.0),
            id: "Wilson-249-0".into(),
        }
    }

    #[test]
    fn radar_value_normalizes_against_global_range() {
        let mut ranges = BTreeMap::new();
        ranges.insert(
            SpecKey::Flex,
            SpecRange {
                min: 55.0,
                max: 75.0,
            },
        );
        let r = racquet(Some(65.0));
        assert_eq!(radar_value(&r, SpecKey::Flex, &ranges), 0.5);
    }

    #[test]
    fn missing_value_or_range_maps_to_zero() {
        let ranges = BTreeMap::new();
        let r = racquet(None);
        assert_eq!(radar_value(&r, SpecKey::Flex, &ranges), 0.0);
        assert_eq!(radar_value(&r, SpecKey::Weight, &ranges), 0.0);
    }

    #[test]
    fn display_value_formats_and_falls_back() {
        assert_eq!(display_value(Some(305.0), " g"), "305 g");
        assert_eq!(display_value(Some(27.5), " in"), "27.5 in");
        assert_eq!(display_value(None, " g"), "N/A");
    }
}
