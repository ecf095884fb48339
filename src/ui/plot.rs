use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{Plot, PlotPoints, Points, Polygon};

use crate::color::brand_color;
use crate::state::AppState;

/// Click tolerance around a marker, in plot units.
const CLICK_TOLERANCE: f64 = 3.0;

/// Emphasis ring colours.
const TOP_PICK_RING: Color32 = Color32::from_rgb(0xFF, 0xD7, 0x00);
const SELECTED_RING: Color32 = Color32::from_rgb(0x34, 0x3A, 0x40);

struct Marker {
    x: f64,
    y: f64,
    color: Color32,
    radius: f32,
    ring: Option<(Color32, f32)>,
    id: String,
}

// ---------------------------------------------------------------------------
// Scatter plot (central panel)
// ---------------------------------------------------------------------------

/// Render the swingweight × weight scatter with the spec-zone overlay.
/// Clicking near a point toggles that racquet in the comparison selection.
pub fn scatter_plot(ui: &mut Ui, state: &mut AppState) {
    let Some(ds) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a racquet CSV to explore  (File → Open CSV…)");
        });
        return;
    };

    // The grey backdrop shows the full dataset regardless of filters.
    let background: Vec<[f64; 2]> = ds
        .racquets
        .iter()
        .filter_map(|r| Some([r.swing_weight?, r.weight?]))
        .collect();

    let mut markers: Vec<Marker> = Vec::with_capacity(state.plotted.len());
    for &idx in &state.plotted {
        let r = &ds.racquets[idx];
        let (Some(x), Some(y)) = (r.swing_weight, r.weight) else {
            continue;
        };
        let is_top = state.top_picks.contains(&idx);
        let is_selected = state.selection.contains(&r.id);
        let radius = match (is_top, is_selected) {
            (true, true) => 10.0,
            (true, false) => 7.0,
            (false, true) => 6.5,
            (false, false) => 4.0,
        };
        let ring = if is_selected {
            Some((SELECTED_RING, radius + 2.5))
        } else if is_top {
            Some((TOP_PICK_RING, radius + 2.0))
        } else {
            None
        };
        markers.push(Marker {
            x,
            y,
            color: brand_color(&r.brand),
            radius,
            ring,
            id: r.id.clone(),
        });
    }

    let (sw_min, sw_max) = state.prefs.swingweight;
    let (w_min, w_max) = state.prefs.weight;

    let clicked_id = Plot::new("spec_plot")
        .x_axis_label("Swingweight")
        .y_axis_label("Racquet weight (g)")
        .include_x(270.0)
        .include_x(380.0)
        .include_y(250.0)
        .include_y(350.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // Spec zone: the user's preferred envelope.
            let corners = vec![
                [sw_min, w_min],
                [sw_max, w_min],
                [sw_max, w_max],
                [sw_min, w_max],
            ];
            plot_ui.polygon(
                Polygon::new(PlotPoints::from(corners))
                    .fill_color(Color32::from_rgba_unmultiplied(0x78, 0x90, 0x9C, 24))
                    .stroke(Stroke::new(1.0, Color32::from_gray(190)))
                    .name("Spec zone"),
            );

            plot_ui.points(
                Points::new(background.clone())
                    .color(Color32::from_gray(224))
                    .radius(2.0),
            );

            // Rings first so the brand-coloured dot sits on top.
            for m in &markers {
                if let Some((color, radius)) = m.ring {
                    plot_ui.points(Points::new(vec![[m.x, m.y]]).color(color).radius(radius));
                }
            }
            for m in &markers {
                plot_ui.points(Points::new(vec![[m.x, m.y]]).color(m.color).radius(m.radius));
            }

            if plot_ui.response().clicked() {
                plot_ui
                    .pointer_coordinate()
                    .and_then(|pos| nearest_marker(&markers, pos.x, pos.y))
            } else {
                None
            }
        })
        .inner;

    if let Some(id) = clicked_id {
        state.toggle_selection(&id);
    }
}

/// The closest marker within the click tolerance, if any.
fn nearest_marker(markers: &[Marker], x: f64, y: f64) -> Option<String> {
    markers
        .iter()
        .map(|m| {
            let d2 = (m.x - x).powi(2) + (m.y - y).powi(2);
            (d2, &m.id)
        })
        .filter(|(d2, _)| *d2 <= CLICK_TOLERANCE * CLICK_TOLERANCE)
        .min_by(|(a, _), (b, _)| a.total_cmp(b))
        .map(|(_, id)| id.clone())
}
