use std::path::{Path, PathBuf};

use eframe::egui::{self, Color32, RichText, ScrollArea, Slider, Stroke, Ui};

use crate::color::{brand_color, text_color_on};
use crate::data::filter::{Level, SwingStyle, RANGE_STEP, SWINGWEIGHT_BOUNDS, WEIGHT_BOUNDS};
use crate::data::model::BRANDS;
use crate::state::{AppState, SelectionPhase};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open CSV…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} racquets loaded, {} matches",
                ds.len(),
                state.plotted.len()
            ));
        } else if state.loading {
            ui.label("Loading racquet data…");
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left panel – preference controls
// ---------------------------------------------------------------------------

/// Render the preference controls that define the spec zone.
pub fn controls_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Your Profile");
    ui.label("Adjust your preferences to define your ideal spec zone.");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong("Level");
            ui.horizontal_wrapped(|ui: &mut Ui| {
                for level in Level::ALL {
                    if ui
                        .selectable_label(state.prefs.level == level, level.label())
                        .clicked()
                    {
                        state.set_level(level);
                    }
                }
            });
            ui.add_space(6.0);

            ui.strong("Swing style");
            ui.horizontal_wrapped(|ui: &mut Ui| {
                for style in SwingStyle::ALL {
                    if ui
                        .selectable_label(state.prefs.swing_style == style, style.label())
                        .clicked()
                    {
                        state.set_swing_style(style);
                    }
                }
            });
            ui.add_space(6.0);

            ui.strong("Brand focus");
            ui.horizontal_wrapped(|ui: &mut Ui| {
                for brand in BRANDS {
                    let active = state.prefs.brand_focuses.iter().any(|b| b == brand);
                    if ui.selectable_label(active, brand).clicked() {
                        state.toggle_brand_focus(brand);
                    }
                }
            });
            ui.add_space(6.0);

            let (sw_min, sw_max) = state.prefs.swingweight;
            ui.strong(format!("Swingweight  {sw_min:.0} – {sw_max:.0}"));
            range_slider(ui, "sw", sw_min, sw_max, SWINGWEIGHT_BOUNDS, |s, v| {
                s.set_swingweight_min(v)
            }, |s, v| s.set_swingweight_max(v), state);
            ui.add_space(6.0);

            let (w_min, w_max) = state.prefs.weight;
            ui.strong(format!("Racquet weight  {w_min:.0} – {w_max:.0} g"));
            range_slider(ui, "wt", w_min, w_max, WEIGHT_BOUNDS, |s, v| {
                s.set_weight_min(v)
            }, |s, v| s.set_weight_max(v), state);
            ui.add_space(6.0);

            ui.strong(format!("Power preference  ({})", state.prefs.power_label()));
            let mut power = state.prefs.power_pref;
            if ui
                .add(Slider::new(&mut power, 1..=5).show_value(false))
                .changed()
            {
                state.set_power_pref(power);
            }
            ui.add_space(10.0);

            spec_zone_summary(ui, state);
        });
}

/// Two sliders forming an inclusive [min, max] window; the state setters
/// keep the handles from crossing.
#[allow(clippy::too_many_arguments)]
fn range_slider(
    ui: &mut Ui,
    id: &str,
    min: f64,
    max: f64,
    bounds: (f64, f64),
    set_min: impl Fn(&mut AppState, f64),
    set_max: impl Fn(&mut AppState, f64),
    state: &mut AppState,
) {
    let mut lo = min;
    let mut hi = max;
    ui.push_id(id, |ui: &mut Ui| {
        if ui
            .add(
                Slider::new(&mut lo, bounds.0..=bounds.1)
                    .step_by(RANGE_STEP)
                    .text("min"),
            )
            .changed()
        {
            set_min(state, lo);
        }
        if ui
            .add(
                Slider::new(&mut hi, bounds.0..=bounds.1)
                    .step_by(RANGE_STEP)
                    .text("max"),
            )
            .changed()
        {
            set_max(state, hi);
        }
    });
}

fn spec_zone_summary(ui: &mut Ui, state: &AppState) {
    let prefs = &state.prefs;
    let focuses = if prefs.brand_focuses.is_empty() {
        "all brands".to_string()
    } else {
        prefs.brand_focuses.join(", ")
    };
    ui.group(|ui: &mut Ui| {
        ui.strong("Your spec zone");
        ui.label(format!(
            "Swingweight {:.0}–{:.0}, weight {:.0}–{:.0} g, {} level. Focusing on {}.",
            prefs.swingweight.0,
            prefs.swingweight.1,
            prefs.weight.0,
            prefs.weight.1,
            prefs.level.label(),
            focuses,
        ));
    });
}

// ---------------------------------------------------------------------------
// Right panel – picks, selections, brand histogram
// ---------------------------------------------------------------------------

enum SidebarAction {
    ToggleSelection(String),
    ClearSelection,
    EnterCompare,
    ToggleZoneBrand(String),
    ClearZoneBrands,
}

/// Render the right sidebar: top picks, comparison picks, brands in zone.
pub fn sidebar_panel(ui: &mut Ui, state: &mut AppState) {
    let mut action: Option<SidebarAction> = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            top_picks_section(ui, state, &mut action);
            ui.separator();
            selections_section(ui, state, &mut action);
            ui.separator();
            brand_summary_section(ui, state, &mut action);
        });

    match action {
        Some(SidebarAction::ToggleSelection(id)) => state.toggle_selection(&id),
        Some(SidebarAction::ClearSelection) => state.clear_selection(),
        Some(SidebarAction::EnterCompare) => state.enter_compare(),
        Some(SidebarAction::ToggleZoneBrand(brand)) => state.toggle_zone_brand(&brand),
        Some(SidebarAction::ClearZoneBrands) => state.clear_zone_brands(),
        None => {}
    }
}

fn top_picks_section(ui: &mut Ui, state: &AppState, action: &mut Option<SidebarAction>) {
    ui.strong("Top 3 picks for you");
    let Some(ds) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };
    if state.top_picks.is_empty() {
        ui.label("Adjust filters to find matching racquets.");
        return;
    }
    for (rank, &idx) in state.top_picks.iter().enumerate() {
        let r = &ds.racquets[idx];
        let color = brand_color(&r.brand);
        let selected = state.selection.contains(&r.id);
        let text = RichText::new(format!(
            "{}. {}  {}\nSW: {} | Wt: {} g",
            rank + 1,
            r.brand,
            r.model_name,
            fmt_opt(r.swing_weight),
            fmt_opt(r.weight),
        ))
        .color(text_color_on(color));
        let button = egui::Button::new(text).fill(color).stroke(if selected {
            Stroke::new(2.0, Color32::from_rgb(0x34, 0x3A, 0x40))
        } else {
            Stroke::NONE
        });
        if ui
            .add_sized([ui.available_width(), 40.0], button)
            .clicked()
        {
            *action = Some(SidebarAction::ToggleSelection(r.id.clone()));
        }
    }
}

fn selections_section(ui: &mut Ui, state: &AppState, action: &mut Option<SidebarAction>) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Compare details");
        if !state.selection.is_empty() && ui.small_button("Clear").clicked() {
            *action = Some(SidebarAction::ClearSelection);
        }
    });

    let selected = state.selected_racquets();
    if selected.is_empty() {
        ui.label("Click racquets in the plot to select up to 3 for comparison.");
    }
    for r in &selected {
        let color = brand_color(&r.brand);
        ui.horizontal(|ui: &mut Ui| {
            if let Some(uri) = logo_uri(&r.brand) {
                ui.add(egui::Image::from_uri(uri).max_height(18.0));
            }
            let text = RichText::new(format!("{}  {}", r.brand, r.model_name))
                .color(text_color_on(color));
            if ui.add(egui::Button::new(text).fill(color)).clicked() {
                *action = Some(SidebarAction::ToggleSelection(r.id.clone()));
            }
        });
    }

    let ready = state.selection.phase() == SelectionPhase::Ready;
    if ui
        .add_enabled(ready, egui::Button::new("COMPARE"))
        .clicked()
    {
        *action = Some(SidebarAction::EnterCompare);
    }
}

fn brand_summary_section(ui: &mut Ui, state: &AppState, action: &mut Option<SidebarAction>) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Brands in your zone");
        if !state.zone_brands.is_empty() && ui.small_button("Clear").clicked() {
            *action = Some(SidebarAction::ClearZoneBrands);
        }
    });

    if state.brand_stats.is_empty() {
        ui.label("Adjust filters to find matching racquets.");
        return;
    }
    for (brand, count) in &state.brand_stats {
        let color = brand_color(brand);
        let active = state.zone_brands.contains(brand);
        let text = RichText::new(format!("{brand}  ({count})")).color(text_color_on(color));
        let button = egui::Button::new(text).fill(color).stroke(if active {
            Stroke::new(2.0, Color32::from_rgb(0x34, 0x3A, 0x40))
        } else {
            Stroke::NONE
        });
        ui.horizontal(|ui: &mut Ui| {
            if let Some(uri) = logo_uri(brand) {
                ui.add(egui::Image::from_uri(uri).max_height(16.0));
            }
            if ui.add(button).clicked() {
                *action = Some(SidebarAction::ToggleZoneBrand(brand.clone()));
            }
        });
    }
}

/// Format an optional value for the sidebar cards.
fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{v:.0}"),
        None => "N/A".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Brand logos
// ---------------------------------------------------------------------------

/// Logo file for a brand, if one is shipped; absent files silently omit
/// the logo element.
fn logo_uri(brand: &str) -> Option<String> {
    logo_path(brand).map(|p| format!("file://{}", p.display()))
}

fn logo_path(brand: &str) -> Option<PathBuf> {
    let stem = match brand {
        "ProKennex" => "pro".to_string(),
        other => other.to_lowercase(),
    };
    let path = Path::new("assets/logos").join(format!("{stem}.jpg"));
    path.exists().then_some(path)
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open racquet data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_csv(&path) {
            Ok(dataset) => {
                log::info!("Loaded {} racquets from {}", dataset.len(), path.display());
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
                state.loading = false;
            }
        }
    }
}
