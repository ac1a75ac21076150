use chrono::{Duration, NaiveDate};
use eframe::egui::{self, Color32, RichText, Slider, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – date range control
// ---------------------------------------------------------------------------

/// Render the left panel with the date-range selection.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Wind Data Visualization");
    ui.separator();

    let Some((min_d, max_d)) = state.bounds else {
        ui.label("No dataset loaded.");
        return;
    };
    let (start, end) = state.selected_range.unwrap_or((min_d, max_d));

    ui.strong("Select a Date Range");
    ui.add_space(4.0);

    let total_days = (max_d - min_d).num_days();
    let mut start_off = (start - min_d).num_days();
    let mut end_off = (end - min_d).num_days();

    let mut changed = false;
    changed |= ui
        .add(
            Slider::new(&mut start_off, 0..=total_days)
                .text("start")
                .custom_formatter(move |off, _| date_label(min_d, off)),
        )
        .changed();
    changed |= ui
        .add(
            Slider::new(&mut end_off, 0..=total_days)
                .text("end")
                .custom_formatter(move |off, _| date_label(min_d, off)),
        )
        .changed();

    if changed {
        state.set_range(
            min_d + Duration::days(start_off),
            min_d + Duration::days(end_off),
        );
    }

    ui.add_space(4.0);
    ui.label(format!(
        "{} → {}",
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d")
    ));

    ui.separator();
    let view = state.current_view();
    let n_in = view.points.iter().filter(|p| p.highlighted).count();
    ui.label(format!(
        "{n_in} of {} observations in range",
        view.points.len()
    ));
}

fn date_label(min_d: NaiveDate, offset: f64) -> String {
    (min_d + Duration::days(offset as i64))
        .format("%Y-%m-%d")
        .to_string()
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} observations loaded, {} pass quality control",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Let the user switch to another buoy export. A failed load reports via the
/// status label and keeps the current dataset.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open buoy wind data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_csv(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} observations from {}",
                    dataset.len(),
                    path.display()
                );
                if let Err(e) = state.set_dataset(dataset) {
                    log::error!("Rejected {}: {e:#}", path.display());
                    state.status_message = Some(format!("Error: {e:#}"));
                }
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
