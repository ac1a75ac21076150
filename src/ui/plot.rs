use eframe::egui::{Color32, Ui};
use egui_plot::{Line, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Text};

use crate::data::view::PolarView;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Polar wind scatter (central panel)
// ---------------------------------------------------------------------------

/// Plot canvas edge, in points.
const PLOT_SIZE: f32 = 800.0;

/// Angular tick labels, in compass degrees.
const ANGLE_TICKS: [f64; 8] = [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0];

/// Number of radial grid rings.
const N_RINGS: usize = 4;

// Marker colours at 50% opacity (premultiplied alpha).
const IN_RANGE: Color32 = Color32::from_rgba_premultiplied(128, 0, 0, 128);
const OUT_OF_RANGE: Color32 = Color32::from_rgba_premultiplied(0, 0, 128, 128);
const GRID: Color32 = Color32::from_gray(90);

/// Project a (speed, direction) pair onto the plot plane.
/// Compass convention: 0° points up (north), angles grow clockwise.
fn polar_to_cartesian(radius: f64, angle_deg: f64) -> [f64; 2] {
    let theta = angle_deg.to_radians();
    [radius * theta.sin(), radius * theta.cos()]
}

/// Render the polar scatter in the central panel.
pub fn wind_polar_plot(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a buoy CSV to view wind data  (File → Open…)");
        });
        return;
    }

    let view = state.current_view();
    let grid_max = view.max_radius().max(1.0);
    let edge = grid_max * 1.18;

    Plot::new("wind_polar")
        .width(PLOT_SIZE)
        .height(PLOT_SIZE)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .include_x(-edge)
        .include_x(edge)
        .include_y(-edge)
        .include_y(edge)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // Radial rings, unlabeled.
            for ring in 1..=N_RINGS {
                let r = grid_max * ring as f64 / N_RINGS as f64;
                let circle: PlotPoints = (0..=128)
                    .map(|k| {
                        let theta = std::f64::consts::TAU * k as f64 / 128.0;
                        [r * theta.sin(), r * theta.cos()]
                    })
                    .collect();
                plot_ui.line(Line::new(circle).color(GRID).width(0.5));
            }

            // Spokes with angle labels every 45°.
            for angle in ANGLE_TICKS {
                let [x, y] = polar_to_cartesian(grid_max, angle);
                let spoke: PlotPoints = PlotPoints::from(vec![[0.0, 0.0], [x, y]]);
                plot_ui.line(Line::new(spoke).color(GRID).width(0.5));

                let [lx, ly] = polar_to_cartesian(grid_max * 1.1, angle);
                plot_ui.text(Text::new(PlotPoint::new(lx, ly), format!("{angle:.0}°")));
            }

            let (inside, outside) = split_points(&view);
            // Blue first so highlighted points draw on top.
            plot_ui.points(
                Points::new(outside)
                    .shape(MarkerShape::Circle)
                    .color(OUT_OF_RANGE)
                    .radius(2.5),
            );
            plot_ui.points(
                Points::new(inside)
                    .shape(MarkerShape::Circle)
                    .color(IN_RANGE)
                    .radius(2.5),
            );
        });
}

/// Split the view into highlighted / non-highlighted point series,
/// preserving row order within each.
fn split_points(view: &PolarView) -> (PlotPoints, PlotPoints) {
    let mut inside = Vec::new();
    let mut outside = Vec::new();
    for p in &view.points {
        let xy = polar_to_cartesian(p.radius, p.angle_deg);
        if p.highlighted {
            inside.push(xy);
        } else {
            outside.push(xy);
        }
    }
    (PlotPoints::from(inside), PlotPoints::from(outside))
}
