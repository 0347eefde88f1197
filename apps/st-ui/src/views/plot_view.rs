use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoints, Points};
use st_app::PlotSpec;
use st_app::plot::{ObservedPoint, SeriesStyle};

const OBSERVED_COLOR: egui::Color32 = egui::Color32::from_rgb(31, 119, 180);
const FIT_COLOR: egui::Color32 = egui::Color32::from_rgb(214, 39, 40);

#[derive(Default)]
pub struct PlotView {
    show_observations_table: bool,
}

impl PlotView {
    pub fn show(&mut self, ui: &mut egui::Ui, spec: Option<&PlotSpec>) {
        let Some(spec) = spec else {
            ui.label("Select an alloy to plot its surface tension");
            return;
        };

        ui.heading(&spec.title);
        if let Some(notice) = &spec.notice {
            ui.colored_label(egui::Color32::from_rgb(200, 120, 0), notice);
        }
        ui.separator();

        let plot_height = (ui.available_height() - 200.0).max(240.0);
        let mut plot = Plot::new("surface_tension_plot")
            .height(plot_height)
            .show_grid(spec.show_grid)
            .x_axis_label(spec.x_label.clone())
            .y_axis_label(spec.y_label.clone());
        if spec.show_legend {
            plot = plot.legend(Legend::default());
        }

        plot.show(ui, |plot_ui| {
            let cap = cap_half_width(&spec.observed.points);
            for point in &spec.observed.points {
                for segment in error_bar_segments(point, cap) {
                    plot_ui.line(Line::new(PlotPoints::from(segment.to_vec())).color(OBSERVED_COLOR));
                }
            }

            if !spec.observed.points.is_empty() {
                let markers: Vec<[f64; 2]> = spec
                    .observed
                    .points
                    .iter()
                    .map(|p| [p.t, p.sigma])
                    .collect();
                plot_ui.points(
                    Points::new(PlotPoints::from(markers))
                        .radius(4.0)
                        .color(OBSERVED_COLOR)
                        .name(&spec.observed.name),
                );
            }

            if let Some(fit) = &spec.fit {
                let mut line = Line::new(PlotPoints::from(fit.points.clone()))
                    .color(FIT_COLOR)
                    .name(&fit.name);
                if fit.style == SeriesStyle::Dashed {
                    line = line.style(LineStyle::dashed_loose());
                }
                plot_ui.line(line);
            }
        });

        ui.separator();
        ui.group(|ui| {
            ui.add(egui::Label::new(spec.metadata_text()).wrap());
        });

        if !spec.observed.points.is_empty() {
            ui.checkbox(&mut self.show_observations_table, "Show observations");
            if self.show_observations_table {
                egui::Grid::new("observations_grid")
                    .striped(true)
                    .show(ui, |ui| {
                        ui.strong("T (°C)");
                        ui.strong("sigma (N/m)");
                        ui.strong("stddev");
                        ui.end_row();
                        for p in &spec.observed.points {
                            ui.label(format!("{:.2}", p.t));
                            ui.label(format!("{:.5}", p.sigma));
                            ui.label(format!("{:.5}", p.stddev));
                            ui.end_row();
                        }
                    });
            }
        }
    }
}

/// Half the width of an error bar cap, in temperature units.
fn cap_half_width(points: &[ObservedPoint]) -> f64 {
    let (lo, hi) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.t), hi.max(p.t))
        });
    let range = hi - lo;
    if range.is_finite() && range > 0.0 {
        range * 0.01
    } else {
        1.0
    }
}

/// Vertical bar plus top and bottom caps.
fn error_bar_segments(point: &ObservedPoint, cap: f64) -> [[[f64; 2]; 2]; 3] {
    let [low, high] = point.error_bar();
    [
        [low, high],
        [[point.t - cap, low[1]], [point.t + cap, low[1]]],
        [[point.t - cap, high[1]], [point.t + cap, high[1]]],
    ]
}
