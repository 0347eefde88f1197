//! Renderer-independent description of the alloy plot and its metadata.
//!
//! The GUI turns a [`PlotSpec`] into egui_plot items; nothing here draws.

use st_core::Real;
use st_db::AlloyRecord;
use std::fmt;

use crate::error::{AppError, AppResult};
use crate::fit::{DEFAULT_FIT_SAMPLES, fit_curve};

pub const X_AXIS_LABEL: &str = "Superheat Temperature (°C)";
pub const Y_AXIS_LABEL: &str = "Surface Tension (N/m)";
pub const OBSERVED_NAME: &str = "Measured Data";
pub const FIT_NAME: &str = "Model Fit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesStyle {
    /// Discrete markers with vertical error bars.
    MarkersWithErrorBars,
    Dashed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservedPoint {
    pub t: Real,
    pub sigma: Real,
    pub stddev: Real,
}

impl ObservedPoint {
    /// Endpoints of the error bar, bottom first.
    pub fn error_bar(&self) -> [[Real; 2]; 2] {
        [
            [self.t, self.sigma - self.stddev],
            [self.t, self.sigma + self.stddev],
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObservedSeries {
    pub name: String,
    pub style: SeriesStyle,
    pub points: Vec<ObservedPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FitSeries {
    pub name: String,
    pub style: SeriesStyle,
    pub points: Vec<[Real; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetadataLine {
    pub label: &'static str,
    pub value: String,
}

impl fmt::Display for MetadataLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub observed: ObservedSeries,
    pub fit: Option<FitSeries>,
    pub metadata: Vec<MetadataLine>,
    /// Set when part of the plot could not be built.
    pub notice: Option<String>,
    pub show_legend: bool,
    pub show_grid: bool,
}

impl PlotSpec {
    pub fn metadata_text(&self) -> String {
        self.metadata
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn compose(record: &AlloyRecord) -> PlotSpec {
    build(record, DEFAULT_FIT_SAMPLES)
}

pub fn compose_with_samples(record: &AlloyRecord, fit_samples: usize) -> AppResult<PlotSpec> {
    if fit_samples == 0 {
        return Err(AppError::InvalidInput(
            "fit sample count must be at least 1".to_string(),
        ));
    }
    Ok(build(record, fit_samples))
}

fn build(record: &AlloyRecord, fit_samples: usize) -> PlotSpec {
    let observed = ObservedSeries {
        name: OBSERVED_NAME.to_string(),
        style: SeriesStyle::MarkersWithErrorBars,
        points: record
            .observations()
            .map(|(t, sigma, stddev)| ObservedPoint { t, sigma, stddev })
            .collect(),
    };

    let (fit, notice) = match fit_curve(record, fit_samples) {
        Ok(curve) => (
            Some(FitSeries {
                name: FIT_NAME.to_string(),
                style: SeriesStyle::Dashed,
                points: curve.points(),
            }),
            None,
        ),
        Err(e) => (None, Some(e.to_string())),
    };

    PlotSpec {
        title: format!("Surface tension of {}", record.alloy),
        x_label: X_AXIS_LABEL.to_string(),
        y_label: Y_AXIS_LABEL.to_string(),
        observed,
        fit,
        metadata: metadata_lines(record),
        notice,
        show_legend: true,
        show_grid: true,
    }
}

fn metadata_lines(record: &AlloyRecord) -> Vec<MetadataLine> {
    let line = |label, value| MetadataLine { label, value };
    vec![
        line(
            "Liquidus Temperature",
            format!("{}°C", format_real(record.liquidus)),
        ),
        line("Category", record.category.clone()),
        line("Model", record.model.kind.clone()),
        line("sigma_L", format_real(record.model.sigma_l)),
        line("dsigma_dT", format_real(record.model.dsigma_dt)),
        line("Experiment ID", record.experiment_id.clone()),
        line("Funding", record.funding.clone()),
        line("Reference", record.reference.clone()),
    ]
}

/// Shortest round-trip text, keeping a trailing `.0` on whole numbers.
/// Exponents carry a sign and at least two digits (`1e-05`, `1e+16`).
fn format_real(v: Real) -> String {
    let text = format!("{v:?}");
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use st_db::SurfaceTensionModel;

    fn record(t_superheat: Vec<f64>) -> AlloyRecord {
        let n = t_superheat.len();
        AlloyRecord {
            alloy: "CuSn10".to_string(),
            category: "copper".to_string(),
            t_superheat,
            sigma: (0..n).map(|i| 1.0 - 0.05 * i as f64).collect(),
            sigma_stddev: vec![0.02; n],
            model: SurfaceTensionModel {
                kind: "linear".to_string(),
                sigma_l: 1.2,
                dsigma_dt: -0.0015,
            },
            liquidus: 1020.0,
            experiment_id: "X-1".to_string(),
            funding: "internal".to_string(),
            reference: "Lab notebook 7".to_string(),
        }
    }

    #[test]
    fn compose_builds_both_series() {
        let spec = compose(&record(vec![100.0, 150.0, 200.0]));
        assert_eq!(spec.title, "Surface tension of CuSn10");
        assert_eq!(spec.x_label, "Superheat Temperature (°C)");
        assert_eq!(spec.y_label, "Surface Tension (N/m)");
        assert_eq!(spec.observed.points.len(), 3);
        assert_eq!(spec.observed.style, SeriesStyle::MarkersWithErrorBars);

        let fit = spec.fit.as_ref().unwrap();
        assert_eq!(fit.points.len(), DEFAULT_FIT_SAMPLES);
        assert_eq!(fit.style, SeriesStyle::Dashed);
        assert_eq!(fit.name, "Model Fit");
        assert!(spec.notice.is_none());
    }

    #[test]
    fn error_bars_span_one_stddev() {
        let spec = compose(&record(vec![100.0]));
        let [low, high] = spec.observed.points[0].error_bar();
        assert_eq!(low[0], 100.0);
        assert!((low[1] - 0.98).abs() < 1e-12);
        assert!((high[1] - 1.02).abs() < 1e-12);
    }

    #[test]
    fn metadata_lists_each_field_on_its_own_line() {
        let spec = compose(&record(vec![100.0]));
        assert_eq!(
            spec.metadata_text(),
            "Liquidus Temperature: 1020.0°C\n\
             Category: copper\n\
             Model: linear\n\
             sigma_L: 1.2\n\
             dsigma_dT: -0.0015\n\
             Experiment ID: X-1\n\
             Funding: internal\n\
             Reference: Lab notebook 7"
        );
    }

    #[test]
    fn metadata_numbers_use_padded_exponents() {
        assert_eq!(format_real(1020.0), "1020.0");
        assert_eq!(format_real(-0.0015), "-0.0015");
        assert_eq!(format_real(0.0001), "0.0001");
        assert_eq!(format_real(1e-5), "1e-05");
        assert_eq!(format_real(-2.5e-7), "-2.5e-07");
        assert_eq!(format_real(1e16), "1e+16");
        assert_eq!(format_real(1.5e123), "1.5e+123");
    }

    #[test]
    fn empty_record_skips_fit_with_notice() {
        let spec = compose(&record(vec![]));
        assert!(spec.fit.is_none());
        assert!(spec.observed.points.is_empty());
        assert!(spec.notice.as_deref().unwrap().contains("no observations"));
        assert_eq!(spec.metadata.len(), 8);
    }

    #[test]
    fn custom_sample_count() {
        let spec = compose_with_samples(&record(vec![100.0, 200.0]), 7).unwrap();
        assert_eq!(spec.fit.unwrap().points.len(), 7);
        assert!(compose_with_samples(&record(vec![100.0]), 0).is_err());
    }
}
