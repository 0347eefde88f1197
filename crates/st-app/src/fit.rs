//! Linear model evaluation over the observed temperature range.

use st_core::{Real, linspace, span};
use st_db::{AlloyRecord, SurfaceTensionModel};

use crate::error::{AppError, AppResult};

/// Points along the fit line when the caller does not choose.
pub const DEFAULT_FIT_SAMPLES: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct FitCurve {
    pub temperatures: Vec<Real>,
    pub sigma: Vec<Real>,
}

impl FitCurve {
    pub fn points(&self) -> Vec<[Real; 2]> {
        self.temperatures
            .iter()
            .zip(&self.sigma)
            .map(|(t, s)| [*t, *s])
            .collect()
    }

    pub fn len(&self) -> usize {
        self.temperatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperatures.is_empty()
    }
}

pub fn evaluate_model(model: &SurfaceTensionModel, t: Real) -> Real {
    model.evaluate(t)
}

/// `sample_count` evenly spaced temperatures over `[min(T), max(T)]` and the
/// model evaluated at each.
pub fn fit_curve(record: &AlloyRecord, sample_count: usize) -> AppResult<FitCurve> {
    let (t_min, t_max) =
        span(&record.t_superheat, "T_superheat").map_err(|_| AppError::InsufficientData {
            alloy: record.alloy.clone(),
        })?;

    if sample_count == 0 {
        return Err(AppError::InvalidInput(
            "fit sample count must be at least 1".to_string(),
        ));
    }

    let temperatures = linspace(t_min, t_max, sample_count)?;
    let sigma = temperatures
        .iter()
        .map(|t| evaluate_model(&record.model, *t))
        .collect();

    Ok(FitCurve {
        temperatures,
        sigma,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(t_superheat: Vec<f64>) -> AlloyRecord {
        let n = t_superheat.len();
        AlloyRecord {
            alloy: "CuSn10".to_string(),
            category: "copper".to_string(),
            t_superheat,
            sigma: vec![1.0; n],
            sigma_stddev: vec![0.01; n],
            model: SurfaceTensionModel {
                kind: "linear".to_string(),
                sigma_l: 1.2,
                dsigma_dt: -0.0015,
            },
            liquidus: 1020.0,
            experiment_id: "X-1".to_string(),
            funding: "internal".to_string(),
            reference: "ref".to_string(),
        }
    }

    #[test]
    fn three_point_fit() {
        let curve = fit_curve(&record(vec![100.0, 150.0, 200.0]), 3).unwrap();
        assert_eq!(curve.temperatures, vec![100.0, 150.0, 200.0]);
        let expected = [1.05, 0.975, 0.90];
        for (got, want) in curve.sigma.iter().zip(expected) {
            assert!((got - want).abs() < 1e-12, "{got} != {want}");
        }
    }

    #[test]
    fn range_follows_unsorted_samples() {
        let curve = fit_curve(&record(vec![180.0, 20.0, 90.0]), 5).unwrap();
        assert_eq!(curve.temperatures.first(), Some(&20.0));
        assert_eq!(curve.temperatures.last(), Some(&180.0));
    }

    #[test]
    fn single_sample_repeats_value() {
        let curve = fit_curve(&record(vec![75.0]), 4).unwrap();
        assert_eq!(curve.temperatures, vec![75.0; 4]);
        assert!(curve.sigma.iter().all(|s| (s - (1.2 - 0.0015 * 75.0)).abs() < 1e-12));
    }

    #[test]
    fn empty_series_is_insufficient_data() {
        let err = fit_curve(&record(vec![]), 100).unwrap_err();
        assert!(matches!(err, AppError::InsufficientData { ref alloy } if alloy == "CuSn10"));
    }

    #[test]
    fn zero_samples_is_invalid() {
        assert!(matches!(
            fit_curve(&record(vec![100.0, 200.0]), 0),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn points_pair_up() {
        let curve = fit_curve(&record(vec![100.0, 200.0]), 2).unwrap();
        assert_eq!(curve.points().len(), 2);
        assert_eq!(curve.points()[1][0], 200.0);
    }
}
