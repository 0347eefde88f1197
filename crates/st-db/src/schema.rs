//! Database schema definitions.

use serde::{Deserialize, Serialize};

/// Typed view of one database record. Fields not listed here are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlloyRecord {
    pub alloy: String,
    pub category: String,
    #[serde(rename = "T_superheat")]
    pub t_superheat: Vec<f64>,
    pub sigma: Vec<f64>,
    pub sigma_stddev: Vec<f64>,
    pub model: SurfaceTensionModel,
    pub liquidus: f64,
    #[serde(rename = "experimentID")]
    pub experiment_id: String,
    pub funding: String,
    pub reference: String,
}

/// Linear surface tension model `sigma(T) = sigma_L + dsigma_dT * T`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SurfaceTensionModel {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "sigma_L")]
    pub sigma_l: f64,
    #[serde(rename = "dsigma_dT")]
    pub dsigma_dt: f64,
}

impl SurfaceTensionModel {
    pub fn evaluate(&self, t: f64) -> f64 {
        self.sigma_l + self.dsigma_dt * t
    }
}

impl AlloyRecord {
    /// Number of observations (length of the temperature series).
    pub fn sample_count(&self) -> usize {
        self.t_superheat.len()
    }

    /// Observations as `(T, sigma, sigma_stddev)` triples.
    pub fn observations(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.t_superheat
            .iter()
            .zip(&self.sigma)
            .zip(&self.sigma_stddev)
            .map(|((t, s), sd)| (*t, *s, *sd))
    }
}
