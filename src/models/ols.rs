use super::{Coefficient, FittedLinearModel, RegressionFitter};
use crate::error::{PipelineError, Result};
use nalgebra::{DMatrix, DVector};
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;
use statrs::distribution::{ContinuousCDF, StudentsT};

const RANK_TOLERANCE: f64 = 1e-10;

/// OLS regresia riešená cez SVD (robustné aj pre vysoké matice so
/// skoro kolineárnymi stĺpcami). Vracia koeficienty so štandardnými
/// chybami a p-hodnotami zo Studentovho t rozdelenia.
pub struct OlsRegressor;

impl OlsRegressor {
    pub fn new() -> Self {
        Self
    }

    /// Design matica s intercept stĺpcom jednotiek
    fn design_matrix(x: &DenseMatrix<f64>) -> DMatrix<f64> {
        let (rows, cols) = x.shape();
        DMatrix::from_fn(rows, cols + 1, |i, j| {
            if j == 0 {
                1.0
            } else {
                *x.get((i, j - 1))
            }
        })
    }

    /// (X'X)⁻¹ cez SVD komponenty: V Σ⁻² Vᵗ. Platné len pre maticu
    /// plnej hodnosti - hodnosť sa kontroluje pred volaním.
    fn xtx_inverse(
        v_t: &DMatrix<f64>,
        singular_values: &DVector<f64>,
        p: usize,
    ) -> DMatrix<f64> {
        let v = v_t.transpose();
        DMatrix::from_fn(p, p, |a, b| {
            (0..p)
                .map(|c| {
                    let s = singular_values[c];
                    v[(a, c)] * v[(b, c)] / (s * s)
                })
                .sum()
        })
    }
}

impl RegressionFitter for OlsRegressor {
    fn get_name(&self) -> &str {
        "OLS"
    }

    fn fit(
        &self,
        x: &DenseMatrix<f64>,
        predictor_names: &[String],
        y: &[f64],
    ) -> Result<FittedLinearModel> {
        let (n, k) = x.shape();
        if n != y.len() {
            return Err(PipelineError::Schema {
                column: "<outcome>".to_string(),
                reason: format!("X má {} riadkov, y má {} hodnôt", n, y.len()),
            });
        }
        if k != predictor_names.len() {
            return Err(PipelineError::Schema {
                column: "<prediktory>".to_string(),
                reason: format!("X má {} stĺpcov, mien je {}", k, predictor_names.len()),
            });
        }

        let p = k + 1; // prediktory + intercept
        if n <= p {
            // nulové reziduálne stupne voľnosti - model nie je fitovateľný
            return Err(PipelineError::InsufficientData {
                context: "OLS fit".to_string(),
                requested: p + 1,
                available: n,
            });
        }

        let design = Self::design_matrix(x);
        let target = DVector::from_column_slice(y);

        let svd = design.clone().svd(true, true);
        if svd.rank(RANK_TOLERANCE) < p {
            return Err(PipelineError::InsufficientData {
                context: "OLS fit: design matica nemá plnú hodnosť".to_string(),
                requested: p,
                available: svd.rank(RANK_TOLERANCE),
            });
        }

        let beta = svd
            .solve(&target, RANK_TOLERANCE)
            .map_err(|e| PipelineError::Numeric {
                stage: "OLS fit".to_string(),
                reason: e.to_string(),
            })?;

        let fitted = &design * &beta;
        let residuals = &target - &fitted;
        let rss: f64 = residuals.iter().map(|r| r * r).sum();

        let mean_y = y.iter().sum::<f64>() / n as f64;
        let tss: f64 = y.iter().map(|v| (v - mean_y).powi(2)).sum();
        if tss == 0.0 {
            return Err(PipelineError::Numeric {
                stage: "OLS fit".to_string(),
                reason: "outcome je konštantný, R² nie je definované".to_string(),
            });
        }

        let df = (n - p) as f64;
        let sigma2 = rss / df;
        let r2 = 1.0 - rss / tss;
        let adjusted_r2 = 1.0 - (1.0 - r2) * (n as f64 - 1.0) / df;

        let v_t = svd.v_t.as_ref().ok_or_else(|| PipelineError::Numeric {
            stage: "OLS fit".to_string(),
            reason: "SVD nevrátilo V maticu".to_string(),
        })?;
        let xtx_inv = Self::xtx_inverse(v_t, &svd.singular_values, p);

        let t_dist =
            StudentsT::new(0.0, 1.0, df).map_err(|e| PipelineError::Numeric {
                stage: "OLS fit".to_string(),
                reason: format!("t rozdelenie s df={}: {}", df, e),
            })?;

        let mut coefficients = Vec::with_capacity(p);
        for j in 0..p {
            let name = if j == 0 {
                "(intercept)".to_string()
            } else {
                predictor_names[j - 1].clone()
            };

            let estimate = beta[j];
            let std_error = (sigma2 * xtx_inv[(j, j)]).sqrt();
            let t_value = if std_error > 0.0 {
                estimate / std_error
            } else {
                f64::INFINITY
            };
            let p_value = if t_value.is_finite() {
                2.0 * (1.0 - t_dist.cdf(t_value.abs()))
            } else {
                0.0
            };

            coefficients.push(Coefficient {
                name,
                estimate,
                std_error,
                t_value,
                p_value,
            });
        }

        Ok(FittedLinearModel {
            coefficients,
            r2,
            adjusted_r2,
            observations: n,
        })
    }
}

impl Default for OlsRegressor {
    fn default() -> Self {
        Self::new()
    }
}
