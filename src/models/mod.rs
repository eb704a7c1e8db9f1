use crate::error::{PipelineError, Result};
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;

pub mod ols;

pub use ols::OlsRegressor;

/// Jeden koeficient fitnutého lineárneho modelu
#[derive(Debug, Clone, serde::Serialize)]
pub struct Coefficient {
    pub name: String,
    pub estimate: f64,
    pub std_error: f64,
    pub t_value: f64,
    pub p_value: f64,
}

/// Typovaný výsledok fitu - žiadne spätné parsovanie formátovaného
/// výstupu, koeficienty sa čítajú priamo zo štruktúry.
#[derive(Debug, Clone)]
pub struct FittedLinearModel {
    pub coefficients: Vec<Coefficient>,
    pub r2: f64,
    pub adjusted_r2: f64,
    pub observations: usize,
}

impl FittedLinearModel {
    /// Predikcia pre maticu prediktorov (bez intercept stĺpca)
    pub fn predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>> {
        let (rows, cols) = x.shape();
        if cols + 1 != self.coefficients.len() {
            return Err(PipelineError::Schema {
                column: "<prediktory>".to_string(),
                reason: format!(
                    "model má {} koeficientov, vstup {} stĺpcov",
                    self.coefficients.len(),
                    cols
                ),
            });
        }

        let intercept = self.coefficients[0].estimate;
        Ok((0..rows)
            .map(|i| {
                intercept
                    + (0..cols)
                        .map(|j| self.coefficients[j + 1].estimate * x.get((i, j)))
                        .sum::<f64>()
            })
            .collect())
    }
}

/// Rozhranie k fitovaniu regresie - pipeline ho používa ako opaque
/// službu: fit(X, y) -> model, model.predict(X) -> y_hat.
pub trait RegressionFitter {
    fn get_name(&self) -> &str;

    fn fit(
        &self,
        x: &DenseMatrix<f64>,
        predictor_names: &[String],
        y: &[f64],
    ) -> Result<FittedLinearModel>;
}
