use crate::decomposition::DecompositionResult;
use crate::error::{PipelineError, Result};
use crate::models::{OlsRegressor, RegressionFitter};
use serde::{Deserialize, Serialize};
use smartcore::linalg::basic::arrays::Array;
use std::path::Path;

/// Jeden riadok selekčnej tabuľky: model s prvými k komponentmi.
/// Gain nie je definovaný pre k = 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionRow {
    pub k: usize,
    pub adjusted_r2: f64,
    pub gain: Option<f64>,
}

/// Tabuľka (k, adjusted R², gain) pre k = 1..K
#[derive(Debug, Clone)]
pub struct ComponentSelectionTable {
    rows: Vec<SelectionRow>,
}

impl ComponentSelectionTable {
    pub fn rows(&self) -> &[SelectionRow] {
        &self.rows
    }

    /// Zvolené k: maximum prírastku adjusted R² (nie maximum absolútneho
    /// fitu). Pri rovnosti prírastkov vyhráva najmenšie k - prvý výskyt
    /// maxima, nie posledný.
    pub fn chosen_k(&self) -> usize {
        let mut best_k = self.rows[0].k;
        let mut best_gain = f64::NEG_INFINITY;
        for row in &self.rows {
            if let Some(gain) = row.gain {
                if gain > best_gain {
                    best_gain = gain;
                    best_k = row.k;
                }
            }
        }
        best_k
    }

    /// Zapíše report do CSV (k, adjusted_r2, gain); gain pre k=1 je prázdny
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut wtr = csv::Writer::from_path(path)?;
        for row in &self.rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// Hľadanie veľkosti modelu: vnorené OLS modely outcome ~ U[,1..k],
/// vždy od prvého komponentu - komponenty sa pre jednotlivé k
/// nepreusporadúvajú ani znovu nevyberajú.
pub struct ComponentSelector {
    fitter: Box<dyn RegressionFitter>,
}

impl ComponentSelector {
    pub fn new() -> Self {
        Self {
            fitter: Box::new(OlsRegressor::new()),
        }
    }

    pub fn with_fitter(fitter: Box<dyn RegressionFitter>) -> Self {
        Self { fitter }
    }

    pub fn select_cutoff(
        &self,
        outcome: &[f64],
        decomposition: &DecompositionResult,
        max_k: usize,
    ) -> Result<ComponentSelectionTable> {
        let available = decomposition.components();
        if max_k == 0 || max_k > available {
            return Err(PipelineError::InsufficientData {
                context: "výber počtu komponentov".to_string(),
                requested: max_k,
                available,
            });
        }

        let rows_n = decomposition.u.shape().0;
        if rows_n != outcome.len() {
            return Err(PipelineError::Schema {
                column: "<outcome>".to_string(),
                reason: format!("U má {} riadkov, outcome {} hodnôt", rows_n, outcome.len()),
            });
        }

        let mut rows = Vec::with_capacity(max_k);
        let mut previous: Option<f64> = None;

        for k in 1..=max_k {
            let x = decomposition.scores_matrix(k)?;
            let names: Vec<String> = (1..=k).map(|c| format!("U{}", c)).collect();

            let model = self.fitter.fit(&x, &names, outcome)?;

            // prírastok môže byť záporný - zaznamenáva sa bez orezania
            let gain = previous.map(|prev| model.adjusted_r2 - prev);
            previous = Some(model.adjusted_r2);

            rows.push(SelectionRow {
                k,
                adjusted_r2: model.adjusted_r2,
                gain,
            });
        }

        Ok(ComponentSelectionTable { rows })
    }

}

impl Default for ComponentSelector {
    fn default() -> Self {
        Self::new()
    }
}
