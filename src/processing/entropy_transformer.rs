use crate::data_loading::ObservationTable;
use crate::error::{PipelineError, Result};
use ndarray::aview1;
use smartcore::linalg::basic::matrix::DenseMatrix;

/// Matica po entropickej transformácii: rovnaký počet riadkov ako
/// vstupná tabuľka, jeden stĺpec na vybranú feature. Globálne váhy
/// sa uchovávajú pre reporting.
#[derive(Debug)]
pub struct EntropyWeightedMatrix {
    pub matrix: DenseMatrix<f64>,
    pub feature_names: Vec<String>,
    pub weights: Vec<f64>,
}

/// Entropická (tf-idf-like) transformácia proporcionálnych features.
///
/// Pre stĺpec c s hodnotami p (na škále 0-scale):
/// `w_c = -ln(mean(p/scale))`, `t[i,c] = (p[i]/scale) * w_c`.
/// Zriedkavé kategórie (malý priemer) sa zosilnia, bežné utlmia.
/// Transformácia je čisto po stĺpcoch a nie je určená na reťazenie -
/// aplikuje sa len raz na pôvodné netransformované proporcie.
pub struct EntropyTransformer {
    scale: f64,
}

impl EntropyTransformer {
    /// Default škála 100 (LIWC proporcie sú v percentách)
    pub fn new() -> Self {
        Self { scale: 100.0 }
    }

    pub fn with_scale(scale: f64) -> Self {
        Self { scale }
    }

    /// Transformuje vybrané stĺpce tabuľky. Validácia beží pred výpočtom:
    /// záporná hodnota alebo nulový priemer stĺpca sa hlási ako chyba,
    /// nikdy sa potichu nekoerce na 0/1.
    pub fn transform(
        &self,
        table: &ObservationTable,
        columns: &[String],
    ) -> Result<EntropyWeightedMatrix> {
        if columns.is_empty() {
            return Err(PipelineError::InsufficientData {
                context: "entropy transform".to_string(),
                requested: 1,
                available: 0,
            });
        }

        let n = table.len();
        let mut transformed: Vec<Vec<f64>> = vec![Vec::with_capacity(columns.len()); n];
        let mut weights = Vec::with_capacity(columns.len());

        for name in columns {
            let values = table.numeric_column(name)?;

            if let Some(bad) = values.iter().find(|v| **v < 0.0 || !v.is_finite()) {
                return Err(PipelineError::Numeric {
                    stage: "entropy transform".to_string(),
                    reason: format!("stĺpec '{}' obsahuje hodnotu {}", name, bad),
                });
            }

            let scaled: Vec<f64> = values.iter().map(|v| v / self.scale).collect();
            let mean = aview1(&scaled).mean().unwrap_or(0.0);

            if mean == 0.0 {
                return Err(PipelineError::DegenerateColumn {
                    column: name.clone(),
                });
            }

            let weight = -mean.ln();
            weights.push(weight);

            for (row, value) in scaled.iter().enumerate() {
                transformed[row].push(value * weight);
            }
        }

        let matrix = DenseMatrix::from_2d_vec(&transformed).map_err(|e| PipelineError::Numeric {
            stage: "entropy transform".to_string(),
            reason: e.to_string(),
        })?;

        Ok(EntropyWeightedMatrix {
            matrix,
            feature_names: columns.to_vec(),
            weights,
        })
    }
}

impl Default for EntropyTransformer {
    fn default() -> Self {
        Self::new()
    }
}
