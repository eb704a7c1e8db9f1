use crate::error::{PipelineError, Result};
use crate::processing::EntropyWeightedMatrix;
use smartcore::linalg::basic::arrays::{Array, Array2};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linalg::traits::svd::SVDDecomposable;

/// Výsledok singulárneho rozkladu: U (pozorovania × komponenty),
/// singulárne hodnoty zoradené zostupne a V (features × komponenty).
#[derive(Debug)]
pub struct DecompositionResult {
    pub u: DenseMatrix<f64>,
    pub v: DenseMatrix<f64>,
    pub singular_values: Vec<f64>,
    pub feature_names: Vec<String>,
}

impl DecompositionResult {
    /// Počet komponentov v rozklade
    pub fn components(&self) -> usize {
        self.singular_values.len()
    }

    /// Skóre jedného komponentu pre všetky pozorovania (stĺpec U)
    pub fn component_scores(&self, component: usize) -> Result<Vec<f64>> {
        if component >= self.components() {
            return Err(PipelineError::InsufficientData {
                context: "component_scores".to_string(),
                requested: component + 1,
                available: self.components(),
            });
        }
        let rows = self.u.shape().0;
        Ok((0..rows).map(|i| *self.u.get((i, component))).collect())
    }

    /// Loadings jedného komponentu: (feature, hodnota) v poradí features
    pub fn component_loadings(&self, component: usize) -> Result<Vec<(String, f64)>> {
        if component >= self.components() {
            return Err(PipelineError::InsufficientData {
                context: "component_loadings".to_string(),
                requested: component + 1,
                available: self.components(),
            });
        }
        Ok(self
            .feature_names
            .iter()
            .enumerate()
            .map(|(j, name)| (name.clone(), *self.v.get((j, component))))
            .collect())
    }

    /// Matica skóre prvých k komponentov (prvých k stĺpcov U)
    pub fn scores_matrix(&self, k: usize) -> Result<DenseMatrix<f64>> {
        if k == 0 || k > self.components() {
            return Err(PipelineError::InsufficientData {
                context: "scores_matrix".to_string(),
                requested: k,
                available: self.components(),
            });
        }
        let rows = self.u.shape().0;
        let data: Vec<Vec<f64>> = (0..rows)
            .map(|i| (0..k).map(|j| *self.u.get((i, j))).collect())
            .collect();
        DenseMatrix::from_2d_vec(&data).map_err(|e| PipelineError::Numeric {
            stage: "scores_matrix".to_string(),
            reason: e.to_string(),
        })
    }

    /// Rekonštrukcia U·Σ·Vᵗ (round-trip kontrola v testoch)
    pub fn reconstruct(&self) -> DenseMatrix<f64> {
        let (rows, _) = self.u.shape();
        let (cols, _) = self.v.shape();
        let k = self.components();

        let mut data = vec![vec![0.0; cols]; rows];
        for (i, row) in data.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..k)
                    .map(|c| self.u.get((i, c)) * self.singular_values[c] * self.v.get((j, c)))
                    .sum();
            }
        }
        // rozmery sú konzistentné z konštrukcie
        DenseMatrix::from_2d_vec(&data).expect("rekonštrukcia s konzistentnými rozmermi")
    }
}

/// SVD rozklad entropicky váženej matice. Ponecháva min(m, n)
/// komponentov, voliteľne menej cez `cap`.
pub struct Decomposer {
    cap: Option<usize>,
}

impl Decomposer {
    pub fn new() -> Self {
        Self { cap: None }
    }

    pub fn with_cap(cap: usize) -> Self {
        Self { cap: Some(cap) }
    }

    pub fn decompose(&self, input: &EntropyWeightedMatrix) -> Result<DecompositionResult> {
        self.decompose_matrix(&input.matrix, &input.feature_names)
    }

    /// Rozloží m×n maticu. Nekonečné/NaN hodnoty sa kontrolujú pred
    /// výpočtom - rozklad nesmie zlyhať uprostred numerickej rutiny.
    pub fn decompose_matrix(
        &self,
        matrix: &DenseMatrix<f64>,
        feature_names: &[String],
    ) -> Result<DecompositionResult> {
        let (rows, cols) = matrix.shape();
        if rows == 0 || cols == 0 {
            return Err(PipelineError::InsufficientData {
                context: "svd".to_string(),
                requested: 1,
                available: 0,
            });
        }

        for i in 0..rows {
            for j in 0..cols {
                let v = *matrix.get((i, j));
                if !v.is_finite() {
                    return Err(PipelineError::Numeric {
                        stage: "svd".to_string(),
                        reason: format!("nekonečná hodnota {} na pozícii ({}, {})", v, i, j),
                    });
                }
            }
        }

        // smartcore SVD očakáva m >= n; pre širokú maticu sa rozloží
        // transponovaná matica a U/V sa vymenia
        let (svd_u, svd_v, s) = if rows >= cols {
            let svd = matrix.svd().map_err(|e| PipelineError::Numeric {
                stage: "svd".to_string(),
                reason: e.to_string(),
            })?;
            (svd.U, svd.V, svd.s)
        } else {
            let svd = matrix
                .transpose()
                .svd()
                .map_err(|e| PipelineError::Numeric {
                    stage: "svd".to_string(),
                    reason: e.to_string(),
                })?;
            (svd.V, svd.U, svd.s)
        };

        // kontrakt: komponenty zoradené podľa klesajúcej singulárnej hodnoty
        let mut order: Vec<usize> = (0..s.len()).collect();
        order.sort_by(|&a, &b| s[b].partial_cmp(&s[a]).unwrap_or(std::cmp::Ordering::Equal));

        let keep = match self.cap {
            Some(cap) => cap.min(order.len()),
            None => order.len(),
        };
        let order = &order[..keep];

        let u = Self::take_columns(&svd_u, order)?;
        let v = Self::take_columns(&svd_v, order)?;
        let singular_values: Vec<f64> = order.iter().map(|&i| s[i]).collect();

        Ok(DecompositionResult {
            u,
            v,
            singular_values,
            feature_names: feature_names.to_vec(),
        })
    }

    fn take_columns(matrix: &DenseMatrix<f64>, indices: &[usize]) -> Result<DenseMatrix<f64>> {
        let rows = matrix.shape().0;
        let data: Vec<Vec<f64>> = (0..rows)
            .map(|i| indices.iter().map(|&j| *matrix.get((i, j))).collect())
            .collect();
        DenseMatrix::from_2d_vec(&data).map_err(|e| PipelineError::Numeric {
            stage: "svd".to_string(),
            reason: e.to_string(),
        })
    }
}

impl Default for Decomposer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("f{}", i)).collect()
    }

    fn sample_matrix() -> DenseMatrix<f64> {
        DenseMatrix::from_2d_vec(&vec![
            vec![2.0, 0.5, 1.0],
            vec![1.0, 1.5, 0.0],
            vec![0.0, 0.5, 3.0],
            vec![4.0, 2.5, 1.0],
            vec![1.0, 0.0, 2.0],
        ])
        .unwrap()
    }

    #[test]
    fn singular_values_are_descending() {
        let result = Decomposer::new()
            .decompose_matrix(&sample_matrix(), &names(3))
            .unwrap();
        for pair in result.singular_values.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
        assert!(result.singular_values.iter().all(|s| *s >= 0.0));
    }

    #[test]
    fn reconstruction_round_trips() {
        let matrix = sample_matrix();
        let result = Decomposer::new().decompose_matrix(&matrix, &names(3)).unwrap();
        let rebuilt = result.reconstruct();

        let (rows, cols) = matrix.shape();
        for i in 0..rows {
            for j in 0..cols {
                assert!(
                    (matrix.get((i, j)) - rebuilt.get((i, j))).abs() < 1e-9,
                    "rekonštrukcia na ({}, {})",
                    i,
                    j
                );
            }
        }
    }

    #[test]
    fn u_columns_are_orthonormal() {
        let result = Decomposer::new()
            .decompose_matrix(&sample_matrix(), &names(3))
            .unwrap();
        let k = result.components();
        for a in 0..k {
            let col_a = result.component_scores(a).unwrap();
            for b in 0..k {
                let col_b = result.component_scores(b).unwrap();
                let dot: f64 = col_a.iter().zip(&col_b).map(|(x, y)| x * y).sum();
                let expected = if a == b { 1.0 } else { 0.0 };
                assert!((dot - expected).abs() < 1e-9, "U stĺpce {} a {}", a, b);
            }
        }
    }

    #[test]
    fn component_count_is_bounded_by_min_dimension() {
        let result = Decomposer::new()
            .decompose_matrix(&sample_matrix(), &names(3))
            .unwrap();
        assert!(result.components() <= 3);
    }

    #[test]
    fn cap_truncates_components() {
        let result = Decomposer::with_cap(2)
            .decompose_matrix(&sample_matrix(), &names(3))
            .unwrap();
        assert_eq!(result.components(), 2);
    }

    #[test]
    fn non_finite_value_is_rejected_before_decomposition() {
        let matrix =
            DenseMatrix::from_2d_vec(&vec![vec![1.0, f64::NAN], vec![2.0, 3.0]]).unwrap();
        let err = Decomposer::new()
            .decompose_matrix(&matrix, &names(2))
            .unwrap_err();
        assert!(matches!(err, PipelineError::Numeric { .. }));
    }

    #[test]
    fn wide_matrix_is_supported() {
        let matrix = DenseMatrix::from_2d_vec(&vec![
            vec![1.0, 2.0, 3.0, 4.0],
            vec![2.0, 1.0, 0.5, 1.5],
        ])
        .unwrap();
        let result = Decomposer::new().decompose_matrix(&matrix, &names(4)).unwrap();
        assert!(result.components() <= 2);

        let rebuilt = result.reconstruct();
        for i in 0..2 {
            for j in 0..4 {
                assert!((matrix.get((i, j)) - rebuilt.get((i, j))).abs() < 1e-9);
            }
        }
    }
}
