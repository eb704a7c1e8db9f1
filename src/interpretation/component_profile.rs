use super::labels::LabelTable;
use crate::decomposition::DecompositionResult;
use crate::error::{PipelineError, Result};

/// Profil jedného komponentu: n najvyšších a n najnižších loadings
/// s čitateľnými labelmi. Počíta sa na požiadanie, nepersistuje sa.
#[derive(Debug, Clone)]
pub struct ComponentProfile {
    pub component: usize,
    pub top: Vec<(String, f64)>,
    pub bottom: Vec<(String, f64)>,
}

/// Interpretácia komponentov cez poradie loadings pôvodných features
pub struct ComponentInterpreter {
    labels: LabelTable,
}

impl ComponentInterpreter {
    pub fn new() -> Self {
        Self {
            labels: LabelTable::default_liwc(),
        }
    }

    pub fn with_labels(labels: LabelTable) -> Self {
        Self { labels }
    }

    /// Zoradí loadings komponentu a vráti top-n / bottom-n features.
    /// Pri menej ako 2n features sa množiny môžu prekrývať - to je
    /// povolené, nie chyba.
    pub fn profile(
        &self,
        decomposition: &DecompositionResult,
        component: usize,
        n: usize,
    ) -> Result<ComponentProfile> {
        let mut loadings = decomposition.component_loadings(component)?;

        if n > loadings.len() {
            return Err(PipelineError::InsufficientData {
                context: format!("profil komponentu {}", component + 1),
                requested: n,
                available: loadings.len(),
            });
        }

        loadings.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let top: Vec<(String, f64)> = loadings
            .iter()
            .take(n)
            .map(|(name, value)| (self.labels.label(name), *value))
            .collect();

        // bottom: najnižší loading prvý
        let bottom: Vec<(String, f64)> = loadings
            .iter()
            .rev()
            .take(n)
            .map(|(name, value)| (self.labels.label(name), *value))
            .collect();

        Ok(ComponentProfile {
            component,
            top,
            bottom,
        })
    }
}

impl Default for ComponentInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartcore::linalg::basic::matrix::DenseMatrix;

    fn decomposition(loadings: Vec<f64>, names: Vec<&str>) -> DecompositionResult {
        let n = loadings.len();
        DecompositionResult {
            u: DenseMatrix::from_2d_vec(&vec![vec![0.0]; 3]).unwrap(),
            v: DenseMatrix::from_2d_vec(&loadings.iter().map(|&v| vec![v]).collect::<Vec<_>>())
                .unwrap(),
            singular_values: vec![1.0],
            feature_names: names.into_iter().map(String::from).collect(),
        }
    }

    #[test]
    fn top_and_bottom_are_sorted_by_loading() {
        let d = decomposition(
            vec![0.1, -0.8, 0.9, 0.3, -0.2],
            vec!["prop_a", "prop_b", "prop_c", "prop_d", "prop_e"],
        );
        let profile = ComponentInterpreter::new().profile(&d, 0, 2).unwrap();

        assert_eq!(profile.top[0], ("prop_c".to_string(), 0.9));
        assert_eq!(profile.top[1], ("prop_d".to_string(), 0.3));
        assert_eq!(profile.bottom[0], ("prop_b".to_string(), -0.8));
        assert_eq!(profile.bottom[1], ("prop_e".to_string(), -0.2));
    }

    #[test]
    fn overlap_is_allowed_with_few_features() {
        // 4 features, top-3 a bottom-3 sa musia prekrývať aspoň v 2
        let d = decomposition(
            vec![0.5, -0.5, 0.2, -0.1],
            vec!["prop_a", "prop_b", "prop_c", "prop_d"],
        );
        let profile = ComponentInterpreter::new().profile(&d, 0, 3).unwrap();

        let top_names: Vec<&String> = profile.top.iter().map(|(n, _)| n).collect();
        let overlap = profile
            .bottom
            .iter()
            .filter(|(n, _)| top_names.contains(&n))
            .count();
        assert!(overlap >= 2);
    }

    #[test]
    fn n_beyond_feature_count_is_insufficient_data() {
        let d = decomposition(vec![0.5, -0.5], vec!["prop_a", "prop_b"]);
        let err = ComponentInterpreter::new().profile(&d, 0, 3).unwrap_err();
        assert!(matches!(err, PipelineError::InsufficientData { .. }));
    }

    #[test]
    fn display_labels_are_substituted() {
        let d = decomposition(vec![0.9, 0.1], vec!["prop_health", "prop_money"]);
        let profile = ComponentInterpreter::new().profile(&d, 0, 1).unwrap();
        assert_eq!(profile.top[0].0, "Zdravie");
    }

    #[test]
    fn invalid_component_index_fails() {
        let d = decomposition(vec![0.5], vec!["prop_a"]);
        assert!(ComponentInterpreter::new().profile(&d, 3, 1).is_err());
    }
}
