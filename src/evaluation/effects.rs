use crate::models::FittedLinearModel;
use serde::Serialize;

/// Efekt prediktora prekračujúci prah významnosti
#[derive(Debug, Clone, Serialize)]
pub struct Effect {
    pub name: String,
    pub estimate: f64,
    pub p_value: f64,
}

/// Čistý filter nad tabuľkou koeficientov fitnutého modelu -
/// žiadne prepočítavanie fitu. Intercept sa nereportuje,
/// nie je to efekt prediktora.
pub struct EffectExtractor;

impl EffectExtractor {
    /// Efekty s p <= threshold
    pub fn significant_effects(model: &FittedLinearModel, threshold: f64) -> Vec<Effect> {
        model
            .coefficients
            .iter()
            .skip(1)
            .filter(|c| c.p_value <= threshold)
            .map(|c| Effect {
                name: c.name.clone(),
                estimate: c.estimate,
                p_value: c.p_value,
            })
            .collect()
    }

    /// Efekty v pásme lower < p <= upper ("trending")
    pub fn trending_effects(model: &FittedLinearModel, lower: f64, upper: f64) -> Vec<Effect> {
        model
            .coefficients
            .iter()
            .skip(1)
            .filter(|c| c.p_value > lower && c.p_value <= upper)
            .map(|c| Effect {
                name: c.name.clone(),
                estimate: c.estimate,
                p_value: c.p_value,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coefficient;

    fn model() -> FittedLinearModel {
        let coef = |name: &str, p: f64| Coefficient {
            name: name.to_string(),
            estimate: 1.0,
            std_error: 0.5,
            t_value: 2.0,
            p_value: p,
        };
        FittedLinearModel {
            coefficients: vec![
                coef("(intercept)", 0.001),
                coef("U1", 0.01),
                coef("U2", 0.05),
                coef("U3", 0.07),
                coef("U4", 0.4),
            ],
            r2: 0.5,
            adjusted_r2: 0.45,
            observations: 60,
        }
    }

    #[test]
    fn significant_filter_is_inclusive_and_skips_intercept() {
        let effects = EffectExtractor::significant_effects(&model(), 0.05);
        let names: Vec<&str> = effects.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["U1", "U2"]);
    }

    #[test]
    fn trending_band_is_exclusive_below_inclusive_above() {
        let effects = EffectExtractor::trending_effects(&model(), 0.05, 0.10);
        let names: Vec<&str> = effects.iter().map(|e| e.name.as_str()).collect();
        // p = 0.05 patrí do significant, nie do trending pásma
        assert_eq!(names, vec!["U3"]);
    }

    #[test]
    fn no_effects_above_thresholds() {
        let effects = EffectExtractor::significant_effects(&model(), 0.001);
        assert!(effects.is_empty());
    }
}
