use crate::data_loading::SplitConfig;
use crate::error::{PipelineError, Result};
use crate::interpretation::LabelTable;

use super::pipeline::AnalysisPipeline;

/// Builder pre konfiguráciu analytickej pipeline
pub struct AnalysisPipelineBuilder {
    main_prefix: String,
    interaction_prefix: String,
    descriptive: Vec<String>,
    outcome: String,
    scale: f64,
    max_k: Option<usize>,
    top_n: usize,
    significance_threshold: f64,
    trend_threshold: f64,
    split_config: SplitConfig,
    labels: LabelTable,
}

impl AnalysisPipelineBuilder {
    pub fn new() -> Self {
        Self {
            main_prefix: "prop".to_string(),
            interaction_prefix: "group_".to_string(),
            descriptive: Vec::new(),
            outcome: "delta_v".to_string(),
            scale: 100.0,
            max_k: None,
            top_n: 5,
            significance_threshold: 0.05,
            trend_threshold: 0.10,
            split_config: SplitConfig::default(),
            labels: LabelTable::default_liwc(),
        }
    }

    /// Nastaví prefix hlavných features
    pub fn main_prefix(mut self, prefix: &str) -> Self {
        self.main_prefix = prefix.to_string();
        self
    }

    /// Nastaví prefix interakčných termov
    pub fn interaction_prefix(mut self, prefix: &str) -> Self {
        self.interaction_prefix = prefix.to_string();
        self
    }

    /// Nastaví deskriptívne (identifikačné) stĺpce
    pub fn descriptive(mut self, columns: Vec<String>) -> Self {
        self.descriptive = columns;
        self
    }

    /// Pridá deskriptívny stĺpec
    pub fn add_descriptive(mut self, column: &str) -> Self {
        self.descriptive.push(column.to_string());
        self
    }

    /// Nastaví outcome stĺpec
    pub fn outcome(mut self, column: &str) -> Self {
        self.outcome = column.to_string();
        self
    }

    /// Nastaví škálu vstupných proporcií (default 100 pre percentá)
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Obmedzí maximálne skúmané k pri výbere počtu komponentov
    pub fn max_k(mut self, max_k: usize) -> Self {
        self.max_k = Some(max_k);
        self
    }

    /// Počet top/bottom loadings v profile komponentu
    pub fn top_n(mut self, n: usize) -> Self {
        self.top_n = n;
        self
    }

    /// Prah signifikancie (p <= prah)
    pub fn significance_threshold(mut self, threshold: f64) -> Self {
        self.significance_threshold = threshold;
        self
    }

    /// Horný prah trendového pásma (prah < p <= horný prah)
    pub fn trend_threshold(mut self, threshold: f64) -> Self {
        self.trend_threshold = threshold;
        self
    }

    /// Konfigurácia train/test splitu
    pub fn split_config(mut self, config: SplitConfig) -> Self {
        self.split_config = config;
        self
    }

    /// Vlastná tabuľka labelov pre interpretáciu
    pub fn labels(mut self, labels: LabelTable) -> Self {
        self.labels = labels;
        self
    }

    /// Vytvorí AnalysisPipeline s validáciou konfigurácie
    pub fn build(self) -> Result<AnalysisPipeline> {
        if self.main_prefix.is_empty() {
            return Err(PipelineError::Schema {
                column: "<main_prefix>".to_string(),
                reason: "prefix hlavných features nesmie byť prázdny".to_string(),
            });
        }
        if self.outcome.is_empty() {
            return Err(PipelineError::Schema {
                column: "<outcome>".to_string(),
                reason: "outcome stĺpec musí byť nastavený".to_string(),
            });
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(PipelineError::Numeric {
                stage: "konfigurácia".to_string(),
                reason: format!("škála {} musí byť kladná a konečná", self.scale),
            });
        }
        if self.top_n == 0 {
            return Err(PipelineError::InsufficientData {
                context: "konfigurácia top_n".to_string(),
                requested: 0,
                available: 0,
            });
        }
        if !(0.0..=1.0).contains(&self.significance_threshold)
            || !(0.0..=1.0).contains(&self.trend_threshold)
        {
            return Err(PipelineError::Numeric {
                stage: "konfigurácia".to_string(),
                reason: "prahy p-hodnôt musia byť v intervale [0, 1]".to_string(),
            });
        }
        if self.trend_threshold < self.significance_threshold {
            return Err(PipelineError::Numeric {
                stage: "konfigurácia".to_string(),
                reason: format!(
                    "trendový prah {} je pod prahom signifikancie {}",
                    self.trend_threshold, self.significance_threshold
                ),
            });
        }
        if let Some(0) = self.max_k {
            return Err(PipelineError::InsufficientData {
                context: "konfigurácia max_k".to_string(),
                requested: 0,
                available: 0,
            });
        }

        Ok(AnalysisPipeline {
            main_prefix: self.main_prefix,
            interaction_prefix: self.interaction_prefix,
            descriptive: self.descriptive,
            outcome: self.outcome,
            scale: self.scale,
            max_k: self.max_k,
            top_n: self.top_n,
            significance_threshold: self.significance_threshold,
            trend_threshold: self.trend_threshold,
            split_config: self.split_config,
            labels: self.labels,
        })
    }
}

impl Default for AnalysisPipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_build_successfully() {
        let pipeline = AnalysisPipelineBuilder::new().build().unwrap();
        assert_eq!(pipeline.outcome, "delta_v");
        assert_eq!(pipeline.scale, 100.0);
        assert_eq!(pipeline.top_n, 5);
    }

    #[test]
    fn invalid_scale_is_rejected() {
        assert!(AnalysisPipelineBuilder::new().scale(0.0).build().is_err());
        assert!(AnalysisPipelineBuilder::new().scale(-5.0).build().is_err());
        assert!(AnalysisPipelineBuilder::new().scale(f64::NAN).build().is_err());
    }

    #[test]
    fn trend_threshold_below_significance_is_rejected() {
        let result = AnalysisPipelineBuilder::new()
            .significance_threshold(0.10)
            .trend_threshold(0.05)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn empty_outcome_is_rejected() {
        assert!(AnalysisPipelineBuilder::new().outcome("").build().is_err());
    }

    #[test]
    fn zero_top_n_is_rejected() {
        assert!(AnalysisPipelineBuilder::new().top_n(0).build().is_err());
    }
}
