use crate::data_loading::SplitConfig;
use crate::error::Result;

use super::builder::AnalysisPipelineBuilder;
use super::pipeline::AnalysisPipeline;

/// Director pre Builder pattern - hotové "recepty" na vytváranie pipeline.
/// Zapuzdruje konfiguráciu štúdie, aby volajúci nemusel poznať všetky
/// parametre.
pub struct AnalysisPipelineDirector;

impl AnalysisPipelineDirector {
    /// Konfigurácia debatnej štúdie: LIWC proporcie s prefixom "prop",
    /// interakcie so skupinou, outcome delta_v, percentuálna škála.
    pub fn build_debate_study() -> Result<AnalysisPipeline> {
        AnalysisPipelineBuilder::new()
            .main_prefix("prop")
            .interaction_prefix("group_")
            .descriptive(vec![
                "debate".to_string(),
                "speaker".to_string(),
                "group".to_string(),
            ])
            .outcome("delta_v")
            .scale(100.0)
            .top_n(5)
            .significance_threshold(0.05)
            .trend_threshold(0.10)
            .split_config(SplitConfig::default())
            .build()
    }

    /// Debatná štúdia s vlastným seedom splitu (replikačné behy)
    pub fn build_debate_study_with_seed(seed: u64) -> Result<AnalysisPipeline> {
        AnalysisPipelineBuilder::new()
            .main_prefix("prop")
            .interaction_prefix("group_")
            .descriptive(vec![
                "debate".to_string(),
                "speaker".to_string(),
                "group".to_string(),
            ])
            .outcome("delta_v")
            .split_config(SplitConfig { train_ratio: 0.8, seed })
            .build()
    }

    /// Custom pipeline cez builder pattern s validáciou
    pub fn build_custom() -> AnalysisPipelineBuilder {
        AnalysisPipelineBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debate_study_preset_builds() {
        let pipeline = AnalysisPipelineDirector::build_debate_study().unwrap();
        assert_eq!(pipeline.main_prefix, "prop");
        assert_eq!(pipeline.interaction_prefix, "group_");
        assert_eq!(pipeline.outcome, "delta_v");
    }

    #[test]
    fn seeded_preset_carries_seed() {
        let pipeline = AnalysisPipelineDirector::build_debate_study_with_seed(7).unwrap();
        assert_eq!(pipeline.split_config.seed, 7);
    }
}
