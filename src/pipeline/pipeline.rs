use crate::data_loading::{ObservationTable, SplitConfig, TrainTestSplit};
use crate::decomposition::Decomposer;
use crate::error::Result;
use crate::evaluation::{ComponentSelectionTable, ComponentSelector, Effect, EffectExtractor};
use crate::feature_selection::FeatureSet;
use crate::interpretation::{ComponentInterpreter, ComponentProfile, LabelTable};
use crate::models::{FittedLinearModel, OlsRegressor, RegressionFitter};
use crate::processing::EntropyTransformer;
use std::path::Path;
use tracing::{debug, info};

use super::builder::AnalysisPipelineBuilder;

/// Facade pre celú analýzu: filter -> entropy -> SVD -> výber počtu
/// komponentov -> interpretácia -> extrakcia efektov. Explicitný
/// kontextový objekt - žiadny globálny zdieľaný stav, každý stage
/// produkuje nový artefakt pre nasledujúci.
pub struct AnalysisPipeline {
    pub(crate) main_prefix: String,
    pub(crate) interaction_prefix: String,
    pub(crate) descriptive: Vec<String>,
    pub(crate) outcome: String,
    pub(crate) scale: f64,
    pub(crate) max_k: Option<usize>,
    pub(crate) top_n: usize,
    pub(crate) significance_threshold: f64,
    pub(crate) trend_threshold: f64,
    pub(crate) split_config: SplitConfig,
    pub(crate) labels: LabelTable,
}

/// Výsledok behu pipeline
pub struct AnalysisReport {
    pub feature_set: FeatureSet,
    pub selection: ComponentSelectionTable,
    pub chosen_k: usize,
    pub model: FittedLinearModel,
    pub profiles: Vec<ComponentProfile>,
    pub significant: Vec<Effect>,
    pub trending: Vec<Effect>,
}

impl AnalysisPipeline {
    /// Builder pre konfiguráciu pipeline
    pub fn builder() -> AnalysisPipelineBuilder {
        AnalysisPipelineBuilder::new()
    }

    /// Spustí kompletnú analýzu nad tabuľkou
    pub fn run(&self, table: &ObservationTable) -> Result<AnalysisReport> {
        info!(rows = table.len(), "spúšťam analýzu");

        let feature_set = FeatureSet::from_conventions(
            table,
            &self.main_prefix,
            &self.interaction_prefix,
            self.descriptive.clone(),
            &self.outcome,
        )?;
        debug!(
            main = feature_set.main.len(),
            interaction = feature_set.interaction.len(),
            "feature set zostavený"
        );

        let weighted =
            EntropyTransformer::with_scale(self.scale).transform(table, &feature_set.main)?;
        info!(features = weighted.feature_names.len(), "entropická transformácia hotová");

        let decomposition = Decomposer::new().decompose(&weighted)?;
        info!(components = decomposition.components(), "SVD rozklad hotový");

        let outcome = table.numeric_column(&self.outcome)?;
        let max_k = self.max_k.unwrap_or_else(|| decomposition.components());

        let selection = ComponentSelector::new().select_cutoff(outcome, &decomposition, max_k)?;
        let chosen_k = selection.chosen_k();
        info!(chosen_k, "počet komponentov zvolený");

        // finálny model s prvými chosen_k komponentmi
        let x = decomposition.scores_matrix(chosen_k)?;
        let names: Vec<String> = (1..=chosen_k).map(|c| format!("U{}", c)).collect();
        let model = OlsRegressor::new().fit(&x, &names, outcome)?;

        let interpreter = ComponentInterpreter::with_labels(self.labels.clone());
        let profiles = (0..chosen_k)
            .map(|c| interpreter.profile(&decomposition, c, self.top_n))
            .collect::<Result<Vec<_>>>()?;

        let significant = EffectExtractor::significant_effects(&model, self.significance_threshold);
        let trending = EffectExtractor::trending_effects(
            &model,
            self.significance_threshold,
            self.trend_threshold,
        );
        info!(
            significant = significant.len(),
            trending = trending.len(),
            "efekty extrahované"
        );

        Ok(AnalysisReport {
            feature_set,
            selection,
            chosen_k,
            model,
            profiles,
            significant,
            trending,
        })
    }

    /// Vytvorí (alebo znovu načíta) kanonický train/test split.
    /// Existujúce súbory sa neregenerujú, pokiaľ `force` nie je nastavené.
    pub fn prepare_split(
        &self,
        table: &ObservationTable,
        train_path: &Path,
        test_path: &Path,
        force: bool,
    ) -> Result<TrainTestSplit> {
        TrainTestSplit::load_or_create(table, train_path, test_path, &self.split_config, force)
    }
}

impl AnalysisReport {
    /// Vypíše súhrn analýzy na stdout
    pub fn print_summary(&self) {
        println!("=== Report analýzy ===");
        println!(
            "Features: {} main, {} interaction",
            self.feature_set.main.len(),
            self.feature_set.interaction.len()
        );

        println!("\nVýber počtu komponentov (k, adj. R², gain):");
        for row in self.selection.rows() {
            match row.gain {
                Some(gain) => println!("  k={:<3} {:>8.4} {:>+8.4}", row.k, row.adjusted_r2, gain),
                None => println!("  k={:<3} {:>8.4}        -", row.k, row.adjusted_r2),
            }
        }
        println!("Zvolené k: {}", self.chosen_k);
        println!(
            "Finálny model: R² = {:.4}, adj. R² = {:.4}, n = {}",
            self.model.r2, self.model.adjusted_r2, self.model.observations
        );

        for profile in &self.profiles {
            println!("\nKomponent {}:", profile.component + 1);
            println!("  Top loadings:");
            for (name, value) in &profile.top {
                println!("    {:<30} {:>+8.4}", name, value);
            }
            println!("  Bottom loadings:");
            for (name, value) in &profile.bottom {
                println!("    {:<30} {:>+8.4}", name, value);
            }
        }

        println!("\nSignifikantné efekty (p <= prah):");
        for e in &self.significant {
            println!("  {:<10} beta = {:>+8.4}, p = {:.4}", e.name, e.estimate, e.p_value);
        }
        println!("Trendové efekty:");
        for e in &self.trending {
            println!("  {:<10} beta = {:>+8.4}, p = {:.4}", e.name, e.estimate, e.p_value);
        }
        println!("======================");
    }
}
