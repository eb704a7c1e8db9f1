use crate::data_loading::ObservationTable;
use crate::error::{PipelineError, Result};

use super::{FeatureSelector, NameRule};

/// Pomenované skupiny stĺpcov: main features, interakčné termy,
/// deskriptívne (identifikačné) stĺpce a outcome. Skupiny sú navzájom
/// disjunktné - validuje sa raz pri konštrukcii a ďalej sa set
/// posúva explicitne medzi stage-ami.
#[derive(Debug, Clone)]
pub struct FeatureSet {
    pub main: Vec<String>,
    pub interaction: Vec<String>,
    pub descriptive: Vec<String>,
    pub outcome: String,
}

impl FeatureSet {
    /// Vytvorí set s validáciou existencie stĺpcov a disjunktnosti skupín
    pub fn new(
        table: &ObservationTable,
        main: Vec<String>,
        interaction: Vec<String>,
        descriptive: Vec<String>,
        outcome: String,
    ) -> Result<Self> {
        let set = Self {
            main,
            interaction,
            descriptive,
            outcome,
        };
        set.validate(table)?;
        Ok(set)
    }

    /// Poskladá set podľa mennej konvencie štúdie:
    /// main = prefix `main_prefix` mínus vylúčené stĺpce,
    /// interaction = prefix `interaction_prefix` obsahujúci `main_prefix`.
    pub fn from_conventions(
        table: &ObservationTable,
        main_prefix: &str,
        interaction_prefix: &str,
        descriptive: Vec<String>,
        outcome: &str,
    ) -> Result<Self> {
        let interaction = FeatureSelector::select(
            table,
            &NameRule::prefix(interaction_prefix).and_contains(main_prefix),
        );

        let mut exclude = descriptive.clone();
        exclude.extend(interaction.iter().cloned());
        let main = FeatureSelector::select_excluding(table, &NameRule::prefix(main_prefix), &exclude)?;

        Self::new(table, main, interaction, descriptive, outcome.to_string())
    }

    /// Main + interaction stĺpce v poradí main, interaction
    pub fn model_columns(&self) -> Vec<String> {
        let mut cols = self.main.clone();
        cols.extend(self.interaction.iter().cloned());
        cols
    }

    fn validate(&self, table: &ObservationTable) -> Result<()> {
        let groups: [(&str, &[String]); 3] = [
            ("main", &self.main),
            ("interaction", &self.interaction),
            ("descriptive", &self.descriptive),
        ];

        for (group_name, columns) in &groups {
            for col in columns.iter() {
                if !table.has_column(col) {
                    return Err(PipelineError::missing_column(
                        col,
                        &format!("skupina '{}'", group_name),
                    ));
                }
            }
        }
        if !table.has_column(&self.outcome) {
            return Err(PipelineError::missing_column(&self.outcome, "outcome"));
        }

        // disjunktnosť: každý stĺpec patrí najviac do jednej skupiny
        let mut seen: Vec<&String> = Vec::new();
        for (group_name, columns) in &groups {
            for col in columns.iter() {
                if seen.contains(&col) || *col == self.outcome {
                    return Err(PipelineError::Schema {
                        column: col.clone(),
                        reason: format!("patrí do viacerých skupín (naposledy '{}')", group_name),
                    });
                }
                seen.push(col);
            }
        }

        Ok(())
    }
}
