pub mod feature_set;
pub mod name_rule;

pub use feature_set::FeatureSet;
pub use name_rule::NameRule;

use crate::data_loading::ObservationTable;
use crate::error::{PipelineError, Result};

/// Výber stĺpcov podľa mennej konvencie. Poradie výsledku vždy
/// zodpovedá natívnemu poradiu stĺpcov v tabuľke.
pub struct FeatureSelector;

impl FeatureSelector {
    /// Vráti stĺpce vyhovujúce pravidlu
    pub fn select(table: &ObservationTable, rule: &NameRule) -> Vec<String> {
        table
            .headers()
            .iter()
            .filter(|h| rule.matches(h))
            .cloned()
            .collect()
    }

    /// Výber s explicitným zoznamom vylúčených stĺpcov.
    /// Vylúčený stĺpec, ktorý v tabuľke neexistuje, je chyba schémy -
    /// typicky ide o preklep v konfigurácii.
    pub fn select_excluding(
        table: &ObservationTable,
        rule: &NameRule,
        exclude: &[String],
    ) -> Result<Vec<String>> {
        for col in exclude {
            if !table.has_column(col) {
                return Err(PipelineError::missing_column(col, "zoznam vylúčených stĺpcov"));
            }
        }
        Ok(Self::select(table, rule)
            .into_iter()
            .filter(|c| !exclude.contains(c))
            .collect())
    }

    /// Odstráni zo zoznamu stĺpce vyhovujúce druhému pravidlu
    /// (oddelenie hlavného group termu od interakčných termov)
    pub fn remove_matching(columns: Vec<String>, rule: &NameRule) -> Vec<String> {
        columns.into_iter().filter(|c| !rule.matches(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ObservationTable {
        let headers = vec![
            "debate".to_string(),
            "speaker".to_string(),
            "group".to_string(),
            "prop_health".to_string(),
            "prop_social".to_string(),
            "group_x_prop_health".to_string(),
            "delta_v".to_string(),
        ];
        let row = vec!["d1", "s1", "1", "0.5", "1.0", "0.5", "0.1"]
            .into_iter()
            .map(String::from)
            .collect();
        ObservationTable::from_parts(headers, vec![row, vec!["d1".into(), "s2".into(), "0".into(), "1.0".into(), "2.0".into(), "0.0".into(), "-0.1".into()]]).unwrap()
    }

    #[test]
    fn prefix_select_keeps_table_order() {
        let t = table();
        let cols = FeatureSelector::select(&t, &NameRule::prefix("prop"));
        assert_eq!(cols, vec!["prop_health", "prop_social"]);
    }

    #[test]
    fn main_and_interaction_sets_are_disjoint() {
        let t = table();
        let main = FeatureSelector::select(&t, &NameRule::prefix("prop"));
        let interaction =
            FeatureSelector::select(&t, &NameRule::prefix("group").and_contains("prop"));
        assert_eq!(interaction, vec!["group_x_prop_health"]);
        assert!(main.iter().all(|c| !interaction.contains(c)));
    }

    #[test]
    fn unknown_exclusion_column_is_schema_error() {
        let t = table();
        let err = FeatureSelector::select_excluding(
            &t,
            &NameRule::prefix("prop"),
            &["prop_typo".to_string()],
        )
        .unwrap_err();
        assert!(matches!(err, PipelineError::Schema { .. }));
    }

    #[test]
    fn remove_matching_separates_group_main_term() {
        let t = table();
        let group_cols = FeatureSelector::select(&t, &NameRule::prefix("group"));
        let main_term = FeatureSelector::remove_matching(group_cols, &NameRule::contains("prop"));
        assert_eq!(main_term, vec!["group"]);
    }
}
