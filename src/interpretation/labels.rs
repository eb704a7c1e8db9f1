use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Default labely pre LIWC kategórie podľa mennej konvencie štúdie
static DEFAULT_LIWC_LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("prop_posemo", "Pozitívne emócie"),
        ("prop_negemo", "Negatívne emócie"),
        ("prop_anger", "Hnev"),
        ("prop_anx", "Úzkosť"),
        ("prop_sad", "Smútok"),
        ("prop_social", "Sociálne procesy"),
        ("prop_family", "Rodina"),
        ("prop_friend", "Priatelia"),
        ("prop_cogproc", "Kognitívne procesy"),
        ("prop_insight", "Vhľad"),
        ("prop_cause", "Kauzalita"),
        ("prop_certain", "Istota"),
        ("prop_tentat", "Neistota"),
        ("prop_percept", "Percepcia"),
        ("prop_bio", "Biologické procesy"),
        ("prop_health", "Zdravie"),
        ("prop_body", "Telo"),
        ("prop_money", "Peniaze"),
        ("prop_work", "Práca"),
        ("prop_achieve", "Úspech"),
        ("prop_power", "Moc"),
        ("prop_risk", "Riziko"),
        ("prop_relig", "Náboženstvo"),
        ("prop_death", "Smrť"),
        ("prop_time", "Čas"),
        ("prop_space", "Priestor"),
        ("prop_motion", "Pohyb"),
    ])
});

/// Mapovanie technických mien features na čitateľné labely.
/// Injektuje sa do interpretácie, takže premenované/agregované
/// zobrazované mená nemenia loadings.
#[derive(Debug, Clone)]
pub struct LabelTable {
    labels: HashMap<String, String>,
}

impl LabelTable {
    pub fn new(labels: HashMap<String, String>) -> Self {
        Self { labels }
    }

    /// Tabuľka s default LIWC labelmi
    pub fn default_liwc() -> Self {
        Self {
            labels: DEFAULT_LIWC_LABELS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Label pre feature; neznáme meno sa vracia bez zmeny
    pub fn label(&self, feature: &str) -> String {
        self.labels
            .get(feature)
            .cloned()
            .unwrap_or_else(|| feature.to_string())
    }

    pub fn insert(&mut self, feature: &str, label: &str) {
        self.labels.insert(feature.to_string(), label.to_string());
    }
}

impl Default for LabelTable {
    fn default() -> Self {
        Self::default_liwc()
    }
}
