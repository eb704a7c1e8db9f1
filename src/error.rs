use thiserror::Error;

/// Result typ pre celý pipeline
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Chyby analytického pipeline. Každá chyba nesie kontext (stage, stĺpec,
/// komponent), aby bolo jasné, kde sa výpočet zastavil.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Očakávaný stĺpec chýba alebo je schéma nekonzistentná
    #[error("Chyba schémy: stĺpec '{column}' - {reason}")]
    Schema { column: String, reason: String },

    /// Entropická váha nie je definovaná (stĺpec s nulovým priemerom)
    #[error("Degenerovaný stĺpec '{column}': priemer je 0, entropická váha -ln(0) nie je definovaná")]
    DegenerateColumn { column: String },

    /// Nekonečné alebo NaN hodnoty vstupujúce do numerického výpočtu
    #[error("Numerická chyba v '{stage}': {reason}")]
    Numeric { stage: String, reason: String },

    /// Príliš málo pozorovaní/komponentov pre požadovanú veľkosť modelu
    #[error("Nedostatok dát v '{context}': požadovaných {requested}, dostupných {available}")]
    InsufficientData {
        context: String,
        requested: usize,
        available: usize,
    },

    /// Hodnota v numerickom stĺpci sa nedá parsovať
    #[error("Hodnota '{value}' v stĺpci '{column}' (riadok {row}) nie je číslo")]
    Parse {
        column: String,
        row: usize,
        value: String,
    },

    /// IO chyba
    #[error("IO chyba: {0}")]
    Io(#[from] std::io::Error),

    /// CSV chyba
    #[error("CSV chyba: {0}")]
    Csv(#[from] csv::Error),
}

impl PipelineError {
    /// Helper pre chýbajúci stĺpec
    pub fn missing_column(column: &str, context: &str) -> Self {
        Self::Schema {
            column: column.to_string(),
            reason: format!("nenachádza sa v tabuľke ({})", context),
        }
    }
}
