use super::table::ObservationTable;
use crate::error::{PipelineError, Result};
use csv::ReaderBuilder;
use std::fs;
use std::path::Path;

/// CSV loader pre tabuľku pozorovaní. Validuje formát pred parsovaním,
/// chyby hlási s číslom riadku.
pub struct CsvLoader;

impl CsvLoader {
    pub fn new() -> Self {
        Self
    }

    /// Načíta tabuľku zo súboru
    pub fn load_from_path(&self, path: &Path) -> Result<ObservationTable> {
        let text = fs::read_to_string(path)?;
        self.load_from_string(&text)
    }

    /// Načíta tabuľku z CSV textu
    pub fn load_from_string(&self, data: &str) -> Result<ObservationTable> {
        self.validate_format(data)?;

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .trim(csv::Trim::All)
            .from_reader(data.as_bytes());

        let headers: Vec<String> = rdr
            .headers()?
            .iter()
            .map(|s| s.trim().to_string())
            .collect();

        if headers.is_empty() {
            return Err(PipelineError::Schema {
                column: "<hlavička>".to_string(),
                reason: "CSV nemá žiadne stĺpce".to_string(),
            });
        }

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(|v| v.trim().to_string()).collect());
        }

        if rows.is_empty() {
            return Err(PipelineError::Schema {
                column: "<dáta>".to_string(),
                reason: "CSV neobsahuje žiadne riadky".to_string(),
            });
        }

        ObservationTable::from_parts(headers, rows)
    }

    /// Základná validácia CSV formátu
    fn validate_format(&self, data: &str) -> Result<()> {
        if data.trim().is_empty() {
            return Err(PipelineError::Schema {
                column: "<vstup>".to_string(),
                reason: "CSV dáta sú prázdne".to_string(),
            });
        }
        if data.lines().count() < 2 {
            return Err(PipelineError::Schema {
                column: "<vstup>".to_string(),
                reason: "CSV musí obsahovať aspoň hlavičku a jeden riadok dát".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for CsvLoader {
    fn default() -> Self {
        Self::new()
    }
}
