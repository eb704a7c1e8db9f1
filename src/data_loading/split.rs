use super::csv_loader::CsvLoader;
use super::table::ObservationTable;
use crate::error::{PipelineError, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::path::Path;

/// Konfigurácia train/test splitu. Seed robí split deterministickým,
/// takže opakovaný beh produkuje identické rozdelenie.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    pub train_ratio: f64,
    pub seed: u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            train_ratio: 0.8,
            seed: 42,
        }
    }
}

/// Výsledok splitu: dve tabuľky s identickou schémou ako vstup
pub struct TrainTestSplit {
    pub train: ObservationTable,
    pub test: ObservationTable,
}

impl TrainTestSplit {
    /// Rozdelí tabuľku na train/test podľa seedovaného náhodného premiešania
    pub fn create(table: &ObservationTable, config: &SplitConfig) -> Result<Self> {
        if !(0.0..1.0).contains(&config.train_ratio) || config.train_ratio == 0.0 {
            return Err(PipelineError::Numeric {
                stage: "split".to_string(),
                reason: format!("train_ratio {} musí byť v intervale (0, 1)", config.train_ratio),
            });
        }
        if table.len() < 2 {
            return Err(PipelineError::InsufficientData {
                context: "split".to_string(),
                requested: 2,
                available: table.len(),
            });
        }

        let mut indices: Vec<usize> = (0..table.len()).collect();
        let mut rng = StdRng::seed_from_u64(config.seed);
        indices.shuffle(&mut rng);

        let cut = ((table.len() as f64) * config.train_ratio).round() as usize;
        let cut = cut.clamp(1, table.len() - 1);

        Ok(Self {
            train: table.subset(&indices[..cut])?,
            test: table.subset(&indices[cut..])?,
        })
    }

    /// Zapíše obe časti do CSV súborov
    pub fn write(&self, train_path: &Path, test_path: &Path) -> Result<()> {
        self.train.write_csv(train_path)?;
        self.test.write_csv(test_path)?;
        Ok(())
    }

    /// Načíta existujúci split zo súborov, alebo ho vytvorí a zapíše.
    /// Existujúce súbory sú kanonický split a neregenerujú sa,
    /// pokiaľ `force` nie je nastavené.
    pub fn load_or_create(
        table: &ObservationTable,
        train_path: &Path,
        test_path: &Path,
        config: &SplitConfig,
        force: bool,
    ) -> Result<Self> {
        if !force && train_path.exists() && test_path.exists() {
            let loader = CsvLoader::new();
            return Ok(Self {
                train: loader.load_from_path(train_path)?,
                test: loader.load_from_path(test_path)?,
            });
        }

        let split = Self::create(table, config)?;
        split.write(train_path, test_path)?;
        Ok(split)
    }
}
