use crate::error::{PipelineError, Result};
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::collections::HashMap;
use std::path::Path;

/// Tabuľka pozorovaní: jeden riadok = jeden rečník v jednej debate.
/// Surové string hodnoty sa zachovávajú kvôli zápisu split súborov
/// s identickou schémou; numerický pohľad sa validuje raz pri načítaní.
pub struct ObservationTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    numeric: HashMap<String, Vec<f64>>,
    // prvé zlyhanie parsovania pre ne-numerické stĺpce: (riadok, hodnota)
    parse_failures: HashMap<String, (usize, String)>,
}

impl ObservationTable {
    /// Vytvorí tabuľku z hlavičiek a surových riadkov.
    /// Validuje unikátnosť stĺpcov a konzistentnú šírku riadkov.
    pub fn from_parts(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        for (i, h) in headers.iter().enumerate() {
            if headers[..i].contains(h) {
                return Err(PipelineError::Schema {
                    column: h.clone(),
                    reason: "duplicitný názov stĺpca".to_string(),
                });
            }
        }

        for (idx, row) in rows.iter().enumerate() {
            if row.len() != headers.len() {
                return Err(PipelineError::Schema {
                    column: format!("riadok {}", idx + 1),
                    reason: format!(
                        "má {} stĺpcov, očakávaných {}",
                        row.len(),
                        headers.len()
                    ),
                });
            }
        }

        let mut numeric = HashMap::new();
        let mut parse_failures = HashMap::new();

        for (col_idx, header) in headers.iter().enumerate() {
            let mut values = Vec::with_capacity(rows.len());
            let mut failure: Option<(usize, String)> = None;

            for (row_idx, row) in rows.iter().enumerate() {
                match Self::parse_numeric(&row[col_idx]) {
                    Some(v) => values.push(v),
                    None => {
                        failure = Some((row_idx, row[col_idx].clone()));
                        break;
                    }
                }
            }

            match failure {
                None => {
                    numeric.insert(header.clone(), values);
                }
                Some(f) => {
                    parse_failures.insert(header.clone(), f);
                }
            }
        }

        Ok(Self {
            headers,
            rows,
            numeric,
            parse_failures,
        })
    }

    /// Parsuje f64 s fallbackom na desatinnú čiarku
    fn parse_numeric(val: &str) -> Option<f64> {
        let trimmed = val.trim();
        trimmed
            .parse::<f64>()
            .or_else(|_| trimmed.replace(',', ".").parse::<f64>())
            .ok()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    /// Numerický stĺpec podľa mena. Chýbajúci stĺpec -> Schema chyba,
    /// stĺpec s neparsovateľnou hodnotou -> Parse chyba s presným miestom.
    pub fn numeric_column(&self, name: &str) -> Result<&[f64]> {
        if let Some(values) = self.numeric.get(name) {
            return Ok(values.as_slice());
        }
        if let Some((row, value)) = self.parse_failures.get(name) {
            return Err(PipelineError::Parse {
                column: name.to_string(),
                row: row + 1,
                value: value.clone(),
            });
        }
        Err(PipelineError::missing_column(name, "numeric_column"))
    }

    /// Surová string hodnota (identifikačné stĺpce: debata, rečník, skupina)
    pub fn raw_column(&self, name: &str) -> Result<Vec<&str>> {
        let idx = self
            .headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| PipelineError::missing_column(name, "raw_column"))?;
        Ok(self.rows.iter().map(|r| r[idx].as_str()).collect())
    }

    /// Podmnožina riadkov podľa indexov; schéma zostáva identická
    pub fn subset(&self, indices: &[usize]) -> Result<Self> {
        let rows = indices
            .iter()
            .map(|&i| {
                self.rows.get(i).cloned().ok_or_else(|| PipelineError::InsufficientData {
                    context: "subset".to_string(),
                    requested: i + 1,
                    available: self.rows.len(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_parts(self.headers.clone(), rows)
    }

    /// Poskladá maticu z vybraných numerických stĺpcov (poradie podľa `columns`)
    pub fn to_matrix(&self, columns: &[String]) -> Result<DenseMatrix<f64>> {
        let cols: Vec<&[f64]> = columns
            .iter()
            .map(|c| self.numeric_column(c))
            .collect::<Result<Vec<_>>>()?;

        let data: Vec<Vec<f64>> = (0..self.len())
            .map(|i| cols.iter().map(|col| col[i]).collect())
            .collect();

        DenseMatrix::from_2d_vec(&data).map_err(|e| PipelineError::Numeric {
            stage: "to_matrix".to_string(),
            reason: e.to_string(),
        })
    }

    /// Zapíše tabuľku do CSV so zachovanou schémou
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut wtr = csv::Writer::from_path(path)?;
        wtr.write_record(&self.headers)?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ObservationTable {
        ObservationTable::from_parts(
            vec!["id".into(), "prop_health".into(), "delta_v".into()],
            vec![
                vec!["d1_s1".into(), "1.5".into(), "0.2".into()],
                vec!["d1_s2".into(), "2.5".into(), "-0.1".into()],
            ],
        )
        .unwrap()
    }

    #[test]
    fn numeric_column_is_parsed() {
        let t = table();
        assert_eq!(t.numeric_column("prop_health").unwrap(), &[1.5, 2.5]);
    }

    #[test]
    fn text_column_reports_parse_error() {
        let t = table();
        let err = t.numeric_column("id").unwrap_err();
        assert!(matches!(err, PipelineError::Parse { row: 1, .. }));
    }

    #[test]
    fn missing_column_reports_schema_error() {
        let t = table();
        assert!(matches!(
            t.numeric_column("neexistuje").unwrap_err(),
            PipelineError::Schema { .. }
        ));
    }

    #[test]
    fn duplicate_header_is_rejected() {
        let result = ObservationTable::from_parts(
            vec!["a".into(), "a".into()],
            vec![vec!["1".into(), "2".into()]],
        );
        assert!(matches!(result, Err(PipelineError::Schema { .. })));
    }

    #[test]
    fn subset_preserves_schema() {
        let t = table();
        let s = t.subset(&[1]).unwrap();
        assert_eq!(s.len(), 1);
        assert_eq!(s.headers(), t.headers());
        assert_eq!(s.numeric_column("delta_v").unwrap(), &[-0.1]);
    }

    #[test]
    fn to_matrix_respects_column_order() {
        let t = table();
        let m = t
            .to_matrix(&["delta_v".to_string(), "prop_health".to_string()])
            .unwrap();
        use smartcore::linalg::basic::arrays::Array;
        assert_eq!(*m.get((0, 0)), 0.2);
        assert_eq!(*m.get((0, 1)), 1.5);
    }
}
