/// Pravidlo pre výber stĺpcov podľa mena. Všetky nastavené podmienky
/// musia platiť súčasne (prefix AND substring).
#[derive(Debug, Clone, Default)]
pub struct NameRule {
    prefix: Option<String>,
    contains: Option<String>,
}

impl NameRule {
    /// Pravidlo "začína na prefix"
    pub fn prefix(prefix: &str) -> Self {
        Self {
            prefix: Some(prefix.to_string()),
            contains: None,
        }
    }

    /// Pravidlo "obsahuje substring"
    pub fn contains(substring: &str) -> Self {
        Self {
            prefix: None,
            contains: Some(substring.to_string()),
        }
    }

    /// Pridá podmienku na substring k existujúcemu pravidlu
    pub fn and_contains(mut self, substring: &str) -> Self {
        self.contains = Some(substring.to_string());
        self
    }

    pub fn matches(&self, name: &str) -> bool {
        if let Some(ref p) = self.prefix {
            if !name.starts_with(p.as_str()) {
                return false;
            }
        }
        if let Some(ref c) = self.contains {
            if !name.contains(c.as_str()) {
                return false;
            }
        }
        true
    }
}
