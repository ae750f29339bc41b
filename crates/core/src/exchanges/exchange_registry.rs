use std::sync::Arc;

use crate::constants::DEFAULT_VALID_EXCHANGES;

/// Exchange code such as "NASDAQ" or "LSE"
pub type ExchangeCode = String;

/// Immutable set of exchanges the simulator accepts.
///
/// Codes are matched exactly (case-sensitive) and keep the order they were
/// configured in. Cloning is cheap; all clones share the same list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExchangeRegistry {
    codes: Arc<[ExchangeCode]>,
}

impl Default for ExchangeRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_VALID_EXCHANGES.iter().copied())
    }
}

impl ExchangeRegistry {
    /// Build a registry from exchange codes.
    ///
    /// Blank entries are skipped, surrounding whitespace is trimmed and
    /// duplicates keep their first position.
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<ExchangeCode> = Vec::new();
        for code in codes {
            let code = code.as_ref().trim();
            if code.is_empty() || unique.iter().any(|c| c == code) {
                continue;
            }
            unique.push(code.to_string());
        }
        Self {
            codes: unique.into(),
        }
    }

    /// Build a registry from a comma-separated list, e.g. `"NYSE, NASDAQ"`.
    pub fn from_csv(raw: &str) -> Self {
        Self::new(raw.split(','))
    }

    /// Whether `exchange` is one of the permitted codes.
    pub fn is_valid(&self, exchange: &str) -> bool {
        self.codes.iter().any(|c| c == exchange)
    }

    /// Permitted exchange codes in configured order.
    pub fn list(&self) -> &[ExchangeCode] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry() {
        let registry = ExchangeRegistry::default();
        assert_eq!(
            registry.list(),
            ["B3", "NYSE", "NASDAQ", "LSE", "TSE", "HKSE"]
        );
        assert!(registry.is_valid("NASDAQ"));
        assert!(registry.is_valid("B3"));
    }

    #[test]
    fn test_membership_is_exact() {
        let registry = ExchangeRegistry::default();
        assert!(!registry.is_valid("nasdaq"));
        assert!(!registry.is_valid(" NASDAQ"));
        assert!(!registry.is_valid("INVALID"));
        assert!(!registry.is_valid(""));
    }

    #[test]
    fn test_from_csv_trims_and_deduplicates() {
        let registry = ExchangeRegistry::from_csv(" NYSE, NASDAQ,,NYSE ,LSE ");
        assert_eq!(registry.list(), ["NYSE", "NASDAQ", "LSE"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_empty_registry_rejects_everything() {
        let registry = ExchangeRegistry::from_csv("");
        assert!(registry.is_empty());
        assert!(!registry.is_valid("NYSE"));
    }

    #[test]
    fn test_clones_share_codes() {
        let registry = ExchangeRegistry::from_csv("NYSE,LSE");
        let clone = registry.clone();
        assert_eq!(registry, clone);
        assert!(std::ptr::eq(registry.list(), clone.list()));
    }
}
