//! Error types for catalog construction.
//!
//! The scoring engine itself has no fatal paths - absent or malformed
//! run-state fields degrade to neutral terms. Errors exist only at the
//! boundary where catalogs are built or loaded, and are represented by
//! the `CatalogError` enum.

use crate::ident::Ident;
use thiserror::Error;

/// Errors that can occur while building or loading a catalog.
///
/// # Examples
///
/// ```rust
/// use buildwise::{CatalogError, Ident};
///
/// let err = CatalogError::DuplicateId(Ident::new("no_reload"));
/// println!("{}", err); // "Duplicate id in catalog: no_reload"
/// ```
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two catalog entries share the same id.
    ///
    /// Catalogs are keyed by id; a duplicate would make lookups
    /// ambiguous and detection order-dependent.
    #[error("Duplicate id in catalog: {0}")]
    DuplicateId(Ident),

    /// A catalog JSON document failed to parse.
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_id_display() {
        let err = CatalogError::DuplicateId(Ident::new("glass_cannon"));
        assert!(err.to_string().contains("glass_cannon"));
        assert!(err.to_string().contains("Duplicate"));
    }

    #[test]
    fn test_parse_error_from_serde() {
        let parse_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err = CatalogError::from(parse_err);
        assert!(err.to_string().contains("Catalog parse error"));
    }
}
