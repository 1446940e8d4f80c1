use std::path::{Path, PathBuf};
use thiserror::Error;
use crate::models::PartnerRecord;

/// Errors that can occur while loading the partner catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid partner record at position {index}: {reason}")]
    InvalidPartner { index: usize, reason: String },
}

/// Supplies the ordered list of partners. Called at most once per matcher.
pub trait CatalogSource: Send + Sync {
    fn load_catalog(&self) -> Result<Vec<PartnerRecord>, CatalogError>;
}

/// Catalog stored as a JSON array on disk
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CatalogSource for JsonFileCatalog {
    fn load_catalog(&self) -> Result<Vec<PartnerRecord>, CatalogError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.display().to_string(),
            source,
        })?;

        let partners = parse_catalog(&raw)?;
        tracing::info!("Loaded {} partners from {}", partners.len(), self.path.display());
        Ok(partners)
    }
}

/// In-memory catalog
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog(pub Vec<PartnerRecord>);

impl CatalogSource for StaticCatalog {
    fn load_catalog(&self) -> Result<Vec<PartnerRecord>, CatalogError> {
        validate_partners(&self.0)?;
        Ok(self.0.clone())
    }
}

/// Parse and validate a JSON catalog
pub fn parse_catalog(raw: &str) -> Result<Vec<PartnerRecord>, CatalogError> {
    let partners: Vec<PartnerRecord> = serde_json::from_str(raw)?;
    validate_partners(&partners)?;
    Ok(partners)
}

fn validate_partners(partners: &[PartnerRecord]) -> Result<(), CatalogError> {
    for (index, partner) in partners.iter().enumerate() {
        let reason = if partner.id.trim().is_empty() {
            Some("empty id")
        } else if partner.domain.trim().is_empty() {
            Some("empty domain")
        } else if !partner.operational_capacity.is_finite() || partner.operational_capacity < 0.0 {
            Some("operational_capacity must be a finite non-negative number")
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(CatalogError::InvalidPartner {
                index,
                reason: reason.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {"id": "SNP001", "name": "Agra Footwear Hub", "domain": "leather sandals manufacturer",
         "sectors": ["footwear"], "regions": ["Agra"], "operational_capacity": 10},
        {"id": "SNP002", "name": "Kerala Spice Link", "domain": "organic spice trading",
         "sectors": ["food"], "regions": ["Kerala"], "operational_capacity": 100,
         "contact": "ops@spicelink.in"}
    ]"#;

    #[test]
    fn test_parse_catalog_keeps_order() {
        let partners = parse_catalog(SAMPLE).unwrap();
        assert_eq!(partners.len(), 2);
        assert_eq!(partners[0].id, "SNP001");
        assert_eq!(partners[1].contact.as_deref(), Some("ops@spicelink.in"));
    }

    #[test]
    fn test_rejects_negative_capacity() {
        let raw = r#"[{"id": "X", "name": "X", "domain": "x logistics", "operational_capacity": -1}]"#;
        let err = parse_catalog(raw).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPartner { index: 0, .. }));
    }

    #[test]
    fn test_rejects_empty_domain() {
        let raw = r#"[{"id": "X", "name": "X", "domain": "  ", "operational_capacity": 1}]"#;
        assert!(matches!(parse_catalog(raw), Err(CatalogError::InvalidPartner { .. })));
    }

    #[test]
    fn test_json_file_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let catalog = JsonFileCatalog::new(file.path());
        let partners = catalog.load_catalog().unwrap();
        assert_eq!(partners.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let catalog = JsonFileCatalog::new("/nonexistent/snp_seed.json");
        assert!(matches!(catalog.load_catalog(), Err(CatalogError::Io { .. })));
    }
}
