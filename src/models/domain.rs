use serde::{Deserialize, Serialize};

/// Service/logistics partner (SNP) profile as stored in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerRecord {
    pub id: String,
    pub name: String,
    pub domain: String,
    #[serde(default)]
    pub sectors: Vec<String>,
    #[serde(default)]
    pub regions: Vec<String>,
    pub operational_capacity: f64,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(rename = "ondc_id", alias = "external_id", default)]
    pub external_id: Option<String>,
}

impl PartnerRecord {
    /// Composite document indexed for this partner.
    ///
    /// The template must stay stable: the index is fitted once from these
    /// strings and never rebuilt while the process lives.
    pub fn document(&self) -> String {
        format!(
            "{}. Sectors: {}. Regions: {}.",
            self.domain.trim(),
            join_tags(&self.sectors),
            join_tags(&self.regions)
        )
    }
}

fn join_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A single ranking request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchQuery {
    pub product_description: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub capacity_hint: Option<u32>,
    pub top_k: usize,
}

/// Ranked partner with its scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "snp_id")]
    pub partner_id: String,
    pub name: String,
    pub domain: String,
    pub sectors: Vec<String>,
    pub regions: Vec<String>,
    pub operational_capacity: f64,
    pub similarity_score: f64,
    pub final_score: f64,
    pub contact: Option<String>,
    #[serde(rename = "ondc_id")]
    pub external_id: Option<String>,
}

impl MatchResult {
    pub fn from_partner(partner: &PartnerRecord, similarity_score: f64, final_score: f64) -> Self {
        Self {
            partner_id: partner.id.clone(),
            name: partner.name.clone(),
            domain: partner.domain.clone(),
            sectors: partner.sectors.clone(),
            regions: partner.regions.clone(),
            operational_capacity: partner.operational_capacity,
            similarity_score,
            final_score,
            contact: partner.contact.clone(),
            external_id: partner.external_id.clone(),
        }
    }
}

/// Taxonomy placement for a product description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub category: String,
    pub subcategory: String,
    pub hsn_code: String,
    pub confidence: f64,
    pub keywords: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partner(sectors: &[&str], regions: &[&str]) -> PartnerRecord {
        PartnerRecord {
            id: "p1".to_string(),
            name: "Partner".to_string(),
            domain: "leather sandals manufacturer".to_string(),
            sectors: sectors.iter().map(|s| s.to_string()).collect(),
            regions: regions.iter().map(|s| s.to_string()).collect(),
            operational_capacity: 10.0,
            contact: None,
            external_id: None,
        }
    }

    #[test]
    fn test_document_template() {
        let p = partner(&["footwear", "leather"], &["Agra"]);
        assert_eq!(
            p.document(),
            "leather sandals manufacturer. Sectors: footwear, leather. Regions: Agra."
        );
    }

    #[test]
    fn test_document_drops_blank_tags() {
        let p = partner(&["  footwear ", ""], &[" ", "Agra"]);
        assert_eq!(
            p.document(),
            "leather sandals manufacturer. Sectors: footwear. Regions: Agra."
        );
    }

    #[test]
    fn test_partner_deserializes_catalog_shape() {
        let json = r#"{
            "id": "SNP001",
            "name": "Agra Logistics",
            "domain": "footwear logistics",
            "sectors": ["footwear"],
            "regions": ["Agra"],
            "operational_capacity": 85,
            "ondc_id": "ondc-agra-01"
        }"#;
        let p: PartnerRecord = serde_json::from_str(json).unwrap();
        assert_eq!(p.operational_capacity, 85.0);
        assert_eq!(p.external_id.as_deref(), Some("ondc-agra-01"));
        assert!(p.contact.is_none());
    }
}
