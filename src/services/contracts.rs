use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::core::{
    error::{MatchError, Result},
    scoring::round_to,
    similarity::{cosine, TextSimilarityModel, TfIdf},
};

/// A standing procurement, finance or marketplace opportunity for MSEs
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Opportunity {
    pub id: &'static str,
    pub title: &'static str,
    pub portal: &'static str,
    pub portal_url: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub sectors: &'static [&'static str],
    pub regions: &'static [&'static str],
    pub deadline: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub value_range: &'static str,
    pub eligibility: &'static str,
    pub link: &'static str,
}

impl Opportunity {
    /// Text the opportunity is matched on
    pub fn document(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title,
            self.description,
            self.sectors.join(" "),
            self.regions.join(" ")
        )
    }
}

/// Portal listing entry
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Portal {
    pub name: &'static str,
    pub url: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

pub const PORTALS: &[Portal] = &[
    Portal { name: "GeM", url: "https://gems.gov.in", kind: "Government Procurement" },
    Portal { name: "NSIC", url: "https://nsic.co.in", kind: "Tendering" },
    Portal { name: "SIDBI", url: "https://www.sidbi.in", kind: "Finance" },
    Portal { name: "KVIC", url: "https://www.kvic.gov.in", kind: "Subsidy" },
    Portal { name: "ONDC", url: "https://ondc.org", kind: "E-Commerce" },
    Portal { name: "DC MSME", url: "https://dcmsme.gov.in", kind: "Cluster Dev" },
    Portal { name: "TradeIndia", url: "https://www.tradeindia.com", kind: "B2B Marketplace" },
    Portal { name: "IndiaMart", url: "https://www.indiamart.com", kind: "B2B Marketplace" },
    Portal { name: "SC/ST Hub", url: "https://scsthub.in", kind: "Reserved Procurement" },
    Portal { name: "ZED Portal", url: "https://zed.msme.gov.in", kind: "Quality Certification" },
    Portal { name: "TReDS", url: "https://www.rxil.in", kind: "Invoice Finance" },
];

pub const CURATED_OPPORTUNITIES: &[Opportunity] = &[
    Opportunity {
        id: "gem-001",
        title: "GeM - Government e-Marketplace: Direct Seller Registration",
        portal: "GeM (gems.gov.in)",
        portal_url: "https://gems.gov.in",
        category: "Government Procurement",
        description: "Sell directly to government departments and PSUs. Open for all MSMEs with Udyam registration. Over ₹2 lakh crore in annual procurement.",
        sectors: &["textiles", "handicrafts", "food", "electronics", "furniture", "leather", "IT", "services"],
        regions: &["all india"],
        deadline: "Ongoing",
        kind: "contract",
        value_range: "₹10,000 - ₹50 Crore+",
        eligibility: "Udyam registered MSMEs",
        link: "https://gems.gov.in/seller_registration",
    },
    Opportunity {
        id: "nsic-001",
        title: "NSIC Single Point Registration - Government Tender Exemption",
        portal: "NSIC (nsic.co.in)",
        portal_url: "https://nsic.co.in",
        category: "Government Tendering",
        description: "Exemption from payment of Earnest Money Deposit for government tenders. 358+ government purchases reserved for MSMEs.",
        sectors: &["manufacturing", "engineering", "electronics", "chemicals", "packaging", "textiles"],
        regions: &["all india"],
        deadline: "Ongoing",
        kind: "scheme",
        value_range: "Tender-based",
        eligibility: "Manufacturing MSMEs with Udyam",
        link: "https://www.nsic.co.in/Schemes/Single-Point-Registration-Scheme.aspx",
    },
    Opportunity {
        id: "sidbi-001",
        title: "SIDBI MSME Loans & Supply Chain Finance",
        portal: "SIDBI (sidbi.in)",
        portal_url: "https://www.sidbi.in",
        category: "Finance & Credit",
        description: "Working capital loans, term loans, and supply chain financing for MSMEs. Collateral-free loans up to ₹10 lakh under CGTMSE.",
        sectors: &["all sectors"],
        regions: &["all india"],
        deadline: "Ongoing",
        kind: "scheme",
        value_range: "₹1 Lakh - ₹50 Crore",
        eligibility: "All Udyam-registered MSMEs",
        link: "https://www.sidbi.in/en/loans",
    },
    Opportunity {
        id: "kvic-001",
        title: "KVIC PMEGP - Prime Minister's Employment Generation Programme",
        portal: "KVIC (kvic.gov.in)",
        portal_url: "https://www.kvic.gov.in",
        category: "Subsidy & Grant",
        description: "Subsidy of 15-35% for new manufacturing or service enterprises. Max project cost ₹50 lakh (manufacturing), ₹20 lakh (services).",
        sectors: &["handicrafts", "food processing", "khadi", "textiles", "rural industries"],
        regions: &["rural india", "all india"],
        deadline: "Ongoing",
        kind: "scheme",
        value_range: "₹10 Lakh - ₹50 Lakh subsidy",
        eligibility: "New enterprises, individuals aged 18+",
        link: "https://www.kviconline.gov.in/pmegpeportal/pmegphome/index.jsp",
    },
    Opportunity {
        id: "ondc-001",
        title: "ONDC Seller Onboarding - Digital Commerce Network",
        portal: "ONDC (ondc.org)",
        portal_url: "https://ondc.org",
        category: "E-Commerce",
        description: "Sell across all ONDC buyer apps (Meesho, Paytm, Flipkart, etc.). Zero platform fee for MSMEs. Access 8 crore+ online buyers.",
        sectors: &["retail", "food", "grocery", "electronics", "fashion", "handicrafts", "agriculture"],
        regions: &["all india"],
        deadline: "Ongoing",
        kind: "platform",
        value_range: "Market-based",
        eligibility: "All MSMEs with GSTIN",
        link: "https://ondc.org/",
    },
    Opportunity {
        id: "dcmsme-001",
        title: "Micro & Small Enterprises Cluster Development Programme (MSECDP)",
        portal: "DC MSME (dcmsme.gov.in)",
        portal_url: "https://dcmsme.gov.in",
        category: "Cluster Development",
        description: "GoI support for common facility centres, soft interventions, and infrastructure development of MSME clusters. Per cluster support up to ₹30 Crore.",
        sectors: &["all manufacturing sectors"],
        regions: &["all india"],
        deadline: "Ongoing",
        kind: "scheme",
        value_range: "Up to ₹30 Crore per cluster",
        eligibility: "MSME clusters, SPVs, associations",
        link: "https://dcmsme.gov.in/dip/MSECDP.html",
    },
    Opportunity {
        id: "tradeindia-001",
        title: "TradeIndia B2B Buyer Leads - Domestic & Export",
        portal: "TradeIndia (tradeindia.com)",
        portal_url: "https://www.tradeindia.com",
        category: "B2B Marketplace",
        description: "Connect with 80 lakh+ verified buyers across India. Free basic listing for MSMEs. Categories include industrial goods, consumer products, handicrafts.",
        sectors: &["all b2b sectors", "export", "industrial", "consumer goods"],
        regions: &["all india", "global"],
        deadline: "Ongoing",
        kind: "marketplace",
        value_range: "Order-based",
        eligibility: "Any registered business",
        link: "https://www.tradeindia.com/Seller/Registration/",
    },
    Opportunity {
        id: "indiamart-001",
        title: "IndiaMart Seller Enquiries - India's Largest B2B Marketplace",
        portal: "IndiaMart (indiamart.com)",
        portal_url: "https://www.indiamart.com",
        category: "B2B Marketplace",
        description: "Post products and receive live buyer enquiries. 10 crore+ registered buyers. Free basic listing available. Trusted by 70 lakh+ suppliers.",
        sectors: &["all sectors", "industrial", "consumer goods", "agriculture", "textiles"],
        regions: &["all india"],
        deadline: "Ongoing",
        kind: "marketplace",
        value_range: "Order-based",
        eligibility: "Any registered business",
        link: "https://seller.indiamart.com/",
    },
    Opportunity {
        id: "nsc-001",
        title: "National SC/ST Hub - Reserved Procurement for SC/ST Entrepreneurs",
        portal: "SC/ST Hub (scsthub.in)",
        portal_url: "https://scsthub.in",
        category: "Reserved Procurement",
        description: "4% of government procurement reserved for SC/ST MSMEs. Mentoring, financial aid, and market linkages provided.",
        sectors: &["manufacturing", "services", "trade"],
        regions: &["all india"],
        deadline: "Ongoing",
        kind: "scheme",
        value_range: "Tender-based",
        eligibility: "SC/ST entrepreneurs with MSME registration",
        link: "https://scsthub.in/",
    },
    Opportunity {
        id: "zed-001",
        title: "ZED Certification - Zero Defect Zero Effect Quality Scheme",
        portal: "ZED (zed.msme.gov.in)",
        portal_url: "https://zed.msme.gov.in",
        category: "Quality Certification",
        description: "GoI subsidy of 60-80% on ZED certification cost for MSMEs. Certified MSMEs get preference in GeM, exports, and defence procurement.",
        sectors: &["manufacturing", "engineering", "defence", "automotive"],
        regions: &["all india"],
        deadline: "Ongoing",
        kind: "scheme",
        value_range: "Certification subsidy",
        eligibility: "Manufacturing MSMEs",
        link: "https://zed.msme.gov.in/",
    },
    Opportunity {
        id: "treds-001",
        title: "TReDS - Trade Receivables Discounting System",
        portal: "TReDS (RBI Licensed)",
        portal_url: "https://www.rxil.in",
        category: "Invoice Financing",
        description: "Discount your trade receivables (invoices) raised against corporates and PSUs. Get working capital in 24-48 hours at competitive rates.",
        sectors: &["all b2b sectors", "manufacturing", "services"],
        regions: &["all india"],
        deadline: "Ongoing",
        kind: "finance",
        value_range: "Invoice value",
        eligibility: "MSMEs supplying to corporates/PSUs",
        link: "https://www.rxil.in/",
    },
];

/// Opportunity with its relevance to the query
#[derive(Debug, Clone, Serialize)]
pub struct RankedOpportunity {
    #[serde(flatten)]
    pub opportunity: Opportunity,
    pub match_score: f64,
}

/// Echo of the search inputs
#[derive(Debug, Clone, Serialize)]
pub struct ContractQuery {
    pub product_desc: String,
    pub location: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContractSearchResponse {
    pub query: ContractQuery,
    pub total_found: usize,
    pub curated_count: usize,
    pub results: Vec<RankedOpportunity>,
    pub portals_searched: Vec<&'static str>,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PortalsResponse {
    pub portals: &'static [Portal],
    pub total: usize,
}

pub fn list_portals() -> PortalsResponse {
    PortalsResponse {
        portals: PORTALS,
        total: PORTALS.len(),
    }
}

/// Rank opportunities by TF-IDF relevance to the query
///
/// The model is fitted over every opportunity document plus the query itself,
/// so query-only terms still get an idf weight. If the fit fails every
/// opportunity scores 0 and catalog order is kept. Scores are rounded to 3
/// places before the stable descending sort.
pub fn rank_opportunities<M: TextSimilarityModel>(
    model: &M,
    opportunities: &[Opportunity],
    query_text: &str,
    top_k: usize,
) -> Vec<RankedOpportunity> {
    if opportunities.is_empty() {
        return Vec::new();
    }

    let mut corpus: Vec<String> = opportunities.iter().map(Opportunity::document).collect();
    corpus.push(query_text.to_string());

    let scores: Vec<f64> = match model.fit(&corpus) {
        Ok(fitted) => {
            let query_vec = model.project(&fitted, query_text);
            corpus[..opportunities.len()]
                .iter()
                .map(|doc| cosine(&query_vec, &model.project(&fitted, doc)))
                .collect()
        }
        Err(e) => {
            tracing::warn!("Opportunity scoring unavailable, using zero relevance: {}", e);
            vec![0.0; opportunities.len()]
        }
    };

    let mut ranked: Vec<RankedOpportunity> = opportunities
        .iter()
        .zip(scores)
        .map(|(opportunity, score)| RankedOpportunity {
            opportunity: *opportunity,
            match_score: round_to(score, 3),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.match_score
            .partial_cmp(&a.match_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(top_k);
    ranked
}

/// Search the curated opportunities for a product and optional location
pub fn search_contracts(
    product_desc: &str,
    location: Option<&str>,
    state: Option<&str>,
    top_k: usize,
) -> Result<ContractSearchResponse> {
    if product_desc.trim().is_empty() {
        return Err(MatchError::InvalidQuery(
            "product description is required".to_string(),
        ));
    }
    if top_k == 0 {
        return Err(MatchError::InvalidQuery("top_k must be positive".to_string()));
    }

    let query_text = format!(
        "{} {} {}",
        product_desc,
        location.unwrap_or(""),
        state.unwrap_or("")
    );
    let results = rank_opportunities(&TfIdf, CURATED_OPPORTUNITIES, &query_text, top_k);

    tracing::info!(
        "Contract search returned {} of {} opportunities",
        results.len(),
        CURATED_OPPORTUNITIES.len()
    );

    Ok(ContractSearchResponse {
        query: ContractQuery {
            product_desc: product_desc.to_string(),
            location: location.map(str::to_string),
            state: state.map(str::to_string),
        },
        total_found: CURATED_OPPORTUNITIES.len(),
        curated_count: CURATED_OPPORTUNITIES.len(),
        results,
        portals_searched: PORTALS.iter().map(|p| p.name).collect(),
        fetched_at: Utc::now(),
    })
}
