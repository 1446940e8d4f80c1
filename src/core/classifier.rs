use crate::core::error::{MatchError, Result};
use crate::models::Classification;

/// One category in the commerce taxonomy
#[derive(Debug, Clone, Copy)]
pub struct TaxonomyCategory {
    pub name: &'static str,
    pub subcategories: &'static [&'static str],
    pub hsn_codes: &'static [&'static str],
    pub keywords: &'static [&'static str],
}

pub const TAXONOMY: &[TaxonomyCategory] = &[
    TaxonomyCategory {
        name: "Fashion & Footwear",
        subcategories: &["Ethnic Wear", "Western Wear", "Sarees & Dupatta", "Leather Footwear", "Ethnic Footwear", "Accessories"],
        hsn_codes: &["6101", "6402", "6403", "6217"],
        keywords: &["saree", "salwar", "kurta", "dupatta", "shawl", "chappal", "sandal", "shoe", "leather", "silk",
            "cotton wear", "ethnic", "blouse", "lehenga", "dhoti", "lungi", "kurtis", "hand loom"],
    },
    TaxonomyCategory {
        name: "Home & Kitchen",
        subcategories: &["Handicrafts", "Wooden Furniture", "Brass & Copper Items", "Pottery & Ceramics", "Home Decor", "Kitchen Utensils"],
        hsn_codes: &["6911", "7418", "9403"],
        keywords: &["pottery", "ceramic", "brass", "wooden", "furniture", "handicraft", "decor", "lamp", "idol",
            "statue", "utensil", "vessel", "earthen", "terracotta", "bamboo", "cane", "wicker"],
    },
    TaxonomyCategory {
        name: "Food & Beverage",
        subcategories: &["Organic Food", "Spices & Condiments", "Grains & Pulses", "Pickles & Preserves", "Dairy Products", "Snacks & Sweets"],
        hsn_codes: &["0904", "1001", "2001"],
        keywords: &["spice", "masala", "pickle", "grain", "pulse", "rice", "wheat", "flour", "dal", "chutney",
            "murabba", "ladoo", "snack", "namkeen", "organic", "natural food", "dairy", "ghee"],
    },
    TaxonomyCategory {
        name: "Beauty & Personal Care",
        subcategories: &["Ayurvedic Products", "Herbal Cosmetics", "Natural Skincare", "Essential Oils", "Hair Care", "Wellness Products"],
        hsn_codes: &["3304", "3305", "3306"],
        keywords: &["ayurvedic", "herbal", "skincare", "hair oil", "essential oil", "lotion", "cream", "face pack",
            "ubtan", "soap", "shampoo", "wellness", "natural", "organic beauty", "kumkumadi", "neem"],
    },
    TaxonomyCategory {
        name: "Engineering & Auto Parts",
        subcategories: &["Auto Ancillary Parts", "Industrial Hardware", "Metal Fabrication", "Machined Components", "Electrical Components"],
        hsn_codes: &["8708", "7326", "8536"],
        keywords: &["auto part", "component", "hardware", "fabrication", "machined", "casting", "forging", "valve",
            "pump", "gear", "bearing", "sheet metal", "welding", "bolt", "nut", "electrical"],
    },
    TaxonomyCategory {
        name: "Jewellery & Accessories",
        subcategories: &["Silver Jewellery", "Gold Ornaments", "Imitation Jewellery", "Tribal Jewellery", "Gemstones", "Fashion Accessories"],
        hsn_codes: &["7113", "7117"],
        keywords: &["jewellery", "jewelry", "silver", "gold", "necklace", "bracelet", "earring", "ring", "bangle",
            "anklet", "gem", "stone", "filigree", "meenakari", "kundan", "polki", "imitation"],
    },
    TaxonomyCategory {
        name: "Grocery & Staples",
        subcategories: &["Packaged Staples", "Edible Oils", "Tea & Coffee", "Dry Fruits", "Honey"],
        hsn_codes: &["1516", "0902", "0812"],
        keywords: &["grocery", "staples", "edible oil", "mustard oil", "tea", "coffee", "sugar", "salt", "honey",
            "dry fruit", "almond", "cashew", "walnut", "dates", "raisin"],
    },
    TaxonomyCategory {
        name: "Packaging & Paper Products",
        subcategories: &["Corrugated Packaging", "Paper Bags", "Eco Packaging", "Gift Wrap"],
        hsn_codes: &["4819", "4802"],
        keywords: &["packaging", "carton", "box", "paper bag", "gift wrap", "corrugated", "cardboard",
            "eco packaging", "biodegradable"],
    },
];

const DEFAULT_CATEGORY: &str = "Home & Kitchen";
const DEFAULT_SUBCATEGORY: &str = "Handicrafts";
const DEFAULT_HSN: &str = "9999";
const MAX_KEYWORDS: usize = 5;

/// Keyword-overlap classifier over the fixed taxonomy
#[derive(Debug, Clone, Copy)]
pub struct KeywordClassifier {
    taxonomy: &'static [TaxonomyCategory],
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self { taxonomy: TAXONOMY }
    }
}

impl KeywordClassifier {
    pub fn classify(&self, description: &str) -> Result<Classification> {
        if description.trim().is_empty() {
            return Err(MatchError::InvalidQuery(
                "product description cannot be empty".to_string(),
            ));
        }

        let desc = description.to_lowercase();

        let mut category = DEFAULT_CATEGORY;
        let mut subcategory = DEFAULT_SUBCATEGORY;
        let mut hsn_code = DEFAULT_HSN;
        let mut best_score = 0usize;

        for entry in self.taxonomy {
            let score = entry.keywords.iter().filter(|kw| desc.contains(*kw)).count();
            // Strictly greater: the earlier category wins a tie
            if score > best_score {
                best_score = score;
                category = entry.name;
                hsn_code = entry.hsn_codes.first().copied().unwrap_or(DEFAULT_HSN);
                subcategory = pick_subcategory(entry, &desc);
            }
        }

        let confidence = (0.4 + best_score as f64 * 0.1).min(0.85);

        tracing::debug!("Classified {:?} as {} / {} (score {})", description, category, subcategory, best_score);

        Ok(Classification {
            category: category.to_string(),
            subcategory: subcategory.to_string(),
            hsn_code: hsn_code.to_string(),
            confidence: (confidence * 100.0).round() / 100.0,
            keywords: extract_keywords(&desc),
        })
    }
}

fn pick_subcategory(entry: &TaxonomyCategory, desc: &str) -> &'static str {
    entry
        .subcategories
        .iter()
        .find(|sub| {
            sub.to_lowercase()
                .split_whitespace()
                .any(|word| desc.contains(word))
        })
        .or_else(|| entry.subcategories.first())
        .copied()
        .unwrap_or(DEFAULT_SUBCATEGORY)
}

fn extract_keywords(desc: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for word in desc.split_whitespace() {
        if word.chars().count() > 3 && !keywords.iter().any(|k| k == word) {
            keywords.push(word.to_string());
            if keywords.len() == MAX_KEYWORDS {
                break;
            }
        }
    }
    keywords
}
