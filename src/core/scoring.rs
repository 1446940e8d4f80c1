use crate::models::{MatchResult, PartnerRecord};

/// Magnitudes past this have no fractional digits left to round, and scaling
/// them would overflow to infinity
const ROUNDING_LIMIT: f64 = 1e15;

/// Round to `places` decimal places, half away from zero
#[inline]
pub fn round_to(value: f64, places: i32) -> f64 {
    if !value.is_finite() || value.abs() >= ROUNDING_LIMIT {
        return value;
    }
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Round to 4 decimal places, half away from zero
#[inline]
pub fn round4(value: f64) -> f64 {
    round_to(value, 4)
}

/// Score every partner against its similarity value
///
/// final_score = round4(sim * operational_capacity) on the raw similarity.
/// `similarity_score` is rounded for display only and never feeds the ranking.
/// Capacity is a multiplier, not a tiebreaker: zero capacity scores zero.
pub fn score_partners(partners: &[PartnerRecord], similarities: &[f64]) -> Vec<MatchResult> {
    partners
        .iter()
        .zip(similarities.iter())
        .map(|(partner, &sim)| {
            let final_score = round4(sim * partner.operational_capacity);
            MatchResult::from_partner(partner, round4(sim), final_score)
        })
        .collect()
}

/// Sort by final score (descending) and keep the first `top_k`
///
/// `sort_by` is stable, so exact ties keep catalog order.
pub fn rank(mut results: Vec<MatchResult>, top_k: usize) -> Vec<MatchResult> {
    results.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    results.truncate(top_k);
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partner(id: &str, capacity: f64) -> PartnerRecord {
        PartnerRecord {
            id: id.to_string(),
            name: format!("Partner {}", id),
            domain: "general logistics".to_string(),
            sectors: vec![],
            regions: vec![],
            operational_capacity: capacity,
            contact: None,
            external_id: None,
        }
    }

    #[test]
    fn test_round4() {
        assert_eq!(round4(0.123456), 0.1235);
        assert_eq!(round4(0.0), 0.0);
        assert_eq!(round4(12.00004), 12.0);
    }

    #[test]
    fn test_capacity_is_multiplier() {
        let partners = vec![partner("A", 0.0), partner("B", 100.0)];
        let scored = score_partners(&partners, &[1.0, 0.2]);
        assert_eq!(scored[0].final_score, 0.0);
        assert_eq!(scored[1].final_score, 20.0);
    }

    #[test]
    fn test_rank_is_stable_on_ties() {
        let partners = vec![partner("A", 10.0), partner("B", 5.0), partner("C", 10.0), partner("D", 20.0)];
        let scored = score_partners(&partners, &[0.5, 0.1, 0.5, 0.25]);
        let ranked = rank(scored, 10);
        let ids: Vec<&str> = ranked.iter().map(|m| m.partner_id.as_str()).collect();
        assert_eq!(ids, vec!["A", "C", "D", "B"]);
    }

    #[test]
    fn test_rank_truncates() {
        let partners = vec![partner("A", 1.0), partner("B", 2.0), partner("C", 3.0)];
        let ranked = rank(score_partners(&partners, &[1.0, 1.0, 1.0]), 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].partner_id, "C");
    }

    #[test]
    fn test_round_to_places() {
        assert_eq!(round_to(0.12345, 3), 0.123);
        assert_eq!(round_to(2.5, 0), 3.0);
    }

    #[test]
    fn test_round4_leaves_huge_values_finite() {
        assert_eq!(round4(1e300), 1e300);
        assert_eq!(round4(-1e300), -1e300);
        assert_eq!(round4(1e15), 1e15);

        let scored = score_partners(&[partner("A", 1e300)], &[0.5]);
        assert!(scored[0].final_score.is_finite());
        assert_eq!(scored[0].final_score, 0.5e300);
    }

    #[test]
    fn test_final_score_uses_unrounded_similarity() {
        // Both similarities round to 0.0001; only the raw values order them
        let partners = vec![partner("A", 1000.0), partner("B", 1200.0)];
        let ranked = rank(score_partners(&partners, &[0.00014, 0.00005]), 2);

        assert_eq!(ranked[0].partner_id, "A");
        assert_eq!(ranked[0].final_score, 0.14);
        assert_eq!(ranked[1].partner_id, "B");
        assert_eq!(ranked[1].final_score, 0.06);
    }
}
