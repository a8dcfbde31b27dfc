//! # Similarity Scorer Module
//!
//! ## Purpose
//! Computes a bounded similarity score between two derived project
//! profiles, used to drive comparison insights and recommendation text.
//!
//! ## Input/Output Specification
//! - **Input**: Two `ProjectProfile` values
//! - **Output**: Integer score in [0, 100]
//! - **Properties**: Deterministic, symmetric, no learned parameters
//!
//! ## Scoring
//! Additive bonuses, then a ceiling clamp:
//! - +10 per technology tag present in both profiles
//! - +15 when specialties are exactly equal
//! - +10 when complexity tiers are exactly equal
//! - +5 when duration bands are exactly equal

use crate::estimator::ProjectProfile;

/// Number of technology tags shared by both profiles.
fn technology_overlap(a: &ProjectProfile, b: &ProjectProfile) -> usize {
    a.technologies
        .iter()
        .filter(|t| b.technologies.contains(t))
        .count()
}

/// Bounded similarity score between two profiles.
pub fn similarity_score(a: &ProjectProfile, b: &ProjectProfile) -> u32 {
    let mut score = technology_overlap(a, b) as u32 * 10;

    if a.specialty == b.specialty {
        score += 15;
    }
    if a.complexity == b.complexity {
        score += 10;
    }
    if a.duration == b.duration {
        score += 5;
    }

    score.min(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::build_profile;
    use crate::ProjectRecord;

    fn record(title: &str, specialty: &str) -> ProjectRecord {
        ProjectRecord {
            title: title.to_string(),
            student: "Test Student".to_string(),
            specialty: specialty.to_string(),
            year: 2024,
        }
    }

    #[test]
    fn test_identical_keyword_rich_profiles_clamp_to_100() {
        // Seven or more shared tags push the raw sum past 100
        let r = record(
            "Intelligent Python Machine Learning Web Platform with Security, \
             Network Routing, Cloud Terraform, Blockchain, IoT Automation and Testing",
            "AI",
        );
        let p = build_profile(&r);
        assert!(p.technologies.len() >= 7);
        assert_eq!(similarity_score(&p, &p), 100);
    }

    #[test]
    fn test_identical_sparse_profiles_score_below_clamp() {
        let r = record("Internal Company Website", "Web Development");
        let p = build_profile(&r);
        // One shared tag (the General IT fallback) + specialty + complexity
        // + duration
        assert_eq!(similarity_score(&p, &p), 10 + 15 + 10 + 5);
    }

    #[test]
    fn test_symmetric() {
        let a = build_profile(&record("AI Agent for HR Process Automation", "AI"));
        let b = build_profile(&record("Network Security Study", "Networking"));
        assert_eq!(similarity_score(&a, &b), similarity_score(&b, &a));
    }

    #[test]
    fn test_bounded() {
        let profiles = [
            build_profile(&record("AI Agent for HR Process Automation", "AI")),
            build_profile(&record("Internal Company Website", "Web Development")),
            build_profile(&record("Inventory Survey", "Management")),
        ];
        for a in &profiles {
            for b in &profiles {
                let s = similarity_score(a, b);
                assert!(s <= 100);
            }
        }
    }

    #[test]
    fn test_disjoint_profiles_can_score_zero() {
        let a = build_profile(&record("Blockchain Ledger Node", "Fintech"));
        let b = build_profile(&record("Network Security Study", "Networking"));
        // No shared tags, different specialty/complexity/duration
        assert_eq!(similarity_score(&a, &b), 0);
    }
}
