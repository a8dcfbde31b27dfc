//! # Comparison Orchestrator Module
//!
//! ## Purpose
//! Resolves two free-text title fragments against the record store, builds
//! a derived profile for each, scores their similarity and produces a
//! structured insight list plus a textual recommendation.
//!
//! ## Input/Output Specification
//! - **Input**: Two project-title fragments and the record store
//! - **Output**: `ComparisonResult` with both profiles, the score, insights
//!   and a recommendation string
//! - **Errors**: Validation failure before any lookup when a fragment is
//!   empty; side-identified not-found when a lookup misses
//!
//! ## Key Features
//! - First-match fuzzy title resolution (case-insensitive containment)
//! - Deterministic output: rerunning the same queries against an unchanged
//!   store yields byte-identical results

use crate::dataset::ProjectStore;
use crate::errors::{AdvisorError, CompareSide, Result};
use crate::estimator::{build_profile, Complexity, ProjectProfile};
use crate::similarity::similarity_score;
use serde::{Deserialize, Serialize};

/// Full result of a two-project comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub project1: ProjectProfile,
    pub project2: ProjectProfile,
    pub similarity_score: u32,
    pub insights: Vec<String>,
    pub recommendation: String,
}

/// Compare two projects resolved by title fragment.
pub fn compare_projects(
    store: &ProjectStore,
    query1: &str,
    query2: &str,
) -> Result<ComparisonResult> {
    let query1 = query1.trim();
    let query2 = query2.trim();

    // Validation precedes any lookup
    if query1.is_empty() {
        return Err(AdvisorError::Validation {
            field: "project1".to_string(),
            reason: "project title cannot be empty".to_string(),
        });
    }
    if query2.is_empty() {
        return Err(AdvisorError::Validation {
            field: "project2".to_string(),
            reason: "project title cannot be empty".to_string(),
        });
    }

    let record1 = store
        .find_by_title(query1)
        .ok_or_else(|| AdvisorError::ProjectNotFound {
            side: CompareSide::First,
            query: query1.to_string(),
        })?;
    let record2 = store
        .find_by_title(query2)
        .ok_or_else(|| AdvisorError::ProjectNotFound {
            side: CompareSide::Second,
            query: query2.to_string(),
        })?;

    let profile1 = build_profile(record1);
    let profile2 = build_profile(record2);
    let score = similarity_score(&profile1, &profile2);

    let insights = build_insights(&profile1, &profile2);
    let recommendation = build_recommendation(&profile1, &profile2, score);

    tracing::debug!(
        "Compared '{}' vs '{}': score {}",
        profile1.title,
        profile2.title,
        score
    );

    Ok(ComparisonResult {
        project1: profile1,
        project2: profile2,
        similarity_score: score,
        insights,
        recommendation,
    })
}

/// Structured per-dimension insight statements.
fn build_insights(p1: &ProjectProfile, p2: &ProjectProfile) -> Vec<String> {
    let mut insights = Vec::new();

    // Technology overlap
    let common: Vec<&str> = p1
        .technologies
        .iter()
        .filter(|t| p2.technologies.contains(t))
        .map(|t| t.label())
        .collect();
    if common.is_empty() {
        insights.push("⚠️ These projects use completely different technology stacks".to_string());
    } else {
        insights.push(format!(
            "✅ Both projects share {} common technology/technologies: {}",
            common.len(),
            common.join(", ")
        ));
    }

    // Specialty
    if p1.specialty == p2.specialty {
        insights.push(format!(
            "✅ Both projects are from the same specialty: {}",
            p1.specialty
        ));
    } else {
        insights.push(format!(
            "📊 Different specialties: Project 1 ({}) vs Project 2 ({})",
            p1.specialty, p2.specialty
        ));
    }

    // Complexity: flag the skew specifically when either side is Advanced
    if p1.complexity == p2.complexity {
        insights.push(format!(
            "⚖️ Both projects have similar complexity: {}",
            p1.complexity
        ));
    } else if p1.complexity == Complexity::Advanced || p2.complexity == Complexity::Advanced {
        insights.push("⚠️ One project is significantly more complex than the other".to_string());
    }

    // Duration
    if p1.duration == p2.duration {
        insights.push(format!("⏱️ Similar time commitment: {}", p1.duration));
    } else {
        insights.push(format!(
            "⏱️ Different durations: Project 1 ({}) vs Project 2 ({})",
            p1.duration, p2.duration
        ));
    }

    insights
}

/// Recommendation text keyed by score banding, complexity skew and
/// exceptional value.
fn build_recommendation(p1: &ProjectProfile, p2: &ProjectProfile, score: u32) -> String {
    let mut parts: Vec<String> = Vec::new();

    if score > 70 {
        parts.push(
            "⚠️ These projects are very similar. Consider choosing one based on your specific interests."
                .to_string(),
        );
    } else if score < 30 {
        parts.push(
            "✅ These projects offer very different experiences - great for diversification!"
                .to_string(),
        );
    } else {
        parts.push("📊 These projects have some overlap but distinct focuses.".to_string());
    }

    // Direction-aware complexity guidance
    if p1.complexity == Complexity::Beginner && p2.complexity == Complexity::Advanced {
        parts.push(
            "💡 Project 1 is better for beginners, while Project 2 requires advanced skills."
                .to_string(),
        );
    } else if p1.complexity == Complexity::Advanced && p2.complexity == Complexity::Beginner {
        parts.push(
            "💡 Project 2 is better for beginners, while Project 1 requires advanced skills."
                .to_string(),
        );
    } else if p1.complexity == Complexity::Advanced && p2.complexity == Complexity::Advanced {
        parts.push(
            "🎯 Both projects are challenging - ensure you have the required skills.".to_string(),
        );
    }

    // Exceptional-value callouts
    if p1.value_added.contains("Very High") {
        parts.push(format!(
            "⭐ Project 1 offers exceptional value: {}",
            p1.value_added
        ));
    }
    if p2.value_added.contains("Very High") {
        parts.push(format!(
            "⭐ Project 2 offers exceptional value: {}",
            p2.value_added
        ));
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProjectRecord;

    fn store() -> ProjectStore {
        ProjectStore::new(vec![
            ProjectRecord {
                title: "AI Agent for HR Process Automation".to_string(),
                student: "Amal Ben Salah".to_string(),
                specialty: "AI".to_string(),
                year: 2024,
            },
            ProjectRecord {
                title: "Intelligent Document OCR Pipeline Optimization".to_string(),
                student: "Mehdi Kacem".to_string(),
                specialty: "AI".to_string(),
                year: 2024,
            },
            // Specialty deliberately avoids the complexity buckets
            // ("web development" alone would rank Intermediate)
            ProjectRecord {
                title: "Internal Website".to_string(),
                student: "Ines Gharbi".to_string(),
                specialty: "IT".to_string(),
                year: 2023,
            },
        ])
    }

    #[test]
    fn test_not_found_identifies_the_side() {
        let s = store();

        let err = compare_projects(&s, "nonexistent-zzz", "AI Agent").unwrap_err();
        match err {
            AdvisorError::ProjectNotFound { side, query } => {
                assert_eq!(side, CompareSide::First);
                assert_eq!(query, "nonexistent-zzz");
            }
            other => panic!("expected ProjectNotFound, got {:?}", other),
        }

        let err = compare_projects(&s, "AI Agent", "nonexistent-zzz").unwrap_err();
        match err {
            AdvisorError::ProjectNotFound { side, .. } => assert_eq!(side, CompareSide::Second),
            other => panic!("expected ProjectNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_precedes_lookup() {
        let s = store();
        let err = compare_projects(&s, "  ", "AI Agent").unwrap_err();
        assert_eq!(err.category(), "validation");
        let err = compare_projects(&s, "AI Agent", "").unwrap_err();
        assert_eq!(err.category(), "validation");
    }

    #[test]
    fn test_idempotent_output() {
        let s = store();
        let a = compare_projects(&s, "ai agent", "website").unwrap();
        let b = compare_projects(&s, "ai agent", "website").unwrap();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_similar_projects_get_similar_banding() {
        let s = store();
        let result = compare_projects(&s, "AI Agent", "OCR Pipeline").unwrap();
        // Same specialty, both advanced, shared AI tag
        assert!(result.similarity_score >= 30);
        assert!(result
            .insights
            .iter()
            .any(|i| i.contains("same specialty: AI")));
        assert!(result
            .recommendation
            .contains("Both projects are challenging"));
        // Both sides carry a Very High value band
        assert!(result.recommendation.contains("Project 1 offers exceptional value"));
        assert!(result.recommendation.contains("Project 2 offers exceptional value"));
    }

    #[test]
    fn test_different_projects_get_diversification_banding() {
        let s = store();
        let result = compare_projects(&s, "AI Agent", "Internal Website").unwrap();
        // The guidance line below requires a true Advanced/Beginner skew
        assert_eq!(result.project1.complexity, Complexity::Advanced);
        assert_eq!(result.project2.complexity, Complexity::Beginner);
        assert!(result.similarity_score < 30);
        assert!(result.recommendation.contains("great for diversification"));
        // Beginner side is named in direction-aware guidance
        assert!(result
            .recommendation
            .contains("Project 2 is better for beginners"));
    }

    #[test]
    fn test_identical_queries_score_at_clamp_banding() {
        let s = ProjectStore::new(vec![ProjectRecord {
            title: "Intelligent Python Machine Learning Web Platform with Security, \
                    Network Routing, Cloud Terraform, Blockchain, IoT Automation and Testing"
                .to_string(),
            student: "Test Student".to_string(),
            specialty: "AI".to_string(),
            year: 2024,
        }]);
        let result = compare_projects(&s, "intelligent python", "intelligent python").unwrap();
        assert_eq!(result.similarity_score, 100);
        assert!(result.recommendation.contains("very similar"));
        assert!(result.insights.iter().any(|i| i.contains("common technology")));
    }
}
