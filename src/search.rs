//! # Search and Recommendation Module
//!
//! ## Purpose
//! Answers bilingual natural-language questions against the record store,
//! produces curated topic suggestions, ranks projects against a student
//! profile and aggregates dataset statistics. Also builds the context block
//! embedded in completion-service prompts.
//!
//! ## Input/Output Specification
//! - **Input**: Free-text questions, domain names, student profiles
//! - **Output**: Formatted markdown answers, ranked suggestion lists,
//!   statistics reports
//! - **Branching**: Question answering routes through domain detection,
//!   counting phrases, listing phrases, then a stopword-filtered fallback
//!
//! ## Key Features
//! - Domain-classified record listing with bilingual keyword unions
//! - Additive profile scoring with stable tie order and top-5 truncation
//! - Deterministic, insertion-ordered statistics aggregation

use crate::classifier::{classify, DomainTag};
use crate::config::SearchConfig;
use crate::dataset::ProjectStore;
use crate::keywords;
use serde::{Deserialize, Serialize};

/// Answer a free-text question against the record store.
///
/// Branch order: domain listing, counting questions, listing questions,
/// stopword-filtered keyword search.
pub fn answer_question(store: &ProjectStore, question: &str, config: &SearchConfig) -> String {
    let q = question.to_lowercase();
    let mut results: Vec<String> = Vec::new();

    if let Some(domain) = classify(&q) {
        answer_domain(store, domain, &mut results);
    } else if keywords::any_match(&q, keywords::HOW_MANY_PHRASES) {
        answer_count(store, &q, &mut results);
    } else if keywords::any_match(&q, keywords::LIST_WORDS) {
        answer_list(store, &q, config.max_list_results, &mut results);
    } else {
        answer_fallback(store, &q, &mut results);
    }

    if results.is_empty() {
        "No relevant information found. Please refine your query.".to_string()
    } else {
        results.join("\n")
    }
}

/// Domain branch: list every record matching the domain's keyword union.
fn answer_domain(store: &ProjectStore, domain: DomainTag, results: &mut Vec<String>) {
    let projects = store.filter_by_terms(domain.keywords());

    if projects.is_empty() {
        results.push(format!(
            "No {} projects found in the database.",
            domain.as_str()
        ));
        return;
    }

    results.push(format!(
        "**{} Projects Found: {} project(s)**\n",
        domain.as_str().to_uppercase(),
        projects.len()
    ));
    for (idx, record) in projects.iter().enumerate() {
        results.push(format!("{}. **Student:** {}", idx + 1, record.student));
        results.push(format!("   **Title:** {}", record.title));
        results.push(format!("   **Specialty:** {}", record.specialty));
        results.push(format!("   **Year:** {}\n", record.year));
    }
}

/// Counting branch: totals, per-specialty counts, or one specialty named
/// in the question.
fn answer_count(store: &ProjectStore, q: &str, results: &mut Vec<String>) {
    if keywords::any_match(q, keywords::TOTAL_WORDS) {
        results.push(format!("**Total Projects:** {}", store.len()));
    } else if keywords::any_match(q, keywords::SPECIALTY_WORDS) {
        results.push("**Projects by Specialty:**\n".to_string());
        for (specialty, count) in store.specialty_counts() {
            results.push(format!("• {}: {} project(s)", specialty, count));
        }
    } else {
        // Try to find a specialty name in the question
        for specialty in store.specialties() {
            if q.contains(&specialty.to_lowercase()) {
                let count = store
                    .all()
                    .iter()
                    .filter(|r| r.specialty == specialty)
                    .count();
                results.push(format!("**{}:** {} project(s)", specialty, count));
                break;
            }
        }
    }
}

/// Listing branch: enumerate all records, capped for readability.
fn answer_list(store: &ProjectStore, q: &str, cap: usize, results: &mut Vec<String>) {
    if !keywords::any_match(q, keywords::ALL_WORDS) {
        return;
    }

    results.push(format!("**All Projects ({} total):**\n", store.len()));
    for (idx, record) in store.all().iter().enumerate() {
        results.push(format!(
            "{}. {} - {} ({})",
            idx + 1,
            record.student,
            record.title,
            record.specialty
        ));
        if idx + 1 >= cap && store.len() > cap {
            results.push(format!("\n... and {} more projects", store.len() - cap));
            break;
        }
    }
}

/// Fallback branch: stopword-filtered keyword search over title, specialty
/// and student name.
fn answer_fallback(store: &ProjectStore, q: &str, results: &mut Vec<String>) {
    let search_words: Vec<&str> = q
        .split_whitespace()
        .filter(|w| !keywords::STOPWORDS.contains(w) && w.len() > 3)
        .collect();

    if search_words.is_empty() {
        results.push(
            "Please provide more specific search terms (e.g., AI, cybersecurity, blockchain, web, networking)."
                .to_string(),
        );
        return;
    }

    let projects = store.filter_by_terms_with_student(&search_words);
    if projects.is_empty() {
        results.push("No matching projects found. Please try different keywords.".to_string());
        return;
    }

    results.push(format!(
        "**Search Results: {} project(s) found**\n",
        projects.len()
    ));
    for (idx, record) in projects.iter().enumerate() {
        results.push(format!("{}. **Student:** {}", idx + 1, record.student));
        results.push(format!("   **Title:** {}", record.title));
        results.push(format!("   **Specialty:** {}", record.specialty));
        results.push(format!("   **Year:** {}\n", record.year));
    }
}

/// Context block for completion-service prompts: a compact bullet listing
/// of the records matching the question's domain, or a full-text scan when
/// no domain is recognized.
pub fn build_context(store: &ProjectStore, question: &str) -> String {
    let q = question.to_lowercase();
    let mut results: Vec<String> = Vec::new();

    if let Some(domain) = classify(&q) {
        let projects = store.filter_by_terms(domain.keywords());
        if projects.is_empty() {
            results.push(format!("No {} projects found.", domain.as_str()));
        } else {
            results.push(format!("**{} projects:**", capitalize(domain.as_str())));
            for record in projects {
                results.push(format!(
                    "• **{}** – {} ({})",
                    record.student, record.title, record.specialty
                ));
            }
        }
    } else {
        let projects = store.filter_by_terms(&[q.as_str()]);
        if projects.is_empty() {
            results.push("No matching projects found.".to_string());
        } else {
            results.push("**Matching projects:**".to_string());
            for record in projects {
                results.push(format!(
                    "• **{}** – {} ({})",
                    record.student, record.title, record.specialty
                ));
            }
        }
    }

    results.join("\n")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Curated topic suggestions for a domain.
pub fn suggest_topics(domain: &str) -> Vec<String> {
    let d = domain.to_lowercase();
    keywords::DOMAIN_SUGGESTIONS
        .iter()
        .find(|(name, _)| *name == d)
        .map(|(_, topics)| topics.iter().map(|t| t.to_string()).collect())
        .unwrap_or_else(|| vec![keywords::NO_SUGGESTIONS.to_string()])
}

/// Student profile submitted to the profile-recommendation endpoint.
/// All fields are optional free text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentProfile {
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub certifications: String,
    #[serde(default)]
    pub interests: String,
    #[serde(default)]
    pub level: String,
}

/// One ranked suggestion in the profile-recommendation response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Suggestion {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    pub match_reasons: Vec<String>,
}

/// Profile-recommendation response payload.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileRecommendation {
    pub suggestions: Vec<Suggestion>,
    pub total_matches: usize,
}

/// Rank projects against a student profile.
///
/// Each matching rule adds 3 points and a fixed reason; the level
/// adjustment adds 1 (or 0.5 for intermediate). Records scoring above zero
/// are ranked descending with ties keeping record order, truncated to
/// `config.max_profile_suggestions`.
pub fn profile_recommend(
    store: &ProjectStore,
    profile: &StudentProfile,
    config: &SearchConfig,
) -> ProfileRecommendation {
    let skills = profile.skills.to_lowercase();
    let certifications = profile.certifications.to_lowercase();
    let interests = profile.interests.to_lowercase();
    let level = profile.level.to_lowercase();

    let mut scored: Vec<(f32, Suggestion)> = Vec::new();

    for record in store.all() {
        let title_lower = record.title.to_lowercase();
        let specialty_lower = record.specialty.to_lowercase();
        let mut score = 0.0_f32;
        let mut reasons: Vec<String> = Vec::new();

        for rule in keywords::PROFILE_RULES {
            let profile_hit = rule.profile_terms.iter().any(|k| skills.contains(k))
                || rule.cert_terms.iter().any(|k| certifications.contains(k))
                || (!rule.interest.is_empty() && interests.contains(rule.interest));
            if !profile_hit {
                continue;
            }

            let record_hit = rule
                .record_terms
                .iter()
                .any(|k| title_lower.contains(k) || specialty_lower.contains(k));
            if record_hit {
                score += 3.0;
                reasons.push(rule.reason.to_string());
            }
        }

        // Level adjustment against the complexity hints
        let is_complex = keywords::COMPLEXITY_HINTS
            .iter()
            .any(|k| title_lower.contains(k));
        match level.as_str() {
            "beginner" if !is_complex => score += 1.0,
            "advanced" if is_complex => score += 1.0,
            "intermediate" => score += 0.5,
            _ => {}
        }

        if score > 0.0 {
            scored.push((
                score,
                Suggestion {
                    title: record.title.clone(),
                    student: Some(record.student.clone()),
                    specialty: Some(record.specialty.clone()),
                    match_reasons: reasons,
                },
            ));
        }
    }

    let total_matches = scored.len();
    // Stable sort keeps original record order between equal scores
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(config.max_profile_suggestions);

    let suggestions = if scored.is_empty() {
        vec![Suggestion {
            title: "General software development project adapted to your profile".to_string(),
            student: None,
            specialty: None,
            match_reasons: vec!["Based on your general interests".to_string()],
        }]
    } else {
        scored.into_iter().map(|(_, s)| s).collect()
    };

    ProfileRecommendation {
        suggestions,
        total_matches,
    }
}

/// One name/count row in the statistics report.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CountEntry {
    pub name: String,
    pub count: usize,
}

/// One name/percentage row in the statistics report.
#[derive(Debug, Clone, Serialize)]
pub struct PercentEntry {
    pub name: String,
    pub percentage: f64,
}

/// One year/count row in the statistics report.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YearCount {
    pub year: u16,
    pub count: usize,
}

/// Aggregated dataset statistics.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    pub total_projects: usize,
    pub by_specialty: Vec<CountEntry>,
    pub by_year: Vec<YearCount>,
    pub by_student: Vec<CountEntry>,
    pub specialty_percentage: Vec<PercentEntry>,
    pub avg_per_specialty: f64,
    pub domain_counts: Vec<CountEntry>,
    pub year_trend: Vec<YearCount>,
}

/// Aggregate statistics over the record snapshot.
pub fn dataset_stats(store: &ProjectStore) -> StatsReport {
    let total = store.len();

    let by_specialty: Vec<CountEntry> = store
        .specialty_counts()
        .into_iter()
        .map(|(name, count)| CountEntry { name, count })
        .collect();

    let specialty_percentage = by_specialty
        .iter()
        .map(|e| PercentEntry {
            name: e.name.clone(),
            percentage: round2(e.count as f64 / total as f64 * 100.0),
        })
        .collect();

    let avg_per_specialty = if by_specialty.is_empty() {
        0.0
    } else {
        round2(total as f64 / by_specialty.len() as f64)
    };

    let domain_counts = keywords::STATS_DOMAINS
        .iter()
        .map(|(name, terms)| CountEntry {
            name: name.to_string(),
            count: store.count_titles_matching(terms),
        })
        .collect();

    StatsReport {
        total_projects: total,
        by_year: store
            .year_counts()
            .into_iter()
            .map(|(year, count)| YearCount { year, count })
            .collect(),
        by_student: store
            .student_counts()
            .into_iter()
            .take(10)
            .map(|(name, count)| CountEntry { name, count })
            .collect(),
        by_specialty,
        specialty_percentage,
        avg_per_specialty,
        domain_counts,
        year_trend: store
            .year_trend()
            .into_iter()
            .map(|(year, count)| YearCount { year, count })
            .collect(),
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
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
                title: "Wazuh as SIEM & XDR: Evaluation and Implementation".to_string(),
                student: "Youssef Trabelsi".to_string(),
                specialty: "Cybersecurity".to_string(),
                year: 2024,
            },
            ProjectRecord {
                title: "Blockchain-Based Solution for Internship Certificates".to_string(),
                student: "Sara Mansour".to_string(),
                specialty: "Blockchain".to_string(),
                year: 2023,
            },
            ProjectRecord {
                title: "Co-Working Space Booking Platform".to_string(),
                student: "Ines Gharbi".to_string(),
                specialty: "Web Development".to_string(),
                year: 2023,
            },
        ])
    }

    fn config() -> SearchConfig {
        SearchConfig::default()
    }

    #[test]
    fn test_domain_branch_french_query() {
        let answer = answer_question(&store(), "Quels sont les projets blockchain?", &config());
        assert!(answer.contains("**BLOCKCHAIN Projects Found: 1 project(s)**"));
        assert!(answer.contains("Sara Mansour"));
    }

    #[test]
    fn test_domain_branch_no_hits() {
        let s = ProjectStore::new(vec![ProjectRecord {
            title: "Warehouse Inventory Survey".to_string(),
            student: "A".to_string(),
            specialty: "Logistics".to_string(),
            year: 2024,
        }]);
        let answer = answer_question(&s, "any blockchain projects?", &config());
        assert_eq!(answer, "No blockchain projects found in the database.");
    }

    #[test]
    fn test_count_branch_total() {
        let answer = answer_question(&store(), "how many projects in total?", &config());
        assert_eq!(answer, "**Total Projects:** 4");
    }

    #[test]
    fn test_count_branch_by_specialty() {
        let answer = answer_question(&store(), "combien par spécialité?", &config());
        assert!(answer.contains("**Projects by Specialty:**"));
        assert!(answer.contains("• AI: 1 project(s)"));
    }

    #[test]
    fn test_list_branch_caps_rows() {
        let mut records = Vec::new();
        for i in 0..25 {
            records.push(ProjectRecord {
                title: format!("Warehouse Survey {}", i),
                student: format!("Student {}", i),
                specialty: "Logistics".to_string(),
                year: 2024,
            });
        }
        let s = ProjectStore::new(records);
        let answer = answer_question(&s, "show everything", &config());
        assert!(answer.contains("**All Projects (25 total):**"));
        assert!(answer.contains("... and 5 more projects"));
        assert!(!answer.contains("21. "));
    }

    #[test]
    fn test_fallback_branch_matches_student_name() {
        let answer = answer_question(&store(), "what about mansour", &config());
        assert!(answer.contains("**Search Results: 1 project(s) found**"));
        assert!(answer.contains("Sara Mansour"));
    }

    #[test]
    fn test_fallback_branch_needs_usable_terms() {
        let answer = answer_question(&store(), "what is the", &config());
        assert!(answer.starts_with("Please provide more specific search terms"));
    }

    #[test]
    fn test_suggest_topics_known_and_unknown_domains() {
        let topics = suggest_topics("AI");
        assert_eq!(topics.len(), 3);
        assert!(topics.contains(&"AI Agent for HR Process Automation".to_string()));

        let topics = suggest_topics("agriculture");
        assert_eq!(topics, vec![keywords::NO_SUGGESTIONS.to_string()]);
    }

    #[test]
    fn test_profile_recommend_ranking_and_reasons() {
        let profile = StudentProfile {
            skills: "Python, machine learning, docker".to_string(),
            certifications: String::new(),
            interests: "ai".to_string(),
            level: "advanced".to_string(),
        };
        let rec = profile_recommend(&store(), &profile, &config());
        assert!(rec.total_matches >= 1);
        let top = &rec.suggestions[0];
        assert_eq!(top.title, "AI Agent for HR Process Automation");
        assert!(top
            .match_reasons
            .contains(&"Matches your AI/ML skills".to_string()));
    }

    #[test]
    fn test_profile_recommend_tie_order_and_truncation() {
        let mut records = Vec::new();
        for i in 0..8 {
            records.push(ProjectRecord {
                title: format!("Network Routing Lab {}", i),
                student: format!("Student {}", i),
                specialty: "Networking".to_string(),
                year: 2024,
            });
        }
        let s = ProjectStore::new(records);
        let profile = StudentProfile {
            skills: "cisco routing".to_string(),
            ..Default::default()
        };
        let rec = profile_recommend(&s, &profile, &config());
        assert_eq!(rec.total_matches, 8);
        assert_eq!(rec.suggestions.len(), 5);
        // Equal scores keep record order
        assert_eq!(rec.suggestions[0].title, "Network Routing Lab 0");
        assert_eq!(rec.suggestions[4].title, "Network Routing Lab 4");
    }

    #[test]
    fn test_profile_recommend_generic_fallback() {
        let profile = StudentProfile {
            skills: "gardening".to_string(),
            ..Default::default()
        };
        let rec = profile_recommend(&store(), &profile, &config());
        assert_eq!(rec.total_matches, 0);
        assert_eq!(rec.suggestions.len(), 1);
        assert!(rec.suggestions[0].student.is_none());
        assert_eq!(
            rec.suggestions[0].match_reasons,
            vec!["Based on your general interests".to_string()]
        );
    }

    #[test]
    fn test_dataset_stats() {
        let stats = dataset_stats(&store());
        assert_eq!(stats.total_projects, 4);
        assert_eq!(stats.by_specialty.len(), 4);
        assert_eq!(stats.avg_per_specialty, 1.0);
        assert_eq!(
            stats.year_trend,
            vec![
                YearCount { year: 2023, count: 2 },
                YearCount { year: 2024, count: 2 }
            ]
        );
        let blockchain = stats
            .domain_counts
            .iter()
            .find(|e| e.name == "Blockchain")
            .unwrap();
        assert_eq!(blockchain.count, 1);
    }

    #[test]
    fn test_build_context_domain_listing() {
        let ctx = build_context(&store(), "tell me about the siem projects");
        assert!(ctx.starts_with("**Cybersecurity projects:**"));
        assert!(ctx.contains("• **Youssef Trabelsi** – Wazuh as SIEM & XDR"));
    }

    #[test]
    fn test_build_context_full_scan_fallback() {
        let ctx = build_context(&store(), "booking");
        assert!(ctx.starts_with("**Matching projects:**"));
        assert!(ctx.contains("Ines Gharbi"));
    }
}
