//! # Record Store Module
//!
//! ## Purpose
//! Owns the in-memory snapshot of capstone-project records and all
//! substring lookups over it. Records are loaded once at startup from a
//! JSON file and never mutated afterwards; the store is shared read-only
//! across requests.
//!
//! ## Input/Output Specification
//! - **Input**: JSON array of `{title, student, specialty, year}` records
//! - **Output**: Stable, consistently ordered record slices and count maps
//! - **Lookup**: Case-insensitive substring containment over precomputed
//!   lowercase shadows of title and specialty
//!
//! ## Key Features
//! - Load-once, immutable snapshot (no locking needed for reads)
//! - First-match title resolution for fuzzy comparison queries
//! - Multi-term filtering over title/specialty (optionally student)
//! - Insertion-ordered count maps for the statistics endpoint

use crate::errors::{AdvisorError, Result};
use crate::ProjectRecord;
use std::path::Path;

/// In-memory record store with precomputed lowercase shadows.
#[derive(Debug)]
pub struct ProjectStore {
    records: Vec<ProjectRecord>,
    titles_lower: Vec<String>,
    specialties_lower: Vec<String>,
    students_lower: Vec<String>,
}

impl ProjectStore {
    /// Build a store from an already-loaded record set.
    pub fn new(records: Vec<ProjectRecord>) -> Self {
        let titles_lower = records.iter().map(|r| r.title.to_lowercase()).collect();
        let specialties_lower = records.iter().map(|r| r.specialty.to_lowercase()).collect();
        let students_lower = records.iter().map(|r| r.student.to_lowercase()).collect();
        Self {
            records,
            titles_lower,
            specialties_lower,
            students_lower,
        }
    }

    /// Load the record set from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            AdvisorError::DatasetUnavailable {
                details: format!("cannot read {:?}: {}", path, e),
            }
        })?;
        let records: Vec<ProjectRecord> =
            serde_json::from_str(&content).map_err(|e| AdvisorError::DatasetUnavailable {
                details: format!("cannot parse {:?}: {}", path, e),
            })?;

        if records.is_empty() {
            return Err(AdvisorError::DatasetUnavailable {
                details: format!("record file {:?} contains no records", path),
            });
        }

        tracing::info!("Loaded {} project records from {:?}", records.len(), path);
        Ok(Self::new(records))
    }

    /// All records in load order.
    pub fn all(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record whose lowercased title contains `fragment` (lowercased).
    pub fn find_by_title(&self, fragment: &str) -> Option<&ProjectRecord> {
        let needle = fragment.to_lowercase();
        self.titles_lower
            .iter()
            .position(|t| t.contains(&needle))
            .map(|i| &self.records[i])
    }

    /// Records whose title or specialty contains any of `terms`.
    /// Terms must already be lowercase.
    pub fn filter_by_terms(&self, terms: &[&str]) -> Vec<&ProjectRecord> {
        self.records
            .iter()
            .enumerate()
            .filter(|(i, _)| {
                terms.iter().any(|t| {
                    self.titles_lower[*i].contains(t) || self.specialties_lower[*i].contains(t)
                })
            })
            .map(|(_, r)| r)
            .collect()
    }

    /// Like `filter_by_terms`, but the student name participates too.
    /// Used by the general fallback search.
    pub fn filter_by_terms_with_student(&self, terms: &[&str]) -> Vec<&ProjectRecord> {
        self.records
            .iter()
            .enumerate()
            .filter(|(i, _)| {
                terms.iter().any(|t| {
                    self.titles_lower[*i].contains(t)
                        || self.specialties_lower[*i].contains(t)
                        || self.students_lower[*i].contains(t)
                })
            })
            .map(|(_, r)| r)
            .collect()
    }

    /// Titles whose lowercase form contains any of `terms`. Used by the
    /// statistics endpoint's domain counts.
    pub fn count_titles_matching(&self, terms: &[&str]) -> usize {
        self.titles_lower
            .iter()
            .filter(|t| terms.iter().any(|k| t.contains(k)))
            .count()
    }

    /// Distinct specialties in first-seen order.
    pub fn specialties(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for r in &self.records {
            if !seen.contains(&r.specialty.as_str()) {
                seen.push(r.specialty.as_str());
            }
        }
        seen
    }

    /// (specialty, count) pairs sorted by descending count, ties in
    /// first-seen order.
    pub fn specialty_counts(&self) -> Vec<(String, usize)> {
        Self::sorted_counts(self.records.iter().map(|r| r.specialty.clone()))
    }

    /// (year, count) pairs sorted by descending count.
    pub fn year_counts(&self) -> Vec<(u16, usize)> {
        Self::sorted_counts(self.records.iter().map(|r| r.year))
    }

    /// (student, count) pairs sorted by descending count.
    pub fn student_counts(&self) -> Vec<(String, usize)> {
        Self::sorted_counts(self.records.iter().map(|r| r.student.clone()))
    }

    /// (year, count) pairs in ascending year order.
    pub fn year_trend(&self) -> Vec<(u16, usize)> {
        let mut counts = Self::counts(self.records.iter().map(|r| r.year));
        counts.sort_by_key(|(year, _)| *year);
        counts
    }

    fn counts<T: PartialEq>(values: impl Iterator<Item = T>) -> Vec<(T, usize)> {
        let mut counts: Vec<(T, usize)> = Vec::new();
        for v in values {
            match counts.iter_mut().find(|(key, _)| *key == v) {
                Some((_, n)) => *n += 1,
                None => counts.push((v, 1)),
            }
        }
        counts
    }

    fn sorted_counts<T: PartialEq>(values: impl Iterator<Item = T>) -> Vec<(T, usize)> {
        let mut counts = Self::counts(values);
        // Stable sort keeps first-seen order between equal counts
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample() -> ProjectStore {
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
                title: "Co-Working Space Booking Platform".to_string(),
                student: "Ines Gharbi".to_string(),
                specialty: "Web Development".to_string(),
                year: 2023,
            },
        ])
    }

    #[test]
    fn test_find_by_title_is_case_insensitive_first_match() {
        let store = sample();
        let found = store.find_by_title("wazuh").unwrap();
        assert_eq!(found.student, "Youssef Trabelsi");
        assert!(store.find_by_title("nonexistent-zzz").is_none());
    }

    #[test]
    fn test_filter_by_terms_checks_title_and_specialty() {
        let store = sample();
        let hits = store.filter_by_terms(&["cybersecurity"]);
        assert_eq!(hits.len(), 1);
        let hits = store.filter_by_terms(&["siem", "ai"]);
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_student_participates_only_in_fallback_filter() {
        let store = sample();
        assert!(store.filter_by_terms(&["gharbi"]).is_empty());
        assert_eq!(store.filter_by_terms_with_student(&["gharbi"]).len(), 1);
    }

    #[test]
    fn test_counts_sorted_descending_with_stable_ties() {
        let store = sample();
        let years = store.year_counts();
        assert_eq!(years[0], (2024, 2));
        assert_eq!(years[1], (2023, 1));

        let trend = store.year_trend();
        assert_eq!(trend, vec![(2023, 1), (2024, 2)]);
    }

    #[test]
    fn test_from_file_errors_map_to_dataset_unavailable() {
        let err = ProjectStore::from_file("no/such/file.json").unwrap_err();
        assert_eq!(err.category(), "dataset");

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[]").unwrap();
        let err = ProjectStore::from_file(file.path()).unwrap_err();
        assert_eq!(err.category(), "dataset");
    }
}
