//! # PFE Advisor
//!
//! ## Overview
//! This library implements a bilingual (English/French) question-answering
//! and recommendation service over a fixed, in-memory dataset of
//! end-of-studies ("PFE") project records.
//!
//! ## Architecture
//! The system is composed of several key modules:
//! - `dataset`: Record store loading and substring lookup over the snapshot
//! - `keywords`: Static bilingual keyword tables (the matching contract)
//! - `classifier`: Free-text query → domain tag classification
//! - `estimator`: Heuristic per-project attribute profiles
//! - `similarity`: Bounded similarity score between two profiles
//! - `compare`: Two-project comparison with insights and recommendation
//! - `search`: Question answering, topic suggestions, profile-based
//!   recommendation and dataset statistics
//! - `completion`: External LLM completion client for the chat endpoint
//! - `api`: REST API endpoints
//! - `config`: Configuration management and settings
//! - `errors`: Centralized error handling and types
//!
//! ## Input/Output Specification
//! - **Input**: Natural-language questions (French or English), project
//!   title fragments, student profiles
//! - **Output**: Formatted answers, ranked suggestions, comparison reports
//! - **Determinism**: Every derived attribute and score is a pure function
//!   of the record text; identical requests yield identical responses
//!
//! ## Usage
//! ```rust,no_run
//! use pfe_advisor::{dataset::ProjectStore, compare::compare_projects};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = ProjectStore::from_file("data/projects.json")?;
//!     let result = compare_projects(&store, "AI Agent", "Wazuh")?;
//!     println!("similarity: {}", result.similarity_score);
//!     Ok(())
//! }
//! ```

// Core modules
pub mod classifier;
pub mod compare;
pub mod completion;
pub mod config;
pub mod dataset;
pub mod errors;
pub mod estimator;
pub mod keywords;
pub mod search;
pub mod similarity;

// API surface
pub mod api;

// Re-exports for convenience
pub use config::Config;
pub use errors::{AdvisorError, CompareSide, Result};
pub use estimator::{Complexity, DurationBand, ProjectProfile, TechnologyTag};

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A single capstone-project record. Immutable after load; no two records
/// are guaranteed unique by title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Project title
    pub title: String,
    /// Student who carried out the project
    pub student: String,
    /// Academic specialty the project belongs to
    pub specialty: String,
    /// Graduation year
    pub year: u16,
}

/// Application state shared across request handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<config::Config>,
    pub store: Arc<dataset::ProjectStore>,
    pub completion: Arc<completion::CompletionClient>,
}
