//! # Attribute Estimator Module
//!
//! ## Purpose
//! Derives heuristic per-project attributes (technology tags, duration,
//! complexity, value band, required skills, tooling) from a project's title
//! and specialty text.
//!
//! ## Input/Output Specification
//! - **Input**: Project title and specialty strings
//! - **Output**: Individual attribute values or a full `ProjectProfile`
//! - **Determinism**: Every function is pure; the same text always yields
//!   the same attributes
//!
//! ## Bucket ordering
//! Duration, complexity and value buckets are checked in a fixed priority
//! order (highest tier first) and the first hit wins. A title matching
//! several buckets therefore resolves to the highest tier whose keywords
//! appear. This ordering is part of the observable contract.

use crate::keywords;
use crate::ProjectRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Technology stack labels implied by a project title. `GeneralIt` is
/// emitted only when nothing else matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TechnologyTag {
    Python,
    #[serde(rename = "Machine Learning")]
    MachineLearning,
    #[serde(rename = "AI")]
    Ai,
    Web,
    Security,
    Networking,
    #[serde(rename = "Mobile Networks")]
    MobileNetworks,
    Cloud,
    #[serde(rename = "IaaC")]
    Iaac,
    Blockchain,
    #[serde(rename = "IoT")]
    Iot,
    Automation,
    #[serde(rename = "Computer Vision")]
    ComputerVision,
    #[serde(rename = "Quality Assurance")]
    QualityAssurance,
    #[serde(rename = "General IT")]
    GeneralIt,
}

impl TechnologyTag {
    /// Vocabulary order matching the keyword table; extraction walks this.
    pub const ALL: [TechnologyTag; 14] = [
        TechnologyTag::Python,
        TechnologyTag::MachineLearning,
        TechnologyTag::Ai,
        TechnologyTag::Web,
        TechnologyTag::Security,
        TechnologyTag::Networking,
        TechnologyTag::MobileNetworks,
        TechnologyTag::Cloud,
        TechnologyTag::Iaac,
        TechnologyTag::Blockchain,
        TechnologyTag::Iot,
        TechnologyTag::Automation,
        TechnologyTag::ComputerVision,
        TechnologyTag::QualityAssurance,
    ];

    /// Display label shown in profiles and insights.
    pub fn label(&self) -> &'static str {
        match self {
            TechnologyTag::Python => "Python",
            TechnologyTag::MachineLearning => "Machine Learning",
            TechnologyTag::Ai => "AI",
            TechnologyTag::Web => "Web",
            TechnologyTag::Security => "Security",
            TechnologyTag::Networking => "Networking",
            TechnologyTag::MobileNetworks => "Mobile Networks",
            TechnologyTag::Cloud => "Cloud",
            TechnologyTag::Iaac => "IaaC",
            TechnologyTag::Blockchain => "Blockchain",
            TechnologyTag::Iot => "IoT",
            TechnologyTag::Automation => "Automation",
            TechnologyTag::ComputerVision => "Computer Vision",
            TechnologyTag::QualityAssurance => "Quality Assurance",
            TechnologyTag::GeneralIt => keywords::GENERAL_IT,
        }
    }
}

impl std::fmt::Display for TechnologyTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Estimated complexity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Complexity {
    Beginner,
    Intermediate,
    Advanced,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Beginner => "Beginner",
            Complexity::Intermediate => "Intermediate",
            Complexity::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimated duration band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationBand {
    #[serde(rename = "1-2 months")]
    OneToTwo,
    #[serde(rename = "2-3 months")]
    TwoToThree,
    #[serde(rename = "3-4 months")]
    ThreeToFour,
    #[serde(rename = "4-5 months")]
    FourToFive,
}

impl DurationBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationBand::OneToTwo => "1-2 months",
            DurationBand::TwoToThree => "2-3 months",
            DurationBand::ThreeToFour => "3-4 months",
            DurationBand::FourToFive => "4-5 months",
        }
    }
}

impl std::fmt::Display for DurationBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived attribute bundle for one project. Built fresh for every request
/// from the record text; never cached or shared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectProfile {
    pub title: String,
    pub student: String,
    pub specialty: String,
    pub year: u16,
    pub technologies: Vec<TechnologyTag>,
    pub duration: DurationBand,
    pub complexity: Complexity,
    pub value_added: String,
    pub required_skills: String,
    pub tools_required: Vec<String>,
}

/// Every technology tag whose keywords appear in the title, in vocabulary
/// order; `[GeneralIt]` when none match.
pub fn extract_technologies(title: &str) -> Vec<TechnologyTag> {
    let t = title.to_lowercase();
    let found: Vec<TechnologyTag> = TechnologyTag::ALL
        .into_iter()
        .zip(keywords::TECH_KEYWORDS.iter())
        .filter(|(_, (_, kws))| keywords::any_match(&t, kws))
        .map(|(tag, _)| tag)
        .collect();

    if found.is_empty() {
        vec![TechnologyTag::GeneralIt]
    } else {
        found
    }
}

/// Duration band from the title, longest bucket first; defaults to
/// 2-3 months.
pub fn estimate_duration(title: &str) -> DurationBand {
    let t = title.to_lowercase();

    if keywords::any_match(&t, keywords::DURATION_4_5_MONTHS) {
        DurationBand::FourToFive
    } else if keywords::any_match(&t, keywords::DURATION_3_4_MONTHS) {
        DurationBand::ThreeToFour
    } else if keywords::any_match(&t, keywords::DURATION_2_3_MONTHS) {
        DurationBand::TwoToThree
    } else if keywords::any_match(&t, keywords::DURATION_1_2_MONTHS) {
        DurationBand::OneToTwo
    } else {
        DurationBand::TwoToThree
    }
}

/// Complexity tier from title + specialty, advanced bucket first; defaults
/// to Beginner.
pub fn estimate_complexity(title: &str, specialty: &str) -> Complexity {
    let t = format!("{} {}", title, specialty).to_lowercase();

    if keywords::any_match(&t, keywords::COMPLEXITY_ADVANCED) {
        Complexity::Advanced
    } else if keywords::any_match(&t, keywords::COMPLEXITY_INTERMEDIATE) {
        Complexity::Intermediate
    } else {
        Complexity::Beginner
    }
}

/// Value band literal from title + specialty, highest tier first. The
/// returned strings are displayed verbatim by consumers.
pub fn estimate_value_added(title: &str, specialty: &str) -> &'static str {
    let t = format!("{} {}", title, specialty).to_lowercase();

    if keywords::any_match(&t, keywords::VALUE_VERY_HIGH) {
        "Very High (Innovation + Automation)"
    } else if keywords::any_match(&t, keywords::VALUE_HIGH) {
        "High (Enterprise-grade solution)"
    } else if keywords::any_match(&t, keywords::VALUE_MEDIUM) {
        "Medium (Business solution)"
    } else {
        "Moderate (Learning project)"
    }
}

/// Required skill level, derived 1:1 from `estimate_complexity` so the two
/// can never disagree.
pub fn estimate_required_skills(title: &str, specialty: &str) -> &'static str {
    match estimate_complexity(title, specialty) {
        Complexity::Advanced => "Expert (Strong technical background required)",
        Complexity::Intermediate => "Intermediate (Good fundamentals required)",
        Complexity::Beginner => "Beginner (Basic knowledge sufficient)",
    }
}

/// Union of the tool lists of every technology present, sorted and
/// deduplicated. The empty-union fallback cannot fire after the General IT
/// fallback in `extract_technologies`, but is handled anyway.
pub fn tools_required(technologies: &[TechnologyTag]) -> Vec<String> {
    let mut tools: BTreeSet<&str> = BTreeSet::new();

    for tech in technologies {
        if let Some((_, list)) = keywords::TECH_TOOLS
            .iter()
            .find(|(name, _)| *name == tech.label())
        {
            tools.extend(list.iter());
        }
    }

    if tools.is_empty() {
        tools.extend(keywords::DEFAULT_TOOLS.iter());
    }

    tools.into_iter().map(String::from).collect()
}

/// Compose the full derived profile for one record.
pub fn build_profile(record: &ProjectRecord) -> ProjectProfile {
    let technologies = extract_technologies(&record.title);
    let tools = tools_required(&technologies);

    ProjectProfile {
        title: record.title.clone(),
        student: record.student.clone(),
        specialty: record.specialty.clone(),
        year: record.year,
        duration: estimate_duration(&record.title),
        complexity: estimate_complexity(&record.title, &record.specialty),
        value_added: estimate_value_added(&record.title, &record.specialty).to_string(),
        required_skills: estimate_required_skills(&record.title, &record.specialty).to_string(),
        technologies,
        tools_required: tools,
    }
}
