//! # Keyword Tables Module
//!
//! ## Purpose
//! All static keyword tables used by the classifier, the attribute estimator
//! and the recommendation heuristics. Every table is an ordered constant:
//! matching is case-insensitive substring containment, and where a consumer
//! is first-match-wins the declaration order here is the contract.
//!
//! ## Input/Output Specification
//! - **Input**: none (compile-time constants)
//! - **Output**: ordered `&'static` keyword slices
//! - **Invariant**: tables are immutable process-wide; consumers must not
//!   re-sort or deduplicate them

/// Bilingual (French/English) keyword lists per domain. The classifier
/// checks domains in `DomainTag::ALL` order; lists may overlap across
/// domains and precedence between overlapping lists is resolved purely by
/// that order.
pub const DOMAIN_AI: &[&str] = &[
    "ai",
    "ia",
    "intelligence artificielle",
    "artificial intelligence",
    "machine learning",
    "deep learning",
    "ml",
];
pub const DOMAIN_CYBERSECURITY: &[&str] = &[
    "cybersecurity",
    "cyber security",
    "cybersécurité",
    "cyber-sécurité",
    "sécurité",
    "security",
    "siem",
    "soar",
    "pentest",
];
pub const DOMAIN_BLOCKCHAIN: &[&str] =
    &["blockchain", "iota", "crypto", "dlc", "distributed ledger"];
pub const DOMAIN_NETWORK: &[&str] =
    &["network", "réseau", "networking", "sd-wan", "cisco", "routing"];
pub const DOMAIN_WEB: &[&str] = &[
    "web",
    "website",
    "site web",
    "platform",
    "plateforme",
    "angular",
    "react",
    "spring",
];
pub const DOMAIN_IOT: &[&str] =
    &["iot", "internet of things", "internet des objets", "embedded"];
pub const DOMAIN_AUTOMATION: &[&str] =
    &["automation", "automatisation", "automate", "automated"];
pub const DOMAIN_MOBILE: &[&str] =
    &["mobile", "4g", "5g", "telecommunications", "télécommunications"];
pub const DOMAIN_CLOUD: &[&str] =
    &["cloud", "iaac", "devops", "orchestration", "terraform"];
pub const DOMAIN_QUALITY: &[&str] = &["quality", "qualité", "testing", "qa", "test"];

/// Technology vocabulary with the keyword lists that imply each tag.
/// Union semantics: a title can carry every tag whose list matches.
pub const TECH_KEYWORDS: &[(&str, &[&str])] = &[
    ("Python", &["python", "py"]),
    (
        "Machine Learning",
        &["ml", "machine learning", "deep learning", "incremental learning"],
    ),
    (
        "AI",
        &["ai", "intelligence artificielle", "artificial intelligence", "intelligent"],
    ),
    (
        "Web",
        &["django", "react", "angular", "web", "spring boot", "platform"],
    ),
    (
        "Security",
        &[
            "wazuh",
            "siem",
            "soar",
            "cyber",
            "pentest",
            "security",
            "firewall",
            "fortinet",
            "palo alto",
        ],
    ),
    (
        "Networking",
        &["eigrp", "ospf", "network", "routing", "sd-wan", "cisco", "meraki"],
    ),
    (
        "Mobile Networks",
        &["4g", "5g", "telecommunications", "ftto", "ftta"],
    ),
    ("Cloud", &["oci", "aws", "gcp", "cloud", "docker", "kubernetes"]),
    (
        "IaaC",
        &["iaac", "terraform", "orchestration", "infrastructure as code"],
    ),
    (
        "Blockchain",
        &["blockchain", "iota", "dlc", "distributed ledger"],
    ),
    ("IoT", &["iot", "internet of things", "embedded", "sensor"]),
    ("Automation", &["automation", "automated", "automate"]),
    (
        "Computer Vision",
        &["ocr", "image processing", "computer vision", "gesture"],
    ),
    ("Quality Assurance", &["testing", "quality", "qa", "qos"]),
];

/// Label emitted when no technology keyword matches a title.
pub const GENERAL_IT: &str = "General IT";

/// Duration buckets, longest first. The first bucket with a keyword hit
/// wins, so a title matching several bands resolves to the longest one.
pub const DURATION_4_5_MONTHS: &[&str] = &[
    "deep learning",
    "intelligent",
    "optimization",
    "design and implementation",
    "multi-instance",
];
pub const DURATION_3_4_MONTHS: &[&str] =
    &["ai", "machine learning", "siem", "soar", "orchestration", "iaac platform"];
pub const DURATION_2_3_MONTHS: &[&str] =
    &["web", "platform", "mobile application", "blockchain", "automation"];
pub const DURATION_1_2_MONTHS: &[&str] =
    &["study", "analysis", "testing", "generator", "interface"];

/// Complexity buckets, checked advanced first.
pub const COMPLEXITY_ADVANCED: &[&str] = &[
    "deep learning",
    "ai agent",
    "intelligent",
    "optimization",
    "orchestration",
    "multi-instance",
    "distributed",
    "blockchain",
    "iaac platform",
    "siem",
    "soar",
    "sd-wan architecture",
];
pub const COMPLEXITY_INTERMEDIATE: &[&str] = &[
    "implementation",
    "deployment",
    "automation",
    "platform",
    "web development",
    "network security",
    "machine learning",
    "mobile application",
    "integration",
];

/// Value-added buckets, checked highest tier first.
pub const VALUE_VERY_HIGH: &[&str] =
    &["automation", "ai", "intelligent", "optimization", "orchestration"];
pub const VALUE_HIGH: &[&str] =
    &["security", "siem", "cloud", "iaac", "blockchain", "quality"];
pub const VALUE_MEDIUM: &[&str] =
    &["platform", "web", "mobile", "management", "monitoring"];

/// Tooling implied by each technology tag.
pub const TECH_TOOLS: &[(&str, &[&str])] = &[
    ("Python", &["Python 3.x", "VS Code/PyCharm"]),
    (
        "Machine Learning",
        &["TensorFlow/PyTorch", "Jupyter Notebook", "scikit-learn"],
    ),
    ("AI", &["TensorFlow/Keras", "OpenCV (if vision)", "Google Colab"]),
    ("Web", &["Node.js/npm", "React/Angular CLI", "Postman"]),
    ("Security", &["Wazuh/Splunk", "Kali Linux", "Wireshark"]),
    ("Networking", &["Cisco Packet Tracer", "GNS3", "Wireshark"]),
    ("Mobile Networks", &["Network simulators", "Spectrum analyzers"]),
    ("Cloud", &["Docker", "AWS/GCP account", "Terraform"]),
    ("IaaC", &["Terraform", "Ansible", "Git"]),
    ("Blockchain", &["Solidity", "Web3.js", "MetaMask"]),
    ("IoT", &["Arduino IDE", "Raspberry Pi", "MQTT broker"]),
    ("Automation", &["Python", "Ansible", "Jenkins/GitLab CI"]),
    ("Computer Vision", &["OpenCV", "TensorFlow", "Python"]),
    ("Quality Assurance", &["Selenium", "JUnit/TestNG", "Postman"]),
];

/// Fallback tooling when a technology set maps to no tools.
pub const DEFAULT_TOOLS: &[&str] = &["Standard IDE", "Git"];

/// Phrase lists that route counting questions.
pub const HOW_MANY_PHRASES: &[&str] = &["how many", "combien", "number of", "nombre de"];
pub const TOTAL_WORDS: &[&str] = &["total", "tous", "all", "projects", "projets"];
pub const SPECIALTY_WORDS: &[&str] =
    &["specialty", "specialties", "spécialité", "spécialités"];

/// Phrase lists that route listing questions.
pub const LIST_WORDS: &[&str] = &["list", "show", "liste", "affiche", "display"];
pub const ALL_WORDS: &[&str] = &["all", "tous", "everything"];

/// Bilingual stopwords stripped before the fallback keyword search.
pub const STOPWORDS: &[&str] = &[
    "what", "is", "are", "the", "a", "an", "in", "on", "for", "with", "about",
    "quel", "quelle", "est", "sont", "le", "la", "les", "un", "une", "dans",
    "sur", "pour",
];

/// Title keywords that mark a project as complex for the profile-level
/// adjustment.
pub const COMPLEXITY_HINTS: &[&str] =
    &["implementation", "design", "optimization", "intelligent", "advanced"];

/// A profile-matching rule: fires when the candidate's profile text mentions
/// one of `profile_terms` (or one of `cert_terms` in the certifications
/// field, or `interest` in the interests field) and the record's
/// title/specialty mentions one of `record_terms`.
pub struct ProfileRule {
    pub profile_terms: &'static [&'static str],
    pub cert_terms: &'static [&'static str],
    pub interest: &'static str,
    pub record_terms: &'static [&'static str],
    pub reason: &'static str,
}

/// Fixed profile-matching rules, applied in order; each hit adds 3 points.
pub const PROFILE_RULES: &[ProfileRule] = &[
    ProfileRule {
        profile_terms: &["python", "ml", "machine learning", "deep learning", "ai"],
        cert_terms: &[],
        interest: "ai",
        record_terms: &["ai", "machine learning", "intelligent", "learning"],
        reason: "Matches your AI/ML skills",
    },
    ProfileRule {
        profile_terms: &["network", "routing", "switching", "cisco", "sd-wan"],
        cert_terms: &["ccna"],
        interest: "networking",
        record_terms: &["network", "sd-wan", "routing", "cisco"],
        reason: "Matches your networking expertise",
    },
    ProfileRule {
        profile_terms: &["security", "cyber", "siem", "soar", "pentest"],
        cert_terms: &[],
        interest: "cybersecurity",
        record_terms: &["security", "cyber", "siem", "soar"],
        reason: "Matches your security skills",
    },
    ProfileRule {
        profile_terms: &["web", "html", "react", "angular", "django", "spring"],
        cert_terms: &[],
        interest: "web",
        record_terms: &["web", "platform", "angular", "spring"],
        reason: "Matches your web development skills",
    },
    ProfileRule {
        profile_terms: &["cloud", "devops", "docker", "kubernetes", "terraform"],
        cert_terms: &["oci", "aws", "azure"],
        interest: "",
        record_terms: &["iaac", "cloud", "orchestr", "automation"],
        reason: "Matches your cloud/DevOps skills",
    },
    ProfileRule {
        profile_terms: &["blockchain", "iota", "crypto"],
        cert_terms: &[],
        interest: "blockchain",
        record_terms: &["blockchain", "iota"],
        reason: "Matches your blockchain interest",
    },
    ProfileRule {
        profile_terms: &["iot", "embedded", "sensor"],
        cert_terms: &[],
        interest: "iot",
        record_terms: &["iot", "embedded"],
        reason: "Matches your IoT skills",
    },
    ProfileRule {
        profile_terms: &["automation", "scripting", "ansible"],
        cert_terms: &[],
        interest: "automation",
        record_terms: &["automation", "automated"],
        reason: "Matches your automation skills",
    },
];

/// Curated topic suggestions per domain for the recommend endpoint.
pub const DOMAIN_SUGGESTIONS: &[(&str, &[&str])] = &[
    (
        "cybersecurity",
        &[
            "Automation of Security Incident Management in Microsoft 365 with SIEM/SOAR",
            "Wazuh as SIEM & XDR: Evaluation and Implementation",
            "Multi-Instance Vulnerability Operation Center (VOC)",
        ],
    ),
    (
        "ai",
        &[
            "Development of a Hand Gesture-Based Cursor Control System Using AI",
            "Use of Incremental Learning for Energy Disaggregation",
            "AI Agent for HR Process Automation",
        ],
    ),
    (
        "blockchain",
        &[
            "Development of Secure Mobile Application with IoT & Blockchain",
            "Blockchain-Based Solution for Internship Certificates",
        ],
    ),
    (
        "web",
        &[
            "Internal Company Website",
            "Co-Working Space Booking Platform (Spring Boot + Angular)",
            "Management Website with Generative AI Solutions",
        ],
    ),
];

/// Reply when a domain has no curated suggestions.
pub const NO_SUGGESTIONS: &str = "No predefined suggestions for this domain.";

/// Coarse domain table used only by the statistics endpoint.
pub const STATS_DOMAINS: &[(&str, &[&str])] = &[
    ("AI/ML", &["ai", "machine learning", "intelligent", "learning"]),
    ("Security", &["security", "cyber", "siem"]),
    ("Network", &["network", "sd-wan", "routing"]),
    ("Web", &["web", "platform", "website"]),
    ("Automation", &["automation", "automated"]),
    ("Cloud", &["cloud", "iaac", "orchestration"]),
    ("Blockchain", &["blockchain", "iota"]),
    ("IoT", &["iot", "embedded"]),
];

/// True when `keyword` occurs in `text` at word boundaries. Plain
/// containment would let short keywords fire inside unrelated words
/// ("ai" inside "blockchain", "ai" inside "maintenance"), so a match only
/// counts when the characters adjacent to it are non-alphanumeric or
/// absent. Multi-word keywords are matched as whole phrases.
/// `text` must already be lowercase; keywords are stored lowercase.
pub fn contains_keyword(text: &str, keyword: &str) -> bool {
    if keyword.is_empty() {
        return false;
    }
    let mut start = 0;
    while let Some(pos) = text[start..].find(keyword) {
        let begin = start + pos;
        let end = begin + keyword.len();
        let before_ok = text[..begin]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = text[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return true;
        }
        match text[begin..].chars().next() {
            Some(c) => start = begin + c.len_utf8(),
            None => break,
        }
    }
    false
}

/// True when any keyword in `keywords` occurs in `text` (word-bounded).
pub fn any_match(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| contains_keyword(text, k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_match() {
        assert!(any_match("deep learning for energy", DURATION_4_5_MONTHS));
        assert!(!any_match("inventory dashboard", DURATION_4_5_MONTHS));
        assert!(!any_match("", DURATION_4_5_MONTHS));
    }

    #[test]
    fn test_contains_keyword_respects_word_boundaries() {
        assert!(contains_keyword("ai agent for hr", "ai"));
        assert!(contains_keyword("hands-on ai", "ai"));
        assert!(contains_keyword("4g/5g rollout", "5g"));
        // Short keywords must not fire inside unrelated words
        assert!(!contains_keyword("blockchain certificates", "ai"));
        assert!(!contains_keyword("maintenance planning", "ai"));
        assert!(!contains_keyword("python course", "py"));
    }

    #[test]
    fn test_contains_keyword_matches_phrases() {
        assert!(contains_keyword("deep learning for energy", "deep learning"));
        assert!(contains_keyword("an ai agent prototype", "ai agent"));
        assert!(!contains_keyword("deep reinforcement learning", "deep learning"));
    }

    #[test]
    fn test_domain_lists_are_lowercase() {
        for list in [DOMAIN_AI, DOMAIN_CYBERSECURITY, DOMAIN_BLOCKCHAIN, DOMAIN_WEB] {
            for k in list {
                assert_eq!(*k, k.to_lowercase());
            }
        }
    }

    #[test]
    fn test_every_tech_tag_has_tools() {
        for (tag, _) in TECH_KEYWORDS {
            assert!(
                TECH_TOOLS.iter().any(|(t, _)| t == tag),
                "no tool list for {}",
                tag
            );
        }
    }
}
