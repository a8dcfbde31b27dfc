//! # Domain Classifier Module
//!
//! ## Purpose
//! Maps a free-text question (French or English, any case) onto one of the
//! canonical domain tags via the bilingual keyword tables.
//!
//! ## Input/Output Specification
//! - **Input**: Free-text query string
//! - **Output**: `Some(DomainTag)` on the first keyword hit, `None` when
//!   nothing matches (absence of a match is not an error)
//!
//! ## Algorithm
//! Lowercase the query, then walk `DomainTag::ALL` in declaration order and
//! return the first tag any of whose keywords occurs in the query at word
//! boundaries.
//! Keyword lists overlap across tags; precedence is resolved purely by the
//! declaration order, which existing consumers depend on.

use crate::keywords;
use serde::{Deserialize, Serialize};

/// Canonical domain tags, in classifier precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainTag {
    Ai,
    Cybersecurity,
    Blockchain,
    Network,
    Web,
    Iot,
    Automation,
    Mobile,
    Cloud,
    Quality,
}

impl DomainTag {
    /// All tags in precedence order. This order is load-bearing: the
    /// classifier returns the first tag with a keyword hit.
    pub const ALL: [DomainTag; 10] = [
        DomainTag::Ai,
        DomainTag::Cybersecurity,
        DomainTag::Blockchain,
        DomainTag::Network,
        DomainTag::Web,
        DomainTag::Iot,
        DomainTag::Automation,
        DomainTag::Mobile,
        DomainTag::Cloud,
        DomainTag::Quality,
    ];

    /// Canonical lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            DomainTag::Ai => "ai",
            DomainTag::Cybersecurity => "cybersecurity",
            DomainTag::Blockchain => "blockchain",
            DomainTag::Network => "network",
            DomainTag::Web => "web",
            DomainTag::Iot => "iot",
            DomainTag::Automation => "automation",
            DomainTag::Mobile => "mobile",
            DomainTag::Cloud => "cloud",
            DomainTag::Quality => "quality",
        }
    }

    /// Bilingual keyword list owned by this tag.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            DomainTag::Ai => keywords::DOMAIN_AI,
            DomainTag::Cybersecurity => keywords::DOMAIN_CYBERSECURITY,
            DomainTag::Blockchain => keywords::DOMAIN_BLOCKCHAIN,
            DomainTag::Network => keywords::DOMAIN_NETWORK,
            DomainTag::Web => keywords::DOMAIN_WEB,
            DomainTag::Iot => keywords::DOMAIN_IOT,
            DomainTag::Automation => keywords::DOMAIN_AUTOMATION,
            DomainTag::Mobile => keywords::DOMAIN_MOBILE,
            DomainTag::Cloud => keywords::DOMAIN_CLOUD,
            DomainTag::Quality => keywords::DOMAIN_QUALITY,
        }
    }
}

impl std::fmt::Display for DomainTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a free-text query into a domain. First-match-wins over
/// `DomainTag::ALL`; pure function over the static tables.
pub fn classify(query: &str) -> Option<DomainTag> {
    let q = query.to_lowercase();
    DomainTag::ALL
        .into_iter()
        .find(|tag| keywords::any_match(&q, tag.keywords()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_and_french_queries() {
        assert_eq!(classify("show me the machine learning projects"), Some(DomainTag::Ai));
        assert_eq!(
            classify("Quels sont les projets blockchain?"),
            Some(DomainTag::Blockchain)
        );
        assert_eq!(classify("projets de cybersécurité"), Some(DomainTag::Cybersecurity));
        assert_eq!(classify("Combien de projets réseau?"), Some(DomainTag::Network));
    }

    #[test]
    fn test_no_match_and_empty_query() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("   "), None);
        assert_eq!(classify("philosophy of music"), None);
    }

    #[test]
    fn test_declaration_order_resolves_overlaps() {
        // "siem" appears in the cybersecurity list; nothing earlier owns it.
        assert_eq!(classify("siem deployment"), Some(DomainTag::Cybersecurity));
        // A query hitting both ai ("ml") and quality ("testing") resolves to
        // the earlier-declared ai tag.
        assert_eq!(classify("ml model testing"), Some(DomainTag::Ai));
        // A query hitting both ai ("ai") and automation ("automation")
        // resolves to the earlier-declared ai tag.
        assert_eq!(classify("ai automation"), Some(DomainTag::Ai));
    }

    #[test]
    fn test_every_keyword_maps_to_its_tag_unless_shadowed() {
        for tag in DomainTag::ALL {
            for k in tag.keywords() {
                let classified = classify(k).unwrap();
                // An earlier tag may legitimately shadow the keyword; the
                // shadowing tag must then precede this one in ALL.
                let shadow_pos = DomainTag::ALL.iter().position(|t| *t == classified).unwrap();
                let own_pos = DomainTag::ALL.iter().position(|t| *t == tag).unwrap();
                assert!(
                    shadow_pos <= own_pos,
                    "keyword '{}' of {} resolved to later tag {}",
                    k,
                    tag,
                    classified
                );
            }
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("BLOCKCHAIN Projects"), Some(DomainTag::Blockchain));
    }
}
