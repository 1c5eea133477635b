use serde::{Deserialize, Serialize};

use super::bullet::{AsBullet, BulletId};

/// Closed set of evidence content types accepted by `type:` clauses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvidenceType {
    Image,
    Codeblock,
    TerminalRecording,
    HttpRequestCycle,
    Event,
    None,
}

impl EvidenceType {
    /// Every type, in the order the type chooser lists them
    pub const ALL: [EvidenceType; 6] = [
        EvidenceType::Image,
        EvidenceType::Codeblock,
        EvidenceType::TerminalRecording,
        EvidenceType::HttpRequestCycle,
        EvidenceType::Event,
        EvidenceType::None,
    ];

    /// Identifier used in query strings
    pub fn id(self) -> &'static str {
        match self {
            EvidenceType::Image => "image",
            EvidenceType::Codeblock => "codeblock",
            EvidenceType::TerminalRecording => "terminal-recording",
            EvidenceType::HttpRequestCycle => "http-request-cycle",
            EvidenceType::Event => "event",
            EvidenceType::None => "none",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            EvidenceType::Image => "Image",
            EvidenceType::Codeblock => "Code Block",
            EvidenceType::TerminalRecording => "Terminal Recording",
            EvidenceType::HttpRequestCycle => "HTTP Request/Response",
            EvidenceType::Event => "Event",
            EvidenceType::None => "No Content",
        }
    }

    /// Exact, case-sensitive lookup by query identifier
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }
}

impl AsBullet for EvidenceType {
    fn bullet_id(&self) -> BulletId {
        BulletId::Text(self.id().to_string())
    }

    fn bullet_name(&self) -> String {
        self.display_name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id_roundtrips_every_type() {
        for t in EvidenceType::ALL {
            assert_eq!(EvidenceType::from_id(t.id()), Some(t));
        }
    }

    #[test]
    fn test_from_id_is_exact() {
        assert_eq!(EvidenceType::from_id("IMAGE"), None);
        assert_eq!(EvidenceType::from_id(" image"), None);
        assert_eq!(EvidenceType::from_id("screenshot"), None);
    }

    #[test]
    fn test_serde_ids_match_query_ids() {
        for t in EvidenceType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.id()));
        }
    }

    #[test]
    fn test_bullet_carries_display_name() {
        let t = EvidenceType::HttpRequestCycle;
        assert_eq!(t.bullet_id(), BulletId::Text("http-request-cycle".to_string()));
        assert_eq!(t.bullet_name(), "HTTP Request/Response");
    }
}
