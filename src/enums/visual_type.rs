use std::fmt;

use serde::{Deserialize, Serialize};

/// The five visual aid categories a passage is scored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualType {
    Illustration,
    Photo,
    Flowchart,
    Graph,
    Table,
}

impl VisualType {
    pub const ALL: [VisualType; 5] = [
        VisualType::Illustration,
        VisualType::Photo,
        VisualType::Flowchart,
        VisualType::Graph,
        VisualType::Table,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            VisualType::Illustration => "illustration",
            VisualType::Photo => "photo",
            VisualType::Flowchart => "flowchart",
            VisualType::Graph => "graph",
            VisualType::Table => "table",
        }
    }

    pub fn from_key(key: &str) -> Option<VisualType> {
        VisualType::ALL.into_iter().find(|t| t.key() == key)
    }
}

impl fmt::Display for VisualType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for visual_type in VisualType::ALL {
            assert_eq!(VisualType::from_key(visual_type.key()), Some(visual_type));
        }
        assert_eq!(VisualType::from_key("diagram"), None);
    }

    #[test]
    fn serializes_as_lowercase_key() {
        let json = serde_json::to_string(&VisualType::Flowchart).unwrap();
        assert_eq!(json, "\"flowchart\"");
    }
}
