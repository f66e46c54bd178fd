use serde::{Deserialize, Serialize};

/// A participant in a single race, identified by name and team
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Competitor {
    pub name: String,
    pub team_name: String,
}

impl Competitor {
    pub fn new(name: impl Into<String>, team_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team_name: team_name.into(),
        }
    }

    /// True when both name and team match exactly
    pub fn matches(&self, name: &str, team_name: &str) -> bool {
        self.name == name && self.team_name == team_name
    }
}

/// One line of a championship table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub name: String,
    pub points: f64,
}

/// Standings query awaiting a scoring method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingQuery {
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race_id: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_competitor_equality_uses_both_fields() {
        let a = Competitor::new("Hamilton", "Mercedes");
        let b = Competitor::new("Hamilton", "Mercedes");
        let c = Competitor::new("Hamilton", "McLaren");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.matches("Hamilton", "Mercedes"));
        assert!(!a.matches("Hamilton", "McLaren"));
    }

    #[test]
    fn test_standing_serializes() {
        let standing = Standing {
            name: "Verstappen".to_string(),
            points: 26.0,
        };
        let json = serde_json::to_string(&standing).unwrap();
        assert_eq!(json, r#"{"name":"Verstappen","points":26.0}"#);
    }
}
