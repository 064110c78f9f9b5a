use crate::store::Record;
use serde::{Deserialize, Serialize};

/// How much formal decision authority a stakeholder holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorityLevel {
    Executive,
    Senior,
    Manager,
    Contributor,
}

impl std::fmt::Display for AuthorityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthorityLevel::Executive => write!(f, "executive"),
            AuthorityLevel::Senior => write!(f, "senior"),
            AuthorityLevel::Manager => write!(f, "manager"),
            AuthorityLevel::Contributor => write!(f, "contributor"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Email,
    Chat,
    Meeting,
    Document,
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Channel::Email => write!(f, "email"),
            Channel::Chat => write!(f, "chat"),
            Channel::Meeting => write!(f, "meeting"),
            Channel::Document => write!(f, "document"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Frequency::Daily => write!(f, "daily"),
            Frequency::Weekly => write!(f, "weekly"),
            Frequency::Biweekly => write!(f, "biweekly"),
            Frequency::Monthly => write!(f, "monthly"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Detail {
    Summary,
    Detailed,
}

impl std::fmt::Display for Detail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Detail::Summary => write!(f, "summary"),
            Detail::Detailed => write!(f, "detailed"),
        }
    }
}

/// Communication preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Communication {
    pub channel: Channel,
    pub frequency: Frequency,
    pub detail: Detail,
}

fn default_weights() -> InfluenceWeights {
    InfluenceWeights {
        authority: 0.5,
        expertise: 0.3,
        network: 0.2,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InfluenceWeights {
    pub authority: f64,
    pub expertise: f64,
    pub network: f64,
}

/// Influence factors, each in [0, 1], and how they are weighted
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Influence {
    pub authority: f64,
    pub expertise: f64,
    pub network: f64,
    #[serde(default = "default_weights")]
    pub weights: InfluenceWeights,
}

/// One stakeholder's preferences and influence attributes, keyed by email
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StakeholderProfile {
    pub id: String,
    pub name: String,
    pub role: String,
    pub authority_level: AuthorityLevel,
    pub communication: Communication,
    pub influence: Influence,
    #[serde(default)]
    pub interests: Vec<String>,
}

impl StakeholderProfile {
    /// Weighted influence in [0, 1]. Weights are normalized so they need not
    /// sum to one.
    pub fn influence_score(&self) -> f64 {
        let i = &self.influence;
        let w = &i.weights;
        let total = w.authority + w.expertise + w.network;
        if total <= 0.0 {
            return 0.0;
        }
        (i.authority * w.authority + i.expertise * w.expertise + i.network * w.network) / total
    }
}

fn is_valid_email(id: &str) -> bool {
    let mut parts = id.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && !id.chars().any(char::is_whitespace)
        }
        _ => false,
    }
}

impl Record for StakeholderProfile {
    const KIND: &'static str = "stakeholder";
    const SECTION: &'static str = "stakeholders";

    fn key(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if !is_valid_email(&self.id) {
            problems.push("id must be an email address".to_string());
        }
        if self.name.trim().is_empty() {
            problems.push("name must not be empty".to_string());
        }

        let i = &self.influence;
        for (field, value) in [
            ("authority", i.authority),
            ("expertise", i.expertise),
            ("network", i.network),
        ] {
            if !(0.0..=1.0).contains(&value) {
                problems.push(format!("influence.{} must be between 0 and 1, got {}", field, value));
            }
        }

        let w = &i.weights;
        for (field, value) in [
            ("authority", w.authority),
            ("expertise", w.expertise),
            ("network", w.network),
        ] {
            if !value.is_finite() || value < 0.0 {
                problems.push(format!(
                    "influence.weights.{} must be a finite non-negative number, got {}",
                    field, value
                ));
            }
        }
        let total = w.authority + w.expertise + w.network;
        if total <= 0.0 {
            problems.push("influence.weights must not all be zero".to_string());
        } else if !total.is_finite() {
            problems.push("influence.weights are too large to sum".to_string());
        }
        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str) -> StakeholderProfile {
        StakeholderProfile {
            id: id.to_string(),
            name: "Ana Ruiz".into(),
            role: "VP Engineering".into(),
            authority_level: AuthorityLevel::Executive,
            communication: Communication {
                channel: Channel::Meeting,
                frequency: Frequency::Weekly,
                detail: Detail::Summary,
            },
            influence: Influence {
                authority: 1.0,
                expertise: 0.5,
                network: 0.0,
                weights: default_weights(),
            },
            interests: vec![],
        }
    }

    #[test]
    fn test_influence_score_default_weights() {
        let p = profile("ana@example.com");
        // 1.0 * 0.5 + 0.5 * 0.3 + 0.0 * 0.2
        assert!((p.influence_score() - 0.65).abs() < 1e-9);
    }

    #[test]
    fn test_influence_score_normalizes_weights() {
        let mut p = profile("ana@example.com");
        p.influence.weights = InfluenceWeights {
            authority: 2.0,
            expertise: 2.0,
            network: 0.0,
        };
        assert!((p.influence_score() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_valid_profile_has_no_problems() {
        assert!(profile("ana@example.com").validate().is_empty());
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("a@b.com"));
        assert!(!is_valid_email("ana"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ana@"));
        assert!(!is_valid_email("a@b@c"));
        assert!(!is_valid_email("ana ruiz@example.com"));
    }

    #[test]
    fn test_out_of_range_factor_reported() {
        let mut p = profile("ana@example.com");
        p.influence.network = -0.1;
        let problems = p.validate();
        assert_eq!(problems.len(), 1);
        assert!(problems[0].starts_with("influence.network"));
    }

    #[test]
    fn test_zero_weights_reported() {
        let mut p = profile("ana@example.com");
        p.influence.weights = InfluenceWeights {
            authority: 0.0,
            expertise: 0.0,
            network: 0.0,
        };
        assert_eq!(p.influence_score(), 0.0);
        assert!(p.validate().iter().any(|m| m.contains("all be zero")));
    }

    #[test]
    fn test_infinite_weight_reported() {
        let mut p = profile("ana@example.com");
        p.influence.weights.authority = f64::INFINITY;
        let problems = p.validate();
        assert!(
            problems.iter().any(|m| m.starts_with("influence.weights.authority")),
            "{problems:?}"
        );
    }

    #[test]
    fn test_nan_weight_reported() {
        let mut p = profile("ana@example.com");
        p.influence.weights.network = f64::NAN;
        assert!(p
            .validate()
            .iter()
            .any(|m| m.starts_with("influence.weights.network")));
    }

    #[test]
    fn test_overflowing_weight_sum_reported() {
        let mut p = profile("ana@example.com");
        p.influence.weights = InfluenceWeights {
            authority: 1e308,
            expertise: 1e308,
            network: 0.0,
        };
        assert_eq!(
            p.validate(),
            vec!["influence.weights are too large to sum".to_string()]
        );
    }

    #[test]
    fn test_infinite_factor_reported() {
        let mut p = profile("ana@example.com");
        p.influence.expertise = f64::INFINITY;
        assert!(p.validate().iter().any(|m| m.starts_with("influence.expertise")));
    }

    #[test]
    fn test_infinite_weight_rejected_at_load() {
        let yaml = r#"
stakeholders:
  - id: ana@example.com
    name: Ana Ruiz
    role: VP Engineering
    authority_level: executive
    communication: { channel: meeting, frequency: weekly, detail: summary }
    influence:
      authority: 0.9
      expertise: 0.6
      network: 0.8
      weights: { authority: .inf, expertise: 0.3, network: 0.2 }
"#;
        let err = crate::store::RecordSet::<StakeholderProfile>::parse(
            std::path::Path::new("stakeholder_contexts.yaml"),
            yaml,
        )
        .unwrap_err();
        assert!(err.to_string().contains("influence.weights.authority"), "{err}");
    }

    #[test]
    fn test_weights_default_when_omitted() {
        let yaml = "authority: 0.5\nexpertise: 0.5\nnetwork: 0.5\n";
        let influence: Influence = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(influence.weights, default_weights());
    }

    #[test]
    fn test_authority_level_display() {
        assert_eq!(AuthorityLevel::Contributor.to_string(), "contributor");
        assert_eq!(Channel::Document.to_string(), "document");
        assert_eq!(Frequency::Biweekly.to_string(), "biweekly");
        assert_eq!(Detail::Detailed.to_string(), "detailed");
    }
}
