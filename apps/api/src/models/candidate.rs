use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Classification derived solely from the fraud score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    Genuine,
    Suspicious,
    Fake,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Genuine => "GENUINE",
            RiskTier::Suspicious => "SUSPICIOUS",
            RiskTier::Fake => "FAKE",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GENUINE" => Ok(RiskTier::Genuine),
            "SUSPICIOUS" => Ok(RiskTier::Suspicious),
            "FAKE" => Ok(RiskTier::Fake),
            other => Err(format!("unknown risk tier '{other}'")),
        }
    }
}

/// One screened résumé, keyed by its uploaded filename.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: String,
    pub skills: BTreeSet<String>,
    pub companies: BTreeSet<String>,
    pub fraud_score: f64,
    pub risk: RiskTier,
}

#[derive(Debug, Clone, FromRow)]
pub struct CandidateRow {
    pub id: String,
    pub skills: Vec<String>,
    pub companies: Vec<String>,
    pub fraud_score: f64,
    pub risk: String,
}

impl TryFrom<CandidateRow> for CandidateRecord {
    type Error = String;

    fn try_from(row: CandidateRow) -> Result<Self, Self::Error> {
        Ok(CandidateRecord {
            risk: row.risk.parse()?,
            id: row.id,
            skills: row.skills.into_iter().collect(),
            companies: row.companies.into_iter().collect(),
            fraud_score: row.fraud_score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_serializes_upper_case() {
        assert_eq!(
            serde_json::to_value(RiskTier::Suspicious).unwrap(),
            serde_json::json!("SUSPICIOUS")
        );
    }

    #[test]
    fn test_risk_parses_its_own_display() {
        for tier in [RiskTier::Genuine, RiskTier::Suspicious, RiskTier::Fake] {
            assert_eq!(tier.to_string().parse::<RiskTier>().unwrap(), tier);
        }
        assert!("genuine".parse::<RiskTier>().is_err());
    }

    #[test]
    fn test_row_with_unknown_risk_is_rejected() {
        let row = CandidateRow {
            id: "cv.pdf".to_string(),
            skills: vec![],
            companies: vec![],
            fraud_score: 0.0,
            risk: "MAYBE".to_string(),
        };
        assert!(CandidateRecord::try_from(row).is_err());
    }
}
