//! Membership provider enumeration.
//!
//! The closed set of external loyalty programs a user can enroll in.
//! Unknown provider strings are a boundary validation failure, never a
//! domain error kind.

use serde::{Deserialize, Serialize};

/// Loyalty program provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MembershipType {
    Naver,
    Line,
    Kakao,
}

impl MembershipType {
    /// All supported providers.
    pub const ALL: [MembershipType; 3] = [
        MembershipType::Naver,
        MembershipType::Line,
        MembershipType::Kakao,
    ];

    /// Company name the provider is marketed under.
    pub fn company_name(&self) -> &'static str {
        match self {
            MembershipType::Naver => "네이버",
            MembershipType::Line => "라인",
            MembershipType::Kakao => "카카오",
        }
    }

    /// Stable wire/storage name for the provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipType::Naver => "NAVER",
            MembershipType::Line => "LINE",
            MembershipType::Kakao => "KAKAO",
        }
    }
}

impl std::fmt::Display for MembershipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MembershipType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NAVER" => Ok(MembershipType::Naver),
            "LINE" => Ok(MembershipType::Line),
            "KAKAO" => Ok(MembershipType::Kakao),
            other => Err(format!("Unknown membership type: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn serializes_to_screaming_snake_case() {
        let json = serde_json::to_string(&MembershipType::Naver).unwrap();
        assert_eq!(json, r#""NAVER""#);
    }

    #[test]
    fn deserializes_known_providers() {
        let t: MembershipType = serde_json::from_str(r#""KAKAO""#).unwrap();
        assert_eq!(t, MembershipType::Kakao);
    }

    #[test]
    fn rejects_unknown_providers() {
        let result: Result<MembershipType, _> = serde_json::from_str(r#""TOSS""#);
        assert!(result.is_err());
    }

    #[test]
    fn from_str_roundtrips_all_providers() {
        for t in MembershipType::ALL {
            assert_eq!(MembershipType::from_str(t.as_str()).unwrap(), t);
        }
    }

    #[test]
    fn from_str_rejects_unknown() {
        assert!(MembershipType::from_str("naver").is_err());
        assert!(MembershipType::from_str("").is_err());
    }
}
