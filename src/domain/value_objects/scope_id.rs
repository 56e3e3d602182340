use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Identifier of the scope being inspected (program uid, dataset uid, ...).
///
/// Deserialization goes through the same non-empty check as [`ScopeId::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScopeId(String);

impl ScopeId {
    pub fn new(value: String) -> Result<Self, String> {
        Self::validate(&value)?;
        Ok(Self(value))
    }

    pub fn parse(value: &str) -> Result<Self, String> {
        Self::validate(value)?;
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            return Err("Scope ID cannot be empty".to_string());
        }
        Ok(())
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ScopeId> for String {
    fn from(id: ScopeId) -> Self {
        id.0
    }
}

impl TryFrom<String> for ScopeId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for ScopeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_blank_id() {
        assert!(ScopeId::new("  ".into()).is_err());
        assert!(ScopeId::parse("").is_err());
    }

    #[test]
    fn test_deserialize_rejects_blank_id() {
        assert!(serde_json::from_str::<ScopeId>("\"   \"").is_err());

        let id: ScopeId = serde_json::from_str("\"data_set_uid\"").unwrap();
        assert_eq!(id.as_str(), "data_set_uid");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"data_set_uid\"");
    }

    #[test]
    fn test_accepts_uid() {
        let id: ScopeId = "IpHINAT79UW".parse().unwrap();
        assert_eq!(id.as_str(), "IpHINAT79UW");
        assert_eq!(String::from(id), "IpHINAT79UW");
    }
}
