// Shared data types
use serde::Deserialize;
use serde_json::Value;

use crate::errors::ConnectError;

/// HTTP request payload for the connect endpoint.
///
/// Both keys are required and no other keys are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConnectionRequest {
    pub user1: String,
    pub user2: String,
}

impl ConnectionRequest {
    /// Parse a raw request body into a `ConnectionRequest`.
    ///
    /// An empty body is rejected the same way as malformed JSON. Only a JSON
    /// object is accepted; serde would otherwise map a two-element array
    /// onto the fields positionally.
    pub fn from_body(body: &[u8]) -> Result<Self, ConnectError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(ConnectError::invalid_payload("request body is empty"));
        }

        let value: Value =
            serde_json::from_slice(body).map_err(|e| ConnectError::invalid_payload(e.to_string()))?;
        if !value.is_object() {
            return Err(ConnectError::invalid_payload("expected a JSON object"));
        }

        serde_json::from_value(value).map_err(|e| ConnectError::invalid_payload(e.to_string()))
    }
}

/// Email of a matched `User` node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserNode {
    pub email: String,
}

/// One row returned by the connect statement: the two matched users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPair {
    pub user1: UserNode,
    pub user2: UserNode,
}

/// Update statistics reported by the database for a single statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateCounters {
    pub nodes_created: u64,
    pub nodes_deleted: u64,
    pub relationships_created: u64,
    pub relationships_deleted: u64,
    pub properties_set: u64,
    pub labels_added: u64,
    pub labels_removed: u64,
    pub indexes_added: u64,
    pub indexes_removed: u64,
    pub constraints_added: u64,
    pub constraints_removed: u64,
    pub system_updates: u64,
}

impl UpdateCounters {
    /// Whether the statement changed anything in the database.
    pub fn contains_updates(&self) -> bool {
        self.nodes_created
            + self.nodes_deleted
            + self.relationships_created
            + self.relationships_deleted
            + self.properties_set
            + self.labels_added
            + self.labels_removed
            + self.indexes_added
            + self.indexes_removed
            + self.constraints_added
            + self.constraints_removed
            + self.system_updates
            > 0
    }
}

/// Result of executing one statement: rows, counters and column names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOutcome {
    pub records: Vec<UserPair>,
    pub counters: UpdateCounters,
    pub keys: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_payload() {
        let request =
            ConnectionRequest::from_body(br#"{"user1": "a@x.com", "user2": "b@x.com"}"#).unwrap();
        assert_eq!(request.user1, "a@x.com");
        assert_eq!(request.user2, "b@x.com");
    }

    #[test]
    fn test_missing_key_is_invalid() {
        let err = ConnectionRequest::from_body(br#"{"user1": "a@x.com"}"#).unwrap_err();
        assert!(matches!(err, ConnectError::InvalidPayload(_)));
        assert!(err.to_string().starts_with("Invalid payload:"));
        assert!(err.to_string().contains("user2"));
    }

    #[test]
    fn test_unknown_key_is_invalid() {
        let err = ConnectionRequest::from_body(
            br#"{"user1": "a@x.com", "user2": "b@x.com", "user3": "c@x.com"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("user3"));
    }

    #[test]
    fn test_wrong_types_are_invalid() {
        assert!(ConnectionRequest::from_body(br#"{"user1": 1, "user2": "b@x.com"}"#).is_err());
        assert!(ConnectionRequest::from_body(b"null").is_err());
    }

    #[test]
    fn test_array_payload_is_invalid() {
        let err = ConnectionRequest::from_body(br#"["a@x.com", "b@x.com"]"#).unwrap_err();
        assert_eq!(
            err,
            ConnectError::invalid_payload("expected a JSON object")
        );
        assert_eq!(err.to_string(), "Invalid payload: expected a JSON object");
    }

    #[test]
    fn test_empty_or_malformed_body_is_invalid() {
        let empty = ConnectionRequest::from_body(b"").unwrap_err();
        assert_eq!(empty.to_string(), "Invalid payload: request body is empty");

        let blank = ConnectionRequest::from_body(b"  \n").unwrap_err();
        assert_eq!(blank, empty);

        let malformed = ConnectionRequest::from_body(b"{user1:").unwrap_err();
        assert!(malformed.to_string().starts_with("Invalid payload:"));
    }

    #[test]
    fn test_counters_contains_updates() {
        assert!(!UpdateCounters::default().contains_updates());

        let created = UpdateCounters {
            relationships_created: 1,
            ..Default::default()
        };
        assert!(created.contains_updates());

        let props = UpdateCounters {
            properties_set: 2,
            ..Default::default()
        };
        assert!(props.contains_updates());
    }
}
