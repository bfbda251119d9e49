//! Wire types for the board's user API.

use serde::{Deserialize, Serialize};

/// One user as reported by the board's listing endpoint.
///
/// `role` and `status` are deserialized but never filtered on: every listed
/// user counts as existing regardless of role or active/inactive status.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardUser {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub status: String,
}

/// User-creation request body submitted to the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    /// Create a new creation request.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_board_user_deserializes_listing_row() {
        let user: BoardUser = serde_json::from_value(json!({
            "id": 7,
            "name": "Alice",
            "role": "visitor",
            "status": "active",
        }))
        .expect("deserialize");

        assert_eq!(user.id, 7);
        assert_eq!(user.name, "Alice");
        assert_eq!(user.role, "visitor");
        assert_eq!(user.status, "active");
    }

    #[test]
    fn test_board_user_tolerates_missing_role_and_status() {
        let user: BoardUser =
            serde_json::from_value(json!({ "id": 1, "name": "Bob" })).expect("deserialize");
        assert!(user.role.is_empty());
        assert!(user.status.is_empty());
    }

    #[test]
    fn test_new_user_serializes_create_body() {
        let body = serde_json::to_value(NewUser::new("Alice", "a@x.com")).expect("serialize");
        assert_eq!(body, json!({ "name": "Alice", "email": "a@x.com" }));
    }
}
