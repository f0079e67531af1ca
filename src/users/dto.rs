use serde::{Deserialize, Serialize};

/// A stored user record. Ids are assigned by the registry, starting at 1.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub email: String,
}

/// Request body for create and update. All fields default to their zero
/// value when absent so the field validators produce the specific message
/// ("Name is required", "Age must be above 18") rather than a generic
/// decode failure. A client-supplied `id` field is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: i64,
    #[serde(default)]
    pub email: String,
}
