use serde::{Deserialize, Serialize};

/// Profile of the signed-in user as exposed to the UI.
///
/// Owned by the session provider; the UI only reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    pub email: String,
    /// URL of the profile image, when one has been uploaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}
