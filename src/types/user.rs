use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct DBUserCreate {
    pub username: String,
    pub password_hash: String,
}

/// Login form body.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RLogin {
    pub username: String,
    pub password: String,
    /// Local path to land on after login.
    pub next: Option<String>,
}
