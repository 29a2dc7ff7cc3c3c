use serde::{Deserialize, Serialize};

/// Registration payload. The plaintext password is consumed by
/// `DbService::create_user` and only its hash is ever stored.
#[derive(Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub surname: String,
    pub username: String,
    pub password: String,
}
