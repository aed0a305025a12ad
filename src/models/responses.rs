use serde::{Deserialize, Serialize};
use super::user::User;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ResultResponse {
    pub result: f64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    pub username: String,
}

impl From<String> for UserResponse {
    fn from(username: String) -> Self {
        Self { username }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self { username: user.username }
    }
}
