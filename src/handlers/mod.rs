mod auth;
mod calc;
mod json;

pub use auth::{handle_register, handle_login, handle_current_user, handle_logout};
pub use calc::handle_calculate;
