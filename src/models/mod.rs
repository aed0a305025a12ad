mod user;
mod forms;
mod operation;
mod responses;

pub use user::User;
pub use forms::{CredentialsForm, CalculationForm};
pub use operation::Operation;
pub use responses::{ResultResponse, UserResponse};
