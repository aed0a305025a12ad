mod calculator;
mod login_delay;
mod user_store;

pub use calculator::Calculator;
pub use login_delay::LoginDelay;
pub use user_store::UserStore;
