use crate::config::Config;
use crate::errors::AppResult;
use crate::services::{Calculator, LoginDelay, UserStore};

// Application state shared between handlers
#[derive(Clone)]
pub struct AppState {
    pub users: UserStore,
    pub calculator: Calculator,
    pub login_delay: LoginDelay,
}

impl AppState {
    pub fn new(users: UserStore, login_delay: LoginDelay) -> Self {
        Self {
            users,
            calculator: Calculator::new(),
            login_delay,
        }
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        let login_delay = LoginDelay::from_config(&config.login_delay)?;
        Ok(Self::new(UserStore::new(), login_delay))
    }
}
