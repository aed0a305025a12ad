use std::sync::{Arc, Mutex, MutexGuard};
use crate::errors::{AppError, AppResult};
use crate::models::User;

const SEED_USERNAME: &str = "admin";
const SEED_PASSWORD: &str = "test1234";

#[derive(Debug)]
struct Registry {
    users: Vec<User>,
    // Index into `users`; entries are never removed so it stays valid.
    current: Option<usize>,
}

/// Registered users plus the single active session.
///
/// Every operation takes the lock exactly once, so operations from
/// concurrent requests are applied one at a time and the last login wins.
pub struct UserStore {
    registry: Arc<Mutex<Registry>>,
}

impl UserStore {
    /// Creates a store seeded with the built-in `admin` account.
    pub fn new() -> Self {
        let registry = Registry {
            users: vec![User::new(SEED_USERNAME, SEED_PASSWORD)],
            current: None,
        };
        Self {
            registry: Arc::new(Mutex::new(registry)),
        }
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, Registry>> {
        self.registry
            .lock()
            .map_err(|e| AppError::Generic(format!("User store unavailable: {}", e)))
    }

    pub fn register(&self, username: &str, password: &str) -> AppResult<String> {
        let mut registry = self.lock()?;

        if registry.users.iter().any(|user| user.username == username) {
            tracing::debug!("Registration rejected, user exists: {}", username);
            return Err(AppError::AlreadyExists);
        }

        registry.users.push(User::new(username, password));
        tracing::info!("Registered user: {}", username);
        Ok(username.to_string())
    }

    pub fn login(&self, username: &str, password: &str) -> AppResult<String> {
        let mut registry = self.lock()?;

        match registry.users.iter().position(|user| user.matches(username, password)) {
            Some(index) => {
                registry.current = Some(index);
                tracing::info!("User logged in: {}", username);
                Ok(username.to_string())
            }
            None => {
                tracing::debug!("Invalid credentials for user: {}", username);
                Err(AppError::InvalidCredentials)
            }
        }
    }

    /// Clears the session unconditionally and returns whoever held it.
    pub fn logout(&self) -> AppResult<Option<User>> {
        let mut registry = self.lock()?;
        let previous = registry
            .current
            .take()
            .map(|index| registry.users[index].clone());

        if let Some(user) = &previous {
            tracing::info!("User logged out: {}", user.username);
        }
        Ok(previous)
    }

    pub fn current_user(&self) -> AppResult<Option<User>> {
        let registry = self.lock()?;
        Ok(registry.current.map(|index| registry.users[index].clone()))
    }

    pub fn len(&self) -> AppResult<usize> {
        Ok(self.lock()?.users.len())
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for UserStore {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone()
        }
    }
}
