use std::time::Duration;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use crate::config::LoginDelayConfig;
use crate::errors::{AppError, AppResult};

// Draws taken before giving up on the window and using the clamped mean
const MAX_DRAWS: usize = 1_000;

/// Artificial latency added to successful logins.
///
/// Durations come from a normal distribution, re-drawn until they land
/// inside `[min, max]` seconds.
#[derive(Debug, Clone)]
pub struct LoginDelay {
    distribution: Option<Normal<f64>>,
    min_secs: f64,
    max_secs: f64,
}

impl LoginDelay {
    pub fn from_config(config: &LoginDelayConfig) -> AppResult<Self> {
        if !config.enabled {
            return Ok(Self::disabled());
        }

        if !(config.min_secs >= 0.0 && config.min_secs <= config.max_secs && config.mean_secs.is_finite()) {
            return Err(AppError::Generic(format!(
                "Invalid login delay window [{}, {}] around mean {}",
                config.min_secs, config.max_secs, config.mean_secs
            )));
        }

        let distribution = Normal::new(config.mean_secs, config.stddev_secs)
            .map_err(|e| AppError::Generic(format!("Invalid login delay distribution: {}", e)))?;

        Ok(Self {
            distribution: Some(distribution),
            min_secs: config.min_secs,
            max_secs: config.max_secs,
        })
    }

    pub fn disabled() -> Self {
        Self {
            distribution: None,
            min_secs: 0.0,
            max_secs: 0.0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.distribution.is_some()
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let Some(distribution) = &self.distribution else {
            return Duration::ZERO;
        };

        for _ in 0..MAX_DRAWS {
            let secs = distribution.sample(rng);
            if (self.min_secs..=self.max_secs).contains(&secs) {
                return Duration::from_secs_f64(secs);
            }
        }

        tracing::warn!("Login delay window rarely reached, using clamped mean");
        Duration::from_secs_f64(distribution.mean().clamp(self.min_secs, self.max_secs))
    }

    pub async fn wait(&self) {
        if !self.is_enabled() {
            return;
        }
        let delay = self.sample(&mut rand::thread_rng());
        tracing::debug!("Delaying login response by {:.3}s", delay.as_secs_f64());
        tokio::time::sleep(delay).await;
    }
}
