use std::sync::{Arc, Mutex, MutexGuard};

use crate::config::AppConfig;
use crate::users::registry::Registry;

#[derive(Clone)]
pub struct AppState {
    registry: Arc<Mutex<Registry>>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        Ok(Self::from_parts(config))
    }

    pub fn from_parts(config: Arc<AppConfig>) -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry::new())),
            config,
        }
    }

    /// Locks the registry for the duration of one handler's access. A
    /// poisoned lock means some handler panicked mid-request; the registry
    /// itself is still consistent, so recover the guard and keep serving.
    pub fn registry(&self) -> MutexGuard<'_, Registry> {
        self.registry
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn fake() -> Self {
        let config = Arc::new(AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            static_dir: "static".into(),
        });
        Self::from_parts(config)
    }
}
