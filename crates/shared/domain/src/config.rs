use crate::constants::DEFAULT_CURRICULUM;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration shared by the shell and the training slice.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KennelConfigInner {
    pub school: SchoolConfig,
    pub dog: DogConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct KennelConfig {
    #[serde(flatten, default)]
    inner: Arc<KennelConfigInner>,
}

impl Deref for KennelConfig {
    type Target = KennelConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for KennelConfig {
    fn deref_mut(&mut self) -> &mut KennelConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// What a school teaches, in order.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SchoolConfig {
    pub curriculum: Vec<String>,
}

/// Defaults for freshly created dogs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DogConfig {
    pub obedience: u8,
    /// Seed for reproducible obedience rolls; thread RNG when absent.
    pub seed: Option<u64>,
}

/// Logger settings consumed by `kennel-logger`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub filter: Option<String>,
    pub console: bool,
    pub json: bool,
    pub dir: Option<PathBuf>,
}

// --- Default ---

impl Default for SchoolConfig {
    fn default() -> Self {
        Self { curriculum: DEFAULT_CURRICULUM.iter().map(|&name| name.to_owned()).collect() }
    }
}

impl Default for DogConfig {
    fn default() -> Self {
        Self { obedience: 4, seed: None }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None, console: true, json: false, dir: None }
    }
}
