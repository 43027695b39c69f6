use crate::{env_or_default, FromEnv};
use std::path::PathBuf;

/// Default location of the product document, relative to the working directory.
pub const DEFAULT_PRODUCTS_FILE: &str = "data/products.json";

/// Location of the flat-file product store
#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub products_file: PathBuf,
}

impl StorageConfig {
    pub fn new(products_file: impl Into<PathBuf>) -> Self {
        Self {
            products_file: products_file.into(),
        }
    }
}

impl FromEnv for StorageConfig {
    /// PRODUCTS_FILE, defaulting to `data/products.json`
    fn from_env() -> Result<Self, crate::ConfigError> {
        Ok(Self::new(env_or_default("PRODUCTS_FILE", DEFAULT_PRODUCTS_FILE)))
    }
}
