use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::errors::PwaError;

pub const DEFAULT_MANIFEST_PATH: &str = "/public/manifest.json";
pub const DEFAULT_SERVICE_WORKER_PATH: &str = "/public/sw.js";

/// Paths wired into the page by the loader.
///
/// Every field is optional when deserialized; missing keys fall back to the
/// defaults above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PwaConfig {
    manifest_path: String,
    service_worker_path: String,
}

impl Default for PwaConfig {
    fn default() -> Self {
        Self {
            manifest_path: DEFAULT_MANIFEST_PATH.to_string(),
            service_worker_path: DEFAULT_SERVICE_WORKER_PATH.to_string(),
        }
    }
}

impl PwaConfig {
    pub fn new(
        manifest_path: impl Into<String>,
        service_worker_path: impl Into<String>,
    ) -> Result<Self, PwaError> {
        let config = Self {
            manifest_path: manifest_path.into(),
            service_worker_path: service_worker_path.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reads a config from a JS object. `undefined` and `null` give the defaults.
    pub fn from_js(value: JsValue) -> Result<Self, PwaError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }

        let config: PwaConfig = serde_wasm_bindgen::from_value(value)
            .map_err(|err| PwaError::from(JsValue::from(err)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PwaError> {
        if self.manifest_path.trim().is_empty() {
            return Err(PwaError::Configuration {
                message: "manifestPath must not be empty".to_string(),
            });
        }
        if self.service_worker_path.trim().is_empty() {
            return Err(PwaError::Configuration {
                message: "serviceWorkerPath must not be empty".to_string(),
            });
        }
        Ok(())
    }

    #[inline]
    pub fn manifest_path(&self) -> &str {
        &self.manifest_path
    }

    #[inline]
    pub fn service_worker_path(&self) -> &str {
        &self.service_worker_path
    }
}
