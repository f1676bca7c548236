use crate::config::PwaConfig;
use crate::errors::PwaError;
use crate::platform::Platform;
use crate::ports::{DocumentPort, ServiceWorkerContainerPort};

/// Result of a service worker registration attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Registered { scope: String },
    Failed { reason: String },
    Unsupported,
}

/// Page-side wiring run once per `load` event: manifest link, then worker registration.
pub struct Loader<D, C> {
    config: PwaConfig,
    document: D,
    container: C,
    platform: Platform,
}

impl<D, C> Loader<D, C>
where
    D: DocumentPort,
    C: ServiceWorkerContainerPort,
{
    pub fn new(config: PwaConfig, document: D, container: C) -> Self {
        Self::with_platform(config, document, container, Platform::new())
    }

    pub fn with_platform(config: PwaConfig, document: D, container: C, platform: Platform) -> Self {
        Self {
            config,
            document,
            container,
            platform,
        }
    }

    /// Load handler. The two side effects are independent: a missing `<head>`
    /// is logged and registration still runs.
    pub async fn on_load(&self) -> RegistrationOutcome {
        if let Err(err) = self.inject_manifest() {
            self.platform
                .logger()
                .error(&format!("Manifest link injection failed: {}", err));
        }

        self.register_service_worker().await
    }

    /// Appends a manifest link to the head. Not idempotent.
    pub fn inject_manifest(&self) -> Result<(), PwaError> {
        self.document
            .append_manifest_link(self.config.manifest_path())
    }

    /// Registers the worker script if the context supports it. Errors are
    /// logged here and never returned to the caller.
    pub async fn register_service_worker(&self) -> RegistrationOutcome {
        if !self.container.is_supported() {
            return RegistrationOutcome::Unsupported;
        }

        let logger = self.platform.logger();
        match self
            .container
            .register(self.config.service_worker_path())
            .await
        {
            Ok(scope) => {
                logger.log(&format!(
                    "ServiceWorker registration successful with scope: {}",
                    scope
                ));
                RegistrationOutcome::Registered { scope }
            }
            Err(err) => {
                logger.error(&format!(
                    "ServiceWorker registration failed: {}",
                    err.message()
                ));
                RegistrationOutcome::Failed {
                    reason: err.message().to_string(),
                }
            }
        }
    }
}
