use crate::errors::PwaError;
use async_trait::async_trait;

/// Port for the page-side `navigator.serviceWorker` container.
#[async_trait(?Send)]
pub trait ServiceWorkerContainerPort {
    /// Whether the execution context exposes service worker registration.
    fn is_supported(&self) -> bool;

    /// Registers the script and resolves to the scope granted by the platform.
    async fn register(&self, script_url: &str) -> Result<String, PwaError>;
}

/// Port for lifecycle actions available inside a service worker.
pub trait WorkerLifecyclePort {
    /// Asks the platform to activate this worker without waiting for clients to close.
    fn skip_waiting(&self) -> Result<(), PwaError>;
}
