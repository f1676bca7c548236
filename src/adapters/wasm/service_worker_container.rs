use crate::errors::PwaError;
use crate::global::{has_service_worker_support, window};
use crate::ports::ServiceWorkerContainerPort;
use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::ServiceWorkerRegistration;

/// `navigator.serviceWorker` adapter for a page context.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserServiceWorkerContainer;

impl BrowserServiceWorkerContainer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl ServiceWorkerContainerPort for BrowserServiceWorkerContainer {
    fn is_supported(&self) -> bool {
        window()
            .map(|window| has_service_worker_support(&window))
            .unwrap_or(false)
    }

    async fn register(&self, script_url: &str) -> Result<String, PwaError> {
        let container = window()?.navigator().service_worker();
        let registration = JsFuture::from(container.register(script_url))
            .await?
            .dyn_into::<ServiceWorkerRegistration>()
            .map_err(|_| PwaError::JsError("Unexpected registration value".to_string()))?;

        Ok(registration.scope())
    }
}
