use crate::errors::PwaError;
use wasm_bindgen::prelude::*;
use web_sys::{ServiceWorkerGlobalScope, Window};

pub fn window() -> Result<Window, PwaError> {
    web_sys::window().ok_or(PwaError::Unavailable {
        message: "Window not found",
    })
}

/// Returns the global scope when running inside a service worker.
pub fn service_worker_scope() -> Result<ServiceWorkerGlobalScope, PwaError> {
    js_sys::global()
        .dyn_into::<ServiceWorkerGlobalScope>()
        .map_err(|_| PwaError::Unavailable {
            message: "ServiceWorkerGlobalScope not found",
        })
}

/// `"serviceWorker" in navigator`.
///
/// `Navigator::service_worker` is typed as always present, so the property has
/// to be probed before it is used.
pub fn has_service_worker_support(window: &Window) -> bool {
    js_sys::Reflect::has(&window.navigator(), &JsValue::from_str("serviceWorker"))
        .unwrap_or(false)
}
