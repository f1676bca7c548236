//! Per-event entry points for the service worker.
//!
//! A worker must add its `install` and `fetch` listeners during the first
//! evaluation of its script, which is over before the wasm module has been
//! instantiated. The JS entry therefore owns the listeners and forwards each
//! event once the module is ready:
//!
//! ```js
//! importScripts("/pkg/pwa_bootstrap.js");
//! const ready = wasm_bindgen("/pkg/pwa_bootstrap_bg.wasm");
//!
//! self.addEventListener("install", (event) => {
//!     event.waitUntil(ready.then(() => wasm_bindgen.worker_install()));
//! });
//!
//! // Never calls respondWith: the request keeps the default network path.
//! self.addEventListener("fetch", (event) => {
//!     ready.then(() => wasm_bindgen.worker_fetch(event));
//! });
//! ```

use crate::adapters::wasm::WorkerLifecycle;
use crate::global::service_worker_scope;
use crate::service_worker::{FetchDisposition, InstallOutcome, ServiceWorkerStub};
use wasm_bindgen::prelude::*;
use web_sys::FetchEvent;

/// Install handler. Returns whether skip-waiting was accepted; a refusal is
/// logged and not raised.
#[wasm_bindgen]
pub fn worker_install() -> Result<bool, JsValue> {
    let stub = ServiceWorkerStub::new(WorkerLifecycle::new(service_worker_scope()?));

    Ok(stub.on_install() == InstallOutcome::SkippedWaiting)
}

/// Fetch handler. Returns whether the event was answered, which is never.
#[wasm_bindgen]
pub fn worker_fetch(event: FetchEvent) -> Result<bool, JsValue> {
    let stub = ServiceWorkerStub::new(WorkerLifecycle::new(service_worker_scope()?));

    Ok(stub.on_fetch(&event.request().url()) != FetchDisposition::Passthrough)
}
