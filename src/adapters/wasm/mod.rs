/// WASM adapters - implementations using browser APIs.

pub mod console_logger;
pub mod document;
pub mod service_worker_container;
pub mod worker_lifecycle;

pub use console_logger::ConsoleLogger;
pub use document::BrowserDocument;
pub use service_worker_container::BrowserServiceWorkerContainer;
pub use worker_lifecycle::WorkerLifecycle;
