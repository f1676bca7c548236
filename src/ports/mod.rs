/// Ports module - Defines the interfaces (traits) that abstract the browser surfaces.
///
/// The loader and the service worker stub only talk to these traits, so their
/// behavior can be driven by the `web-sys` adapters in the browser and by
/// in-memory doubles in native tests.

pub mod document;
pub mod logger;
pub mod service_worker;

pub use document::DocumentPort;
pub use logger::LoggerPort;
pub use service_worker::{ServiceWorkerContainerPort, WorkerLifecyclePort};
