pub mod adapters;
pub mod config;
pub mod errors;
pub mod loader;
pub mod platform;
pub mod ports;
pub mod service_worker;

#[cfg(target_arch = "wasm32")]
pub mod facades;
#[cfg(target_arch = "wasm32")]
pub mod global;

pub use config::PwaConfig;
pub use errors::PwaError;
pub use loader::{Loader, RegistrationOutcome};
pub use platform::Platform;
pub use service_worker::{FetchDisposition, InstallOutcome, ServiceWorkerStub};

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start_app() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    Ok(())
}
