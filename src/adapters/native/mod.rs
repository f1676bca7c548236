/// Native adapters - implementations for native Rust (non-WASM).

pub mod console_logger;

pub use console_logger::ConsoleLogger;
