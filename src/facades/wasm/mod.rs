pub mod loader;
pub mod worker;
