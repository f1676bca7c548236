/// Platform - hands out the ports shared by the loader and the worker stub.
///
/// Stateless ports are `&'static` references.

use crate::ports::LoggerPort;

#[derive(Clone, Copy)]
pub struct Platform {
    logger: &'static dyn LoggerPort,
}

impl Platform {
    /// Creates a new Platform with default adapters for the current target.
    pub fn new() -> Self {
        Self {
            logger: crate::adapters::logger(),
        }
    }

    /// Creates a Platform logging through the given logger.
    pub fn with_logger(logger: &'static dyn LoggerPort) -> Self {
        Self { logger }
    }

    #[inline]
    pub fn logger(&self) -> &'static dyn LoggerPort {
        self.logger
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CountingLogger {
        messages: Mutex<Vec<String>>,
    }

    impl LoggerPort for CountingLogger {
        fn log(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }

        fn error(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }

        fn warn(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    #[test]
    fn test_platform_default() {
        let platform = Platform::default();
        platform.logger().log("test default");
    }

    #[test]
    fn test_platform_with_logger() {
        let logger: &'static CountingLogger = Box::leak(Box::new(CountingLogger::default()));
        let platform = Platform::with_logger(logger);
        let cloned = platform;

        platform.logger().log("first");
        cloned.logger().error("second");

        assert_eq!(
            *logger.messages.lock().unwrap(),
            vec!["first".to_string(), "second".to_string()]
        );
    }
}
