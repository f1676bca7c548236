use crate::platform::Platform;
use crate::ports::WorkerLifecyclePort;

/// What the fetch handler did with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchDisposition {
    /// Left to the default network path; `respondWith` was not called.
    Passthrough,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    SkippedWaiting,
    SkipWaitingFailed { reason: String },
}

/// Installability stub: activates immediately and never touches network traffic.
pub struct ServiceWorkerStub<W> {
    lifecycle: W,
    platform: Platform,
}

impl<W: WorkerLifecyclePort> ServiceWorkerStub<W> {
    pub fn new(lifecycle: W) -> Self {
        Self::with_platform(lifecycle, Platform::new())
    }

    pub fn with_platform(lifecycle: W, platform: Platform) -> Self {
        Self {
            lifecycle,
            platform,
        }
    }

    /// Install handler. Calls skip-waiting exactly once per event; failures
    /// are logged, activation errors belong to the platform.
    pub fn on_install(&self) -> InstallOutcome {
        match self.lifecycle.skip_waiting() {
            Ok(()) => InstallOutcome::SkippedWaiting,
            Err(err) => {
                self.platform
                    .logger()
                    .warn(&format!("ServiceWorker skipWaiting failed: {}", err));
                InstallOutcome::SkipWaitingFailed {
                    reason: err.to_string(),
                }
            }
        }
    }

    /// Fetch handler. No caching, no offline fallback.
    pub fn on_fetch(&self, _request_url: &str) -> FetchDisposition {
        FetchDisposition::Passthrough
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PwaError;
    use crate::ports::LoggerPort;
    use std::cell::Cell;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeLifecycle {
        calls: Cell<u32>,
        fail: bool,
    }

    impl WorkerLifecyclePort for FakeLifecycle {
        fn skip_waiting(&self) -> Result<(), PwaError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                Err(PwaError::JsError("InvalidStateError".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        warnings: Mutex<Vec<String>>,
    }

    impl LoggerPort for RecordingLogger {
        fn log(&self, _message: &str) {}

        fn error(&self, _message: &str) {}

        fn warn(&self, message: &str) {
            self.warnings.lock().unwrap().push(message.to_string());
        }
    }

    #[test]
    fn test_install_skips_waiting_once() {
        let stub = ServiceWorkerStub::new(FakeLifecycle::default());

        assert_eq!(stub.on_install(), InstallOutcome::SkippedWaiting);
        assert_eq!(stub.lifecycle.calls.get(), 1);
    }

    #[test]
    fn test_every_install_event_skips_waiting() {
        let stub = ServiceWorkerStub::new(FakeLifecycle::default());

        for expected in 1..=3 {
            stub.on_install();
            assert_eq!(stub.lifecycle.calls.get(), expected);
        }
    }

    #[test]
    fn test_install_failure_is_logged_not_propagated() {
        let logger: &'static RecordingLogger = Box::leak(Box::new(RecordingLogger::default()));
        let lifecycle = FakeLifecycle {
            fail: true,
            ..Default::default()
        };
        let stub = ServiceWorkerStub::with_platform(lifecycle, Platform::with_logger(logger));

        let outcome = stub.on_install();

        assert!(matches!(outcome, InstallOutcome::SkipWaitingFailed { .. }));
        assert_eq!(stub.lifecycle.calls.get(), 1);
        assert_eq!(logger.warnings.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_fetch_is_always_passthrough() {
        let stub = ServiceWorkerStub::new(FakeLifecycle::default());

        for url in [
            "https://example.com/",
            "https://example.com/public/manifest.json",
            "https://cdn.example.net/app.js?v=2",
            "",
        ] {
            assert_eq!(stub.on_fetch(url), FetchDisposition::Passthrough);
        }
        assert_eq!(stub.lifecycle.calls.get(), 0);
    }
}
