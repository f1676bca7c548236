use crate::errors::PwaError;
use crate::ports::WorkerLifecyclePort;
use web_sys::ServiceWorkerGlobalScope;

/// Lifecycle adapter wrapping the running worker's global scope.
#[derive(Debug, Clone)]
pub struct WorkerLifecycle {
    scope: ServiceWorkerGlobalScope,
}

impl WorkerLifecycle {
    pub fn new(scope: ServiceWorkerGlobalScope) -> Self {
        Self { scope }
    }
}

impl WorkerLifecyclePort for WorkerLifecycle {
    fn skip_waiting(&self) -> Result<(), PwaError> {
        // The returned promise can be ignored.
        let _ = self.scope.skip_waiting()?;
        Ok(())
    }
}
