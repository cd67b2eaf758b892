use gloo_timers::callback::Timeout;
use yew::Callback;

/// Something that produces a new forecast in the background.
///
/// `generate` starts the work and returns immediately; `on_complete` fires
/// once the work is done unless the returned task was cancelled first.
pub trait ForecastService {
    fn generate(&self, on_complete: Callback<()>) -> GenerationTask;
}

/// Handle to an in-flight generation.
///
/// Dropping the handle cancels the work. Call [`GenerationTask::finish`]
/// from the completion path to release it without cancelling.
pub struct GenerationTask {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl GenerationTask {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    /// Releases the task after it completed on its own; the cancel hook is
    /// dropped without running.
    pub fn finish(mut self) {
        self.cancel = None;
    }
}

impl Drop for GenerationTask {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// Runs a callback once after a delay.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> GenerationTask;
}

/// Browser `setTimeout` through `gloo_timers`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> GenerationTask {
        let timeout = Timeout::new(delay_ms, callback);
        GenerationTask::new(move || {
            log::debug!("Scheduled callback cancelled after {} ms delay", delay_ms);
            drop(timeout);
        })
    }
}

/// Stands in for a forecasting backend: completes after a fixed delay.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedForecastService<S = TimeoutScheduler> {
    delay_ms: u32,
    scheduler: S,
}

impl SimulatedForecastService {
    pub fn new(delay_ms: u32) -> Self {
        Self::with_scheduler(delay_ms, TimeoutScheduler)
    }
}

impl<S: Scheduler> SimulatedForecastService<S> {
    pub fn with_scheduler(delay_ms: u32, scheduler: S) -> Self {
        Self { delay_ms, scheduler }
    }
}

impl<S: Scheduler> ForecastService for SimulatedForecastService<S> {
    fn generate(&self, on_complete: Callback<()>) -> GenerationTask {
        log::info!("Generating forecast (simulated, {} ms)", self.delay_ms);
        self.scheduler
            .schedule(self.delay_ms, Box::new(move || on_complete.emit(())))
    }
}
