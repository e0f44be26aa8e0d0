use gloo_timers::callback::Timeout;

pub type Task = Box<dyn FnOnce()>;

/// Runs a task once after a delay without blocking the caller.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Task);
}

/// Browser timers via `setTimeout`. Handles are forgotten, so pending tasks
/// live until they fire or the page goes away.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        Timeout::new(delay_ms, task).forget();
    }
}
