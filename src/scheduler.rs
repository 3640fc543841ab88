//! Deferred work. The widget only defers one thing: finishing a submission.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Duration;

pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler {
    /// Runs `task` once, roughly `delay` from now.
    fn schedule(&self, delay: Duration, task: Task);
}

/// Browser timer backed scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::sleep(delay).await;
            task();
        });
    }
}

/// Ignores the delay and runs the task before returning.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateScheduler;

impl Scheduler for ImmediateScheduler {
    fn schedule(&self, _delay: Duration, task: Task) {
        task();
    }
}

/// Holds tasks until `run_pending` is called.
#[derive(Default)]
pub struct ManualScheduler {
    queue: RefCell<VecDeque<(Duration, Task)>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Runs queued tasks in the order they were scheduled, including any
    /// scheduled while running. Returns how many ran.
    pub fn run_pending(&self) -> usize {
        let mut ran = 0;
        loop {
            // Release the borrow before running so tasks may schedule more work.
            let next = self.queue.borrow_mut().pop_front();
            match next {
                Some((_, task)) => {
                    task();
                    ran += 1;
                }
                None => return ran,
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        self.queue.borrow_mut().push_back((delay, task));
    }
}
