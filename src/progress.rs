//! Advisory progress reporting for long evaluations.
//!
//! Workers bump a shared counter after each finished unit of work; a
//! dedicated reporter thread samples the counter and redraws a single
//! status line. Printing never blocks a worker, and the counter has no
//! effect on results.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

const SAMPLE_INTERVAL: Duration = Duration::from_millis(100);

pub struct ProgressReporter {
    completed: Arc<AtomicUsize>,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl ProgressReporter {
    /// Spawn the reporter thread for a run of `total` evaluations.
    pub fn start(total: usize) -> Self {
        let completed = Arc::new(AtomicUsize::new(0));
        let running = Arc::new(AtomicBool::new(true));
        let completed_clone = completed.clone();
        let running_clone = running.clone();
        let handle = thread::spawn(move || {
            let started = Instant::now();
            // Redraw roughly once per 1% of the work.
            let step = (total / 100).max(1);
            let mut last = 0;
            loop {
                let done = completed_clone.load(Ordering::Relaxed);
                if done >= last + step || (done == total && last != total) {
                    last = done;
                    let elapsed = started.elapsed().as_secs_f64();
                    let rate = if elapsed > 0.0 { done as f64 / elapsed } else { 0.0 };
                    print!(
                        "\r  Evaluated {}/{}... ({:.1}s, {:.0} per second)   ",
                        done, total, elapsed, rate
                    );
                    io::stdout().flush().unwrap();
                }
                if !running_clone.load(Ordering::Relaxed) {
                    break;
                }
                thread::sleep(SAMPLE_INTERVAL);
            }
            println!();
        });
        Self {
            completed,
            running,
            handle: Some(handle),
        }
    }

    /// The counter workers increment once per completed evaluation.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        self.completed.clone()
    }

    /// Stop the reporter after a final redraw and wait for it to exit.
    pub fn finish(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            handle.join().unwrap();
        }
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}
