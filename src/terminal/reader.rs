//! Terminal reader thread.
//!
//! Polls crossterm for input in a dedicated thread and forwards every
//! supported event through an [`EventProducer`].

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event;

use super::forward_event;
use crate::bridge::EventProducer;

/// How long one poll waits before re-checking the running flag.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Dedicated terminal input thread.
///
/// Polls with a timeout so `stop` never waits longer than one interval.
pub struct TerminalReader {
    handle: Option<JoinHandle<()>>,
    running: Arc<AtomicBool>,
}

impl TerminalReader {
    /// Spawn the reader thread.
    pub fn spawn(producer: EventProducer) -> io::Result<Self> {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();

        let handle = thread::Builder::new()
            .name("canvas-events-terminal".to_string())
            .spawn(move || {
                Self::read_loop(&running_clone, &producer);
                running_clone.store(false, Ordering::SeqCst);
            })?;

        Ok(Self { handle: Some(handle), running })
    }

    fn read_loop(running: &AtomicBool, producer: &EventProducer) {
        while running.load(Ordering::SeqCst) {
            match event::poll(POLL_INTERVAL) {
                Ok(true) => match event::read() {
                    Ok(ev) => {
                        forward_event(producer, ev);
                    }
                    Err(e) => {
                        if e.kind() == io::ErrorKind::Interrupted {
                            continue;
                        }
                        log::warn!("[canvas-events] terminal read failed: {}", e);
                        break;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    log::warn!("[canvas-events] terminal poll failed: {}", e);
                    break;
                }
            }
        }
    }

    /// Stop the reader thread and wait for it to exit.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("[canvas-events] terminal reader panicked");
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

impl Drop for TerminalReader {
    fn drop(&mut self) {
        self.stop();
    }
}
