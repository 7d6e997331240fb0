use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use analyzer_logging::scan_debug;

/// Events emitted by the scan ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerEvent {
    Tick,
}

struct ActiveTicker {
    stop_tx: mpsc::Sender<()>,
    worker: thread::JoinHandle<()>,
}

/// Owns the single recurring tick source behind a running scan.
///
/// At most one worker is live at a time: `start` tears down the previous
/// worker before spawning a replacement, and `stop` joins the worker so no
/// tick can be delivered once it returns.
pub struct TickerHandle {
    event_tx: mpsc::Sender<TickerEvent>,
    event_rx: mpsc::Receiver<TickerEvent>,
    active: Option<ActiveTicker>,
}

impl Default for TickerHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl TickerHandle {
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        Self {
            event_tx,
            event_rx,
            active: None,
        }
    }

    /// Starts the recurring tick source, replacing any previous one.
    pub fn start(&mut self, interval: Duration) {
        self.stop();
        scan_debug!("Starting ticker at {:?} intervals", interval);

        let (stop_tx, stop_rx) = mpsc::channel();
        let event_tx = self.event_tx.clone();
        let worker = thread::spawn(move || loop {
            match stop_rx.recv_timeout(interval) {
                Err(mpsc::RecvTimeoutError::Timeout) => {
                    if event_tx.send(TickerEvent::Tick).is_err() {
                        break;
                    }
                }
                Ok(()) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
            }
        });
        self.active = Some(ActiveTicker { stop_tx, worker });
    }

    /// Stops the tick source, joining the worker thread. Stopping an idle
    /// handle is a no-op.
    pub fn stop(&mut self) {
        if let Some(active) = self.active.take() {
            scan_debug!("Stopping ticker");
            let _ = active.stop_tx.send(());
            let _ = active.worker.join();
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn try_recv(&self) -> Option<TickerEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next tick arrives or the timeout elapses.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<TickerEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
