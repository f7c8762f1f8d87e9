//! Real-time playback of an interval sequence.
//!
//! A run lives on one worker thread. The thread walks the sequence in order,
//! firing the on/off callbacks around each signal interval, and waits out
//! every interval on a cancellation channel so that `stop` can interrupt it.

use crate::types::Interval;
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, error, trace, warn};

/// Zero-argument notification fired on the playback thread.
pub type SignalCallback = Arc<dyn Fn() + Send + Sync + 'static>;

#[derive(Debug, Default)]
struct PlaybackState {
    cursor: AtomicUsize,
    running: AtomicBool,
}

struct Worker {
    cancel_tx: Sender<()>,
    handle: JoinHandle<()>,
}

/// Plays an interval sequence against the wall clock.
///
/// Callbacks are captured when `start` is called; replacing them during a run
/// affects the next run only. They execute on the playback thread and should
/// return quickly, since the next interval does not begin until they do.
pub struct IntervalSequencePlayer {
    sequence: Arc<[Interval]>,
    on_signal_on: Option<SignalCallback>,
    on_signal_off: Option<SignalCallback>,
    state: Arc<PlaybackState>,
    started: bool,
    worker: Option<Worker>,
}

impl IntervalSequencePlayer {
    pub fn new(sequence: impl Into<Arc<[Interval]>>) -> Self {
        Self {
            sequence: sequence.into(),
            on_signal_on: None,
            on_signal_off: None,
            state: Arc::new(PlaybackState::default()),
            started: false,
            worker: None,
        }
    }

    pub fn sequence(&self) -> &[Interval] {
        &self.sequence
    }

    pub fn set_on_signal_on<F>(&mut self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_signal_on = Some(Arc::new(callback));
    }

    pub fn set_on_signal_off<F>(&mut self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_signal_off = Some(Arc::new(callback));
    }

    pub fn clear_callbacks(&mut self) {
        self.on_signal_on = None;
        self.on_signal_off = None;
    }

    pub fn is_playing(&self) -> bool {
        self.state.running.load(Ordering::Acquire)
    }

    /// Index of the interval being played, or where playback stopped.
    /// Equals the sequence length after a run completes; `None` before the
    /// first `start`.
    pub fn cursor(&self) -> Option<usize> {
        self.started.then(|| self.state.cursor.load(Ordering::Acquire))
    }

    /// Play from the first interval, cancelling any run in progress.
    pub fn start(&mut self) {
        if self.sequence.is_empty() {
            return;
        }
        self.stop();

        self.started = true;
        self.state.cursor.store(0, Ordering::Release);
        self.state.running.store(true, Ordering::Release);

        let (cancel_tx, cancel_rx) = bounded(1);
        let run = PlaybackRun {
            sequence: Arc::clone(&self.sequence),
            on_signal_on: self.on_signal_on.clone(),
            on_signal_off: self.on_signal_off.clone(),
            state: Arc::clone(&self.state),
            cancel_rx,
        };

        let spawned = thread::Builder::new()
            .name("morse-playback".into())
            .spawn(move || run.play());
        match spawned {
            Ok(handle) => {
                debug!(intervals = self.sequence.len(), "playback started");
                self.worker = Some(Worker { cancel_tx, handle });
            }
            Err(err) => {
                error!(%err, "failed to spawn playback thread");
                self.state.running.store(false, Ordering::Release);
            }
        }
    }

    /// Cancel playback. Once this returns no further callbacks fire for the
    /// cancelled run. Does nothing when idle.
    pub fn stop(&mut self) {
        if let Some(Worker { cancel_tx, handle }) = self.worker.take() {
            // The receiver is gone if the run already finished.
            let _ = cancel_tx.send(());
            drop(cancel_tx);
            join_worker(handle);
        }
        self.state.running.store(false, Ordering::Release);
    }

    /// Block until the current run finishes on its own.
    pub fn wait(&mut self) {
        if let Some(worker) = self.worker.take() {
            join_worker(worker.handle);
        }
    }
}

impl Drop for IntervalSequencePlayer {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for IntervalSequencePlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntervalSequencePlayer")
            .field("intervals", &self.sequence.len())
            .field("playing", &self.is_playing())
            .field("cursor", &self.cursor())
            .finish()
    }
}

fn join_worker(handle: JoinHandle<()>) {
    // A callback may call back into a player it shares; never join ourselves.
    if handle.thread().id() == thread::current().id() {
        return;
    }
    if handle.join().is_err() {
        warn!("playback thread panicked in a signal callback");
    }
}

/// Everything a playback thread owns for one run.
struct PlaybackRun {
    sequence: Arc<[Interval]>,
    on_signal_on: Option<SignalCallback>,
    on_signal_off: Option<SignalCallback>,
    state: Arc<PlaybackState>,
    cancel_rx: Receiver<()>,
}

impl PlaybackRun {
    fn play(self) {
        // Clears the running flag however the run ends, including a
        // panicking callback unwinding through here.
        let _running = RunningGuard(&self.state);

        for (index, interval) in self.sequence.iter().enumerate() {
            if self.cancelled() {
                debug!(index, "playback cancelled");
                return;
            }
            self.state.cursor.store(index, Ordering::Release);
            trace!(
                index,
                signal = interval.is_signal(),
                ms = interval.duration_ms(),
                "interval"
            );

            if interval.is_signal() {
                fire(&self.on_signal_on);
            }

            match self.cancel_rx.recv_timeout(interval.duration()) {
                Err(RecvTimeoutError::Timeout) => {}
                Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                    debug!(index, "playback cancelled");
                    return;
                }
            }

            if self.cancelled() {
                debug!(index, "playback cancelled");
                return;
            }
            if interval.is_signal() {
                fire(&self.on_signal_off);
            }
        }

        self.state.cursor.store(self.sequence.len(), Ordering::Release);
        debug!("playback finished");
    }

    fn cancelled(&self) -> bool {
        !matches!(self.cancel_rx.try_recv(), Err(TryRecvError::Empty))
    }
}

struct RunningGuard<'a>(&'a PlaybackState);

impl Drop for RunningGuard<'_> {
    fn drop(&mut self) {
        self.0.running.store(false, Ordering::Release);
    }
}

fn fire(callback: &Option<SignalCallback>) {
    if let Some(callback) = callback {
        callback();
    }
}
