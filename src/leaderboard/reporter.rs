use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Payload sent once per resolved catch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordCatch {
    pub user_id: String,
    pub weight: u32,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("leaderboard rejected the catch with HTTP {status}")]
    Rejected { status: u16 },
    #[error("leaderboard unreachable: {0}")]
    Transport(Box<ureq::Error>),
}

/// Receives a notification for every resolved catch. Must not block.
pub trait CatchReporter {
    fn record_catch(&mut self, event: RecordCatch);
}

impl CatchReporter for Box<dyn CatchReporter> {
    fn record_catch(&mut self, event: RecordCatch) {
        (**self).record_catch(event);
    }
}

/// Used when no leaderboard endpoint is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOnlyReporter;

impl CatchReporter for LogOnlyReporter {
    fn record_catch(&mut self, event: RecordCatch) {
        log::debug!(
            "no leaderboard configured, catch for {} (+{}) stays local",
            event.user_id,
            event.weight
        );
    }
}

/// Keeps every event in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryReporter {
    pub events: Vec<RecordCatch>,
}

impl CatchReporter for MemoryReporter {
    fn record_catch(&mut self, event: RecordCatch) {
        self.events.push(event);
    }
}

/// Blocking HTTP client for the leaderboard service.
#[derive(Debug, Clone)]
pub struct LeaderboardClient {
    agent: ureq::Agent,
    url: String,
}

impl LeaderboardClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(timeout).build(),
            url: url.into(),
        }
    }

    /// Sends one event and waits for the response.
    pub fn deliver(&self, event: &RecordCatch) -> Result<(), ReportError> {
        match self
            .agent
            .post(&self.url)
            .set("User-Agent", "lakeside")
            .send_json(event)
        {
            Ok(_) => Ok(()),
            Err(ureq::Error::Status(status, _)) => Err(ReportError::Rejected { status }),
            Err(e) => Err(ReportError::Transport(Box::new(e))),
        }
    }
}

const SHUTDOWN_POLL: Duration = Duration::from_millis(10);

/// Queues catches for a single delivery thread.
///
/// Dropping the reporter closes the queue and waits up to the request
/// timeout for the thread to drain it. Deliveries still pending after that
/// are logged and abandoned.
#[derive(Debug)]
pub struct HttpLeaderboard {
    sender: Option<mpsc::Sender<RecordCatch>>,
    worker: Option<JoinHandle<()>>,
    pending: Arc<AtomicUsize>,
    shutdown_wait: Duration,
}

impl HttpLeaderboard {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let client = LeaderboardClient::new(url, timeout);
        let (sender, receiver) = mpsc::channel::<RecordCatch>();
        let pending = Arc::new(AtomicUsize::new(0));

        let worker_pending = Arc::clone(&pending);
        let worker = thread::spawn(move || {
            for event in receiver {
                match client.deliver(&event) {
                    Ok(()) => log::debug!(
                        "leaderboard recorded +{} for {}",
                        event.weight,
                        event.user_id
                    ),
                    Err(e) => log::error!("leaderboard update failed for {}: {}", event.user_id, e),
                }
                worker_pending.fetch_sub(1, Ordering::SeqCst);
            }
        });

        Self {
            sender: Some(sender),
            worker: Some(worker),
            pending,
            shutdown_wait: timeout,
        }
    }

    /// Catches queued or in flight.
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }

    /// Closes the queue and waits up to `wait` for outstanding deliveries.
    /// Returns false if the delivery thread was still busy at the deadline.
    pub fn shutdown(&mut self, wait: Duration) -> bool {
        self.sender = None;
        let Some(worker) = self.worker.take() else {
            return true;
        };

        let deadline = Instant::now() + wait;
        while !worker.is_finished() && Instant::now() < deadline {
            thread::sleep(SHUTDOWN_POLL);
        }

        if !worker.is_finished() {
            log::warn!(
                "abandoning {} leaderboard deliveries still pending after {:?}",
                self.pending(),
                wait
            );
            return false;
        }
        if worker.join().is_err() {
            log::error!("leaderboard delivery thread panicked");
        }
        true
    }
}

impl CatchReporter for HttpLeaderboard {
    /// Queues the event so gameplay never waits on the network.
    fn record_catch(&mut self, event: RecordCatch) {
        let Some(sender) = &self.sender else {
            log::error!("leaderboard closed, catch for {} not sent", event.user_id);
            return;
        };
        self.pending.fetch_add(1, Ordering::SeqCst);
        if let Err(mpsc::SendError(event)) = sender.send(event) {
            self.pending.fetch_sub(1, Ordering::SeqCst);
            log::error!(
                "leaderboard delivery thread stopped, catch for {} not sent",
                event.user_id
            );
        }
    }
}

impl Drop for HttpLeaderboard {
    fn drop(&mut self) {
        self.shutdown(self.shutdown_wait);
    }
}
