//! Tokio host for a `Session`.
//!
//! The host is a single task that owns the session and processes every
//! event in order:
//!
//! - commands from `HostHandle` (start, guess, snapshot, shutdown)
//! - countdown ticks from a ticker task
//!
//! The ticker is a `tokio::time::interval` loop spawned when the session
//! arms a countdown epoch and aborted as soon as that epoch is no longer
//! armed (game over, restart, shutdown). Ticks already queued when the
//! ticker is aborted still carry the old epoch and are dropped by the
//! session.
//!
//! After each event the latest `SessionSnapshot` is published on a watch
//! channel for presenters.

use std::ops::ControlFlow;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::core::RandomSource;
use crate::session::{CountdownEpoch, GuessOutcome, Session, SessionSnapshot, TickOutcome};

const COMMAND_BUFFER: usize = 32;
const TICK_BUFFER: usize = 8;
/// `interval` panics on a zero period.
const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Error)]
pub enum HostError {
    #[error("session host has stopped")]
    Stopped,
}

#[derive(Debug)]
enum Command {
    Start(oneshot::Sender<SessionSnapshot>),
    Guess(usize, oneshot::Sender<GuessOutcome>),
    Snapshot(oneshot::Sender<SessionSnapshot>),
    Shutdown,
}

/// Cloneable handle to a running host.
#[derive(Clone, Debug)]
pub struct HostHandle {
    commands: mpsc::Sender<Command>,
    snapshots: watch::Receiver<SessionSnapshot>,
}

impl HostHandle {
    /// Start or restart the game.
    pub async fn start(&self) -> Result<SessionSnapshot, HostError> {
        self.request(Command::Start).await
    }

    /// Guess tile `index`.
    pub async fn guess(&self, index: usize) -> Result<GuessOutcome, HostError> {
        self.request(|reply| Command::Guess(index, reply)).await
    }

    /// Current session state.
    pub async fn snapshot(&self) -> Result<SessionSnapshot, HostError> {
        self.request(Command::Snapshot).await
    }

    /// Receiver that sees a new snapshot after every processed event.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshots.clone()
    }

    /// Ask the host to stop. The session is returned through the host's
    /// `JoinHandle`.
    pub async fn shutdown(&self) -> Result<(), HostError> {
        self.commands
            .send(Command::Shutdown)
            .await
            .map_err(|_| HostError::Stopped)
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> Result<T, HostError> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(make(reply))
            .await
            .map_err(|_| HostError::Stopped)?;
        response.await.map_err(|_| HostError::Stopped)
    }
}

/// Spawn a host task owning `session`.
///
/// Must be called from within a tokio runtime. The task ends when
/// `shutdown` is called or every handle is dropped, and yields the session.
pub fn spawn_host<R>(session: Session<R>) -> (HostHandle, JoinHandle<Session<R>>)
where
    R: RandomSource + Send + 'static,
{
    let (commands_tx, commands_rx) = mpsc::channel(COMMAND_BUFFER);
    let (snapshots_tx, snapshots_rx) = watch::channel(session.snapshot());

    let host = Host {
        session,
        ticker: None,
        snapshots: snapshots_tx,
    };
    let task = tokio::spawn(host.run(commands_rx));

    let handle = HostHandle {
        commands: commands_tx,
        snapshots: snapshots_rx,
    };
    (handle, task)
}

struct Host<R> {
    session: Session<R>,
    ticker: Option<(CountdownEpoch, JoinHandle<()>)>,
    snapshots: watch::Sender<SessionSnapshot>,
}

impl<R: RandomSource> Host<R> {
    async fn run(mut self, mut commands: mpsc::Receiver<Command>) -> Session<R> {
        let (ticks_tx, mut ticks_rx) = mpsc::channel(TICK_BUFFER);

        loop {
            tokio::select! {
                biased;

                Some(epoch) = ticks_rx.recv() => {
                    self.on_tick(epoch);
                }
                command = commands.recv() => {
                    let Some(command) = command else { break };
                    if self.on_command(command).is_break() {
                        break;
                    }
                }
            }

            self.sync_ticker(&ticks_tx);
        }

        self.stop_ticker();
        info!(best_score = self.session.best_score(), "session host stopped");
        self.session
    }

    fn on_command(&mut self, command: Command) -> ControlFlow<()> {
        match command {
            Command::Start(reply) => {
                let snapshot = self.session.start();
                let _ = reply.send(snapshot);
                self.publish();
            }
            Command::Guess(index, reply) => {
                let outcome = self.session.guess(index);
                let _ = reply.send(outcome);
                if outcome != GuessOutcome::Ignored {
                    self.publish();
                }
            }
            Command::Snapshot(reply) => {
                let _ = reply.send(self.session.snapshot());
            }
            Command::Shutdown => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    fn on_tick(&mut self, epoch: CountdownEpoch) {
        match self.session.tick_for(epoch) {
            TickOutcome::Ignored => {}
            TickOutcome::Counted { .. } => self.publish(),
            TickOutcome::Expired { final_score, new_best } => {
                debug!(%epoch, final_score, new_best, "countdown expired");
                self.publish();
            }
        }
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.session.snapshot());
    }

    /// Make the running ticker match the session's armed epoch.
    fn sync_ticker(&mut self, ticks: &mpsc::Sender<CountdownEpoch>) {
        let armed = self.session.countdown_epoch();
        let running = self.ticker.as_ref().map(|(epoch, _)| *epoch);
        if armed == running {
            return;
        }

        self.stop_ticker();
        if let Some(epoch) = armed {
            let period = self.session.config().tick_interval().max(MIN_TICK_INTERVAL);
            let ticks = ticks.clone();
            let task = tokio::spawn(async move {
                let mut interval = tokio::time::interval_at(Instant::now() + period, period);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    interval.tick().await;
                    if ticks.send(epoch).await.is_err() {
                        break;
                    }
                }
            });
            debug!(%epoch, ?period, "ticker started");
            self.ticker = Some((epoch, task));
        }
    }

    fn stop_ticker(&mut self) {
        if let Some((epoch, task)) = self.ticker.take() {
            task.abort();
            debug!(%epoch, "ticker aborted");
        }
    }
}
