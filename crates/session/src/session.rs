//! Channel-driven navigation session
//!
//! One [`NavigationSession`] task owns one [`NavigationTracker`] and is its
//! only writer. Callers hold a cloneable [`SessionHandle`] and talk to the
//! task over an `mpsc` channel; commands are processed strictly in order.
//!
//! After every command that changes the tracker the task publishes a [`NavigationState`] snapshot on
//! a `watch` channel and forwards tracker events on a `broadcast` channel.
//!
//! Position fixes are fire-and-forget, like location-provider callbacks.
//! Lifecycle commands (load, start, stop) carry a `oneshot` reply so the
//! caller knows when they took effect.

use log::{debug, info, warn};
use tokio::sync::{broadcast, mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use wayfinder_core::{
    NavigationError, NavigationEvent, NavigationPosition, NavigationState, NavigationTracker,
    PositionOutcome, Route,
};

use crate::config::SessionConfig;
use crate::error::{Result, SessionError};
use crate::source::RouteSource;
use crate::types::RouteId;

/// Buffered events per subscriber before lagging subscribers drop events
const EVENT_CHANNEL_CAPACITY: usize = 64;

type Reply = oneshot::Sender<std::result::Result<(), NavigationError>>;

/// Commands accepted by the session task.
#[derive(Debug)]
pub enum SessionCommand {
    Load { route: Route, reply: Reply },
    Start { route: Route, reply: Reply },
    StartLoaded { reply: Reply },
    Position(NavigationPosition),
    Stop { reply: oneshot::Sender<()> },
    /// Acknowledged once every earlier command has been processed
    Flush { reply: oneshot::Sender<()> },
    Shutdown,
}

/// Session task state. Construct with [`NavigationSession::spawn`].
pub struct NavigationSession {
    tracker: NavigationTracker,
    commands: mpsc::Receiver<SessionCommand>,
    state_tx: watch::Sender<NavigationState>,
    events_tx: broadcast::Sender<NavigationEvent>,
}

impl NavigationSession {
    /// Build a session and its handle without spawning the task.
    pub fn new(config: &SessionConfig) -> (Self, SessionHandle) {
        let tracker = NavigationTracker::with_config(config.navigation_config());
        let (command_tx, commands) = mpsc::channel(config.channel_capacity.max(1));
        let (state_tx, state_rx) = watch::channel(tracker.state().clone());
        let (events_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        let handle = SessionHandle {
            commands: command_tx,
            state: state_rx,
            events: events_tx.clone(),
        };
        let session = Self {
            tracker,
            commands,
            state_tx,
            events_tx,
        };
        (session, handle)
    }

    /// Spawn the session task on the current tokio runtime.
    pub fn spawn(config: &SessionConfig) -> (SessionHandle, JoinHandle<()>) {
        let (session, handle) = Self::new(config);
        let task = tokio::spawn(session.run());
        (handle, task)
    }

    /// Process commands until shutdown or until every handle is dropped.
    pub async fn run(mut self) {
        info!(
            "navigation session started (arrival threshold {:.1} m)",
            self.tracker.config().arrival_threshold_m
        );
        while let Some(command) = self.commands.recv().await {
            if !self.handle_command(command) {
                break;
            }
        }
        info!("navigation session closed");
    }

    /// Apply one command. Returns `false` when the session should end.
    ///
    /// State is published only when a command changed it, and always before
    /// the reply, so a caller that awaited a reply observes its effect
    /// through [`SessionHandle::state`].
    fn handle_command(&mut self, command: SessionCommand) -> bool {
        match command {
            SessionCommand::Load { route, reply } => {
                let name = route.metadata().name.clone();
                let result = self.tracker.load(route);
                match &result {
                    Ok(()) => info!("route '{}' loaded", name),
                    Err(e) => warn!("load rejected: {}", e),
                }
                self.reply(reply, result);
            }
            SessionCommand::Start { route, reply } => {
                let name = route.metadata().name.clone();
                let result = self.tracker.start(route).map(|events| {
                    info!("navigation started on route '{}'", name);
                    self.publish(&events);
                });
                if let Err(e) = &result {
                    warn!("start rejected: {}", e);
                }
                self.reply(reply, result);
            }
            SessionCommand::StartLoaded { reply } => {
                let result = self.tracker.start_loaded().map(|events| {
                    info!("navigation started on loaded route");
                    self.publish(&events);
                });
                if let Err(e) = &result {
                    warn!("start rejected: {}", e);
                }
                self.reply(reply, result);
            }
            SessionCommand::Position(pos) => {
                if self.handle_position(pos) {
                    self.publish_state();
                }
            }
            SessionCommand::Stop { reply } => {
                let events = self.tracker.stop();
                if !events.is_empty() {
                    info!("navigation stopped");
                    self.publish(&events);
                    self.publish_state();
                }
                let _ = reply.send(());
            }
            SessionCommand::Flush { reply } => {
                let _ = reply.send(());
            }
            SessionCommand::Shutdown => return false,
        }
        true
    }

    /// Feed one fix to the tracker. Returns `true` when the state changed.
    fn handle_position(&mut self, pos: NavigationPosition) -> bool {
        match self.tracker.on_position(pos) {
            Ok(PositionOutcome::Updated(events)) => {
                let state = self.tracker.state();
                debug!(
                    "fix t={} -> target {:?}, next {:?} m, remaining {:?} m",
                    pos.timestamp_ms,
                    state.current_waypoint_index,
                    state.distance_to_next_waypoint,
                    state.total_distance_remaining
                );
                for event in &events {
                    match event {
                        NavigationEvent::WaypointReached(i) => info!("waypoint {} reached", i),
                        NavigationEvent::RouteCompleted => info!("route completed"),
                        _ => {}
                    }
                }
                self.publish(&events);
                true
            }
            Ok(PositionOutcome::Stale) => {
                debug!("stale fix ignored (t={})", pos.timestamp_ms);
                false
            }
            // Fixes still queued behind a stop are expected
            Err(NavigationError::NotNavigating { phase }) => {
                debug!("fix ignored while {}", phase);
                false
            }
            Err(e) => {
                warn!("fix rejected: {}", e);
                false
            }
        }
    }

    fn reply(&self, reply: Reply, result: std::result::Result<(), NavigationError>) {
        // Rejected commands leave the tracker untouched
        if result.is_ok() {
            self.publish_state();
        }
        let _ = reply.send(result);
    }

    fn publish_state(&self) {
        self.state_tx.send_replace(self.tracker.state().clone());
    }

    fn publish(&self, events: &[NavigationEvent]) {
        for event in events {
            // No subscribers is not an error
            let _ = self.events_tx.send(*event);
        }
    }
}

/// Cloneable handle to a running session.
#[derive(Clone)]
pub struct SessionHandle {
    commands: mpsc::Sender<SessionCommand>,
    state: watch::Receiver<NavigationState>,
    events: broadcast::Sender<NavigationEvent>,
}

impl SessionHandle {
    /// Load a route without starting navigation.
    pub async fn load(&self, route: Route) -> Result<()> {
        self.request(|reply| SessionCommand::Load { route, reply })
            .await
    }

    /// Start navigating a route.
    pub async fn start(&self, route: Route) -> Result<()> {
        self.request(|reply| SessionCommand::Start { route, reply })
            .await
    }

    /// Start navigating the previously loaded route.
    pub async fn start_loaded(&self) -> Result<()> {
        self.request(|reply| SessionCommand::StartLoaded { reply })
            .await
    }

    /// Fetch a route from a source, validate it and start navigating it.
    pub async fn start_from_source(&self, source: &dyn RouteSource, id: RouteId) -> Result<()> {
        let route = source.load_route(id).await?;
        self.start(route).await
    }

    /// Queue a position fix.
    pub async fn push_position(&self, pos: NavigationPosition) -> Result<()> {
        self.send(SessionCommand::Position(pos)).await
    }

    /// Stop navigation. Resolves once the tracker is back in Idle.
    pub async fn stop(&self) -> Result<()> {
        let (reply, rx) = oneshot::channel();
        self.send(SessionCommand::Stop { reply }).await?;
        rx.await.map_err(|_| SessionError::SessionClosed)
    }

    /// Wait until every command sent before this call has been processed.
    pub async fn flush(&self) -> Result<()> {
        let (reply, rx) = oneshot::channel();
        self.send(SessionCommand::Flush { reply }).await?;
        rx.await.map_err(|_| SessionError::SessionClosed)
    }

    /// Latest published state.
    pub fn state(&self) -> NavigationState {
        self.state.borrow().clone()
    }

    /// Receiver notified after every processed command.
    pub fn subscribe(&self) -> watch::Receiver<NavigationState> {
        self.state.clone()
    }

    /// Receiver of tracker events emitted from now on.
    pub fn subscribe_events(&self) -> broadcast::Receiver<NavigationEvent> {
        self.events.subscribe()
    }

    /// Ask the session task to exit after pending commands.
    pub async fn shutdown(&self) -> Result<()> {
        self.send(SessionCommand::Shutdown).await
    }

    async fn request<F>(&self, build: F) -> Result<()>
    where
        F: FnOnce(Reply) -> SessionCommand,
    {
        let (reply, rx) = oneshot::channel();
        self.send(build(reply)).await?;
        let result = rx.await.map_err(|_| SessionError::SessionClosed)?;
        result.map_err(SessionError::from)
    }

    async fn send(&self, command: SessionCommand) -> Result<()> {
        self.commands
            .send(command)
            .await
            .map_err(|_| SessionError::SessionClosed)
    }
}
