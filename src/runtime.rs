//=========================================================================
// Dialogue Runtime
//
// Optional threaded driver for a dialogue.
//
// Architecture:
// ```text
//     RuntimeBuilder  ──build()──>  DialogueRuntime  ──spawn()──>  RuntimeHandle
//         │                              │                             │
//         ├─ with_tps()                  └─ forwards signals           ├─ send()
//         ├─ with_channel_capacity()        starts director            ├─ notifications()
//         └─ with_bindings()                spawns logic thread        └─ shutdown()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::thread::JoinHandle;

use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use log::{error, info, trace};

//=== Internal Dependencies ===============================================

use crate::core::dialogue::{DialogueDirector, DialogueError};
use crate::core::input::{AdvanceBindings, AdvanceTracker, InputEvent, MouseButton};
use crate::core::presentation::DialogueView;
use crate::core::CoreSystemsOrchestrator;

pub use crate::core::runtime_bridge::{DialogueNotification, RuntimeCommand};

//=== RuntimeBuilder ======================================================

/// Builder for configuring a [`DialogueRuntime`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (dialogue updates per second)
/// - **Channel capacity**: 128 commands
/// - **Bindings**: left mouse button advances
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use aetheric_dialogue::prelude::*;
///
/// let controller = DialogueController::builder()
///     .with_store(DialogueHolder::new().with_entry(DialogueEntry::new("Hello.", "Mara")))
///     .build()?;
/// let director = DialogueDirector::new(controller, &DialogueConfig::new());
///
/// let handle = RuntimeBuilder::new()
///     .with_tps(120.0)
///     .with_channel_capacity(256)
///     .build(director)
///     .spawn();
///
/// handle.click()?;
/// while let Ok(note) = handle.notifications().recv() {
///     if note == DialogueNotification::Finished {
///         break;
///     }
/// }
/// handle.join()?;
/// # Ok::<(), DialogueError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RuntimeBuilder {
    tps: f64,
    channel_capacity: usize,
    bindings: AdvanceBindings,
}

impl RuntimeBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            bindings: AdvanceBindings::default(),
        }
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the capacity of the host → runtime command channel.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Sets which inputs count as a click in Click mode.
    pub fn with_bindings(mut self, bindings: AdvanceBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Builds a runtime around `director`.
    pub fn build<V: DialogueView + 'static>(self, director: DialogueDirector<V>) -> DialogueRuntime<V> {
        info!(
            "Building dialogue runtime (TPS: {}, channel: {})",
            self.tps, self.channel_capacity
        );

        DialogueRuntime {
            director,
            tracker: AdvanceTracker::new(self.bindings),
            tps: self.tps,
            channel_capacity: self.channel_capacity,
        }
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== DialogueRuntime =====================================================

/// A configured dialogue ready to run on its own thread.
pub struct DialogueRuntime<V: DialogueView> {
    director: DialogueDirector<V>,
    tracker: AdvanceTracker,
    tps: f64,
    channel_capacity: usize,
}

impl<V: DialogueView + 'static> DialogueRuntime<V> {
    /// Starts the dialogue and returns a handle to drive it.
    ///
    /// # Lifecycle
    ///
    /// 1. Subscribes notification forwarders to the controller's signals
    /// 2. Starts the director (schedules the first line in Click/Auto)
    /// 3. Spawns the logic thread at the configured TPS
    /// 4. The thread ends on `Shutdown`, when every handle is dropped, or
    ///    after sending `DialogueNotification::Finished`
    pub fn spawn(mut self) -> RuntimeHandle {
        info!("Starting dialogue runtime (TPS: {})", self.tps);

        let (command_tx, command_rx) = bounded(self.channel_capacity);
        let (notify_tx, notify_rx) = unbounded();

        self.forward_signals(&notify_tx);
        self.director.start();

        let orchestrator = CoreSystemsOrchestrator::new(self.director, self.tracker);
        let thread = orchestrator.spawn_core_thread(command_rx, notify_tx, self.tps);

        RuntimeHandle {
            commands: command_tx,
            notifications: notify_rx,
            thread,
        }
    }

    fn forward_signals(&mut self, notifier: &Sender<DialogueNotification>) {
        let signals = self.director.controller_mut().signals_mut();

        let tx = notifier.clone();
        signals
            .index_changed
            .subscribe(move |index| forward(&tx, DialogueNotification::IndexChanged(*index)));

        let tx = notifier.clone();
        signals.character_revealed.subscribe(move |punctuation| {
            forward(&tx, DialogueNotification::CharacterRevealed { punctuation: *punctuation })
        });

        let tx = notifier.clone();
        signals.line_finished.subscribe(move |revealed| {
            forward(&tx, DialogueNotification::LineFinished { revealed: *revealed })
        });
    }
}

fn forward(notifier: &Sender<DialogueNotification>, notification: DialogueNotification) {
    if notifier.send(notification).is_err() {
        trace!("Dropped {:?}, no notification receiver", notification);
    }
}

//=== RuntimeHandle =======================================================

/// Host-side handle to a running dialogue.
pub struct RuntimeHandle {
    commands: Sender<RuntimeCommand>,
    notifications: Receiver<DialogueNotification>,
    thread: JoinHandle<Result<(), DialogueError>>,
}

impl RuntimeHandle {
    /// Sends a command to the logic thread.
    ///
    /// # Errors
    ///
    /// [`DialogueError::ChannelClosed`] once the logic thread has exited.
    pub fn send(&self, command: RuntimeCommand) -> Result<(), DialogueError> {
        self.commands
            .send(command)
            .map_err(|_| DialogueError::ChannelClosed)
    }

    /// Sends a left mouse button press and release.
    pub fn click(&self) -> Result<(), DialogueError> {
        self.send(RuntimeCommand::Inputs(
            InputEvent::click(MouseButton::Left).to_vec(),
        ))
    }

    /// Notifications forwarded from the dialogue, in emission order.
    pub fn notifications(&self) -> &Receiver<DialogueNotification> {
        &self.notifications
    }

    /// Asks the logic thread to stop and waits for it.
    pub fn shutdown(self) -> Result<(), DialogueError> {
        // The thread may already be gone if the dialogue finished.
        self.commands.send(RuntimeCommand::Shutdown).ok();
        self.join()
    }

    /// Waits for the logic thread to exit on its own.
    pub fn join(self) -> Result<(), DialogueError> {
        match self.thread.join() {
            Ok(result) => {
                info!("Dialogue thread terminated");
                result
            }
            Err(e) => {
                error!("Dialogue thread panicked: {:?}", e);
                Err(DialogueError::ThreadPanicked)
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
