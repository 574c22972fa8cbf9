//=========================================================================
// Dialogue Director
//=========================================================================
//
// Drive-mode policies layered on top of the controller.
//
// Architecture:
//   DialogueDirector
//     ├─ controller: DialogueController (reveal + advance)
//     ├─ line_pause: DelayTimer         (start-up / inter-line wait)
//     └─ mode: Click | Auto | Script
//
// Per update: controller.tick() → line pause countdown → mode policy
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::{
    AdvanceOutcome, DelayTimer, DialogueConfig, DialogueController, DialogueError, DialogueMode,
    DialoguePhase,
};
use crate::core::presentation::{DialogueView, TextBuffer};

//=== DialogueState =======================================================

/// Externally visible state of a directed dialogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogueState {
    /// Nothing shown yet and nothing scheduled.
    Idle,

    /// Updates are frozen.
    Paused,

    /// Characters of the current line are being revealed.
    Revealing,

    /// The line is fully shown; waiting for a trigger.
    LineComplete,

    /// A start-up or inter-line pause is running.
    WaitingBetweenLines,

    /// The dialogue is over.
    Aborted,
}

//=== DialogueDirector ====================================================

/// Applies a [`DialogueMode`] to a [`DialogueController`].
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use aetheric_dialogue::prelude::*;
///
/// let controller = DialogueController::builder()
///     .with_store(DialogueHolder::new().with_entry(DialogueEntry::new("Ok", "Mara")))
///     .build()?;
///
/// let config = DialogueConfig::new()
///     .with_mode(DialogueMode::Auto)
///     .with_line_pause(Duration::from_millis(200));
///
/// let mut director = DialogueDirector::new(controller, &config);
/// director.start();
/// assert_eq!(director.state(), DialogueState::WaitingBetweenLines);
///
/// director.update(Duration::from_millis(200), false)?;
/// assert_eq!(director.controller().current_index(), Some(0));
/// # Ok::<(), DialogueError>(())
/// ```
pub struct DialogueDirector<V: DialogueView = TextBuffer> {
    controller: DialogueController<V>,
    mode: DialogueMode,
    line_pause: Duration,
    line_timer: DelayTimer,
}

impl<V: DialogueView> DialogueDirector<V> {
    //--- Construction -----------------------------------------------------

    /// Wraps a controller using the mode and line pause from `config`.
    ///
    /// The controller keeps the reveal intervals it was built with.
    pub fn new(controller: DialogueController<V>, config: &DialogueConfig) -> Self {
        Self {
            controller,
            mode: config.mode,
            line_pause: config.line_pause,
            line_timer: DelayTimer::new(),
        }
    }

    /// Schedules the first line.
    ///
    /// Click and Auto modes wait for the line pause before showing the
    /// first line. Script mode waits for an explicit advance.
    pub fn start(&mut self) {
        info!("Starting dialogue in {:?} mode", self.mode);

        match self.mode {
            DialogueMode::Click | DialogueMode::Auto => self.line_timer.start(self.line_pause),
            DialogueMode::Script => {}
        }
    }

    //--- Update Loop ------------------------------------------------------

    /// Runs one frame.
    ///
    /// `clicked` is whether the advance input was pressed this frame; it is
    /// only consulted in Click mode. Does nothing while paused or after
    /// the dialogue finished.
    pub fn update(&mut self, elapsed: Duration, clicked: bool) -> Result<(), DialogueError> {
        if self.controller.is_paused() || self.controller.is_aborted() {
            return Ok(());
        }

        self.controller.tick(elapsed);

        if self.line_timer.tick(elapsed) {
            self.controller.advance_to_next_line()?;
        }

        match self.mode {
            DialogueMode::Click => {
                if clicked {
                    self.line_timer.cancel();
                    self.controller.request_advance_or_skip()?;
                }
            }
            DialogueMode::Auto => {
                let waiting = matches!(
                    self.controller.phase(),
                    DialoguePhase::Idle | DialoguePhase::LineComplete
                );
                if waiting && !self.line_timer.is_running() {
                    debug!("Scheduling next line in {:?}", self.line_pause);
                    self.line_timer.start(self.line_pause);
                }
            }
            DialogueMode::Script => {}
        }

        Ok(())
    }

    //--- Scripted Control -------------------------------------------------

    /// Advances to the next line, cancelling any pending line pause.
    pub fn advance(&mut self) -> Result<AdvanceOutcome, DialogueError> {
        self.line_timer.cancel();
        self.controller.advance_to_next_line()
    }

    /// Skips the reveal or advances, cancelling any pending line pause.
    pub fn request_advance_or_skip(&mut self) -> Result<AdvanceOutcome, DialogueError> {
        self.line_timer.cancel();
        self.controller.request_advance_or_skip()
    }

    /// Freezes or resumes both the reveal and the line pause.
    pub fn set_paused(&mut self, paused: bool) {
        self.controller.set_paused(paused);
    }

    pub fn is_paused(&self) -> bool {
        self.controller.is_paused()
    }

    /// Renames the player for lines shown from now on.
    pub fn set_player_name(&mut self, name: &str) {
        self.controller.set_player_name(name);
    }

    //--- Mode -------------------------------------------------------------

    pub fn mode(&self) -> DialogueMode {
        self.mode
    }

    /// Switches the drive mode. A pending line pause is dropped.
    pub fn set_mode(&mut self, mode: DialogueMode) {
        if self.mode != mode {
            debug!("Dialogue mode {:?} -> {:?}", self.mode, mode);
            self.line_timer.cancel();
            self.mode = mode;
        }
    }

    pub fn line_pause(&self) -> Duration {
        self.line_pause
    }

    pub fn set_line_pause(&mut self, pause: Duration) {
        self.line_pause = pause;
    }

    //--- Query API --------------------------------------------------------

    pub fn state(&self) -> DialogueState {
        if self.controller.is_aborted() {
            return DialogueState::Aborted;
        }
        if self.controller.is_paused() {
            return DialogueState::Paused;
        }
        if self.line_timer.is_running() {
            return DialogueState::WaitingBetweenLines;
        }

        match self.controller.phase() {
            DialoguePhase::Idle => DialogueState::Idle,
            DialoguePhase::Revealing => DialogueState::Revealing,
            DialoguePhase::LineComplete => DialogueState::LineComplete,
            DialoguePhase::Aborted => DialogueState::Aborted,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.controller.is_aborted()
    }

    pub fn controller(&self) -> &DialogueController<V> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut DialogueController<V> {
        &mut self.controller
    }

    pub fn into_controller(self) -> DialogueController<V> {
        self.controller
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
