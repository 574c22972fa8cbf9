//=========================================================================
// Runtime Bridge Interface
//=========================================================================
//
// Messages crossing the boundary between the host thread and the dialogue
// logic thread.
//
//   Host ── RuntimeCommand ──→ logic thread ── DialogueNotification ──→ Host
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== RuntimeCommand ======================================================

/// Commands sent from the host to the dialogue runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeCommand {
    /// Input events gathered by the host for one frame.
    ///
    /// Matched against the advance bindings in Click mode.
    Inputs(Vec<InputEvent>),

    /// Scripted advance to the next line.
    Advance,

    /// Scripted click: skip the reveal or advance.
    SkipOrAdvance,

    /// Pause or resume the dialogue.
    SetPaused(bool),

    /// Rename the player for lines shown from now on.
    SetPlayerName(String),

    /// Stop the logic thread.
    Shutdown,
}

//=== DialogueNotification ================================================

/// Notifications forwarded from the controller to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogueNotification {
    /// A new line became current.
    IndexChanged(usize),

    /// One character was revealed.
    CharacterRevealed { punctuation: bool },

    /// The current line is fully shown.
    LineFinished { revealed: usize },

    /// The dialogue advanced past its last line. Sent once, last.
    Finished,
}
