//=========================================================================
// Dialogue System
//=========================================================================
//
// Typewriter dialogue: line progression, character reveal timing and
// drive modes.
//
// Architecture:
//   DialogueDirector (Click / Auto / Script)
//     └─ DialogueController
//          ├─ store: Arc<dyn DialogueStore>  → DialogueEntry by index
//          ├─ formatter: NameFormatter       → "{name}" substitution
//          ├─ view: DialogueView             → text / talker widgets
//          └─ signals: DialogueSignals       → index / character / line
//
// Flow:
//   update() → tick() → reveal one character → ... → line finished
//            → click / line pause → advance_to_next_line()
//
//=========================================================================

//=== Module Declarations =================================================

mod config;
mod controller;
mod director;
mod entry;
mod error;
mod name;
mod signal;
mod timer;

//=== Public API ==========================================================

pub use config::{DialogueConfig, DialogueMode, RevealIntervals};
pub use controller::{AdvanceOutcome, DialogueController, DialogueControllerBuilder, DialoguePhase};
pub use director::{DialogueDirector, DialogueState};
pub use entry::{DialogueAction, DialogueEntry, DialogueHolder, DialogueStore, ImageHandle};
pub use error::DialogueError;
pub use name::{NameFormatter, PlayerName, DEFAULT_NAME_PLACEHOLDER};
pub use signal::{DialogueSignals, Signal, Subscription};
pub use timer::DelayTimer;
