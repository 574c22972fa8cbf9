//=========================================================================
// Runtime Bridge
//=========================================================================
//
// Bridges the host thread with the dialogue logic thread.
//
// Components:
// - `interface`: command and notification types (the contract)
// - `command_collector`: logic-side command collection and buffering
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod command_collector;
pub(crate) mod interface;

//=== Public API ==========================================================

pub(crate) use command_collector::{CommandCollector, TickControl};
pub use interface::{DialogueNotification, RuntimeCommand};
