//=========================================================================
// Dialogue Errors
//=========================================================================
//
// Error taxonomy for the dialogue subsystem.
//
// Reaching the end of the entry sequence is NOT an error: it is the
// terminal `Aborted` transition reported as `AdvanceOutcome::Finished`.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== DialogueError =======================================================

/// Errors produced while building or driving a dialogue.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DialogueError {
    /// The controller was built without an entry store.
    ///
    /// Fatal at initialization: the dialogue never starts.
    #[error("Dialogue store could not be found, dialogue is disabled")]
    MissingStore,

    /// The store reported `len` entries but had nothing at `index`.
    #[error("Dialogue store has no entry at index {index} (length {len})")]
    MissingEntry { index: usize, len: usize },

    /// The runtime command channel is disconnected.
    #[error("Dialogue runtime channel is closed")]
    ChannelClosed,

    /// The runtime logic thread panicked.
    #[error("Dialogue runtime thread panicked")]
    ThreadPanicked,
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_entry_message_names_index_and_length() {
        let err = DialogueError::MissingEntry { index: 4, len: 7 };
        assert_eq!(
            err.to_string(),
            "Dialogue store has no entry at index 4 (length 7)"
        );
    }

    #[test]
    fn missing_store_is_reported() {
        assert!(DialogueError::MissingStore
            .to_string()
            .contains("could not be found"));
    }
}
