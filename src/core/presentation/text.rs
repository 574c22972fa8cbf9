//=========================================================================
// Text View
//=========================================================================
//
// Text and talker-name widgets driven by the dialogue controller.
//
//=========================================================================

//=== DialogueView ========================================================

/// Sink for the dialogue text and talker name.
///
/// The controller calls these whenever what should be on screen changes:
/// cleared on advance, grown on each reveal, completed on line finish.
pub trait DialogueView: Send {
    fn set_text(&mut self, text: &str);
    fn set_name(&mut self, name: &str);
}

//=== TextBuffer ==========================================================

/// In-memory [`DialogueView`] keeping the latest text and name.
///
/// Used as the default view for headless sessions and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    name: String,
    text_updates: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of `set_text` calls received.
    pub fn text_updates(&self) -> usize {
        self.text_updates
    }
}

impl DialogueView for TextBuffer {
    fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.text_updates += 1;
    }

    fn set_name(&mut self, name: &str) {
        self.name.clear();
        self.name.push_str(name);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
