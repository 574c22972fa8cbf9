//=========================================================================
// Dialogue Entries
//=========================================================================
//
// Data model for dialogue lines and the store contract consumed by the
// controller.
//
// Architecture:
//   DialogueStore (trait) ← DialogueHolder (Vec-backed implementation)
//        │
//        └─ entry(index) → DialogueEntry { text, talker, images, on_show }
//
// Entries are immutable from the controller's point of view. The store is
// shared (`Arc<dyn DialogueStore>`) between the controller and the
// presentation bindings.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::sync::Arc;

//=== ImageHandle =========================================================

/// Identifier of an image asset (background or portrait).
///
/// The dialogue never renders images; it only decides which handle the
/// presentation layer should show. Cloning is cheap.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageHandle(Arc<str>);

impl ImageHandle {
    /// Creates a handle from an asset path or name.
    pub fn new(path: impl AsRef<str>) -> Self {
        Self(Arc::from(path.as_ref()))
    }

    /// Returns the asset path this handle refers to.
    pub fn path(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageHandle {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for ImageHandle {
    fn from(path: String) -> Self {
        Self(Arc::from(path))
    }
}

impl fmt::Display for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//=== DialogueAction ======================================================

/// Callable fired once when its line is shown.
pub type DialogueAction = Arc<dyn Fn() + Send + Sync>;

//=== DialogueEntry =======================================================

/// One line of dialogue.
///
/// `text` and `talker` are raw: they may contain the player name
/// placeholder, which the controller substitutes through its
/// [`NameFormatter`](super::NameFormatter).
///
/// # Example
///
/// ```
/// use aetheric_dialogue::prelude::*;
///
/// let entry = DialogueEntry::new("Welcome, {name}.", "Guide")
///     .with_background("bg/harbor.png")
///     .with_left_portrait("portraits/guide.png");
///
/// assert_eq!(entry.talker, "Guide");
/// assert!(entry.right_portrait.is_none());
/// ```
#[derive(Clone, Default)]
pub struct DialogueEntry {
    pub text: String,
    pub talker: String,
    pub background: Option<ImageHandle>,
    pub left_portrait: Option<ImageHandle>,
    pub right_portrait: Option<ImageHandle>,
    pub on_show: Option<DialogueAction>,
}

impl DialogueEntry {
    /// Creates an entry with text and talker and no images or event.
    pub fn new(text: impl Into<String>, talker: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            talker: talker.into(),
            ..Self::default()
        }
    }

    pub fn with_background(mut self, image: impl Into<ImageHandle>) -> Self {
        self.background = Some(image.into());
        self
    }

    pub fn with_left_portrait(mut self, image: impl Into<ImageHandle>) -> Self {
        self.left_portrait = Some(image.into());
        self
    }

    pub fn with_right_portrait(mut self, image: impl Into<ImageHandle>) -> Self {
        self.right_portrait = Some(image.into());
        self
    }

    /// Attaches a callable fired when this line is advanced to.
    pub fn on_show<F>(mut self, action: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_show = Some(Arc::new(action));
        self
    }
}

//--- Trait Implementations -----------------------------------------------

impl fmt::Debug for DialogueEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogueEntry")
            .field("text", &self.text)
            .field("talker", &self.talker)
            .field("background", &self.background)
            .field("left_portrait", &self.left_portrait)
            .field("right_portrait", &self.right_portrait)
            .field("on_show", &self.on_show.is_some())
            .finish()
    }
}

//=== DialogueStore =======================================================

/// Ordered, index-addressable sequence of dialogue entries.
///
/// The controller only queries indices in `0..len()`; producing an
/// out-of-range index is how it detects the end of the dialogue.
pub trait DialogueStore: Send + Sync {
    /// Returns the entry at `index`, or `None` when out of range.
    fn entry(&self, index: usize) -> Option<&DialogueEntry>;

    /// Number of entries in the sequence.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the event to invoke when `index` is shown.
    ///
    /// Defaults to the entry's `on_show` field.
    fn event_at(&self, index: usize) -> Option<&DialogueAction> {
        self.entry(index).and_then(|entry| entry.on_show.as_ref())
    }
}

//=== DialogueHolder ======================================================

/// In-memory [`DialogueStore`] backed by a `Vec`.
#[derive(Debug, Clone, Default)]
pub struct DialogueHolder {
    entries: Vec<DialogueEntry>,
}

impl DialogueHolder {
    /// Creates an empty holder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry to the end of the sequence.
    pub fn push(&mut self, entry: DialogueEntry) {
        self.entries.push(entry);
    }

    /// Fluent variant of [`push`](Self::push).
    pub fn with_entry(mut self, entry: DialogueEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Returns all entries in order.
    pub fn entries(&self) -> &[DialogueEntry] {
        &self.entries
    }
}

impl DialogueStore for DialogueHolder {
    fn entry(&self, index: usize) -> Option<&DialogueEntry> {
        self.entries.get(index)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl From<Vec<DialogueEntry>> for DialogueHolder {
    fn from(entries: Vec<DialogueEntry>) -> Self {
        Self { entries }
    }
}

impl FromIterator<DialogueEntry> for DialogueHolder {
    fn from_iter<I: IntoIterator<Item = DialogueEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
