//=========================================================================
// Backdrop Binding
//=========================================================================
//
// Swaps background and portrait images when the current line changes.
//
// Architecture:
//   controller.signals.index_changed ──→ DialogueBackground
//                                          ├─ store.entry(index)
//                                          └─ BackdropView::set_*()
//
// Only fields present on the entry are applied; a `None` field keeps the
// previous image on screen.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::{Arc, Mutex};

use log::{trace, warn};

//=== Internal Dependencies ===============================================

use super::DialogueView;
use crate::core::dialogue::{DialogueController, DialogueStore, ImageHandle, Subscription};

//=== BackdropView ========================================================

/// Image widgets for the background and the two portraits.
pub trait BackdropView: Send {
    fn set_background(&mut self, image: &ImageHandle);
    fn set_left_portrait(&mut self, image: &ImageHandle);
    fn set_right_portrait(&mut self, image: &ImageHandle);
}

/// A shared view can be bound to a controller and still be inspected.
impl<T: BackdropView> BackdropView for Arc<Mutex<T>> {
    fn set_background(&mut self, image: &ImageHandle) {
        if let Ok(mut view) = self.lock() {
            view.set_background(image);
        }
    }

    fn set_left_portrait(&mut self, image: &ImageHandle) {
        if let Ok(mut view) = self.lock() {
            view.set_left_portrait(image);
        }
    }

    fn set_right_portrait(&mut self, image: &ImageHandle) {
        if let Ok(mut view) = self.lock() {
            view.set_right_portrait(image);
        }
    }
}

//=== Backdrop ============================================================

/// In-memory [`BackdropView`] holding the images currently on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Backdrop {
    pub background: Option<ImageHandle>,
    pub left_portrait: Option<ImageHandle>,
    pub right_portrait: Option<ImageHandle>,
}

impl Backdrop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a new backdrop for sharing with a [`DialogueBackground`].
    pub fn shared() -> Arc<Mutex<Self>> {
        Arc::new(Mutex::new(Self::new()))
    }
}

impl BackdropView for Backdrop {
    fn set_background(&mut self, image: &ImageHandle) {
        self.background = Some(image.clone());
    }

    fn set_left_portrait(&mut self, image: &ImageHandle) {
        self.left_portrait = Some(image.clone());
    }

    fn set_right_portrait(&mut self, image: &ImageHandle) {
        self.right_portrait = Some(image.clone());
    }
}

//=== DialogueBackground ==================================================

/// Applies the images of the current entry to a [`BackdropView`].
///
/// # Example
///
/// ```
/// use aetheric_dialogue::prelude::*;
///
/// let mut dialogue = DialogueController::builder()
///     .with_store(
///         DialogueHolder::new()
///             .with_entry(DialogueEntry::new("Hi", "Mara").with_background("bg/dock.png"))
///             .with_entry(DialogueEntry::new("Bye", "Mara")),
///     )
///     .build()?;
///
/// let backdrop = Backdrop::shared();
/// DialogueBackground::new(dialogue.store().clone(), backdrop.clone()).attach(&mut dialogue);
///
/// dialogue.advance_to_next_line()?;
/// dialogue.advance_to_next_line()?;
///
/// let shown = backdrop.lock().unwrap();
/// assert_eq!(shown.background.as_ref().map(ImageHandle::path), Some("bg/dock.png"));
/// # Ok::<(), DialogueError>(())
/// ```
pub struct DialogueBackground<B: BackdropView> {
    store: Arc<dyn DialogueStore>,
    view: B,
}

impl<B: BackdropView + 'static> DialogueBackground<B> {
    pub fn new(store: Arc<dyn DialogueStore>, view: B) -> Self {
        Self { store, view }
    }

    /// Applies the non-empty image fields of the entry at `index`.
    pub fn change_background(&mut self, index: usize) {
        let Some(entry) = self.store.entry(index) else {
            warn!("No dialogue entry at index {}, backdrop unchanged", index);
            return;
        };

        trace!("Applying backdrop of line {}", index);

        if let Some(image) = &entry.background {
            self.view.set_background(image);
        }
        if let Some(image) = &entry.left_portrait {
            self.view.set_left_portrait(image);
        }
        if let Some(image) = &entry.right_portrait {
            self.view.set_right_portrait(image);
        }
    }

    /// Shows the first entry's images, then subscribes this binding to the
    /// controller's line changes.
    pub fn attach<V: DialogueView>(mut self, controller: &mut DialogueController<V>) -> Subscription {
        if !self.store.is_empty() {
            self.change_background(0);
        }

        controller
            .signals_mut()
            .index_changed
            .subscribe(move |index| self.change_background(*index))
    }

    pub fn view(&self) -> &B {
        &self.view
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
