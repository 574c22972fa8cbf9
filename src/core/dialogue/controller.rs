//=========================================================================
// Dialogue Controller
//=========================================================================
//
// Progression / typewriter state machine.
//
// Architecture:
// ```text
//            advance()                 tick() × N              tick()
//   Idle ───────────────→ Revealing ─────────────→ Revealing ───────→ LineComplete
//                            │  ↑                                        │
//                            │  └──────────────── advance() ─────────────┘
//                            │ request_advance_or_skip()
//                            └──────────────────→ LineComplete
//
//   advance() past the last entry ──→ Aborted (terminal)
// ```
//
// Per-character delays are tracked as time remaining (`DelayTimer`) and
// counted down by the caller-supplied elapsed time on each tick. Only one
// character is revealed per tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info, trace, warn};
use unicode_segmentation::UnicodeSegmentation;

//=== Internal Dependencies ===============================================

use super::{
    DelayTimer, DialogueError, DialogueSignals, DialogueStore, NameFormatter, PlayerName,
    RevealIntervals,
};
use crate::core::presentation::{DialogueView, TextBuffer};

//=== DialoguePhase =======================================================

/// Progress of the controller through the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialoguePhase {
    /// No line has been shown yet.
    Idle,

    /// Characters of the current line are being revealed.
    Revealing,

    /// The whole line is shown; waiting for an advance trigger.
    LineComplete,

    /// Advanced past the last entry. Terminal.
    Aborted,
}

//=== AdvanceOutcome ======================================================

/// Result of an advance or skip request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The line at this index became current.
    Line(usize),

    /// The reveal animation of the current line was completed instantly.
    Skipped,

    /// The dialogue is over; nothing more will be shown.
    Finished,
}

//=== DialogueControllerBuilder ===========================================

/// Builder for [`DialogueController`].
///
/// A store is required. Defaults: [`PlayerName`] with an empty name,
/// [`RevealIntervals::default`], [`TextBuffer`] view.
pub struct DialogueControllerBuilder<V: DialogueView> {
    store: Option<Arc<dyn DialogueStore>>,
    formatter: Box<dyn NameFormatter>,
    intervals: RevealIntervals,
    view: V,
}

impl DialogueControllerBuilder<TextBuffer> {
    /// Creates a builder with default settings and no store.
    pub fn new() -> Self {
        Self {
            store: None,
            formatter: Box::new(PlayerName::default()),
            intervals: RevealIntervals::default(),
            view: TextBuffer::new(),
        }
    }
}

impl Default for DialogueControllerBuilder<TextBuffer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: DialogueView> DialogueControllerBuilder<V> {
    /// Sets the entry store, taking ownership of it.
    pub fn with_store<S>(self, store: S) -> Self
    where
        S: DialogueStore + 'static,
    {
        self.with_shared_store(Arc::new(store))
    }

    /// Sets an entry store shared with other bindings.
    pub fn with_shared_store(mut self, store: Arc<dyn DialogueStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: NameFormatter + 'static,
    {
        self.formatter = Box::new(formatter);
        self
    }

    pub fn with_intervals(mut self, intervals: RevealIntervals) -> Self {
        self.intervals = intervals;
        self
    }

    /// Replaces the text/name view.
    pub fn with_view<W: DialogueView>(self, view: W) -> DialogueControllerBuilder<W> {
        DialogueControllerBuilder {
            store: self.store,
            formatter: self.formatter,
            intervals: self.intervals,
            view,
        }
    }

    /// Builds the controller in the [`DialoguePhase::Idle`] phase.
    ///
    /// # Errors
    ///
    /// [`DialogueError::MissingStore`] if no store was provided.
    pub fn build(self) -> Result<DialogueController<V>, DialogueError> {
        let Some(store) = self.store else {
            error!("Dialogue store could not be found, dialogue is disabled");
            return Err(DialogueError::MissingStore);
        };

        if store.is_empty() {
            warn!("Dialogue store is empty, the first advance will finish the dialogue");
        }

        info!("Building dialogue controller ({} entries)", store.len());

        Ok(DialogueController {
            store,
            formatter: self.formatter,
            intervals: self.intervals,
            view: self.view,
            signals: DialogueSignals::default(),
            phase: DialoguePhase::Idle,
            current_index: None,
            full_text: String::new(),
            talker_name: String::new(),
            grapheme_ends: Vec::new(),
            reveal_cursor: 0,
            char_timer: DelayTimer::new(),
            name_shown: false,
            paused: false,
        })
    }
}

//=== DialogueController ==================================================

/// Reveals dialogue lines character by character and advances through
/// the entry store.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use aetheric_dialogue::prelude::*;
///
/// let store = DialogueHolder::new()
///     .with_entry(DialogueEntry::new("Hi.", "{name}"))
///     .with_entry(DialogueEntry::new("Bye.", "Mara"));
///
/// let mut dialogue = DialogueController::builder()
///     .with_store(store)
///     .with_formatter(PlayerName::new("Avery"))
///     .with_intervals(RevealIntervals::uniform(Duration::from_millis(100)))
///     .build()?;
///
/// dialogue.advance_to_next_line()?;
/// for _ in 0..3 {
///     dialogue.tick(Duration::from_millis(100));
/// }
///
/// assert_eq!(dialogue.revealed_text(), "Hi.");
/// assert_eq!(dialogue.view().name(), "Avery");
/// assert!(dialogue.is_line_complete());
/// # Ok::<(), DialogueError>(())
/// ```
pub struct DialogueController<V: DialogueView = TextBuffer> {
    store: Arc<dyn DialogueStore>,
    formatter: Box<dyn NameFormatter>,
    intervals: RevealIntervals,
    view: V,
    signals: DialogueSignals,

    //--- Progression State ------------------------------------------------
    phase: DialoguePhase,
    current_index: Option<usize>,
    full_text: String,
    talker_name: String,
    /// Byte offset just past each grapheme of `full_text`.
    grapheme_ends: Vec<usize>,
    reveal_cursor: usize,
    char_timer: DelayTimer,
    name_shown: bool,
    paused: bool,
}

impl DialogueController<TextBuffer> {
    /// Starts building a controller.
    pub fn builder() -> DialogueControllerBuilder<TextBuffer> {
        DialogueControllerBuilder::new()
    }
}

impl<V: DialogueView> DialogueController<V> {
    //--- Advance ----------------------------------------------------------

    /// Moves to the next entry and resets the reveal state.
    ///
    /// The first call selects index 0. Advancing past the last entry clears
    /// the text and name for good and returns [`AdvanceOutcome::Finished`];
    /// so does any call after that.
    ///
    /// # Errors
    ///
    /// [`DialogueError::MissingEntry`] if the store has no entry at an
    /// index below its length. The controller aborts.
    pub fn advance_to_next_line(&mut self) -> Result<AdvanceOutcome, DialogueError> {
        if self.phase == DialoguePhase::Aborted {
            return Ok(AdvanceOutcome::Finished);
        }

        self.reset_line();

        let index = self.current_index.map_or(0, |index| index + 1);
        self.current_index = Some(index);

        let len = self.store.len();
        if index >= len {
            info!("Dialogue finished after {} entries", len);
            self.abort();
            return Ok(AdvanceOutcome::Finished);
        }

        let Some(entry) = self.store.entry(index) else {
            error!("Dialogue store has no entry at index {} (length {})", index, len);
            self.abort();
            return Err(DialogueError::MissingEntry { index, len });
        };

        self.full_text = self.formatter.format(&entry.text);
        self.talker_name = self.formatter.format(&entry.talker);
        self.grapheme_ends = grapheme_ends(&self.full_text);

        debug!(
            "Advancing to line {} ({} characters, talker {:?})",
            index,
            self.grapheme_ends.len(),
            self.talker_name
        );

        if let Some(action) = self.store.event_at(index) {
            action();
        }

        self.phase = DialoguePhase::Revealing;
        self.signals.index_changed.emit(&index);

        Ok(AdvanceOutcome::Line(index))
    }

    /// Click behavior: skips the reveal animation if the line is still
    /// being revealed, otherwise advances.
    pub fn request_advance_or_skip(&mut self) -> Result<AdvanceOutcome, DialogueError> {
        match self.phase {
            DialoguePhase::Revealing => {
                debug!("Skipping reveal of line {:?}", self.current_index);
                self.finish_line();
                Ok(AdvanceOutcome::Skipped)
            }
            DialoguePhase::Idle | DialoguePhase::LineComplete => self.advance_to_next_line(),
            DialoguePhase::Aborted => Ok(AdvanceOutcome::Finished),
        }
    }

    //--- Tick -------------------------------------------------------------

    /// Advances reveal timing by `elapsed`.
    ///
    /// Reveals at most one character, and only once the delay scheduled by
    /// the previous character has run out. Does nothing while paused or
    /// when no line is being revealed.
    pub fn tick(&mut self, elapsed: Duration) {
        if self.paused || self.phase != DialoguePhase::Revealing {
            return;
        }

        self.char_timer.tick(elapsed);
        self.show_name();

        if self.reveal_cursor < self.line_len() {
            if self.char_timer.is_running() {
                return;
            }
            self.reveal_next_character();
        }

        if self.reveal_cursor == self.line_len() {
            self.finish_line();
        }
    }

    //--- Pause ------------------------------------------------------------

    /// Freezes or resumes ticking. Counters and timers are kept as-is.
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            debug!("Dialogue {}", if paused { "paused" } else { "resumed" });
        }
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    //--- Query API --------------------------------------------------------

    pub fn phase(&self) -> DialoguePhase {
        self.phase
    }

    /// Index of the current entry; `None` before the first advance.
    ///
    /// After the dialogue finished this is the out-of-range index that
    /// ended it.
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Number of characters of the current line already revealed.
    pub fn reveal_cursor(&self) -> usize {
        self.reveal_cursor
    }

    /// Number of characters in the current line.
    pub fn line_len(&self) -> usize {
        self.grapheme_ends.len()
    }

    /// The current line with the player name substituted.
    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    /// The revealed prefix of [`full_text`](Self::full_text).
    pub fn revealed_text(&self) -> &str {
        &self.full_text[..self.byte_offset(self.reveal_cursor)]
    }

    /// The current talker with the player name substituted.
    pub fn talker_name(&self) -> &str {
        &self.talker_name
    }

    pub fn is_line_complete(&self) -> bool {
        self.phase == DialoguePhase::LineComplete
    }

    /// `true` while the delay after the last revealed character runs.
    pub fn is_waiting_on_timer(&self) -> bool {
        self.char_timer.is_running()
    }

    pub fn is_aborted(&self) -> bool {
        self.phase == DialoguePhase::Aborted
    }

    /// Number of entries in the store.
    pub fn entry_count(&self) -> usize {
        self.store.len()
    }

    /// The entry store shared with presentation bindings.
    pub fn store(&self) -> &Arc<dyn DialogueStore> {
        &self.store
    }

    pub fn intervals(&self) -> &RevealIntervals {
        &self.intervals
    }

    /// Changes reveal speed starting with the next character.
    pub fn set_intervals(&mut self, intervals: RevealIntervals) {
        self.intervals = intervals;
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Notification lists for subscribing observers.
    pub fn signals_mut(&mut self) -> &mut DialogueSignals {
        &mut self.signals
    }

    /// The formatter used for lines advanced to from now on.
    pub fn formatter_mut(&mut self) -> &mut dyn NameFormatter {
        self.formatter.as_mut()
    }

    /// Renames the player. The current line keeps its text; the next
    /// advance uses the new name.
    pub fn set_player_name(&mut self, name: &str) {
        debug!("Player name set to {:?}", name);
        self.formatter.set_player_name(name);
    }

    //--- Internal Helpers -------------------------------------------------

    fn reveal_next_character(&mut self) {
        let start = self.byte_offset(self.reveal_cursor);
        let end = self.grapheme_ends[self.reveal_cursor];
        let (delay, punctuation) = self.intervals.delay_after(&self.full_text[start..end]);

        self.reveal_cursor += 1;
        self.view.set_text(&self.full_text[..end]);

        trace!(
            "Revealed {:?} ({}/{}), next in {:?}",
            &self.full_text[start..end],
            self.reveal_cursor,
            self.line_len(),
            delay
        );

        self.signals.character_revealed.emit(&punctuation);
        self.char_timer.start(delay);
    }

    fn finish_line(&mut self) {
        self.show_name();
        self.reveal_cursor = self.line_len();
        self.char_timer.cancel();

        // Always push the full line so partial reveals never linger.
        self.view.set_text(&self.full_text);
        self.phase = DialoguePhase::LineComplete;

        let total = self.reveal_cursor;
        debug!("Line {:?} finished ({} characters)", self.current_index, total);
        self.signals.line_finished.emit(&total);
    }

    fn show_name(&mut self) {
        if !self.name_shown {
            self.view.set_name(&self.talker_name);
            self.name_shown = true;
        }
    }

    fn reset_line(&mut self) {
        self.view.set_text("");
        self.view.set_name("");
        self.full_text.clear();
        self.talker_name.clear();
        self.grapheme_ends.clear();
        self.reveal_cursor = 0;
        self.char_timer.cancel();
        self.name_shown = false;
    }

    fn abort(&mut self) {
        self.reset_line();
        self.phase = DialoguePhase::Aborted;
    }

    fn byte_offset(&self, cursor: usize) -> usize {
        match cursor {
            0 => 0,
            n => self.grapheme_ends[n - 1],
        }
    }
}

impl<V: DialogueView> std::fmt::Debug for DialogueController<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogueController")
            .field("phase", &self.phase)
            .field("current_index", &self.current_index)
            .field("reveal_cursor", &self.reveal_cursor)
            .field("line_len", &self.line_len())
            .field("paused", &self.paused)
            .field("char_timer", &self.char_timer)
            .finish()
    }
}

//--- grapheme_ends() -----------------------------------------------------
//
// Byte offsets just past each extended grapheme cluster, so a reveal never
// splits a combining sequence.
//
fn grapheme_ends(text: &str) -> Vec<usize> {
    text.grapheme_indices(true)
        .map(|(start, grapheme)| start + grapheme.len())
        .collect()
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dialogue::{DialogueEntry, DialogueHolder};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    const REGULAR: Duration = Duration::from_millis(100);
    const COMMA: Duration = Duration::from_millis(300);
    const PERIOD: Duration = Duration::from_millis(500);

    //--- Test Helpers -----------------------------------------------------

    fn intervals() -> RevealIntervals {
        RevealIntervals {
            regular: REGULAR,
            comma: COMMA,
            period: PERIOD,
        }
    }

    fn controller(entries: Vec<DialogueEntry>) -> DialogueController {
        DialogueController::builder()
            .with_store(DialogueHolder::from(entries))
            .with_intervals(intervals())
            .build()
            .unwrap()
    }

    fn lines(texts: &[&str]) -> DialogueController {
        controller(texts.iter().map(|t| DialogueEntry::new(*t, "Mara")).collect())
    }

    fn record<T: Copy + Send + 'static>(
        signal: &mut crate::core::dialogue::Signal<T>,
    ) -> Arc<Mutex<Vec<T>>> {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        signal.subscribe(move |value| sink.lock().unwrap().push(*value));
        log
    }

    struct LyingStore;

    impl DialogueStore for LyingStore {
        fn entry(&self, _index: usize) -> Option<&DialogueEntry> {
            None
        }

        fn len(&self) -> usize {
            2
        }
    }

    //--- Builder Tests ----------------------------------------------------

    #[test]
    fn build_without_store_fails() {
        let result = DialogueController::builder().build();
        assert_eq!(result.err(), Some(DialogueError::MissingStore));
    }

    #[test]
    fn new_controller_is_idle() {
        let dialogue = lines(&["a"]);
        assert_eq!(dialogue.phase(), DialoguePhase::Idle);
        assert_eq!(dialogue.current_index(), None);
        assert_eq!(dialogue.revealed_text(), "");
        assert_eq!(dialogue.entry_count(), 1);
    }

    #[test]
    fn tick_before_first_advance_does_nothing() {
        let mut dialogue = lines(&["abc"]);
        dialogue.tick(REGULAR);
        assert_eq!(dialogue.phase(), DialoguePhase::Idle);
        assert_eq!(dialogue.view().text_updates(), 0);
    }

    //--- Advance Tests ----------------------------------------------------

    #[test]
    fn advance_resets_reveal_state() {
        let mut dialogue = lines(&["first", "second"]);

        assert_eq!(dialogue.advance_to_next_line(), Ok(AdvanceOutcome::Line(0)));
        assert_eq!(dialogue.reveal_cursor(), 0);
        assert_eq!(dialogue.revealed_text(), "");

        dialogue.tick(REGULAR);
        dialogue.tick(REGULAR);
        assert_eq!(dialogue.revealed_text(), "fi");

        assert_eq!(dialogue.advance_to_next_line(), Ok(AdvanceOutcome::Line(1)));
        assert_eq!(dialogue.current_index(), Some(1));
        assert_eq!(dialogue.reveal_cursor(), 0);
        assert_eq!(dialogue.revealed_text(), "");
        assert_eq!(dialogue.view().text(), "");
        assert_eq!(dialogue.view().name(), "");
        assert_eq!(dialogue.full_text(), "second");
        assert_eq!(dialogue.phase(), DialoguePhase::Revealing);
    }

    #[test]
    fn hi_scenario_reveals_in_three_ticks() {
        let mut dialogue = lines(&["Hi.", "Second", "Third"]);
        let finished = record(&mut dialogue.signals_mut().line_finished);

        dialogue.advance_to_next_line().unwrap();
        for _ in 0..3 {
            dialogue.tick(REGULAR);
        }

        assert_eq!(dialogue.revealed_text(), "Hi.");
        assert_eq!(dialogue.view().text(), "Hi.");
        assert!(dialogue.is_line_complete());
        assert_eq!(*finished.lock().unwrap(), vec![3]);

        assert_eq!(dialogue.advance_to_next_line(), Ok(AdvanceOutcome::Line(1)));
        assert_eq!(dialogue.current_index(), Some(1));
    }

    #[test]
    fn reveals_characters_in_order_without_skips() {
        let text = "abcdef";
        let mut dialogue = lines(&[text]);
        dialogue.advance_to_next_line().unwrap();

        for n in 1..=text.len() {
            dialogue.tick(REGULAR);
            assert_eq!(dialogue.revealed_text(), &text[..n]);
            assert_eq!(dialogue.view().text(), &text[..n]);
            assert_eq!(dialogue.reveal_cursor(), n);
        }
        assert!(dialogue.is_line_complete());
    }

    #[test]
    fn waits_for_regular_delay_between_characters() {
        let mut dialogue = lines(&["abc"]);
        dialogue.advance_to_next_line().unwrap();

        dialogue.tick(Duration::from_millis(10));
        assert_eq!(dialogue.revealed_text(), "a");
        assert!(dialogue.is_waiting_on_timer());

        dialogue.tick(Duration::from_millis(50));
        assert_eq!(dialogue.revealed_text(), "a");

        dialogue.tick(Duration::from_millis(50));
        assert_eq!(dialogue.revealed_text(), "ab");
    }

    #[test]
    fn only_one_character_per_tick() {
        let mut dialogue = lines(&["abc"]);
        dialogue.advance_to_next_line().unwrap();

        dialogue.tick(Duration::from_secs(10));
        dialogue.tick(Duration::from_secs(10));
        assert_eq!(dialogue.revealed_text(), "ab");
    }

    #[test]
    fn punctuation_selects_its_own_delay() {
        let mut dialogue = lines(&["a,b."]);
        let revealed = record(&mut dialogue.signals_mut().character_revealed);
        dialogue.advance_to_next_line().unwrap();

        dialogue.tick(REGULAR);
        dialogue.tick(REGULAR);
        assert_eq!(dialogue.revealed_text(), "a,");

        // Comma delay is three regular ticks.
        dialogue.tick(REGULAR);
        dialogue.tick(REGULAR);
        assert_eq!(dialogue.revealed_text(), "a,");
        dialogue.tick(REGULAR);
        assert_eq!(dialogue.revealed_text(), "a,b");

        dialogue.tick(REGULAR);
        assert_eq!(dialogue.revealed_text(), "a,b.");
        assert_eq!(*revealed.lock().unwrap(), vec![false, true, false, true]);
    }

    #[test]
    fn name_is_formatted_and_shown_with_first_character() {
        let store = DialogueHolder::new()
            .with_entry(DialogueEntry::new("Hello, {name}.", "{name}"));
        let mut dialogue = DialogueController::builder()
            .with_store(store)
            .with_formatter(PlayerName::new("Avery"))
            .with_intervals(intervals())
            .build()
            .unwrap();

        dialogue.advance_to_next_line().unwrap();
        assert_eq!(dialogue.talker_name(), "Avery");
        assert_eq!(dialogue.full_text(), "Hello, Avery.");
        assert_eq!(dialogue.view().name(), "");

        dialogue.tick(REGULAR);
        assert_eq!(dialogue.view().name(), "Avery");
    }

    #[test]
    fn renaming_applies_from_next_line() {
        let store = DialogueHolder::new()
            .with_entry(DialogueEntry::new("I am {name}.", "{name}"))
            .with_entry(DialogueEntry::new("Call me {name}.", "{name}"));
        let mut dialogue = DialogueController::builder()
            .with_store(store)
            .with_formatter(PlayerName::new("Avery"))
            .with_intervals(intervals())
            .build()
            .unwrap();

        dialogue.advance_to_next_line().unwrap();
        dialogue.set_player_name("Rowan");
        assert_eq!(dialogue.full_text(), "I am Avery.");
        assert_eq!(dialogue.talker_name(), "Avery");

        dialogue.advance_to_next_line().unwrap();
        assert_eq!(dialogue.full_text(), "Call me Rowan.");
        assert_eq!(dialogue.talker_name(), "Rowan");

        dialogue.formatter_mut().set_player_name("Jun");
        dialogue.request_advance_or_skip().unwrap();
        assert_eq!(dialogue.view().name(), "Rowan");
    }

    #[test]
    fn event_fires_once_per_line() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        let mut dialogue = controller(vec![
            DialogueEntry::new("ab", "x").on_show(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
            DialogueEntry::new("cd", "y"),
        ]);

        dialogue.advance_to_next_line().unwrap();
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        dialogue.tick(REGULAR);
        dialogue.request_advance_or_skip().unwrap();
        dialogue.tick(REGULAR);
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        dialogue.advance_to_next_line().unwrap();
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn index_changed_is_emitted_per_line_but_not_on_finish() {
        let mut dialogue = lines(&["a", "b"]);
        let indices = record(&mut dialogue.signals_mut().index_changed);

        dialogue.advance_to_next_line().unwrap();
        dialogue.advance_to_next_line().unwrap();
        dialogue.advance_to_next_line().unwrap();

        assert_eq!(*indices.lock().unwrap(), vec![0, 1]);
    }

    //--- Skip Tests -------------------------------------------------------

    #[test]
    fn skip_completes_line_immediately() {
        let mut dialogue = lines(&["Hello", "World"]);
        let finished = record(&mut dialogue.signals_mut().line_finished);
        dialogue.advance_to_next_line().unwrap();
        dialogue.tick(REGULAR);
        assert_eq!(dialogue.revealed_text(), "H");

        assert_eq!(dialogue.request_advance_or_skip(), Ok(AdvanceOutcome::Skipped));
        assert_eq!(dialogue.revealed_text(), "Hello");
        assert_eq!(dialogue.view().text(), "Hello");
        assert_eq!(dialogue.view().name(), "Mara");
        assert!(dialogue.is_line_complete());
        assert!(!dialogue.is_waiting_on_timer());
        assert_eq!(*finished.lock().unwrap(), vec![5]);

        // Further ticks do not re-finish the line.
        dialogue.tick(REGULAR);
        assert_eq!(*finished.lock().unwrap(), vec![5]);

        assert_eq!(dialogue.request_advance_or_skip(), Ok(AdvanceOutcome::Line(1)));
    }

    #[test]
    fn request_from_idle_starts_dialogue() {
        let mut dialogue = lines(&["a"]);
        assert_eq!(dialogue.request_advance_or_skip(), Ok(AdvanceOutcome::Line(0)));
    }

    //--- Abort Tests ------------------------------------------------------

    #[test]
    fn advancing_past_last_entry_aborts() {
        let mut dialogue = lines(&["only"]);
        dialogue.advance_to_next_line().unwrap();
        dialogue.request_advance_or_skip().unwrap();
        assert_eq!(dialogue.view().text(), "only");

        assert_eq!(dialogue.advance_to_next_line(), Ok(AdvanceOutcome::Finished));
        assert!(dialogue.is_aborted());
        assert_eq!(dialogue.view().text(), "");
        assert_eq!(dialogue.view().name(), "");
        assert_eq!(dialogue.current_index(), Some(1));

        let updates = dialogue.view().text_updates();
        dialogue.tick(REGULAR);
        assert_eq!(dialogue.advance_to_next_line(), Ok(AdvanceOutcome::Finished));
        assert_eq!(dialogue.request_advance_or_skip(), Ok(AdvanceOutcome::Finished));
        assert_eq!(dialogue.view().text_updates(), updates);
        assert_eq!(dialogue.current_index(), Some(1));
        assert_eq!(dialogue.revealed_text(), "");
    }

    #[test]
    fn empty_store_finishes_on_first_advance() {
        let mut dialogue = lines(&[]);
        assert_eq!(dialogue.advance_to_next_line(), Ok(AdvanceOutcome::Finished));
        assert!(dialogue.is_aborted());
    }

    #[test]
    fn missing_entry_is_reported_and_aborts() {
        let mut dialogue = DialogueController::builder()
            .with_store(LyingStore)
            .build()
            .unwrap();

        assert_eq!(
            dialogue.advance_to_next_line(),
            Err(DialogueError::MissingEntry { index: 0, len: 2 })
        );
        assert!(dialogue.is_aborted());
    }

    //--- Pause Tests ------------------------------------------------------

    #[test]
    fn pause_resumes_from_same_cursor() {
        let text = "pause me";
        let mut steady = lines(&[text]);
        let mut paused = lines(&[text]);
        steady.advance_to_next_line().unwrap();
        paused.advance_to_next_line().unwrap();

        let mut steady_frames = Vec::new();
        for _ in 0..text.len() {
            steady.tick(REGULAR);
            steady_frames.push(steady.revealed_text().to_owned());
        }

        let mut paused_frames = Vec::new();
        for frame in 0..text.len() {
            if frame == 3 {
                paused.set_paused(true);
                assert!(paused.is_paused());
                let cursor = paused.reveal_cursor();
                for _ in 0..5 {
                    paused.tick(REGULAR);
                }
                assert_eq!(paused.reveal_cursor(), cursor);
                paused.set_paused(false);
            }
            paused.tick(REGULAR);
            paused_frames.push(paused.revealed_text().to_owned());
        }

        assert_eq!(steady_frames, paused_frames);
        assert!(paused.is_line_complete());
    }

    //--- Edge Cases -------------------------------------------------------

    #[test]
    fn empty_line_finishes_on_first_tick() {
        let mut dialogue = lines(&["", "next"]);
        let finished = record(&mut dialogue.signals_mut().line_finished);
        dialogue.advance_to_next_line().unwrap();

        dialogue.tick(Duration::ZERO);
        assert!(dialogue.is_line_complete());
        assert_eq!(*finished.lock().unwrap(), vec![0]);
    }

    #[test]
    fn graphemes_are_never_split() {
        let mut dialogue = lines(&["e\u{301}x"]);
        dialogue.advance_to_next_line().unwrap();
        assert_eq!(dialogue.line_len(), 2);

        dialogue.tick(REGULAR);
        assert_eq!(dialogue.revealed_text(), "e\u{301}");
        dialogue.tick(REGULAR);
        assert_eq!(dialogue.revealed_text(), "e\u{301}x");
        assert!(dialogue.is_line_complete());
    }

    #[test]
    fn interval_change_applies_to_next_character() {
        let mut dialogue = lines(&["abc"]);
        dialogue.advance_to_next_line().unwrap();
        dialogue.tick(REGULAR);

        dialogue.set_intervals(RevealIntervals::uniform(Duration::ZERO));
        dialogue.tick(REGULAR);
        dialogue.tick(Duration::ZERO);
        assert_eq!(dialogue.revealed_text(), "abc");
    }
}
