//=========================================================================
// Core Systems Orchestrator
//
// Runs a dialogue on a dedicated logic thread at a fixed tick rate.
//
// Responsibilities:
// - Receive host commands (inputs, scripted advances, pause) via channel
// - Turn input batches into a per-frame click flag
// - Update the dialogue director with the measured frame time
// - Maintain pacing using a fixed tick rate (TPS)
//
// Notes:
// The orchestrator owns the director outright. Communication with the
// host happens only through message passing, so progression state is
// never shared between threads.
//
//=========================================================================

//=== Standard Library Imports ============================================
use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================
use crossbeam_channel::{Receiver, Sender};
use log::{debug, error, info};

//=== Internal Modules ====================================================
use dialogue::{DialogueDirector, DialogueError};
use input::AdvanceTracker;
use presentation::DialogueView;
use runtime_bridge::{CommandCollector, DialogueNotification, RuntimeCommand, TickControl};

pub mod dialogue;
pub mod input;
pub mod presentation;
pub(crate) mod runtime_bridge;

//=== CoreSystemsOrchestrator =============================================
//
// Owns the director and input tracker for the lifetime of the logic
// thread.
//
pub(crate) struct CoreSystemsOrchestrator<V: DialogueView> {
    director: DialogueDirector<V>,
    tracker: AdvanceTracker,
}

impl<V: DialogueView + 'static> CoreSystemsOrchestrator<V> {
    //--- Construction -----------------------------------------------------
    //
    // Wraps the systems but does not yet start the logic thread.
    //
    pub fn new(director: DialogueDirector<V>, tracker: AdvanceTracker) -> Self {
        Self { director, tracker }
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Spawns the logic thread ticking the dialogue at `tps`.
    //
    // Each tick:
    //  1. Collects host commands
    //  2. Applies inputs and scripted commands in arrival order
    //  3. Updates the director with the elapsed frame time
    //  4. Sleeps to maintain fixed pacing
    //  5. Exits on shutdown or disconnect (after applying what arrived
    //     first) or when the dialogue finishes
    //
    pub fn spawn_core_thread(
        self,
        receiver: Receiver<RuntimeCommand>,
        notifier: Sender<DialogueNotification>,
        tps: f64,
    ) -> thread::JoinHandle<Result<(), DialogueError>> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let result = self.run(CommandCollector::new(receiver), &notifier, frame_duration);
            if let Err(e) = &result {
                error!("Dialogue thread stopped: {}", e);
            }
            result
        })
    }

    fn run(
        mut self,
        mut collector: CommandCollector,
        notifier: &Sender<DialogueNotification>,
        frame_duration: Duration,
    ) -> Result<(), DialogueError> {
        let mut last_frame = Instant::now();

        loop {
            let frame_start = Instant::now();

            //--- Step 1: Gather host commands ------------------------------
            let control = collector.collect_frame();

            //--- Step 2: Apply commands ------------------------------------
            // Commands sent ahead of a shutdown still take effect.
            self.tracker.clear();
            for command in collector.take_commands() {
                self.apply(command)?;
            }

            if control == TickControl::Exit {
                info!("Dialogue thread exiting.");
                return Ok(());
            }

            //--- Step 3: Update dialogue -----------------------------------
            let elapsed = frame_start.duration_since(last_frame);
            last_frame = frame_start;
            self.director.update(elapsed, self.tracker.advance_requested())?;

            if self.director.is_finished() {
                info!("Dialogue finished, stopping dialogue thread.");
                notifier.send(DialogueNotification::Finished).ok();
                return Ok(());
            }

            //--- Step 4: Maintain pacing -----------------------------------
            let spent = frame_start.elapsed();
            if spent < frame_duration {
                thread::sleep(frame_duration - spent);
            }
        }
    }

    fn apply(&mut self, command: RuntimeCommand) -> Result<(), DialogueError> {
        match command {
            RuntimeCommand::Inputs(events) => self.tracker.process_events(&events),
            RuntimeCommand::Advance => {
                debug!("Scripted advance");
                self.director.advance()?;
            }
            RuntimeCommand::SkipOrAdvance => {
                debug!("Scripted skip or advance");
                self.director.request_advance_or_skip()?;
            }
            RuntimeCommand::SetPaused(paused) => self.director.set_paused(paused),
            RuntimeCommand::SetPlayerName(name) => self.director.set_player_name(&name),
            // Consumed by the collector.
            RuntimeCommand::Shutdown => {}
        }
        Ok(())
    }
}
