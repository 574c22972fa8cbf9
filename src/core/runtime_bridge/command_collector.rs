//=========================================================================
// Command Collector
//=========================================================================
//
// Runtime command collector with bounded polling and shutdown detection.
//
// Architecture:
//   Receiver<RuntimeCommand> → collect_frame() → commands → TickControl
//
// Bounded polling prevents a flooded channel from starving the tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::warn;

//=== Internal Dependencies ===============================================

use super::RuntimeCommand;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== CommandCollector ====================================================

/// Collects pending commands for one frame, in arrival order.
pub(crate) struct CommandCollector {
    receiver: Receiver<RuntimeCommand>,
    commands: Vec<RuntimeCommand>,
}

impl CommandCollector {
    pub(crate) fn new(receiver: Receiver<RuntimeCommand>) -> Self {
        Self {
            receiver,
            commands: Vec::with_capacity(4),
        }
    }

    /// Collects pending commands (bounded to prevent starvation).
    ///
    /// Returns `Exit` on `Shutdown` or when every sender is gone. Commands
    /// received before that point are still collected.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        const MAX_COMMANDS_PER_FRAME: usize = 100;

        self.commands.clear();
        let mut drained = 0;

        while drained < MAX_COMMANDS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(RuntimeCommand::Shutdown) => return TickControl::Exit,
                Ok(command) => {
                    self.commands.push(command);
                    drained += 1;
                }
                Err(TryRecvError::Disconnected) => return TickControl::Exit,
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= MAX_COMMANDS_PER_FRAME {
            warn!("Command queue backlog: drained {} commands this frame", drained);
        }

        TickControl::Continue
    }

    /// Takes ownership of collected commands, leaving an empty vec.
    pub(crate) fn take_commands(&mut self) -> Vec<RuntimeCommand> {
        std::mem::take(&mut self.commands)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputEvent, MouseButton};
    use crossbeam_channel::unbounded;

    #[test]
    fn collect_handles_empty_queue() {
        let (_tx, rx) = unbounded::<RuntimeCommand>();
        let mut collector = CommandCollector::new(rx);

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert!(collector.take_commands().is_empty());
    }

    #[test]
    fn collect_keeps_arrival_order() {
        let (tx, rx) = unbounded();
        let mut collector = CommandCollector::new(rx);

        tx.send(RuntimeCommand::SetPaused(true)).unwrap();
        tx.send(RuntimeCommand::Inputs(InputEvent::click(MouseButton::Left).to_vec()))
            .unwrap();
        tx.send(RuntimeCommand::Advance).unwrap();

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        let commands = collector.take_commands();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0], RuntimeCommand::SetPaused(true));
        assert_eq!(commands[2], RuntimeCommand::Advance);
    }

    #[test]
    fn collect_returns_exit_on_shutdown() {
        let (tx, rx) = unbounded();
        let mut collector = CommandCollector::new(rx);

        tx.send(RuntimeCommand::Advance).unwrap();
        tx.send(RuntimeCommand::Shutdown).unwrap();
        tx.send(RuntimeCommand::SkipOrAdvance).unwrap();

        assert_eq!(collector.collect_frame(), TickControl::Exit);
        assert_eq!(collector.take_commands(), vec![RuntimeCommand::Advance]);
    }

    #[test]
    fn take_clears_previous_commands() {
        let (tx, rx) = unbounded();
        let mut collector = CommandCollector::new(rx);

        tx.send(RuntimeCommand::SkipOrAdvance).unwrap();
        collector.collect_frame();
        assert_eq!(collector.take_commands(), vec![RuntimeCommand::SkipOrAdvance]);
        assert!(collector.take_commands().is_empty());

        collector.collect_frame();
        assert!(collector.take_commands().is_empty());
    }

    #[test]
    fn collect_bounds_commands_per_frame() {
        let (tx, rx) = unbounded();
        let mut collector = CommandCollector::new(rx);

        for _ in 0..150 {
            tx.send(RuntimeCommand::Advance).unwrap();
        }

        collector.collect_frame();
        assert_eq!(collector.take_commands().len(), 100);
        collector.collect_frame();
        assert_eq!(collector.take_commands().len(), 50);
    }

    #[test]
    fn collect_returns_exit_on_disconnect() {
        let (tx, rx) = unbounded::<RuntimeCommand>();
        let mut collector = CommandCollector::new(rx);

        drop(tx);

        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }
}
