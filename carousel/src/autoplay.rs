//! Autoplay supervision.
//!
//! DESIGN
//! ======
//! The autoplay timer is never mutated in place. Its dependencies
//! (`total_slides`, `max_index`, drag-in-progress) form an [`AutoplayKey`];
//! whenever the key changes the supervisor bumps its generation, which makes
//! every timer started under an older generation stale, and asks the host to
//! start a fresh one if autoplay should run. A host that cannot cancel timers
//! (e.g. a `spawn_local` sleep loop) simply stops when a tick reports stale.

#[cfg(test)]
#[path = "autoplay_test.rs"]
mod autoplay_test;

/// Inputs the autoplay timer depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayKey {
    pub total_slides: usize,
    pub max_index: usize,
    pub dragging: bool,
}

impl AutoplayKey {
    /// Autoplay runs only with more than one slide and no drag in progress.
    #[must_use]
    pub fn should_run(&self) -> bool {
        self.total_slides > 1 && !self.dragging
    }
}

/// Instruction for the host after a dependency change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayCommand {
    /// Start a repeating timer tagged with `generation`.
    Start { generation: u64 },
    /// Previously started timers are stale.
    Stop,
}

#[derive(Debug, Clone, Default)]
pub struct AutoplaySupervisor {
    enabled: bool,
    key: Option<AutoplayKey>,
    generation: u64,
    running: bool,
}

impl AutoplaySupervisor {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self { enabled, ..Self::default() }
    }

    /// Record the current dependencies. Returns a command only when they changed.
    pub fn sync(&mut self, key: AutoplayKey) -> Option<AutoplayCommand> {
        if self.key == Some(key) {
            return None;
        }
        self.key = Some(key);
        let was_running = self.running;
        self.generation += 1;
        self.running = self.enabled && key.should_run();
        if self.running {
            Some(AutoplayCommand::Start { generation: self.generation })
        } else if was_running {
            Some(AutoplayCommand::Stop)
        } else {
            None
        }
    }

    /// Invalidate every timer and forget the key, so the next `sync` starts afresh.
    pub fn stop(&mut self) -> Option<AutoplayCommand> {
        self.key = None;
        self.generation += 1;
        if self.running {
            self.running = false;
            Some(AutoplayCommand::Stop)
        } else {
            None
        }
    }

    /// Whether a timer tagged `generation` may still advance the carousel.
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        self.running && generation == self.generation
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
