//! Virtual-time host.
//!
//! `SimHost` plays the role the browser component plays in production: it
//! executes [`Effect`]s, keeps a timer queue against a fake millisecond clock,
//! and tracks whether window pointer listeners are attached. Tests drive it
//! with pointer gestures and `advance(ms)` instead of real time.

#[cfg(test)]
#[path = "sim_test.rs"]
mod sim_test;

use crate::engine::{Carousel, Effect, TickOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerKind {
    Settle { token: u64 },
    Autoplay { generation: u64, interval_ms: u32 },
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    due_ms: u64,
    kind: TimerKind,
}

/// What happened to a simulated click on card content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click reached the card (navigation proceeds).
    Delivered,
    /// The click was cancelled as the tail of a drag.
    Suppressed,
}

#[derive(Debug, Clone)]
pub struct SimHost {
    carousel: Carousel,
    now_ms: u64,
    timers: Vec<Timer>,
    listening: bool,
    listener_attach_count: usize,
}

impl SimHost {
    #[must_use]
    pub fn new(carousel: Carousel) -> Self {
        Self { carousel, now_ms: 0, timers: Vec::new(), listening: false, listener_attach_count: 0 }
    }

    /// Build a host around a default carousel at `viewport_width` holding `item_count` cards.
    #[must_use]
    pub fn with_items(item_count: usize, viewport_width: f64) -> Self {
        let mut host = Self::new(Carousel::default());
        host.dispatch(|c| c.resize(viewport_width));
        host.dispatch(|c| c.set_item_count(item_count));
        host
    }

    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Direct mutable access for operations that return no effects (navigation).
    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Whether window pointer listeners are currently attached.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// How many times listeners have been attached over the host's lifetime.
    #[must_use]
    pub fn listener_attach_count(&self) -> usize {
        self.listener_attach_count
    }

    /// Autoplay timers still queued.
    #[must_use]
    pub fn autoplay_timers(&self) -> usize {
        self.timers
            .iter()
            .filter(|t| matches!(t.kind, TimerKind::Autoplay { .. }))
            .count()
    }

    /// Run an engine operation and execute the effects it returns.
    pub fn dispatch(&mut self, op: impl FnOnce(&mut Carousel) -> Vec<Effect>) {
        let effects = op(&mut self.carousel);
        for effect in effects {
            self.apply(effect);
        }
    }

    pub fn pointer_down(&mut self, x: f64) {
        self.dispatch(|c| c.on_drag_start(x));
    }

    /// Pointer move. Only delivered while listeners are attached, like a real window listener.
    pub fn pointer_move(&mut self, x: f64) {
        if self.listening {
            self.carousel.on_drag_move(x);
        }
    }

    pub fn pointer_up(&mut self) {
        if self.listening {
            self.dispatch(Carousel::on_drag_end);
        }
    }

    /// Press at `from`, move to `to`, release.
    pub fn drag(&mut self, from: f64, to: f64) {
        self.pointer_down(from);
        self.pointer_move(to);
        self.pointer_up();
    }

    /// Click on card content at the current instant.
    #[must_use]
    pub fn click(&self) -> ClickOutcome {
        if self.carousel.should_suppress_click() {
            ClickOutcome::Suppressed
        } else {
            ClickOutcome::Delivered
        }
    }

    /// Advance the fake clock by `ms`, firing due timers in order.
    pub fn advance(&mut self, ms: u64) {
        let target = self.now_ms + ms;
        while let Some(pos) = self.next_due(target) {
            let timer = self.timers.remove(pos);
            self.now_ms = timer.due_ms;
            self.fire(timer);
        }
        self.now_ms = target;
    }

    fn next_due(&self, target: u64) -> Option<usize> {
        self.timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= target)
            .min_by_key(|(_, t)| t.due_ms)
            .map(|(pos, _)| pos)
    }

    fn fire(&mut self, timer: Timer) {
        match timer.kind {
            TimerKind::Settle { token } => {
                self.carousel.settle(token);
            }
            TimerKind::Autoplay { generation, interval_ms } => {
                if let TickOutcome::Advanced { .. } = self.carousel.autoplay_tick(generation) {
                    self.timers.push(Timer { due_ms: timer.due_ms + u64::from(interval_ms), kind: timer.kind });
                }
            }
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::ListenPointer => {
                self.listening = true;
                self.listener_attach_count += 1;
            }
            Effect::UnlistenPointer => self.listening = false,
            Effect::ScheduleSettle { token, delay_ms } => self.timers.push(Timer {
                due_ms: self.now_ms + u64::from(delay_ms),
                kind: TimerKind::Settle { token },
            }),
            Effect::StartAutoplay { generation, interval_ms } => {
                self.clear_autoplay();
                self.timers.push(Timer {
                    due_ms: self.now_ms + u64::from(interval_ms),
                    kind: TimerKind::Autoplay { generation, interval_ms },
                });
            }
            Effect::StopAutoplay => self.clear_autoplay(),
        }
    }

    fn clear_autoplay(&mut self) {
        self.timers
            .retain(|t| !matches!(t.kind, TimerKind::Autoplay { .. }));
    }
}
