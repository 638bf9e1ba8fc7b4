//! Held-key repeat for terminal environments.
//!
//! Movement keys act once when pressed and then again every repeat interval
//! while held. Terminals that never send key-release events are handled with
//! a timeout: a key that has not been seen for a while counts as released.

use std::time::Instant;

use arrayvec::ArrayVec;

use crate::types::{GameAction, INPUT_REPEAT_MS};

// Short enough that a single tap does not turn into a sustained hold on
// terminals without release events.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Direction for horizontal movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalDirection {
    Left,
    Right,
    None,
}

/// Tracks held movement keys and emits their repeats.
#[derive(Debug, Clone)]
pub struct InputHandler {
    horizontal: HorizontalDirection,
    down_held: bool,
    last_key_time: Instant,
    horizontal_timer: u32,
    down_timer: u32,
    repeat_ms: u32,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_repeat_ms(INPUT_REPEAT_MS)
    }

    /// A zero interval is treated as 1ms.
    pub fn with_repeat_ms(repeat_ms: u32) -> Self {
        Self {
            horizontal: HorizontalDirection::None,
            down_held: false,
            last_key_time: Instant::now(),
            horizontal_timer: 0,
            down_timer: 0,
            repeat_ms: repeat_ms.max(1),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn repeat_ms(&self) -> u32 {
        self.repeat_ms
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Actions that repeat while their key is held.
    pub fn is_repeatable(action: GameAction) -> bool {
        matches!(
            action,
            GameAction::MoveLeft | GameAction::MoveRight | GameAction::SoftDrop
        )
    }

    /// Register a key press. Returns the action to apply now, if any.
    ///
    /// A press of a key that is already held (terminal auto-repeat) only
    /// keeps the hold alive.
    pub fn press(&mut self, action: GameAction) -> Option<GameAction> {
        let direction = match action {
            GameAction::MoveLeft => HorizontalDirection::Left,
            GameAction::MoveRight => HorizontalDirection::Right,
            GameAction::SoftDrop => {
                self.last_key_time = Instant::now();
                if self.down_held {
                    return None;
                }
                self.down_held = true;
                self.down_timer = 0;
                return Some(action);
            }
            _ => return None,
        };

        self.last_key_time = Instant::now();
        if self.horizontal == direction {
            return None;
        }
        self.horizontal = direction;
        self.horizontal_timer = 0;
        Some(action)
    }

    pub fn release(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft if self.horizontal == HorizontalDirection::Left => {
                self.release_horizontal();
            }
            GameAction::MoveRight if self.horizontal == HorizontalDirection::Right => {
                self.release_horizontal();
            }
            GameAction::SoftDrop => self.release_down(),
            _ => {}
        }
    }

    fn release_horizontal(&mut self) {
        self.horizontal = HorizontalDirection::None;
        self.horizontal_timer = 0;
    }

    fn release_down(&mut self) {
        self.down_held = false;
        self.down_timer = 0;
    }

    /// Advance the repeat timers by `elapsed_ms` and collect due repeats.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<GameAction, 16> {
        let mut actions = ArrayVec::new();

        let idle_ms = self.last_key_time.elapsed().as_millis() as u32;
        if idle_ms > self.key_release_timeout_ms {
            self.release_horizontal();
            self.release_down();
        }

        let repeated = match self.horizontal {
            HorizontalDirection::Left => Some(GameAction::MoveLeft),
            HorizontalDirection::Right => Some(GameAction::MoveRight),
            HorizontalDirection::None => None,
        };
        if let Some(action) = repeated {
            self.horizontal_timer = self.horizontal_timer.saturating_add(elapsed_ms);
            emit_repeats(&mut self.horizontal_timer, self.repeat_ms, action, &mut actions);
        }

        if self.down_held {
            self.down_timer = self.down_timer.saturating_add(elapsed_ms);
            emit_repeats(
                &mut self.down_timer,
                self.repeat_ms,
                GameAction::SoftDrop,
                &mut actions,
            );
        }

        actions
    }

    pub fn reset(&mut self) {
        self.release_horizontal();
        self.release_down();
        self.last_key_time = Instant::now();
    }
}

/// Emit one `action` per elapsed `repeat_ms`. Repeats that do not fit in
/// `actions` are dropped along with their time, leaving the sub-interval
/// remainder on the timer.
fn emit_repeats(
    timer: &mut u32,
    repeat_ms: u32,
    action: GameAction,
    actions: &mut ArrayVec<GameAction, 16>,
) {
    while *timer >= repeat_ms {
        if actions.try_push(action).is_err() {
            *timer %= repeat_ms;
            return;
        }
        *timer -= repeat_ms;
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
