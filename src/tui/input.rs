// Input handling with per-key behaviors
//
// Action keys (reload, toggle, quit) fire once per physical press. Terminals
// that never send release events get a short debounce instead, so a held `r`
// does not queue a burst of reloads. Arrow keys repeat while held.
// Keys without a configured behavior always pass through (text entry).

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Minimum gap between two triggers of a held action key
const ACTION_DEBOUNCE: Duration = Duration::from_millis(150);

/// Defines how a key should behave when pressed/held
#[derive(Debug, Clone, Copy)]
pub enum KeyBehavior {
    /// Trigger once per press
    StateChange,

    /// Trigger on press, then repeat after initial delay
    Repeatable {
        initial_delay: Duration,
        repeat_interval: Duration,
    },
}

impl KeyBehavior {
    /// Standard navigation key behavior (like arrow keys)
    pub fn navigation() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(400),
            repeat_interval: Duration::from_millis(120),
        }
    }
}

#[derive(Debug, Default)]
struct KeyState {
    is_pressed: bool,
    press_started: Option<Instant>,
    last_triggered: Option<Instant>,
}

/// Input handler that manages key behaviors
pub struct InputHandler {
    key_states: HashMap<KeyCode, KeyState>,
    key_behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            key_states: HashMap::new(),
            key_behaviors: HashMap::new(),
        }
    }

    pub fn configure_keys(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.key_behaviors.insert(*key, behavior);
        }
    }

    /// Handle a key press event; returns true if the action should fire
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.press_at(key, Instant::now())
    }

    fn press_at(&mut self, key: KeyCode, now: Instant) -> bool {
        let Some(behavior) = self.key_behaviors.get(&key).copied() else {
            return true;
        };

        let state = self.key_states.entry(key).or_default();

        if !state.is_pressed {
            state.is_pressed = true;
            state.press_started = Some(now);
            state.last_triggered = Some(now);
            return true;
        }

        let (Some(press_start), Some(last)) = (state.press_started, state.last_triggered) else {
            return false;
        };

        let fire = match behavior {
            KeyBehavior::StateChange => now.duration_since(last) >= ACTION_DEBOUNCE,
            KeyBehavior::Repeatable {
                initial_delay,
                repeat_interval,
            } => {
                now.duration_since(press_start) >= initial_delay
                    && now.duration_since(last) >= repeat_interval
            }
        };

        if fire {
            state.last_triggered = Some(now);
        }
        fire
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        if let Some(state) = self.key_states.get_mut(&key) {
            *state = KeyState::default();
        }
    }

    /// Dashboard key map
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();

        handler.configure_keys(&[KeyCode::Left, KeyCode::Right], KeyBehavior::navigation());

        handler.configure_keys(
            &[
                KeyCode::Enter,
                KeyCode::Esc,
                KeyCode::Tab,
                KeyCode::BackTab,
                KeyCode::Char('q'),
                KeyCode::Char('Q'),
                KeyCode::Char('r'),
                KeyCode::Char('a'),
                KeyCode::Char('d'),
                KeyCode::Char('t'),
                KeyCode::Char('1'),
                KeyCode::Char('2'),
                KeyCode::Char('3'),
            ],
            KeyBehavior::StateChange,
        );

        handler
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::with_default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_change_fires_once_per_press() {
        let mut handler = InputHandler::new();
        handler.configure_keys(&[KeyCode::Enter], KeyBehavior::StateChange);
        let t0 = Instant::now();

        assert!(handler.press_at(KeyCode::Enter, t0));
        assert!(!handler.press_at(KeyCode::Enter, t0 + Duration::from_millis(30)));

        handler.handle_key_release(KeyCode::Enter);
        assert!(handler.press_at(KeyCode::Enter, t0 + Duration::from_millis(40)));
    }

    #[test]
    fn held_action_key_is_debounced_without_release() {
        let mut handler = InputHandler::new();
        handler.configure_keys(&[KeyCode::Char('r')], KeyBehavior::StateChange);
        let t0 = Instant::now();

        assert!(handler.press_at(KeyCode::Char('r'), t0));
        assert!(!handler.press_at(KeyCode::Char('r'), t0 + Duration::from_millis(100)));
        assert!(handler.press_at(KeyCode::Char('r'), t0 + Duration::from_millis(200)));
    }

    #[test]
    fn repeatable_waits_for_initial_delay() {
        let mut handler = InputHandler::new();
        handler.configure_keys(
            &[KeyCode::Right],
            KeyBehavior::Repeatable {
                initial_delay: Duration::from_millis(100),
                repeat_interval: Duration::from_millis(50),
            },
        );
        let t0 = Instant::now();

        assert!(handler.press_at(KeyCode::Right, t0));
        assert!(!handler.press_at(KeyCode::Right, t0 + Duration::from_millis(60)));
        assert!(handler.press_at(KeyCode::Right, t0 + Duration::from_millis(110)));
        assert!(!handler.press_at(KeyCode::Right, t0 + Duration::from_millis(130)));
        assert!(handler.press_at(KeyCode::Right, t0 + Duration::from_millis(170)));
    }

    #[test]
    fn unconfigured_keys_always_fire() {
        let mut handler = InputHandler::with_default_config();
        assert!(handler.handle_key_press(KeyCode::Char('0')));
        assert!(handler.handle_key_press(KeyCode::Char('0')));
        assert!(handler.handle_key_press(KeyCode::Backspace));
    }
}
