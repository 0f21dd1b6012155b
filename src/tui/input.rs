// Key gating for page commands
//
// Terminals differ in what they report for a held key: some send repeated
// presses with releases, some only repeated presses. The handler turns that
// into one of two behaviors per key:
// - Once: fires on the first press, then at most every ONCE_DEBOUNCE while held
// - Repeat: fires on the first press, then repeats after a delay (scrolling)
//
// Characters typed into the request editor bypass it: the debounce would
// swallow fast repeated letters.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Minimum gap between firings of a held `Once` key when no release arrives
const ONCE_DEBOUNCE: Duration = Duration::from_millis(150);

/// Auto-repeat timing for a held key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatTiming {
    /// Hold time before the first repeat
    pub delay: Duration,
    /// Time between repeats after that
    pub interval: Duration,
}

impl RepeatTiming {
    /// Line scrolling (arrows, j/k)
    pub const SCROLL: Self = Self {
        delay: Duration::from_millis(500),
        interval: Duration::from_millis(50),
    };

    /// Page scrolling (PgUp/PgDn, Home/End)
    pub const PAGE: Self = Self {
        delay: Duration::from_millis(300),
        interval: Duration::from_millis(30),
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBehavior {
    /// One action per press: section jumps, tabs, opening dialogs, quitting
    Once,
    /// Scroll keys that keep acting while held
    Repeat(RepeatTiming),
}

/// A key currently held down
#[derive(Debug, Clone, Copy)]
struct Held {
    since: Instant,
    fired: Instant,
}

impl Held {
    fn fires_again(&self, behavior: KeyBehavior, now: Instant) -> bool {
        match behavior {
            KeyBehavior::Once => now.duration_since(self.fired) >= ONCE_DEBOUNCE,
            KeyBehavior::Repeat(timing) => {
                now.duration_since(self.since) >= timing.delay
                    && now.duration_since(self.fired) >= timing.interval
            }
        }
    }
}

/// Decides whether a key event should run its page command
pub struct InputHandler {
    /// Keys with a behavior other than `Once`
    behaviors: HashMap<KeyCode, KeyBehavior>,
    held: HashMap<KeyCode, Held>,
}

impl InputHandler {
    /// Handler where every key is `Once`
    pub fn new() -> Self {
        Self {
            behaviors: HashMap::new(),
            held: HashMap::new(),
        }
    }

    pub fn set_behavior(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.behaviors.insert(*key, behavior);
        }
    }

    fn behavior(&self, key: KeyCode) -> KeyBehavior {
        self.behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::Once)
    }

    /// Register a press; true if the command should run
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        let now = Instant::now();
        let behavior = self.behavior(key);

        match self.held.get_mut(&key) {
            Some(held) if held.fires_again(behavior, now) => {
                held.fired = now;
                true
            }
            Some(_) => false,
            None => {
                self.held.insert(
                    key,
                    Held {
                        since: now,
                        fired: now,
                    },
                );
                true
            }
        }
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    /// Scroll keys repeat, everything else fires once per press
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();
        handler.set_behavior(
            &[
                KeyCode::Up,
                KeyCode::Down,
                KeyCode::Char('j'),
                KeyCode::Char('k'),
            ],
            KeyBehavior::Repeat(RepeatTiming::SCROLL),
        );
        handler.set_behavior(
            &[
                KeyCode::PageUp,
                KeyCode::PageDown,
                KeyCode::Home,
                KeyCode::End,
            ],
            KeyBehavior::Repeat(RepeatTiming::PAGE),
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
    use std::thread;

    #[test]
    fn once_key_fires_again_only_after_release() {
        let mut handler = InputHandler::new();

        assert!(handler.handle_key_press(KeyCode::Enter));
        assert!(!handler.handle_key_press(KeyCode::Enter));

        handler.handle_key_release(KeyCode::Enter);
        assert!(handler.handle_key_press(KeyCode::Enter));
    }

    #[test]
    fn held_once_key_is_debounced_without_release() {
        let mut handler = InputHandler::with_default_config();
        assert!(handler.handle_key_press(KeyCode::F(2)));
        assert!(!handler.handle_key_press(KeyCode::F(2)));

        thread::sleep(ONCE_DEBOUNCE + Duration::from_millis(10));
        assert!(handler.handle_key_press(KeyCode::F(2)));
    }

    #[test]
    fn scroll_key_repeats_after_delay() {
        let mut handler = InputHandler::new();
        handler.set_behavior(
            &[KeyCode::Down],
            KeyBehavior::Repeat(RepeatTiming {
                delay: Duration::from_millis(100),
                interval: Duration::from_millis(50),
            }),
        );

        assert!(handler.handle_key_press(KeyCode::Down));
        assert!(!handler.handle_key_press(KeyCode::Down));

        thread::sleep(Duration::from_millis(110));
        assert!(handler.handle_key_press(KeyCode::Down));
        assert!(!handler.handle_key_press(KeyCode::Down));

        thread::sleep(Duration::from_millis(60));
        assert!(handler.handle_key_press(KeyCode::Down));
    }

    #[test]
    fn default_config_leaves_letters_as_once() {
        let handler = InputHandler::with_default_config();
        assert_eq!(handler.behavior(KeyCode::Char('t')), KeyBehavior::Once);
        assert_eq!(
            handler.behavior(KeyCode::PageDown),
            KeyBehavior::Repeat(RepeatTiming::PAGE)
        );
    }
}
