//! Key event to game action mapping

use crate::game::Action;
use crate::settings::Settings;
use crossterm::event::{KeyCode, KeyEvent};

/// Key bindings configuration - supports multiple keys per action
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub move_left: Vec<KeyCode>,
    pub move_right: Vec<KeyCode>,
    pub rotate: Vec<KeyCode>,
    pub soft_drop: Vec<KeyCode>,
    pub quit: Vec<KeyCode>,
}

impl KeyBindings {
    /// Parse a key string into KeyCode
    fn parse_key(s: &str) -> KeyCode {
        match s.to_lowercase().as_str() {
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "space" => KeyCode::Char(' '),
            "enter" => KeyCode::Enter,
            "tab" => KeyCode::Tab,
            "esc" | "escape" => KeyCode::Esc,
            s if s.len() == 1 => KeyCode::Char(s.chars().next().unwrap()),
            _ => KeyCode::Char(' '), // fallback
        }
    }

    /// Parse a list of key strings into KeyCodes
    fn parse_keys(keys: &[String]) -> Vec<KeyCode> {
        keys.iter().map(|s| Self::parse_key(s)).collect()
    }

    /// Create keybindings from settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            move_left: Self::parse_keys(&settings.keys.move_left),
            move_right: Self::parse_keys(&settings.keys.move_right),
            rotate: Self::parse_keys(&settings.keys.rotate),
            soft_drop: Self::parse_keys(&settings.keys.soft_drop),
            quit: Self::parse_keys(&settings.keys.quit),
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_left: vec![KeyCode::Left],
            move_right: vec![KeyCode::Right],
            rotate: vec![KeyCode::Up, KeyCode::Char('x')],
            soft_drop: vec![KeyCode::Down],
            quit: vec![KeyCode::Char('q'), KeyCode::Esc],
        }
    }
}

/// Maps key presses to game actions
pub struct InputHandler {
    bindings: KeyBindings,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            bindings: KeyBindings::default(),
        }
    }

    /// Create input handler from settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            bindings: KeyBindings::from_settings(settings),
        }
    }

    /// Map a key press to its bound action, if any
    pub fn map_key(&self, key: KeyEvent) -> Option<Action> {
        let code = key.code;
        if self.bindings.move_left.contains(&code) {
            Some(Action::MoveLeft)
        } else if self.bindings.move_right.contains(&code) {
            Some(Action::MoveRight)
        } else if self.bindings.rotate.contains(&code) {
            Some(Action::Rotate)
        } else if self.bindings.soft_drop.contains(&code) {
            Some(Action::SoftDrop)
        } else if self.bindings.quit.contains(&code) {
            Some(Action::Quit)
        } else {
            None
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
