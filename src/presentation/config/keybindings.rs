use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de::Deserializer, Deserialize, Serialize};

use crate::domain::ui::View;

/// Commands a key can be bound to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
pub enum Action {
    Quit,
    Suspend,
    Submit,
    ShowCompose,
    ShowHistory,
    ToggleView,
    ToggleTheme,
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    DeleteSelected,
    Reload,
}

/// Key bindings per view
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<View, HashMap<KeyEvent, Action>>);

impl KeyBindings {
    pub fn action_for(&self, view: View, key: &KeyEvent) -> Option<&Action> {
        let key = KeyEvent::new(key.code, key.modifiers);
        self.0.get(&view).and_then(|bindings| bindings.get(&key))
    }

    /// Keys bound to `action` in `view`, rendered for the status bar hints
    pub fn keys_for(&self, view: View, action: Action) -> Vec<String> {
        let mut keys: Vec<String> = self
            .0
            .get(&view)
            .into_iter()
            .flat_map(|bindings| bindings.iter())
            .filter(|(_, bound)| **bound == action)
            .map(|(key, _)| key_event_to_string(key))
            .collect();
        keys.sort();
        keys
    }

    /// Adds every binding of `defaults` whose key is not bound yet
    pub fn merge_defaults(&mut self, defaults: &KeyBindings) {
        for (view, bindings) in defaults.iter() {
            let user_bindings = self.0.entry(*view).or_default();
            for (key, action) in bindings {
                user_bindings.entry(*key).or_insert(*action);
            }
        }
    }
}

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<View, HashMap<String, Action>>::deserialize(deserializer)?;

        let keybindings = parsed_map
            .into_iter()
            .map(|(view, inner_map)| {
                let converted_inner_map = inner_map
                    .into_iter()
                    .map(|(key_str, cmd)| parse_key_event(&key_str).map(|key| (key, cmd)))
                    .collect::<Result<HashMap<_, _>, _>>()
                    .map_err(serde::de::Error::custom)?;
                Ok((view, converted_inner_map))
            })
            .collect::<Result<HashMap<_, _>, D::Error>>()?;

        Ok(KeyBindings(keybindings))
    }
}

/// Parses `"<ctrl-s>"`, `"tab"`, `"G"` and similar into a key event
pub fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let raw_lower = raw.to_ascii_lowercase();
    let inner = raw_lower
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .unwrap_or(&raw_lower);
    // Upper-case letters keep their case
    if raw.chars().count() == 1 {
        if let Some(c) = raw.chars().next() {
            let modifiers = if c.is_ascii_uppercase() {
                KeyModifiers::SHIFT
            } else {
                KeyModifiers::NONE
            };
            return Ok(KeyEvent::new(KeyCode::Char(c), modifiers));
        }
    }
    let (remaining, modifiers) = extract_modifiers(inner);
    parse_key_code_with_modifiers(remaining, modifiers)
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        match current {
            rest if rest.starts_with("ctrl-") => {
                modifiers.insert(KeyModifiers::CONTROL);
                current = &rest[5..];
            }
            rest if rest.starts_with("alt-") => {
                modifiers.insert(KeyModifiers::ALT);
                current = &rest[4..];
            }
            rest if rest.starts_with("shift-") => {
                modifiers.insert(KeyModifiers::SHIFT);
                current = &rest[6..];
            }
            _ => break,
        };
    }

    (current, modifiers)
}

fn parse_key_code_with_modifiers(
    raw: &str,
    mut modifiers: KeyModifiers,
) -> Result<KeyEvent, String> {
    let c = match raw {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => {
            modifiers.insert(KeyModifiers::SHIFT);
            KeyCode::BackTab
        }
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "f1" => KeyCode::F(1),
        "f2" => KeyCode::F(2),
        "f3" => KeyCode::F(3),
        "f4" => KeyCode::F(4),
        "f5" => KeyCode::F(5),
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        c if c.chars().count() == 1 => {
            let mut chars = c.chars();
            match chars.next() {
                Some(ch) if modifiers.contains(KeyModifiers::SHIFT) => {
                    KeyCode::Char(ch.to_ascii_uppercase())
                }
                Some(ch) => KeyCode::Char(ch),
                None => return Err(format!("Unable to parse {raw}")),
            }
        }
        _ => return Err(format!("Unable to parse {raw}")),
    };
    Ok(KeyEvent::new(c, modifiers))
}

/// Short human-readable form of a key event, e.g. `ctrl-s`
pub fn key_event_to_string(key_event: &KeyEvent) -> String {
    let code = match key_event.code {
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pageup".to_string(),
        KeyCode::PageDown => "pagedown".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => "backtab".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Insert => "insert".to_string(),
        KeyCode::F(n) => format!("f{n}"),
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "esc".to_string(),
        _ => "?".to_string(),
    };

    let mut modifiers = Vec::with_capacity(2);
    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        modifiers.push("ctrl");
    }
    if key_event.modifiers.contains(KeyModifiers::ALT) {
        modifiers.push("alt");
    }

    let mut key = modifiers.join("-");
    if !key.is_empty() {
        key.push('-');
    }
    key.push_str(&code);
    key
}
