use std::{collections::HashMap, str::FromStr};

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

use crate::domain::theme::Theme;

/// Named style slots used by the views
pub mod slot {
    pub const TEXT: &str = "text";
    pub const MUTED: &str = "muted";
    pub const ACCENT: &str = "accent";
    pub const BORDER: &str = "border";
    pub const SELECTED: &str = "selected";
    pub const TAB_ACTIVE: &str = "tab_active";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

/// Palettes per theme
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<Theme, HashMap<String, Style>>);

impl Styles {
    /// Style for `slot` in `theme`, falling back to the terminal default
    pub fn get_style(&self, theme: Theme, slot: &str) -> Style {
        self.0
            .get(&theme)
            .and_then(|palette| palette.get(slot))
            .copied()
            .unwrap_or_default()
    }

    pub fn palette(&self, theme: Theme) -> Palette<'_> {
        Palette {
            styles: self,
            theme,
        }
    }

    /// Adds every slot of `defaults` that is not styled yet
    pub fn merge_defaults(&mut self, defaults: &Styles) {
        for (theme, palette) in defaults.iter() {
            let user_palette = self.0.entry(*theme).or_default();
            for (slot, style) in palette {
                user_palette.entry(slot.clone()).or_insert(*style);
            }
        }
    }
}

/// Styles of one theme
#[derive(Clone, Copy, Debug)]
pub struct Palette<'a> {
    styles: &'a Styles,
    theme: Theme,
}

impl Palette<'_> {
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn style(&self, slot: &str) -> Style {
        self.styles.get_style(self.theme, slot)
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<Theme, HashMap<String, String>>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(theme, inner_map)| {
                let converted_inner_map = inner_map
                    .into_iter()
                    .map(|(slot, raw)| parse_style(&raw).map(|style| (slot, style)))
                    .collect::<Result<HashMap<_, _>, _>>()
                    .map_err(serde::de::Error::custom)?;
                Ok((theme, converted_inner_map))
            })
            .collect::<Result<HashMap<_, _>, D::Error>>()?;

        Ok(Styles(styles))
    }
}

/// Parses `"bold blue on black"` style descriptions.
/// Colors accept any ratatui color name, `#rrggbb` or an indexed value.
pub fn parse_style(line: &str) -> Result<Style, String> {
    let (foreground, background) = match line.split_once(" on ") {
        Some((fg, bg)) => (fg, Some(bg)),
        None => (line, None),
    };

    let mut style = Style::default();
    let mut words: Vec<&str> = foreground.split_whitespace().collect();

    if let Some(color) = words.last().and_then(|word| parse_color(word)) {
        style = style.fg(color);
        words.pop();
    }
    for word in words {
        style = style.add_modifier(parse_modifier(word)?);
    }

    if let Some(background) = background {
        let color =
            parse_color(background.trim()).ok_or_else(|| format!("Unknown color {background}"))?;
        style = style.bg(color);
    }

    Ok(style)
}

fn parse_color(raw: &str) -> Option<Color> {
    Color::from_str(raw).ok()
}

fn parse_modifier(raw: &str) -> Result<Modifier, String> {
    let modifier = match raw.to_ascii_lowercase().as_str() {
        "bold" => Modifier::BOLD,
        "dim" => Modifier::DIM,
        "italic" => Modifier::ITALIC,
        "underline" | "underlined" => Modifier::UNDERLINED,
        "reversed" | "inverse" => Modifier::REVERSED,
        "crossed_out" | "strikethrough" => Modifier::CROSSED_OUT,
        _ => return Err(format!("Unknown style {raw}")),
    };
    Ok(modifier)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_style_default() {
        assert_eq!(parse_style(""), Ok(Style::default()));
    }

    #[test]
    fn test_parse_style_foreground_and_modifiers() {
        assert_eq!(
            parse_style("bold italic blue"),
            Ok(Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC))
        );
    }

    #[test]
    fn test_parse_style_background() {
        assert_eq!(
            parse_style("white on #1e293b"),
            Ok(Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(0x1e, 0x29, 0x3b)))
        );
    }

    #[test]
    fn test_parse_style_unknown_word() {
        assert!(parse_style("sparkly red").is_err());
        assert!(parse_style("red on nothing").is_err());
    }

    #[test]
    fn test_palette_falls_back_to_default() -> Result<(), json5::Error> {
        let styles: Styles = json5::from_str(r#"{ "dark": { "accent": "lightblue" } }"#)?;

        assert_eq!(
            styles.palette(Theme::Dark).style(slot::ACCENT),
            Style::default().fg(Color::LightBlue)
        );
        assert_eq!(styles.palette(Theme::Light).style(slot::ACCENT), Style::default());
        Ok(())
    }
}
