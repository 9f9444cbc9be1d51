//! Color theme for the TUI
//!
//! Colors can be configured via a `tui_colors.toml` file in the current working directory.
//! If the file doesn't exist or is invalid, default colors are used.
//!
//! Example `tui_colors.toml`:
//! ```toml
//! light_square = 200, 180, 150
//! dark_square = 120, 90, 60
//! piece_red = 220, 50, 40
//! piece_black = 20, 20, 20
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use ratatui::style::{Color, Modifier, Style};

use crate::board::Player;

const CONFIG_FILE: &str = "tui_colors.toml";

/// Color theme for the checkers TUI
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub light_square: Color,
    pub dark_square: Color,
    pub piece_red: Color,
    pub piece_black: Color,
    pub selected: Color,
    pub move_target: Color,
    pub cursor: Color,
    pub border: Color,
    pub text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config_file().unwrap_or_else(Self::builtin)
    }
}

impl Theme {
    /// Built-in colors, used when no config file is present.
    pub fn builtin() -> Self {
        Self {
            light_square: Color::Rgb(200, 180, 150),
            dark_square: Color::Rgb(120, 90, 60),
            piece_red: Color::Rgb(220, 50, 40),
            piece_black: Color::Rgb(20, 20, 20),
            selected: Color::Rgb(70, 130, 180),
            move_target: Color::Yellow,
            cursor: Color::Rgb(90, 160, 90),
            border: Color::Gray,
            text: Color::White,
        }
    }

    /// Load theme from `tui_colors.toml` in the current working directory.
    /// Returns None if the file doesn't exist or can't be parsed.
    fn from_config_file() -> Option<Self> {
        let config_path = Path::new(CONFIG_FILE);
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(config_path).ok()?;
        Self::from_config_str(&contents)
    }

    /// Parses `key = r, g, b` lines. All four board colors must be present.
    pub fn from_config_str(contents: &str) -> Option<Self> {
        let mut colors = HashMap::new();

        for line in contents.lines() {
            let line = line.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let rgb_str = value.trim().trim_start_matches('[').trim_end_matches(']');
                let rgb_parts: Vec<&str> = rgb_str.split(',').map(|s| s.trim()).collect();
                if rgb_parts.len() == 3 {
                    if let (Ok(r), Ok(g), Ok(b)) = (
                        rgb_parts[0].parse::<u8>(),
                        rgb_parts[1].parse::<u8>(),
                        rgb_parts[2].parse::<u8>(),
                    ) {
                        colors.insert(key.trim().to_string(), Color::Rgb(r, g, b));
                    }
                }
            }
        }

        Some(Self {
            light_square: *colors.get("light_square")?,
            dark_square: *colors.get("dark_square")?,
            piece_red: *colors.get("piece_red")?,
            piece_black: *colors.get("piece_black")?,
            ..Self::builtin()
        })
    }

    pub fn square_background(&self, is_dark: bool) -> Color {
        if is_dark {
            self.dark_square
        } else {
            self.light_square
        }
    }

    pub fn piece_style(&self, background: Color, owner: Option<Player>) -> Style {
        let style = Style::default().bg(background);
        match owner {
            Some(Player::Red) => style.fg(self.piece_red).add_modifier(Modifier::BOLD),
            Some(Player::Black) => style.fg(self.piece_black).add_modifier(Modifier::BOLD),
            None => style.fg(self.move_target),
        }
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }
}
