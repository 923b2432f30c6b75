use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::domain::theme::Theme;

const THEME_FILE: &str = "theme.json";

#[derive(Debug, Serialize, Deserialize)]
struct ThemeFile {
    theme: Theme,
}

/// Remembers the light/dark choice between sessions
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(THEME_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saved theme, or the default when the file is missing or unreadable
    pub fn load(&self) -> Theme {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Theme::default(),
            Err(e) => {
                log::warn!("Cannot read {}: {e}", self.path.display());
                return Theme::default();
            }
        };
        match serde_json::from_str::<ThemeFile>(&content) {
            Ok(file) => file.theme,
            Err(e) => {
                log::warn!("Ignoring malformed {}: {e}", self.path.display());
                Theme::default()
            }
        }
    }

    pub fn save(&self, theme: Theme) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&ThemeFile { theme })?;
        fs::write(&self.path, content)
    }
}
