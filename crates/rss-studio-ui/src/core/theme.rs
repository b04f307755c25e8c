//! Light/dark theme selection.
//!
//! The displayed mode follows the OS `prefers-color-scheme` until the user
//! toggles once; from then on the persisted choice wins.

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light theme mode.
    #[default]
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier used in CSS datasets and storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other mode.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    const fn from_os(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

/// Current theme plus whether it came from an explicit user choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeController {
    /// Displayed mode.
    pub mode: ThemeMode,
    /// `true` once a choice is persisted.
    pub explicit: bool,
}

impl ThemeController {
    /// Persisted choice if any, else the OS preference.
    #[must_use]
    pub const fn initial(persisted: Option<ThemeMode>, prefers_dark: bool) -> Self {
        match persisted {
            Some(mode) => Self {
                mode,
                explicit: true,
            },
            None => Self {
                mode: ThemeMode::from_os(prefers_dark),
                explicit: false,
            },
        }
    }

    /// Flip the mode; the returned value must be persisted by the caller.
    pub const fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.flipped();
        self.explicit = true;
        self.mode
    }

    /// Apply an OS preference change. Ignored once a choice is persisted.
    pub const fn on_os_change(&mut self, prefers_dark: bool) {
        if !self.explicit {
            self.mode = ThemeMode::from_os(prefers_dark);
        }
    }

    /// `aria-pressed` for the toggle: pressed while dark.
    #[must_use]
    pub const fn pressed(&self) -> bool {
        matches!(self.mode, ThemeMode::Dark)
    }

    /// Translation key for the toggle's visible label.
    #[must_use]
    pub const fn label_key(&self) -> &'static str {
        match self.mode {
            ThemeMode::Dark => "theme.to_light",
            ThemeMode::Light => "theme.to_dark",
        }
    }

    /// Translation key for the toggle's `aria-label`.
    #[must_use]
    pub const fn aria_key(&self) -> &'static str {
        match self.mode {
            ThemeMode::Dark => "theme.to_light_aria",
            ThemeMode::Light => "theme.to_dark_aria",
        }
    }
}
