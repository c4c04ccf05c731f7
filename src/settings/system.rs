// SPDX-License-Identifier: MPL-2.0

//! Environment signals that feed the derived settings.

use dark_light;

/// Color scheme reported by the operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SystemColorScheme {
    /// Light scheme, also the neutral assumption when nothing is reported.
    #[default]
    Light,
    /// Dark scheme.
    Dark,
}

/// Snapshot of the host environment's accessibility-relevant preferences.
///
/// The context starts from the neutral default and only changes when the
/// host pushes a snapshot, so headless embedders never block on platform
/// queries they cannot answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SystemPreferences {
    /// Preferred color scheme.
    pub color_scheme: SystemColorScheme,
    /// Whether the environment asks for reduced motion.
    pub reduced_motion: bool,
}

impl SystemPreferences {
    /// Queries the operating system for the current color scheme.
    ///
    /// Detection errors and unspecified schemes count as light. There is
    /// no portable reduced-motion signal, so that field stays false until
    /// the host supplies one.
    #[must_use]
    pub fn detect() -> Self {
        let color_scheme = if matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)) {
            SystemColorScheme::Dark
        } else {
            SystemColorScheme::Light
        };

        Self {
            color_scheme,
            reduced_motion: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_neutral() {
        let preferences = SystemPreferences::default();
        assert_eq!(preferences.color_scheme, SystemColorScheme::Light);
        assert!(!preferences.reduced_motion);
    }

    #[test]
    fn detect_returns_a_snapshot() {
        // System-dependent; only verify it does not panic.
        let _ = SystemPreferences::detect();
    }
}
