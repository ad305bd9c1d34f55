//! The persisted dark/light display preference.

/// Display mode choice, persisted under a single storage key as `"dark"` /
/// `"light"`. Anything else found in storage collapses to the dark default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Dark color scheme (the default).
    Dark,
    /// Light color scheme.
    Light,
}

impl Theme {
    /// Wire value written to storage and to the `data-theme` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Resolve a stored or attribute value; absent or unrecognized input
    /// falls back to dark.
    pub fn from_preference(value: Option<&str>) -> Self {
        match value {
            Some(raw) if raw.eq_ignore_ascii_case("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// The other member of the two-state cycle.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn missing_preference_defaults_to_dark() {
        assert_eq!(Theme::from_preference(None), Theme::Dark);
    }

    #[test]
    fn stored_light_is_recognized_case_insensitively() {
        assert_eq!(Theme::from_preference(Some("light")), Theme::Light);
        assert_eq!(Theme::from_preference(Some("Light")), Theme::Light);
    }

    #[test]
    fn unrecognized_preference_falls_back_to_dark() {
        assert_eq!(Theme::from_preference(Some("solarized")), Theme::Dark);
        assert_eq!(Theme::from_preference(Some("")), Theme::Dark);
    }

    #[test]
    fn toggle_is_an_involution() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }
}
