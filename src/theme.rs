use yew::prelude::UseStateHandle;

/// Display mode for the whole page. Held in a single piece of UI state at the
/// app root and read by every section; flipped only by the toggle button.
/// Not persisted across reloads.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Shared state handle distributed through Yew context.
pub type ThemeHandle = UseStateHandle<Theme>;

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// CSS variant suffix appended to every themed class set.
    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Glyph shown on the toggle button: the mode you would switch to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }
}

/// One self-contained visual block of the page, in render order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Section {
    Hero,
    HowItWorks,
    Features,
    Gallery,
    TechStack,
}

impl Section {
    pub const ALL: [Self; 5] = [
        Self::Hero,
        Self::HowItWorks,
        Self::Features,
        Self::Gallery,
        Self::TechStack,
    ];

    pub fn base_class(self) -> &'static str {
        match self {
            Self::Hero => "hero-section",
            Self::HowItWorks => "howitworks-section",
            Self::Features => "features-section",
            Self::Gallery => "gallery-section",
            Self::TechStack => "techstack-section",
        }
    }

    /// HowItWorks and Gallery sit on the alternate surface color so adjacent
    /// sections stay visually separated in both modes.
    pub fn alternate_surface(self) -> bool {
        matches!(self, Self::HowItWorks | Self::Gallery)
    }

    /// Full class set for this section under the given theme.
    pub fn class(self, theme: Theme) -> String {
        if self.alternate_surface() {
            format!("{} alt-surface {}", self.base_class(), theme.name())
        } else {
            format!("{} {}", self.base_class(), theme.name())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn initial_theme_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn toggling_is_an_involution() {
        for start in [Theme::Light, Theme::Dark] {
            assert_eq!(start.toggled().toggled(), start);
            assert_ne!(start.toggled(), start);
        }
        // an odd number of presses lands on the opposite variant
        let mut theme = Theme::default();
        for _ in 0..5 {
            theme = theme.toggled();
        }
        assert_eq!(theme, Theme::Dark);
        theme = theme.toggled();
        assert_eq!(theme, Theme::Light);
    }

    #[test]
    fn toggle_icon_shows_moon_in_light_and_sun_in_dark() {
        assert_eq!(Theme::Light.toggle_icon(), "fas fa-moon");
        assert_eq!(Theme::Dark.toggle_icon(), "fas fa-sun");
    }

    #[test]
    fn every_section_is_styled_under_both_themes() {
        for section in Section::ALL {
            let light = section.class(Theme::Light);
            let dark = section.class(Theme::Dark);
            assert!(light.starts_with(section.base_class()));
            assert!(light.ends_with("light"));
            assert!(dark.ends_with("dark"));
            assert_ne!(light, dark);
        }
    }

    #[test]
    fn alternate_surface_sections_carry_the_extra_class() {
        assert!(Section::HowItWorks.class(Theme::Light).contains("alt-surface"));
        assert!(Section::Gallery.class(Theme::Dark).contains("alt-surface"));
        assert!(!Section::Hero.class(Theme::Light).contains("alt-surface"));
    }
}
