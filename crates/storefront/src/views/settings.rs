//! Settings page view-model.

use megashop_core::{Locale, Theme};

use crate::i18n;

/// The settings page: current theme and locale with localized labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsView {
    /// Localized page title.
    pub title: String,
    /// Localized theme section label.
    pub theme_label: String,
    /// Localized name of the active theme.
    pub theme_value: String,
    /// Localized name of the theme a toggle would switch to.
    pub theme_toggle_label: String,
    /// Localized language section label.
    pub language_label: String,
    /// Active locale code ("ru" / "uz" / "en").
    pub locale_code: &'static str,
    /// All selectable locale codes.
    pub locale_choices: [&'static str; 3],
}

impl SettingsView {
    /// Build the settings page from the current theme and locale.
    #[must_use]
    pub fn build(locale: Locale, theme: Theme) -> Self {
        let theme_key = |theme: Theme| match theme {
            Theme::Light => "light",
            Theme::Dark => "dark",
        };

        Self {
            title: i18n::translate(locale, "settings"),
            theme_label: i18n::translate(locale, "theme"),
            theme_value: i18n::translate(locale, theme_key(theme)),
            theme_toggle_label: i18n::translate(locale, theme_key(theme.toggled())),
            language_label: i18n::translate(locale, "language"),
            locale_code: locale.as_str(),
            locale_choices: [
                Locale::Ru.as_str(),
                Locale::Uz.as_str(),
                Locale::En.as_str(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_follow_locale_and_theme() {
        let view = SettingsView::build(Locale::En, Theme::Light);
        assert_eq!(view.title, "Settings");
        assert_eq!(view.theme_value, "Light");
        assert_eq!(view.theme_toggle_label, "Dark");

        let view = SettingsView::build(Locale::Ru, Theme::Dark);
        assert_eq!(view.theme_value, "Тёмная");
        assert_eq!(view.theme_toggle_label, "Светлая");
    }

    #[test]
    fn test_locale_choices() {
        let view = SettingsView::build(Locale::Uz, Theme::Light);
        assert_eq!(view.locale_code, "uz");
        assert_eq!(view.locale_choices, ["ru", "uz", "en"]);
    }
}
