//! Everforest colors for the terminal UI, dark and light.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemeVariant {
    #[default]
    EverforestDark,
    EverforestLight,
}

#[derive(Debug, Clone)]
pub struct ColorPalette {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub favorite: Color,
    pub muted: Color,
    pub selection: Color,
}

/// What is being drawn; the theme maps each to a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// Suggestion and saved-name text
    Text,
    /// Screen titles
    Title,
    Border,
    /// Divider rows between suggestions
    Separator,
    /// Row under the cursor
    Selected,
    /// Filled heart of a saved name
    Favorite,
    /// Key hints and empty-state messages
    Hint,
    Background,
}

#[derive(Debug, Clone)]
pub struct Theme {
    variant: ThemeVariant,
    colors: ColorPalette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeVariant::default())
    }
}

impl Theme {
    pub fn new(variant: ThemeVariant) -> Self {
        let colors = match variant {
            ThemeVariant::EverforestDark => ColorPalette {
                background: Color::Rgb(45, 53, 59),    // #2d353b
                foreground: Color::Rgb(211, 198, 170), // #d3c6aa
                accent: Color::Rgb(167, 192, 128),     // #a7c080
                favorite: Color::Rgb(230, 126, 128),   // #e67e80
                muted: Color::Rgb(116, 125, 135),      // #747d87
                selection: Color::Rgb(64, 72, 78),     // #40484e
            },
            ThemeVariant::EverforestLight => ColorPalette {
                background: Color::Rgb(253, 246, 227), // #fdf6e3
                foreground: Color::Rgb(92, 106, 114),  // #5c6a72
                accent: Color::Rgb(141, 161, 1),       // #8da101
                favorite: Color::Rgb(248, 85, 82),     // #f85552
                muted: Color::Rgb(150, 160, 170),      // #96a0aa
                selection: Color::Rgb(243, 236, 217),  // #f3ecd9
            },
        };

        Self { variant, colors }
    }

    pub fn variant(&self) -> ThemeVariant {
        self.variant
    }

    pub fn colors(&self) -> &ColorPalette {
        &self.colors
    }

    pub fn toggle(&mut self) {
        let next = match self.variant {
            ThemeVariant::EverforestDark => ThemeVariant::EverforestLight,
            ThemeVariant::EverforestLight => ThemeVariant::EverforestDark,
        };
        *self = Self::new(next);
    }

    pub fn ratatui_style(&self, element: Element) -> Style {
        let base = Style::default().bg(self.colors.background);
        match element {
            Element::Text | Element::Background => base.fg(self.colors.foreground),
            Element::Title => base.fg(self.colors.accent).add_modifier(Modifier::BOLD),
            Element::Border | Element::Separator | Element::Hint => base.fg(self.colors.muted),
            Element::Selected => Style::default()
                .fg(self.colors.foreground)
                .bg(self.colors.selection)
                .add_modifier(Modifier::BOLD),
            Element::Favorite => base.fg(self.colors.favorite),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_switches_palette() {
        let mut theme = Theme::default();
        assert_eq!(theme.variant(), ThemeVariant::EverforestDark);
        theme.toggle();
        assert_eq!(theme.variant(), ThemeVariant::EverforestLight);
        assert_eq!(theme.colors().background, Color::Rgb(253, 246, 227));
        theme.toggle();
        assert_eq!(theme.variant(), ThemeVariant::EverforestDark);
    }

    #[test]
    fn test_selected_rows_use_selection_background() {
        let theme = Theme::default();
        let style = theme.ratatui_style(Element::Selected);
        assert_eq!(style.bg, Some(theme.colors().selection));
        assert_eq!(
            theme.ratatui_style(Element::Favorite).fg,
            Some(theme.colors().favorite)
        );
    }
}
