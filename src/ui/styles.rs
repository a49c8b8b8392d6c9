use crate::domain::{AccentColor, AppTheme, Priority};
use crate::persistence::Settings;
use ratatui::style::{Color, Modifier, Style};

/// Terminal color for an accent choice
pub fn accent_to_color(accent: AccentColor) -> Color {
    match accent {
        AccentColor::Green => Color::Green,
        AccentColor::Blue => Color::Blue,
        AccentColor::Red => Color::Red,
        AccentColor::Orange => Color::Rgb(255, 150, 40),
        AccentColor::Purple => Color::Rgb(160, 90, 220),
        AccentColor::Pink => Color::Rgb(255, 120, 180),
        AccentColor::Yellow => Color::Yellow,
        AccentColor::Mint => Color::Rgb(120, 220, 180),
        AccentColor::Teal => Color::Rgb(60, 180, 190),
        AccentColor::Indigo => Color::Rgb(90, 100, 220),
        AccentColor::Brown => Color::Rgb(165, 120, 80),
    }
}

/// Resolved styles for the active theme and accent color
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    accent: Color,
    fg: Color,
    dim: Color,
}

impl Palette {
    pub fn new(settings: &Settings) -> Self {
        let fg = match settings.app_theme {
            AppTheme::Light => Color::Black,
            // System defers to the terminal's own scheme
            AppTheme::System | AppTheme::Dark => Color::White,
        };
        Self {
            accent: accent_to_color(settings.accent_color),
            fg,
            dim: Color::DarkGray,
        }
    }

    pub fn default_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.dim)
    }

    /// Overdue date labels
    pub fn overdue_style(&self) -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    /// Due within 24 hours
    pub fn upcoming_style(&self) -> Style {
        Style::default().fg(Color::Rgb(255, 150, 40))
    }

    pub fn secondary_style(&self) -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn done_style(&self) -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn priority_style(&self, priority: Priority) -> Style {
        match priority {
            Priority::Low => Style::default().fg(Color::Green),
            Priority::Medium => Style::default().fg(Color::Rgb(255, 150, 40)),
            Priority::High => Style::default().fg(Color::Red),
        }
    }

    pub fn modal_bg_style(&self) -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }

    pub fn modal_title_style(&self) -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    pub fn chart_style(&self) -> Style {
        Style::default().fg(self.accent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AccentColor;

    #[test]
    fn test_every_accent_maps_to_a_color() {
        for accent in AccentColor::all() {
            // Must not panic and must produce distinct colors for the
            // named terminal primaries
            let _ = accent_to_color(*accent);
        }
        assert_ne!(
            accent_to_color(AccentColor::Green),
            accent_to_color(AccentColor::Blue)
        );
    }

    #[test]
    fn test_light_theme_flips_foreground() {
        let light = Palette::new(&Settings {
            app_theme: AppTheme::Light,
            accent_color: AccentColor::Green,
        });
        let dark = Palette::new(&Settings {
            app_theme: AppTheme::Dark,
            accent_color: AccentColor::Green,
        });
        assert_ne!(light.default_style(), dark.default_style());
    }
}
