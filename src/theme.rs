use ratatui::style::Color;

/// Colors used to draw the court.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub background: Color,
    pub border: Color,
    pub text: Color,
    pub accent: Color,
    pub paddle: Color,
    /// Paddle that currently has the turn.
    pub paddle_active: Color,
    pub ball: Color,
}

impl ThemeColors {
    /// White on black.
    pub const fn classic() -> Self {
        Self {
            background: Color::Black,
            border: Color::Gray,
            text: Color::White,
            accent: Color::Rgb(230, 219, 116),
            paddle: Color::White,
            paddle_active: Color::Rgb(102, 217, 239),
            ball: Color::White,
        }
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self::classic()
    }
}
