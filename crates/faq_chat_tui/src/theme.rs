//! Colors for the chat view, drawn from ratatui's Tailwind palette.

use ratatui::style::palette::tailwind;
use ratatui::style::Color;

pub struct Theme {
    pub border: Color,
    pub border_active: Color,
    pub fg_muted: Color,
    /// Background of user message bubbles.
    pub user_bg: Color,
    pub user_fg: Color,
    /// Background of bot message bubbles.
    pub bot_bg: Color,
    pub bot_fg: Color,
    pub button_bg: Color,
    pub button_fg: Color,
    pub pending: Color,
}

pub const THEME: Theme = Theme {
    border: tailwind::SLATE.c600,
    border_active: tailwind::BLUE.c400,
    fg_muted: tailwind::SLATE.c500,
    user_bg: tailwind::BLUE.c100,
    user_fg: tailwind::SLATE.c900,
    bot_bg: tailwind::GRAY.c200,
    bot_fg: tailwind::SLATE.c900,
    button_bg: tailwind::BLUE.c500,
    button_fg: Color::White,
    pending: tailwind::AMBER.c400,
};
