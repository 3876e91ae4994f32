//! Rendering: category selector, transcript, input bar and key hints.
//!
//! Reads the state only, apart from storing the clamped transcript scroll and
//! the submit button area used for mouse hit-testing.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::state::{
    ChatState, Focus, Role, CATEGORY_PLACEHOLDER, INPUT_PLACEHOLDER, SUBMIT_LABEL,
};
use crate::theme::THEME;

const BUTTON_WIDTH: u16 = 8;

/// Render the whole view into `frame`.
pub fn render(state: &mut ChatState, frame: &mut Frame<'_>) {
    let [selector, transcript, input_row, hints] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_selector(state, frame, selector);
    render_transcript(state, frame, transcript);
    render_input(state, frame, input_row);
    render_hints(frame, hints);
}

fn border_style(active: bool) -> Style {
    if active {
        Style::default().fg(THEME.border_active)
    } else {
        Style::default().fg(THEME.border)
    }
}

fn render_selector(state: &ChatState, frame: &mut Frame<'_>, area: Rect) {
    let focused = state.focus == Focus::Category;
    let label = if state.selected_category.is_empty() {
        Span::styled(CATEGORY_PLACEHOLDER, Style::default().fg(THEME.fg_muted))
    } else {
        Span::raw(state.selected_category.as_str())
    };
    let line = if focused {
        Line::from(vec![Span::raw("◀ "), label, Span::raw(" ▶")])
    } else {
        Line::from(vec![Span::raw("  "), label])
    };
    let title = format!(
        " カテゴリを選択: ({}/{}) ",
        state.selected_option_index() + 1,
        state.categories.len() + 1
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused))
        .title(title);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Transcript lines in append order; user messages right-aligned.
fn transcript_lines(state: &ChatState) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    for msg in &state.transcript {
        let (style, alignment) = match msg.role {
            Role::User => (
                Style::default().fg(THEME.user_fg).bg(THEME.user_bg),
                Alignment::Right,
            ),
            Role::Bot => (
                Style::default().fg(THEME.bot_fg).bg(THEME.bot_bg),
                Alignment::Left,
            ),
        };
        lines.push(Line::from(""));
        let mut body: Vec<&str> = msg.text.lines().collect();
        if body.is_empty() {
            body.push("");
        }
        for text in body {
            lines.push(Line::from(Span::styled(format!(" {text} "), style)).alignment(alignment));
        }
    }
    lines
}

fn render_transcript(state: &mut ChatState, frame: &mut Frame<'_>, area: Rect) {
    let body = Paragraph::new(Text::from(transcript_lines(state))).wrap(Wrap { trim: false });
    // Measured with the same word wrapper that renders, on the unbordered body.
    let content_height = body
        .line_count(area.width.saturating_sub(2))
        .min(u16::MAX as usize) as u16;
    let visible_height = area.height.saturating_sub(2);
    let max_scroll = content_height.saturating_sub(visible_height);
    let scroll = state.scroll.min(max_scroll);

    let history = body
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(THEME.border)),
        )
        .scroll((scroll, 0));
    frame.render_widget(history, area);

    state.scroll = scroll;
}

fn render_input(state: &mut ChatState, frame: &mut Frame<'_>, area: Rect) {
    let [field, button] =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(BUTTON_WIDTH)]).areas(area);
    let focused = state.focus == Focus::Input;

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused));
    if state.pending > 0 {
        block = block.title(Span::styled(
            format!(" 回答待ち ({}) ", state.pending),
            Style::default().fg(THEME.pending),
        ));
    }

    let before_cursor = Span::raw(&state.draft[..state.cursor]).width() as u16;
    let inner_width = field.width.saturating_sub(2);
    let offset = before_cursor.saturating_sub(inner_width.saturating_sub(1));

    let content = if state.draft.is_empty() {
        Line::from(Span::styled(
            INPUT_PLACEHOLDER,
            Style::default().fg(THEME.fg_muted),
        ))
    } else {
        Line::from(state.draft.as_str())
    };
    frame.render_widget(
        Paragraph::new(content).block(block).scroll((0, offset)),
        field,
    );

    let submit = Paragraph::new(SUBMIT_LABEL)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(THEME.button_fg)
                .bg(THEME.button_bg)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(submit, button);
    state.submit_button = Some(button);

    if focused {
        frame.set_cursor_position(Position::new(
            field.x + 1 + before_cursor - offset,
            field.y + 1,
        ));
    }
}

fn render_hints(frame: &mut Frame<'_>, area: Rect) {
    let hints = Line::from(Span::styled(
        " Enter: 送信  Tab: カテゴリ/入力の切替  ↑↓: カテゴリ選択・スクロール  Esc: 終了",
        Style::default().fg(THEME.fg_muted),
    ));
    frame.render_widget(Paragraph::new(hints), area);
}
