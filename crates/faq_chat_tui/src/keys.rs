//! Keyboard and mouse handling: terminal input → [`ChatEvent`]s.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::state::{ChatEvent, ChatState, Effect, Focus};

const PAGE_ROWS: u16 = 10;
const WHEEL_ROWS: u16 = 3;

impl ChatState {
    /// Handle a key press. Returns the effect a resulting submit requested.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Effect> {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) | (_, KeyCode::Esc) => {
                self.update(ChatEvent::Quit)
            }
            (_, KeyCode::Tab) | (_, KeyCode::BackTab) => self.update(ChatEvent::ToggleFocus),
            (_, KeyCode::PageUp) => self.update(ChatEvent::ScrollUp(PAGE_ROWS)),
            (_, KeyCode::PageDown) => self.update(ChatEvent::ScrollDown(PAGE_ROWS)),
            _ => match self.focus {
                Focus::Input => self.handle_input_key(key),
                Focus::Category => self.handle_selector_key(key),
            },
        }
    }

    fn handle_selector_key(&mut self, key: KeyEvent) -> Option<Effect> {
        match key.code {
            KeyCode::Up | KeyCode::Left => {
                let value = self.neighbour_category(-1);
                self.update(ChatEvent::SelectCategory(value))
            }
            KeyCode::Down | KeyCode::Right => {
                let value = self.neighbour_category(1);
                self.update(ChatEvent::SelectCategory(value))
            }
            KeyCode::Enter => self.update(ChatEvent::ToggleFocus),
            _ => None,
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> Option<Effect> {
        match key.code {
            KeyCode::Enter => self.update(ChatEvent::Submit),
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                let mut text = self.draft.clone();
                text.insert(self.cursor, c);
                let cursor = self.cursor + c.len_utf8();
                self.update(ChatEvent::UpdateDraft(text));
                self.update(ChatEvent::MoveCursor(cursor))
            }
            KeyCode::Backspace => {
                let prev = self.prev_boundary()?;
                let mut text = self.draft.clone();
                text.drain(prev..self.cursor);
                self.update(ChatEvent::MoveCursor(prev));
                self.update(ChatEvent::UpdateDraft(text))
            }
            KeyCode::Delete => {
                let next = self.next_boundary()?;
                let mut text = self.draft.clone();
                text.drain(self.cursor..next);
                self.update(ChatEvent::UpdateDraft(text))
            }
            KeyCode::Left => {
                let prev = self.prev_boundary()?;
                self.update(ChatEvent::MoveCursor(prev))
            }
            KeyCode::Right => {
                let next = self.next_boundary()?;
                self.update(ChatEvent::MoveCursor(next))
            }
            KeyCode::Home => self.update(ChatEvent::MoveCursor(0)),
            KeyCode::End => self.update(ChatEvent::MoveCursor(self.draft.len())),
            KeyCode::Up => self.update(ChatEvent::ScrollUp(1)),
            KeyCode::Down => self.update(ChatEvent::ScrollDown(1)),
            _ => None,
        }
    }

    /// Handle a mouse event: wheel scrolls the transcript, a left click on the
    /// submit button submits.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Effect> {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.update(ChatEvent::ScrollUp(WHEEL_ROWS)),
            MouseEventKind::ScrollDown => self.update(ChatEvent::ScrollDown(WHEEL_ROWS)),
            MouseEventKind::Down(MouseButton::Left) => {
                let hit = self.submit_button.is_some_and(|area| {
                    mouse.column >= area.x
                        && mouse.column < area.x + area.width
                        && mouse.row >= area.y
                        && mouse.row < area.y + area.height
                });
                if hit {
                    self.update(ChatEvent::Submit)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Insert pasted text at the cursor. Line breaks become spaces, so a
    /// multi-line paste never submits.
    pub fn handle_paste(&mut self, pasted: &str) -> Option<Effect> {
        if self.focus != Focus::Input || pasted.is_empty() {
            return None;
        }
        let flattened = pasted.replace("\r\n", " ").replace(['\r', '\n'], " ");
        let mut text = self.draft.clone();
        text.insert_str(self.cursor, &flattened);
        let cursor = self.cursor + flattened.len();
        self.update(ChatEvent::UpdateDraft(text));
        self.update(ChatEvent::MoveCursor(cursor));
        None
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.draft[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.draft[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }
}
