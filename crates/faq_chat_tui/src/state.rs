//! Chat view state and its transition function.
//!
//! All mutation goes through [`ChatState::update`]. Work that needs the
//! network is returned as an [`Effect`] for the caller to run; its outcome
//! comes back later as another [`ChatEvent`]. Outcomes are applied in the
//! order they arrive, so overlapping questions may be answered out of order.

use faq_chat_client::ClientError;
use ratatui::layout::Rect;
use tracing::{debug, warn};

/// Bot text shown when a question could not be answered.
pub const ANSWER_ERROR_TEXT: &str = "エラーが発生しました。";
/// Label of the "no filter" selector option.
pub const CATEGORY_PLACEHOLDER: &str = "-- カテゴリを選択（未選択＝全件） --";
/// Hint shown in the empty input field.
pub const INPUT_PLACEHOLDER: &str = "質問を入力してください";
/// Label of the submit button.
pub const SUBMIT_LABEL: &str = "送信";

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

/// One transcript entry. Never edited after it is appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            role: Role::Bot,
            text: text.into(),
        }
    }
}

/// One entry of the category selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    /// Value sent to the backend; empty for the placeholder.
    pub value: String,
    pub label: String,
}

/// Which control receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Category,
}

/// Asynchronous work requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadCategories,
    Ask { message: String, category: String },
}

/// Everything that can change the view state.
#[derive(Debug)]
pub enum ChatEvent {
    /// The view was mounted; loads categories once.
    Mount,
    /// Replace the selected category. Not validated against the list.
    SelectCategory(String),
    /// Replace the draft text. The cursor is clamped into the new text.
    UpdateDraft(String),
    /// Move the draft cursor to a byte offset (snapped to a char boundary).
    MoveCursor(usize),
    Submit,
    CategoriesLoaded(Result<Vec<String>, ClientError>),
    AnswerReceived(Result<String, ClientError>),
    ToggleFocus,
    ScrollUp(u16),
    ScrollDown(u16),
    Quit,
}

/// Full state of the chat view.
#[derive(Debug, Default)]
pub struct ChatState {
    /// Ordered transcript; append-only.
    pub transcript: Vec<Message>,
    /// Categories from the last successful load, in server order.
    pub categories: Vec<String>,
    /// Selected category; empty means all categories.
    pub selected_category: String,
    /// Text being composed.
    pub draft: String,
    /// Cursor within `draft` (byte offset).
    pub cursor: usize,
    pub focus: Focus,
    /// Questions sent whose answer has not arrived yet.
    pub pending: usize,
    /// Transcript scroll offset in rows from the top; clamped by the renderer.
    pub scroll: u16,
    /// Screen area of the submit button from the last render.
    pub submit_button: Option<Rect>,
    pub should_quit: bool,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event. Returns the effect to run, if any.
    pub fn update(&mut self, event: ChatEvent) -> Option<Effect> {
        match event {
            ChatEvent::Mount => return Some(Effect::LoadCategories),
            ChatEvent::SelectCategory(value) => {
                debug!(category = %value, "category selected");
                self.selected_category = value;
            }
            ChatEvent::UpdateDraft(text) => {
                self.draft = text;
                self.cursor = floor_char_boundary(&self.draft, self.cursor);
            }
            ChatEvent::MoveCursor(pos) => {
                self.cursor = floor_char_boundary(&self.draft, pos);
            }
            ChatEvent::Submit => return self.submit(),
            ChatEvent::CategoriesLoaded(Ok(categories)) => {
                debug!(count = categories.len(), "categories loaded");
                self.categories = categories;
            }
            ChatEvent::CategoriesLoaded(Err(e)) => {
                warn!(error = %e, "failed to load categories");
            }
            ChatEvent::AnswerReceived(result) => {
                self.pending = self.pending.saturating_sub(1);
                let text = match result {
                    Ok(answer) => answer,
                    Err(e) => {
                        warn!(error = %e, "failed to get answer");
                        ANSWER_ERROR_TEXT.to_string()
                    }
                };
                self.push(Message::bot(text));
            }
            ChatEvent::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Input => Focus::Category,
                    Focus::Category => Focus::Input,
                };
            }
            ChatEvent::ScrollUp(rows) => {
                self.scroll = self.scroll.saturating_sub(rows);
            }
            ChatEvent::ScrollDown(rows) => {
                self.scroll = self.scroll.saturating_add(rows);
            }
            ChatEvent::Quit => self.should_quit = true,
        }
        None
    }

    fn submit(&mut self) -> Option<Effect> {
        if self.draft.trim().is_empty() {
            return None;
        }
        let message = std::mem::take(&mut self.draft);
        self.cursor = 0;
        self.push(Message::user(message.clone()));
        self.pending += 1;
        debug!(message_len = message.len(), pending = self.pending, "question submitted");
        Some(Effect::Ask {
            message,
            category: self.selected_category.clone(),
        })
    }

    /// Append to the transcript and follow the tail.
    fn push(&mut self, message: Message) {
        self.transcript.push(message);
        self.scroll = u16::MAX;
    }

    /// Selector options: the placeholder, then one per category in list order.
    pub fn category_options(&self) -> Vec<CategoryOption> {
        std::iter::once(CategoryOption {
            value: String::new(),
            label: CATEGORY_PLACEHOLDER.to_string(),
        })
        .chain(self.categories.iter().map(|c| CategoryOption {
            value: c.clone(),
            label: c.clone(),
        }))
        .collect()
    }

    /// Index of the selected option; the placeholder when the selection is not listed.
    pub fn selected_option_index(&self) -> usize {
        self.category_options()
            .iter()
            .position(|o| o.value == self.selected_category)
            .unwrap_or(0)
    }

    /// Value of the option `step` places away from the current one, wrapping around.
    pub fn neighbour_category(&self, step: isize) -> String {
        let options = self.category_options();
        let len = options.len() as isize;
        let idx = (self.selected_option_index() as isize + step).rem_euclid(len);
        options[idx as usize].value.clone()
    }
}

/// Largest char boundary in `s` that is `<= pos`.
fn floor_char_boundary(s: &str, pos: usize) -> usize {
    let mut pos = pos.min(s.len());
    while !s.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}
