//! Terminal setup and the async event loop: interleaves crossterm input with
//! settled backend effects.

use crossterm::{
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        Event, EventStream, KeyEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use faq_chat_client::Client;
use futures_util::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::effects::spawn_effect;
use crate::state::{ChatEvent, ChatState};
use crate::view;

/// Restores the terminal on drop, including on early return and panic unwind.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            std::io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableBracketedPaste
        );
    }
}

/// Run the full-screen chat view until the user quits.
pub async fn run(client: Client) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let _guard = TerminalGuard;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    info!(backend = %client.base_url(), "chat view started");

    let mut state = ChatState::new();
    let (tx, mut rx) = mpsc::channel::<ChatEvent>(64);

    if let Some(effect) = state.update(ChatEvent::Mount) {
        spawn_effect(client.clone(), effect, tx.clone());
    }

    let mut input = EventStream::new();

    loop {
        terminal.draw(|frame| view::render(&mut state, frame))?;

        let effect = tokio::select! {
            maybe_event = input.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => state.handle_key(key),
                Some(Ok(Event::Mouse(mouse))) => state.handle_mouse(mouse),
                Some(Ok(Event::Paste(text))) => state.handle_paste(&text),
                Some(Ok(_)) => None,
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            Some(event) = rx.recv() => state.update(event),
        };

        if let Some(effect) = effect {
            debug!(?effect, "spawning effect");
            spawn_effect(client.clone(), effect, tx.clone());
        }

        if state.should_quit {
            break;
        }
    }

    info!(
        messages = state.transcript.len(),
        pending = state.pending,
        "chat view closed"
    );
    Ok(())
}
