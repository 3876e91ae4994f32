//! Runs [`Effect`]s against the backend and reports their outcome as [`ChatEvent`]s.
//!
//! Each effect runs in its own task. Nothing orders or cancels them: whichever
//! finishes first is delivered first.

use faq_chat_client::Client;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::state::{ChatEvent, Effect};

/// Execute one effect and return the event carrying its result.
pub async fn run_effect(client: &Client, effect: Effect) -> ChatEvent {
    match effect {
        Effect::LoadCategories => ChatEvent::CategoriesLoaded(client.categories().await),
        Effect::Ask { message, category } => {
            ChatEvent::AnswerReceived(client.ask(&message, &category).await)
        }
    }
}

/// Spawn `effect` and send its result on `tx` when it settles.
pub fn spawn_effect(
    client: Client,
    effect: Effect,
    tx: mpsc::Sender<ChatEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let event = run_effect(&client, effect).await;
        if tx.send(event).await.is_err() {
            debug!("view closed before effect settled");
        }
    })
}
