use std::sync::Arc;
use futures_util::FutureExt;
use airdesk_core::{ChatMessage, ChatRequest, UNREACHABLE_REPLY};
use tracing::{debug, info, warn};
use crate::controller::PendingRequest;
use crate::document::{Document, PanelVisibility};
use crate::state::AppState;

/// Flip `chatbot` between hidden and visible
pub fn toggle_chat_panel(document: &dyn Document) -> PanelVisibility {
    let next = document.chat_panel().toggled();
    document.set_chat_panel(next);
    debug!("Chat panel now {:?}", next);
    next
}

/// Append a bubble and keep the newest one in view
pub fn append_message(document: &dyn Document, message: ChatMessage) {
    document.append_chat_message(message);
    document.scroll_chat_to_latest();
}

/// Handle a send from `chatbot-text`.
///
/// Blank input is ignored. Otherwise the user's bubble is shown and the input
/// cleared before anything goes over the wire; the returned request appends
/// the bot's answer, or a fixed notice if the chatbot could not be reached.
pub fn send_chat_message(state: &AppState, document: &Arc<dyn Document>) -> Option<PendingRequest> {
    let message = document.chat_input().trim().to_string();
    if message.is_empty() {
        debug!("Ignoring empty chat message");
        return None;
    }

    append_message(document.as_ref(), ChatMessage::you(message.clone()));
    document.clear_chat_input();
    info!("Sending chat message ({} chars)", message.len());

    let gateway = state.chat.clone();
    let document = document.clone();
    let request = ChatRequest { message, session_id: None };

    Some(
        async move {
            let reply = match gateway.send(&request).await {
                Ok(reply) => reply.reply,
                Err(e) => {
                    warn!("Chat request failed: {}", e);
                    UNREACHABLE_REPLY.to_string()
                }
            };
            append_message(document.as_ref(), ChatMessage::bot(reply));
        }
        .boxed(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{bound_controller, ScriptedGateway};

    #[test]
    fn test_toggle_parity() {
        let gateway = Arc::new(ScriptedGateway::ok("", ""));
        let (controller, doc) = bound_controller(AppState::from_gateway(gateway));
        let document = controller.document().as_ref();
        let initial = doc.chat_panel();

        for _ in 0..4 {
            toggle_chat_panel(document);
        }
        assert_eq!(doc.chat_panel(), initial);

        toggle_chat_panel(document);
        assert_eq!(doc.chat_panel(), initial.toggled());
    }

    #[tokio::test]
    async fn test_you_bubble_precedes_reply() {
        let gateway = Arc::new(ScriptedGateway::ok("", "hi there"));
        let (controller, doc) = bound_controller(AppState::from_gateway(gateway.clone()));
        doc.set_chat_input("  hello ");

        let pending = send_chat_message(controller.state(), controller.document()).unwrap();
        assert_eq!(doc.transcript(), vec!["You: hello"]);
        assert_eq!(doc.chat_input(), "");
        assert!(doc.is_scrolled_to_latest());

        pending.await;
        assert_eq!(doc.transcript(), vec!["You: hello", "Bot: hi there"]);
        assert!(doc.is_scrolled_to_latest());
        assert_eq!(gateway.chatted()[0].message, "hello");
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let gateway = Arc::new(ScriptedGateway::ok("", "hi there"));
        let (controller, doc) = bound_controller(AppState::from_gateway(gateway.clone()));

        for input in ["", "   ", "\t\n"] {
            doc.set_chat_input(input);
            assert!(send_chat_message(controller.state(), controller.document()).is_none());
        }

        assert!(doc.messages().is_empty());
        assert!(gateway.chatted().is_empty());
    }

    #[tokio::test]
    async fn test_failure_appends_single_fallback() {
        let gateway = Arc::new(ScriptedGateway::failing("connection refused"));
        let (controller, doc) = bound_controller(AppState::from_gateway(gateway));
        doc.set_chat_input("hello");

        send_chat_message(controller.state(), controller.document()).unwrap().await;

        assert_eq!(doc.transcript(), vec![
            "You: hello",
            "Bot: Error: server not reachable",
        ]);
    }
}
