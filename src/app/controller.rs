//! Runs reducer requests against an AI assistant.

use std::sync::Arc;

use super::model::{AiRequest, AppAction, AppState, reduce};
use crate::ai::AiAssistant;

/// Run an AI request and produce the completion action for the reducer
pub async fn execute_request<A>(ai: &A, request: AiRequest) -> AppAction
where
    A: AiAssistant + ?Sized,
{
    match request {
        AiRequest::Draft {
            generation,
            ticket,
            tone,
            instruction,
        } => {
            let text = ai
                .generate_draft(&ticket, tone, instruction.as_deref())
                .await;
            AppAction::DraftReady {
                ticket_id: ticket.id,
                generation,
                text,
            }
        }
        AiRequest::Escalation { generation, ticket } => {
            let analysis = ai.analyze_escalation(&ticket).await;
            AppAction::EscalationReady {
                ticket_id: ticket.id,
                generation,
                analysis,
            }
        }
    }
}

/// Owns the inbox state and an assistant, for driving the inbox without a
/// terminal.
///
/// [`dispatch`](Self::dispatch) only applies the action and hands back any
/// AI request so callers can interleave completions themselves;
/// [`dispatch_and_wait`](Self::dispatch_and_wait) runs the request straight
/// away and feeds the result back in.
pub struct InboxController {
    state: AppState,
    ai: Arc<dyn AiAssistant>,
}

impl InboxController {
    pub fn new(state: AppState, ai: Arc<dyn AiAssistant>) -> Self {
        Self { state, ai }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn into_state(self) -> AppState {
        self.state
    }

    pub fn dispatch(&mut self, action: AppAction) -> Option<AiRequest> {
        let state = std::mem::take(&mut self.state);
        let (state, request) = reduce(state, action);
        self.state = state;
        request
    }

    pub async fn complete(&mut self, request: AiRequest) {
        let action = execute_request(self.ai.as_ref(), request).await;
        self.dispatch(action);
    }

    pub async fn dispatch_and_wait(&mut self, action: AppAction) {
        if let Some(request) = self.dispatch(action) {
            self.complete(request).await;
        }
    }
}
