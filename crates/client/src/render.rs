//! Plain-text rendering of answers and request states.

use crate::state::RequestState;
use crate::types::AnswerResult;

/// Render an answer as titled sections.
///
/// Sections appear in a fixed order: reasoning steps (numbered from 1),
/// reasoning summary, related context (pretty JSON), final answer. Empty
/// sections are left out.
pub fn render_answer(result: &AnswerResult) -> String {
    let mut sections = Vec::new();

    if !result.reasoning_steps.is_empty() {
        let steps = result
            .reasoning_steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {}", i + 1, step))
            .collect::<Vec<_>>()
            .join("\n");
        sections.push(format!("Reasoning steps:\n{}", steps));
    }

    if !result.reasoning_summary.is_empty() {
        sections.push(format!("Reasoning summary:\n{}", result.reasoning_summary));
    }

    if !result.raw_context.is_null() {
        sections.push(format!(
            "Related context:\n{}",
            render_context(&result.raw_context)
        ));
    }

    if !result.final_answer.is_empty() {
        sections.push(format!("Final answer:\n{}", result.final_answer));
    }

    sections.join("\n\n")
}

/// Render a request state the way a status area would show it.
pub fn render_state(state: &RequestState) -> String {
    match state {
        RequestState::Idle => String::new(),
        RequestState::Loading => "Loading...".to_string(),
        RequestState::Success(result) => render_answer(result),
        RequestState::Failure(message) => format!("Error: {}", message),
    }
}

fn render_context(value: &serde_json::Value) -> String {
    // Serializing a Value cannot fail; fall back to the compact form anyway.
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
