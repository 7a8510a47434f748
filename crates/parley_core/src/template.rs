//! Prompt templates.
//!
//! Each task kind maps to exactly one pure rendering function. Rendering
//! never consults the backend, so the prompt for any request can be checked
//! byte for byte before a network call is made.

use crate::{ConversationHistory, Task};

/// Renders the single prompt string sent to the backend for a task.
///
/// # Examples
///
/// ```
/// use parley_core::{Task, TextQuery, template};
///
/// let task = Task::Summarize(TextQuery::new("Rust is a systems language."));
/// assert_eq!(
///     template::render(&task),
///     "Summarize the following text (Provide only the summary, no additional explanation): Rust is a systems language."
/// );
/// ```
pub fn render(task: &Task) -> String {
    match task {
        Task::Chat(query) | Task::TextToSpeech(query) => passthrough(&query.prompt),
        Task::Generate(query) => passthrough(&query.prompt),
        Task::Summarize(query) => summarize(&query.text),
        Task::Classify(query) => classify(&query.text),
        Task::QuestionAnswer(query) => question_answer(&query.context, &query.question),
        Task::Translate(query) => translate(&query.text, &query.target_language),
        Task::ChatWithMemory(query) => conversation(&query.conversation_history, &query.prompt),
    }
}

/// The prompt exactly as the caller wrote it.
pub fn passthrough(prompt: &str) -> String {
    prompt.to_string()
}

/// Summarization prompt.
pub fn summarize(text: &str) -> String {
    format!(
        "Summarize the following text (Provide only the summary, no additional explanation): {}",
        text
    )
}

/// Sentiment classification prompt.
pub fn classify(text: &str) -> String {
    format!(
        "Classify the sentiment of the following text (Provide only the sentiment classification, no additional explanation): {}",
        text
    )
}

/// Question answering prompt.
pub fn question_answer(context: &str, question: &str) -> String {
    format!(
        "Answer the following question based on the context (Provide only the answer, no additional explanation): {} \n\n Question: {}",
        context, question
    )
}

/// Translation prompt.
pub fn translate(text: &str, target_language: &str) -> String {
    format!(
        "Translate the following text to {}: {} (Provide only the translation, no additional explanation.)",
        target_language, text
    )
}

/// Every prior turn followed by the new user prompt, one per line.
///
/// Equal to the joined history after the new user turn has been appended.
pub fn conversation(history: &ConversationHistory, prompt: &str) -> String {
    history
        .turns()
        .iter()
        .map(|turn| turn.text())
        .chain(std::iter::once(prompt))
        .collect::<Vec<_>>()
        .join("\n")
}
