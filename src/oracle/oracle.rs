use super::*;

/// A source of free-text completions, usually a language model.
///
/// Implementations can be remote models over HTTP, a human at the terminal,
/// or a seeded random responder. The engine awaits one call at a time, so
/// implementations never see concurrent requests.
///
/// Errors are recoverable from the game's point of view: the caller logs
/// them and falls back to a default decision.
#[async_trait::async_trait]
pub trait Oracle: Send {
    /// Model label used to group token usage and look up prices.
    fn model(&self) -> &str;
    /// Complete a single exchange.
    async fn complete(&mut self, system: &str, user: &str) -> anyhow::Result<String>;
    /// Usage the backend reported for the last completion, if any.
    /// Preferred over metered estimates when present.
    fn usage(&mut self) -> Option<Usage> {
        None
    }
}
