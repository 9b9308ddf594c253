use super::*;
use crate::*;

/// Cumulative token usage of one agent (or one model, once aggregated).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Usage {
    pub input: Tokens,
    pub output: Tokens,
    pub thinking: Tokens,
}

impl Usage {
    /// Output plus hidden reasoning tokens.
    pub fn full_output(&self) -> Tokens {
        self.output + self.thinking
    }
}

impl std::ops::AddAssign for Usage {
    fn add_assign(&mut self, other: Self) {
        self.input += other.input;
        self.output += other.output;
        self.thinking += other.thinking;
    }
}

impl std::ops::Add for Usage {
    type Output = Self;
    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

/// Counts tokens around a completion call.
///
/// Purely advisory: counts feed the cost report and never influence play.
pub trait Meter: Send {
    /// Tokens in the prompt, counted before the call.
    fn input(&self, messages: &[Message], model: &str) -> Tokens;
    /// Tokens in the completion, counted after the call.
    fn output(&self, text: &str, model: &str) -> Tokens;
}

/// Length-based approximation, close enough for BPE tokenizers on English.
#[derive(Debug, Clone, Copy, Default)]
pub struct Approximate;

impl Approximate {
    fn count(text: &str) -> Tokens {
        text.chars().count().div_ceil(CHARS_PER_TOKEN) as Tokens
    }
}

impl Meter for Approximate {
    fn input(&self, messages: &[Message], _: &str) -> Tokens {
        messages
            .iter()
            .map(|m| Self::count(&m.role) + Self::count(&m.content) + TOKENS_PER_MESSAGE as Tokens)
            .sum::<Tokens>()
            + TOKENS_PER_MESSAGE as Tokens
    }
    fn output(&self, text: &str, _: &str) -> Tokens {
        Self::count(text)
    }
}
