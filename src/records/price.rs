use crate::oracle::Usage;
use crate::*;
use serde::Serialize;

/// Dollars per million tokens for one model family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price {
    pub input: Dollars,
    pub output: Dollars,
    pub thinking: Dollars,
}

impl Price {
    const fn new(input: Dollars, output: Dollars, thinking: Dollars) -> Self {
        Self {
            input,
            output,
            thinking,
        }
    }
    /// Built-in price table. Models outside it are counted but not priced.
    pub fn lookup(model: &str) -> Option<Self> {
        match model {
            "gemini" => Some(Self::new(0.15, 0.6, 3.5)),
            "openai" => Some(Self::new(1.1, 4.4, 4.4)),
            "claude" => Some(Self::new(3.0, 15.0, 15.0)),
            "grok" => Some(Self::new(0.3, 0.5, 0.5)),
            "deepseek" => Some(Self::new(0.14, 2.19, 2.19)),
            _ => None,
        }
    }
    pub fn cost(&self, usage: Usage) -> Cost {
        let per = |tokens: Tokens, price: Dollars| tokens as Dollars * price / 1_000_000.0;
        let input_cost = per(usage.input, self.input);
        let output_cost = per(usage.output, self.output);
        let thinking_cost = per(usage.thinking, self.thinking);
        Cost {
            input_cost,
            output_cost,
            thinking_cost,
            full_output_cost: output_cost + thinking_cost,
        }
    }
}

/// Priced usage of one model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Cost {
    pub input_cost: Dollars,
    pub output_cost: Dollars,
    pub thinking_cost: Dollars,
    pub full_output_cost: Dollars,
}
