use super::*;
use crate::oracle::Usage;
use crate::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// Token counts of one model, as exported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TokenDetail {
    pub input_tokens: Tokens,
    pub output_tokens: Tokens,
    pub thinking_tokens: Tokens,
    pub full_output_tokens: Tokens,
}

impl From<Usage> for TokenDetail {
    fn from(usage: Usage) -> Self {
        Self {
            input_tokens: usage.input,
            output_tokens: usage.output,
            thinking_tokens: usage.thinking,
            full_output_tokens: usage.full_output(),
        }
    }
}

/// Sums over every priced model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    pub total_input_cost: Dollars,
    pub total_output_cost: Dollars,
    pub total_thinking_cost: Dollars,
    pub total_full_output_cost: Dollars,
    pub full_total_cost: Dollars,
}

impl Totals {
    fn accrue(mut self, cost: &Cost) -> Self {
        self.total_input_cost += cost.input_cost;
        self.total_output_cost += cost.output_cost;
        self.total_thinking_cost += cost.thinking_cost;
        self.total_full_output_cost += cost.full_output_cost;
        self.full_total_cost = self.total_input_cost + self.total_full_output_cost;
        self
    }
}

/// Per-model costs with the run's totals alongside.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Prices {
    #[serde(flatten)]
    pub models: BTreeMap<String, Cost>,
    pub total_costs: Totals,
}

/// Token usage grouped by model name.
///
/// Seats sharing a model share a row, so a ten-seat single-model game
/// reports one row with the whole game's usage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger(BTreeMap<String, Usage>);

impl Ledger {
    pub fn record(&mut self, model: &str, usage: Usage) {
        *self.0.entry(model.to_string()).or_default() += usage;
    }
    pub fn usage(&self, model: &str) -> Usage {
        self.0.get(model).copied().unwrap_or_default()
    }
    pub fn models(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
    pub fn details(&self) -> BTreeMap<String, TokenDetail> {
        self.0
            .iter()
            .map(|(model, usage)| (model.clone(), TokenDetail::from(*usage)))
            .collect()
    }
    pub fn prices(&self) -> Prices {
        let models = self
            .0
            .iter()
            .filter_map(|(model, usage)| {
                Price::lookup(model).map(|price| (model.clone(), price.cost(*usage)))
            })
            .collect::<BTreeMap<_, _>>();
        let total_costs = models.values().fold(Totals::default(), Totals::accrue);
        Prices {
            models,
            total_costs,
        }
    }
}

impl<'a> FromIterator<(&'a str, Usage)> for Ledger {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Usage)>,
    {
        let mut ledger = Self::default();
        iter.into_iter()
            .for_each(|(model, usage)| ledger.record(model, usage));
        ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage(input: Tokens, output: Tokens, thinking: Tokens) -> Usage {
        Usage {
            input,
            output,
            thinking,
        }
    }

    #[test]
    fn aggregates_by_model() {
        let ledger = [
            ("openai", usage(10, 5, 0)),
            ("openai", usage(20, 5, 1)),
            ("fish", usage(7, 7, 7)),
        ]
        .into_iter()
        .collect::<Ledger>();
        assert_eq!(ledger.usage("openai"), usage(30, 10, 1));
        assert_eq!(ledger.models().count(), 2);
        assert_eq!(ledger.details()["openai"].full_output_tokens, 11);
    }
    #[test]
    fn prices_only_known_models() {
        let ledger = [
            ("deepseek", usage(1_000_000, 1_000_000, 0)),
            ("fish", usage(1_000_000, 1_000_000, 0)),
        ]
        .into_iter()
        .collect::<Ledger>();
        let prices = ledger.prices();
        assert!(prices.models.contains_key("deepseek"));
        assert!(!prices.models.contains_key("fish"));
        assert!((prices.total_costs.total_input_cost - 0.14).abs() < 1e-9);
        assert!((prices.total_costs.full_total_cost - 2.33).abs() < 1e-9);
    }
    #[test]
    fn totals_sit_next_to_models() {
        let ledger = [("grok", usage(1, 1, 1))].into_iter().collect::<Ledger>();
        let json = serde_json::to_value(ledger.prices()).unwrap();
        assert!(json["grok"]["input_cost"].is_number());
        assert!(json["total_costs"]["full_total_cost"].is_number());
    }
}
