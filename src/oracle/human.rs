use super::*;
use colored::Colorize;
use dialoguer::Input;

/// A person at the terminal playing one seat.
///
/// Shows the prompt and reads one line. The seat's briefing (name, role,
/// and mafia teammates) is printed once, before the first question.
/// Answer targeting questions as `player_#` (or `no one` for votes);
/// anything else goes through the same fallback as a model's malformed
/// answer.
#[derive(Debug, Default)]
pub struct Human {
    briefed: bool,
}

impl Human {
    /// The system prompt on the first call, nothing after.
    fn briefing<'a>(&mut self, system: &'a str) -> Option<&'a str> {
        match std::mem::replace(&mut self.briefed, true) {
            false => Some(system),
            true => None,
        }
    }
}

#[async_trait::async_trait]
impl Oracle for Human {
    fn model(&self) -> &str {
        "human"
    }
    async fn complete(&mut self, system: &str, user: &str) -> anyhow::Result<String> {
        if let Some(briefing) = self.briefing(system) {
            println!("{}\n", briefing.bold());
        }
        println!("{}", user.dimmed());
        let answer = Input::<String>::new()
            .with_prompt(">")
            .allow_empty(true)
            .report(false)
            .interact_text()?;
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn briefing_shown_once() {
        let mut human = Human::default();
        assert_eq!(human.briefing("You are player_2."), Some("You are player_2."));
        assert_eq!(human.briefing("You are player_2."), None);
        assert_eq!(human.briefing("anything"), None);
    }
}
