use super::*;
use crate::gameplay::*;
use crate::oracle::*;
use crate::roles::*;
use crate::*;
use rand::Rng;
use rand::seq::IndexedRandom;

/// One seat's decision maker.
///
/// Owns the oracle, the token counters, and the player's private memory.
/// Every method returns a usable decision: targets always come from the
/// candidates passed in, and free text is never empty.
pub struct Agent {
    position: Position,
    role: Role,
    faction: Vec<Position>,
    memory: Memory,
    oracle: Box<dyn Oracle>,
    meter: Box<dyn Meter>,
    usage: Usage,
}

impl Agent {
    pub fn new(position: Position, role: Role, faction: Vec<Position>, oracle: Box<dyn Oracle>) -> Self {
        Self {
            position,
            role,
            faction,
            memory: Memory::default(),
            oracle,
            meter: Box::new(Approximate),
            usage: Usage::default(),
        }
    }
    pub fn with_meter(mut self, meter: Box<dyn Meter>) -> Self {
        self.meter = meter;
        self
    }
}

impl Agent {
    pub fn position(&self) -> Position {
        self.position
    }
    pub fn name(&self) -> Name {
        Name(self.position)
    }
    pub fn role(&self) -> Role {
        self.role
    }
    pub fn faction(&self) -> &[Position] {
        &self.faction
    }
    pub fn model(&self) -> &str {
        self.oracle.model()
    }
    pub fn usage(&self) -> Usage {
        self.usage
    }
    pub fn memory(&self) -> &Memory {
        &self.memory
    }
    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }
}

impl Agent {
    /// A day-phase statement.
    pub async fn speak(&mut self, transcript: &str) -> String {
        debug_assert!(self.role.can(Capability::Speak));
        let statement = self.text(prompt::speak(transcript)).await;
        self.memory.said(&statement);
        statement
    }

    /// Last words after being killed or voted out.
    pub async fn final_words(&mut self, transcript: &str, cause: Cause) -> String {
        debug_assert!(self.role.can(Capability::FinalWords));
        self.text(prompt::final_words(transcript, cause)).await
    }

    /// A day vote among `nominees`, or an abstention.
    /// Unusable answers fall back to the first nominee.
    pub async fn vote(&mut self, transcript: &str, nominees: &[Position], past: &str) -> Vote {
        debug_assert!(self.role.can(Capability::Vote));
        let answer = self.ask(prompt::vote(transcript, nominees, past)).await;
        match answer
            .as_deref()
            .map(|text| Protocol::ballot(text, nominees))
            .unwrap_or_else(|| Err(ProtocolError::Unparseable(String::new())))
        {
            Ok((ballot, reason)) => Vote {
                ballot,
                reason: reason.unwrap_or_else(|| NO_REASON.to_string()),
            },
            Err(e) => {
                log::warn!("[agent] {} vote fallback: {}", self.name(), e);
                Vote {
                    ballot: nominees.first().copied().map(Ballot::Target).unwrap_or(Ballot::Abstain),
                    reason: FALLBACK_VOTE.to_string(),
                }
            }
        }
    }

    /// Detective's night investigation.
    pub async fn investigate<R>(&mut self, transcript: &str, candidates: &[Position], night: Epoch, rng: &mut R) -> Option<Choice>
    where
        R: Rng + ?Sized,
    {
        debug_assert!(self.role.can(Capability::Investigate));
        let user = prompt::investigate(transcript, candidates, &self.memory, night);
        self.choose(user, candidates, rng).await
    }

    /// Kill vote for regular mafia, kill decision for the don.
    /// The don sees the regular `votes` already cast.
    pub async fn kill<R>(&mut self, transcript: &str, candidates: &[Position], votes: &[KillVote], rng: &mut R) -> Option<Choice>
    where
        R: Rng + ?Sized,
    {
        debug_assert!(self.role.can(Capability::Kill) || self.role.can(Capability::Decide));
        let user = prompt::kill(transcript, candidates, votes, &self.memory);
        self.choose(user, candidates, rng).await
    }

    /// Don's guess at the detective.
    pub async fn guess<R>(&mut self, transcript: &str, candidates: &[Position], night: Epoch, rng: &mut R) -> Option<Choice>
    where
        R: Rng + ?Sized,
    {
        debug_assert!(self.role.can(Capability::Guess));
        let user = prompt::guess(transcript, candidates, &self.memory, night);
        self.choose(user, candidates, rng).await
    }
}

impl Agent {
    /// Targeting decision with the uniform random fallback.
    /// None only when there is nobody to choose from.
    async fn choose<R>(&mut self, user: String, candidates: &[Position], rng: &mut R) -> Option<Choice>
    where
        R: Rng + ?Sized,
    {
        if candidates.is_empty() {
            log::warn!("[agent] {} has no candidates", self.name());
            return None;
        }
        let answer = self.ask(user).await;
        match answer
            .as_deref()
            .map(|text| Protocol::target(text, candidates))
            .unwrap_or_else(|| Err(ProtocolError::Unparseable(String::new())))
        {
            Ok((target, reason)) => Some(Choice {
                target,
                reason: reason.unwrap_or_else(|| NO_THINKING.to_string()),
            }),
            Err(e) => {
                log::warn!("[agent] {} random fallback: {}", self.name(), e);
                candidates.choose(rng).map(|&target| Choice {
                    target,
                    reason: NO_THINKING.to_string(),
                })
            }
        }
    }

    /// Free text with the silence placeholder.
    async fn text(&mut self, user: String) -> String {
        self.ask(user)
            .await
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| SILENCE.to_string())
    }

    /// One metered oracle call. Failures are logged and swallowed.
    async fn ask(&mut self, user: String) -> Option<String> {
        let system = prompt::system(self.position, self.role, &self.faction);
        let model = self.oracle.model().to_string();
        let input = self
            .meter
            .input(&[Message::system(&system), Message::user(&user)], &model);
        let result = self.oracle.complete(&system, &user).await;
        let reported = self.oracle.usage();
        match result {
            Ok(text) => {
                log::debug!("[agent] {} ({}) -> {:?}", self.name(), model, text);
                self.usage += reported.unwrap_or(Usage {
                    input,
                    output: self.meter.output(&text, &model),
                    thinking: 0,
                });
                Some(text)
            }
            Err(e) => {
                log::warn!("[agent] {} ({}) call failed: {}", self.name(), model, e);
                self.usage += reported.unwrap_or(Usage {
                    input,
                    ..Usage::default()
                });
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    /// Answers from a fixed script, cycling.
    struct Script(Vec<&'static str>, usize);

    #[async_trait::async_trait]
    impl Oracle for Script {
        fn model(&self) -> &str {
            "script"
        }
        async fn complete(&mut self, _: &str, _: &str) -> anyhow::Result<String> {
            let answer = self.0[self.1 % self.0.len()];
            self.1 += 1;
            Ok(answer.to_string())
        }
    }

    struct Broken;

    #[async_trait::async_trait]
    impl Oracle for Broken {
        fn model(&self) -> &str {
            "broken"
        }
        async fn complete(&mut self, _: &str, _: &str) -> anyhow::Result<String> {
            anyhow::bail!("connection refused")
        }
    }

    struct Reporting;

    #[async_trait::async_trait]
    impl Oracle for Reporting {
        fn model(&self) -> &str {
            "reporting"
        }
        async fn complete(&mut self, _: &str, _: &str) -> anyhow::Result<String> {
            Ok("player_1".to_string())
        }
        fn usage(&mut self) -> Option<Usage> {
            Some(Usage {
                input: 100,
                output: 7,
                thinking: 3,
            })
        }
    }

    fn agent(role: Role, oracle: Box<dyn Oracle>) -> Agent {
        Agent::new(0, role, Vec::new(), oracle)
    }

    #[tokio::test]
    async fn garbage_targets_always_land_in_candidates() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let garbage = vec!["", "I refuse.", "player_99", "no one", "player_x\nwhy"];
        let mut don = agent(Role::Don, Box::new(Script(garbage, 0)));
        let candidates = [2, 5, 7];
        for _ in 0..200 {
            let choice = don.guess("log", &candidates, 1, rng).await.unwrap();
            assert!(candidates.contains(&choice.target));
            let choice = don.kill("log", &candidates, &[], rng).await.unwrap();
            assert!(candidates.contains(&choice.target));
        }
    }
    #[tokio::test]
    async fn failing_oracle_still_decides() {
        let ref mut rng = SmallRng::seed_from_u64(2);
        let mut detective = agent(Role::Detective, Box::new(Broken));
        let choice = detective.investigate("log", &[3, 4], 1, rng).await.unwrap();
        assert!([3, 4].contains(&choice.target));
        assert_eq!(detective.speak("log").await, SILENCE);
        let vote = detective.vote("log", &[4, 3], "").await;
        assert_eq!(vote.ballot, Ballot::Target(4));
        assert_eq!(vote.reason, FALLBACK_VOTE);
        assert!(detective.usage().input > 0);
        assert_eq!(detective.usage().output, 0);
    }
    #[tokio::test]
    async fn parsed_answers_pass_through() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let mut mafia = agent(Role::Mafia, Box::new(Script(vec!["player_5\n\"too quiet\""], 0)));
        let choice = mafia.kill("log", &[1, 5], &[], rng).await.unwrap();
        assert_eq!(choice.target, 5);
        assert_eq!(choice.reason, "too quiet");
        let vote = mafia.vote("log", &[1, 5], "").await;
        assert_eq!(vote.ballot, Ballot::Target(5));
    }
    #[tokio::test]
    async fn abstention_and_missing_reason() {
        let mut civilian = agent(Role::Civilian, Box::new(Script(vec!["no one", "player_2"], 0)));
        let vote = civilian.vote("log", &[2, 3], "").await;
        assert_eq!(vote.ballot, Ballot::Abstain);
        assert_eq!(vote.reason, NO_REASON);
        let vote = civilian.vote("log", &[2, 3], "").await;
        assert_eq!(vote.ballot, Ballot::Target(2));
    }
    #[tokio::test]
    async fn bare_target_gets_placeholder_thinking() {
        let ref mut rng = SmallRng::seed_from_u64(5);
        let mut detective = agent(Role::Detective, Box::new(Script(vec!["player_4"], 0)));
        let choice = detective.investigate("log", &[4, 6], 1, rng).await.unwrap();
        assert_eq!(choice.target, 4);
        assert_eq!(choice.reason, NO_THINKING);
    }
    #[tokio::test]
    async fn no_candidates_no_choice() {
        let ref mut rng = SmallRng::seed_from_u64(4);
        let mut don = agent(Role::Don, Box::new(Script(vec!["player_1"], 0)));
        assert!(don.guess("log", &[], 1, rng).await.is_none());
    }
    #[tokio::test]
    async fn statements_are_remembered() {
        let mut civilian = agent(Role::Civilian, Box::new(Script(vec!["  I trust player_3.  "], 0)));
        assert_eq!(civilian.speak("log").await, "I trust player_3.");
        assert_eq!(civilian.memory().statements(), &["I trust player_3.".to_string()]);
    }
    #[tokio::test]
    async fn reported_usage_wins_over_meter() {
        let mut civilian = agent(Role::Civilian, Box::new(Reporting));
        civilian.speak("log").await;
        civilian.speak("log").await;
        assert_eq!(civilian.usage().input, 200);
        assert_eq!(civilian.usage().full_output(), 20);
    }
    #[tokio::test]
    async fn metered_usage_counts_both_sides() {
        let mut civilian = agent(Role::Civilian, Box::new(Script(vec!["abcdefgh"], 0)));
        civilian.speak("log").await;
        assert!(civilian.usage().input > 0);
        assert_eq!(civilian.usage().output, 2);
        assert_eq!(civilian.model(), "script");
    }
}
