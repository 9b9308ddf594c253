use super::*;
use crate::gameplay::*;
use crate::oracle::*;
use crate::players::*;
use crate::records::*;
use crate::roles::*;
use crate::*;
use rand::rngs::SmallRng;

/// Central coordinator for one game of Mafia.
/// Single source of truth for who is alive, what has been said, and what
/// has been decided. Asks one agent at a time, in a fixed order, and
/// resolves every phase before the next one starts.
///
/// Phase order per round:
/// - Night: don's detective guess, mafia kill votes, don's decision,
///   detective investigation, the kill and final words
/// - Day: discussion, voting, tally, elimination and final words
///
/// The win condition is checked before every night and every day.
pub struct Game {
    seats: Vec<Seat>,
    assignment: Assignment,
    rng: SmallRng,
    night: Epoch,
    day: Epoch,
    found: bool,
    transcript: Transcript,
    chronicle: Chronicle,
    outcome: Outcome,
}

impl Game {
    /// Seats one oracle per position. Mafia seats learn their faction here.
    pub fn new(assignment: Assignment, oracles: Vec<Box<dyn Oracle>>, rng: SmallRng) -> anyhow::Result<Self> {
        if oracles.len() != N {
            anyhow::bail!("need {} players, got {}", N, oracles.len());
        }
        let seats = oracles
            .into_iter()
            .enumerate()
            .map(|(i, oracle)| Agent::new(i, assignment.role(i), assignment.faction(i), oracle))
            .map(Seat::new)
            .collect();
        Ok(Self {
            seats,
            assignment,
            rng,
            night: 0,
            day: 0,
            found: false,
            transcript: Transcript::default(),
            chronicle: Chronicle::default(),
            outcome: Outcome::Ongoing,
        })
    }

    /// Plays until one side wins.
    pub async fn run(&mut self) -> Outcome {
        log::info!(
            "[game] mafia {:?}, don {}, detective {}",
            self.assignment.mafia(),
            Name(self.assignment.don()),
            Name(self.assignment.detective())
        );
        loop {
            if self.check().is_terminal() {
                break;
            }
            self.night_phase().await;
            if self.check().is_terminal() {
                break;
            }
            self.day_phase().await;
        }
        self.transcript.push(&format!("\n\n{}", self.outcome.winner()));
        log::info!("[game] {} {}", self.outcome.winner(), self.outcome.reason());
        self.outcome
    }

    /// Re-evaluates the win condition over the living.
    pub fn check(&mut self) -> Outcome {
        let alive = self.alive();
        self.outcome = Outcome::judge(alive.iter().filter_map(|&p| self.assignment.roles().get(p)));
        self.outcome
    }
}

impl Game {
    pub async fn night_phase(&mut self) {
        self.night += 1;
        let night = self.night;
        let alive = self.alive();
        let mafia = self.alive_mafia();
        if mafia.is_empty() {
            log::warn!("[night {}] no mafia alive, skipping", night);
            return;
        }
        log::info!("[night {}] begins", night);
        let mut record = NightRecord::new(night);
        record.don_guess = self.don_guess(&alive, &mafia).await;
        let mut conspiracy = Conspiracy::default();
        let don = self.assignment.don();
        for &m in mafia.iter().filter(|&&m| m != don) {
            let choice = self.seats[m]
                .agent_mut()
                .kill(self.transcript.as_str(), &alive, &[], &mut self.rng)
                .await;
            if let Some(choice) = choice {
                log::debug!("[night {}] {} votes to kill {}", night, Name(m), Name(choice.target));
                conspiracy.vote(m, choice.target, choice.reason);
            }
        }
        let decision = match self.seats[don].is_alive() {
            true => {
                self.seats[don]
                    .agent_mut()
                    .kill(self.transcript.as_str(), &alive, conspiracy.votes(), &mut self.rng)
                    .await
            }
            false => None,
        };
        let target = match decision {
            Some(choice) => Some(conspiracy.decide(don, choice.target, choice.reason)),
            None => conspiracy.plurality(&mut self.rng),
        };
        if let Some((investigation, thinking)) = self.investigation(&alive).await {
            record
                .detective_investigation
                .insert(thinking.player_id, investigation);
            record.detective_thinking = Some(thinking);
        }
        record.mafia_kill = target.map(Name);
        record.mafia_reasons = conspiracy.into_votes();
        if let Some(victim) = target {
            record.final_words = self.execute(victim, Cause::Mafia).await;
        }
        self.chronicle.night(record);
    }

    pub async fn day_phase(&mut self) {
        self.day += 1;
        let day = self.day;
        let alive = self.alive();
        log::info!("[day {}] begins", day);
        self.transcript.push(&format!("\nDay {} Begins", day));
        let mut record = DayRecord::new(day);
        for speaker in Rotation::random(&alive, &mut self.rng) {
            let statement = self.seats[speaker]
                .agent_mut()
                .speak(self.transcript.as_str())
                .await;
            self.transcript
                .push(&format!("{} says: {}", Name(speaker), statement));
            record.events.push(Event::Statement {
                player_id: Name(speaker),
                statement,
            });
        }
        let voters = Rotation::random(&alive, &mut self.rng);
        let nominees = voters.order().to_vec();
        let mut tally = Tally::new(&alive);
        let mut past = Vec::<String>::new();
        for voter in voters {
            let vote = self.seats[voter]
                .agent_mut()
                .vote(self.transcript.as_str(), &nominees, &past.join("\n"))
                .await;
            tally.cast(vote.ballot);
            if let Some(target) = vote.ballot.target() {
                past.push(format!("{} voted for {}", Name(voter), Name(target)));
            }
            self.transcript
                .push(&format!("{} voted to eliminate {}", Name(voter), vote.ballot));
            record.events.push(Event::Vote {
                player_id: Name(voter),
                vote: vote.ballot,
                reason: vote.reason,
            });
        }
        log::info!("[day {}] tally {}", day, tally);
        record.elimination = tally.verdict();
        match record.elimination {
            Elimination::Nobody => self.transcript.push("No elimination this round."),
            Elimination::Voted(p) => record.final_words = self.execute(p, Cause::Vote).await,
        }
        self.chronicle.day(record);
    }
}

impl Game {
    /// The don looks for the detective until found. The result is shared
    /// with every living mafia member and with nobody else.
    async fn don_guess(&mut self, alive: &[Position], mafia: &[Position]) -> Option<DonGuess> {
        let don = self.assignment.don();
        if !self.seats[don].is_alive() || self.found {
            return None;
        }
        let night = self.night;
        let choice = self.seats[don]
            .agent_mut()
            .guess(self.transcript.as_str(), alive, night, &mut self.rng)
            .await?;
        let correct = choice.target == self.assignment.detective();
        self.found = self.found || correct;
        for &m in mafia {
            self.seats[m]
                .agent_mut()
                .memory_mut()
                .guessed(night, choice.target, correct);
        }
        log::debug!("[night {}] don guesses {}: {}", night, Name(choice.target), correct);
        Some(DonGuess {
            night,
            don_id: Name(don),
            guessed_player: Name(choice.target),
            is_detective: correct,
            reason: (night > 1).then_some(choice.reason),
        })
    }

    /// The detective checks one other living player.
    async fn investigation(&mut self, alive: &[Position]) -> Option<(Investigation, DetectiveThinking)> {
        let detective = self.assignment.detective();
        if !self.seats[detective].is_alive() {
            return None;
        }
        let candidates = alive
            .iter()
            .copied()
            .filter(|&p| p != detective)
            .collect::<Vec<_>>();
        let choice = self.seats[detective]
            .agent_mut()
            .investigate(self.transcript.as_str(), &candidates, self.night, &mut self.rng)
            .await?;
        let result = self.assignment.role(choice.target).is_mafia();
        self.seats[detective]
            .agent_mut()
            .memory_mut()
            .investigated(choice.target, result);
        log::debug!("[night {}] detective checks {}: {}", self.night, Name(choice.target), result);
        let reason = choice.reason.trim();
        Some((
            Investigation {
                investigated: Name(choice.target),
                result,
            },
            DetectiveThinking {
                player_id: Name(detective),
                investigated_player: Name(choice.target),
                internal_reason: match reason.is_empty() {
                    true => NO_THINKING.to_string(),
                    false => reason.to_string(),
                },
            },
        ))
    }

    /// Marks a player dead and collects their final words.
    /// A civilian killed on the first night dies silently.
    async fn execute(&mut self, victim: Position, cause: Cause) -> Option<FinalWords> {
        self.seats[victim].kill();
        match cause {
            Cause::Mafia => {
                log::info!("[night {}] mafia killed {}", self.night, Name(victim));
                self.transcript
                    .push(&format!("Night {}: Mafia killed {}", self.night, Name(victim)));
            }
            Cause::Vote => {
                log::info!("[day {}] {} voted out", self.day, Name(victim));
                self.transcript.push(&format!(
                    "Day: {} was voted out by the town/players of the game",
                    Name(victim)
                ));
            }
        }
        if cause == Cause::Mafia && self.night == 1 && self.assignment.role(victim) == Role::Civilian {
            return None;
        }
        let words = self.seats[victim]
            .agent_mut()
            .final_words(self.transcript.as_str(), cause)
            .await;
        self.transcript
            .push(&format!("Final words from {}: {}", Name(victim), words));
        Some(FinalWords {
            player_id: Name(victim),
            words,
        })
    }
}

impl Game {
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }
    pub fn chronicle(&self) -> &Chronicle {
        &self.chronicle
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
    /// Whether the don has already found the detective.
    pub fn found(&self) -> bool {
        self.found
    }
    pub fn alive(&self) -> Vec<Position> {
        self.seats
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_alive())
            .map(|(i, _)| i)
            .collect()
    }
    pub fn alive_mafia(&self) -> Vec<Position> {
        self.alive()
            .into_iter()
            .filter(|&p| self.assignment.role(p).is_mafia())
            .collect()
    }
    pub fn ledger(&self) -> Ledger {
        self.seats
            .iter()
            .map(|s| (s.agent().model(), s.agent().usage()))
            .collect()
    }
    pub fn report(&self) -> Report {
        let ledger = self.ledger();
        Report {
            game_details: Details {
                players: self
                    .seats
                    .iter()
                    .map(|s| Entry {
                        player_name: s.agent().name(),
                        role: s.agent().role(),
                        llm_name: s.agent().model().to_string(),
                        status: s.status(),
                    })
                    .collect(),
                mafia_players: self.assignment.mafia().into_iter().map(Name).collect(),
                detective_player: Name(self.assignment.detective()),
                don_guesses: self.chronicle.guesses().to_vec(),
                game_log: self.chronicle.records().to_vec(),
                game_outcome: self
                    .outcome
                    .is_terminal()
                    .then(|| Verdict::from(self.outcome)),
            },
            token_details: ledger.details(),
            token_prices: ledger.prices(),
        }
    }
}
