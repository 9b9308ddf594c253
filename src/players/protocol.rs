use crate::gameplay::*;
use crate::*;

/// Errors that can occur while reading an agent's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    Unparseable(String),
    IllegalTarget(Position),
    NoCandidates,
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unparseable(s) => write!(f, "unparseable answer: {:?}", s),
            Self::IllegalTarget(p) => write!(f, "illegal target: {}", Name(*p)),
            Self::NoCandidates => write!(f, "no candidates to choose from"),
        }
    }
}

impl std::error::Error for ProtocolError {}

/// Reads targeting answers.
///
/// The expected shape is a target on the first non-empty line and an
/// optional reason on the lines after it:
///
/// ```text
/// player_4
/// "They dodged every question."
/// ```
///
/// The target line accepts `player_4`, `player 4`, a bare `4`, or a sentence
/// mentioning `player_4`. `no one`, `none`, `nobody`, and `-1` read as an
/// abstention.
pub struct Protocol;

impl Protocol {
    /// Parses an answer into a ballot and an optional reason.
    pub fn decode(text: &str) -> Result<(Ballot, Option<String>), ProtocolError> {
        let mut lines = text.lines().map(str::trim).skip_while(|l| l.is_empty());
        let head = lines.next().unwrap_or_default();
        let ballot = Self::line(head).ok_or_else(|| ProtocolError::Unparseable(head.to_string()))?;
        let rest = lines.collect::<Vec<_>>().join("\n");
        Ok((ballot, Self::reason(&rest)))
    }
    /// Checks a ballot against the candidates. Abstaining is always legal.
    pub fn validate(ballot: Ballot, candidates: &[Position]) -> Result<Ballot, ProtocolError> {
        match ballot {
            Ballot::Abstain => Ok(ballot),
            Ballot::Target(p) => candidates
                .contains(&p)
                .then_some(ballot)
                .ok_or(ProtocolError::IllegalTarget(p)),
        }
    }
    /// A day vote: a candidate or an abstention.
    pub fn ballot(
        text: &str,
        candidates: &[Position],
    ) -> Result<(Ballot, Option<String>), ProtocolError> {
        let (ballot, reason) = Self::decode(text)?;
        Ok((Self::validate(ballot, candidates)?, reason))
    }
    /// A night target: must name one of the candidates.
    pub fn target(
        text: &str,
        candidates: &[Position],
    ) -> Result<(Position, Option<String>), ProtocolError> {
        if candidates.is_empty() {
            return Err(ProtocolError::NoCandidates);
        }
        match Self::ballot(text, candidates)? {
            (Ballot::Target(p), reason) => Ok((p, reason)),
            (Ballot::Abstain, _) => Err(ProtocolError::Unparseable(text.to_string())),
        }
    }
    fn line(line: &str) -> Option<Ballot> {
        let line = line
            .trim_matches(|c: char| c.is_whitespace() || "*\"'`.,:;!#".contains(c))
            .to_lowercase();
        match line.as_str() {
            "no one" | "no_one" | "no-one" | "none" | "nobody" | "-1" => Some(Ballot::Abstain),
            _ => line
                .parse::<Position>()
                .ok()
                .or_else(|| Self::mention(&line))
                .map(Ballot::Target),
        }
    }
    fn mention(line: &str) -> Option<Position> {
        let at = line.find("player")?;
        line[at + "player".len()..]
            .trim_start_matches(|c: char| c == '_' || c == ' ' || c == '#')
            .chars()
            .take_while(char::is_ascii_digit)
            .collect::<String>()
            .parse()
            .ok()
    }
    fn reason(rest: &str) -> Option<String> {
        let reason = rest.trim().trim_matches('"').trim();
        (!reason.is_empty()).then(|| reason.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn decode_target_and_reason() {
        let (ballot, reason) = Protocol::decode("player_4\n\"They dodged.\"").unwrap();
        assert_eq!(ballot, Ballot::Target(4));
        assert_eq!(reason.as_deref(), Some("They dodged."));
    }
    #[test]
    fn decode_variants() {
        assert_eq!(Protocol::decode("  \n**player_7**").unwrap().0, Ballot::Target(7));
        assert_eq!(Protocol::decode("player 2").unwrap().0, Ballot::Target(2));
        assert_eq!(Protocol::decode("3").unwrap().0, Ballot::Target(3));
        assert_eq!(Protocol::decode("I vote for Player_9.").unwrap().0, Ballot::Target(9));
        assert_eq!(Protocol::decode("No one").unwrap().0, Ballot::Abstain);
        assert_eq!(Protocol::decode("-1").unwrap().0, Ballot::Abstain);
        assert_eq!(Protocol::decode("player_1").unwrap().1, None);
    }
    #[test]
    fn decode_garbage() {
        assert!(Protocol::decode("").is_err());
        assert!(Protocol::decode("I would rather not say.").is_err());
        assert!(Protocol::decode("player_x").is_err());
    }
    #[test]
    fn validate_candidates() {
        assert!(Protocol::ballot("player_3", &[1, 3]).is_ok());
        assert_eq!(
            Protocol::ballot("player_4", &[1, 3]),
            Err(ProtocolError::IllegalTarget(4))
        );
        assert!(Protocol::ballot("no one", &[1, 3]).is_ok());
    }
    #[test]
    fn targets_cannot_abstain() {
        assert!(Protocol::target("no one", &[1, 3]).is_err());
        assert_eq!(Protocol::target("player_1", &[1, 3]).unwrap().0, 1);
        assert_eq!(Protocol::target("player_1", &[]), Err(ProtocolError::NoCandidates));
    }
}
