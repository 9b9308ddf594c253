use super::*;
use crate::gameplay::*;
use crate::roles::*;
use crate::*;

const RULES: &str = "\
You are a player in a game of Mafia: ten players, hidden roles.
Roles: 6 civilians, 1 detective, 2 mafia, 1 mafia don. The three mafia know each other.
Night: the don tries to find the detective; the mafia vote on a kill and the don has the final say; \
the detective learns whether one player is mafia.
Day: everyone speaks once, then everyone votes to eliminate a player or no one. \
The leading player is eliminated only if they got more votes than 'no one' and nobody tied them.
The town wins when every mafia member is dead. The mafia wins once they equal or outnumber the rest.";

fn briefing(role: Role) -> &'static str {
    match role {
        Role::Civilian => {
            "You are a civilian. You have no night action. Find the mafia through discussion and vote them out."
        }
        Role::Detective => {
            "You are the detective. Each night you learn whether one player is mafia. \
             Use what you learn carefully: the mafia will kill you if they find you."
        }
        Role::Mafia => {
            "You are mafia. At night you vote on a kill; the don decides. \
             During the day, pass as a civilian and steer suspicion elsewhere."
        }
        Role::Don => {
            "You are the mafia don. At night you hunt for the detective and make the final kill decision. \
             During the day, pass as a civilian and never reveal your night actions."
        }
    }
}

fn names(players: &[Position]) -> String {
    players
        .iter()
        .map(|p| Name(*p).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn system(position: Position, role: Role, faction: &[Position]) -> String {
    let mut prompt = format!(
        "{}\n\n{}\n\nYou are {}. Your role is {}.",
        RULES,
        briefing(role),
        Name(position),
        role
    );
    if !faction.is_empty() {
        prompt.push_str(&format!(
            " These are the mafia players in the game including you: {}.",
            names(faction)
        ));
    }
    prompt
}

pub fn speak(transcript: &str) -> String {
    format!(
        "Here is what happened in the game so far:\n{}\n\n\
         It is the DAY phase. Share your thoughts and suspicions about who could be mafia. \
         Keep it short, logical, and persuasive. Return only your statement.",
        transcript
    )
}

pub fn vote(transcript: &str, nominees: &[Position], past: &str) -> String {
    format!(
        "Here is what happened in the game so far:\n{}\n\n\
         Votes cast so far this round:\n{}\n\n\
         Players you can vote to eliminate: {}.\n\
         Choose one, or 'no one' if you do not have enough information, and explain why.\n\n\
         Format:\nplayer_#\n\"Reason\"",
        transcript,
        if past.is_empty() { "(none yet)" } else { past },
        names(nominees)
    )
}

pub fn investigate(transcript: &str, candidates: &[Position], memory: &Memory, night: Epoch) -> String {
    format!(
        "Here is what happened in the game so far:\n{}\n\n\
         Night {}. Choose one player to investigate tonight.\n\
         Your investigations so far:\n{}\n\
         Candidates: {}.\n\n\
         Format:\nplayer_#\n\"Reason\"",
        transcript,
        night,
        memory.render_investigations(),
        names(candidates)
    )
}

pub fn kill(transcript: &str, candidates: &[Position], votes: &[KillVote], memory: &Memory) -> String {
    let votes = votes
        .iter()
        .map(|v| format!("{} voted to kill {}\n", v.voter, v.target))
        .collect::<String>();
    format!(
        "Here is what happened in the game so far:\n{}\n\n\
         Choose who the mafia kills tonight.\n\
         The don's detective search so far:\n{}\n\
         {}\
         Candidates: {}.\n\n\
         Format:\nplayer_#\n\"Reason\"",
        transcript,
        memory.render_guesses(),
        if votes.is_empty() {
            String::new()
        } else {
            format!("Your mafia's votes, you have the final say:\n{}\n", votes)
        },
        names(candidates)
    )
}

pub fn guess(transcript: &str, candidates: &[Position], memory: &Memory, night: Epoch) -> String {
    format!(
        "Here is what happened in the game so far:\n{}\n\n\
         Night {}. Who do you think is the detective?\n\
         Your guesses so far:\n{}\n\
         Candidates: {}.\n\n\
         Format:\nplayer_#\n\"Reason\"",
        transcript,
        night,
        memory.render_guesses(),
        names(candidates)
    )
}

pub fn final_words(transcript: &str, cause: Cause) -> String {
    format!(
        "Here is what happened in the game so far:\n{}\n\n\
         You have been {}. Say your final words to the remaining players. \
         Return only your statement.",
        transcript, cause
    )
}
