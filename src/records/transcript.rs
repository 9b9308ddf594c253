/// Public game text, append-only. Every prompt carries a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript(String);

impl Default for Transcript {
    fn default() -> Self {
        Self(String::from("**Mafia Game Starts**\n"))
    }
}

impl Transcript {
    pub fn push(&mut self, line: &str) {
        self.0.push_str(line);
        self.0.push('\n');
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Transcript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn appends_lines() {
        let mut t = Transcript::default();
        t.push("Night 1: Mafia killed player_3");
        assert_eq!(t.as_str(), "**Mafia Game Starts**\nNight 1: Mafia killed player_3\n");
    }
}
