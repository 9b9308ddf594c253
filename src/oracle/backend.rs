use super::*;

/// Collaborators the game knows how to build, selected by name.
///
/// Anything else is a configuration error and stops the game before it
/// starts; it is never treated as a recoverable in-game failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    OpenAi,
    DeepSeek,
    Grok,
    Fish,
    #[cfg(feature = "cli")]
    Human,
}

impl Backend {
    /// Name used on the command line, in reports, and in the price table.
    pub fn label(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::DeepSeek => "deepseek",
            Self::Grok => "grok",
            Self::Fish => "fish",
            #[cfg(feature = "cli")]
            Self::Human => "human",
        }
    }
    /// Builds the oracle. Remote backends read their settings from the
    /// environment; `seed` only matters for the random responder.
    pub fn oracle(&self, seed: u64) -> anyhow::Result<Box<dyn Oracle>> {
        match self {
            Self::OpenAi | Self::DeepSeek | Self::Grok => {
                Ok(Box::new(Chat::new(Settings::from_env(*self)?)?))
            }
            Self::Fish => Ok(Box::new(Fish::new(seed))),
            #[cfg(feature = "cli")]
            Self::Human => Ok(Box::new(Human::default())),
        }
    }
}

impl TryFrom<&str> for Backend {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "deepseek" => Ok(Self::DeepSeek),
            "grok" => Ok(Self::Grok),
            "fish" => Ok(Self::Fish),
            #[cfg(feature = "cli")]
            "human" => Ok(Self::Human),
            other => Err(anyhow::anyhow!("LLM {} not supported yet", other)),
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn known_backends() {
        assert_eq!(Backend::try_from("openai").unwrap(), Backend::OpenAi);
        assert_eq!(Backend::try_from(" DeepSeek ").unwrap(), Backend::DeepSeek);
        assert_eq!(Backend::try_from("fish").unwrap(), Backend::Fish);
        assert_eq!(Backend::Grok.label(), "grok");
    }
    #[test]
    fn unsupported_backend_is_fatal() {
        let err = Backend::try_from("gemini").unwrap_err();
        assert!(err.to_string().contains("not supported"));
    }
    #[test]
    fn offline_oracle_needs_no_environment() {
        let oracle = Backend::Fish.oracle(1).unwrap();
        assert_eq!(oracle.model(), "fish");
    }
}
