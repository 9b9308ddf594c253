/// A kind of decision the engine may request from an agent.
///
/// Every role can speak, vote, and give final words. The remaining
/// capabilities are role-specific and looked up through [`super::Role::can`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Speak,
    Vote,
    FinalWords,
    Investigate,
    Kill,
    Decide,
    Guess,
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Speak => write!(f, "speak"),
            Self::Vote => write!(f, "vote"),
            Self::FinalWords => write!(f, "final words"),
            Self::Investigate => write!(f, "investigate"),
            Self::Kill => write!(f, "kill vote"),
            Self::Decide => write!(f, "kill decision"),
            Self::Guess => write!(f, "detective guess"),
        }
    }
}
