use crate::players::Agent;
use serde::Serialize;

/// Whether a seat is still in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Alive,
    Dead,
}

/// One place at the table: an agent and whether it is still alive.
/// Dead seats stay in the roster.
pub struct Seat {
    agent: Agent,
    status: Status,
}

impl Seat {
    pub fn new(agent: Agent) -> Self {
        Self {
            agent,
            status: Status::Alive,
        }
    }
    pub fn agent(&self) -> &Agent {
        &self.agent
    }
    pub fn agent_mut(&mut self) -> &mut Agent {
        &mut self.agent
    }
    pub fn status(&self) -> Status {
        self.status
    }
    pub fn is_alive(&self) -> bool {
        self.status == Status::Alive
    }
    pub fn kill(&mut self) {
        self.status = Status::Dead;
    }
}
