//! Mafia games played by language-model agents.
//!
//! A coordinator assigns hidden roles, alternates night and day phases,
//! turns each agent's free text into structured game actions, and decides a
//! winner. Agents are black boxes; everything around them is deterministic
//! given their decisions and the game's seeded random source.
//!
//! ## Modules
//!
//! - [`roles`] - Role tags, capability table, and role assignment
//! - [`gameplay`] - Pure resolution rules: day tally, night kill, win condition
//! - [`oracle`] - External language-model collaborators and token metering
//! - [`players`] - Agent decision interface with parsing and fallbacks
//! - [`records`] - Transcript, phase records, token ledger, and export
//! - [`gameroom`] - Phase engine driving nights and days to a verdict
pub mod gameplay;
pub mod gameroom;
pub mod oracle;
pub mod players;
pub mod records;
pub mod roles;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Seat index in the roster (0..N). Displayed as `player_<index>`.
pub type Position = usize;
/// Night or day counter, starting at 1.
pub type Epoch = usize;
/// Token counts for cost accounting.
pub type Tokens = u64;
/// Prices and costs in US dollars.
pub type Dollars = f64;

// ============================================================================
// ROSTER
// The one and only role set. Counts never change after assignment.
// ============================================================================
/// Number of players at the table.
pub const N: usize = 10;
/// Plain townspeople.
pub const CIVILIANS: usize = 6;
/// Investigates one player per night.
pub const DETECTIVES: usize = 1;
/// Regular mafia members voting on the night kill.
pub const MAFIOSI: usize = 2;
/// Mafia leader with the final say on the kill.
pub const DONS: usize = 1;

// ============================================================================
// PLACEHOLDERS
// Substituted when an agent's free text is missing or unusable.
// ============================================================================
/// Stands in for an empty statement or final words.
pub const SILENCE: &str = "(says nothing)";
/// Stands in for a missing vote reason.
pub const NO_REASON: &str = "No reason provided";
/// Stands in for missing night-action reasoning.
pub const NO_THINKING: &str = "No reasoning provided yet.";
/// Reason attached to a vote the parser could not read.
pub const FALLBACK_VOTE: &str = "Fallback vote due to parsing error.";

// ============================================================================
// ORACLE DEFAULTS
// Overridable through environment variables (see `oracle::Settings`).
// ============================================================================
/// Sampling temperature for every completion.
pub const TEMPERATURE: f32 = 0.3;
/// Request timeout for a single completion.
pub const TIMEOUT: std::time::Duration = std::time::Duration::from_secs(120);
/// Rough characters-per-token ratio for the approximate meter.
pub const CHARS_PER_TOKEN: usize = 4;
/// Per-message framing overhead for chat-formatted input.
pub const TOKENS_PER_MESSAGE: usize = 3;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
