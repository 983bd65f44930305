use anyhow::{Context, Result};
use bot_core::{ArenaUpdate, Decider, Decision, DecisionReason, Tactics};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the match journal JSON file to replay
    #[arg(short, long)]
    journal: String,

    /// Replay with a different recovery seed than the journal recorded
    #[arg(short, long)]
    seed: Option<u64>,
}

/// One match as captured at the HTTP boundary: the recovery seed plus every
/// snapshot the game server sent, in order.
#[derive(Debug, Serialize, Deserialize)]
struct MatchJournal {
    seed: u64,
    turns: Vec<ArenaUpdate>,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct ReplaySummary {
    turns: usize,
    shots: usize,
    evasions: usize,
    fallbacks: usize,
}

fn load_journal(path: &str) -> Result<MatchJournal> {
    let journal_data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read journal file: {}", path))?;
    serde_json::from_str(&journal_data).with_context(|| "Failed to deserialize journal JSON")
}

fn replay(journal: &MatchJournal, seed: u64) -> Vec<Decision> {
    let mut decider = Decider::new(Tactics::default(), seed);
    journal.turns.iter().map(|update| decider.decide(update)).collect()
}

fn summarize(decisions: &[Decision]) -> ReplaySummary {
    let mut summary = ReplaySummary { turns: decisions.len(), ..ReplaySummary::default() };
    for decision in decisions {
        match decision.reason {
            DecisionReason::Fire => summary.shots += 1,
            DecisionReason::Evade { .. } => summary.evasions += 1,
            DecisionReason::Fallback => summary.fallbacks += 1,
            _ => {}
        }
    }
    summary
}

fn main() -> Result<()> {
    let args = Args::parse();

    let journal = load_journal(&args.journal)?;
    let seed = args.seed.unwrap_or(journal.seed);

    let decisions = replay(&journal, seed);
    for (turn, decision) in decisions.iter().enumerate() {
        println!("turn {:>3}: {} ({:?})", turn + 1, decision.action, decision.reason);
    }

    let summary = summarize(&decisions);
    println!("Replay complete.");
    println!("Turns: {}", summary.turns);
    println!("Shots: {}", summary.shots);
    println!("Evasions: {}", summary.evasions);
    println!("Fallbacks: {}", summary.fallbacks);

    Ok(())
}
