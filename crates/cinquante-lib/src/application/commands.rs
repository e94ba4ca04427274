//! Command execution handlers
//!
//! Session-based command execution: the interactive game loop and the
//! version banner, both driven through the Session abstraction so tests can
//! run them against scripted providers.

use crate::application::session::{ApiProvider, CommandSession, Session};
use crate::application::{CliConfig, Commands};
use crate::game::ledger::Ledger;
use crate::game::validate::{GuessError, GuessValidator};
use crate::networking::GuessGate;
use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Execute CLI commands using the session-based architecture
pub async fn execute_command(config: CliConfig) -> Result<()> {
    // Create command session (owns all ephemeral state)
    let session = CommandSession::new(config.app_config)?;

    let command = match config.command {
        Some(cmd) => cmd,
        None => {
            println!("cinquante - name fifty notable women");
            println!("Run 'cinquante --help' for usage information");
            return Ok(());
        }
    };

    execute_command_with_session(command, &session).await
}

/// Execute a specific command with a provided session (for testing)
pub async fn execute_command_with_session<S: Session>(command: Commands, session: &S) -> Result<()> {
    match command {
        Commands::Play => handle_play(session).await,
        Commands::Version => handle_version(session).await,
    }
}

async fn handle_version<S: Session>(_session: &S) -> Result<()> {
    println!("cinquante {}", env!("CARGO_PKG_VERSION"));
    println!("A guessing game: name fifty notable women");
    Ok(())
}

/// The interactive game loop.
///
/// One guess per iteration: read a line, run it through the verification
/// chain, record or report. The guess gate keeps validations strictly
/// serial; a submission arriving while one is pending is dropped, not
/// queued. The timer starts at the first real submission.
async fn handle_play<S: Session>(session: &S) -> Result<()> {
    let config = session.config().app_config();
    let language = config.language.clone();
    let total = config.total;

    let validator = GuessValidator::new(
        session.api().wikipedia(),
        session.api().wikidata(),
        &language,
    );
    let mut ledger = Ledger::new();
    let gate = GuessGate::new();
    let mut started_at: Option<Instant> = None;

    println!(
        "{}",
        style(format!(
            "Name {total} notable women. Full name required; one guess at a time."
        ))
        .bold()
    );
    println!(
        "{}",
        style("Commands: /list shows found entries, /quit ends the session").dim()
    );

    let progress = ProgressBar::new(total as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40.magenta} {pos}/{len}").expect("static template"),
    );

    loop {
        let Some(line) = session.interactive().next_guess("Your guess")? else {
            break;
        };
        let guess = line.trim();

        // Whitespace-only input is a no-op, never submitted to validation
        if guess.is_empty() {
            continue;
        }

        match guess {
            "/quit" => break,
            "/list" => {
                progress.suspend(|| print_found(&ledger));
                continue;
            }
            _ => {}
        }

        let Some(_permit) = gate.try_begin() else {
            debug!("Dropped guess while a validation is pending: {}", guess);
            continue;
        };

        if started_at.is_none() {
            started_at = Some(Instant::now());
        }

        match validator.validate_guess(&ledger, guess).await {
            Ok(entry) => {
                progress.suspend(|| {
                    println!(
                        "{} {} ({})",
                        style("Found!").green().bold(),
                        style(&entry.name).bold(),
                        entry.category
                    );
                });

                ledger.record(entry);
                progress.set_position(ledger.len() as u64);

                if ledger.len() >= total {
                    progress.finish_and_clear();
                    let elapsed = started_at
                        .map(|t| format_elapsed(t.elapsed()))
                        .unwrap_or_default();
                    println!(
                        "{}",
                        style(format!("CONGRATULATIONS! {total} women in {elapsed}!"))
                            .green()
                            .bold()
                    );
                    print_found(&ledger);
                    return Ok(());
                }
            }
            Err(rejection @ GuessError::Lookup { .. }) => {
                // Remote diagnostics go to the log, not the player
                warn!("Guess validation failed: {}", rejection);
                progress.suspend(|| {
                    println!("{}", style("lookup failed, try again").red());
                });
            }
            Err(rejection) => {
                progress.suspend(|| {
                    println!("{}", style(rejection.to_string()).red());
                });
            }
        }
    }

    progress.finish_and_clear();

    let elapsed = started_at.map(|t| format_elapsed(t.elapsed()));
    match elapsed {
        Some(elapsed) => println!(
            "Session over: {}/{} found in {}",
            ledger.len(),
            total,
            elapsed
        ),
        None => println!("Session over: {}/{} found", ledger.len(), total),
    }
    print_found(&ledger);

    Ok(())
}

/// Found entries grouped by category, newest first within each group
fn print_found(ledger: &Ledger) {
    if ledger.is_empty() {
        println!("{}", style("Nothing found yet").dim());
        return;
    }

    for category in ledger.categories() {
        println!("{}", style(category).cyan().bold());
        for entry in ledger.entries_in_category(category) {
            println!("  {} {}", entry.name, style(&entry.reference_url).dim());
        }
    }
}

/// Wall-clock duration as MM:SS
fn format_elapsed(elapsed: Duration) -> String {
    let total_seconds = elapsed.as_secs();
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
