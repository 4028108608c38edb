use crate::cli::PlayArgs;
use crate::errors;
use crate::interactive;
use crate::output::OutputWriter;
use crate::progress;
use crate::report;
use anyhow::{Context, Result};
use remoview_core::config::LayeredConfig;
use remoview_core::error::RemoviewError;
use remoview_core::models::{Coordinates, GuessField, SessionResult, UserGuesses};
use remoview_llm::GeminiGenerator;
use remoview_session::{SessionProcessor, SessionTicket};
use std::sync::Arc;

use super::history_store;

pub async fn execute(args: PlayArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    if args.impressions.len() > GuessField::IMPRESSIONS.len() {
        return Err(errors::CliError::new("Too many impressions")
            .with_context(format!(
                "Got {} --impression values; a session takes exactly three.",
                args.impressions.len()
            ))
            .with_help("Run: remoview play --help")
            .into());
    }

    config.warn_on_missing_credentials();
    let generator = GeminiGenerator::from_config(config).map_err(|_| errors::missing_api_key())?;

    let processor = SessionProcessor::new(Arc::new(generator), Arc::new(history_store(config)));

    let ticket = match (args.lat, args.lng) {
        (Some(lat), Some(lng)) => {
            SessionTicket::at(Coordinates::new(lat, lng).context("Invalid target coordinates")?)
        }
        _ => processor.start(),
    };

    output.section("Target");
    output.kv("Coordinates", ticket.coordinates);
    output.kv("Map", ticket.map_url());

    let can_prompt = !output.is_json() && !args.is_scripted();

    let guesses = if args.is_scripted() {
        guesses_from_args(&args)
    } else if output.is_json() {
        return Err(errors::guesses_required().into());
    } else {
        interactive::prompt_guesses(guesses_from_args(&args))?
    };

    let spinner = if output.is_json() {
        progress::hidden()
    } else {
        progress::create_spinner("Reading the target...")
    };

    let outcome = submit_with_retry(&processor, &ticket, &guesses, || {
        can_prompt && spinner.suspend(interactive::confirm_retry)
    })
    .await;

    let result = match outcome {
        Ok(result) => {
            progress::finish_success(&spinner, "Session graded");
            result
        }
        Err(RemoviewError::InvalidGuesses(e)) => {
            spinner.finish_and_clear();
            return Err(errors::invalid_guesses(&e).into());
        }
        Err(RemoviewError::SessionProcessingFailed) => {
            progress::finish_error(&spinner, "Session failed");
            return Err(errors::session_failed().into());
        }
        Err(e) => {
            progress::finish_error(&spinner, "Session failed");
            return Err(e).context("Failed to record session");
        }
    };

    if output.is_json() {
        output.result(&result)
    } else {
        report::render(output, &result)?;
        output.success(format!("Saved to history as {}", result.id));
        Ok(())
    }
}

/// Submit the guesses, resubmitting the same ticket after each remote failure
/// for as long as `retry` agrees. Local and storage errors are returned at once.
async fn submit_with_retry<F>(
    processor: &SessionProcessor,
    ticket: &SessionTicket,
    guesses: &UserGuesses,
    mut retry: F,
) -> Result<SessionResult, RemoviewError>
where
    F: FnMut() -> bool,
{
    loop {
        match processor.submit_ticket(ticket, guesses).await {
            Err(RemoviewError::SessionProcessingFailed) if retry() => {
                tracing::info!(
                    lat = ticket.coordinates.lat,
                    lng = ticket.coordinates.lng,
                    "Resubmitting session"
                );
            }
            outcome => return outcome,
        }
    }
}

/// Guesses supplied as flags; missing ones stay empty
fn guesses_from_args(args: &PlayArgs) -> UserGuesses {
    let mut guesses = UserGuesses::default();

    for (field, value) in GuessField::IMPRESSIONS.into_iter().zip(&args.impressions) {
        guesses.set(field, value.clone());
    }

    let choices = [
        (GuessField::Continent, &args.continent),
        (GuessField::AreaType, &args.area_type),
        (GuessField::Language, &args.language),
    ];
    for (field, value) in choices {
        if let Some(value) = value {
            guesses.set(field, value.clone());
        }
    }

    guesses
}
