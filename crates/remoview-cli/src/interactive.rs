use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input, Select};
use remoview_core::error::{INVALID_GUESSES_MESSAGE, SESSION_FAILED_MESSAGE};
use remoview_core::models::{AreaType, Continent, GuessField, UserGuesses};

/// Prompt for the six guesses, starting from any values already supplied.
///
/// Prompts again until the guesses pass local validation, so a rejected set
/// never reaches the network.
pub fn prompt_guesses(initial: UserGuesses) -> Result<UserGuesses> {
    println!("\n🔮 Close your eyes. What do you sense at the target?\n");

    let mut guesses = initial;
    loop {
        for field in GuessField::IMPRESSIONS {
            let value: String = Input::new()
                .with_prompt(field.label())
                .with_initial_text(guesses.get(field).to_string())
                .allow_empty(true)
                .interact_text()?;
            guesses.set(field, value);
        }

        let continent = select_choice(
            GuessField::Continent,
            &Continent::ALL.map(|c| c.as_str()),
            guesses.get(GuessField::Continent),
        )?;
        guesses.set(GuessField::Continent, continent);

        let area_type = select_choice(
            GuessField::AreaType,
            &AreaType::ALL.map(|a| a.as_str()),
            guesses.get(GuessField::AreaType),
        )?;
        guesses.set(GuessField::AreaType, area_type);

        let language: String = Input::new()
            .with_prompt(GuessField::Language.label())
            .with_initial_text(guesses.get(GuessField::Language).to_string())
            .allow_empty(true)
            .interact_text()?;
        guesses.set(GuessField::Language, language);

        match guesses.trimmed().validate() {
            Ok(()) => return Ok(guesses),
            Err(e) => {
                eprintln!(
                    "\n{} {}\n  {}\n",
                    style("⚠").yellow().bold(),
                    INVALID_GUESSES_MESSAGE,
                    style(e).dim()
                );
            }
        }
    }
}

fn select_choice(field: GuessField, items: &[&str], current: &str) -> Result<String> {
    let default = items
        .iter()
        .position(|item| item.eq_ignore_ascii_case(current.trim()))
        .unwrap_or(0);

    let idx = Select::new()
        .with_prompt(field.label())
        .items(items)
        .default(default)
        .interact()?;

    Ok(items[idx].to_string())
}

/// After a failed round trip, ask whether to resubmit the same target and guesses.
///
/// A prompt that cannot be shown counts as "no".
pub fn confirm_retry() -> bool {
    eprintln!("\n{} {}", style("✗").red().bold(), SESSION_FAILED_MESSAGE);
    Confirm::new()
        .with_prompt("Try again with the same target and guesses?")
        .default(true)
        .interact()
        .unwrap_or(false)
}
