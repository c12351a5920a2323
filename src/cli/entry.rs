use ansi_term::Colour;
use anyhow::Result;

use crate::{
    analysis::classifier::is_productive,
    feedback::{
        label::entry_label,
        suggestion::{sample_entry, suggest},
    },
    tracker::{
        entities::parse_minutes,
        storage::KeyValueStore,
        Tracker,
    },
};

/// Command to process `log`. Incomplete input is dropped without a word, anything else is
/// stored and answered with a suggestion.
pub fn process_log_command<S: KeyValueStore>(
    tracker: &mut Tracker<S>,
    intended: &str,
    actual: &str,
    minutes: Option<&str>,
) -> Result<()> {
    let minutes = minutes.map_or(0, parse_minutes);
    let Some(entry) = tracker.log(intended, actual, minutes)? else {
        return Ok(());
    };

    println!("{} {}", entry_label(entry), verdict(is_productive(entry)));
    println!("{}", suggest(Some(entry), &mut rand::thread_rng()));
    Ok(())
}

/// Command to process `suggest`. Without entries this prints the onboarding tip.
pub fn process_suggest_command<S: KeyValueStore>(tracker: &Tracker<S>, sample: bool) -> Result<()> {
    let suggestion = if sample {
        suggest(Some(&sample_entry(chrono::Utc::now())), &mut rand::thread_rng())
    } else {
        suggest(tracker.last(), &mut rand::thread_rng())
    };
    println!("{suggestion}");
    Ok(())
}

pub fn verdict(productive: bool) -> String {
    if productive {
        Colour::Green.paint("productive").to_string()
    } else {
        Colour::Red.paint("distraction").to_string()
    }
}
