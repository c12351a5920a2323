use std::fmt::Display;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::{analysis::classifier::is_productive, tracker::entities::LogEntry};

/// A tip plus a reward to promise yourself for following it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub tip: &'static str,
    pub reward: &'static str,
}

impl Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} • Reward: {}", self.tip, self.reward)
    }
}

/// Decides whether a rule applies to the lowercased activity text.
#[derive(Debug, Clone, Copy)]
pub enum Trigger {
    AnyOf(&'static [&'static str]),
    Always,
}

impl Trigger {
    pub fn matches(&self, activity: &str) -> bool {
        match self {
            Trigger::AnyOf(keywords) => keywords.iter().any(|k| activity.contains(k)),
            Trigger::Always => true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SuggestionRule {
    pub trigger: Trigger,
    pub suggestion: Suggestion,
}

pub const ONBOARDING: Suggestion = Suggestion {
    tip: "Log something to get tailored tips!",
    reward: "A 10-minute guilt-free break",
};

/// Picked from at random when an entry is productive.
pub const AFFIRMATIONS: [Suggestion; 4] = [
    Suggestion {
        tip: "Nice, you did what you meant to do. Keep the streak going with the next small task.",
        reward: "A short walk",
    },
    Suggestion {
        tip: "On track! Write down the very next step while the context is still fresh.",
        reward: "Your favourite song",
    },
    Suggestion {
        tip: "Focus paid off. Take a proper break before the next session so it lasts.",
        reward: "A 10-minute guilt-free break",
    },
    Suggestion {
        tip: "That is how it's done. Protect tomorrow's first hour for the same task.",
        reward: "Snack + stretch",
    },
];

/// Evaluated top to bottom, first match wins. The last rule always matches.
pub const DISTRACTION_RULES: [SuggestionRule; 4] = [
    SuggestionRule {
        trigger: Trigger::AnyOf(&["tiktok", "instagram", "scroll"]),
        suggestion: Suggestion {
            tip: "Try a 25/5 Pomodoro: 25 mins focus, 5 mins break. Use a site-blocker for 25 min.",
            reward: "Snack + stretch",
        },
    },
    SuggestionRule {
        trigger: Trigger::AnyOf(&["sleep", "nap"]),
        suggestion: Suggestion {
            tip: "Maybe you need a short power nap before focusing. Schedule a 20 min rest then do a 50 min session.",
            reward: "A hot drink",
        },
    },
    SuggestionRule {
        trigger: Trigger::AnyOf(&["youtube", "netflix"]),
        suggestion: Suggestion {
            tip: "Set a timer: watch only 30 minutes after you finish one small task.",
            reward: "One favorite episode",
        },
    },
    SuggestionRule {
        trigger: Trigger::Always,
        suggestion: SMALL_STEP,
    },
];

const SMALL_STEP: Suggestion = Suggestion {
    tip: "Break the task into a tiny 5-minute step and start with that — momentum beats motivation.",
    reward: "Small treat",
};

/// Picks feedback for `entry`. Productive entries get a random affirmation drawn from `rng`,
/// distractions get the first matching rule from [DISTRACTION_RULES].
pub fn suggest<R: Rng>(entry: Option<&LogEntry>, rng: &mut R) -> Suggestion {
    let Some(entry) = entry else {
        return ONBOARDING;
    };

    if is_productive(entry) {
        return AFFIRMATIONS[rng.gen_range(0..AFFIRMATIONS.len())];
    }

    let activity = entry.actual.to_lowercase();
    first_match(&DISTRACTION_RULES, &activity).unwrap_or(SMALL_STEP)
}

fn first_match(rules: &[SuggestionRule], activity: &str) -> Option<Suggestion> {
    rules
        .iter()
        .find(|rule| rule.trigger.matches(activity))
        .map(|rule| rule.suggestion)
}

/// The canned entry used to show what a suggestion looks like.
pub fn sample_entry(timestamp: DateTime<Utc>) -> LogEntry {
    LogEntry {
        intended: "Finish task".into(),
        actual: "Scrolling social".into(),
        minutes: 10,
        timestamp,
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use rand::{rngs::StdRng, SeedableRng};

    use crate::tracker::entities::LogEntry;

    use super::{sample_entry, suggest, AFFIRMATIONS, DISTRACTION_RULES, ONBOARDING};

    fn entry(intended: &str, actual: &str) -> LogEntry {
        LogEntry {
            intended: intended.into(),
            actual: actual.into(),
            minutes: 0,
            timestamp: DateTime::default(),
        }
    }

    #[test]
    fn test_no_entry_gives_onboarding() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(suggest(None, &mut rng), ONBOARDING);
    }

    #[test]
    fn test_productive_is_an_affirmation() {
        let productive = entry("write report", "write report");
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let suggestion = suggest(Some(&productive), &mut rng);
            assert!(AFFIRMATIONS.contains(&suggestion), "{suggestion:?}");
        }
    }

    #[test]
    fn test_same_seed_same_affirmation() {
        let productive = entry("study", "study");
        let a = suggest(Some(&productive), &mut StdRng::seed_from_u64(7));
        let b = suggest(Some(&productive), &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_distraction_rules() {
        let mut rng = StdRng::seed_from_u64(0);
        let social = suggest(Some(&entry("write report", "scrolling social")), &mut rng);
        assert_eq!(social, DISTRACTION_RULES[0].suggestion);
        assert!(social.tip.contains("Pomodoro"));

        let nap = suggest(Some(&entry("write report", "Long NAP")), &mut rng);
        assert_eq!(nap, DISTRACTION_RULES[1].suggestion);

        let netflix = suggest(Some(&entry("write report", "Netflix")), &mut rng);
        assert_eq!(netflix, DISTRACTION_RULES[2].suggestion);

        let other = suggest(Some(&entry("write report", "cleaned the fridge")), &mut rng);
        assert_eq!(other, DISTRACTION_RULES[3].suggestion);
    }

    #[test]
    fn test_only_listed_keywords_trigger_a_rule() {
        let mut rng = StdRng::seed_from_u64(0);
        for actual in ["social event", "reel of film", "Instagram reels"] {
            let suggestion = suggest(Some(&entry("write report", actual)), &mut rng);
            let expected = if actual.starts_with("Instagram") { 0 } else { 3 };
            assert_eq!(suggestion, DISTRACTION_RULES[expected].suggestion, "{actual}");
        }
        assert_eq!(
            DISTRACTION_RULES[3].suggestion.tip,
            "Break the task into a tiny 5-minute step and start with that — momentum beats motivation."
        );
    }

    #[test]
    fn test_first_rule_wins() {
        let mut rng = StdRng::seed_from_u64(0);
        let both = suggest(Some(&entry("study", "youtube before a nap")), &mut rng);
        assert_eq!(both, DISTRACTION_RULES[1].suggestion);
    }

    #[test]
    fn test_sample_entry_is_social() {
        let mut rng = StdRng::seed_from_u64(0);
        let sample = sample_entry(DateTime::default());
        assert_eq!(suggest(Some(&sample), &mut rng), DISTRACTION_RULES[0].suggestion);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ONBOARDING.to_string(),
            "Log something to get tailored tips! • Reward: A 10-minute guilt-free break"
        );
    }
}
