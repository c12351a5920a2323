use crate::{analysis::classifier::is_productive, tracker::entities::LogEntry};

/// Keyword sets paired with the symbol shown for them. Order matters, the first set with a
/// keyword contained in the text wins.
pub type LabelTable = [(&'static [&'static str], &'static str)];

pub const ACTIVITY_LABELS: &LabelTable = &[
    (&["tiktok", "instagram", "snap", "reel", "social", "scroll", "feed"], "📱"),
    (&["youtube", "netflix", "hulu", "prime", "movie", "tv", "series"], "🎬"),
    (&["sleep", "nap", "doze"], "😴"),
    (&["game", "minecraft", "fortnite", "valorant", "csgo", "xbox", "playstation"], "🎮"),
    (&["coffee", "tea", "snack", "eat", "kitchen"], "☕️"),
    (&["read", "book", "article", "reddit"], "📚"),
    (&["exercise", "gym", "run", "walk", "yoga"], "🏃‍♂️"),
    (&["code", "program", "dev", "debug", "cursor"], "💻"),
];

/// Used when nothing in [ACTIVITY_LABELS] matches, indexed by [text_hash].
pub const FALLBACK_LABELS: [&str; 8] = ["🪄", "🌀", "✨", "🛋️", "🎧", "🍿", "📺", "🧠"];

/// Only consulted for entries that are already known to be productive.
pub const PRODUCTIVE_LABELS: &LabelTable = &[
    (&["write", "report", "essay", "draft", "doc"], "📝"),
    (&["study", "learn", "course", "lecture", "homework"], "🎓"),
    (&["code", "program", "debug", "build", "deploy"], "🛠️"),
    (&["email", "meeting", "call", "plan"], "📅"),
    (&["exercise", "gym", "run", "workout", "train"], "💪"),
    (&["clean", "tidy", "laundry", "dishes"], "🧹"),
];

pub const PRODUCTIVE_DEFAULT_LABEL: &str = "✅";

fn lookup(table: &LabelTable, text: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| text.contains(k)))
        .map(|(_, label)| *label)
}

/// Symbol for an arbitrary activity. Unknown text still gets a stable symbol from
/// [FALLBACK_LABELS].
pub fn label_for(text: &str) -> &'static str {
    let text = text.to_lowercase();
    lookup(ACTIVITY_LABELS, &text).unwrap_or_else(|| {
        let index = text_hash(&text).unsigned_abs() as usize % FALLBACK_LABELS.len();
        FALLBACK_LABELS[index]
    })
}

/// Symbol for an activity that was productive.
pub fn productive_label_for(text: &str) -> &'static str {
    lookup(PRODUCTIVE_LABELS, &text.to_lowercase()).unwrap_or(PRODUCTIVE_DEFAULT_LABEL)
}

/// Picks the table matching the entry's classification.
pub fn entry_label(entry: &LogEntry) -> &'static str {
    if is_productive(entry) {
        productive_label_for(&entry.actual)
    } else {
        label_for(&entry.actual)
    }
}

/// `h = h * 31 + unit` over UTF-16 code units with 32 bit wraparound.
pub fn text_hash(text: &str) -> i32 {
    text.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(unit as i32))
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use crate::tracker::entities::LogEntry;

    use super::{
        entry_label, label_for, productive_label_for, text_hash, FALLBACK_LABELS,
        PRODUCTIVE_DEFAULT_LABEL,
    };

    #[test]
    fn test_keyword_labels() {
        assert_eq!(label_for("Scrolling Instagram"), "📱");
        assert_eq!(label_for("NETFLIX binge"), "🎬");
        assert_eq!(label_for("power nap"), "😴");
        assert_eq!(label_for("reddit threads"), "📚");
    }

    #[test]
    fn test_first_table_entry_wins() {
        // "youtube" is in the second set, "tiktok" in the first.
        assert_eq!(label_for("youtube then tiktok"), "📱");
    }

    #[test]
    fn test_hash_matches_java_style_string_hash() {
        assert_eq!(text_hash(""), 0);
        assert_eq!(text_hash("a"), 97);
        assert_eq!(text_hash("ab"), 97 * 31 + 98);
        assert_eq!(text_hash("hello"), 99_162_322);
        // Long inputs wrap instead of overflowing.
        assert_eq!(text_hash("polygenelubricants"), i32::MIN);
    }

    #[test]
    fn test_fallback_is_deterministic() {
        let label = label_for("Stared at the wall");
        assert_eq!(label, label_for("stared at the wall"));
        assert!(FALLBACK_LABELS.contains(&label));

        let expected = FALLBACK_LABELS[text_hash("hello") as usize % FALLBACK_LABELS.len()];
        assert_eq!(label_for("hello"), expected);
        assert!(FALLBACK_LABELS.contains(&label_for("polygenelubricants")));
    }

    #[test]
    fn test_productive_labels() {
        assert_eq!(productive_label_for("Write Report"), "📝");
        assert_eq!(productive_label_for("gardening"), PRODUCTIVE_DEFAULT_LABEL);
    }

    #[test]
    fn test_entry_label_uses_classification() {
        let entry = |intended: &str, actual: &str| LogEntry {
            intended: intended.into(),
            actual: actual.into(),
            minutes: 0,
            timestamp: DateTime::default(),
        };
        assert_eq!(entry_label(&entry("debug build", "debug build")), "🛠️");
        assert_eq!(entry_label(&entry("write report", "debug build")), "💻");
    }
}
