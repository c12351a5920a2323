use crate::tracker::entities::LogEntry;

/// An entry counts as productive when what was done matches what was meant, ignoring case and
/// surrounding whitespace. Containment either way is a match, so "report" vs "write report" is
/// productive. Blank text on either side is never productive.
pub fn is_productive(entry: &LogEntry) -> bool {
    let actual = entry.actual.trim().to_lowercase();
    let intended = entry.intended.trim().to_lowercase();
    if actual.is_empty() || intended.is_empty() {
        return false;
    }
    actual == intended || actual.contains(&intended) || intended.contains(&actual)
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use crate::tracker::entities::LogEntry;

    use super::is_productive;

    fn entry(intended: &str, actual: &str) -> LogEntry {
        LogEntry {
            intended: intended.into(),
            actual: actual.into(),
            minutes: 0,
            timestamp: DateTime::default(),
        }
    }

    #[test]
    fn test_exact_match_ignores_case_and_whitespace() {
        assert!(is_productive(&entry("Write Report", "  write report ")));
    }

    #[test]
    fn test_containment_either_way() {
        assert!(is_productive(&entry("write report", "report")));
        assert!(is_productive(&entry("code", "code review")));
        // Short text matches a lot. Kept as is.
        assert!(is_productive(&entry("a", "scrolling instagram")));
    }

    #[test]
    fn test_unrelated_is_distraction() {
        assert!(!is_productive(&entry("write report", "scrolling social")));
        assert!(!is_productive(&entry("gym", "netflix")));
    }

    #[test]
    fn test_blank_is_never_productive() {
        assert!(!is_productive(&entry("", "")));
        assert!(!is_productive(&entry("   ", "write report")));
        assert!(!is_productive(&entry("write report", "\t")));
    }
}
