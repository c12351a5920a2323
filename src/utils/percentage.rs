use std::{fmt::Display, ops::Deref};

/// Whole percentage in the range 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Percentage(u8);

impl Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl Percentage {
    pub fn new_opt(value: u8) -> Option<Percentage> {
        if value > 100 {
            None
        } else {
            Some(Percentage(value))
        }
    }
}

impl Deref for Percentage {
    type Target = u8;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// `part / max(1, whole)` as a percentage, rounded half up. `part` is capped by `whole`, so an
/// empty whole is always 0%.
pub fn count_percentage(part: usize, whole: usize) -> Percentage {
    let whole = whole.max(1) as u64;
    let part = (part as u64).min(whole);
    let value = (part * 200 + whole) / (whole * 2);
    Percentage::new_opt(value as u8).expect("Percentage of a capped part never exceeds 100")
}
