// Recurrence module
// Course recurrence rule: frequency, anchor weekday and ISO week parity

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// How often a course's lessons repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    Biweekly,
    Monthly,
}

/// Which ISO weeks a biweekly course runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekParity {
    Odd,
    Even,
    #[default]
    All,
}

/// Recurrence rule embedded in a course.
///
/// `week_parity` only affects [`Frequency::Biweekly`] rules; weekly and
/// monthly rules ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecurrenceRule {
    pub frequency: Frequency,
    pub anchor_day: Weekday,
    #[serde(default)]
    pub week_parity: WeekParity,
}

impl RecurrenceRule {
    /// Create a rule with no parity restriction.
    ///
    /// # Examples
    /// ```
    /// use lesson_scheduler::models::recurrence::{Frequency, RecurrenceRule, WeekParity};
    /// use chrono::Weekday;
    ///
    /// let rule = RecurrenceRule::new(Frequency::Weekly, Weekday::Tue);
    /// assert_eq!(rule.week_parity, WeekParity::All);
    /// ```
    pub fn new(frequency: Frequency, anchor_day: Weekday) -> Self {
        Self {
            frequency,
            anchor_day,
            week_parity: WeekParity::All,
        }
    }

    pub fn weekly(anchor_day: Weekday) -> Self {
        Self::new(Frequency::Weekly, anchor_day)
    }

    pub fn biweekly(anchor_day: Weekday, week_parity: WeekParity) -> Self {
        Self {
            frequency: Frequency::Biweekly,
            anchor_day,
            week_parity,
        }
    }

    pub fn monthly(anchor_day: Weekday) -> Self {
        Self::new(Frequency::Monthly, anchor_day)
    }

    /// The parity that actually constrains occurrences.
    pub fn effective_parity(&self) -> WeekParity {
        match self.frequency {
            Frequency::Biweekly => self.week_parity,
            Frequency::Weekly | Frequency::Monthly => WeekParity::All,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Frequency::Weekly => "weekly",
            Frequency::Biweekly => "biweekly",
            Frequency::Monthly => "monthly",
        };
        f.write_str(label)
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(Frequency::Weekly),
            "biweekly" | "fortnightly" => Ok(Frequency::Biweekly),
            "monthly" => Ok(Frequency::Monthly),
            other => Err(format!("Unknown frequency '{}'", other)),
        }
    }
}

impl fmt::Display for WeekParity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WeekParity::Odd => "odd",
            WeekParity::Even => "even",
            WeekParity::All => "all",
        };
        f.write_str(label)
    }
}

impl FromStr for WeekParity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "odd" => Ok(WeekParity::Odd),
            "even" => Ok(WeekParity::Even),
            "all" | "" => Ok(WeekParity::All),
            other => Err(format!("Unknown week parity '{}'", other)),
        }
    }
}
