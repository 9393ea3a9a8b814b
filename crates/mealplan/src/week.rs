use mealdeck_shared::mealplan::Day;
use std::{fmt, str::FromStr};
use strum::VariantArray;
use time::{Date, Duration, OffsetDateTime, macros::format_description};

/// Calendar week starting on Monday. Its key names the plan document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Week {
    start: Date,
}

impl Week {
    pub fn containing(date: Date) -> Self {
        let days_since_monday = date.weekday().number_days_from_monday() as i64;

        Self {
            start: date.saturating_sub(Duration::days(days_since_monday)),
        }
    }

    /// Week of today's UTC date.
    pub fn current() -> Self {
        Self::containing(OffsetDateTime::now_utc().date())
    }

    pub fn start(&self) -> Date {
        self.start
    }

    pub fn end(&self) -> Date {
        self.date(Day::Sunday)
    }

    pub fn next(&self) -> Self {
        Self {
            start: self.start.saturating_add(Duration::weeks(1)),
        }
    }

    pub fn prev(&self) -> Self {
        Self {
            start: self.start.saturating_sub(Duration::weeks(1)),
        }
    }

    pub fn date(&self, day: Day) -> Date {
        self.start.saturating_add(Duration::days(day.offset()))
    }

    pub fn dates(&self) -> Vec<(Day, Date)> {
        Day::VARIANTS
            .iter()
            .map(|day| (*day, self.date(*day)))
            .collect()
    }

    /// `yyyy-MM-dd` of the Monday.
    pub fn key(&self) -> String {
        format!(
            "{:04}-{:02}-{:02}",
            self.start.year(),
            self.start.month() as u8,
            self.start.day()
        )
    }

    /// Short month and day, e.g. `Mar 04`.
    pub fn label(&self, day: Day) -> String {
        let date = self.date(day);
        let month = date.month().to_string();

        format!("{} {:02}", &month[..3], date.day())
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// Parses any `yyyy-mm-dd` date and snaps it to its Monday.
impl FromStr for Week {
    type Err = time::error::Parse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = Date::parse(s.trim(), format_description!("[year]-[month]-[day]"))?;

        Ok(Self::containing(date))
    }
}
