use chrono::{Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// Wall-clock time of day, stored as seconds since local midnight.
///
/// Slot comparisons happen within a single calendar day (no window crosses
/// midnight), so a day-relative offset avoids time-library edge effects at
/// the day boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    /// Build from hour/minute/second components. Returns `None` when a
    /// component is out of range.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        if hour >= 24 || minute >= 60 || second >= 60 {
            return None;
        }
        Some(Self(hour * 3600 + minute * 60 + second))
    }

    /// Parse a catalog `HH:MM:SS` string.
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        chrono::NaiveTime::parse_from_str(s.trim(), "%H:%M:%S").map(Self::from)
    }

    /// Seconds since midnight.
    pub fn seconds(&self) -> u32 {
        self.0
    }

    /// Minutes since midnight, with second resolution.
    pub fn minutes(&self) -> f64 {
        self.0 as f64 / 60.0
    }
}

impl From<chrono::NaiveTime> for TimeOfDay {
    fn from(t: chrono::NaiveTime) -> Self {
        Self(t.num_seconds_from_midnight())
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.0 / 3600,
            (self.0 / 60) % 60,
            self.0 % 60
        )
    }
}

/// Lookup table from calendar weekdays to the catalog's own weekday
/// vocabulary.
///
/// The catalog labels some days with four-letter forms (`TUES`, `THURS`)
/// rather than calendar abbreviations. The table is configuration, not
/// logic: one field per weekday keeps it total by construction, and
/// deployments may override any subset through the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekdayTagMap {
    pub mon: String,
    pub tue: String,
    pub wed: String,
    pub thu: String,
    pub fri: String,
    pub sat: String,
    pub sun: String,
}

impl Default for WeekdayTagMap {
    fn default() -> Self {
        Self {
            mon: "MON".to_string(),
            tue: "TUES".to_string(),
            wed: "WED".to_string(),
            thu: "THURS".to_string(),
            fri: "FRI".to_string(),
            sat: "SAT".to_string(),
            sun: "SUN".to_string(),
        }
    }
}

impl WeekdayTagMap {
    /// Resolve the catalog tag for a calendar weekday.
    pub fn tag(&self, day: Weekday) -> &str {
        match day {
            Weekday::Mon => &self.mon,
            Weekday::Tue => &self.tue,
            Weekday::Wed => &self.wed,
            Weekday::Thu => &self.thu,
            Weekday::Fri => &self.fri,
            Weekday::Sat => &self.sat,
            Weekday::Sun => &self.sun,
        }
    }

    /// Every weekday must carry a non-empty tag.
    pub fn validate(&self) -> Result<(), String> {
        let entries = [
            ("mon", &self.mon),
            ("tue", &self.tue),
            ("wed", &self.wed),
            ("thu", &self.thu),
            ("fri", &self.fri),
            ("sat", &self.sat),
            ("sun", &self.sun),
        ];
        for (day, tag) in entries {
            if tag.trim().is_empty() {
                return Err(format!("Weekday tag for '{}' must not be empty", day));
            }
        }
        Ok(())
    }
}

/// Clock fixed to the configured campus time zone.
///
/// All requests resolve "now" through this single zone; the caller never
/// supplies a zone and UTC is never implied.
#[derive(Debug, Clone, Copy)]
pub struct LocalClock {
    tz: chrono_tz::Tz,
}

impl LocalClock {
    pub fn new(tz: chrono_tz::Tz) -> Self {
        Self { tz }
    }

    pub fn timezone(&self) -> chrono_tz::Tz {
        self.tz
    }

    /// Current instant in the configured zone.
    pub fn now(&self) -> chrono::DateTime<chrono_tz::Tz> {
        chrono::Utc::now().with_timezone(&self.tz)
    }

    /// Current local time-of-day and weekday, the two inputs the
    /// availability engine needs.
    pub fn now_parts(&self) -> (TimeOfDay, Weekday) {
        let now = self.now();
        (TimeOfDay::from(now.time()), chrono::Datelike::weekday(&now))
    }
}
