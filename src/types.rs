//! Core types for meeting schedules and slot accounting.

use std::collections::BTreeSet;
use std::path::PathBuf;

use chrono::Weekday;
use serde::Deserialize;

use crate::error::MeetingError;

/// Host of the meeting log archive, used to build canonical meeting labels.
pub const EAVESDROP: &str = "eavesdrop.openstack.org";

/// Canonical weekday ordering used for grid indexing and every report.
///
/// Hardcoded so output never depends on the host locale.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full weekday name for report lines and CSV headers.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Recurrence frequency of a meeting schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    Weekly,
    BiweeklyEven,
    BiweeklyOdd,
    FirstThursday,
    FirstFriday,
    Quadweekly,
    QuadweeklyAlternate,
    Adhoc,
}

impl Frequency {
    /// The frequency code as it appears in meeting files.
    pub fn code(&self) -> &'static str {
        match self {
            Frequency::Weekly => "weekly",
            Frequency::BiweeklyEven => "biweekly-even",
            Frequency::BiweeklyOdd => "biweekly-odd",
            Frequency::FirstThursday => "first-thursday",
            Frequency::FirstFriday => "first-friday",
            Frequency::Quadweekly => "quadweekly",
            Frequency::QuadweeklyAlternate => "quadweekly-alternate",
            Frequency::Adhoc => "adhoc",
        }
    }

    /// Slots taken per fortnight.
    ///
    /// Counts are normalized over a two-week cycle so that weekly and
    /// alternating meetings stay comparable: a weekly meeting occupies
    /// its slot in both weeks, an alternating one in a single week, and
    /// one-off meetings are not counted at all.
    pub fn fortnight_weight(&self) -> u32 {
        match self {
            Frequency::Weekly => 2,
            Frequency::BiweeklyEven => 1,
            Frequency::BiweeklyOdd => 1,
            Frequency::FirstThursday => 1,
            Frequency::FirstFriday => 1,
            Frequency::Quadweekly => 1,
            Frequency::QuadweeklyAlternate => 1,
            Frequency::Adhoc => 0,
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Frequency {
    type Err = MeetingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(Frequency::Weekly),
            "biweekly-even" => Ok(Frequency::BiweeklyEven),
            "biweekly-odd" => Ok(Frequency::BiweeklyOdd),
            "first-thursday" => Ok(Frequency::FirstThursday),
            "first-friday" => Ok(Frequency::FirstFriday),
            "quadweekly" => Ok(Frequency::Quadweekly),
            "quadweekly-alternate" => Ok(Frequency::QuadweeklyAlternate),
            "adhoc" => Ok(Frequency::Adhoc),
            _ => Err(MeetingError::UnknownFrequency(s.to_string())),
        }
    }
}

/// Start time of a meeting in the reference timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeetingTime {
    pub hour: u8,
    pub minute: u8,
}

impl std::str::FromStr for MeetingTime {
    type Err = MeetingError;

    /// Parse an `HHMM` time string. A three-digit form (`800`) is
    /// accepted the same way the historical tooling read it: the last
    /// two digits are the minutes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !(3..=4).contains(&s.len()) || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(MeetingError::InvalidTime(s.to_string()));
        }
        let split = s.len() - 2;
        let hour: u8 = s[..split]
            .parse()
            .map_err(|_| MeetingError::InvalidTime(s.to_string()))?;
        let minute: u8 = s[split..]
            .parse()
            .map_err(|_| MeetingError::InvalidTime(s.to_string()))?;
        if hour > 23 || minute > 59 {
            return Err(MeetingError::InvalidTime(s.to_string()));
        }
        Ok(MeetingTime { hour, minute })
    }
}

/// One schedule block as it appears in a meeting YAML file.
///
/// All fields are optional at this level: validation happens during
/// slot accumulation so that a malformed entry can be reported with its
/// full payload instead of failing the whole file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schedule {
    pub day: Option<String>,
    pub time: Option<String>,
    pub frequency: Option<String>,
    /// Meeting length in minutes; 60 when absent.
    pub duration: Option<u32>,
    /// IRC channel the meeting is held on, without the `#` prefix.
    pub irc: Option<String>,
}

/// A validated schedule entry, ready for occurrence expansion.
#[derive(Debug, Clone)]
pub struct ScheduleEntry {
    pub weekday: Weekday,
    pub time: MeetingTime,
    pub frequency: Frequency,
    pub duration_minutes: u32,
    pub channel: String,
    /// Raw `HHMM` string, preserved for contribution labels.
    pub time_spec: String,
}

impl TryFrom<&Schedule> for ScheduleEntry {
    type Error = MeetingError;

    fn try_from(raw: &Schedule) -> Result<Self, Self::Error> {
        let day = raw.day.as_deref().ok_or(MeetingError::MissingField("day"))?;
        let time_spec = raw
            .time
            .as_deref()
            .ok_or(MeetingError::MissingField("time"))?;
        let frequency = raw
            .frequency
            .as_deref()
            .ok_or(MeetingError::MissingField("frequency"))?;
        let channel = raw.irc.as_deref().ok_or(MeetingError::MissingField("irc"))?;

        let weekday = day
            .parse::<Weekday>()
            .map_err(|_| MeetingError::InvalidWeekday(day.to_string()))?;

        Ok(ScheduleEntry {
            weekday,
            time: time_spec.parse()?,
            frequency: frequency.parse()?,
            duration_minutes: raw.duration.unwrap_or(60),
            channel: channel.to_string(),
            time_spec: time_spec.to_string(),
        })
    }
}

/// One meeting definition. Read-only once loaded.
#[derive(Debug, Clone, Deserialize)]
pub struct Meeting {
    pub project: Option<String>,
    pub meeting_id: Option<String>,
    pub chair: Option<String>,
    #[serde(default)]
    pub schedule: Vec<Schedule>,
    /// Source file the meeting was loaded from. Used for diagnostics and
    /// as the display label when no canonical `meeting_id` exists.
    #[serde(skip)]
    pub filefrom: PathBuf,
}

impl Meeting {
    /// Label identifying this meeting in reports: the meeting archive
    /// URL when a canonical id exists, otherwise the source path.
    pub fn info_label(&self, year: i32) -> String {
        match &self.meeting_id {
            Some(id) => format!(
                "http://{}/meetings/{}/{:04}/?C=N;O=D",
                EAVESDROP,
                id.replace('-', "_"),
                year
            ),
            None => self.filefrom.display().to_string(),
        }
    }
}

/// The set of channels whose slot usage is tracked.
///
/// A configuration value rather than meeting data; schedules held on
/// channels outside this set are valid but excluded from accounting.
#[derive(Debug, Clone)]
pub struct SlotConfig {
    channels: BTreeSet<String>,
}

impl SlotConfig {
    pub fn new<I, S>(channels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SlotConfig {
            channels: channels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_monitored(&self, channel: &str) -> bool {
        self.channels.contains(channel)
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Total slots available per (weekday, hour) cell over a fortnight:
    /// each channel can host two weekly occurrences.
    pub fn total_slots(&self) -> usize {
        2 * self.channels.len()
    }
}

impl Default for SlotConfig {
    /// The four shared meeting channels. The restricted cross-project
    /// channel (`openstack-meeting-cp`) is deliberately not counted.
    fn default() -> Self {
        SlotConfig::new([
            "openstack-meeting",
            "openstack-meeting-alt",
            "openstack-meeting-3",
            "openstack-meeting-4",
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(day: &str, time: &str, frequency: &str, irc: &str) -> Schedule {
        Schedule {
            day: Some(day.to_string()),
            time: Some(time.to_string()),
            frequency: Some(frequency.to_string()),
            duration: None,
            irc: Some(irc.to_string()),
        }
    }

    #[test]
    fn test_weekday_order_is_monday_first() {
        assert_eq!(day_name(WEEKDAYS[0]), "Monday");
        assert_eq!(day_name(WEEKDAYS[6]), "Sunday");
        for (i, day) in WEEKDAYS.iter().enumerate() {
            assert_eq!(day.num_days_from_monday() as usize, i);
        }
    }

    #[test]
    fn test_meeting_time_parses_four_digits() {
        let time: MeetingTime = "1400".parse().unwrap();
        assert_eq!(time, MeetingTime { hour: 14, minute: 0 });
    }

    #[test]
    fn test_meeting_time_parses_three_digits() {
        let time: MeetingTime = "830".parse().unwrap();
        assert_eq!(time, MeetingTime { hour: 8, minute: 30 });
    }

    #[test]
    fn test_meeting_time_rejects_bad_input() {
        for bad in ["", "9", "14", "2500", "1275", "12:00", "abcd"] {
            assert!(
                bad.parse::<MeetingTime>().is_err(),
                "{:?} should not parse",
                bad
            );
        }
    }

    #[test]
    fn test_frequency_round_trip() {
        for code in [
            "weekly",
            "biweekly-even",
            "biweekly-odd",
            "first-thursday",
            "first-friday",
            "quadweekly",
            "quadweekly-alternate",
            "adhoc",
        ] {
            let frequency: Frequency = code.parse().unwrap();
            assert_eq!(frequency.code(), code);
        }
    }

    #[test]
    fn test_unknown_frequency_is_an_error() {
        let err = "fortnightly".parse::<Frequency>().unwrap_err();
        assert!(matches!(err, MeetingError::UnknownFrequency(s) if s == "fortnightly"));
    }

    #[test]
    fn test_fortnight_weights() {
        assert_eq!(Frequency::Weekly.fortnight_weight(), 2);
        assert_eq!(Frequency::BiweeklyEven.fortnight_weight(), 1);
        assert_eq!(Frequency::BiweeklyOdd.fortnight_weight(), 1);
        assert_eq!(Frequency::Quadweekly.fortnight_weight(), 1);
        assert_eq!(Frequency::Adhoc.fortnight_weight(), 0);
    }

    #[test]
    fn test_schedule_entry_validation() {
        let entry = ScheduleEntry::try_from(&schedule(
            "Tuesday",
            "1400",
            "weekly",
            "openstack-meeting",
        ))
        .unwrap();
        assert_eq!(entry.weekday, Weekday::Tue);
        assert_eq!(entry.time, MeetingTime { hour: 14, minute: 0 });
        assert_eq!(entry.frequency, Frequency::Weekly);
        assert_eq!(entry.duration_minutes, 60);
        assert_eq!(entry.channel, "openstack-meeting");
    }

    #[test]
    fn test_schedule_entry_missing_fields() {
        let mut raw = schedule("Monday", "1000", "weekly", "openstack-meeting");
        raw.time = None;
        let err = ScheduleEntry::try_from(&raw).unwrap_err();
        assert!(matches!(err, MeetingError::MissingField("time")));
        assert!(err.is_recoverable());

        let err = ScheduleEntry::try_from(&Schedule::default()).unwrap_err();
        assert!(matches!(err, MeetingError::MissingField("day")));
    }

    #[test]
    fn test_schedule_entry_invalid_weekday() {
        let raw = schedule("Funday", "1000", "weekly", "openstack-meeting");
        let err = ScheduleEntry::try_from(&raw).unwrap_err();
        assert!(matches!(err, MeetingError::InvalidWeekday(_)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_schedule_entry_unknown_frequency_is_fatal() {
        let raw = schedule("Monday", "1000", "sometimes", "openstack-meeting");
        let err = ScheduleEntry::try_from(&raw).unwrap_err();
        assert!(matches!(err, MeetingError::UnknownFrequency(_)));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_info_label_with_meeting_id() {
        let meeting = Meeting {
            project: Some("Nova Team Meeting".to_string()),
            meeting_id: Some("nova-api".to_string()),
            chair: None,
            schedule: Vec::new(),
            filefrom: PathBuf::from("meetings/nova-api.yaml"),
        };
        assert_eq!(
            meeting.info_label(2026),
            "http://eavesdrop.openstack.org/meetings/nova_api/2026/?C=N;O=D"
        );
    }

    #[test]
    fn test_info_label_falls_back_to_source_path() {
        let meeting = Meeting {
            project: None,
            meeting_id: None,
            chair: None,
            schedule: Vec::new(),
            filefrom: PathBuf::from("meetings/adhoc.yaml"),
        };
        assert_eq!(meeting.info_label(2026), "meetings/adhoc.yaml");
    }

    #[test]
    fn test_slot_config_defaults() {
        let config = SlotConfig::default();
        assert_eq!(config.channel_count(), 4);
        assert_eq!(config.total_slots(), 8);
        assert!(config.is_monitored("openstack-meeting"));
        assert!(config.is_monitored("openstack-meeting-4"));
        assert!(!config.is_monitored("openstack-meeting-cp"));
        assert!(!config.is_monitored("openstack-nova"));
    }
}
