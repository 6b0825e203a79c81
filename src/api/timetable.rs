// api/timetable.rs - Timetable JSON bodies and the tri-state class mapping
//
// {"timetable": {"mon": {"1": {"subject": "Math", "room": "A1", "memo": "..."}, ...}, ...}}
//
// A slot that is missing (or null) is an empty period. Inside a present slot,
// a missing room means "no room assigned" while "room": "" is a room with an
// empty name; the two never collapse. A missing memo reads as an empty memo,
// and an empty memo is written back out as a missing field.

use serde::{Deserialize, Serialize};

use crate::domain::timetable::{MAX_MEMO_CHARS, MAX_ROOM_CHARS, MAX_SUBJECT_CHARS};
use crate::domain::{Class, Period, Timetable, Timetables, Weekday};
use crate::error::ApiError;
use super::FieldErrors;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassJson {
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl ClassJson {
    /// Map a slot's wire form onto its domain state.
    pub fn into_class(slot: Option<Self>) -> Class {
        match slot {
            None => Class::Empty,
            Some(ClassJson { subject, room: None, memo }) => Class::no_room(subject, memo.unwrap_or_default()),
            Some(ClassJson { subject, room: Some(room), memo }) => {
                Class::full(subject, room, memo.unwrap_or_default())
            }
        }
    }

    /// Inverse of [`ClassJson::into_class`], omitting empty memos.
    pub fn from_class(class: &Class) -> Option<Self> {
        let memo = |memo: &str| (!memo.is_empty()).then(|| memo.to_string());
        match class {
            Class::Empty => None,
            Class::NoRoom { subject, memo: m } => Some(Self {
                subject: subject.clone(),
                room: None,
                memo: memo(m),
            }),
            Class::Full { subject, room, memo: m } => Some(Self {
                subject: subject.clone(),
                room: Some(room.clone()),
                memo: memo(m),
            }),
        }
    }

    fn validate(&self, path: &str, errors: &mut FieldErrors) {
        if self.subject.is_empty() {
            errors.add(format!("{}.subject", path), "is required");
        } else {
            errors.check_max_chars(format!("{}.subject", path), &self.subject, MAX_SUBJECT_CHARS);
        }
        if let Some(room) = &self.room {
            errors.check_max_chars(format!("{}.room", path), room, MAX_ROOM_CHARS);
        }
        if let Some(memo) = &self.memo {
            errors.check_max_chars(format!("{}.memo", path), memo, MAX_MEMO_CHARS);
        }
    }
}

/// One weekday; periods are keyed "1" through "5".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayJson {
    #[serde(rename = "1", default, skip_serializing_if = "Option::is_none")]
    pub one: Option<ClassJson>,
    #[serde(rename = "2", default, skip_serializing_if = "Option::is_none")]
    pub two: Option<ClassJson>,
    #[serde(rename = "3", default, skip_serializing_if = "Option::is_none")]
    pub three: Option<ClassJson>,
    #[serde(rename = "4", default, skip_serializing_if = "Option::is_none")]
    pub four: Option<ClassJson>,
    #[serde(rename = "5", default, skip_serializing_if = "Option::is_none")]
    pub five: Option<ClassJson>,
}

impl DayJson {
    fn slot(&self, period: Period) -> Option<&ClassJson> {
        match period {
            Period::First => self.one.as_ref(),
            Period::Second => self.two.as_ref(),
            Period::Third => self.three.as_ref(),
            Period::Fourth => self.four.as_ref(),
            Period::Fifth => self.five.as_ref(),
        }
    }

    fn validate(&self, day: Weekday, errors: &mut FieldErrors) {
        for period in Period::ALL {
            if let Some(class) = self.slot(period) {
                class.validate(&format!("{}.{}", day.key(), period.number()), errors);
            }
        }
    }

    pub fn into_timetable(self) -> Timetable {
        Timetable::new(
            ClassJson::into_class(self.one),
            ClassJson::into_class(self.two),
            ClassJson::into_class(self.three),
            ClassJson::into_class(self.four),
            ClassJson::into_class(self.five),
        )
    }
}

impl From<&Timetable> for DayJson {
    fn from(day: &Timetable) -> Self {
        Self {
            one: ClassJson::from_class(day.period(Period::First)),
            two: ClassJson::from_class(day.period(Period::Second)),
            three: ClassJson::from_class(day.period(Period::Third)),
            four: ClassJson::from_class(day.period(Period::Fourth)),
            five: ClassJson::from_class(day.period(Period::Fifth)),
        }
    }
}

/// The whole week. Every weekday object is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekJson {
    pub mon: DayJson,
    pub tue: DayJson,
    pub wed: DayJson,
    pub thu: DayJson,
    pub fri: DayJson,
}

impl WeekJson {
    fn day(&self, day: Weekday) -> &DayJson {
        match day {
            Weekday::Mon => &self.mon,
            Weekday::Tue => &self.tue,
            Weekday::Wed => &self.wed,
            Weekday::Thu => &self.thu,
            Weekday::Fri => &self.fri,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetablesJson {
    pub timetable: WeekJson,
}

impl TimetablesJson {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        for day in Weekday::ALL {
            self.timetable.day(day).validate(day, &mut errors);
        }
        errors.into_result()
    }

    /// Validate and convert into the domain week.
    pub fn into_timetables(self) -> Result<Timetables, ApiError> {
        self.validate()?;
        let WeekJson { mon, tue, wed, thu, fri } = self.timetable;
        Ok(Timetables::new(
            mon.into_timetable(),
            tue.into_timetable(),
            wed.into_timetable(),
            thu.into_timetable(),
            fri.into_timetable(),
        ))
    }
}

impl From<&Timetables> for TimetablesJson {
    fn from(week: &Timetables) -> Self {
        Self {
            timetable: WeekJson {
                mon: DayJson::from(week.day(Weekday::Mon)),
                tue: DayJson::from(week.day(Weekday::Tue)),
                wed: DayJson::from(week.day(Weekday::Wed)),
                thu: DayJson::from(week.day(Weekday::Thu)),
                fri: DayJson::from(week.day(Weekday::Fri)),
            },
        }
    }
}
