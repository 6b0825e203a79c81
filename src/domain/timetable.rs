// domain/timetable.rs - Weekly class schedule: 5 weekdays x 5 periods of tri-state slots

use serde::{Deserialize, Serialize};

pub const MAX_SUBJECT_CHARS: usize = 85;
pub const MAX_ROOM_CHARS: usize = 85;
pub const MAX_MEMO_CHARS: usize = 170;

/// Contents of one timetable slot.
///
/// `Empty` (no class), `NoRoom` (class without an assigned room) and `Full`
/// are distinct states; an empty memo is the only "absent" value carried
/// inside a class.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Class {
    #[default]
    Empty,
    NoRoom {
        subject: String,
        memo: String,
    },
    Full {
        subject: String,
        room: String,
        memo: String,
    },
}

impl Class {
    pub fn no_room(subject: impl Into<String>, memo: impl Into<String>) -> Self {
        Class::NoRoom {
            subject: subject.into(),
            memo: memo.into(),
        }
    }

    pub fn full(subject: impl Into<String>, room: impl Into<String>, memo: impl Into<String>) -> Self {
        Class::Full {
            subject: subject.into(),
            room: room.into(),
            memo: memo.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Class::Empty)
    }

    pub fn subject(&self) -> Option<&str> {
        match self {
            Class::Empty => None,
            Class::NoRoom { subject, .. } | Class::Full { subject, .. } => Some(subject),
        }
    }

    /// Room, only for fully specified classes.
    pub fn room(&self) -> Option<&str> {
        match self {
            Class::Full { room, .. } => Some(room),
            _ => None,
        }
    }

    pub fn memo(&self) -> Option<&str> {
        match self {
            Class::Empty => None,
            Class::NoRoom { memo, .. } | Class::Full { memo, .. } => Some(memo),
        }
    }
}

/// Period position inside a day, 1 through 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
}

impl Period {
    pub const ALL: [Period; 5] = [
        Period::First,
        Period::Second,
        Period::Third,
        Period::Fourth,
        Period::Fifth,
    ];

    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    fn index(self) -> usize {
        match self {
            Period::First => 0,
            Period::Second => 1,
            Period::Third => 2,
            Period::Fourth => 3,
            Period::Fifth => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri];

    pub fn key(self) -> &'static str {
        match self {
            Weekday::Mon => "mon",
            Weekday::Tue => "tue",
            Weekday::Wed => "wed",
            Weekday::Thu => "thu",
            Weekday::Fri => "fri",
        }
    }

    fn index(self) -> usize {
        match self {
            Weekday::Mon => 0,
            Weekday::Tue => 1,
            Weekday::Wed => 2,
            Weekday::Thu => 3,
            Weekday::Fri => 4,
        }
    }
}

/// One weekday: exactly five fixed-position slots.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timetable {
    periods: [Class; 5],
}

impl Timetable {
    pub fn new(first: Class, second: Class, third: Class, fourth: Class, fifth: Class) -> Self {
        Self {
            periods: [first, second, third, fourth, fifth],
        }
    }

    pub fn period(&self, period: Period) -> &Class {
        &self.periods[period.index()]
    }

    pub fn periods(&self) -> impl Iterator<Item = (Period, &Class)> {
        Period::ALL.into_iter().zip(self.periods.iter())
    }
}

/// A user's whole week, Monday to Friday. Replaced wholesale on every save.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Timetables {
    mon: Timetable,
    tue: Timetable,
    wed: Timetable,
    thu: Timetable,
    fri: Timetable,
}

impl Timetables {
    pub fn new(mon: Timetable, tue: Timetable, wed: Timetable, thu: Timetable, fri: Timetable) -> Self {
        Self { mon, tue, wed, thu, fri }
    }

    pub fn day(&self, day: Weekday) -> &Timetable {
        match day {
            Weekday::Mon => &self.mon,
            Weekday::Tue => &self.tue,
            Weekday::Wed => &self.wed,
            Weekday::Thu => &self.thu,
            Weekday::Fri => &self.fri,
        }
    }

    pub fn days(&self) -> impl Iterator<Item = (Weekday, &Timetable)> {
        Weekday::ALL.into_iter().map(move |day| (day, self.day(day)))
    }

    pub fn class(&self, day: Weekday, period: Period) -> &Class {
        self.day(day).period(period)
    }
}
