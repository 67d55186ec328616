//! # Provider schedule models
//!
//! The dashboard reads two collections: the availability of every day in the
//! displayed month ([`MonthAvailabilityItem`]) and the appointments booked on the
//! selected day ([`Appointment`]). [`MonthQuery`] and [`DayQuery`] carry the query
//! string parameters for those requests. Months are 1-based on the wire.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Whether a provider still accepts appointments on one day of a month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthAvailabilityItem {
    pub day: u32,
    pub available: bool,
}

/// Query for `GET /providers/{id}/month-availability`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthQuery {
    pub year: i32,
    /// 1 = January.
    pub month: u32,
}

impl MonthQuery {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn params(&self) -> [(&'static str, String); 2] {
        [
            ("year", self.year.to_string()),
            ("month", self.month.to_string()),
        ]
    }
}

/// Query for `GET /appointments/me`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayQuery {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DayQuery {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }

    pub fn params(&self) -> [(&'static str, String); 3] {
        [
            ("year", self.year.to_string()),
            ("month", self.month.to_string()),
            ("day", self.day.to_string()),
        ]
    }
}

/// The customer an appointment is booked for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppointmentUser {
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// One booked appointment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: String,
    pub date: DateTime<Utc>,
    pub user: AppointmentUser,
}
