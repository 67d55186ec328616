//! # Dashboard state machine
//!
//! [`DashboardState`] holds everything the provider dashboard shows: the
//! selected day, the month displayed by the calendar, that month's
//! availability and the selected day's appointments.
//!
//! State changes never perform I/O. A transition that needs data returns the
//! [`Fetch`] to issue; the component runs it with [`Fetch::perform`] and feeds
//! the [`Fetched`] result back through [`DashboardState::apply`]. This gives
//! exactly one request per actual change:
//!
//! | Transition | Request |
//! |------------|---------|
//! | [`show_month`](DashboardState::show_month) to another month | `GET /providers/{id}/month-availability` |
//! | [`select_day`](DashboardState::select_day) of another selectable day | `GET /appointments/me` |
//!
//! Results for a month or day that is no longer current are dropped, so a slow
//! response cannot overwrite a newer one.

use api::{ApiError, Appointment, Backend, DayQuery, MonthAvailabilityItem, MonthQuery};
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};

use crate::calendar::{first_of_month, is_weekend, DayModifiers, MonthGrid};

/// A request the dashboard needs issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fetch {
    MonthAvailability(MonthQuery),
    Appointments(DayQuery),
}

/// The outcome of a [`Fetch`].
#[derive(Debug)]
pub enum Fetched {
    MonthAvailability(MonthQuery, Result<Vec<MonthAvailabilityItem>, ApiError>),
    Appointments(DayQuery, Result<Vec<Appointment>, ApiError>),
}

impl Fetch {
    pub async fn perform<B: Backend>(self, backend: &B, provider_id: &str) -> Fetched {
        tracing::debug!("Dashboard fetch {:?}", self);
        match self {
            Self::MonthAvailability(query) => Fetched::MonthAvailability(
                query,
                backend.month_availability(provider_id, query).await,
            ),
            Self::Appointments(query) => {
                Fetched::Appointments(query, backend.appointments(query).await)
            }
        }
    }
}

/// One appointment, ready for display.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledAppointment {
    pub id: String,
    pub time: NaiveTime,
    /// "14:00"
    pub hour_formatted: String,
    pub customer: String,
    pub avatar_url: Option<String>,
}

/// The selected day's appointments, split at noon.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DaySchedule {
    pub morning: Vec<ScheduledAppointment>,
    pub afternoon: Vec<ScheduledAppointment>,
    /// First appointment still ahead, only when the selected day is today.
    pub next: Option<ScheduledAppointment>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    today: NaiveDate,
    selected_date: NaiveDate,
    current_month: NaiveDate,
    month_availability: Vec<MonthAvailabilityItem>,
    appointments: Vec<Appointment>,
}

impl DashboardState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            selected_date: today,
            current_month: first_of_month(today),
            month_availability: Vec::new(),
            appointments: Vec::new(),
        }
    }

    /// Requests to issue when the dashboard is first shown.
    pub fn initial_fetches(&self) -> [Fetch; 2] {
        [
            Fetch::MonthAvailability(MonthQuery::for_date(self.current_month)),
            Fetch::Appointments(DayQuery::for_date(self.selected_date)),
        ]
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn current_month(&self) -> NaiveDate {
        self.current_month
    }

    pub fn month_availability(&self) -> &[MonthAvailabilityItem] {
        &self.month_availability
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Display another month. Returns the availability request for it, or
    /// `None` when that month is already shown.
    pub fn show_month(&mut self, month: NaiveDate) -> Option<Fetch> {
        let month = first_of_month(month);
        if month == self.current_month {
            return None;
        }
        self.current_month = month;
        self.month_availability.clear();
        Some(Fetch::MonthAvailability(MonthQuery::for_date(month)))
    }

    /// Select a day. Weekends, unavailable days and the already selected day
    /// leave the state unchanged and return `None`.
    pub fn select_day(&mut self, date: NaiveDate) -> Option<Fetch> {
        if !self.modifiers(date).is_selectable() || date == self.selected_date {
            return None;
        }
        self.selected_date = date;
        self.appointments.clear();
        Some(Fetch::Appointments(DayQuery::for_date(date)))
    }

    /// Whether the backend reported `date` as fully booked.
    fn is_unavailable(&self, date: NaiveDate) -> bool {
        first_of_month(date) == self.current_month
            && self
                .month_availability
                .iter()
                .any(|item| item.day == date.day() && !item.available)
    }

    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        is_weekend(date) || self.is_unavailable(date)
    }

    /// Days of the displayed month the backend reported as unavailable.
    pub fn disabled_days(&self) -> Vec<NaiveDate> {
        let year = self.current_month.year();
        let month = self.current_month.month();
        self.month_availability
            .iter()
            .filter(|item| !item.available)
            .filter_map(|item| NaiveDate::from_ymd_opt(year, month, item.day))
            .collect()
    }

    pub fn modifiers(&self, date: NaiveDate) -> DayModifiers {
        DayModifiers {
            available: !is_weekend(date),
            disabled: self.is_disabled(date),
            selected: date == self.selected_date,
            today: date == self.today,
        }
    }

    pub fn month_grid(&self) -> MonthGrid {
        MonthGrid::build(self.current_month, |date| self.modifiers(date))
    }

    /// Store a fetch result. Stale results and errors leave the state as is.
    pub fn apply(&mut self, fetched: Fetched) {
        match fetched {
            Fetched::MonthAvailability(query, Ok(items)) => {
                if query == MonthQuery::for_date(self.current_month) {
                    self.month_availability = items;
                } else {
                    tracing::debug!("Dropping stale availability for {:?}", query);
                }
            }
            Fetched::Appointments(query, Ok(list)) => {
                if query == DayQuery::for_date(self.selected_date) {
                    self.appointments = list;
                } else {
                    tracing::debug!("Dropping stale appointments for {:?}", query);
                }
            }
            Fetched::MonthAvailability(query, Err(e)) => {
                tracing::warn!("Failed to load availability for {:?}: {}", query, e);
            }
            Fetched::Appointments(query, Err(e)) => {
                tracing::warn!("Failed to load appointments for {:?}: {}", query, e);
            }
        }
    }

    pub fn is_today(&self) -> bool {
        self.selected_date == self.today
    }

    /// "Day 16 of October"
    pub fn selected_date_text(&self) -> String {
        format!(
            "Day {} of {}",
            self.selected_date.day(),
            self.selected_date.format("%B")
        )
    }

    /// "Friday"
    pub fn selected_weekday(&self) -> String {
        self.selected_date.format("%A").to_string()
    }

    /// Appointments of the selected day in `tz`, sorted and split at noon.
    pub fn schedule<Tz: TimeZone>(&self, tz: &Tz, now: DateTime<Utc>) -> DaySchedule {
        let mut items: Vec<(DateTime<Utc>, ScheduledAppointment)> = self
            .appointments
            .iter()
            .map(|appointment| {
                let time = appointment.date.with_timezone(tz).time();
                let scheduled = ScheduledAppointment {
                    id: appointment.id.clone(),
                    time,
                    hour_formatted: time.format("%H:%M").to_string(),
                    customer: appointment.user.name.clone(),
                    avatar_url: appointment.user.avatar_url.clone(),
                };
                (appointment.date, scheduled)
            })
            .collect();
        items.sort_by_key(|(date, _)| *date);

        let next = if self.is_today() {
            items
                .iter()
                .find(|(date, _)| *date > now)
                .map(|(_, s)| s.clone())
        } else {
            None
        };

        let (morning, afternoon) = items
            .into_iter()
            .map(|(_, s)| s)
            .partition(|s| s.time.hour() < 12);

        DaySchedule {
            morning,
            afternoon,
            next,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{appointment, Call, MockBackend};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Friday 16 October 2026.
    fn today() -> NaiveDate {
        date(2026, 10, 16)
    }

    #[test]
    fn test_defaults_to_today() {
        let state = DashboardState::new(today());
        assert_eq!(state.selected_date(), today());
        assert_eq!(state.current_month(), date(2026, 10, 1));
        assert!(state.is_today());
        assert_eq!(
            state.initial_fetches(),
            [
                Fetch::MonthAvailability(MonthQuery { year: 2026, month: 10 }),
                Fetch::Appointments(DayQuery { year: 2026, month: 10, day: 16 }),
            ]
        );
    }

    #[test]
    fn test_month_change_fetches_once() {
        let mut state = DashboardState::new(today());
        assert_eq!(
            state.show_month(date(2026, 11, 20)),
            Some(Fetch::MonthAvailability(MonthQuery { year: 2026, month: 11 }))
        );
        // Same month again: nothing to fetch.
        assert_eq!(state.show_month(date(2026, 11, 1)), None);
        assert_eq!(state.current_month(), date(2026, 11, 1));
    }

    #[test]
    fn test_date_change_fetches_once() {
        let mut state = DashboardState::new(today());
        assert_eq!(
            state.select_day(date(2026, 10, 19)),
            Some(Fetch::Appointments(DayQuery { year: 2026, month: 10, day: 19 }))
        );
        assert_eq!(state.select_day(date(2026, 10, 19)), None);
        assert_eq!(state.selected_date(), date(2026, 10, 19));
        assert!(!state.is_today());
    }

    #[test]
    fn test_weekend_selection_is_noop() {
        let mut state = DashboardState::new(today());
        for weekend in [date(2026, 10, 17), date(2026, 10, 18)] {
            assert!(state.modifiers(weekend).disabled);
            assert_eq!(state.select_day(weekend), None);
        }
        assert_eq!(state.selected_date(), today());
    }

    #[test]
    fn test_unavailable_day_selection_is_noop() {
        let mut state = DashboardState::new(today());
        state.apply(Fetched::MonthAvailability(
            MonthQuery { year: 2026, month: 10 },
            Ok(vec![
                MonthAvailabilityItem { day: 20, available: false },
                MonthAvailabilityItem { day: 21, available: true },
            ]),
        ));

        assert_eq!(state.disabled_days(), vec![date(2026, 10, 20)]);
        assert_eq!(state.select_day(date(2026, 10, 20)), None);
        assert_eq!(state.selected_date(), today());
        assert!(state.select_day(date(2026, 10, 21)).is_some());
    }

    #[test]
    fn test_availability_only_applies_to_its_month() {
        let mut state = DashboardState::new(today());
        state.apply(Fetched::MonthAvailability(
            MonthQuery { year: 2026, month: 10 },
            Ok(vec![MonthAvailabilityItem { day: 20, available: false }]),
        ));
        // 20 November 2026 is a Friday with no availability data yet.
        state.show_month(date(2026, 11, 1));
        assert!(state.month_availability().is_empty());
        assert!(!state.is_disabled(date(2026, 11, 20)));
    }

    #[test]
    fn test_stale_results_are_dropped() {
        let mut state = DashboardState::new(today());
        state.select_day(date(2026, 10, 19));
        state.apply(Fetched::Appointments(
            DayQuery { year: 2026, month: 10, day: 16 },
            Ok(vec![appointment("late", 9)]),
        ));
        assert!(state.appointments().is_empty());

        state.show_month(date(2026, 12, 1));
        state.apply(Fetched::MonthAvailability(
            MonthQuery { year: 2026, month: 11 },
            Ok(vec![MonthAvailabilityItem { day: 2, available: false }]),
        ));
        assert!(state.month_availability().is_empty());
    }

    #[test]
    fn test_errors_keep_previous_state() {
        let mut state = DashboardState::new(today());
        state.apply(Fetched::Appointments(
            DayQuery::for_date(today()),
            Ok(vec![appointment("a", 9)]),
        ));
        state.apply(Fetched::Appointments(
            DayQuery::for_date(today()),
            Err(ApiError::Status { status: 500, message: None }),
        ));
        assert_eq!(state.appointments().len(), 1);
    }

    #[test]
    fn test_display_text() {
        let state = DashboardState::new(today());
        assert_eq!(state.selected_date_text(), "Day 16 of October");
        assert_eq!(state.selected_weekday(), "Friday");
    }

    #[test]
    fn test_schedule_split_and_next() {
        let mut state = DashboardState::new(today());
        state.apply(Fetched::Appointments(
            DayQuery::for_date(today()),
            Ok(vec![
                appointment("c", 15),
                appointment("a", 8),
                appointment("b", 11),
                appointment("d", 12),
            ]),
        ));

        let now = Utc.with_ymd_and_hms(2026, 10, 16, 10, 30, 0).unwrap();
        let schedule = state.schedule(&Utc, now);
        let ids = |list: &[ScheduledAppointment]| -> Vec<String> {
            list.iter().map(|s| s.id.clone()).collect()
        };
        assert_eq!(ids(&schedule.morning), ["a", "b"]);
        assert_eq!(ids(&schedule.afternoon), ["d", "c"]);
        assert_eq!(schedule.morning[0].hour_formatted, "08:00");
        assert_eq!(schedule.next.map(|s| s.id), Some("b".to_string()));
    }

    #[test]
    fn test_no_next_appointment_on_other_days() {
        let mut state = DashboardState::new(today());
        state.select_day(date(2026, 10, 19));
        state.apply(Fetched::Appointments(
            DayQuery::for_date(date(2026, 10, 19)),
            Ok(vec![appointment("a", 9)]),
        ));
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 8, 0, 0).unwrap();
        assert!(state.schedule(&Utc, now).next.is_none());
    }

    #[tokio::test]
    async fn test_initial_fetches_fill_the_schedule() {
        let backend = MockBackend::new()
            .with_availability(vec![MonthAvailabilityItem { day: 20, available: false }])
            .with_appointments(vec![appointment("late", 16), appointment("early", 9)]);
        let mut state = DashboardState::new(today());

        for fetch in state.initial_fetches() {
            let fetched = fetch.perform(&backend, "provider-1").await;
            state.apply(fetched);
        }

        assert_eq!(backend.calls().len(), 2);
        assert_eq!(state.disabled_days(), vec![date(2026, 10, 20)]);
        let schedule = state.schedule(&Utc, Utc.with_ymd_and_hms(2026, 10, 16, 7, 0, 0).unwrap());
        assert_eq!(schedule.morning[0].id, "early");
        assert_eq!(schedule.afternoon[0].id, "late");
        assert_eq!(schedule.next.map(|s| s.id), Some("early".to_string()));
    }

    #[tokio::test]
    async fn test_navigation_issues_one_request_per_change() {
        let backend = MockBackend::new()
            .with_availability(vec![MonthAvailabilityItem { day: 2, available: false }]);
        let mut state = DashboardState::new(today());

        let transitions = [
            state.show_month(date(2026, 11, 1)),
            state.show_month(date(2026, 11, 15)),
            state.select_day(date(2026, 10, 19)),
            state.select_day(date(2026, 10, 19)),
            state.select_day(date(2026, 10, 24)),
        ];
        for fetch in transitions.into_iter().flatten() {
            let fetched = fetch.perform(&backend, "provider-1").await;
            state.apply(fetched);
        }

        assert_eq!(
            backend.calls(),
            vec![
                Call::MonthAvailability(
                    "provider-1".to_string(),
                    MonthQuery { year: 2026, month: 11 }
                ),
                Call::Appointments(DayQuery { year: 2026, month: 10, day: 19 }),
            ]
        );
        assert_eq!(state.disabled_days(), vec![date(2026, 11, 2)]);
    }
}
