//! Month grid model behind the calendar widget.
//!
//! A [`MonthGrid`] lays one month out in Sunday-first weeks. Cells before the
//! first and after the last day of the month are `None`; every real day carries
//! the [`DayModifiers`] the dashboard computed for it.

use chrono::{Datelike, Months, NaiveDate, Weekday};

pub const WEEKDAY_LABELS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// How the calendar should treat one day.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DayModifiers {
    /// A working day (Monday to Friday).
    pub available: bool,
    /// Cannot be selected: weekend or fully booked.
    pub disabled: bool,
    pub selected: bool,
    pub today: bool,
}

impl DayModifiers {
    pub fn is_selectable(&self) -> bool {
        self.available && !self.disabled
    }

    pub fn class(&self) -> String {
        let mut class = String::from("calendar-day");
        if self.available {
            class.push_str(" calendar-day--available");
        }
        if self.disabled {
            class.push_str(" calendar-day--disabled");
        }
        if self.selected {
            class.push_str(" calendar-day--selected");
        }
        if self.today {
            class.push_str(" calendar-day--today");
        }
        class
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub modifiers: DayModifiers,
}

pub type Week = [Option<CalendarDay>; 7];

#[derive(Clone, Debug, PartialEq)]
pub struct MonthGrid {
    /// Always the first day of the month.
    pub month: NaiveDate,
    pub weeks: Vec<Week>,
}

impl MonthGrid {
    pub fn build(month: NaiveDate, modifiers: impl Fn(NaiveDate) -> DayModifiers) -> Self {
        let first = first_of_month(month);
        let mut weeks = Vec::new();
        let mut week: Week = [None; 7];
        let mut column = first.weekday().num_days_from_sunday() as usize;

        for date in first.iter_days().take_while(|d| d.month() == first.month()) {
            week[column] = Some(CalendarDay {
                date,
                modifiers: modifiers(date),
            });
            column += 1;
            if column == 7 {
                weeks.push(week);
                week = [None; 7];
                column = 0;
            }
        }
        if column > 0 {
            weeks.push(week);
        }

        Self {
            month: first,
            weeks,
        }
    }

    /// "October 2026"
    pub fn caption(&self) -> String {
        self.month.format("%B %Y").to_string()
    }

    pub fn previous_month(&self) -> NaiveDate {
        self.month
            .checked_sub_months(Months::new(1))
            .unwrap_or(self.month)
    }

    pub fn next_month(&self) -> NaiveDate {
        self.month
            .checked_add_months(Months::new(1))
            .unwrap_or(self.month)
    }

    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flatten().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_october_2026_layout() {
        // 1 October 2026 is a Thursday.
        let grid = MonthGrid::build(date(2026, 10, 16), |_| DayModifiers::default());
        assert_eq!(grid.month, date(2026, 10, 1));
        assert_eq!(grid.weeks.len(), 5);
        assert!(grid.weeks[0][..4].iter().all(Option::is_none));
        assert_eq!(grid.weeks[0][4].unwrap().date, date(2026, 10, 1));
        assert_eq!(grid.weeks[4][6].unwrap().date, date(2026, 10, 31));
        assert_eq!(grid.days().count(), 31);
    }

    #[test]
    fn test_month_starting_on_sunday() {
        // 1 February 2026 is a Sunday; 28 days fill exactly four weeks.
        let grid = MonthGrid::build(date(2026, 2, 1), |_| DayModifiers::default());
        assert_eq!(grid.weeks.len(), 4);
        assert_eq!(grid.weeks[0][0].unwrap().date, date(2026, 2, 1));
        assert!(grid.weeks.iter().flatten().all(Option::is_some));
    }

    #[test]
    fn test_modifiers_are_attached() {
        let grid = MonthGrid::build(date(2026, 10, 1), |d| DayModifiers {
            available: !is_weekend(d),
            disabled: is_weekend(d),
            ..Default::default()
        });
        let saturday = grid.days().find(|d| d.date == date(2026, 10, 3)).unwrap();
        assert!(!saturday.modifiers.is_selectable());
        let friday = grid.days().find(|d| d.date == date(2026, 10, 2)).unwrap();
        assert!(friday.modifiers.is_selectable());
    }

    #[test]
    fn test_month_navigation_and_caption() {
        let grid = MonthGrid::build(date(2026, 1, 20), |_| DayModifiers::default());
        assert_eq!(grid.caption(), "January 2026");
        assert_eq!(grid.previous_month(), date(2025, 12, 1));
        assert_eq!(grid.next_month(), date(2026, 2, 1));
    }

    #[test]
    fn test_modifier_classes() {
        let modifiers = DayModifiers {
            available: true,
            selected: true,
            ..Default::default()
        };
        assert_eq!(
            modifiers.class(),
            "calendar-day calendar-day--available calendar-day--selected"
        );
    }
}
