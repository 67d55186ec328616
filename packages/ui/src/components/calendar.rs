use chrono::{Datelike, NaiveDate};
use dioxus::prelude::*;

use crate::calendar::{CalendarDay, MonthGrid, WEEKDAY_LABELS};
use crate::icons::{FiChevronLeft, FiChevronRight};
use crate::Icon;

const CALENDAR_CSS: Asset = asset!("/assets/styling/calendar.css");

/// Month calendar. Clicks on selectable days and month navigation are
/// reported; the caller owns the state.
#[component]
pub fn Calendar(
    grid: MonthGrid,
    on_day_click: EventHandler<NaiveDate>,
    on_month_change: EventHandler<NaiveDate>,
) -> Element {
    let previous = grid.previous_month();
    let next = grid.next_month();

    rsx! {
        document::Stylesheet { href: CALENDAR_CSS }

        div {
            class: "calendar",
            div {
                class: "calendar-nav",
                button {
                    class: "calendar-nav-button",
                    r#type: "button",
                    title: "Previous month",
                    onclick: move |_| on_month_change.call(previous),
                    Icon { icon: FiChevronLeft, width: 20, height: 20 }
                }
                span { class: "calendar-caption", "{grid.caption()}" }
                button {
                    class: "calendar-nav-button",
                    r#type: "button",
                    title: "Next month",
                    onclick: move |_| on_month_change.call(next),
                    Icon { icon: FiChevronRight, width: 20, height: 20 }
                }
            }
            table {
                class: "calendar-table",
                thead {
                    tr {
                        for label in WEEKDAY_LABELS {
                            th { "{label}" }
                        }
                    }
                }
                tbody {
                    for week in grid.weeks.iter() {
                        tr {
                            for cell in week.iter() {
                                CalendarCell { cell: *cell, on_day_click }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CalendarCell(cell: Option<CalendarDay>, on_day_click: EventHandler<NaiveDate>) -> Element {
    let Some(day) = cell else {
        return rsx! {
            td { class: "calendar-day calendar-day--outside" }
        };
    };

    rsx! {
        td {
            class: day.modifiers.class(),
            onclick: move |_| {
                if day.modifiers.is_selectable() {
                    on_day_click.call(day.date);
                }
            },
            "{day.date.day()}"
        }
    }
}
