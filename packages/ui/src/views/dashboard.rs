use chrono::{Local, Utc};
use dioxus::prelude::*;

use crate::auth::{use_auth, AuthContext};
use crate::components::Calendar;
use crate::dashboard::{DashboardState, Fetch, ScheduledAppointment};
use crate::icons::{FiClock, FiPower, FiUser};
use crate::Icon;

const DASHBOARD_CSS: Asset = asset!("/assets/styling/dashboard.css");
const LOGO: Asset = asset!("/assets/logo.svg");

/// Run `fetch` for the signed-in provider and feed the result back.
fn issue(auth: AuthContext, mut state: Signal<DashboardState>, fetch: Fetch) {
    let Some(user) = auth.user() else {
        tracing::warn!("Dashboard fetch without a signed-in user");
        return;
    };
    let client = auth.client();
    spawn(async move {
        let fetched = fetch.perform(&client, &user.id).await;
        state.write().apply(fetched);
    });
}

#[component]
pub fn DashboardView() -> Element {
    let auth = use_auth();
    let mut state = use_signal(|| DashboardState::new(Local::now().date_naive()));

    use_hook(move || {
        for fetch in state.peek().initial_fetches() {
            issue(auth, state, fetch);
        }
    });

    let on_day_click = move |date| {
        let fetch = state.write().select_day(date);
        if let Some(fetch) = fetch {
            issue(auth, state, fetch);
        }
    };
    let on_month_change = move |month| {
        let fetch = state.write().show_month(month);
        if let Some(fetch) = fetch {
            issue(auth, state, fetch);
        }
    };

    let user = auth.user();
    let current = state.read();
    let schedule = current.schedule(&Local, Utc::now());

    rsx! {
        document::Stylesheet { href: DASHBOARD_CSS }

        div {
            class: "dashboard",
            header {
                class: "dashboard-header",
                div {
                    class: "dashboard-header-content",
                    img { class: "dashboard-logo", src: LOGO, alt: "GoBarber" }
                    if let Some(user) = user {
                        div {
                            class: "dashboard-profile",
                            Avatar { url: user.avatar_url.clone(), name: user.name.clone() }
                            div {
                                span { "Welcome," }
                                strong { title: "{user.name}", "{user.first_name()}" }
                            }
                        }
                    }
                    button {
                        class: "dashboard-sign-out",
                        r#type: "button",
                        title: "Sign out",
                        onclick: move |_| auth.sign_out(),
                        Icon { icon: FiPower, width: 20, height: 20 }
                    }
                }
            }

            main {
                class: "dashboard-content",
                section {
                    class: "dashboard-schedule",
                    h1 { "Scheduled appointments" }
                    p {
                        class: "dashboard-date",
                        if current.is_today() {
                            span { "Today" }
                        }
                        span { "{current.selected_date_text()}" }
                        span { "{current.selected_weekday()}" }
                    }

                    if let Some(next) = schedule.next.clone() {
                        div {
                            class: "dashboard-next",
                            strong { "Next appointment" }
                            AppointmentRow { appointment: next, highlighted: true }
                        }
                    }

                    ScheduleSection { title: "Morning", appointments: schedule.morning.clone() }
                    ScheduleSection { title: "Afternoon", appointments: schedule.afternoon.clone() }
                }

                aside {
                    class: "dashboard-calendar",
                    Calendar {
                        grid: current.month_grid(),
                        on_day_click,
                        on_month_change,
                    }
                }
            }
        }
    }
}

#[component]
fn ScheduleSection(title: String, appointments: Vec<ScheduledAppointment>) -> Element {
    rsx! {
        section {
            class: "dashboard-section",
            strong { "{title}" }
            if appointments.is_empty() {
                p { class: "dashboard-empty", "No appointments in this period" }
            }
            for appointment in appointments {
                AppointmentRow { key: "{appointment.id}", appointment: appointment.clone() }
            }
        }
    }
}

#[component]
fn AppointmentRow(appointment: ScheduledAppointment, #[props(default)] highlighted: bool) -> Element {
    let class = if highlighted {
        "appointment appointment--next"
    } else {
        "appointment"
    };

    rsx! {
        div {
            class,
            span {
                class: "appointment-time",
                Icon { icon: FiClock, width: 16, height: 16 }
                "{appointment.hour_formatted}"
            }
            div {
                class: "appointment-customer",
                Avatar { url: appointment.avatar_url.clone(), name: appointment.customer.clone() }
                strong { "{appointment.customer}" }
            }
        }
    }
}

#[component]
fn Avatar(url: Option<String>, name: String) -> Element {
    match url {
        Some(url) => rsx! {
            img { class: "avatar", src: "{url}", alt: "{name}" }
        },
        None => rsx! {
            span {
                class: "avatar avatar--placeholder",
                title: "{name}",
                Icon { icon: FiUser, width: 20, height: 20 }
            }
        },
    }
}
