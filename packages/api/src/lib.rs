//! # API crate: REST client for the GoBarber backend
//!
//! Every page of the client talks to the backend through this crate. It owns the
//! wire models, the HTTP client, and the error type the pages report from.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`], a `reqwest` client bound to a base URL with an optional bearer token |
//! | [`error`] | [`ApiError`], the single request-error type surfaced to pages |
//! | [`models`] | Users, sessions, password payloads, month availability and appointments |
//!
//! ## Endpoints
//!
//! | Method | Path | [`Backend`] method |
//! |--------|------|--------------------|
//! | `POST` | `/sessions` | [`create_session`](Backend::create_session) |
//! | `POST` | `/users` | [`create_user`](Backend::create_user) |
//! | `POST` | `/password/forgot` | [`forgot_password`](Backend::forgot_password) |
//! | `POST` | `/password/reset` | [`reset_password`](Backend::reset_password) |
//! | `GET` | `/providers/{id}/month-availability?year&month` | [`month_availability`](Backend::month_availability) |
//! | `GET` | `/appointments/me?year&month&day` | [`appointments`](Backend::appointments) |
//!
//! Pages are written against the [`Backend`] trait rather than [`ApiClient`]
//! directly, so their flows can be driven by an in-memory backend in tests.

use std::future::Future;

pub mod client;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{
    Appointment, AppointmentUser, AuthData, DayQuery, ForgotPasswordRequest,
    MonthAvailabilityItem, MonthQuery, NewUser, ResetPasswordRequest, SessionRequest, UserInfo,
};

/// The set of backend calls the client makes.
pub trait Backend {
    /// Exchange credentials for a session token and the signed-in user.
    fn create_session(
        &self,
        credentials: &SessionRequest,
    ) -> impl Future<Output = Result<AuthData, ApiError>>;

    /// Register a new account.
    fn create_user(&self, user: &NewUser) -> impl Future<Output = Result<(), ApiError>>;

    /// Ask the backend to email a password recovery link.
    fn forgot_password(
        &self,
        request: &ForgotPasswordRequest,
    ) -> impl Future<Output = Result<(), ApiError>>;

    /// Set a new password using the token from the recovery link.
    fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> impl Future<Output = Result<(), ApiError>>;

    /// Per-day availability of a provider for one month.
    fn month_availability(
        &self,
        provider_id: &str,
        query: MonthQuery,
    ) -> impl Future<Output = Result<Vec<MonthAvailabilityItem>, ApiError>>;

    /// Appointments booked with the signed-in provider on one day.
    fn appointments(
        &self,
        query: DayQuery,
    ) -> impl Future<Output = Result<Vec<Appointment>, ApiError>>;
}
