//! In-memory [`Backend`] for driving page flows in tests.

use std::cell::{Cell, RefCell};

use api::*;
use chrono::{TimeZone, Utc};

/// A request the mock received.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    CreateSession(SessionRequest),
    CreateUser(NewUser),
    ForgotPassword(ForgotPasswordRequest),
    ResetPassword(ResetPasswordRequest),
    MonthAvailability(String, MonthQuery),
    Appointments(DayQuery),
}

pub fn user() -> UserInfo {
    UserInfo {
        id: "provider-1".to_string(),
        name: "John Doe".to_string(),
        email: "johndoe@example.com".to_string(),
        avatar_url: None,
    }
}

pub fn appointment(id: &str, hour: u32) -> Appointment {
    Appointment {
        id: id.to_string(),
        date: Utc.with_ymd_and_hms(2026, 10, 16, hour, 0, 0).unwrap(),
        user: AppointmentUser {
            name: format!("Customer {id}"),
            avatar_url: None,
        },
    }
}

/// Records every call; answers with canned data or a fixed status error.
#[derive(Default)]
pub struct MockBackend {
    calls: RefCell<Vec<Call>>,
    fail_with: Cell<Option<u16>>,
    availability: Vec<MonthAvailabilityItem>,
    appointments: Vec<Appointment>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request fails with `status`.
    pub fn failing(status: u16) -> Self {
        let backend = Self::default();
        backend.fail_with.set(Some(status));
        backend
    }

    pub fn with_availability(mut self, availability: Vec<MonthAvailabilityItem>) -> Self {
        self.availability = availability;
        self
    }

    pub fn with_appointments(mut self, appointments: Vec<Appointment>) -> Self {
        self.appointments = appointments;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        match self.fail_with.get() {
            Some(status) => Err(ApiError::Status {
                status,
                message: None,
            }),
            None => Ok(()),
        }
    }
}

impl Backend for MockBackend {
    async fn create_session(&self, credentials: &SessionRequest) -> Result<AuthData, ApiError> {
        self.record(Call::CreateSession(credentials.clone()))?;
        Ok(AuthData {
            token: "token-jwt".to_string(),
            user: user(),
        })
    }

    async fn create_user(&self, new_user: &NewUser) -> Result<(), ApiError> {
        self.record(Call::CreateUser(new_user.clone()))
    }

    async fn forgot_password(&self, request: &ForgotPasswordRequest) -> Result<(), ApiError> {
        self.record(Call::ForgotPassword(request.clone()))
    }

    async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<(), ApiError> {
        self.record(Call::ResetPassword(request.clone()))
    }

    async fn month_availability(
        &self,
        provider_id: &str,
        query: MonthQuery,
    ) -> Result<Vec<MonthAvailabilityItem>, ApiError> {
        self.record(Call::MonthAvailability(provider_id.to_string(), query))?;
        Ok(self.availability.clone())
    }

    async fn appointments(&self, query: DayQuery) -> Result<Vec<Appointment>, ApiError> {
        self.record(Call::Appointments(query))?;
        Ok(self.appointments.clone())
    }
}
