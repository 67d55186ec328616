//! Wire models.

mod schedule;
mod user;

pub use schedule::{Appointment, AppointmentUser, DayQuery, MonthAvailabilityItem, MonthQuery};
pub use user::{
    AuthData, ForgotPasswordRequest, NewUser, ResetPasswordRequest, SessionRequest, UserInfo,
};
