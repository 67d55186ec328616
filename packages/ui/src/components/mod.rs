//! Reusable building blocks shared by every page.

mod auth_layout;
pub use auth_layout::{AuthLayout, BackgroundSide};

mod button;
pub use button::Button;

mod calendar;
pub use calendar::Calendar;

mod input;
pub use input::Input;

mod toast_container;
pub use toast_container::ToastContainer;
