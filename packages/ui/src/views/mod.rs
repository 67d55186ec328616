mod sign_in;
pub use sign_in::SignInView;

mod sign_up;
pub use sign_up::SignUpView;

mod forgot_password;
pub use forgot_password::ForgotPasswordView;

mod reset_password;
pub use reset_password::ResetPasswordView;

mod dashboard;
pub use dashboard::DashboardView;

mod not_found;
pub use not_found::NotFoundView;
