mod guards;
pub use guards::{GuestOnly, PrivateRoute};

mod pages;
pub use pages::{Dashboard, ForgotPassword, NotFound, ResetPassword, SignIn, SignUp};
