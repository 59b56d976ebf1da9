mod navbar;
pub use navbar::NavBar;

mod home;
pub use home::Home;

mod details;
pub use details::Details;

mod startup_form;
pub use startup_form::{Edit, Post};

mod login;
pub use login::Login;

mod register;
pub use register::Register;
