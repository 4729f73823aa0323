mod admin;
pub use admin::Admin;

mod login;
pub use login::Login;

mod register;
pub use register::Register;
