pub mod rules;
mod validator;

pub use validator::Validator;
