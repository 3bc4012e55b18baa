pub mod form_control;
pub mod form_group;
pub mod user_field;
pub mod user_forms;
pub mod validator;
