pub mod date_of_birth;
pub mod register_user;
pub mod task_result;
pub mod user;
