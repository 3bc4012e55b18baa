pub mod state;
pub mod users_handler;
pub mod view_state;
