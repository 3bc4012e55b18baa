mod task_result;
mod user;
