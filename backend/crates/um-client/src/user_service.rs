use crate::Client;

use async_trait::async_trait;
use um_core::{RegisterUser, Result as CoreErrorResult, TaskResult, User, UserService};

#[async_trait]
impl UserService for Client {
    async fn list(&self) -> CoreErrorResult<TaskResult<Vec<User>>> {
        Ok(self.list_users().await?)
    }

    async fn get_by_email(&self, email: &str) -> CoreErrorResult<TaskResult<User>> {
        Ok(self.get_user_by_email(email).await?)
    }

    async fn create(&self, payload: RegisterUser) -> CoreErrorResult<TaskResult<RegisterUser>> {
        Ok(self.create_user(&payload).await?)
    }

    async fn update(&self, id: &str, user: User) -> CoreErrorResult<TaskResult<User>> {
        Ok(self.update_user(id, &user).await?)
    }

    async fn remove(&self, id: &str) -> CoreErrorResult<TaskResult<bool>> {
        Ok(self.delete_user(id).await?)
    }
}
