//! User service

use crate::{db::UserStore, models::User, Result};
use std::sync::Arc;

pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.store.list_users().await
    }

    /// Create `user` if missing. Used at startup for the default owner.
    pub async fn ensure_user(&self, user: &User) -> Result<()> {
        self.store.ensure_user(user).await
    }
}
