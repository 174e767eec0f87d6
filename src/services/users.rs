//! User service

use anyhow::{Context, Result};

use crate::db::{CreateUser, UpdateUser, User, UserRepository};

pub struct UserService {
    repo: UserRepository,
}

impl UserService {
    pub fn new(repo: UserRepository) -> Self {
        Self { repo }
    }

    pub async fn register(&self, input: CreateUser) -> Result<()> {
        self.repo
            .create(input)
            .await
            .context("error registering the user")
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        self.repo.list().await.context("error retrieving the users")
    }

    pub async fn update(&self, input: UpdateUser) -> Result<()> {
        self.repo
            .update(input)
            .await
            .context("error updating the user")
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        self.repo
            .delete(id)
            .await
            .context("error deleting the user")
    }
}
