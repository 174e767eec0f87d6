//! Department service

use anyhow::{Context, Result};

use crate::db::{CreateDepartment, Department, DepartmentRepository, UpdateDepartment};

pub struct DepartmentService {
    repo: DepartmentRepository,
}

impl DepartmentService {
    pub fn new(repo: DepartmentRepository) -> Self {
        Self { repo }
    }

    pub async fn register(&self, input: CreateDepartment) -> Result<()> {
        self.repo
            .create(input)
            .await
            .context("error registering the department")
    }

    pub async fn list(&self) -> Result<Vec<Department>> {
        self.repo
            .list()
            .await
            .context("error retrieving the departments")
    }

    pub async fn update(&self, input: UpdateDepartment) -> Result<()> {
        self.repo
            .update(input)
            .await
            .context("error updating the department")
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        self.repo
            .delete(id)
            .await
            .context("error deleting the department")
    }
}
