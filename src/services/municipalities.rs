//! Municipality service

use anyhow::{Context, Result};

use crate::db::{CreateMunicipality, Municipality, MunicipalityRepository, UpdateMunicipality};

pub struct MunicipalityService {
    repo: MunicipalityRepository,
}

impl MunicipalityService {
    pub fn new(repo: MunicipalityRepository) -> Self {
        Self { repo }
    }

    pub async fn register(&self, input: CreateMunicipality) -> Result<()> {
        self.repo
            .create(input)
            .await
            .context("error registering the municipality")
    }

    pub async fn list(&self) -> Result<Vec<Municipality>> {
        self.repo
            .list()
            .await
            .context("error retrieving the municipalities")
    }

    pub async fn update(&self, input: UpdateMunicipality) -> Result<()> {
        self.repo
            .update(input)
            .await
            .context("error updating the municipality")
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        self.repo
            .delete(id)
            .await
            .context("error deleting the municipality")
    }
}
