//! Country service

use anyhow::{Context, Result};

use crate::db::{Country, CountryRepository, CreateCountry, UpdateCountry};

pub struct CountryService {
    repo: CountryRepository,
}

impl CountryService {
    pub fn new(repo: CountryRepository) -> Self {
        Self { repo }
    }

    pub async fn register(&self, input: CreateCountry) -> Result<()> {
        self.repo
            .create(input)
            .await
            .context("error registering the country")
    }

    pub async fn list(&self) -> Result<Vec<Country>> {
        self.repo
            .list()
            .await
            .context("error retrieving the countries")
    }

    pub async fn update(&self, input: UpdateCountry) -> Result<()> {
        self.repo
            .update(input)
            .await
            .context("error updating the country")
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        self.repo
            .delete(id)
            .await
            .context("error deleting the country")
    }
}
