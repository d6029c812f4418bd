//! Pet resource operations.
//!
//! Partial-merge update semantics: only fields present in the payload
//! overwrite stored values; absent fields keep their prior value.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{consts, models, repo, rest::errors::ApiError};

/// Wire shape of a pet.
#[derive(Debug, Serialize)]
pub struct PetSchema {
    pub id: i64,
    pub name: String,
    pub species: String,
    pub notes: String,
}

impl From<models::pet::Pet> for PetSchema {
    fn from(val: models::pet::Pet) -> Self {
        PetSchema {
            id: val.id,
            name: val.name,
            species: val.species,
            notes: val.notes,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CreatePetPayload {
    pub name: Option<String>,
    pub species: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdatePetPayload {
    pub name: Option<String>,
    pub species: Option<String>,
    pub notes: Option<String>,
}

pub async fn list_pets(repo: &repo::ImplAppRepo) -> Result<Vec<PetSchema>, ApiError> {
    Ok(repo
        .get_all_pets()
        .await?
        .into_iter()
        .map(Into::into)
        .collect())
}

pub async fn create_pet(
    payload: CreatePetPayload,
    repo: &repo::ImplAppRepo,
) -> Result<PetSchema, ApiError> {
    let name = payload.name.unwrap_or_default();
    if name.trim().is_empty() {
        return Err(ApiError::Validation("name is required".into()));
    }

    let now = Utc::now();
    let pet = models::pet::Pet {
        id: 0,
        name,
        species: payload
            .species
            .unwrap_or_else(|| consts::DEFAULT_PET_SPECIES.into()),
        notes: payload.notes.unwrap_or_default(),
        created_at: now,
        updated_at: now,
    };

    Ok(repo.insert_pet(pet).await?.into())
}

pub async fn get_pet(pet_id: i64, repo: &repo::ImplAppRepo) -> Result<PetSchema, ApiError> {
    repo.get_pet_by_id(pet_id)
        .await?
        .map(Into::into)
        .ok_or(ApiError::NotFound)
}

pub async fn update_pet(
    pet_id: i64,
    payload: UpdatePetPayload,
    repo: &repo::ImplAppRepo,
) -> Result<PetSchema, ApiError> {
    let mut pet = repo
        .get_pet_by_id(pet_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    if let Some(name) = payload.name {
        if name.trim().is_empty() {
            return Err(ApiError::Validation("name cannot be empty".into()));
        }
        pet.name = name;
    }
    if let Some(species) = payload.species {
        pet.species = species;
    }
    if let Some(notes) = payload.notes {
        pet.notes = notes;
    }
    pet.updated_at = Utc::now();

    repo.update_pet(pet.clone()).await?;

    Ok(pet.into())
}

/// Removes the pet and, as a side effect, every task referencing it.
pub async fn delete_pet(pet_id: i64, repo: &repo::ImplAppRepo) -> Result<(), ApiError> {
    repo.get_pet_by_id(pet_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    repo.delete_pet_with_tasks(pet_id).await?;

    Ok(())
}
