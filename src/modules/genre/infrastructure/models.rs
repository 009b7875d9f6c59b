use diesel::prelude::*;

use crate::modules::genre::domain::entities::genre::Genre;
use crate::schema::genres;

// ============= GENRE MODELS =============

/// DB row model (read)
#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = genres)]
pub struct GenreModel {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

/// Insert payload (write) — the identity is database-generated
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = genres)]
pub struct NewGenre {
    pub name: String,
    pub description: Option<String>,
}

/// Update payload (write) — full-row update keyed by identity
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = genres)]
#[diesel(treat_none_as_null = true)]
pub struct GenreChangeset {
    pub name: String,
    pub description: Option<String>,
}

impl From<GenreModel> for Genre {
    fn from(model: GenreModel) -> Self {
        Genre {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}

impl NewGenre {
    pub fn from_entity(genre: &Genre) -> Self {
        Self {
            name: genre.name.clone(),
            description: genre.description.clone(),
        }
    }
}

impl GenreChangeset {
    pub fn from_entity(genre: &Genre) -> Self {
        Self {
            name: genre.name.clone(),
            description: genre.description.clone(),
        }
    }
}
