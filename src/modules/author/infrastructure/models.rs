use diesel::prelude::*;

use crate::modules::author::domain::entities::author::Author;
use crate::schema::authors;

// ============= AUTHOR MODELS =============

/// DB row model (read)
#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = authors)]
pub struct AuthorModel {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub biography: Option<String>,
}

/// Insert payload (write) — the identity is database-generated
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = authors)]
pub struct NewAuthor {
    pub first_name: String,
    pub last_name: String,
    pub biography: Option<String>,
}

/// Update payload (write) — full-row update keyed by identity
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = authors)]
#[diesel(treat_none_as_null = true)]
pub struct AuthorChangeset {
    pub first_name: String,
    pub last_name: String,
    pub biography: Option<String>,
}

impl From<AuthorModel> for Author {
    fn from(model: AuthorModel) -> Self {
        Author {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            biography: model.biography,
        }
    }
}

impl NewAuthor {
    pub fn from_entity(author: &Author) -> Self {
        Self {
            first_name: author.first_name.clone(),
            last_name: author.last_name.clone(),
            biography: author.biography.clone(),
        }
    }
}

impl AuthorChangeset {
    pub fn from_entity(author: &Author) -> Self {
        Self {
            first_name: author.first_name.clone(),
            last_name: author.last_name.clone(),
            biography: author.biography.clone(),
        }
    }
}
