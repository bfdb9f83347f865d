use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::error::AppError;
use crate::server::model::movie::{CreateMovieParam, Movie, UpdateMovieParam};

pub struct MovieRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MovieRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all movies regardless of archive state, ordered by title
    pub async fn get_all(&self) -> Result<Vec<Movie>, AppError> {
        let entities = entity::prelude::Movie::find()
            .order_by_asc(entity::movie::Column::Title)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Movie::from_entity).collect())
    }

    /// Gets all movies currently in the catalog, ordered by title
    pub async fn get_active(&self) -> Result<Vec<Movie>, AppError> {
        let entities = entity::prelude::Movie::find()
            .filter(entity::movie::Column::IsActive.eq(true))
            .order_by_asc(entity::movie::Column::Title)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Movie::from_entity).collect())
    }

    /// Gets a movie by ID
    pub async fn get_by_id(&self, movie_id: i32) -> Result<Option<Movie>, AppError> {
        let entity = entity::prelude::Movie::find_by_id(movie_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Movie::from_entity))
    }

    /// Creates a new movie
    pub async fn create(&self, param: CreateMovieParam) -> Result<Movie, AppError> {
        let entity = entity::movie::ActiveModel {
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(Some(param.description)),
            release_year: ActiveValue::Set(Some(param.release_year)),
            genre: ActiveValue::Set(Some(param.genre)),
            duration: ActiveValue::Set(Some(param.duration)),
            language: ActiveValue::Set(Some(param.language)),
            director: ActiveValue::Set(Some(param.director)),
            poster_url: ActiveValue::Set(param.poster_url),
            is_active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Movie::from_entity(entity))
    }

    /// Updates a movie, touching only the provided fields
    pub async fn update(&self, param: UpdateMovieParam) -> Result<Movie, AppError> {
        let entity = entity::prelude::Movie::find_by_id(param.movie_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Movie with id {} not found",
                param.movie_id
            )))?;

        let mut active_model: entity::movie::ActiveModel = entity.into();
        if let Some(title) = param.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(release_year) = param.release_year {
            active_model.release_year = ActiveValue::Set(Some(release_year));
        }
        if let Some(genre) = param.genre {
            active_model.genre = ActiveValue::Set(Some(genre));
        }
        if let Some(duration) = param.duration {
            active_model.duration = ActiveValue::Set(Some(duration));
        }
        if let Some(language) = param.language {
            active_model.language = ActiveValue::Set(Some(language));
        }
        if let Some(director) = param.director {
            active_model.director = ActiveValue::Set(Some(director));
        }
        if let Some(poster_url) = param.poster_url {
            active_model.poster_url = ActiveValue::Set(Some(poster_url));
        }
        if let Some(is_active) = param.is_active {
            active_model.is_active = ActiveValue::Set(is_active);
        }

        let updated = active_model.update(self.db).await?;

        Ok(Movie::from_entity(updated))
    }

    /// Sets the archive flag without touching any other field
    pub async fn set_active(&self, movie_id: i32, is_active: bool) -> Result<(), AppError> {
        entity::prelude::Movie::update_many()
            .filter(entity::movie::Column::MovieId.eq(movie_id))
            .col_expr(
                entity::movie::Column::IsActive,
                sea_orm::sea_query::Expr::value(is_active),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes a movie permanently
    pub async fn delete(&self, movie_id: i32) -> Result<(), AppError> {
        entity::prelude::Movie::delete_by_id(movie_id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Counts all movies, archived ones included
    pub async fn count(&self) -> Result<u64, AppError> {
        let count = entity::prelude::Movie::find().count(self.db).await?;

        Ok(count)
    }
}
