use sqlx::{Postgres, Transaction, error::ErrorKind};
use std::sync::Arc;
use tokio::sync::Mutex;

use hockeyhero_app::repository::Repository;
use hockeyhero_types::{
    errors::{ApplicationError, DbError},
    models::HeroKeys,
};

use crate::models as db_models;

#[derive(Clone)]
pub struct PostgresHeroKeysRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresHeroKeysRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

// `hero_details_id` is unique and references hero_details.
fn link_error(e: sqlx::Error) -> ApplicationError {
    let violation = match &e {
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::UniqueViolation | ErrorKind::ForeignKeyViolation => {
                Some(db_err.message().to_string())
            }
            _ => None,
        },
        _ => None,
    };

    match violation {
        Some(message) => ApplicationError::Db(DbError::ConstraintViolation(message)),
        None => ApplicationError::Db(DbError::Database(e)),
    }
}

#[async_trait::async_trait]
impl<'a> Repository<HeroKeys> for PostgresHeroKeysRepository<'a> {
    async fn save(&self, keys: &HeroKeys) -> Result<HeroKeys, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let query = match keys.id {
            None => sqlx::query_as::<Postgres, db_models::HeroKeys>(
                r#"
                INSERT INTO hero_keys (hide_me, latitude, longitude, age, my_position,
                                       skill, hero_details_id)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING id, hide_me, latitude, longitude, age, my_position,
                          skill, hero_details_id
                "#,
            ),
            // id is bound first, so it is $1 and the attributes shift by one
            Some(id) => sqlx::query_as::<Postgres, db_models::HeroKeys>(
                r#"
                INSERT INTO hero_keys (id, hide_me, latitude, longitude, age, my_position,
                                       skill, hero_details_id)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                ON CONFLICT (id) DO UPDATE
                SET
                  hide_me = $2,
                  latitude = $3,
                  longitude = $4,
                  age = $5,
                  my_position = $6,
                  skill = $7,
                  hero_details_id = $8
                RETURNING id, hide_me, latitude, longitude, age, my_position,
                          skill, hero_details_id
                "#,
            )
            .bind(id),
        };

        let row = query
            .bind(keys.hide_me)
            .bind(keys.latitude)
            .bind(keys.longitude)
            .bind(keys.age)
            .bind(keys.my_position)
            .bind(keys.skill)
            .bind(keys.hero_details.map(|details| details.id))
            .fetch_one(&mut *tx_guard.as_mut())
            .await
            .map_err(link_error)?;

        Ok(row.into())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        sqlx::query_scalar::<Postgres, bool>(
            "SELECT EXISTS(SELECT 1 FROM hero_keys WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<HeroKeys>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let row = sqlx::query_as::<Postgres, db_models::HeroKeys>(
            r#"
            SELECT id, hide_me, latitude, longitude, age, my_position, skill, hero_details_id
            FROM hero_keys
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<HeroKeys>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let rows = sqlx::query_as::<Postgres, db_models::HeroKeys>(
            r#"
            SELECT id, hide_me, latitude, longitude, age, my_position, skill, hero_details_id
            FROM hero_keys
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        sqlx::query("DELETE FROM hero_keys WHERE id = $1")
            .bind(id)
            .execute(&mut *tx_guard.as_mut())
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;
        Ok(())
    }
}
