use sqlx::{PgConnection, Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;

use hockeyhero_app::repository::Repository;
use hockeyhero_types::{
    errors::{ApplicationError, DbError},
    models::HeroDetails,
};

use crate::models as db_models;

// `hero_keys_id` comes from the owning side of the one-to-one.
const SELECT_HERO_DETAILS: &str = r#"
    SELECT d.id, d.phone, d.date_of_birth, d.street_address, d.city,
           d.state_province, d.postal_code, k.id AS hero_keys_id
    FROM hero_details d
    LEFT JOIN hero_keys k ON k.hero_details_id = d.id
"#;

#[derive(Clone)]
pub struct PostgresHeroDetailsRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresHeroDetailsRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

async fn select_by_id(
    conn: &mut PgConnection,
    id: i64,
) -> Result<Option<HeroDetails>, ApplicationError> {
    let row = sqlx::query_as::<Postgres, db_models::HeroDetails>(&format!(
        "{SELECT_HERO_DETAILS} WHERE d.id = $1"
    ))
    .bind(id)
    .fetch_optional(conn)
    .await
    .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

    Ok(row.map(Into::into))
}

#[async_trait::async_trait]
impl<'a> Repository<HeroDetails> for PostgresHeroDetailsRepository<'a> {
    async fn save(&self, details: &HeroDetails) -> Result<HeroDetails, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let query = match details.id {
            None => sqlx::query_scalar::<Postgres, i64>(
                r#"
                INSERT INTO hero_details (phone, date_of_birth, street_address, city,
                                          state_province, postal_code)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id
                "#,
            ),
            // id is bound first, so it is $1 and the attributes shift by one
            Some(id) => sqlx::query_scalar::<Postgres, i64>(
                r#"
                INSERT INTO hero_details (id, phone, date_of_birth, street_address, city,
                                          state_province, postal_code)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                ON CONFLICT (id) DO UPDATE
                SET
                  phone = $2,
                  date_of_birth = $3,
                  street_address = $4,
                  city = $5,
                  state_province = $6,
                  postal_code = $7
                RETURNING id
                "#,
            )
            .bind(id),
        };

        let id = query
            .bind(&details.phone)
            .bind(details.date_of_birth)
            .bind(&details.street_address)
            .bind(&details.city)
            .bind(&details.state_province)
            .bind(&details.postal_code)
            .fetch_one(&mut *tx_guard.as_mut())
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        select_by_id(tx_guard.as_mut(), id).await?.ok_or_else(|| {
            DbError::RecordNotFound {
                entity_name: "heroDetails",
                id,
            }
            .into()
        })
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        sqlx::query_scalar::<Postgres, bool>(
            "SELECT EXISTS(SELECT 1 FROM hero_details WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<HeroDetails>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        select_by_id(tx_guard.as_mut(), id).await
    }

    async fn find_all(&self) -> Result<Vec<HeroDetails>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let rows = sqlx::query_as::<Postgres, db_models::HeroDetails>(&format!(
            "{SELECT_HERO_DETAILS} ORDER BY d.id"
        ))
        .fetch_all(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        sqlx::query("DELETE FROM hero_details WHERE id = $1")
            .bind(id)
            .execute(&mut *tx_guard.as_mut())
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;
        Ok(())
    }
}
