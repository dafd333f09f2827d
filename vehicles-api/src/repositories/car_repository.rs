//! PostgreSQL-backed car store
//!
//! The `cars` table carries no columns for price or address: those fields
//! are transient and always come back as `None` from reads, to be
//! recomputed by the orchestrator.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::car::{Car, Condition, Details, Location, Manufacturer};
use crate::utils::errors::{not_found_error, AppResult};

/// Storage interface consumed by the enrichment orchestrator.
#[async_trait]
pub trait CarStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Car>>;
    async fn find_all(&self) -> AppResult<Vec<Car>>;
    /// Insert when `car.id` is None (assigning a fresh identifier),
    /// otherwise update the existing row.
    async fn save(&self, car: Car) -> AppResult<Car>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS cars (
    id UUID PRIMARY KEY,
    condition TEXT NOT NULL,
    manufacturer_code INTEGER NOT NULL,
    manufacturer_name TEXT NOT NULL,
    model TEXT NOT NULL,
    mileage INTEGER NOT NULL,
    external_color TEXT NOT NULL,
    body TEXT NOT NULL,
    engine TEXT NOT NULL,
    fuel_type TEXT NOT NULL,
    model_year INTEGER NOT NULL,
    production_year INTEGER NOT NULL,
    number_of_doors INTEGER NOT NULL,
    lat DOUBLE PRECISION NOT NULL,
    lon DOUBLE PRECISION NOT NULL,
    created_at TIMESTAMPTZ NOT NULL,
    modified_at TIMESTAMPTZ NOT NULL
)
"#;

/// Flat row shape of the `cars` table.
#[derive(Debug, sqlx::FromRow)]
struct CarRow {
    id: Uuid,
    condition: String,
    manufacturer_code: i32,
    manufacturer_name: String,
    model: String,
    mileage: i32,
    external_color: String,
    body: String,
    engine: String,
    fuel_type: String,
    model_year: i32,
    production_year: i32,
    number_of_doors: i32,
    lat: f64,
    lon: f64,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
}

impl From<CarRow> for Car {
    fn from(row: CarRow) -> Self {
        Car {
            id: Some(row.id),
            condition: row.condition.parse().unwrap_or(Condition::Used),
            details: Details {
                manufacturer: Manufacturer {
                    code: row.manufacturer_code,
                    name: row.manufacturer_name,
                },
                model: row.model,
                mileage: row.mileage,
                external_color: row.external_color,
                body: row.body,
                engine: row.engine,
                fuel_type: row.fuel_type,
                model_year: row.model_year,
                production_year: row.production_year,
                number_of_doors: row.number_of_doors,
            },
            location: Location::new(row.lat, row.lon),
            price: None,
            created_at: row.created_at,
            modified_at: row.modified_at,
        }
    }
}

pub struct PostgresCarStore {
    pool: PgPool,
}

impl PostgresCarStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `cars` table when it does not exist yet.
    pub async fn ensure_schema(&self) -> AppResult<()> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl CarStore for PostgresCarStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Car>> {
        let row = sqlx::query_as::<_, CarRow>("SELECT * FROM cars WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Car::from))
    }

    async fn find_all(&self) -> AppResult<Vec<Car>> {
        let rows = sqlx::query_as::<_, CarRow>("SELECT * FROM cars ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Car::from).collect())
    }

    async fn save(&self, car: Car) -> AppResult<Car> {
        match car.id {
            Some(id) => {
                let row = sqlx::query_as::<_, CarRow>(
                    r#"
                    UPDATE cars
                    SET condition = $2, manufacturer_code = $3, manufacturer_name = $4,
                        model = $5, mileage = $6, external_color = $7, body = $8,
                        engine = $9, fuel_type = $10, model_year = $11,
                        production_year = $12, number_of_doors = $13,
                        lat = $14, lon = $15, modified_at = $16
                    WHERE id = $1
                    RETURNING *
                    "#,
                )
                .bind(id)
                .bind(car.condition.to_string())
                .bind(car.details.manufacturer.code)
                .bind(&car.details.manufacturer.name)
                .bind(&car.details.model)
                .bind(car.details.mileage)
                .bind(&car.details.external_color)
                .bind(&car.details.body)
                .bind(&car.details.engine)
                .bind(&car.details.fuel_type)
                .bind(car.details.model_year)
                .bind(car.details.production_year)
                .bind(car.details.number_of_doors)
                .bind(car.location.lat)
                .bind(car.location.lon)
                .bind(car.modified_at)
                .fetch_optional(&self.pool)
                .await?
                .ok_or_else(|| not_found_error("Car", &id.to_string()))?;

                Ok(Car::from(row))
            }
            None => {
                let row = sqlx::query_as::<_, CarRow>(
                    r#"
                    INSERT INTO cars (id, condition, manufacturer_code, manufacturer_name,
                        model, mileage, external_color, body, engine, fuel_type,
                        model_year, production_year, number_of_doors, lat, lon,
                        created_at, modified_at)
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                        $14, $15, $16, $17)
                    RETURNING *
                    "#,
                )
                .bind(Uuid::new_v4())
                .bind(car.condition.to_string())
                .bind(car.details.manufacturer.code)
                .bind(&car.details.manufacturer.name)
                .bind(&car.details.model)
                .bind(car.details.mileage)
                .bind(&car.details.external_color)
                .bind(&car.details.body)
                .bind(&car.details.engine)
                .bind(&car.details.fuel_type)
                .bind(car.details.model_year)
                .bind(car.details.production_year)
                .bind(car.details.number_of_doors)
                .bind(car.location.lat)
                .bind(car.location.lon)
                .bind(car.created_at)
                .bind(car.modified_at)
                .fetch_one(&self.pool)
                .await?;

                Ok(Car::from(row))
            }
        }
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Car", &id.to_string()));
        }
        Ok(())
    }
}
