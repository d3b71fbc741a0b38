//! PostgreSQL-backed `SpaceshipRepository` implementation using Diesel ORM.
//!
//! A spaceship is stored as one `spaceships` row plus one
//! `spaceship_armaments` link per distinct armament title. Titles live in the
//! shared `armaments` catalogue, which spaceship writes only ever extend.
//! Every write runs in a single transaction; a failure at any step rolls the
//! whole operation back.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use diesel::upsert::excluded;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use tracing::{debug, warn};

use crate::domain::ports::{SpaceshipRepository, SpaceshipRepositoryError};
use crate::domain::{
    ArmamentLoadout, Spaceship, SpaceshipDraft, SpaceshipId, SpaceshipName, SpaceshipStatus,
    SpaceshipSummary,
};

use super::armament_catalog::{CatalogError, resolve_catalog_ids};
use super::diesel_error_mapping::{DieselFailure, classify_diesel_error, pool_error_message};
use super::models::{NewSpaceshipArmamentRow, SpaceshipFields, SpaceshipRow, SpaceshipSummaryRow};
use super::pool::{DbPool, PoolError};
use super::schema::{armaments, spaceship_armaments, spaceships};

/// Diesel-backed implementation of the spaceship repository port.
#[derive(Clone)]
pub struct DieselSpaceshipRepository {
    pool: DbPool,
}

impl DieselSpaceshipRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Failures raised inside a write transaction.
#[derive(Debug)]
enum WriteFailure {
    Database(DieselError),
    NotFound,
    Unresolved { title: String },
}

impl From<DieselError> for WriteFailure {
    fn from(error: DieselError) -> Self {
        Self::Database(error)
    }
}

impl From<CatalogError> for WriteFailure {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::Database(inner) => Self::Database(inner),
            CatalogError::Unresolved { title } => Self::Unresolved { title },
        }
    }
}

fn map_pool_error(operation: &str, error: PoolError) -> SpaceshipRepositoryError {
    SpaceshipRepositoryError::connection(operation, pool_error_message(error))
}

/// Unique constraint that guards spaceship names.
const NAME_CONSTRAINT: &str = "spaceships_name_key";

fn map_diesel_error(
    operation: &str,
    error: &DieselError,
    name: Option<&str>,
) -> SpaceshipRepositoryError {
    map_failure(operation, classify_diesel_error(error, operation), name)
}

fn map_failure(
    operation: &str,
    failure: DieselFailure,
    name: Option<&str>,
) -> SpaceshipRepositoryError {
    match failure {
        DieselFailure::UniqueViolation { constraint } => match (constraint.as_deref(), name) {
            (Some(NAME_CONSTRAINT), Some(name)) => SpaceshipRepositoryError::conflict(name),
            (constraint, _) => SpaceshipRepositoryError::storage(
                operation,
                format!(
                    "unexpected unique violation on {}",
                    constraint.unwrap_or("unknown constraint")
                ),
            ),
        },
        DieselFailure::Connection { message } => {
            SpaceshipRepositoryError::connection(operation, message)
        }
        DieselFailure::Query { message } => SpaceshipRepositoryError::storage(operation, message),
    }
}

fn map_write_failure(
    operation: &str,
    failure: WriteFailure,
    id: Option<SpaceshipId>,
    name: &str,
) -> SpaceshipRepositoryError {
    match failure {
        WriteFailure::Database(error) => map_diesel_error(operation, &error, Some(name)),
        WriteFailure::NotFound => {
            SpaceshipRepositoryError::not_found(id.map_or(0, SpaceshipId::get))
        }
        WriteFailure::Unresolved { title } => SpaceshipRepositoryError::consistency(
            operation,
            format!("armament {title} missing from catalogue after upsert"),
        ),
    }
}

fn to_fields(draft: &SpaceshipDraft) -> SpaceshipFields<'_> {
    SpaceshipFields {
        name: draft.name.as_str(),
        class: draft.class.as_str(),
        crew: i64::from(draft.crew),
        image: draft.image.as_str(),
        value: draft.value,
        status: draft.status.code(),
    }
}

fn decode_status(id: i64, code: i16) -> SpaceshipStatus {
    SpaceshipStatus::from_code(code).unwrap_or_else(|| {
        warn!(spaceship_id = id, code, "unknown stored status code");
        SpaceshipStatus::Undefined
    })
}

fn decode_id(operation: &str, raw: i64) -> Result<SpaceshipId, SpaceshipRepositoryError> {
    SpaceshipId::new(raw).ok_or_else(|| {
        SpaceshipRepositoryError::consistency(operation, format!("non-positive id {raw}"))
    })
}

fn decode_name(operation: &str, raw: &str) -> Result<SpaceshipName, SpaceshipRepositoryError> {
    SpaceshipName::new(raw).map_err(|_| {
        SpaceshipRepositoryError::consistency(operation, "stored spaceship name is blank")
    })
}

fn decode_count(operation: &str, field: &str, raw: i64) -> Result<u32, SpaceshipRepositoryError> {
    u32::try_from(raw).map_err(|_| {
        SpaceshipRepositoryError::consistency(operation, format!("{field} {raw} out of range"))
    })
}

fn row_to_summary(row: SpaceshipSummaryRow) -> Result<SpaceshipSummary, SpaceshipRepositoryError> {
    const OPERATION: &str = "list spaceships";
    Ok(SpaceshipSummary {
        id: decode_id(OPERATION, row.id)?,
        name: decode_name(OPERATION, &row.name)?,
        status: decode_status(row.id, row.status),
    })
}

fn row_to_spaceship(
    row: SpaceshipRow,
    links: Vec<(String, i64)>,
) -> Result<Spaceship, SpaceshipRepositoryError> {
    const OPERATION: &str = "load spaceship";
    let pairs = links
        .into_iter()
        .map(
            |(title, quantity)| -> Result<(String, u32), SpaceshipRepositoryError> {
                Ok((title, decode_count(OPERATION, "quantity", quantity)?))
            },
        )
        .collect::<Result<Vec<_>, _>>()?;
    let armament = ArmamentLoadout::try_from_pairs(pairs).map_err(|err| {
        SpaceshipRepositoryError::consistency(OPERATION, err.to_string())
    })?;

    Ok(Spaceship {
        id: decode_id(OPERATION, row.id)?,
        name: decode_name(OPERATION, &row.name)?,
        class: row.class,
        crew: decode_count(OPERATION, "crew", row.crew)?,
        image: row.image,
        value: row.value,
        status: decode_status(row.id, row.status),
        armament,
    })
}

/// Make the stored link set for `spaceship_id` equal to `loadout`.
///
/// Links whose armament is absent from the loadout are deleted, then every
/// loadout entry is written in one batch upsert on the composite key.
async fn replace_links(
    conn: &mut AsyncPgConnection,
    spaceship_id: i64,
    loadout: &ArmamentLoadout,
) -> Result<(), WriteFailure> {
    let ids = resolve_catalog_ids(conn, loadout).await?;
    let rows = loadout
        .iter()
        .map(|item| -> Result<NewSpaceshipArmamentRow, CatalogError> {
            Ok(NewSpaceshipArmamentRow {
                spaceship_id,
                armament_id: ids.get(item.title())?,
                quantity: i64::from(item.quantity()),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let kept: Vec<i64> = rows.iter().map(|row| row.armament_id).collect();

    diesel::delete(
        spaceship_armaments::table
            .filter(spaceship_armaments::spaceship_id.eq(spaceship_id))
            .filter(spaceship_armaments::armament_id.ne_all(kept)),
    )
    .execute(conn)
    .await?;

    if rows.is_empty() {
        return Ok(());
    }

    diesel::insert_into(spaceship_armaments::table)
        .values(&rows)
        .on_conflict((
            spaceship_armaments::spaceship_id,
            spaceship_armaments::armament_id,
        ))
        .do_update()
        .set(spaceship_armaments::quantity.eq(excluded(spaceship_armaments::quantity)))
        .execute(conn)
        .await?;

    Ok(())
}

#[async_trait]
impl SpaceshipRepository for DieselSpaceshipRepository {
    async fn list_summaries(&self) -> Result<Vec<SpaceshipSummary>, SpaceshipRepositoryError> {
        const OPERATION: &str = "list spaceships";
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(OPERATION, err))?;

        let rows: Vec<SpaceshipSummaryRow> = spaceships::table
            .select(SpaceshipSummaryRow::as_select())
            .order_by(spaceships::id.asc())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(OPERATION, &err, None))?;

        rows.into_iter().map(row_to_summary).collect()
    }

    async fn find_by_id(&self, id: SpaceshipId) -> Result<Spaceship, SpaceshipRepositoryError> {
        const OPERATION: &str = "load spaceship";
        let raw_id = id.get();
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(OPERATION, err))?;

        // Both SELECTs share one transaction so the loadout matches the row.
        let loaded = conn
            .transaction(|conn| {
                async move {
                    let row: Option<SpaceshipRow> = spaceships::table
                        .find(raw_id)
                        .select(SpaceshipRow::as_select())
                        .first(conn)
                        .await
                        .optional()?;
                    let Some(row) = row else {
                        return Ok(None);
                    };

                    let links: Vec<(String, i64)> = spaceship_armaments::table
                        .inner_join(armaments::table)
                        .filter(spaceship_armaments::spaceship_id.eq(raw_id))
                        .select((armaments::title, spaceship_armaments::quantity))
                        .order_by(armaments::title.asc())
                        .load(conn)
                        .await?;

                    Ok(Some((row, links)))
                }
                .scope_boxed()
            })
            .await
            .map_err(|err: DieselError| map_diesel_error(OPERATION, &err, None))?;

        let (row, links) = loaded.ok_or_else(|| SpaceshipRepositoryError::not_found(raw_id))?;
        row_to_spaceship(row, links)
    }

    async fn create(&self, draft: &SpaceshipDraft) -> Result<Spaceship, SpaceshipRepositoryError> {
        const OPERATION: &str = "create spaceship";
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(OPERATION, err))?;
        let fields = to_fields(draft);

        let raw_id = conn
            .transaction(|conn| {
                async move {
                    let raw_id: i64 = diesel::insert_into(spaceships::table)
                        .values(&fields)
                        .returning(spaceships::id)
                        .get_result(conn)
                        .await?;
                    replace_links(conn, raw_id, &draft.armament).await?;
                    Ok(raw_id)
                }
                .scope_boxed()
            })
            .await
            .map_err(|failure: WriteFailure| {
                map_write_failure(OPERATION, failure, None, draft.name.as_str())
            })?;

        let id = decode_id(OPERATION, raw_id)?;
        debug!(spaceship_id = raw_id, "spaceship row and links committed");
        Ok(Spaceship::from_draft(id, draft.clone()))
    }

    async fn update(
        &self,
        id: SpaceshipId,
        draft: &SpaceshipDraft,
    ) -> Result<(), SpaceshipRepositoryError> {
        const OPERATION: &str = "update spaceship";
        let raw_id = id.get();
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(OPERATION, err))?;
        let fields = to_fields(draft);

        conn.transaction(|conn| {
            async move {
                // Updating the row first takes its lock, serialising
                // concurrent replacements of the same ship.
                let updated = diesel::update(spaceships::table.find(raw_id))
                    .set(&fields)
                    .execute(conn)
                    .await?;
                if updated == 0 {
                    return Err(WriteFailure::NotFound);
                }
                replace_links(conn, raw_id, &draft.armament).await
            }
            .scope_boxed()
        })
        .await
        .map_err(|failure: WriteFailure| {
            map_write_failure(OPERATION, failure, Some(id), draft.name.as_str())
        })
    }

    async fn delete(&self, id: SpaceshipId) -> Result<(), SpaceshipRepositoryError> {
        const OPERATION: &str = "delete spaceship";
        let raw_id = id.get();
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(OPERATION, err))?;

        conn.transaction(|conn| {
            async move {
                diesel::delete(
                    spaceship_armaments::table
                        .filter(spaceship_armaments::spaceship_id.eq(raw_id)),
                )
                .execute(conn)
                .await?;
                let deleted = diesel::delete(spaceships::table.find(raw_id))
                    .execute(conn)
                    .await?;
                if deleted == 0 {
                    return Err(WriteFailure::NotFound);
                }
                Ok(())
            }
            .scope_boxed()
        })
        .await
        .map_err(|failure: WriteFailure| map_write_failure(OPERATION, failure, Some(id), ""))
    }
}
