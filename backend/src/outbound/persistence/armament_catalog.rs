//! Armament catalogue resolution.
//!
//! Turns the titles of a loadout into catalogue identities in two steps: an
//! idempotent insert-or-ignore keyed on `title`, then a single lookup of every
//! requested title. Runs on the caller's connection so it joins whatever
//! transaction is open there.

use std::collections::HashMap;

use diesel::prelude::*;
use diesel::result::Error as DieselError;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::domain::ArmamentLoadout;

use super::models::{ArmamentRow, NewArmamentRow};
use super::schema::armaments;

/// Failures raised while resolving catalogue identities.
#[derive(Debug)]
pub(super) enum CatalogError {
    Database(DieselError),
    /// A title was still missing after the upsert.
    Unresolved { title: String },
}

impl From<DieselError> for CatalogError {
    fn from(error: DieselError) -> Self {
        Self::Database(error)
    }
}

/// Catalogue identities keyed by title.
#[derive(Debug, Default)]
pub(super) struct CatalogIds {
    by_title: HashMap<String, i64>,
}

impl CatalogIds {
    pub(super) fn get(&self, title: &str) -> Result<i64, CatalogError> {
        self.by_title
            .get(title)
            .copied()
            .ok_or_else(|| CatalogError::Unresolved {
                title: title.to_owned(),
            })
    }
}

/// Ensure every title in `loadout` has a catalogue entry and return the ids.
pub(super) async fn resolve_catalog_ids(
    conn: &mut AsyncPgConnection,
    loadout: &ArmamentLoadout,
) -> Result<CatalogIds, CatalogError> {
    if loadout.is_empty() {
        return Ok(CatalogIds::default());
    }

    // Sorted inserts make concurrent writers take unique-index locks in the
    // same order.
    let mut titles = loadout.titles();
    titles.sort_unstable();

    let new_rows: Vec<NewArmamentRow<'_>> = titles
        .iter()
        .copied()
        .map(|title| NewArmamentRow { title })
        .collect();
    diesel::insert_into(armaments::table)
        .values(&new_rows)
        .on_conflict(armaments::title)
        .do_nothing()
        .execute(conn)
        .await?;

    let rows: Vec<ArmamentRow> = armaments::table
        .filter(armaments::title.eq_any(titles.clone()))
        .select(ArmamentRow::as_select())
        .load(conn)
        .await?;

    let ids = CatalogIds {
        by_title: rows.into_iter().map(|row| (row.title, row.id)).collect(),
    };
    for title in titles {
        ids.get(title)?;
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn missing_titles_are_reported_by_name() {
        let ids = CatalogIds {
            by_title: HashMap::from([("Turbolaser".to_owned(), 3)]),
        };

        assert!(matches!(ids.get("Turbolaser"), Ok(3)));
        assert!(matches!(
            ids.get("Proton Torpedo"),
            Err(CatalogError::Unresolved { title }) if title == "Proton Torpedo"
        ));
    }
}
