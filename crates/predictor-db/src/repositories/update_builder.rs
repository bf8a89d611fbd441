//! Translation of a `PersonUpdate` into SET assignments.

use predictor_core::{Patch, PersonUpdate};
use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

use super::attribute_store::{LookupTable, NormalizedAttributeStore};
use super::query_parts::{AssignmentList, Column};

pub struct UpdateBuilder;

impl UpdateBuilder {
    /// Collect assignments for every provided field.
    ///
    /// Gender and nationality are resolved with get-or-create, so an update
    /// may add new lookup rows. Run it inside the transaction that applies
    /// the update.
    pub async fn build(
        conn: &mut SqliteConnection,
        update: &PersonUpdate,
    ) -> Result<AssignmentList, sqlx::Error> {
        let mut assignments = AssignmentList::new();

        if let Patch::Provided(name) = &update.name {
            assignments.push(Column::Name, name.clone());
        }
        if let Patch::Provided(surname) = &update.surname {
            assignments.push(Column::Surname, surname.clone());
        }
        match &update.patronym {
            Patch::Provided(Some(patronym)) => assignments.push(Column::Patronym, patronym.clone()),
            Patch::Provided(None) => assignments.push_null(Column::Patronym),
            Patch::Absent => {}
        }
        if let Patch::Provided(age) = update.age {
            assignments.push(Column::Age, age);
        }
        if let Patch::Provided(gender) = &update.gender {
            let id =
                NormalizedAttributeStore::resolve_or_create(&mut *conn, LookupTable::Gender, gender)
                    .await?;
            assignments.push(Column::GenderId, id);
        }
        if let Patch::Provided(nationality) = &update.nationality {
            let id = NormalizedAttributeStore::resolve_or_create(
                &mut *conn,
                LookupTable::Nationality,
                nationality,
            )
            .await?;
            assignments.push(Column::NationalityId, id);
        }

        Ok(assignments)
    }

    /// Render `UPDATE people_info SET ... WHERE id = ?`.
    pub fn statement(assignments: &AssignmentList, id: i64) -> QueryBuilder<'static, Sqlite> {
        let mut builder = QueryBuilder::new("UPDATE people_info SET ");
        assignments.push_set(&mut builder);
        builder.push(" WHERE id = ").push_bind(id);
        builder
    }
}
