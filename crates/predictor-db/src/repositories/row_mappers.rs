//! Row mapping helpers for `SQLite` queries.

use predictor_core::{Person, RepositoryError};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Joined SELECT that materializes gender and nationality names.
///
/// Callers append predicates, ordering and bounds.
pub const PERSON_SELECT: &str = "SELECT people_info.id AS id, people_info.name AS name, \
     people_info.surname AS surname, people_info.patronym AS patronym, people_info.age AS age, \
     gender.gender_name AS gender_name, nationality.nationality_name AS nationality_name \
     FROM people_info \
     JOIN gender ON gender.id = people_info.gender_id \
     JOIN nationality ON nationality.id = people_info.nationality_id";

/// Count over the same table the page query reads.
pub const PERSON_COUNT: &str = "SELECT COUNT(*) FROM people_info";

/// Wrap a sqlx error with the operation that produced it.
pub fn storage_error(op: &'static str) -> impl FnOnce(sqlx::Error) -> RepositoryError {
    move |e| RepositoryError::Storage {
        op,
        message: e.to_string(),
    }
}

const DECODE: &str = "decode person row";

/// Parse a row produced by [`PERSON_SELECT`] into a Person.
pub fn row_to_person(row: &SqliteRow) -> Result<Person, RepositoryError> {
    let age: i64 = row.try_get("age").map_err(storage_error(DECODE))?;
    let age = i32::try_from(age).map_err(|e| RepositoryError::Storage {
        op: DECODE,
        message: format!("age {age} out of range: {e}"),
    })?;

    Ok(Person {
        id: row.try_get("id").map_err(storage_error(DECODE))?,
        name: row.try_get("name").map_err(storage_error(DECODE))?,
        surname: row.try_get("surname").map_err(storage_error(DECODE))?,
        patronym: row.try_get("patronym").map_err(storage_error(DECODE))?,
        age,
        gender: row.try_get("gender_name").map_err(storage_error(DECODE))?,
        nationality: row
            .try_get("nationality_name")
            .map_err(storage_error(DECODE))?,
    })
}
