//! Lookup-table normalization for free-text person attributes.
//!
//! Gender and nationality are stored once in their own tables and
//! referenced by id. Write paths get-or-create; read paths only look up.

use sqlx::SqliteConnection;

/// A lookup table mapping an attribute name to a stable id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupTable {
    Gender,
    Nationality,
}

impl LookupTable {
    /// Name of the backing table.
    pub const fn table(self) -> &'static str {
        match self {
            Self::Gender => "gender",
            Self::Nationality => "nationality",
        }
    }

    // Insert, or on a name collision perform a no-op update so RETURNING
    // still yields the existing row's id.
    const fn upsert_sql(self) -> &'static str {
        match self {
            Self::Gender => {
                "INSERT INTO gender (gender_name) VALUES (?) \
                 ON CONFLICT(gender_name) DO UPDATE SET gender_name = excluded.gender_name \
                 RETURNING id"
            }
            Self::Nationality => {
                "INSERT INTO nationality (nationality_name) VALUES (?) \
                 ON CONFLICT(nationality_name) DO UPDATE SET nationality_name = excluded.nationality_name \
                 RETURNING id"
            }
        }
    }

    const fn lookup_sql(self) -> &'static str {
        match self {
            Self::Gender => "SELECT id FROM gender WHERE gender_name = ?",
            Self::Nationality => "SELECT id FROM nationality WHERE nationality_name = ?",
        }
    }
}

/// Resolves attribute names to lookup-row ids.
///
/// Stateless: every resolution is a round trip on the connection it is
/// given, so callers decide the transaction it runs in.
pub struct NormalizedAttributeStore;

impl NormalizedAttributeStore {
    /// Return the id for `name`, inserting the lookup row if it is absent.
    ///
    /// This is a single statement: two callers racing on an unseen name
    /// both receive the id of the one row the uniqueness constraint lets in.
    pub async fn resolve_or_create(
        conn: &mut SqliteConnection,
        table: LookupTable,
        name: &str,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(table.upsert_sql())
            .bind(name)
            .fetch_one(conn)
            .await
    }

    /// Return the id for `name` if it exists. Never creates a row.
    pub async fn resolve_existing(
        conn: &mut SqliteConnection,
        table: LookupTable,
        name: &str,
    ) -> Result<Option<i64>, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(table.lookup_sql())
            .bind(name)
            .fetch_optional(conn)
            .await
    }
}
