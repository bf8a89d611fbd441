//! Translation of a `PersonFilter` into a predicate list.

use predictor_core::PersonFilter;
use sqlx::SqliteConnection;

use super::attribute_store::{LookupTable, NormalizedAttributeStore};
use super::query_parts::{Column, PredicateList};

/// Outcome of building a filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterPlan {
    /// Run the count and page queries with these predicates.
    Predicates(PredicateList),
    /// A referenced gender or nationality does not exist; nothing can match.
    MatchesNothing,
}

pub struct FilterBuilder;

impl FilterBuilder {
    /// Build the predicate list for `filter`.
    ///
    /// Gender and nationality names are looked up without being created.
    pub async fn build(
        conn: &mut SqliteConnection,
        filter: &PersonFilter,
    ) -> Result<FilterPlan, sqlx::Error> {
        let mut predicates = PredicateList::new();

        if let Some(name) = &filter.name {
            predicates.push(Column::Name, name.clone());
        }
        if let Some(surname) = &filter.surname {
            predicates.push(Column::Surname, surname.clone());
        }
        if let Some(patronym) = &filter.patronym {
            predicates.push(Column::Patronym, patronym.clone());
        }
        if let Some(age) = filter.age {
            predicates.push(Column::Age, age);
        }

        for (table, column, value) in [
            (LookupTable::Gender, Column::GenderId, &filter.gender),
            (
                LookupTable::Nationality,
                Column::NationalityId,
                &filter.nationality,
            ),
        ] {
            let Some(value) = value else { continue };
            match NormalizedAttributeStore::resolve_existing(&mut *conn, table, value).await? {
                Some(id) => predicates.push(column, id),
                None => return Ok(FilterPlan::MatchesNothing),
            }
        }

        Ok(FilterPlan::Predicates(predicates))
    }
}
