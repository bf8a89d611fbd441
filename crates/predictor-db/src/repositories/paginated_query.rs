//! Count-plus-page listing over a shared predicate list.

use predictor_core::{Page, PageRequest, Person, RepositoryError};
use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

use super::query_parts::PredicateList;
use super::row_mappers::{PERSON_COUNT, PERSON_SELECT, row_to_person, storage_error};

pub struct PaginatedQueryExecutor;

impl PaginatedQueryExecutor {
    /// Count every row matching `predicates`, then fetch the requested window.
    ///
    /// Rows are ordered by ascending id so consecutive windows partition the
    /// matches. Run both statements on one transaction to read a single
    /// snapshot.
    pub async fn fetch_page(
        conn: &mut SqliteConnection,
        predicates: &PredicateList,
        page: PageRequest,
    ) -> Result<Page<Person>, RepositoryError> {
        let mut count = QueryBuilder::<Sqlite>::new(PERSON_COUNT);
        predicates.push_where(&mut count);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&mut *conn)
            .await
            .map_err(storage_error("count people"))?;
        let total = u64::try_from(total).unwrap_or_default();

        if total == 0 || page.offset() >= total {
            return Ok(Page::new(Vec::new(), total));
        }

        let offset = i64::try_from(page.offset()).map_err(|e| RepositoryError::Storage {
            op: "list people",
            message: e.to_string(),
        })?;

        let mut select = QueryBuilder::<Sqlite>::new(PERSON_SELECT);
        predicates.push_where(&mut select);
        select
            .push(" ORDER BY people_info.id ASC LIMIT ")
            .push_bind(i64::from(page.limit()))
            .push(" OFFSET ")
            .push_bind(offset);

        let rows = select
            .build()
            .fetch_all(&mut *conn)
            .await
            .map_err(storage_error("list people"))?;

        let items = rows
            .iter()
            .map(row_to_person)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(items, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::query_parts::Column;
    use crate::setup::setup_test_database;

    async fn seed(conn: &mut SqliteConnection, names: &[&str]) {
        sqlx::query("INSERT INTO gender (gender_name) VALUES ('female')")
            .execute(&mut *conn)
            .await
            .unwrap();
        sqlx::query("INSERT INTO nationality (nationality_name) VALUES ('KZ')")
            .execute(&mut *conn)
            .await
            .unwrap();
        for name in names {
            sqlx::query(
                "INSERT INTO people_info (name, surname, age, gender_id, nationality_id) \
                 VALUES (?, 'Abenova', 25, 1, 1)",
            )
            .bind(name)
            .execute(&mut *conn)
            .await
            .unwrap();
        }
    }

    #[tokio::test]
    async fn test_empty_table_yields_empty_page() {
        let pool = setup_test_database().await.unwrap();
        let mut conn = pool.acquire().await.unwrap();

        let page = PaginatedQueryExecutor::fetch_page(
            &mut conn,
            &PredicateList::new(),
            PageRequest::default(),
        )
        .await
        .unwrap();

        assert_eq!(page, Page::empty());
    }

    #[tokio::test]
    async fn test_total_ignores_window() {
        let pool = setup_test_database().await.unwrap();
        let mut conn = pool.acquire().await.unwrap();
        seed(&mut conn, &["Aigerim", "Dana", "Aigerim", "Madina"]).await;

        let mut predicates = PredicateList::new();
        predicates.push(Column::Name, "Aigerim".to_string());

        let page = PaginatedQueryExecutor::fetch_page(
            &mut conn,
            &predicates,
            PageRequest::new(1, 1).unwrap(),
        )
        .await
        .unwrap();

        assert_eq!(page.total, 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, 3);
        assert_eq!(page.items[0].gender, "female");
        assert_eq!(page.items[0].nationality, "KZ");
        assert_eq!(page.items[0].patronym, None);
    }

    #[tokio::test]
    async fn test_offset_past_end_keeps_total() {
        let pool = setup_test_database().await.unwrap();
        let mut conn = pool.acquire().await.unwrap();
        seed(&mut conn, &["Aigerim", "Dana"]).await;

        let page = PaginatedQueryExecutor::fetch_page(
            &mut conn,
            &PredicateList::new(),
            PageRequest::new(10, 50).unwrap(),
        )
        .await
        .unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total, 2);
    }
}
