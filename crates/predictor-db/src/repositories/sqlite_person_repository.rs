//! `SQLite` implementation of the `PersonRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use predictor_core::{
    NewPerson, Page, PageRequest, Person, PersonFilter, PersonRepository, PersonUpdate,
    RepositoryError,
};

use super::attribute_store::{LookupTable, NormalizedAttributeStore};
use super::filter_builder::{FilterBuilder, FilterPlan};
use super::paginated_query::PaginatedQueryExecutor;
use super::row_mappers::{PERSON_SELECT, row_to_person, storage_error};
use super::update_builder::UpdateBuilder;

/// `SQLite` implementation of the `PersonRepository` trait.
///
/// Writes run in a transaction covering lookup resolution and the row
/// write, so a failed insert or update leaves no new lookup rows behind.
pub struct SqlitePersonRepository {
    pool: SqlitePool,
}

impl SqlitePersonRepository {
    /// Create a new `SQLite` person repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersonRepository for SqlitePersonRepository {
    async fn create(&self, person: NewPerson) -> Result<i64, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(storage_error("create person"))?;

        let gender_id =
            NormalizedAttributeStore::resolve_or_create(&mut tx, LookupTable::Gender, &person.gender)
                .await
                .map_err(storage_error("resolve gender"))?;
        let nationality_id = NormalizedAttributeStore::resolve_or_create(
            &mut tx,
            LookupTable::Nationality,
            &person.nationality,
        )
        .await
        .map_err(storage_error("resolve nationality"))?;

        let result = sqlx::query(
            "INSERT INTO people_info (name, surname, patronym, age, gender_id, nationality_id) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&person.name)
        .bind(&person.surname)
        .bind(&person.patronym)
        .bind(person.age)
        .bind(gender_id)
        .bind(nationality_id)
        .execute(&mut *tx)
        .await
        .map_err(storage_error("create person"))?;

        tx.commit().await.map_err(storage_error("create person"))?;

        let id = result.last_insert_rowid();
        debug!(id, gender_id, nationality_id, "Created person");
        Ok(id)
    }

    async fn get(&self, id: i64) -> Result<Person, RepositoryError> {
        let query = format!("{PERSON_SELECT} WHERE people_info.id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error("get person"))?
            .ok_or(RepositoryError::NotFound(id))?;

        row_to_person(&row)
    }

    async fn update(&self, id: i64, update: PersonUpdate) -> Result<(), RepositoryError> {
        if update.is_empty() {
            debug!(id, "Empty update, nothing to apply");
            return Ok(());
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(storage_error("update person"))?;

        let assignments = UpdateBuilder::build(&mut tx, &update)
            .await
            .map_err(storage_error("resolve update attributes"))?;

        let result = UpdateBuilder::statement(&assignments, id)
            .build()
            .execute(&mut *tx)
            .await
            .map_err(storage_error("update person"))?;

        if result.rows_affected() == 0 {
            // Discard any lookup rows created for a row that does not exist
            tx.rollback()
                .await
                .map_err(storage_error("update person"))?;
            return Err(RepositoryError::NotFound(id));
        }

        tx.commit().await.map_err(storage_error("update person"))?;
        debug!(id, fields = assignments.len(), "Updated person");
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM people_info WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_error("delete person"))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(id));
        }

        debug!(id, "Deleted person");
        Ok(())
    }

    async fn list(
        &self,
        filter: PersonFilter,
        page: PageRequest,
    ) -> Result<Page<Person>, RepositoryError> {
        // Count and page read the same snapshot
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(storage_error("list people"))?;

        let plan = FilterBuilder::build(&mut tx, &filter)
            .await
            .map_err(storage_error("resolve filter attributes"))?;

        let result = match plan {
            FilterPlan::MatchesNothing => {
                debug!(?filter, "Filter references an unknown attribute");
                Page::empty()
            }
            FilterPlan::Predicates(predicates) => {
                PaginatedQueryExecutor::fetch_page(&mut tx, &predicates, page).await?
            }
        };

        tx.commit().await.map_err(storage_error("list people"))?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::TestDb;
    use std::collections::HashSet;

    fn ivan() -> NewPerson {
        NewPerson::new("Ivan", "Petrov", 30, "male", "RU")
    }

    async fn lookup_count(db: &TestDb, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(db.pool())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_then_filtered_list_returns_record() {
        let db = TestDb::new().await.unwrap();
        let repo = db.person_repository();

        let new = NewPerson::new("Olga", "Smirnova", 41, "female", "BY").with_patronym("Ivanovna");
        let id = repo.create(new.clone()).await.unwrap();

        let filter = PersonFilter::default()
            .with_name("Olga")
            .with_surname("Smirnova")
            .with_patronym("Ivanovna")
            .with_age(41)
            .with_gender("female")
            .with_nationality("BY");
        let page = repo.list(filter, PageRequest::default()).await.unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(
            page.items,
            vec![Person {
                id,
                name: new.name,
                surname: new.surname,
                patronym: new.patronym,
                age: new.age,
                gender: new.gender,
                nationality: new.nationality,
            }]
        );
    }

    #[tokio::test]
    async fn test_ivan_lifecycle() {
        let db = TestDb::new().await.unwrap();
        let repo = db.person_repository();

        let id = repo.create(ivan()).await.unwrap();
        assert_eq!(id, 1);

        let page = repo
            .list(PersonFilter::default().with_name("Ivan"), PageRequest::default())
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].surname, "Petrov");
        assert_eq!(page.items[0].patronym, None);
        assert_eq!(page.items[0].age, 30);
        assert_eq!(page.items[0].gender, "male");
        assert_eq!(page.items[0].nationality, "RU");

        repo.delete(1).await.unwrap();
        let err = repo.delete(1).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(1)));
    }

    #[tokio::test]
    async fn test_unfiltered_total_matches_row_count() {
        let db = TestDb::new().await.unwrap();
        let repo = db.person_repository();

        for i in 0..7 {
            repo.create(NewPerson::new(format!("p{i}"), "S", i, "male", "RU"))
                .await
                .unwrap();
        }

        let page = repo
            .list(PersonFilter::default(), PageRequest::new(3, 0).unwrap())
            .await
            .unwrap();
        assert_eq!(page.total, 7);
        assert_eq!(page.items.len(), 3);
    }

    #[tokio::test]
    async fn test_attribute_filter_with_no_matches_is_empty() {
        let db = TestDb::new().await.unwrap();
        let repo = db.person_repository();

        repo.create(ivan()).await.unwrap();
        let olga_id = repo
            .create(NewPerson::new("Olga", "Ivanova", 35, "female", "UA"))
            .await
            .unwrap();
        repo.delete(olga_id).await.unwrap();

        // "female" exists as a lookup row but no person references it
        let existing = repo
            .list(
                PersonFilter::default().with_gender("female"),
                PageRequest::default(),
            )
            .await
            .unwrap();
        assert_eq!(existing, Page::empty());

        let unknown = repo
            .list(
                PersonFilter::default().with_nationality("ZZ"),
                PageRequest::default(),
            )
            .await
            .unwrap();
        assert_eq!(unknown, Page::empty());
        assert_eq!(lookup_count(&db, "nationality").await, 2);
    }

    #[tokio::test]
    async fn test_update_surname_keeps_other_fields() {
        let db = TestDb::new().await.unwrap();
        let repo = db.person_repository();

        let id = repo
            .create(ivan().with_patronym("Sergeevich"))
            .await
            .unwrap();
        let before = repo.get(id).await.unwrap();

        repo.update(id, PersonUpdate::default().with_surname("Sidorov"))
            .await
            .unwrap();

        let after = repo.get(id).await.unwrap();
        assert_eq!(
            after,
            Person {
                surname: "Sidorov".to_string(),
                ..before
            }
        );
    }

    #[tokio::test]
    async fn test_update_can_clear_and_zero_fields() {
        let db = TestDb::new().await.unwrap();
        let repo = db.person_repository();

        let id = repo
            .create(ivan().with_patronym("Sergeevich"))
            .await
            .unwrap();

        repo.update(
            id,
            PersonUpdate::default()
                .with_patronym(None)
                .with_age(0)
                .with_gender("female")
                .with_nationality("KZ"),
        )
        .await
        .unwrap();

        let person = repo.get(id).await.unwrap();
        assert_eq!(person.patronym, None);
        assert_eq!(person.age, 0);
        assert_eq!(person.gender, "female");
        assert_eq!(person.nationality, "KZ");
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found_and_rolls_back() {
        let db = TestDb::new().await.unwrap();
        let repo = db.person_repository();

        let err = repo
            .update(42, PersonUpdate::default().with_gender("female"))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(lookup_count(&db, "gender").await, 0);
    }

    #[tokio::test]
    async fn test_empty_update_is_noop() {
        let db = TestDb::new().await.unwrap();
        let repo = db.person_repository();

        let id = repo.create(ivan()).await.unwrap();
        repo.update(id, PersonUpdate::default()).await.unwrap();

        assert_eq!(repo.get(id).await.unwrap().name, "Ivan");
    }

    #[tokio::test]
    async fn test_get_and_delete_missing_id_are_not_found() {
        let db = TestDb::new().await.unwrap();
        let repo = db.person_repository();

        assert!(matches!(
            repo.get(9).await.unwrap_err(),
            RepositoryError::NotFound(9)
        ));
        assert!(matches!(
            repo.delete(9).await.unwrap_err(),
            RepositoryError::NotFound(9)
        ));
    }

    #[tokio::test]
    async fn test_pages_partition_all_records() {
        let db = TestDb::new().await.unwrap();
        let repo = db.person_repository();

        let mut created = HashSet::new();
        for i in 0..25 {
            let id = repo
                .create(NewPerson::new(format!("name{i}"), "S", 20 + i, "male", "RU"))
                .await
                .unwrap();
            created.insert(id);
        }

        let mut seen = Vec::new();
        for page_number in 1..=3 {
            let page = repo
                .list(
                    PersonFilter::default(),
                    PageRequest::from_page_number(page_number, 10).unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(page.total, 25);
            seen.extend(page.items.into_iter().map(|p| p.id));
        }

        assert_eq!(seen.len(), 25);
        assert!(seen.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(seen.into_iter().collect::<HashSet<_>>(), created);
    }

    #[tokio::test]
    async fn test_shared_lookup_rows_across_people() {
        let db = TestDb::new().await.unwrap();
        let repo = db.person_repository();

        repo.create(ivan()).await.unwrap();
        repo.create(NewPerson::new("Petr", "Ivanov", 50, "male", "RU"))
            .await
            .unwrap();

        assert_eq!(lookup_count(&db, "gender").await, 1);
        assert_eq!(lookup_count(&db, "nationality").await, 1);
    }

    #[tokio::test]
    async fn test_deleted_ids_are_not_reused() {
        let db = TestDb::new().await.unwrap();
        let repo = db.person_repository();

        let first = repo.create(ivan()).await.unwrap();
        repo.delete(first).await.unwrap();
        let second = repo.create(ivan()).await.unwrap();

        assert!(second > first);
    }
}
