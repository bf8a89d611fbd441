//! Typed predicate and assignment lists.
//!
//! Filters and updates are collected as ordered `(column, value)` entries
//! and rendered onto a `QueryBuilder` with `push_bind`, so every placeholder
//! is emitted together with the value that fills it.

use sqlx::{QueryBuilder, Sqlite};

/// A value bound into a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Text(String),
    Integer(i64),
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

/// Filterable and assignable columns of `people_info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    Surname,
    Patronym,
    Age,
    GenderId,
    NationalityId,
}

impl Column {
    /// Bare column name, as required on the left of a SET assignment.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Surname => "surname",
            Self::Patronym => "patronym",
            Self::Age => "age",
            Self::GenderId => "gender_id",
            Self::NationalityId => "nationality_id",
        }
    }

    /// Table-qualified name; the page query joins tables that also have `id`.
    pub const fn qualified(self) -> &'static str {
        match self {
            Self::Name => "people_info.name",
            Self::Surname => "people_info.surname",
            Self::Patronym => "people_info.patronym",
            Self::Age => "people_info.age",
            Self::GenderId => "people_info.gender_id",
            Self::NationalityId => "people_info.nationality_id",
        }
    }
}

fn push_value(builder: &mut QueryBuilder<'_, Sqlite>, value: &SqlValue) {
    match value {
        SqlValue::Text(text) => {
            builder.push_bind(text.clone());
        }
        SqlValue::Integer(int) => {
            builder.push_bind(*int);
        }
    }
}

/// Ordered equality predicates, joined by `AND`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredicateList {
    entries: Vec<(Column, SqlValue)>,
}

impl PredicateList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, column: Column, value: impl Into<SqlValue>) {
        self.entries.push((column, value.into()));
    }

    /// Append ` WHERE a = ? AND b = ?`; nothing at all when empty.
    pub fn push_where(&self, builder: &mut QueryBuilder<'_, Sqlite>) {
        for (i, (column, value)) in self.entries.iter().enumerate() {
            builder.push(if i == 0 { " WHERE " } else { " AND " });
            builder.push(column.qualified()).push(" = ");
            push_value(builder, value);
        }
    }
}

/// Ordered `column = value` assignments for a SET clause.
///
/// A `None` value assigns SQL `NULL`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentList {
    entries: Vec<(Column, Option<SqlValue>)>,
}

impl AssignmentList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, column: Column, value: impl Into<SqlValue>) {
        self.entries.push((column, Some(value.into())));
    }

    pub fn push_null(&mut self, column: Column) {
        self.entries.push((column, None));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Append `a = ?, b = ?` with no leading keyword.
    pub fn push_set(&self, builder: &mut QueryBuilder<'_, Sqlite>) {
        let mut separated = builder.separated(", ");
        for (column, value) in &self.entries {
            separated.push(column.name());
            separated.push_unseparated(" = ");
            match value {
                Some(SqlValue::Text(text)) => {
                    separated.push_bind_unseparated(text.clone());
                }
                Some(SqlValue::Integer(int)) => {
                    separated.push_bind_unseparated(*int);
                }
                None => {
                    separated.push_unseparated("NULL");
                }
            }
        }
    }
}
