//! Request and response bodies for the people API.

use predictor_core::{PageRequest, Patch, Person, PersonDraft, PersonFilter, PersonUpdate};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::HttpError;

/// Body of `POST /people`.
///
/// Missing name or surname deserialize as empty and are rejected by the
/// service with a 400.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePersonRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub patronym: Option<String>,
}

impl From<CreatePersonRequest> for PersonDraft {
    fn from(req: CreatePersonRequest) -> Self {
        Self {
            name: req.name,
            surname: req.surname,
            patronym: req.patronym.filter(|p| !p.is_empty()),
        }
    }
}

/// Body of `PUT` and `PATCH /people/{id}`.
///
/// Omitted keys are left untouched; `"patronym": null` clears the patronym.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdatePersonRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub surname: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub patronym: Patch<Option<String>>,
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub age: Patch<i32>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub gender: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub nationality: Patch<String>,
}

impl From<UpdatePersonRequest> for PersonUpdate {
    fn from(req: UpdatePersonRequest) -> Self {
        Self {
            name: req.name,
            surname: req.surname,
            patronym: req.patronym,
            age: req.age,
            gender: req.gender,
            nationality: req.nationality,
        }
    }
}

/// Query string of `GET /people`.
///
/// Every value arrives as text so a malformed `page` or `limit` can fall
/// back to the default instead of rejecting the request.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPeopleQuery {
    /// Exact first name.
    pub name: Option<String>,
    /// Exact surname.
    pub surname: Option<String>,
    /// Exact patronym.
    pub patronym: Option<String>,
    /// Exact age; must be an integer.
    pub age: Option<String>,
    /// Gender name, e.g. `male`.
    pub gender: Option<String>,
    /// Nationality code, e.g. `RU`.
    pub nationality: Option<String>,
    /// 1-based page number, default 1.
    pub page: Option<String>,
    /// Page size, default 10.
    pub limit: Option<String>,
}

/// Parsed listing parameters.
#[derive(Debug)]
pub struct ListParams {
    pub filter: PersonFilter,
    pub request: PageRequest,
    pub page: u64,
    pub limit: u32,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn positive_or<T>(value: Option<&str>, default: T) -> T
where
    T: std::str::FromStr + PartialOrd + From<u8>,
{
    value
        .and_then(|v| v.parse::<T>().ok())
        .filter(|v| *v >= T::from(1))
        .unwrap_or(default)
}

impl ListPeopleQuery {
    pub fn into_params(self) -> Result<ListParams, HttpError> {
        let page = positive_or(self.page.as_deref(), 1_u64);
        let limit = positive_or(self.limit.as_deref(), PageRequest::DEFAULT_LIMIT);

        let age = match non_empty(self.age) {
            Some(age) => Some(
                age.parse::<i32>()
                    .map_err(|_| HttpError::BadRequest(format!("invalid age '{age}'")))?,
            ),
            None => None,
        };

        let filter = PersonFilter {
            name: non_empty(self.name),
            surname: non_empty(self.surname),
            patronym: non_empty(self.patronym),
            age,
            gender: non_empty(self.gender),
            nationality: non_empty(self.nationality),
        };

        let request = PageRequest::from_page_number(page, limit)
            .map_err(|e| HttpError::BadRequest(e.to_string()))?;

        Ok(ListParams {
            filter,
            request,
            page,
            limit,
        })
    }
}

/// A person as returned by the API. A missing patronym renders as `""`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct PersonResponse {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub patronym: String,
    pub age: i32,
    pub gender: String,
    pub nationality: String,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self {
            id: person.id,
            name: person.name,
            surname: person.surname,
            patronym: person.patronym.unwrap_or_default(),
            age: person.age,
            gender: person.gender,
            nationality: person.nationality,
        }
    }
}

/// Body of a listing response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListPeopleResponse {
    pub data: Vec<PersonResponse>,
    pub total: u64,
    pub limit: u32,
    pub page: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_paging_falls_back_to_defaults() {
        let query = ListPeopleQuery {
            page: Some("0".to_string()),
            limit: Some("abc".to_string()),
            ..Default::default()
        };

        let params = query.into_params().unwrap();
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 10);
        assert_eq!(params.request, PageRequest::default());
        assert_eq!(params.filter, PersonFilter::default());
    }

    #[test]
    fn test_page_translates_to_offset() {
        let query = ListPeopleQuery {
            page: Some("3".to_string()),
            limit: Some("5".to_string()),
            gender: Some("female".to_string()),
            name: Some(String::new()),
            ..Default::default()
        };

        let params = query.into_params().unwrap();
        assert_eq!(params.request.offset(), 10);
        assert_eq!(params.filter.gender.as_deref(), Some("female"));
        assert_eq!(params.filter.name, None);
    }

    #[test]
    fn test_invalid_age_rejected() {
        let query = ListPeopleQuery {
            age: Some("old".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            query.into_params(),
            Err(HttpError::BadRequest(_))
        ));
    }

    #[test]
    fn test_missing_patronym_renders_empty() {
        let response = PersonResponse::from(Person {
            id: 1,
            name: "Ivan".to_string(),
            surname: "Petrov".to_string(),
            patronym: None,
            age: 30,
            gender: "male".to_string(),
            nationality: "RU".to_string(),
        });
        assert_eq!(response.patronym, "");
    }

    #[test]
    fn test_update_request_keeps_presence() {
        let req: UpdatePersonRequest =
            serde_json::from_str(r#"{"surname": "Sidorov", "patronym": null, "age": 0}"#)
                .unwrap();
        assert_eq!(
            PersonUpdate::from(req),
            PersonUpdate::default()
                .with_surname("Sidorov")
                .with_patronym(None)
                .with_age(0)
        );
    }
}
