//! `DemographicsPort` implementation for `DemographicsClient`.

use async_trait::async_trait;
use predictor_core::{DemographicField, Demographics, DemographicsError, DemographicsPort};

use crate::client::DemographicsClient;
use crate::error::GuessError;
use crate::http::HttpBackend;

fn map_error(err: GuessError) -> DemographicsError {
    DemographicsError::Upstream(err.to_string())
}

fn require<T>(value: Option<T>, name: &str, field: DemographicField) -> Result<T, DemographicsError> {
    value.ok_or_else(|| DemographicsError::NotFound {
        name: name.to_string(),
        field,
    })
}

#[async_trait]
impl<B: HttpBackend> DemographicsPort for DemographicsClient<B> {
    async fn guess(&self, name: &str) -> Result<Demographics, DemographicsError> {
        let (age, gender, nationality) = tokio::try_join!(
            self.guess_age(name),
            self.guess_gender(name),
            self.guess_nationality(name),
        )
        .map_err(map_error)?;

        Ok(Demographics {
            age: require(age, name, DemographicField::Age)?,
            gender: require(gender, name, DemographicField::Gender)?,
            nationality: require(nationality, name, DemographicField::Nationality)?,
        })
    }
}
