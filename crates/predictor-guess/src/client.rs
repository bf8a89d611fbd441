//! Client for the agify, genderize and nationalize APIs.

use url::Url;

use crate::config::GuessClientConfig;
use crate::error::GuessResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::{AgeGuess, GenderGuess, NationalityGuess};

/// Default demographics client using the reqwest HTTP backend.
pub type DefaultDemographicsClient = DemographicsClient<ReqwestBackend>;

/// Client for the three guessing endpoints.
///
/// Generic over an HTTP backend so it can run against canned responses.
/// Use `DefaultDemographicsClient` in production code.
pub struct DemographicsClient<B: HttpBackend> {
    backend: B,
    agify: Url,
    genderize: Url,
    nationalize: Url,
}

impl DefaultDemographicsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &GuessClientConfig) -> GuessResult<Self> {
        let backend = ReqwestBackend::new(config)?;
        Self::with_backend(config, backend)
    }
}

impl<B: HttpBackend> DemographicsClient<B> {
    /// Create a client over a custom backend.
    pub fn with_backend(config: &GuessClientConfig, backend: B) -> GuessResult<Self> {
        Ok(Self {
            backend,
            agify: Url::parse(&config.agify_url)?,
            genderize: Url::parse(&config.genderize_url)?,
            nationalize: Url::parse(&config.nationalize_url)?,
        })
    }

    pub async fn guess_age(&self, name: &str) -> GuessResult<Option<i32>> {
        let guess: AgeGuess = self.backend.get_json(&with_name(&self.agify, name)).await?;
        Ok(guess.age)
    }

    pub async fn guess_gender(&self, name: &str) -> GuessResult<Option<String>> {
        let guess: GenderGuess = self
            .backend
            .get_json(&with_name(&self.genderize, name))
            .await?;
        Ok(guess.gender)
    }

    /// Most likely country code for `name`.
    pub async fn guess_nationality(&self, name: &str) -> GuessResult<Option<String>> {
        let guess: NationalityGuess = self
            .backend
            .get_json(&with_name(&self.nationalize, name))
            .await?;
        Ok(guess.most_likely())
    }
}

fn with_name(base: &Url, name: &str) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut().append_pair("name", name);
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GuessError;
    use crate::http::testing::FakeBackend;
    use serde_json::json;

    #[test]
    fn test_default_client_creation() {
        let _client = DefaultDemographicsClient::new(&GuessClientConfig::new()).unwrap();
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let config = GuessClientConfig::new().with_agify_url("not a url");
        let result = DemographicsClient::with_backend(&config, FakeBackend::new());
        assert!(matches!(result, Err(GuessError::InvalidUrl(_))));
    }

    #[test]
    fn test_name_is_query_encoded() {
        let base = Url::parse("https://api.agify.io").unwrap();
        assert_eq!(
            with_name(&base, "Anna Maria").as_str(),
            "https://api.agify.io/?name=Anna+Maria"
        );
    }

    #[tokio::test]
    async fn test_guess_age() {
        let backend = FakeBackend::new().with_response("agify", json!({"name": "Dmitriy", "age": 43}));
        let client = DemographicsClient::with_backend(&GuessClientConfig::new(), backend).unwrap();

        assert_eq!(client.guess_age("Dmitriy").await.unwrap(), Some(43));
        assert_eq!(
            client.backend.requested(),
            vec!["https://api.agify.io/?name=Dmitriy".to_string()]
        );
    }
}
