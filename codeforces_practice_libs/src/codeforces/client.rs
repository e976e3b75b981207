use crate::codeforces::model::*;
use async_trait::async_trait;
use reqwest::{self, header::CACHE_CONTROL, Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CodeforcesApiError>;

pub const DEFAULT_API_URL: &str = "https://codeforces.com";

#[derive(Debug, Error)]
pub enum CodeforcesApiError {
    #[error("failed to request to Codeforces API: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("failed to deserialize JSON data: {0}")]
    DeserializeError(#[from] serde_json::Error),
    #[error("invalid Codeforces API url given: {0}")]
    InvalidUrlError(#[from] url::ParseError),
    #[error("Codeforces API returned failure: {0}")]
    ApiError(String),
}

#[async_trait]
pub trait CodeforcesApi {
    async fn contest_list(&self) -> Result<Vec<RawContest>>;
    async fn problemset_problems(&self) -> Result<Vec<RawProblem>>;
}

pub struct CodeforcesClient {
    contest_list_url: Url,
    problemset_url: Url,
    client: Client,
}

impl CodeforcesClient {
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self> {
        let mut base_url = Url::parse(api_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let contest_list_url = base_url.join("api/contest.list")?;
        let problemset_url = base_url.join("api/problemset.problems")?;

        let client = Client::builder().gzip(true).timeout(timeout).build()?;

        Ok(CodeforcesClient {
            contest_list_url,
            problemset_url,
            client,
        })
    }

    async fn call<T>(&self, url: &Url) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let res = self
            .client
            .get(url.clone())
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await?
            .error_for_status()?;
        let body = res.bytes().await?;
        let body: CodeforcesResponse<T> = serde_json::from_slice(&body)?;

        match (body.status, body.result) {
            (ResponseStatus::Ok, Some(result)) => Ok(result),
            (ResponseStatus::Ok, None) => Err(CodeforcesApiError::ApiError(String::from(
                "response has no result",
            ))),
            (ResponseStatus::Failed, _) => Err(CodeforcesApiError::ApiError(
                body.comment.unwrap_or_default(),
            )),
        }
    }
}

#[async_trait]
impl CodeforcesApi for CodeforcesClient {
    async fn contest_list(&self) -> Result<Vec<RawContest>> {
        self.call(&self.contest_list_url).await
    }

    async fn problemset_problems(&self) -> Result<Vec<RawProblem>> {
        let result: ProblemSetResult = self.call(&self.problemset_url).await?;
        Ok(result.problems)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn create_new_client() {
        let client =
            CodeforcesClient::new("https://codeforces.com", Duration::from_secs(1)).unwrap();

        assert_eq!(
            client.contest_list_url,
            Url::parse("https://codeforces.com/api/contest.list").unwrap()
        );
        assert_eq!(
            client.problemset_url,
            Url::parse("https://codeforces.com/api/problemset.problems").unwrap()
        );
    }

    #[test]
    fn base_url_path_is_kept() {
        for base in [
            "https://mirror.example/codeforces",
            "https://mirror.example/codeforces/",
        ] {
            let client = CodeforcesClient::new(base, Duration::from_secs(1)).unwrap();

            assert_eq!(
                client.contest_list_url,
                Url::parse("https://mirror.example/codeforces/api/contest.list").unwrap()
            );
            assert_eq!(
                client.problemset_url,
                Url::parse("https://mirror.example/codeforces/api/problemset.problems").unwrap()
            );
        }
    }

    #[test]
    fn error_message_includes_cause() {
        let err = CodeforcesClient::new("not a url", Duration::from_secs(1))
            .err()
            .unwrap();
        let message = err.to_string();

        assert!(message.starts_with("invalid Codeforces API url given: "));
        assert!(message.len() > "invalid Codeforces API url given: ".len());
    }

    #[test]
    fn invalid_url() {
        let result = CodeforcesClient::new("not a url", Duration::from_secs(1));
        assert!(matches!(result, Err(CodeforcesApiError::InvalidUrlError(_))));
    }

    #[tokio::test]
    async fn fetch_contest_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/contest.list"))
            .and(header("cache-control", "no-cache"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"status":"OK","result":[{"id":1,"name":"Round (Div. 2)","phase":"FINISHED"}]}"#,
            ))
            .mount(&server)
            .await;

        let client = CodeforcesClient::new(&server.uri(), Duration::from_secs(5)).unwrap();
        let contests = client.contest_list().await.unwrap();

        assert_eq!(contests.len(), 1);
        assert_eq!(contests[0].id, 1);
    }

    #[tokio::test]
    async fn fetch_problemset_problems() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/problemset.problems"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"status":"OK","result":{"problems":[{"contestId":1,"index":"B","name":"Foo","rating":1300,"tags":[]}],"problemStatistics":[]}}"#,
            ))
            .mount(&server)
            .await;

        let client = CodeforcesClient::new(&server.uri(), Duration::from_secs(5)).unwrap();
        let problems = client.problemset_problems().await.unwrap();

        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].rating, Some(1300));
    }

    #[tokio::test]
    async fn failed_status_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/contest.list"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"status":"FAILED","comment":"Call limit exceeded"}"#,
            ))
            .mount(&server)
            .await;

        let client = CodeforcesClient::new(&server.uri(), Duration::from_secs(5)).unwrap();
        match client.contest_list().await {
            Err(CodeforcesApiError::ApiError(comment)) => {
                assert_eq!(comment, "Call limit exceeded")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn non_success_status_is_request_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = CodeforcesClient::new(&server.uri(), Duration::from_secs(5)).unwrap();
        assert!(matches!(
            client.problemset_problems().await,
            Err(CodeforcesApiError::RequestError(_))
        ));
    }

    #[tokio::test]
    async fn malformed_json_is_deserialize_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = CodeforcesClient::new(&server.uri(), Duration::from_secs(5)).unwrap();
        assert!(matches!(
            client.contest_list().await,
            Err(CodeforcesApiError::DeserializeError(_))
        ));
    }
}
