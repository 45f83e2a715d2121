//! Typed endpoints of the diary backend
//!
//! Implements the core auth/matches/training ports on top of [`ApiClient`].

use std::sync::Arc;

use async_trait::async_trait;
use playerlog_core::auth::ports::AuthApi;
use playerlog_core::diary::ports::{MatchesApi, TrainingApi};
use playerlog_domain::{AuthResponse, Credentials, Match, Result, TrainingSession, User};

use super::client::ApiClient;

/// Diary backend client implementing the core API ports
pub struct DiaryApiClient {
    client: Arc<ApiClient>,
}

impl DiaryApiClient {
    /// Create a new client over the shared transport.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthApi for DiaryApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse> {
        self.client.post("/auth/login", credentials).await
    }

    async fn register(&self, user: &User) -> Result<AuthResponse> {
        self.client.post("/auth/register", user).await
    }
}

#[async_trait]
impl MatchesApi for DiaryApiClient {
    async fn list(&self) -> Result<Vec<Match>> {
        self.client.get("/jogos").await
    }

    async fn create(&self, game: &Match) -> Result<Match> {
        self.client.post("/jogos", game).await
    }

    async fn update(&self, id: &str, game: &Match) -> Result<Match> {
        self.client.put(&format!("/jogos/{id}"), game).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("/jogos/{id}")).await
    }
}

#[async_trait]
impl TrainingApi for DiaryApiClient {
    async fn list(&self) -> Result<Vec<TrainingSession>> {
        self.client.get("/treinos").await
    }

    async fn create(&self, session: &TrainingSession) -> Result<TrainingSession> {
        self.client.post("/treinos", session).await
    }

    async fn update(&self, id: &str, session: &TrainingSession) -> Result<TrainingSession> {
        self.client.put(&format!("/treinos/{id}"), session).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("/treinos/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use playerlog_domain::Error;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::super::auth::AccessTokenProvider;
    use super::super::client::ApiClientConfig;
    use super::*;

    struct StaticTokenProvider(Option<String>);

    impl AccessTokenProvider for StaticTokenProvider {
        fn access_token(&self) -> Result<Option<String>> {
            Ok(self.0.clone())
        }
    }

    fn diary_client(server: &MockServer, token: Option<&str>) -> DiaryApiClient {
        let config = ApiClientConfig { base_url: server.uri(), timeout: Duration::from_secs(5) };
        let client = ApiClient::new(config, Arc::new(StaticTokenProvider(token.map(Into::into))))
            .expect("build api client");
        DiaryApiClient::new(Arc::new(client))
    }

    fn sample_match() -> Match {
        Match {
            id: None,
            date: "2025-11-23".into(),
            opponent: "Tigres FC".into(),
            kind: "amistoso".into(),
            result: "vitoria".into(),
            goals: 2,
            assists: 1,
            rating: 8.5,
            feeling: 9,
            comments: "bom jogo".into(),
        }
    }

    #[tokio::test]
    async fn login_posts_credentials_and_parses_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(wiremock::matchers::body_json(
                serde_json::json!({ "email": "b@x.com", "senha": "secret" }),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "token": "tok123",
                "user": { "_id": "u9", "nome": "Bruno", "email": "b@x.com" }
            })))
            .mount(&server)
            .await;

        let client = diary_client(&server, None);
        let response =
            client.login(&Credentials::new("b@x.com", "secret")).await.expect("login succeeds");

        assert_eq!(response.token, "tok123");
        assert_eq!(response.user.id.as_deref(), Some("u9"));
        assert_eq!(response.user.name, "Bruno");
    }

    #[tokio::test]
    async fn login_rejection_maps_to_auth_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = diary_client(&server, None);
        let err = client
            .login(&Credentials::new("b@x.com", "wrong"))
            .await
            .expect_err("login must fail");
        assert!(matches!(err, Error::Auth(_)));
    }

    #[tokio::test]
    async fn list_matches_sends_bearer_token() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/jogos"))
            .and(header("Authorization", "Bearer tok123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
                "_id": "m1",
                "data": "2025-11-23",
                "adversario": "Tigres FC",
                "tipo": "amistoso",
                "resultado": "vitoria",
                "gols": 2,
                "assistencias": 1,
                "nota": 8.5,
                "sensacao": 9,
                "comentarios": ""
            }])))
            .mount(&server)
            .await;

        let client = diary_client(&server, Some("tok123"));
        let matches = MatchesApi::list(&client).await.expect("list succeeds");

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id.as_deref(), Some("m1"));
        assert_eq!(matches[0].opponent, "Tigres FC");
    }

    #[tokio::test]
    async fn create_match_returns_assigned_id() {
        let server = MockServer::start().await;

        Mock::given(method("POST")).and(path("/jogos")).respond_with(
            ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "_id": "m7",
                "data": "2025-11-23",
                "adversario": "Tigres FC",
                "tipo": "amistoso",
                "resultado": "vitoria",
                "gols": 2,
                "assistencias": 1,
                "nota": 8.5,
                "sensacao": 9,
                "comentarios": "bom jogo"
            })),
        )
        .mount(&server)
        .await;

        let client = diary_client(&server, Some("tok123"));
        let created = MatchesApi::create(&client, &sample_match()).await.expect("create succeeds");
        assert_eq!(created.id.as_deref(), Some("m7"));
    }

    #[tokio::test]
    async fn delete_training_hits_id_path() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/treinos/t3"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = diary_client(&server, Some("tok123"));
        TrainingApi::delete(&client, "t3").await.expect("delete succeeds");
    }
}
