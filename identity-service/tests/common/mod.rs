use std::sync::Arc;

use auth::TokenIssuer;
use identity_service::domain::auth::service::AuthService;
use identity_service::inbound::http::cookie::RefreshCookie;
use identity_service::inbound::http::router::create_router;
use identity_service::outbound::repositories::InMemoryUserDirectory;
use serde_json::json;
use serde_json::Value;

/// A running service instance backed by the in-memory user directory,
/// listening on a random local port.
pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    pub issuer: Arc<TokenIssuer>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let issuer = Arc::new(
            TokenIssuer::new(
                b"integration-access-secret-32-bytes!!",
                b"integration-refresh-secret-32-bytes!",
                1,
                24,
            )
            .expect("Failed to build issuer"),
        );

        let refresh_cookie = RefreshCookie {
            name: "refresh_token".to_string(),
            secure: false,
            max_age_secs: issuer.refresh_ttl().num_seconds(),
        };

        let directory = Arc::new(InMemoryUserDirectory::new());
        let auth_service = Arc::new(AuthService::new(directory, Arc::clone(&issuer)));
        let router = create_router(auth_service, refresh_cookie);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Test server stopped");
        });

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to build http client");

        Self {
            address,
            client,
            issuer,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn sign_up(&self, name: &str, email: &str, password: &str) -> reqwest::Response {
        self.client
            .post(self.url("/api/auth/sign-up"))
            .json(&json!({ "name": name, "email": email, "password": password }))
            .send()
            .await
            .expect("Sign-up request failed")
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> reqwest::Response {
        self.client
            .post(self.url("/api/auth/sign-in"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Sign-in request failed")
    }
}

/// Pull the access token out of a success envelope.
pub fn access_token(body: &Value) -> String {
    body["data"]["accessToken"]
        .as_str()
        .expect("Response carries no access token")
        .to_string()
}
