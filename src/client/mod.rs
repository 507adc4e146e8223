/**
 * linkfolio HTTP Client
 *
 * Typed async wrapper around every API endpoint. The session cookie set by
 * `login` is kept in the client's cookie store and sent on later requests.
 *
 * # Identity cache
 *
 * The server is the only source of truth for who is signed in. The client
 * keeps an optional read-through copy of `GET /profile` so UI code can ask
 * for the current user cheaply; the copy is dropped whenever any request
 * answers 401 and on logout, and replaced on login or profile update.
 */

mod error;

pub use error::ClientError;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;
use url::Url;

use crate::client::error::ErrorBody;
use crate::shared::{
    LinkId, LinkInput, LinkView, LoginRequest, OwnerProfile, PublicPage, RegisterRequest,
    ReorderRequest, SuccessResponse,
};

/// An avatar file to upload with [`LinkfolioClient::update_profile`]
#[derive(Debug, Clone)]
pub struct AvatarFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Typed client for a linkfolio server
#[derive(Debug)]
pub struct LinkfolioClient {
    http: Client,
    base_url: Url,
    identity: RwLock<Option<OwnerProfile>>,
}

impl LinkfolioClient {
    /// Create a client for the server at `base_url` (e.g. `http://127.0.0.1:3000`)
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let http = Client::builder().cookie_store(true).build()?;
        Self::with_http_client(base_url, http)
    }

    /// Use a preconfigured `reqwest::Client`; it should have a cookie store
    pub fn with_http_client(base_url: &str, http: Client) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self {
            http,
            base_url,
            identity: RwLock::new(None),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `{base}/{segments...}`, percent-encoding each segment
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `POST /auth/register`; does not sign in
    pub async fn register(&self, request: &RegisterRequest) -> Result<SuccessResponse, ClientError> {
        self.send_json(Method::POST, &["auth", "register"], Some(request)).await
    }

    /// `POST /auth/login`; stores the session cookie and warms the identity cache
    pub async fn login(&self, request: &LoginRequest) -> Result<OwnerProfile, ClientError> {
        let _: SuccessResponse = self.send_json(Method::POST, &["auth", "login"], Some(request)).await?;
        self.refresh_identity().await
    }

    /// `POST /auth/logout`; always clears the identity cache
    pub async fn logout(&self) -> Result<(), ClientError> {
        self.clear_identity().await;
        let _: SuccessResponse = self.send_json(Method::POST, &["auth", "logout"], None::<&()>).await?;
        Ok(())
    }

    /// The signed-in user, from cache when available
    pub async fn current_user(&self) -> Result<OwnerProfile, ClientError> {
        if let Some(profile) = self.identity.read().await.clone() {
            return Ok(profile);
        }
        self.refresh_identity().await
    }

    /// Cached identity without a network round trip
    pub async fn cached_user(&self) -> Option<OwnerProfile> {
        self.identity.read().await.clone()
    }

    /// `GET /profile`, bypassing and then refilling the cache
    pub async fn refresh_identity(&self) -> Result<OwnerProfile, ClientError> {
        let profile: OwnerProfile = self.send_json(Method::GET, &["profile"], None::<&()>).await?;
        *self.identity.write().await = Some(profile.clone());
        Ok(profile)
    }

    pub async fn clear_identity(&self) {
        *self.identity.write().await = None;
    }

    /// `PUT /profile` with whichever fields are supplied
    pub async fn update_profile(
        &self,
        accent_color: Option<&str>,
        avatar: Option<AvatarFile>,
    ) -> Result<OwnerProfile, ClientError> {
        let mut form = Form::new();
        if let Some(color) = accent_color {
            form = form.text("accentColor", color.to_string());
        }
        if let Some(file) = avatar {
            let part = Part::bytes(file.bytes)
                .file_name(file.file_name)
                .mime_str(&file.content_type)?;
            form = form.part("avatar", part);
        }

        let url = self.endpoint(&["profile"])?;
        let profile: OwnerProfile = self.execute(self.http.put(url).multipart(form)).await?;
        *self.identity.write().await = Some(profile.clone());
        Ok(profile)
    }

    pub async fn list_links(&self) -> Result<Vec<LinkView>, ClientError> {
        self.send_json(Method::GET, &["links"], None::<&()>).await
    }

    pub async fn create_link(&self, input: &LinkInput) -> Result<LinkView, ClientError> {
        self.send_json(Method::POST, &["links"], Some(input)).await
    }

    pub async fn update_link(&self, link_id: LinkId, input: &LinkInput) -> Result<LinkView, ClientError> {
        let id = link_id.to_string();
        self.send_json(Method::PUT, &["links", id.as_str()], Some(input)).await
    }

    pub async fn delete_link(&self, link_id: LinkId) -> Result<(), ClientError> {
        let id = link_id.to_string();
        let _: SuccessResponse = self.send_json(Method::DELETE, &["links", id.as_str()], None::<&()>).await?;
        Ok(())
    }

    /// Submit the full display order of the user's links
    pub async fn reorder_links(&self, link_ids: &[LinkId]) -> Result<(), ClientError> {
        let request = ReorderRequest {
            link_ids: link_ids.to_vec(),
        };
        let _: SuccessResponse = self.send_json(Method::POST, &["links", "reorder"], Some(&request)).await?;
        Ok(())
    }

    /// Count a click; failures are logged and swallowed so navigation proceeds
    pub async fn record_click(&self, link_id: LinkId) {
        let id = link_id.to_string();
        let result: Result<SuccessResponse, _> =
            self.send_json(Method::POST, &["links", id.as_str(), "click"], None::<&()>).await;
        if let Err(e) = result {
            tracing::warn!(link_id, "Failed to record click: {}", e);
        }
    }

    /// `GET /users/{username}`
    pub async fn public_page(&self, username: &str) -> Result<PublicPage, ClientError> {
        self.send_json(Method::GET, &["users", username], None::<&()>).await
    }

    /// `GET /health`
    pub async fn health(&self) -> Result<serde_json::Value, ClientError> {
        self.send_json(Method::GET, &["health"], None::<&()>).await
    }

    async fn send_json<B, T>(&self, method: Method, segments: &[&str], body: Option<&B>) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(request).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?;
        let response = self.check(response).await?;
        Ok(response.json().await?)
    }

    async fn check(&self, response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            self.clear_identity().await;
        }

        let body = response.text().await.unwrap_or_default();
        Err(ClientError::Api {
            status,
            message: ErrorBody::message_from(status, &body),
        })
    }
}
