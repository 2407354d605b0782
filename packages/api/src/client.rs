//! # HTTP client for the users collection
//!
//! [`HttpUserService`] owns one `reqwest::Client` and the collection endpoint
//! derived from [`ClientConfig`]. No timeout is configured: a hung request keeps
//! the screen's loading indicator up until the OS gives up on the socket.

use directory::{ClientConfig, DraftField, User, UserDraft};
use reqwest::multipart::{Form, Part};

use crate::error::ApiError;
use crate::photo::{load_photo, PHOTO_FILE_NAME, PHOTO_MIME};
use crate::UserService;

#[derive(Clone, Debug)]
pub struct HttpUserService {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpUserService {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.users_endpoint(),
        }
    }

    fn transport(&self, source: reqwest::Error) -> ApiError {
        ApiError::Transport {
            url: self.endpoint.clone(),
            source,
        }
    }

    async fn multipart_form(&self, draft: &UserDraft) -> Result<Form, ApiError> {
        let bytes = load_photo(&self.http, &draft.profile_picture).await?;
        let photo = Part::bytes(bytes)
            .file_name(PHOTO_FILE_NAME)
            .mime_str(PHOTO_MIME)
            .map_err(|e| self.transport(e))?;

        Ok(Form::new()
            .text(DraftField::Name.wire_name(), draft.name.clone())
            .text(DraftField::Email.wire_name(), draft.email.clone())
            .text(DraftField::Password.wire_name(), draft.password.clone())
            .part(DraftField::ProfilePicture.wire_name(), photo))
    }

    async fn ensure_success(&self, response: reqwest::Response) -> Result<String, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }
        response.text().await.map_err(|e| self.transport(e))
    }
}

impl UserService for HttpUserService {
    async fn create_user(&self, draft: &UserDraft) -> Result<Option<User>, ApiError> {
        let form = self.multipart_form(draft).await?;
        tracing::debug!(endpoint = %self.endpoint, email = %draft.email, "creating user");

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.transport(e))?;
        let body = self.ensure_success(response).await?;

        match serde_json::from_str::<User>(&body) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                tracing::debug!("create response is not a user record: {e}");
                Ok(None)
            }
        }
    }

    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        tracing::debug!(endpoint = %self.endpoint, "listing users");

        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| self.transport(e))?;
        let body = self.ensure_success(response).await?;

        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            url: self.endpoint.clone(),
            source,
        })
    }
}
