use mergington::api::{ApiClient, ApiError, HttpApiClient};
use mergington::data::{Activities, MessageResponse};
use mergington::id::{ActivityName, ParticipantEmail};

/// The API client for the activities backend.
pub struct Api {
    client: HttpApiClient,
}

impl Api {
    pub fn new(base_url: &str) -> Self {
        Api {
            client: HttpApiClient::new(base_url),
        }
    }

    pub async fn list_activities(&self) -> Result<Activities, ApiError> {
        self.client.get("/activities").await
    }

    pub async fn signup(
        &self,
        activity: &ActivityName,
        email: &ParticipantEmail,
    ) -> Result<MessageResponse, ApiError> {
        self.client
            .post(&roster_endpoint(activity, "signup", email))
            .await
    }

    pub async fn unregister(
        &self,
        activity: &ActivityName,
        email: &ParticipantEmail,
    ) -> Result<MessageResponse, ApiError> {
        self.client
            .delete(&roster_endpoint(activity, "unregister", email))
            .await
    }
}

/// `/activities/{activity}/{action}?email={email}` with both values encoded.
fn roster_endpoint(activity: &ActivityName, action: &str, email: &ParticipantEmail) -> String {
    let activity = String::from(js_sys::encode_uri_component(activity.as_str()));
    let email = String::from(js_sys::encode_uri_component(email.as_str()));
    format!("/activities/{activity}/{action}?email={email}")
}

/// Create a client talking to the origin the page was served from.
pub fn create() -> Api {
    Api::new("")
}
