use std::path::Path;
use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{delete, get, post},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::AppState;
use crate::handlers::{activities, health};

fn cors() -> CorsLayer {
    let origins: Vec<HeaderValue> = if cfg!(debug_assertions) {
        let dev_ports = [3000, 8000, 8080, 8081, 5173];
        dev_ports
            .iter()
            .flat_map(|port| {
                [
                    format!("http://localhost:{port}"),
                    format!("http://127.0.0.1:{port}"),
                ]
            })
            .filter_map(|origin| origin.parse::<HeaderValue>().ok())
            .collect()
    } else {
        // The frontend is served from the same origin in production
        Vec::new()
    };

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_headers([header::CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
}

/// Build the application router: the activity API, health check and the
/// static frontend, wrapped in CORS and request tracing.
pub fn create_router(state: Arc<AppState>, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(activities::index))
        .route("/health", get(health::get))
        .route("/activities", get(activities::list))
        .route("/activities/{activity_name}", get(activities::get))
        .route("/activities/{activity_name}/signup", post(activities::signup))
        .route(
            "/activities/{activity_name}/unregister",
            delete(activities::unregister),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::RosterServiceInMemory;
    use crate::services::seed::seed_activities;
    use mergington::data::Activities;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use mergington::serde_json::{self, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        let state = Arc::new(AppState::new(RosterServiceInMemory::seeded()));
        create_router(state, Path::new("static"))
    }

    async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    async fn participants(app: &Router, activity: &str) -> Vec<String> {
        let (_, body) = send(app, "GET", "/activities").await;
        serde_json::from_value(body[activity]["participants"].clone()).unwrap()
    }

    #[tokio::test]
    async fn root_redirects_to_static_index() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/static/index.html"
        );
    }

    #[tokio::test]
    async fn lists_all_activities() {
        let (status, body) = send(&app(), "GET", "/activities").await;
        assert_eq!(status, StatusCode::OK);

        let activities = body.as_object().unwrap();
        assert_eq!(activities.len(), 9);
        assert!(activities.contains_key("Chess Club"));
        assert!(activities.contains_key("Programming Class"));
    }

    #[tokio::test]
    async fn lists_activities_in_seed_order_on_the_wire() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/activities")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // Read the raw bytes: a `Value` map would re-sort the keys
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let raw = std::str::from_utf8(&body).unwrap();
        assert!(raw.find("\"Chess Club\"").unwrap() < raw.find("\"Art Studio\"").unwrap());

        let activities: Activities = serde_json::from_slice(&body).unwrap();
        let names: Vec<&str> = activities.names().map(|name| name.as_str()).collect();
        let expected: Vec<String> = seed_activities()
            .into_iter()
            .map(|(name, _)| name.as_str().to_string())
            .collect();
        assert_eq!(names, expected);
    }

    #[tokio::test]
    async fn activities_have_required_fields() {
        let (_, body) = send(&app(), "GET", "/activities").await;

        for (name, activity) in body.as_object().unwrap() {
            assert!(activity["description"].is_string(), "{name}");
            assert!(activity["schedule"].is_string(), "{name}");
            assert!(activity["max_participants"].is_u64(), "{name}");
            assert!(activity["participants"].is_array(), "{name}");

            let enrolled = activity["participants"].as_array().unwrap().len() as u64;
            assert!(
                enrolled <= activity["max_participants"].as_u64().unwrap(),
                "{name} has more participants than max capacity"
            );
        }
    }

    #[tokio::test]
    async fn gets_single_activity() {
        let app = app();

        let (status, body) = send(&app, "GET", "/activities/Debate%20Team").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["max_participants"], 16);

        let (status, body) = send(&app, "GET", "/activities/Nonexistent%20Club").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Activity not found");
    }

    #[tokio::test]
    async fn signup_success() {
        let app = app();
        let (status, body) = send(
            &app,
            "POST",
            "/activities/Chess%20Club/signup?email=newstudent@mergington.edu",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(
            body["message"]
                .as_str()
                .unwrap()
                .contains("Signed up newstudent@mergington.edu for Chess Club")
        );
        assert!(
            participants(&app, "Chess Club")
                .await
                .contains(&"newstudent@mergington.edu".to_string())
        );
    }

    #[tokio::test]
    async fn signup_duplicate_participant() {
        let app = app();
        let uri = "/activities/Chess%20Club/signup?email=test@mergington.edu";

        send(&app, "POST", uri).await;
        let before = participants(&app, "Chess Club").await;

        let (status, body) = send(&app, "POST", uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].as_str().unwrap().contains("already signed up"));
        assert_eq!(participants(&app, "Chess Club").await, before);
    }

    #[tokio::test]
    async fn signup_nonexistent_activity() {
        let (status, body) = send(
            &app(),
            "POST",
            "/activities/Nonexistent%20Club/signup?email=test@mergington.edu",
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["detail"].as_str().unwrap().contains("Activity not found"));
    }

    #[tokio::test]
    async fn signup_multiple_activities() {
        let app = app();
        let email = "multitasker@mergington.edu";

        let (status, _) = send(
            &app,
            "POST",
            &format!("/activities/Chess%20Club/signup?email={email}"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send(
            &app,
            "POST",
            &format!("/activities/Programming%20Class/signup?email={email}"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        assert!(participants(&app, "Chess Club").await.contains(&email.to_string()));
        assert!(
            participants(&app, "Programming Class")
                .await
                .contains(&email.to_string())
        );
    }

    #[tokio::test]
    async fn signup_without_email_is_rejected() {
        let (status, _) = send(&app(), "POST", "/activities/Chess%20Club/signup").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn signup_into_full_activity() {
        let app = app();
        // Chess Club seats 12 and starts with 2
        for i in 0..10 {
            let uri = format!("/activities/Chess%20Club/signup?email=student{i}@mergington.edu");
            let (status, _) = send(&app, "POST", &uri).await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, body) = send(
            &app,
            "POST",
            "/activities/Chess%20Club/signup?email=latecomer@mergington.edu",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Activity is full");
        assert_eq!(participants(&app, "Chess Club").await.len(), 12);
    }

    #[tokio::test]
    async fn unregister_success() {
        let app = app();
        send(&app, "POST", "/activities/Chess%20Club/signup?email=temp@mergington.edu").await;

        let (status, body) = send(
            &app,
            "DELETE",
            "/activities/Chess%20Club/unregister?email=temp@mergington.edu",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(
            body["message"]
                .as_str()
                .unwrap()
                .contains("Unregistered temp@mergington.edu from Chess Club")
        );
        assert!(
            !participants(&app, "Chess Club")
                .await
                .contains(&"temp@mergington.edu".to_string())
        );
    }

    #[tokio::test]
    async fn unregister_seeded_participant() {
        let app = app();
        let (status, _) = send(
            &app,
            "DELETE",
            "/activities/Chess%20Club/unregister?email=michael@mergington.edu",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(
            !participants(&app, "Chess Club")
                .await
                .contains(&"michael@mergington.edu".to_string())
        );
    }

    #[tokio::test]
    async fn unregister_not_signed_up() {
        let (status, body) = send(
            &app(),
            "DELETE",
            "/activities/Chess%20Club/unregister?email=notsignedup@mergington.edu",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].as_str().unwrap().contains("not signed up"));
    }

    #[tokio::test]
    async fn unregister_nonexistent_activity() {
        let (status, body) = send(
            &app(),
            "DELETE",
            "/activities/Nonexistent%20Club/unregister?email=test@mergington.edu",
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["detail"].as_str().unwrap().contains("Activity not found"));
    }

    #[tokio::test]
    async fn signup_and_unregister_workflow() {
        let app = app();
        let email = "workflow@mergington.edu";
        let initial = participants(&app, "Drama Club").await;

        let (status, _) = send(
            &app,
            "POST",
            &format!("/activities/Drama%20Club/signup?email={email}"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let after_signup = participants(&app, "Drama Club").await;
        assert_eq!(after_signup.len(), initial.len() + 1);
        assert!(after_signup.contains(&email.to_string()));

        let (status, _) = send(
            &app,
            "DELETE",
            &format!("/activities/Drama%20Club/unregister?email={email}"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let after_unregister = participants(&app, "Drama Club").await;
        assert_eq!(after_unregister, initial);
    }

    #[tokio::test]
    async fn health_reports_roster() {
        let (status, body) = send(&app(), "GET", "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["roster"]["activities"], 9);
        assert_eq!(body["roster"]["participants"], 15);
    }

    #[tokio::test]
    async fn serves_static_frontend() {
        let dir = std::env::temp_dir().join(format!("mergington-static-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<h1>Mergington High School</h1>").unwrap();

        let state = Arc::new(AppState::new(RosterServiceInMemory::seeded()));
        let app = create_router(state, &dir);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/static/index.html")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"<h1>Mergington High School</h1>");

        std::fs::remove_dir_all(&dir).ok();
    }
}
