use std::sync::Arc;

use axum::{Json, extract::State};
use mergington::data::{HealthResponse, HealthStatus, RosterInfo, UptimeInfo};
use mergington::log;

use crate::services::RosterService;

fn human_readable_uptime(uptime_duration: chrono::TimeDelta) -> String {
    let uptime_seconds = uptime_duration.num_seconds();
    let days = uptime_duration.num_days();
    let hours = (uptime_seconds % 86400) / 3600;
    let minutes = (uptime_seconds % 3600) / 60;
    let secs = uptime_seconds % 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m {secs}s")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {secs}s")
    } else if minutes > 0 {
        format!("{minutes}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

fn service_uptime(started_at: chrono::DateTime<chrono::Utc>) -> UptimeInfo {
    let uptime = chrono::Utc::now().signed_duration_since(started_at);
    UptimeInfo {
        seconds: uptime.num_seconds(),
        human: human_readable_uptime(uptime),
    }
}

pub async fn get(State(state): State<Arc<crate::AppState>>) -> Json<HealthResponse> {
    let (status, roster) = match state.roster.stats().await {
        Ok(stats) => (
            HealthStatus::Healthy,
            RosterInfo {
                activities: stats.activities,
                participants: stats.participants,
            },
        ),
        Err(err) => {
            log::error!("Roster stats unavailable: {}", err);
            (
                HealthStatus::Degraded,
                RosterInfo {
                    activities: 0,
                    participants: 0,
                },
            )
        }
    };

    let health_response = HealthResponse {
        status,
        timestamp: chrono::Utc::now().to_rfc3339(),
        started_at: state.started_at.to_rfc3339(),
        uptime: service_uptime(state.started_at),
        roster,
    };

    log::debug!("Health check: {:?}", health_response);

    Json(health_response)
}
