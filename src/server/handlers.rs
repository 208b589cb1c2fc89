use std::time::Instant;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sysinfo::{ProcessesToUpdate, System};

use super::{cache_control, with_cache_control, AppState, HEALTH_PATH, NEWS_PATH};
use crate::news::{NewsError, NewsOutcome, ServedFrom};
use crate::storage::{Article, CacheStatus};

const REFRESHED_MESSAGE: &str = "News refreshed successfully";
const STALE_REFRESH_MESSAGE: &str = "Refresh failed, serving cached news";

#[derive(Debug, Default, Deserialize)]
pub struct NewsQuery {
    refresh: Option<String>,
}

impl NewsQuery {
    fn force_refresh(&self) -> bool {
        self.refresh.as_deref() == Some("true")
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NewsBody<'a> {
    success: bool,
    data: &'a [Article],
    cached: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    stale: Option<bool>,
    last_update: Option<DateTime<Utc>>,
    count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<&'a str>,
    source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    feed_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NewsErrorBody<'a> {
    success: bool,
    error: String,
    data: &'a [Article],
    count: usize,
    timestamp: DateTime<Utc>,
    source: &'static str,
}

pub async fn get_news(State(state): State<AppState>, Query(query): Query<NewsQuery>) -> Response {
    let force = query.force_refresh();
    tracing::debug!(force, "GET {}", NEWS_PATH);
    let result = state.service.get_articles(force).await;
    news_response(result, state.service.feed_url(), None)
}

pub async fn refresh_news(State(state): State<AppState>) -> Response {
    tracing::info!("Manual refresh requested");
    let result = state.service.refresh().await;
    let message = match &result {
        Ok(outcome) if outcome.stale() => Some(STALE_REFRESH_MESSAGE),
        Ok(_) => Some(REFRESHED_MESSAGE),
        Err(_) => None,
    };
    news_response(result, state.service.feed_url(), message)
}

fn news_response(
    result: Result<NewsOutcome, NewsError>,
    feed_url: &str,
    message: Option<&'static str>,
) -> Response {
    match result {
        Ok(outcome) => {
            let body = NewsBody {
                success: true,
                data: outcome.articles(),
                cached: outcome.cached(),
                stale: outcome.stale().then_some(true),
                last_update: outcome.snapshot.last_update,
                count: outcome.snapshot.count(),
                warning: outcome.warning.as_deref(),
                source: outcome.served_from.as_str(),
                feed_url: (outcome.served_from == ServedFrom::Fresh).then_some(feed_url),
                message,
            };
            let cache_header = match outcome.served_from {
                ServedFrom::Cache => cache_control::CACHE_HIT,
                ServedFrom::Fresh => cache_control::FRESH,
                ServedFrom::StaleCache => cache_control::NO_CACHE,
            };
            with_cache_control(Json(body).into_response(), cache_header)
        }
        Err(e) => {
            let body = NewsErrorBody {
                success: false,
                error: e.to_string(),
                data: &[],
                count: 0,
                timestamp: Utc::now(),
                source: "error",
            };
            let response = (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
            with_cache_control(response, cache_control::NO_CACHE)
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthBody {
    status: &'static str,
    timestamp: DateTime<Utc>,
    cache: CacheStatus,
}

pub async fn health(State(state): State<AppState>) -> Response {
    Json(HealthBody {
        status: "OK",
        timestamp: Utc::now(),
        cache: state.service.cache_status(),
    })
    .into_response()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FeedProbeBody<'a> {
    url: &'a str,
    accessible: bool,
    status: u16,
    status_text: String,
    content_type: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiInfo {
    news_endpoint: &'static str,
    health_endpoint: &'static str,
    methods: [&'static str; 2],
    cache: String,
    cors: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SystemInfo {
    version: &'static str,
    platform: &'static str,
    memory_bytes: u64,
    uptime: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExtendedHealthBody<'a> {
    status: &'static str,
    timestamp: DateTime<Utc>,
    response_time: String,
    feed: FeedProbeBody<'a>,
    api: ApiInfo,
    system: SystemInfo,
    cache: CacheStatus,
}

#[derive(Debug, Serialize)]
struct ProbeErrorInfo {
    message: String,
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Serialize)]
struct UnreachableFeed<'a> {
    url: &'a str,
    accessible: bool,
    error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExtendedHealthErrorBody<'a> {
    status: &'static str,
    timestamp: DateTime<Utc>,
    response_time: String,
    error: ProbeErrorInfo,
    feed: UnreachableFeed<'a>,
}

pub async fn extended_health(State(state): State<AppState>) -> Response {
    let started = Instant::now();
    let feed_url = state.service.feed_url();
    let probe = state.service.probe_feed().await;
    let response_time = format!("{}ms", started.elapsed().as_millis());

    match probe {
        Ok(report) => {
            let body = ExtendedHealthBody {
                status: "OK",
                timestamp: Utc::now(),
                response_time,
                feed: FeedProbeBody {
                    url: feed_url,
                    accessible: report.accessible,
                    status: report.status,
                    status_text: report.status_text,
                    content_type: report.content_type,
                },
                api: ApiInfo {
                    news_endpoint: NEWS_PATH,
                    health_endpoint: HEALTH_PATH,
                    methods: ["GET", "POST"],
                    cache: format!(
                        "{} seconds",
                        state.service.cache().freshness_window().as_secs()
                    ),
                    cors: "enabled",
                },
                system: SystemInfo {
                    version: env!("CARGO_PKG_VERSION"),
                    platform: std::env::consts::OS,
                    memory_bytes: process_memory_bytes(),
                    uptime: format!("{}s", state.started_at.elapsed().as_secs()),
                },
                cache: state.service.cache_status(),
            };
            Json(body).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Feed probe failed");
            let message = e.to_string();
            let body = ExtendedHealthErrorBody {
                status: "ERROR",
                timestamp: Utc::now(),
                response_time,
                error: ProbeErrorInfo {
                    message: message.clone(),
                    kind: e.kind(),
                },
                feed: UnreachableFeed {
                    url: feed_url,
                    accessible: false,
                    error: message,
                },
            };
            (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response()
        }
    }
}

/// Resident memory of this process, or 0 if it cannot be read.
fn process_memory_bytes() -> u64 {
    let Ok(pid) = sysinfo::get_current_pid() else {
        return 0;
    };
    let mut system = System::new();
    system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
    system.process(pid).map_or(0, |process| process.memory())
}
