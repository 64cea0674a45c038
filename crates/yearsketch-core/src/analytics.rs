//! Usage analytics -- fire-and-forget event delivery.
//!
//! Two event kinds: a page view when a session opens, and a report event
//! carrying the answer aggregate when results are generated. Delivery is
//! best-effort: failures are swallowed, never retried, never surfaced.

use serde::Serialize;
use url::Url;

use crate::answers::AnswerSet;
use crate::i18n::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    PageView,
    ReportGenerated,
}

/// Environment details attached to every event. All optional; a headless
/// host simply leaves them unset.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClientInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
}

#[derive(Debug, Serialize)]
struct TrackEvent<'a> {
    event: EventKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    locale: Option<&'a str>,
    #[serde(flatten)]
    client: &'a ClientInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    answers: Option<&'a AnswerSet>,
}

/// Fire-and-forget analytics sender.
///
/// Constructed disabled when the endpoint is absent or unparsable; every
/// send on a disabled client is a no-op.
#[derive(Debug, Clone)]
pub struct AnalyticsClient {
    endpoint: Option<Url>,
    client_info: ClientInfo,
    http: reqwest::Client,
}

impl AnalyticsClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: Url::parse(endpoint).ok(),
            client_info: ClientInfo::default(),
            http: reqwest::Client::new(),
        }
    }

    pub fn disabled() -> Self {
        Self {
            endpoint: None,
            client_info: ClientInfo::default(),
            http: reqwest::Client::new(),
        }
    }

    pub fn with_client_info(mut self, client_info: ClientInfo) -> Self {
        self.client_info = client_info;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.endpoint.is_some()
    }

    pub async fn page_view(&self, locale: Locale) {
        self.send(TrackEvent {
            event: EventKind::PageView,
            locale: Some(locale.as_str()),
            client: &self.client_info,
            answers: None,
        })
        .await;
    }

    pub async fn report_generated(&self, locale: Locale, answers: &AnswerSet) {
        self.send(TrackEvent {
            event: EventKind::ReportGenerated,
            locale: Some(locale.as_str()),
            client: &self.client_info,
            answers: Some(answers),
        })
        .await;
    }

    async fn send(&self, event: TrackEvent<'_>) {
        let Some(endpoint) = &self.endpoint else {
            return;
        };
        // Best effort. Analytics never break the session.
        let _ = self
            .http
            .post(endpoint.clone())
            .json(&event)
            .send()
            .await;
    }
}
