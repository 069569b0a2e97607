//! Request plumbing shared by every service.
//!
//! # Design
//! `Requester` is the single capability the services hold: it composes
//! URLs, builds `HttpRequest` values, hands them to the injected
//! `Transport` and interprets the response. It holds only immutable data
//! behind an `Arc`, so clones are cheap and concurrent use needs no locks.
//!
//! Decoding happens in two phases. A body that is not JSON is a
//! `Decode` error; JSON that does not fit the declared type is a
//! `Validation` error. When `ClientConfig::validate` is set the decoded
//! value also goes through `Validate`.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::query::{build_url, QueryParams};
use crate::validate::{Validate, ValidationError};

struct Inner {
    api_key: String,
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

#[derive(Clone)]
pub struct Requester {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for Requester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Requester")
            .field("base_url", &self.inner.config.base_url)
            .field("validate", &self.inner.config.validate)
            .finish_non_exhaustive()
    }
}

impl Requester {
    pub(crate) fn new(api_key: String, config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: Arc::new(Inner {
                api_key,
                config,
                transport,
            }),
        }
    }

    /// `{base_url}/{route}{path}?{params}&key=...`
    pub fn url(&self, route: &str, path: &str, params: &QueryParams) -> Result<String> {
        let base = format!("{}/{route}", self.inner.config.base_url);
        build_url(&base, path, params, &self.inner.api_key)
    }

    pub fn build_get(&self, route: &str, path: &str, params: &QueryParams) -> Result<HttpRequest> {
        Ok(HttpRequest {
            method: HttpMethod::Get,
            url: self.url(route, path, params)?,
            headers: json_headers(),
            body: None,
        })
    }

    pub fn build_post<B: Serialize + ?Sized>(
        &self,
        route: &str,
        path: &str,
        params: &QueryParams,
        body: &B,
    ) -> Result<HttpRequest> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.url(route, path, params)?,
            headers: json_headers(),
            body: Some(body),
        })
    }

    /// Send `request` once and decode the answer as `T`.
    pub fn execute<T: DeserializeOwned + Validate>(&self, request: HttpRequest) -> Result<T> {
        tracing::debug!(
            method = request.method.as_str(),
            endpoint = request.endpoint(),
            "sending request"
        );

        let response = self.inner.transport.send(&request).inspect_err(|err| {
            tracing::warn!(endpoint = request.endpoint(), "transport failure: {err}");
        })?;

        tracing::trace!(status = response.status, endpoint = request.endpoint(), "received response");

        self.parse(&request, response)
    }

    /// Interpret a response received for `request`.
    pub fn parse<T: DeserializeOwned + Validate>(&self, request: &HttpRequest, response: HttpResponse) -> Result<T> {
        check_status(request, &response)?;

        let value: serde_json::Value = serde_json::from_str(&response.body).map_err(|e| ApiError::Decode {
            url: request.redacted_url(),
            message: e.to_string(),
        })?;

        let decoded: T = serde_json::from_value(value).map_err(|e| ValidationError::new("$", e.to_string()))?;

        if self.inner.config.validate {
            decoded.validate()?;
        }

        Ok(decoded)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

/// Map any status outside 200..=299 to `RequestFailed`.
fn check_status(request: &HttpRequest, response: &HttpResponse) -> Result<()> {
    if response.is_success() {
        return Ok(());
    }

    tracing::warn!(
        status = response.status,
        endpoint = request.endpoint(),
        "request failed"
    );

    Err(ApiError::RequestFailed {
        url: request.redacted_url(),
        status: response.status,
        status_text: response.status_text.clone(),
    })
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;

    /// Records every request and replays canned responses in order.
    #[derive(Default)]
    pub struct RecordingTransport {
        pub requests: Mutex<Vec<HttpRequest>>,
        responses: Mutex<VecDeque<HttpResponse>>,
    }

    impl RecordingTransport {
        pub fn replying(status: u16, body: &str) -> Arc<Self> {
            let transport = Self::default();
            transport.push(status, body);
            Arc::new(transport)
        }

        pub fn push(&self, status: u16, body: &str) {
            self.responses.lock().unwrap().push_back(HttpResponse {
                status,
                status_text: if status == 200 { "OK" } else { "Bad Request" }.to_string(),
                body: body.to_string(),
            });
        }

        pub fn last(&self) -> HttpRequest {
            self.requests.lock().unwrap().last().cloned().expect("no request was sent")
        }

        pub fn count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    impl Transport for RecordingTransport {
        fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
            self.requests.lock().unwrap().push(request.clone());
            self.responses.lock().unwrap().pop_front().ok_or_else(|| ApiError::Transport {
                url: request.redacted_url(),
                message: "no canned response".to_string(),
            })
        }
    }

    pub fn requester(transport: Arc<RecordingTransport>, validate: bool) -> Requester {
        let config = ClientConfig::new()
            .with_base_url("https://api.example.test")
            .with_validation(validate);
        Requester::new("test-key".to_string(), config, transport)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::testing::*;
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    struct Cut {
        cut: i32,
    }

    impl Validate for Cut {
        fn validate(&self) -> crate::validate::ValidationResult {
            crate::validate::check_cut("cut", self.cut)
        }
    }

    #[test]
    fn build_get_composes_route_path_and_key() {
        let transport = RecordingTransport::replying(200, "{}");
        let req = requester(transport, false)
            .build_get("stats", "/waitlist/v1", &QueryParams::new().with("id", "g1"))
            .unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "https://api.example.test/stats/waitlist/v1?id=g1&key=test-key");
        assert!(req.body.is_none());
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn build_post_serializes_body() {
        let transport = RecordingTransport::replying(200, "{}");
        let ids = vec!["a".to_string(), "b".to_string()];
        let req = requester(transport, false)
            .build_post("games", "/historylow/v1", &QueryParams::new(), &ids)
            .unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.body.as_deref(), Some(r#"["a","b"]"#));
    }

    #[test]
    fn non_success_status_is_request_failed() {
        let transport = RecordingTransport::replying(400, r#"{"status":400}"#);
        let r = requester(transport, false);
        let req = r.build_get("games", "/info/v2", &QueryParams::new()).unwrap();
        let err = r.execute::<HashMap<String, Option<String>>>(req).unwrap_err();
        match err {
            ApiError::RequestFailed { url, status, status_text } => {
                assert_eq!(status, 400);
                assert_eq!(status_text, "Bad Request");
                assert!(url.ends_with("key=***"), "key must be redacted: {url}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_body_is_decode_error() {
        let transport = RecordingTransport::replying(200, "<html>");
        let r = requester(transport, false);
        let req = r.build_get("games", "/info/v2", &QueryParams::new()).unwrap();
        let err = r.execute::<Vec<Cut>>(req).unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[test]
    fn wrong_shape_is_validation_error() {
        let transport = RecordingTransport::replying(200, r#"[{"cut":"ten"}]"#);
        let r = requester(transport, false);
        let req = r.build_get("games", "/x", &QueryParams::new()).unwrap();
        let err = r.execute::<Vec<Cut>>(req).unwrap_err();
        assert!(matches!(err, ApiError::Validation(ref e) if e.path == "$"));
    }

    #[test]
    fn bounds_are_checked_only_when_enabled() {
        let body = r#"[{"cut":120}]"#;

        let r = requester(RecordingTransport::replying(200, body), false);
        let req = r.build_get("deals", "/v2", &QueryParams::new()).unwrap();
        let lenient: Vec<Cut> = r.execute(req).unwrap();
        assert_eq!(lenient[0].cut, 120);

        let r = requester(RecordingTransport::replying(200, body), true);
        let req = r.build_get("deals", "/v2", &QueryParams::new()).unwrap();
        let err = r.execute::<Vec<Cut>>(req).unwrap_err();
        assert!(matches!(err, ApiError::Validation(ref e) if e.path == "[0].cut"));
    }

    #[test]
    fn each_execute_sends_exactly_one_request() {
        let transport = RecordingTransport::replying(200, "[]");
        transport.push(200, "[]");
        let r = requester(transport.clone(), false);
        for _ in 0..2 {
            let req = r.build_get("stats", "/most-popular/v1", &QueryParams::new()).unwrap();
            let _: Vec<Cut> = r.execute(req).unwrap();
        }
        assert_eq!(transport.count(), 2);
    }
}
