//! Recording HTTP client shared by the API tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::params::Params;
use crate::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};

use super::{Credentials, SailthruClient};

pub const TEST_API_KEY: &str = "test-key";
pub const TEST_SECRET: &str = "test-secret";

/// Mock HTTP client that returns a configurable sequence of responses
/// and records every request.
#[derive(Debug)]
pub struct MockClient {
    responses: Mutex<Vec<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockClient {
    pub fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    pub fn json(body: &str) -> Self {
        Self::with_status(http::StatusCode::OK, body)
    }

    pub fn with_status(status: http::StatusCode, body: &str) -> Self {
        Self::new(vec![Ok(HttpResponse::new(
            status,
            http::HeaderMap::new(),
            body.as_bytes().to_vec(),
        ))])
    }

    pub fn failing(error: HttpError) -> Self {
        Self::new(vec![Err(error)])
    }

    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Decodes the parameters of the single captured request, from the
    /// body for POST and from the query string otherwise.
    pub fn sent_params(&self) -> Params {
        let requests = self.captured_requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        let request = &requests[0];

        let encoded = if request.method == http::Method::POST {
            request.body_text().unwrap_or_default().to_string()
        } else {
            request.url.query().unwrap_or_default().to_string()
        };

        Params::from_form(&encoded)
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        self.responses.lock().unwrap().remove(0)
    }
}

pub fn test_client(mock: MockClient) -> SailthruClient<MockClient> {
    SailthruClient::new(
        mock,
        Credentials::new(TEST_API_KEY, TEST_SECRET),
        url::Url::parse("https://api.example.com").unwrap(),
    )
}
