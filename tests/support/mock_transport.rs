use async_trait::async_trait;
use destination_creator::webc::{self, HttpTransport, WebRequest, WebResponse};
use reqwest::Method;
use std::collections::VecDeque;
use std::sync::Mutex;

/// An `HttpTransport` answering with scripted responses, in order, and recording every request.
///
/// When the script is exhausted, it answers `500`.
#[derive(Default)]
pub struct MockTransport {
	responses: Mutex<VecDeque<WebResponse>>,
	requests: Mutex<Vec<WebRequest>>,
}

impl MockTransport {
	pub fn with_statuses(statuses: &[u16]) -> Self {
		let responses = statuses.iter().map(|status| WebResponse::new(*status, "")).collect();
		Self {
			responses: Mutex::new(responses),
			requests: Mutex::default(),
		}
	}

	pub fn with_responses(responses: Vec<WebResponse>) -> Self {
		Self {
			responses: Mutex::new(responses.into()),
			requests: Mutex::default(),
		}
	}

	pub fn requests(&self) -> Vec<WebRequest> {
		self.requests.lock().map(|requests| requests.clone()).unwrap_or_default()
	}

	pub fn requests_with_method(&self, method: &Method) -> Vec<WebRequest> {
		self.requests().into_iter().filter(|req| &req.method == method).collect()
	}
}

#[async_trait]
impl HttpTransport for MockTransport {
	async fn execute(&self, request: WebRequest) -> webc::Result<WebResponse> {
		if let Ok(mut requests) = self.requests.lock() {
			requests.push(request);
		}

		let response = self.responses.lock().ok().and_then(|mut responses| responses.pop_front());

		Ok(response.unwrap_or_else(|| WebResponse::new(500, "no scripted response")))
	}
}
