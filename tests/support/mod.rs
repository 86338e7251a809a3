//! Offline transport shared by the behaviour tests.

#![allow(dead_code)]

use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

use livemark_core::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Answers every request with the same canned response and records what was asked.
pub struct FixtureHttpClient {
    response: Result<HttpResponse, HttpError>,
    redirect_to: Option<String>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FixtureHttpClient {
    pub fn respond(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            response: Ok(HttpResponse::new(status, body, "")),
            redirect_to: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn fail(message: &str) -> Self {
        Self {
            response: Err(HttpError::new(message)),
            redirect_to: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Report `final_url` as the URL the response was served from.
    pub fn redirected_to(mut self, final_url: &str) -> Self {
        self.redirect_to = Some(final_url.to_string());
        self
    }

    pub fn recorded_requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }
}

impl HttpClient for FixtureHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let final_url = self
            .redirect_to
            .clone()
            .unwrap_or_else(|| request.url.clone());
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request);

        let response = self.response.clone().map(|mut response| {
            response.final_url = final_url;
            response
        });
        Box::pin(async move { response })
    }
}
