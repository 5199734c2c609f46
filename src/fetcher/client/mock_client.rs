use std::cell::RefCell;

use super::{HttpClient, HttpResponse};

/// Hands back a scripted queue of responses, one per `get`. An exhausted
/// queue answers with a transport error.
pub struct MockClient {
    responses: RefCell<Vec<HttpResponse>>,
}

impl HttpClient for MockClient {
    fn get(&self, _url: &str) -> HttpResponse {
        let mut responses = self.responses.borrow_mut();

        if responses.is_empty() {
            HttpResponse::Transport("mock response queue exhausted".to_string())
        } else {
            responses.remove(0)
        }
    }
}

impl MockClient {
    pub fn new(responses: Vec<HttpResponse>) -> Self {
        Self {
            responses: RefCell::new(responses),
        }
    }
}
