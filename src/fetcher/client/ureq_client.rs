use std::io::Read;
use std::time::Duration;

use ureq::Error::Status;

use super::{HttpClient, HttpResponse};

const USER_AGENT: &str = "UbuntuImageFetcher/1.0 (+https://example.com)";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking client: one GET per call, fixed identifying User-Agent, 10
/// second timeout, no retries.
pub struct UreqClient {
    agent: ureq::Agent,
}

impl HttpClient for UreqClient {
    fn get(&self, url: &str) -> HttpResponse {
        match self.agent.get(url).call() {
            Ok(response) => {
                let body = response
                    .into_reader()
                    .bytes()
                    .collect::<Result<Vec<u8>, _>>();

                match body {
                    Ok(body) => HttpResponse::Body(body),
                    Err(err) => HttpResponse::Transport(err.to_string()),
                }
            }

            Err(Status(code, _)) => HttpResponse::Status(code),

            Err(err) => HttpResponse::Transport(err.to_string()),
        }
    }
}

impl UreqClient {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build();

        UreqClient { agent }
    }
}

impl Default for UreqClient {
    fn default() -> Self {
        Self::new()
    }
}
