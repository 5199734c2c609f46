mod ureq_client;

pub use ureq_client::UreqClient;

#[cfg(test)]
mod mock_client;

#[cfg(test)]
pub use mock_client::MockClient;

/// What one GET produced at the wire level. Status codes outside 2xx come
/// back as `Status`; everything that kept a response from arriving at all
/// (DNS, refused connections, timeouts, truncated bodies) is `Transport`.
#[derive(Debug)]
pub enum HttpResponse {
    Body(Vec<u8>),
    Status(u16),
    Transport(String),
}

pub trait HttpClient {
    fn get(&self, url: &str) -> HttpResponse;
}
