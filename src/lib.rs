mod fetcher;

pub use fetcher::{
    derive_filename, FetchError, FetchOutcome, Fetcher, HttpClient, HttpResponse, UreqClient,
    DEFAULT_DIRECTORY,
};
