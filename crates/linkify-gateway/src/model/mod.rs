mod link;

pub use link::{LinkResponse, ShortenRequest};
