mod request;
mod response;

pub use request::SubmitSessionRequest;
pub use response::{CoordinatesResponse, HealthResponse};
