mod coordinates;
mod health;
mod sessions;

pub use coordinates::new_coordinates;
pub use health::health_check;
pub use sessions::{get_session, list_sessions, submit_session};
