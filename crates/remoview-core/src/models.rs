pub mod coordinates;
pub mod guesses;
pub mod location;
pub mod session;
pub mod validation;

pub use coordinates::Coordinates;
pub use guesses::{AreaType, Continent, GuessError, GuessField, UserGuesses, GENERIC_TERMS};
pub use location::RealLocationData;
pub use session::{SessionId, SessionResult};
pub use validation::{Evaluation, FeedbackSet, ScoreBand, ValidationFeedback, ValidationResult};
