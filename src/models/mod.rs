mod movie;
mod preferences;
mod recommendation;

pub use movie::Movie;
pub use preferences::{ChatTurn, PreferenceSet};
pub use recommendation::{Recommendation, PLACEHOLDER_POSTER};
