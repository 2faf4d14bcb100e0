mod health;
mod utterances;

pub use health::health_handler;
pub use utterances::utterance_handler;
