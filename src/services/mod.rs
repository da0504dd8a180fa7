pub mod preferences;
pub mod response;
pub mod scoring;
pub mod selector;
