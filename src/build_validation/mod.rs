/// Build validation domain: build state, compatibility rules and pricing
pub mod domain;
pub mod policies;
pub mod services;
