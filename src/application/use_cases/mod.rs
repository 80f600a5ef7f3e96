/// Use cases module containing application business logic orchestration
mod validate_build;

pub use validate_build::ValidateBuildUseCase;
