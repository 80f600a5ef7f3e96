/// Mock implementations for testing
mod mock_build_reader;
mod mock_catalog_reader;
mod mock_progress_reporter;

pub use mock_build_reader::MockBuildReader;
pub use mock_catalog_reader::MockCatalogReader;
pub use mock_progress_reporter::MockProgressReporter;
