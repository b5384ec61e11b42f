//! Test helpers for mocking dependencies in tests
//!
//! - `MockFileSystem`: In-memory filesystem simulation

mod mock_file_system;

pub use mock_file_system::MockFileSystem;
