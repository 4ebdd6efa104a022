//! Waitboard Test Utils
//!
//! Provides shared testing utilities for the waitboard bot. This crate offers a builder
//! pattern for creating test contexts backed by a temporary directory, and factories that
//! fabricate Serenity models the way Discord's API would deliver them.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment owning a temporary panel config file location
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_store_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_panel_config(r#"{ "1": 2 }"#)
//!         .build()?;
//!
//!     let path = test.panel_config_path();
//!     // Load the store from `path`...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod serenity;
