//! Housing Test Utils
//!
//! Shared testing utilities for the housing backend. The crate offers a builder for
//! test contexts backed by in-memory SQLite databases, plus factories that insert
//! entities with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Errors that can occur during test setup
//! - **factory**: Entity factories with builder-style overrides
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn assigns_room() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_housing_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let chambre = factory::create_chambre(db, None).await?;
//!     // ...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
