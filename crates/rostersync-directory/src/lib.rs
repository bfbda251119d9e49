//! # Directory Service Client
//!
//! Client for the membership directory: the external system of record for
//! membership attributes, queried by criteria filter.
//!
//! ## Crate Organization
//!
//! - [`criteria`] - Criteria filter model and flat-expression parsing
//! - [`person`] - Person records and attribute extraction
//! - [`client`] - HTTP client and membership index construction
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```ignore
//! use rostersync_directory::{CriteriaFilter, DirectoryClient};
//!
//! let criteria = CriteriaFilter::parse("class=2015,class=2016");
//! let client = DirectoryClient::new("https://directory.example.com", "api-key")?;
//! let membership = client.fetch_membership(&criteria).await?;
//! for (email, name) in &membership {
//!     println!("{name} <{email}>");
//! }
//! ```

pub mod client;
pub mod criteria;
pub mod error;
pub mod person;

pub use client::{DirectoryClient, MembershipIndex};
pub use criteria::CriteriaFilter;
pub use error::{DirectoryError, DirectoryResult, PersonFieldError};
pub use person::{PersonAttribute, PersonRecord, ATTR_EMAIL, ATTR_NAME};
