//! Core library for blogapi
//!
//! This crate implements the **Functional Core** of the blogapi application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`blogapi_core`** (this crate): the author/blog data model and the
//!   in-memory entity store, with zero I/O
//! - **`blogapi`**: CLI, HTTP transport and logging (the Imperative Shell)
//!
//! The store is a plain value. Whoever owns it decides how access is shared;
//! the HTTP shell keeps it behind a single lock.
//!
//! # Module Organization
//!
//! - [`model`]: Author and blog records plus the request shapes that create
//!   or change them
//! - [`seed`]: The fixed dataset every new store starts with
//! - [`store`]: The entity store and its operations
//!
//! # Example Usage
//!
//! ```rust
//! use blogapi_core::model::BlogRequest;
//! use blogapi_core::store::EntityStore;
//!
//! let mut store = EntityStore::seeded();
//!
//! // Positions are 1-based: 2 addresses the second stored blog
//! let blog = store.like_blog(2).unwrap();
//! assert_eq!(blog.likes, 8);
//!
//! let created = store
//!     .create_blog(BlogRequest {
//!         title: "Hello".to_string(),
//!         author_id: 1,
//!         ..Default::default()
//!     })
//!     .unwrap();
//! assert_eq!(created.author.name, "Critic");
//! ```

pub mod model;
pub mod seed;
pub mod store;
