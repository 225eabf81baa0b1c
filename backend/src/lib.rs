//! Users service library: a CRUD HTTP surface over a document store of users.
//!
//! Layout follows a hexagonal split: [`domain`] holds the record rules and the
//! ports, [`inbound`] the actix-web handlers, [`outbound`] the store adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
