//! Casdoor API client.
//!
//! Authenticated CRUD access to users, roles and permissions of a Casdoor
//! organization. Every endpoint answers with the same JSON envelope
//! (`{status, msg, data, data2}`); the client checks `status`, hands back
//! `data` on success and turns `msg` into an error otherwise.
//!
//! ```no_run
//! use casdoor_client::{Client, Config, Role};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::new(
//!     "https://door.casdoor.com",
//!     "client-id",
//!     "client-secret",
//!     "",
//!     "my-org",
//!     "my-app",
//! );
//! let client = Client::new(config)?;
//!
//! let affected = client.add_role(&Role::new("my-org", "editor")).await?;
//! println!("role created: {}", affected);
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all)]

pub mod client;
pub mod config;
pub mod entity;
pub mod error;
pub mod secure;

pub use client::{Client, HttpTransport, Response, TransportResponse};
pub use config::Config;
pub use entity::resource::UploadedResource;
pub use entity::{Entity, Permission, Resource, Role, User};
pub use error::{SdkError, SdkResult};
