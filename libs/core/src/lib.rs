//! Doorlock core contracts and value types.
//!
//! This crate builds the deep links handed to the Doorlock companion application. A link names
//! a command (`lock` or `unlock`) and carries the API key, secret key and device identifier as
//! query parameters. Building a link is a pure computation; opening it is left to a
//! [`LinkDispatcher`] supplied by the host.
//!
//! ```
//! use doorlock_core::{Command, Credentials, DeviceId, build};
//!
//! let endpoint = build(
//!     "com.example.app",
//!     Command::Lock,
//!     &Credentials::new("AB+CD", "s3cr3t"),
//!     &DeviceId::new("dev 1"),
//! )?;
//! assert_eq!(
//!     endpoint.as_str(),
//!     "com.example.app:///lock?APIKey=AB%2BCD&secretKey=s3cr3t&deviceID=dev%201"
//! );
//! # Ok::<(), doorlock_core::BuildError>(())
//! ```
pub mod command;
pub mod credentials;
pub mod dispatch;
pub mod endpoint;
pub mod error;
pub mod scheme;

pub use command::*;
pub use credentials::*;
pub use dispatch::*;
pub use endpoint::*;
pub use error::*;
pub use scheme::*;
