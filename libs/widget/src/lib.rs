//! Widget-facing pieces of Doorlock: where the credentials come from and what the two
//! buttons show. Layout is left to the host toolkit; the model only carries content.
pub mod config;
pub mod family;
pub mod view_model;

pub use config::*;
pub use family::*;
pub use view_model::*;
