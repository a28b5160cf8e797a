//! Collective View
//!
//! Framework-free view-model layer for the collective page components:
//! - models: records as delivered by the API
//! - presenter: tier card, hero banner and hosts cover derivations
//! - intl: ICU messages and money formatting
//! - routes: named route resolution
//! - truncate, config, error

pub mod config;
pub mod error;
pub mod intl;
pub mod models;
pub mod presenter;
pub mod routes;
pub mod truncate;

pub use config::{LinkConfig, PresenterOptions, ViewConfig};
pub use error::{MessageError, RouteError, ViewError, ViewResult};
pub use intl::{Intl, MessageArgs, MessagePart, MoneyAmount};
pub use routes::{RouteParams, RouteTable};
