//! Host-owned structures and injected capabilities
//!
//! Everything here is created, owned, and destroyed by the host framework
//! per request or operation. Handlers borrow these structures for the
//! duration of one call and never retain them.

mod entity;
mod services;

pub use entity::{TermEntity, TextItem};
pub use services::{
    AdminContext, FixedAdminContext, FixedThemeConfig, HostServices, ThemeConfig,
};
