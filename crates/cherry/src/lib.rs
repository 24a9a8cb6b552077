//! Cherry: small interaction helpers for mobile web pages.
//!
//! - Link containers (`cherry-link`): table rows, list items and blocks that
//!   navigate to the first link they contain when tapped.
//! - Floating menus (`cherry-menu-button` + `cherry-menu`): a trigger opens
//!   its panel, and a tap outside both closes it.
//!
//! The core (`dom`, `menu`, `link`, `cherry`) is generic over the host tree so
//! it runs natively in tests. `platform::browser` binds it to `web_sys`.

pub mod cherry;
pub mod config;
pub mod dom;
pub mod error;
pub mod link;
pub mod menu;
pub mod platform;
pub mod search;

#[cfg(test)]
mod testing;

pub use cherry::Cherry;
pub use config::CherryConfig;
pub use dom::{ancestors, closest, Document, Element, Node};
pub use error::CherryError;
pub use menu::{MenuController, MenuPair, MenuState, PanelDisplay, Transition};
