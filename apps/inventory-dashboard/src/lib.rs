//! Inventory Dashboard
//!
//! Terminal client for the inventory API: lists products with their stock
//! badges, shows aggregate counts and sends stock updates.
//!
//! - [`client`]: `reqwest` client that unwraps the `{success, data | error}` envelope
//! - [`state`]: the dashboard state machine and user intents
//! - [`view`]: pure text rendering
//! - [`app`]: the interactive command loop

pub mod app;
pub mod client;
pub mod state;
pub mod view;

pub use app::{render_once, Dashboard};
pub use client::{ClientError, ClientResult, InventoryClient};
pub use state::{DashboardState, Event, Intent, IntentParseError, LoadPhase};
pub use view::{render, DashboardView};
