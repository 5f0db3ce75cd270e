//! Queued, animated message bar banners.
//!
//! A [`MessageBar`] accepts short-lived banners, slides them in from a screen
//! edge one at a time and slides them back out after a tap, a timeout or an
//! explicit request. Drawing and text measurement happen behind
//! [`PresentationSurface`]; time is supplied by the host through
//! [`MessageBar::tick`].

pub mod animation;
pub mod config;
pub mod error;
pub mod event;
pub mod geometry;
pub mod layout;
mod manager;
mod queue;
pub mod request;
pub mod style;
pub mod surface;
pub mod testing;
pub mod timer;
pub mod types;

pub use config::BarConfig;
pub use error::{BarError, Result};
pub use event::{BarEvent, Ticket, TicketState};
pub use manager::MessageBar;
pub use request::{BannerId, BannerKey, BannerRequest};
pub use style::{BannerStyle, Rgba, StyleSheet};
pub use surface::{LazySurface, PresentationSurface};
pub use types::{DiscardCause, DismissReason, Edge, Kind, Phase};
