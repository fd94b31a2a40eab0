// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters and
//! host shells implement. These traits use only domain types, so the viewer
//! can be driven without a window, a real clock or a media pipeline.
//!
//! # Available Ports
//!
//! - [`catalog`]: Source of story collections
//! - [`clock`]: Monotonic time
//! - [`host`]: Close and notice callbacks toward the host
//! - [`media`]: Play/pause control of the active item's media
//!
//! [`testing`] holds fake implementations of each port.

pub mod catalog;
pub mod clock;
pub mod host;
pub mod media;
pub mod testing;

// Re-export main types for convenience
pub use catalog::CollectionProvider;
pub use clock::{Clock, SystemClock};
pub use host::{CallbackHost, HostEvent, HostQueue, Notice, ViewerHost};
pub use media::{MediaController, MediaInfo, NullMedia};
