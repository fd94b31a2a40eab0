// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`mock_catalog`]: Demo stories or a TOML catalog (implements [`CollectionProvider`])
//! - [`preview_media`]: Filesystem-backed media checks (implements [`MediaController`])
//!
//! [`CollectionProvider`]: crate::application::port::CollectionProvider
//! [`MediaController`]: crate::application::port::MediaController

pub mod mock_catalog;
pub mod preview_media;

pub use mock_catalog::MockCatalog;
pub use preview_media::{PlaybackState, PreviewMedia};
