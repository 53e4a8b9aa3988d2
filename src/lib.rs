//! # Engawa
//!
//! A terminal reader for a personal publishing site.
//!
//! ## Architecture
//!
//! Engawa follows a resolve-then-present pipeline:
//!
//! ```text
//! Source chain → Resolver → Selector / Paging → TUI → Overlay
//! ```
//!
//! - [`source`]: ordered fallback chain over the site's REST endpoints
//!   and a local static snapshot
//! - [`recommend`]: pinned-first bounded recommendation selection with a
//!   shuffled fallback
//! - [`paging`]: stateless page windows and the reveal-more → paged
//!   disclosure policy
//! - [`overlay`]: the reader overlay state machine, kept in sync with an
//!   in-app navigation history
//! - [`tui`]: terminal user interface built with ratatui
//!
//! ## Quick Start
//!
//! ```bash
//! # List posts (dynamic endpoint, snapshot fallback)
//! engawa posts
//!
//! # Read one post by slug or id
//! engawa show first-post
//!
//! # Launch the TUI
//! engawa tui
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the source
/// chain and resolver from the loaded configuration.
pub mod app;

/// Command-line interface using clap.
///
/// Defines the CLI structure and subcommands:
/// - `posts` / `products` - List a collection
/// - `show <key>` - Print one item's resolved body
/// - `recommend` - Print the recommended set
/// - `tui` - Launch the TUI
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/engawa/config.toml`, supporting:
/// - Site endpoint and snapshot directory
/// - Paging and recommendation policy knobs
/// - Custom UI colors and the tag palette
pub mod config;

/// Core domain models.
///
/// - [`ContentItem`](domain::ContentItem): a post or product as served by
///   the site, tolerant of legacy snapshot field names
/// - [`ContentKind`](domain::ContentKind): article vs. product
pub mod domain;

/// Reader overlay state machine.
///
/// - [`OverlayController`](overlay::OverlayController): open/close
///   transitions, history synchronization, stale-fetch discard
/// - [`NavigationPort`](overlay::NavigationPort): injectable history
///   abstraction, implemented by [`HistoryStack`](overlay::HistoryStack)
pub mod overlay;

/// Page windows and progressive disclosure.
///
/// - [`window`](paging::window) / [`clamp_index`](paging::clamp_index):
///   stateless pagination
/// - [`DisclosureState`](paging::DisclosureState): reveal-more mode that
///   permanently switches to paged mode past a threshold
pub mod paging;

/// Recommendation selection.
///
/// Pinned items win up to a per-kind cap; otherwise an unbiased
/// Fisher–Yates shuffle picks a bounded random sample.
pub mod recommend;

/// Markup rendering for the terminal.
///
/// Converts the site's markdown/HTML bodies into plain text suitable for
/// a ratatui paragraph.
pub mod render;

/// Content resolution through ordered fallback sources.
///
/// - [`ContentSource`](source::ContentSource): async trait over one source
/// - [`HttpSource`](source::HttpSource): the site's REST endpoints
/// - [`SnapshotSource`](source::SnapshotSource): local static snapshot
/// - [`ContentResolver`](source::ContentResolver): the fallback chains
pub mod source;

/// Terminal user interface.
///
/// Section-based layout (home / blog / product / about) with a reader
/// overlay. Keybindings: j/k navigate, Tab cycles sections, Enter opens
/// the overlay, Esc closes it, Backspace goes back in history, q quits.
pub mod tui;
