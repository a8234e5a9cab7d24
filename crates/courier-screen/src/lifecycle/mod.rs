//! # Screen Lifecycle
//!
//! Starts the screen actor, wires its collaborators in through the actor context, runs
//! the one-shot location pipeline, and shuts everything down again.
//!
//! ## Startup
//!
//! 1. The actor is created in the loading state and spawned with a [`ScreenContext`]
//!    holding the notifier, map view and ping transport.
//! 2. The location pipeline is spawned separately. When it finishes it sends exactly one
//!    `LocationResolved` event through a clone of the client.
//!
//! Every other input (toggle, marker selection, ping) arrives through
//! [`CourierApp::client`]. Until the location event has been applied those inputs are
//! rejected with [`ScreenError::NotReady`]; await [`CourierApp::wait_until_ready`] first.
//!
//! ## Shutdown
//!
//! Dropping the last client closes the mailbox; the actor runs `on_stop` and exits.
//! Pings already in flight keep running to completion and still raise their alert.
//!
//! ## Observability
//!
//! Call [`setup_tracing`](screen_framework::tracing::setup_tracing) once at startup:
//!
//! ```bash
//! RUST_LOG=info courier-screen      # Compact logs
//! RUST_LOG=debug courier-screen     # Every event
//! ```
//!
//! [`ScreenContext`]: crate::screen_actor::ScreenContext
//! [`ScreenError::NotReady`]: crate::screen_actor::ScreenError::NotReady

pub mod courier_app;

pub use courier_app::*;
