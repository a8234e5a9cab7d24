//! # Screen Framework
//!
//! This crate provides the runtime that owns a screen's state. It applies the **Actor Model**
//! to presentation state: one task owns one state value, and every mutation arrives as a
//! message that is applied in mailbox order.
//!
//! ## Why an actor for screen state?
//!
//! A mobile screen is driven by discrete external events (a permission callback, a location
//! fix, a button press). Modelling the screen as an actor gives us:
//!
//! - **One owner**: the state lives inside the actor task, never behind a shared global.
//! - **One event at a time**: events are applied sequentially, so two handlers can never race.
//! - **Explicit transitions**: the only way to change the state is to dispatch an event that
//!   the model knows how to apply.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: the [`ScreenModel`] trait a state type implements.
//! - [`actor`]: the generic [`ScreenActor`] that owns the state and runs the event loop.
//! - [`client`]: the cloneable [`ScreenClient`] used to dispatch events and read snapshots.
//! - [`client_trait`]: the [`ScreenHandle`] trait for domain-specific client wrappers.
//! - [`message`]: the [`ScreenRequest`] envelope sent over the mailbox.
//! - [`error`]: [`FrameworkError`].
//! - [`mock`]: utilities for testing client wrappers without running a real actor.
//! - [`tracing`]: one-call logging setup.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! let (actor, client) = ScreenActor::new(MyScreen::default(), 32);
//! tokio::spawn(actor.run(context));
//!
//! let outcome = client.dispatch(MyEvent::ButtonPressed).await?;
//! let state = client.snapshot().await?;
//! ```

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod model;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ScreenActor;
pub use client::ScreenClient;
pub use client_trait::ScreenHandle;
pub use error::FrameworkError;
pub use message::{Response, ScreenRequest};
pub use model::ScreenModel;
