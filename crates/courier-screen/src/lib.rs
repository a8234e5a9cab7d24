//! # Courier Screen
//!
//! The courier's delivery map screen as an actor-driven state machine.
//!
//! - **[model]**: Pure data ([`ScreenState`](model::ScreenState), markers, connection,
//!   delivery time, map geometry).
//! - **[location]**: The permission-then-locate pipeline with its fallback region.
//! - **[ping]**: Fire-and-forget location report over HTTP.
//! - **[screen_actor]**: The [`ScreenModel`](screen_framework::ScreenModel) implementation
//!   that applies screen events.
//! - **[clients]**: [`CourierScreenClient`](clients::CourierScreenClient), one method per
//!   screen input.
//! - **[view]**: Render-ready view model.
//! - **[lifecycle]**: Starting and stopping a screen.
//!
//! The `courier-screen` binary drives a screen against a simulated device.

pub mod cli;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod location;
pub mod model;
pub mod ping;
pub mod screen_actor;
pub mod services;
pub mod view;
