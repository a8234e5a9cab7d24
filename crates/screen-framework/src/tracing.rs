//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate for the whole
//! process.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup and shutdown of every `ScreenActor`
//! - **Events**: every dispatched event at `debug`, applied events at `info`, rejected
//!   events at `warn`
//! - **Client calls**: `#[instrument]` spans on the client wrappers
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run -p courier-screen
//!
//! # Show every event with its payload
//! RUST_LOG=debug cargo run -p courier-screen
//!
//! # Only the framework
//! RUST_LOG=screen_framework=debug cargo run -p courier-screen
//! ```
//!
//! ## Output
//!
//! ```text
//! INFO Actor started model_type="ScreenState"
//! DEBUG Dispatch model_type="ScreenState" event=LocationResolved(Fallback { .. })
//! INFO Event applied model_type="ScreenState" outcome=Ready(Region { .. })
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // model_type already says where a line came from
        .compact()
        .init();
}
