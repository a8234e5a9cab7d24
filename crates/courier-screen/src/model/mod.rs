//! Pure data structures for the courier screen. The transitions that mutate them live in
//! [`screen_actor`](crate::screen_actor).

pub mod connection;
pub mod geo;
pub mod marker;
pub mod screen;
pub mod time;

pub use connection::*;
pub use geo::*;
pub use marker::*;
pub use screen::*;
pub use time::*;
