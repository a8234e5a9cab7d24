//! Host collaborators the screen talks to, plus in-memory versions of each for demos
//! and tests.

pub mod device;
pub mod map_view;
pub mod notifier;
pub mod transport;

pub use device::*;
pub use map_view::*;
pub use notifier::*;
pub use transport::*;
