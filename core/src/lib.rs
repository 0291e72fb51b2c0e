//! Optional values: a value of some type that is either present or absent, without resorting to sentinel
//! values.
//!
//! ```
//! use opt_core::{absent, map, present};
//!
//! let port = present(8080);
//! assert_eq!(port.get_or_else(80), 8080);
//!
//! let name = absent::<String>();
//! assert_eq!(name.get_or_zero(), "");
//!
//! assert_eq!(map(|port| port + 1, port).get(), 8081);
//! ```

pub mod optional;
pub mod map;
pub mod app;

#[cfg(all(test, feature = "tracing"))]
mod log_events;

pub use map::map;
pub use optional::{absent, present, AbsentError, Optional, ABSENT_ACCESS_MESSAGE};
