//! # Road Network Model
//!
//! The DTOs every layer shares: stations, segments, routes.
//!
//! Design rule: this module is pure data — no I/O, no store state, no
//! search logic. The store owns stations, the enumerator produces routes,
//! and everything here crosses those boundaries by value.

pub mod route;
pub mod segment;
pub mod station;

pub use route::Route;
pub use segment::{Segment, SegmentAttrs};
pub use station::{NodeId, Station, StationKind};
