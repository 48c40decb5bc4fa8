//! hp-profile: elevation-profile engine for hydroprofile.
//!
//! Turns an ordered chain of components and connecting pipes (plus optional
//! solved head changes) into a resolved diagram model:
//! - component positions on a cumulative-length axis
//! - elevation scale with ticks
//! - routed pipe polylines per segment, with boundary markers
//! - no-flow (static) and flowing hydraulic grade lines, the latter clipped
//!   to the visible elevation window
//!
//! The engine is a pure function of its input; [`ProfileCache`] optionally
//! memoizes the last result.
//!
//! # Example
//!
//! ```
//! use hp_profile::{ComponentKind, ProfileBuilder, ProfileConfig, compute};
//!
//! let mut builder = ProfileBuilder::new();
//! let r = builder.component("r", "Reservoir", ComponentKind::Reservoir, 100.0);
//! builder.connection("c1", "Suction", Some(100.0), 100.0, 100.0);
//! let p = builder.component("p", "Pump", ComponentKind::Pump, 100.0);
//! builder.set_band(r, None, Some(110.0)).set_head_change(p, 50.0);
//! let elements = builder.build().unwrap();
//!
//! let model = compute(&elements, &ProfileConfig::default()).unwrap();
//! assert_eq!(model.components.len(), 2);
//! assert_eq!(model.segments.len(), 1);
//! assert_eq!(model.flowing_hgl.unwrap().end_head(), 160.0);
//! ```

pub mod builder;
pub mod classify;
pub mod clip;
pub mod config;
pub mod element;
pub mod error;
pub mod flatten;
pub mod flowing_hgl;
pub mod model;
pub mod route;
pub mod scale;
pub mod static_hgl;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::ProfileBuilder;
pub use classify::{Classifier, FnClassifier, KindClassifier};
pub use clip::clip_polyline;
pub use config::{Margin, ProfileConfig, Viewport, Visibility};
pub use element::{Component, ComponentKind, Connection, Element};
pub use error::{ProfileError, ProfileResult};
pub use flatten::{ComponentPosition, Flattened, flatten};
pub use flowing_hgl::{FlowingHgl, HglPoint, flowing_hgl};
pub use model::{DiagramModel, ElevationBand, PlacedComponent, ProfileCache, compute, compute_profile};
pub use route::{BoundaryMarker, ProfilePoint, Segment, SegmentConnection, SegmentShape, route_segments};
pub use scale::{Scale, Tick};
pub use static_hgl::{StaticHgl, static_hgl};
