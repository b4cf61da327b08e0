//! Bouquet Builder Core Library
//!
//! Target-independent state for the bouquet builder: the flower catalog, the
//! placement store, the pointer drag tracker and the reveal toggle. Everything
//! here is plain data with pure update functions; the Yew client owns the
//! instances and re-renders when they change.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod config;
pub mod placement;
pub mod pointer;
pub mod reveal;

pub use catalog::{Catalog, CatalogError, FlowerKind};
pub use config::{
    BouquetConfig, ConfigError, PoseRanges, DEFAULT_REVEAL_DELAY_MS, MAX_POSITION_JITTER,
    MAX_ROTATION_DEGREES,
};
pub use placement::{Bouquet, PlacedItem, PlacementId, Position};
pub use pointer::{
    CanvasRect, DragMove, DragState, PointerInput, PointerKind, PointerResponse, PointerTracker,
};
pub use reveal::{RevealPhase, RevealTicket, RevealToggle};
