//! Shared types for the encounter calculator page
//!
//! This crate holds everything that does not need a browser: the monster
//! selection state and budget arithmetic, party validation, number formatting,
//! notification kinds, the accordion algorithm and the storage abstraction.
//! The WASM frontend (encounters-ui) wires these to the DOM.

pub mod accordion;
pub mod config;
pub mod difficulty;
pub mod formatting;
pub mod notification;
pub mod party;
pub mod script;
pub mod selection;
pub mod storage;

pub use accordion::{AccordionSurface, toggle_exclusive};
pub use config::{HypermediaConfig, Messages, Selectors, UiConfig};
pub use difficulty::Difficulty;
pub use formatting::format_xp;
pub use notification::{NOTIFICATION_DURATION_MS, NotificationKind, detach_if_attached};
pub use party::{MAX_LEVEL, MIN_LEVEL, PartyLevelError, coerce_level, validate_party_levels};
pub use script::{index_from_f64, number_from_str};
pub use selection::{
    BudgetSummary, MonsterSelection, SelectedMonster, is_result_swap, parse_budget,
};
pub use storage::{BannerDismissal, KeyValueStore, MemoryStore, StoreError};
