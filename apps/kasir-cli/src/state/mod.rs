//! # State Module
//!
//! Everything the menu loop works on, owned in one place and passed down
//! explicitly.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                         AppState                                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                    │                           │                        │
//! │                    ▼                           ▼                        │
//! │  ┌──────────────────────────────┐  ┌──────────────────────────┐        │
//! │  │   Store (kasir-core)         │  │   ConfigState            │        │
//! │  │                              │  │                          │        │
//! │  │  inventory, cart,            │  │  store_name              │        │
//! │  │  accounts, session           │  │  currency_symbol         │        │
//! │  │  (mutated by commands)       │  │  output format           │        │
//! │  └──────────────────────────────┘  └──────────────────────────┘        │
//! │                                                                         │
//! │  Commands borrow only the half they need, so a pending checkout can    │
//! │  hold the store while the menu still reads the config.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;

pub use config::{default_config_path, ConfigState, OutputFormat, ENV_PREFIX};

use kasir_core::Store;

/// The store plus display settings for one run of the program.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Store,
    pub config: ConfigState,
}

impl AppState {
    pub fn new(store: Store, config: ConfigState) -> Self {
        AppState { store, config }
    }
}

impl Default for AppState {
    /// Seeded store with default settings.
    fn default() -> Self {
        AppState::new(Store::seeded(), ConfigState::default())
    }
}
