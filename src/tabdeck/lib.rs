//! # Tabdeck Architecture
//!
//! Tabdeck is a **UI-agnostic state engine** for a pair of tabs that show
//! the same cards in independently ordered sequences. The UI owns gesture
//! interpretation and rendering; this crate owns the state, the
//! cross-tab synchronization algorithm, and persistence.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Facade (api.rs)                                            │
//! │  - TabStore<S: BlobStore>: switch/move/reset/hydrate        │
//! │  - Derived read-only views, save-after-mutate policy        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Sync (sync.rs)                                             │
//! │  - Pure reorder + mirror algorithm over the model types     │
//! │  - Invalid input degrades to a no-op, never an error        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Persistence (persist.rs + store/)                          │
//! │  - StateSlot: whole-state JSON under one fixed key          │
//! │  - BlobStore trait; FileStore (prod), InMemoryStore (test)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principles
//!
//! - **Single logical writer**: operations are synchronous and run to
//!   completion; the persisted slot is overwritten wholesale, so the last
//!   save wins.
//! - **Errors stay inside**: load failures fall back to the default seed,
//!   save failures are logged and swallowed; no mutating operation
//!   returns a failure to the UI.
//! - **Two tabs, one card set**: the two tabs always hold the same
//!   multiset of card ids; a reorder in the first tab (id 0) relocates
//!   the matching card in the second (id 1) by identity.
//!
//! ## Module Overview
//!
//! - [`api`]: the `TabStore` facade — entry point for all operations
//! - [`sync`]: the reorder + cross-tab synchronization algorithm
//! - [`model`]: core data types (`Card`, `Tab`, `AppState`) and the seed
//! - [`persist`]: the single-slot persistence adapter
//! - [`store`]: blob store abstraction and backends
//! - [`error`]: error types

pub mod api;
pub mod error;
pub mod model;
pub mod persist;
pub mod store;
pub mod sync;
