//! Activity Catalogue
//!
//! Server-side ownership of activity data:
//!
//! - **types**: Core data structures (Activity, ActivityDetails, Snapshot)
//! - **store**: In-memory store with atomic roster mutations
//! - **seed**: Built-in catalogue and JSON seed loading
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust
//! use activity_board::catalogue::ActivityStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = ActivityStore::with_default_catalogue();
//!
//!     store.signup("Chess Club", "new.student@mergington.edu").await?;
//!
//!     let chess = store.get("Chess Club").await.expect("seeded");
//!     println!("{} spots left", chess.spots_left());
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod seed;
pub mod store;
pub mod types;

pub use error::{RosterError, RosterResult};
pub use seed::{default_catalogue, load_seed_file};
pub use store::{ActivityStore, CatalogueStats};
pub use types::{Activity, ActivityDetails, Snapshot};
