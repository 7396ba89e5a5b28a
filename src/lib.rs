pub mod analysis;
pub mod api;
pub mod app;
pub mod chart;
pub mod context;
pub mod encounter;
pub mod error;
pub mod logging;
pub mod markup;
pub mod navigation;
pub mod progress;
pub mod settings;
pub mod tui;
pub mod ui;

// Re-export commonly used items for easier access
pub use api::{ApiClient, DataService};
pub use encounter::{EncounterRecord, EnemyStub, NgLevel, RegionSummary};
pub use error::{ApiError, AppError};
pub use navigation::{Intent, NavigationController, View};
