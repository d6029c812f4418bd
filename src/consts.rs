//! Application-wide constants.

/// Browser origins of the local development frontend; the only origins that
/// receive CORS headers.
pub const ALLOWED_FRONTEND_ORIGINS: [&str; 2] =
    ["http://localhost:5173", "http://127.0.0.1:5173"];

/// Species recorded when a pet is created without one.
pub const DEFAULT_PET_SPECIES: &str = "dog";

/// Category recorded when a task is created without one.
pub const DEFAULT_TASK_CATEGORY: &str = "other";
