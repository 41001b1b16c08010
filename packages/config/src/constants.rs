// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across Todoboard

// Server Configuration
pub const TODOBOARD_HOST: &str = "TODOBOARD_HOST";
pub const TODOBOARD_PORT: &str = "TODOBOARD_PORT";
pub const PORT: &str = "PORT"; // Legacy

// Database Configuration
pub const TODOBOARD_DATABASE_PATH: &str = "TODOBOARD_DATABASE_PATH";
pub const TODOBOARD_DB_MAX_CONNECTIONS: &str = "TODOBOARD_DB_MAX_CONNECTIONS";

// Logging
pub const TODOBOARD_LOG: &str = "TODOBOARD_LOG";
pub const RUST_LOG: &str = "RUST_LOG";

// Defaults
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 4131;
pub const DEFAULT_DATABASE_PATH: &str = "todo_app.db";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_LOG_FILTER: &str = "info";
