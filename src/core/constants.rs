// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 16; // ~60 FPS
pub const DEFAULT_WAIT_SECS: f64 = 5.0;
pub const POPUP_DURATION_MS: i64 = 4000;

// Daily progression
pub const FORCED_COTD_CAST: u32 = 10;
pub const COTD_BONUS_CASTS: u32 = 5;

// Cast geometry
pub const CAST_DISTANCE: f32 = 5.0;
pub const LINE_LENGTH: f32 = 10.0;
pub const FACING_THRESHOLD: f32 = 0.7;
pub const LAKE_CENTER: [f32; 2] = [0.0, 0.0];
pub const LAKE_RADIUS: f32 = 50.0;

// Player movement
pub const PLAYER_SPEED: f32 = 0.5;
pub const TURN_STEP: f32 = std::f32::consts::PI / 16.0;
/// Players start this far south of the water's edge, facing the lake
pub const SHORE_OFFSET: f32 = 3.0;

// Caught fish animation
pub const FISH_RISE_PER_TICK: f32 = 0.1;
pub const FISH_RISE_TARGET: f32 = 5.0;

// Leaderboard
pub const LEADERBOARD_TIMEOUT_SECS: u64 = 5;
pub const CATCH_WEIGHT: u32 = 1;

// Files
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LEDGER_FILE_NAME: &str = "collection.dat";
pub const LOG_FILE_NAME: &str = "lakeside.log";
pub const LEDGER_VERSION_MAGIC: u64 = 0x4C41_4B45_5349_4445; // "LAKESIDE"
