use log::LevelFilter;
use std::{env, path::PathBuf, str::FromStr};

pub const ROUND_COUNT: usize = 5;
pub const SELECTION_SIZE: usize = 5;
pub const SPEED_ROUND_LENGTH: usize = 5;
pub const SPEED_QUESTION_POINTS: u32 = 20;
pub const MIN_ANSWERS: usize = 4;
pub const ANSWER_SLOTS: usize = 8;

pub const QUESTIONS_KEY: &str = "@game_questions";
pub const SELECTED_QUESTIONS_KEY: &str = "@selected_questions";
pub const TEAM_NAMES_KEY: &str = "@team_names";

const DB_PATH_VAR: &str = "FEUD_DB_PATH";
const LOG_DIR_VAR: &str = "FEUD_LOG_DIR";
const LOG_LEVEL_VAR: &str = "FEUD_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_path: PathBuf::from("feud.db"),
            log_dir: PathBuf::from("log"),
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any variable source, falling back per field.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let database_path = match lookup(DB_PATH_VAR) {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => defaults.database_path,
        };

        let log_dir = match lookup(LOG_DIR_VAR) {
            Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => defaults.log_dir,
        };

        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(level) => LevelFilter::from_str(level.trim()).unwrap_or(defaults.log_level),
            None => defaults.log_level,
        };

        Config {
            database_path,
            log_dir,
            log_level,
        }
    }
}
