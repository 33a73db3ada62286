pub mod config;
pub mod error;
pub mod helpers;

pub mod models {
    pub mod admin;
    pub mod game;
    pub mod seed;
    pub mod session;
}

pub mod storage {
    pub mod kv;
    pub mod question_store;
    pub mod session_store;
}

pub mod handlers {
    pub mod admin_handler;
    pub mod game_handler;
    pub mod question_handler;
    pub mod selection_handler;
    pub mod setup_handler;
}

pub mod loggers {
    pub mod console_logger;
    pub mod file_logger;
}
