//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Invalid stored document: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No quest found with id {0}")]
    QuestNotFound(i64),

    #[error("No mind found with id {0}")]
    MindNotFound(i64),

    #[error("No KPI at position {0}")]
    InvalidKpiIndex(usize),

    #[error("Invalid data: {0}")]
    Data(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
