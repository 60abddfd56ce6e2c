pub mod board;
pub mod check;
pub mod config;
pub mod daily;
pub mod db;
pub mod init;
pub mod kpi;
pub mod kpis;
pub mod log;
pub mod mind;
pub mod quest;
pub mod watch;
