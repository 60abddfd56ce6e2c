pub mod category;
pub mod daily;
pub mod kpi;
pub mod mind;
pub mod quest;
