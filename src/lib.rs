pub mod config;
pub mod data;
pub mod logging;
pub mod render;
pub mod search_filter;
pub mod table_display;
pub mod widgets;
