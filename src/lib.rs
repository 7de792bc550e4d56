pub mod config;
pub mod logger;
pub mod server;
pub mod page_processor;
pub mod paginator;
pub mod query_string;
pub mod text_utils;
pub mod content;
pub mod store;
pub mod view;
mod test_data;
