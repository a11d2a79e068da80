pub mod classifier;
pub mod compatibility;
pub mod cosmic;
pub mod date_parser;
pub mod engine;
pub mod handlers;
pub mod name;
pub mod numerology;
pub mod personality;
