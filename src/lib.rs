pub mod client;
pub mod config;
pub mod error;
pub mod routes;
pub mod storage;
pub mod structs;
pub mod weather;
