pub mod ai;
pub mod auth;
pub mod http;
pub mod recipes;
pub mod session;
pub mod storage;
