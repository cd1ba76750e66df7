pub mod error;
pub mod http;
pub mod interfaces;
pub mod mock;
pub mod service;
