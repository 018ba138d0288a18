pub mod capture;
pub mod dispatcher;
pub mod engine;
pub mod slot;
