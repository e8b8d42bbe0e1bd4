//! Request/response boundary for transports and the CLI

pub mod export;
pub mod handler;
pub mod messages;

pub use export::{join_full, to_csv};
pub use handler::RequestHandler;
pub use messages::{GenerateInput, GenerateResponse};
