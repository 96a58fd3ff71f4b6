pub mod console;
pub mod handlers;
pub mod router;
pub mod transport;

pub use router::Router;
pub use transport::Conversation;
