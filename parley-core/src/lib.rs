mod connection;
mod dispatch;
mod error;
mod message;
mod reader;
mod types;

pub use connection::{ConnectionHandle, ConnectionId, ConnectionInfo};
pub use dispatch::{Dispatcher, Handler};
pub use error::Error;
pub use message::{MessageParts, ParsedMessage};
pub use types::{ReceiveType, ReplyCode};

pub use parley_parser::ParsingError;
