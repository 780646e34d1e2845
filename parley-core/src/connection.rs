use std::{
    fmt,
    sync::{Arc, Weak},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(uuid::Uuid);

impl ConnectionId {
    pub(crate) fn generate() -> Self {
        ConnectionId(uuid::Uuid::new_v4())
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// What a message knows about the connection it was read from.
#[derive(Debug)]
pub struct ConnectionInfo {
    id: ConnectionId,
    server: String,
    nickname: String,
}

impl ConnectionInfo {
    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }
}

/// Owning side of a connection context.
///
/// Messages only keep a weak reference to it, so dropping every handle
/// ends the context even if records of that connection are still around.
#[derive(Debug, Clone)]
pub struct ConnectionHandle {
    info: Arc<ConnectionInfo>,
}

impl ConnectionHandle {
    pub fn new(server: impl Into<String>, nickname: impl Into<String>) -> Self {
        let info = ConnectionInfo {
            id: ConnectionId::generate(),
            server: server.into(),
            nickname: nickname.into(),
        };
        log::debug!("new connection context {} for {}", info.id, info.server);
        Self {
            info: Arc::new(info),
        }
    }

    pub fn info(&self) -> &ConnectionInfo {
        &self.info
    }

    pub fn id(&self) -> ConnectionId {
        self.info.id
    }

    pub(crate) fn downgrade(&self) -> Weak<ConnectionInfo> {
        Arc::downgrade(&self.info)
    }
}
