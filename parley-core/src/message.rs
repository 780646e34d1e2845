use std::sync::{Arc, Weak};

use crate::{
    connection::{ConnectionHandle, ConnectionInfo},
    types::{ReceiveType, ReplyCode},
};

/// Fields extracted from one protocol line by the tokenizer.
#[derive(Debug, Clone, Copy)]
pub struct MessageParts<'a> {
    /// `nick!ident@host`
    pub origin: &'a str,
    pub nick: &'a str,
    pub ident: &'a str,
    pub host: &'a str,
    /// Empty when the line does not target a channel.
    pub channel: &'a str,
    /// `None` when the line has no message body, `Some("")` for an empty one.
    pub payload: Option<&'a str>,
    pub raw_line: &'a str,
    pub category: ReceiveType,
    pub reply_code: ReplyCode,
}

/// One received line, as handed to the dispatch layer.
///
/// Everything is computed at construction and never changes afterwards.
/// Token sequences are plain splits on `' '`: consecutive spaces give empty
/// tokens and a `:`-prefixed trailing parameter is split like any other word.
#[derive(Debug, Clone)]
pub struct ParsedMessage {
    connection: Weak<ConnectionInfo>,
    origin: String,
    nick: String,
    ident: String,
    host: String,
    channel: String,
    payload: Option<String>,
    payload_tokens: Option<Box<[String]>>,
    raw_line: String,
    raw_line_tokens: Box<[String]>,
    category: ReceiveType,
    reply_code: ReplyCode,
}

fn split_on_space(text: &str) -> Box<[String]> {
    text.split(' ').map(str::to_owned).collect()
}

impl ParsedMessage {
    pub fn new(connection: &ConnectionHandle, parts: MessageParts<'_>) -> Self {
        let MessageParts {
            origin,
            nick,
            ident,
            host,
            channel,
            payload,
            raw_line,
            category,
            reply_code,
        } = parts;

        Self {
            connection: connection.downgrade(),
            origin: origin.to_string(),
            nick: nick.to_string(),
            ident: ident.to_string(),
            host: host.to_string(),
            channel: channel.to_string(),
            payload: payload.map(str::to_owned),
            payload_tokens: payload.map(split_on_space),
            raw_line: raw_line.to_string(),
            raw_line_tokens: split_on_space(raw_line),
            category,
            reply_code,
        }
    }

    /// The connection the line was read from, if it is still open.
    pub fn connection(&self) -> Option<Arc<ConnectionInfo>> {
        self.connection.upgrade()
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn nick(&self) -> &str {
        &self.nick
    }

    pub fn ident(&self) -> &str {
        &self.ident
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    pub fn payload_tokens(&self) -> Option<&[String]> {
        self.payload_tokens.as_deref()
    }

    pub fn raw_line(&self) -> &str {
        &self.raw_line
    }

    pub fn raw_line_tokens(&self) -> &[String] {
        &self.raw_line_tokens
    }

    pub fn category(&self) -> ReceiveType {
        self.category
    }

    pub fn reply_code(&self) -> ReplyCode {
        self.reply_code
    }
}
