use std::fmt::Write;

use parley_core::{ParsedMessage, ReceiveType, ReplyCode};

use crate::config::Format;

pub fn render(message: &ParsedMessage, format: Format) -> String {
    match format {
        Format::Short => short(message),
        Format::Full => full(message),
    }
}

fn action_text(payload: &str) -> &str {
    payload
        .trim_start_matches("\x01ACTION")
        .trim_matches(['\x01', ' '])
}

fn short(message: &ParsedMessage) -> String {
    let payload = message.payload().unwrap_or_default();
    let (channel, nick) = (message.channel(), message.nick());

    match message.category() {
        ReceiveType::ChannelMessage | ReceiveType::ChannelNotice => {
            format!("[{channel}] <{nick}> {payload}")
        }
        ReceiveType::ChannelAction => format!("[{channel}] * {nick} {}", action_text(payload)),
        ReceiveType::QueryMessage | ReceiveType::QueryNotice => format!("<{nick}> {payload}"),
        ReceiveType::QueryAction => format!("* {nick} {}", action_text(payload)),
        _ if message.reply_code() != ReplyCode::Null => {
            format!("({}) {payload}", message.reply_code())
        }
        category => format!("({category:?}) {}", message.raw_line()),
    }
}

fn full(message: &ParsedMessage) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = writeln!(out, "category:        {:?}", message.category());
    let _ = writeln!(out, "reply code:      {}", message.reply_code());
    let _ = writeln!(out, "origin:          {:?}", message.origin());
    let _ = writeln!(
        out,
        "nick/ident/host: {:?} {:?} {:?}",
        message.nick(),
        message.ident(),
        message.host()
    );
    let _ = writeln!(out, "channel:         {:?}", message.channel());
    match (message.payload(), message.payload_tokens()) {
        (Some(payload), Some(tokens)) => {
            let _ = writeln!(out, "payload:         {payload:?}");
            let _ = writeln!(out, "payload tokens:  {tokens:?}");
        }
        _ => {
            let _ = writeln!(out, "payload:         <absent>");
        }
    }
    let _ = writeln!(out, "raw line tokens: {:?}", message.raw_line_tokens());
    match message.connection() {
        Some(conn) => {
            let _ = write!(out, "connection:      {} ({})", conn.server(), conn.id());
        }
        None => {
            let _ = write!(out, "connection:      <closed>");
        }
    }
    out
}
