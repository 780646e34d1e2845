use parley_parser::{Line, Prefix};
use unicase::UniCase;

use crate::{
    connection::ConnectionHandle,
    error::Error,
    message::{MessageParts, ParsedMessage},
    types::{ReceiveType, ReplyCode},
};

const CHANNEL_PREFIXES: [char; 4] = ['#', '&', '+', '!'];

fn is_channel(name: &str) -> bool {
    name.starts_with(CHANNEL_PREFIXES)
}

fn is_ctcp(payload: Option<&str>) -> bool {
    payload.is_some_and(|p| p.starts_with('\x01'))
}

fn is_action(payload: Option<&str>) -> bool {
    payload.is_some_and(|p| p.starts_with("\x01ACTION"))
}

fn targets_channel(line: &Line<'_>) -> bool {
    line.first_parameter().is_some_and(is_channel)
}

fn classify_privmsg(line: &Line<'_>, payload: Option<&str>) -> ReceiveType {
    match (targets_channel(line), is_action(payload)) {
        (true, true) => ReceiveType::ChannelAction,
        (true, false) => ReceiveType::ChannelMessage,
        (false, true) => ReceiveType::QueryAction,
        (false, false) if is_ctcp(payload) => ReceiveType::CtcpRequest,
        (false, false) => ReceiveType::QueryMessage,
    }
}

fn classify_notice(line: &Line<'_>, payload: Option<&str>) -> ReceiveType {
    if targets_channel(line) {
        ReceiveType::ChannelNotice
    } else if is_ctcp(payload) {
        ReceiveType::CtcpReply
    } else {
        ReceiveType::QueryNotice
    }
}

fn classify_mode(line: &Line<'_>, _payload: Option<&str>) -> ReceiveType {
    if targets_channel(line) {
        ReceiveType::ChannelModeChange
    } else {
        ReceiveType::UserModeChange
    }
}

fn classify_numeric(code: u16) -> ReceiveType {
    match code {
        1..=4 => ReceiveType::Login,
        5 | 250..=266 => ReceiveType::Info,
        221 => ReceiveType::UserMode,
        311..=313 | 317..=319 => ReceiveType::WhoIs,
        314 | 369 => ReceiveType::WhoWas,
        315 | 352 => ReceiveType::Who,
        321..=323 => ReceiveType::List,
        324 => ReceiveType::ChannelMode,
        331..=333 => ReceiveType::Topic,
        353 | 366 => ReceiveType::Name,
        367 | 368 => ReceiveType::BanList,
        372 | 375 | 376 => ReceiveType::Motd,
        400..=599 => ReceiveType::ErrorMessage,
        _ => ReceiveType::Unknown,
    }
}

type Classifier = fn(&Line<'_>, Option<&str>) -> ReceiveType;

enum Rule {
    Fixed(ReceiveType),
    Dynamic(Classifier),
}

static COMMANDS: phf::Map<UniCase<&str>, Rule> = phf::phf_map! {
    UniCase::ascii("PRIVMSG") => Rule::Dynamic(classify_privmsg),
    UniCase::ascii("NOTICE") => Rule::Dynamic(classify_notice),
    UniCase::ascii("MODE") => Rule::Dynamic(classify_mode),
    UniCase::ascii("JOIN") => Rule::Fixed(ReceiveType::Join),
    UniCase::ascii("PART") => Rule::Fixed(ReceiveType::Part),
    UniCase::ascii("KICK") => Rule::Fixed(ReceiveType::Kick),
    UniCase::ascii("QUIT") => Rule::Fixed(ReceiveType::Quit),
    UniCase::ascii("INVITE") => Rule::Fixed(ReceiveType::Invite),
    UniCase::ascii("NICK") => Rule::Fixed(ReceiveType::NickChange),
    UniCase::ascii("TOPIC") => Rule::Fixed(ReceiveType::TopicChange),
    UniCase::ascii("ERROR") => Rule::Fixed(ReceiveType::Error),
};

fn classify(line: &Line<'_>, payload: Option<&str>) -> ReceiveType {
    if let Some(code) = line.numeric() {
        return classify_numeric(code);
    }

    match COMMANDS.get(&UniCase::new(line.command())) {
        Some(Rule::Fixed(category)) => *category,
        Some(Rule::Dynamic(rule)) => rule(line, payload),
        None => ReceiveType::Unknown,
    }
}

// JOIN and INVITE may carry the channel as trailing parameter.
// Numeric replies start with the recipient's own nickname.
fn find_channel<'l>(line: &Line<'l>) -> &'l str {
    let command = line.command();
    let skip = usize::from(line.numeric().is_some());
    let trailing = line
        .trailing()
        .filter(|_| command.eq_ignore_ascii_case("JOIN") || command.eq_ignore_ascii_case("INVITE"));

    line.middle()
        .iter()
        .skip(skip)
        .copied()
        .chain(trailing)
        .find(|param| is_channel(param))
        .unwrap_or_default()
}

// PING and PONG carry a token, not a message body.
fn find_payload<'l>(line: &Line<'l>) -> Option<&'l str> {
    let command = line.command();
    if command.eq_ignore_ascii_case("PING") || command.eq_ignore_ascii_case("PONG") {
        return None;
    }
    line.trailing()
}

impl ParsedMessage {
    /// Tokenize a raw protocol line and build its record.
    ///
    /// The stored raw line has its CR/LF terminator removed.
    pub fn from_line(connection: &ConnectionHandle, raw_line: &str) -> Result<Self, Error> {
        let raw_line = raw_line.trim_end_matches(['\r', '\n']);
        let line = parley_parser::parse(raw_line)?;

        let origin = line.prefix().unwrap_or_default();
        let Prefix { nick, ident, host } = Prefix::split(origin);
        let payload = find_payload(&line);
        let reply_code = line.numeric().map_or(ReplyCode::Null, ReplyCode::from);
        let category = classify(&line, payload);

        log::trace!("{category:?} ({reply_code}) from {origin:?}");

        let parts = MessageParts {
            origin,
            nick,
            ident,
            host,
            channel: find_channel(&line),
            payload,
            raw_line,
            category,
            reply_code,
        };
        Ok(ParsedMessage::new(connection, parts))
    }
}

#[cfg(test)]
mod tests {
    use parley_parser::ParsingError;
    use rstest::rstest;

    use crate::{ConnectionHandle, Error, ParsedMessage, ReceiveType, ReplyCode};

    fn read(raw: &str) -> ParsedMessage {
        let conn = ConnectionHandle::new("irc.example.net", "me");
        ParsedMessage::from_line(&conn, raw).unwrap()
    }

    #[test]
    fn channel_message() {
        let message = read(":nick!user@host PRIVMSG #chan :hello world\r\n");

        assert_eq!(message.origin(), "nick!user@host");
        assert_eq!(message.nick(), "nick");
        assert_eq!(message.ident(), "user");
        assert_eq!(message.host(), "host");
        assert_eq!(message.channel(), "#chan");
        assert_eq!(message.payload(), Some("hello world"));
        assert_eq!(message.raw_line(), ":nick!user@host PRIVMSG #chan :hello world");
        assert_eq!(
            message.raw_line_tokens(),
            [":nick!user@host", "PRIVMSG", "#chan", ":hello", "world"]
        );
        assert_eq!(message.payload_tokens().unwrap(), ["hello", "world"]);
        assert_eq!(message.category(), ReceiveType::ChannelMessage);
        assert_eq!(message.reply_code(), ReplyCode::Null);
    }

    #[test]
    fn ping_has_no_payload() {
        let message = read("PING :server");

        assert_eq!(message.raw_line_tokens(), ["PING", ":server"]);
        assert_eq!(message.payload(), None);
        assert_eq!(message.payload_tokens(), None);
        assert_eq!(message.origin(), "");
        assert_eq!(message.channel(), "");
        assert_eq!(message.category(), ReceiveType::Unknown);
    }

    #[test]
    fn empty_trailing_is_present() {
        let message = read(":nick!user@host TOPIC #chan :");

        assert_eq!(message.payload(), Some(""));
        assert_eq!(message.payload_tokens().unwrap(), [""]);
        assert_eq!(message.category(), ReceiveType::TopicChange);
    }

    #[test]
    fn numeric_reply() {
        let conn = ConnectionHandle::new("irc.example.net", "me");
        let message = ParsedMessage::from_line(
            &conn,
            ":irc.example.net 353 me = #chan :@op +voice user",
        )
        .unwrap();

        assert_eq!(message.nick(), "irc.example.net");
        assert_eq!(message.ident(), "");
        assert_eq!(message.channel(), "#chan");
        assert_eq!(message.category(), ReceiveType::Name);
        assert_eq!(message.reply_code(), ReplyCode::NamReply);
        assert_eq!(message.payload_tokens().unwrap(), ["@op", "+voice", "user"]);
        assert_eq!(message.connection().unwrap().id(), conn.id());
    }

    #[rstest]
    #[case(":a!b@c PRIVMSG #chan :hi", ReceiveType::ChannelMessage)]
    #[case(":a!b@c PRIVMSG #chan :\x01ACTION waves\x01", ReceiveType::ChannelAction)]
    #[case(":a!b@c PRIVMSG me :hi", ReceiveType::QueryMessage)]
    #[case(":a!b@c PRIVMSG me :\x01ACTION waves\x01", ReceiveType::QueryAction)]
    #[case(":a!b@c PRIVMSG me :\x01VERSION\x01", ReceiveType::CtcpRequest)]
    #[case(":a!b@c NOTICE #chan :hi", ReceiveType::ChannelNotice)]
    #[case(":a!b@c NOTICE me :hi", ReceiveType::QueryNotice)]
    #[case(":a!b@c NOTICE me :\x01VERSION parley\x01", ReceiveType::CtcpReply)]
    #[case(":a!b@c privmsg #chan :hi", ReceiveType::ChannelMessage)]
    #[case(":a!b@c JOIN :#chan", ReceiveType::Join)]
    #[case(":a!b@c PART #chan :bye", ReceiveType::Part)]
    #[case(":a!b@c KICK #chan me :out", ReceiveType::Kick)]
    #[case(":a!b@c QUIT :gone", ReceiveType::Quit)]
    #[case(":a!b@c INVITE me :#chan", ReceiveType::Invite)]
    #[case(":a!b@c NICK :d", ReceiveType::NickChange)]
    #[case(":a!b@c MODE #chan +o me", ReceiveType::ChannelModeChange)]
    #[case(":me MODE me :+i", ReceiveType::UserModeChange)]
    #[case("ERROR :Closing link", ReceiveType::Error)]
    #[case(":srv 001 me :Welcome", ReceiveType::Login)]
    #[case(":srv 005 me CHANTYPES=# :are supported", ReceiveType::Info)]
    #[case(":srv 372 me :- hello", ReceiveType::Motd)]
    #[case(":srv 322 me #chan 3 :topic", ReceiveType::List)]
    #[case(":srv 311 me bob b host * :Bob", ReceiveType::WhoIs)]
    #[case(":srv 332 me #chan :topic", ReceiveType::Topic)]
    #[case(":srv 367 me #chan *!*@bad", ReceiveType::BanList)]
    #[case(":srv 324 me #chan +nt", ReceiveType::ChannelMode)]
    #[case(":srv 433 * me :Nickname is already in use", ReceiveType::ErrorMessage)]
    #[case(":srv 042 me :whatever", ReceiveType::Unknown)]
    #[case(":srv CAP * ACK :multi-prefix", ReceiveType::Unknown)]
    fn categories(#[case] raw: &str, #[case] expected: ReceiveType) {
        assert_eq!(read(raw).category(), expected);
    }

    #[rstest]
    #[case(":a!b@c JOIN :#chan", "#chan")]
    #[case(":a!b@c JOIN #chan", "#chan")]
    #[case(":a!b@c INVITE me :&local", "&local")]
    #[case(":a!b@c KICK #chan me :out", "#chan")]
    #[case(":a!b@c PRIVMSG me :#notachannel", "")]
    #[case(":srv 324 me #chan +nt", "#chan")]
    #[case(":srv 433 * me :Nickname is already in use", "")]
    #[case(":a!b@c QUIT :gone", "")]
    fn channels(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(read(raw).channel(), expected);
    }

    #[test]
    fn unrecognized_numeric() {
        let message = read(":srv 042 me :whatever");
        assert_eq!(message.reply_code(), ReplyCode::Unrecognized(42));
    }

    #[test]
    fn empty_line() {
        let conn = ConnectionHandle::new("irc.example.net", "me");
        let err = ParsedMessage::from_line(&conn, "\r\n").unwrap_err();
        assert_eq!(err, Error::Parsing(ParsingError::Empty));
    }

    #[test]
    fn invalid_line() {
        let conn = ConnectionHandle::new("irc.example.net", "me");
        let err = ParsedMessage::from_line(&conn, ":srv").unwrap_err();
        assert!(matches!(err, Error::Parsing(ParsingError::Invalid { .. })));
    }
}
