use std::fmt;

/// Kind of a received line, as seen by the dispatch layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReceiveType {
    Info,
    Login,
    Motd,
    List,
    Join,
    Kick,
    Part,
    Invite,
    Quit,
    Who,
    WhoIs,
    WhoWas,
    Name,
    Topic,
    BanList,
    NickChange,
    TopicChange,
    UserMode,
    UserModeChange,
    ChannelMode,
    ChannelModeChange,
    ChannelMessage,
    ChannelAction,
    ChannelNotice,
    QueryMessage,
    QueryAction,
    QueryNotice,
    CtcpReply,
    CtcpRequest,
    Error,
    ErrorMessage,
    Unknown,
}

impl ReceiveType {
    pub fn is_channel_message(self) -> bool {
        matches!(
            self,
            ReceiveType::ChannelMessage | ReceiveType::ChannelAction | ReceiveType::ChannelNotice
        )
    }

    pub fn is_query_message(self) -> bool {
        matches!(
            self,
            ReceiveType::QueryMessage | ReceiveType::QueryAction | ReceiveType::QueryNotice
        )
    }

    pub fn is_ctcp(self) -> bool {
        matches!(self, ReceiveType::CtcpReply | ReceiveType::CtcpRequest)
    }
}

macro_rules! reply_codes {
    ($($variant:ident = $code:literal => $mnemonic:literal,)*) => {
        /// Numeric reply of a server line.
        ///
        /// `Null` marks lines whose command is not numeric, `Unrecognized`
        /// keeps numerics missing from the table.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum ReplyCode {
            #[default]
            Null,
            $($variant,)*
            Unrecognized(u16),
        }

        impl ReplyCode {
            pub fn code(self) -> u16 {
                match self {
                    ReplyCode::Null => 0,
                    $(ReplyCode::$variant => $code,)*
                    ReplyCode::Unrecognized(code) => code,
                }
            }

            pub fn mnemonic(self) -> Option<&'static str> {
                match self {
                    $(ReplyCode::$variant => Some($mnemonic),)*
                    ReplyCode::Null | ReplyCode::Unrecognized(_) => None,
                }
            }
        }

        impl From<u16> for ReplyCode {
            fn from(code: u16) -> Self {
                match code {
                    0 => ReplyCode::Null,
                    $($code => ReplyCode::$variant,)*
                    code => ReplyCode::Unrecognized(code),
                }
            }
        }
    };
}

reply_codes! {
    Welcome = 1 => "RPL_WELCOME",
    YourHost = 2 => "RPL_YOURHOST",
    Created = 3 => "RPL_CREATED",
    MyInfo = 4 => "RPL_MYINFO",
    Bounce = 5 => "RPL_BOUNCE",
    UserModeIs = 221 => "RPL_UMODEIS",
    StatsConn = 250 => "RPL_STATSCONN",
    LuserClient = 251 => "RPL_LUSERCLIENT",
    LuserOp = 252 => "RPL_LUSEROP",
    LuserUnknown = 253 => "RPL_LUSERUNKNOWN",
    LuserChannels = 254 => "RPL_LUSERCHANNELS",
    LuserMe = 255 => "RPL_LUSERME",
    AdminMe = 256 => "RPL_ADMINME",
    LocalUsers = 265 => "RPL_LOCALUSERS",
    GlobalUsers = 266 => "RPL_GLOBALUSERS",
    Away = 301 => "RPL_AWAY",
    UserHost = 302 => "RPL_USERHOST",
    IsOn = 303 => "RPL_ISON",
    UnAway = 305 => "RPL_UNAWAY",
    NowAway = 306 => "RPL_NOWAWAY",
    WhoIsUser = 311 => "RPL_WHOISUSER",
    WhoIsServer = 312 => "RPL_WHOISSERVER",
    WhoIsOperator = 313 => "RPL_WHOISOPERATOR",
    WhoWasUser = 314 => "RPL_WHOWASUSER",
    EndOfWho = 315 => "RPL_ENDOFWHO",
    WhoIsIdle = 317 => "RPL_WHOISIDLE",
    EndOfWhoIs = 318 => "RPL_ENDOFWHOIS",
    WhoIsChannels = 319 => "RPL_WHOISCHANNELS",
    ListStart = 321 => "RPL_LISTSTART",
    List = 322 => "RPL_LIST",
    ListEnd = 323 => "RPL_LISTEND",
    ChannelModeIs = 324 => "RPL_CHANNELMODEIS",
    NoTopic = 331 => "RPL_NOTOPIC",
    Topic = 332 => "RPL_TOPIC",
    TopicWhoTime = 333 => "RPL_TOPICWHOTIME",
    Inviting = 341 => "RPL_INVITING",
    Version = 351 => "RPL_VERSION",
    WhoReply = 352 => "RPL_WHOREPLY",
    NamReply = 353 => "RPL_NAMREPLY",
    Links = 364 => "RPL_LINKS",
    EndOfLinks = 365 => "RPL_ENDOFLINKS",
    EndOfNames = 366 => "RPL_ENDOFNAMES",
    BanList = 367 => "RPL_BANLIST",
    EndOfBanList = 368 => "RPL_ENDOFBANLIST",
    EndOfWhoWas = 369 => "RPL_ENDOFWHOWAS",
    Info = 371 => "RPL_INFO",
    Motd = 372 => "RPL_MOTD",
    EndOfInfo = 374 => "RPL_ENDOFINFO",
    MotdStart = 375 => "RPL_MOTDSTART",
    EndOfMotd = 376 => "RPL_ENDOFMOTD",
    YoureOper = 381 => "RPL_YOUREOPER",
    Time = 391 => "RPL_TIME",
    NoSuchNick = 401 => "ERR_NOSUCHNICK",
    NoSuchServer = 402 => "ERR_NOSUCHSERVER",
    NoSuchChannel = 403 => "ERR_NOSUCHCHANNEL",
    CannotSendToChan = 404 => "ERR_CANNOTSENDTOCHAN",
    TooManyChannels = 405 => "ERR_TOOMANYCHANNELS",
    WasNoSuchNick = 406 => "ERR_WASNOSUCHNICK",
    NoOrigin = 409 => "ERR_NOORIGIN",
    NoRecipient = 411 => "ERR_NORECIPIENT",
    NoTextToSend = 412 => "ERR_NOTEXTTOSEND",
    UnknownCommand = 421 => "ERR_UNKNOWNCOMMAND",
    NoMotd = 422 => "ERR_NOMOTD",
    NoNicknameGiven = 431 => "ERR_NONICKNAMEGIVEN",
    ErroneousNickname = 432 => "ERR_ERRONEUSNICKNAME",
    NicknameInUse = 433 => "ERR_NICKNAMEINUSE",
    NickCollision = 436 => "ERR_NICKCOLLISION",
    UserNotInChannel = 441 => "ERR_USERNOTINCHANNEL",
    NotOnChannel = 442 => "ERR_NOTONCHANNEL",
    UserOnChannel = 443 => "ERR_USERONCHANNEL",
    NotRegistered = 451 => "ERR_NOTREGISTERED",
    NeedMoreParams = 461 => "ERR_NEEDMOREPARAMS",
    AlreadyRegistered = 462 => "ERR_ALREADYREGISTRED",
    PasswdMismatch = 464 => "ERR_PASSWDMISMATCH",
    YoureBannedCreep = 465 => "ERR_YOUREBANNEDCREEP",
    ChannelIsFull = 471 => "ERR_CHANNELISFULL",
    UnknownMode = 472 => "ERR_UNKNOWNMODE",
    InviteOnlyChan = 473 => "ERR_INVITEONLYCHAN",
    BannedFromChan = 474 => "ERR_BANNEDFROMCHAN",
    BadChannelKey = 475 => "ERR_BADCHANNELKEY",
    BadChanMask = 476 => "ERR_BADCHANMASK",
    NoPrivileges = 481 => "ERR_NOPRIVILEGES",
    ChanOpPrivsNeeded = 482 => "ERR_CHANOPRIVSNEEDED",
    UModeUnknownFlag = 501 => "ERR_UMODEUNKNOWNFLAG",
    UsersDontMatch = 502 => "ERR_USERSDONTMATCH",
}

impl ReplyCode {
    pub fn is_error(self) -> bool {
        (400..600).contains(&self.code())
    }
}

impl fmt::Display for ReplyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mnemonic() {
            Some(mnemonic) => f.write_str(mnemonic),
            None => write!(f, "{:03}", self.code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ReceiveType, ReplyCode};

    #[test]
    fn known_numeric() {
        let code = ReplyCode::from(1);
        assert_eq!(code, ReplyCode::Welcome);
        assert_eq!(code.code(), 1);
        assert_eq!(code.to_string(), "RPL_WELCOME");
        assert!(!code.is_error());
    }

    #[test]
    fn error_numeric() {
        let code = ReplyCode::from(433);
        assert_eq!(code, ReplyCode::NicknameInUse);
        assert!(code.is_error());
    }

    #[test]
    fn unrecognized_numeric() {
        let code = ReplyCode::from(42);
        assert_eq!(code, ReplyCode::Unrecognized(42));
        assert_eq!(code.code(), 42);
        assert_eq!(code.mnemonic(), None);
        assert_eq!(code.to_string(), "042");
    }

    #[test]
    fn null() {
        assert_eq!(ReplyCode::from(0), ReplyCode::Null);
        assert_eq!(ReplyCode::default(), ReplyCode::Null);
        assert_eq!(ReplyCode::Null.code(), 0);
    }

    #[test]
    fn groups() {
        assert!(ReceiveType::ChannelAction.is_channel_message());
        assert!(!ReceiveType::QueryMessage.is_channel_message());
        assert!(ReceiveType::QueryNotice.is_query_message());
        assert!(ReceiveType::CtcpRequest.is_ctcp());
        assert!(!ReceiveType::Join.is_ctcp());
    }
}
