use std::fmt;

/// The source of a line, split into its `nick!ident@host` parts.
///
/// Missing parts are empty: a server prefix such as `irc.example.net`
/// only fills `nick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Prefix<'p> {
    pub nick: &'p str,
    pub ident: &'p str,
    pub host: &'p str,
}

impl<'p> Prefix<'p> {
    pub fn split(origin: &'p str) -> Self {
        let (rest, host) = origin.split_once('@').unwrap_or((origin, ""));
        let (nick, ident) = rest.split_once('!').unwrap_or((rest, ""));
        Self { nick, ident, host }
    }

    pub fn is_server(&self) -> bool {
        self.ident.is_empty() && self.host.is_empty() && self.nick.contains('.')
    }
}

impl fmt::Display for Prefix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nick)?;
        if !self.ident.is_empty() {
            write!(f, "!{}", self.ident)?;
        }
        if !self.host.is_empty() {
            write!(f, "@{}", self.host)?;
        }
        Ok(())
    }
}
