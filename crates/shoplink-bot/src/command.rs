//! Prefix command parsing for incoming chat messages.

/// Command word for a storefront lookup.
const LOOKUP_COMMAND: &str = "s";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    /// `<prefix>s <url>`. `link` is `None` when no argument followed.
    Lookup { link: Option<&'a str> },
}

/// Parses `content` as a prefixed command.
///
/// Returns `None` for messages without the prefix and for unknown commands.
/// Tokens are split on runs of whitespace; extra arguments are ignored.
#[must_use]
pub fn parse_command<'a>(content: &'a str, prefix: &str) -> Option<Command<'a>> {
    let rest = content.strip_prefix(prefix)?;
    let mut tokens = rest.split_whitespace();

    match tokens.next()? {
        LOOKUP_COMMAND => Some(Command::Lookup {
            link: tokens.next(),
        }),
        _ => None,
    }
}
