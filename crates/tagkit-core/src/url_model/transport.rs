//! The fixed set of URL transports (schemes) a `Url` will hold.

use std::fmt;
use std::str::FromStr;

/// A scheme from the allow-list. Anything else is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transport {
    Http,
    Https,
    Ftp,
    Sftp,
    File,
    Javascript,
    Mailto,
}

impl Transport {
    pub const ALL: [Transport; 7] = [
        Transport::Http,
        Transport::Https,
        Transport::Ftp,
        Transport::Sftp,
        Transport::File,
        Transport::Javascript,
        Transport::Mailto,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Transport::Http => "http",
            Transport::Https => "https",
            Transport::Ftp => "ftp",
            Transport::Sftp => "sftp",
            Transport::File => "file",
            Transport::Javascript => "javascript",
            Transport::Mailto => "mailto",
        }
    }

    /// Normalizes a raw scheme token: drops a trailing `://` or `:/`,
    /// lower-cases, then checks the allow-list.
    pub fn from_token(token: &str) -> Option<Transport> {
        let token = token
            .strip_suffix("://")
            .or_else(|| token.strip_suffix(":/"))
            .unwrap_or(token);
        token.parse().ok()
    }
}

impl FromStr for Transport {
    type Err = UnknownTransport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Transport::ALL
            .into_iter()
            .find(|t| t.as_str() == lower)
            .ok_or(UnknownTransport)
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `Transport::from_str` for schemes outside the allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownTransport;

impl fmt::Display for UnknownTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transport not in allow-list")
    }
}

impl std::error::Error for UnknownTransport {}
