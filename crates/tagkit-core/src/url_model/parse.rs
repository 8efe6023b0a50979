//! Split a raw URL string into its grammatical components.
//!
//! This stage only decomposes; normalization (allow-listed transports,
//! space stripping, directory/file split) happens in the setters.

use super::error::UrlError;

/// Components found in a raw URL. Absent and empty pieces are `None`,
/// except the fragment: a trailing `#` yields `Some("")`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RawParts {
    pub scheme: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub path: Option<String>,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

/// Decomposes `raw` into scheme, authority, path, query and fragment.
pub(crate) fn decompose(raw: &str) -> Result<RawParts, UrlError> {
    let mut parts = RawParts::default();

    let (rest, fragment) = match raw.split_once('#') {
        Some((rest, frag)) => (rest, Some(frag.to_string())),
        None => (raw, None),
    };
    parts.fragment = fragment;

    let (rest, query) = match rest.split_once('?') {
        Some((rest, q)) => (rest, non_empty(q)),
        None => (rest, None),
    };
    parts.query = query;

    let mut rest = rest;
    if let Some((candidate, after)) = rest.split_once(':') {
        if is_scheme(candidate) && !looks_like_port(after) {
            parts.scheme = Some(candidate.to_string());
            rest = after;
        } else if is_scheme(candidate) {
            // `host:8080/path` without a scheme.
            let (authority, path) = split_authority(rest);
            parse_authority(raw, authority, &mut parts)?;
            parts.path = non_empty(path);
            return Ok(parts);
        }
    }

    if let Some(after_slashes) = rest.strip_prefix("//") {
        let (authority, path) = split_authority(after_slashes);
        parse_authority(raw, authority, &mut parts)?;
        if parts.host.is_none() {
            if let Some(scheme) = parts.scheme.as_deref() {
                if !scheme.eq_ignore_ascii_case("file") {
                    return Err(UrlError::invalid(raw, "missing host"));
                }
            }
        }
        parts.path = non_empty(path);
    } else {
        parts.path = non_empty(rest);
    }

    Ok(parts)
}

/// Splits `user:pass@host:port`, storing what it finds in `parts`.
fn parse_authority(raw: &str, authority: &str, parts: &mut RawParts) -> Result<(), UrlError> {
    let host_port = match authority.rsplit_once('@') {
        Some((userinfo, host_port)) => {
            match userinfo.split_once(':') {
                Some((user, pass)) => {
                    parts.user = non_empty(user);
                    parts.password = non_empty(pass);
                }
                None => parts.user = non_empty(userinfo),
            }
            host_port
        }
        None => authority,
    };

    let (host, port) = split_host_port(raw, host_port)?;
    if let Some(port) = port {
        if !port.bytes().all(|b| b.is_ascii_digit()) {
            return Err(UrlError::invalid(raw, "port is not numeric"));
        }
        let value: u16 = port
            .parse()
            .map_err(|_| UrlError::invalid(raw, "port out of range"))?;
        parts.port = Some(value);
    }

    parts.host = non_empty(host);
    if parts.host.is_none() && (parts.port.is_some() || parts.user.is_some()) {
        return Err(UrlError::invalid(raw, "missing host"));
    }
    Ok(())
}

/// Separates the host from a trailing `:port`. Bracketed IPv6 hosts keep
/// their colons; an unbracketed host may not contain one. An empty port
/// text is treated as absent.
fn split_host_port<'a>(
    raw: &str,
    host_port: &'a str,
) -> Result<(&'a str, Option<&'a str>), UrlError> {
    let (host, port) = if host_port.starts_with('[') {
        let close = host_port
            .find(']')
            .ok_or_else(|| UrlError::invalid(raw, "unterminated IPv6 host"))?;
        let (host, tail) = host_port.split_at(close + 1);
        if host == "[]" {
            return Err(UrlError::invalid(raw, "empty IPv6 host"));
        }
        if !tail.is_empty() && !tail.starts_with(':') {
            return Err(UrlError::invalid(raw, "text after IPv6 host"));
        }
        (host, tail.strip_prefix(':'))
    } else {
        match host_port.rsplit_once(':') {
            Some((host, _)) if host.contains(':') => {
                return Err(UrlError::invalid(raw, "IPv6 host must be bracketed"));
            }
            Some((host, port)) => (host, Some(port)),
            None => (host_port, None),
        }
    };
    Ok((host, port.filter(|p| !p.is_empty())))
}

/// Authority runs up to the first `/`; the path keeps that slash.
fn split_authority(s: &str) -> (&str, &str) {
    match s.find('/') {
        Some(idx) => s.split_at(idx),
        None => (s, ""),
    }
}

/// RFC 3986 scheme: ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// `80` or `80/path` after the first colon means `host:port`, not a scheme.
fn looks_like_port(after: &str) -> bool {
    let digits = after.split('/').next().unwrap_or("");
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
