//! URL grammar.
//!
//! `scheme "://" (userinfo "@")? host (":" port)? path? query?`, matched as a
//! prefix of the input: text following a valid prefix is reported in
//! [`UrlMatch::rest`] and does not make the URL invalid.
//!
//! The host is the whole run of `[A-Za-z0-9.-]` characters after the
//! authority start. It must be at most 255 characters long and consist of
//! dot-separated DNS labels; a host that stops on a disallowed trailing
//! character (`example-.com`) is rejected rather than truncated.

use super::constants::{MAX_HOST_LENGTH, MAX_USERINFO_SEGMENTS};
use super::patterns::{
    URL_HOST_REGEX, URL_HOST_RUN_REGEX, URL_SCHEME_REGEX, URL_TAIL_REGEX,
    URL_USERINFO_SEGMENT_REGEX,
};

/// The components recognised in a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlMatch<'a> {
    pub scheme: &'a str,
    /// Userinfo without its terminating `@`.
    pub userinfo: Option<&'a str>,
    pub host: &'a str,
    /// Port digits, without the `:`.
    pub port: Option<&'a str>,
    /// Path including its leading `/`. The path character set includes `?`,
    /// so a query following a path is part of the path.
    pub path: Option<&'a str>,
    /// Query including its leading `?`, when it follows the host directly.
    pub query: Option<&'a str>,
    /// Input left over after the matched prefix.
    pub rest: &'a str,
}

/// Checks that `url` starts with a well-formed URL.
pub fn validate_url(url: &str) -> bool {
    match_url(url).is_some()
}

/// Matches the URL grammar against the start of `url`.
pub fn match_url(url: &str) -> Option<UrlMatch<'_>> {
    if url.is_empty() {
        return None;
    }

    let scheme_match = URL_SCHEME_REGEX.captures(url)?;
    let scheme = scheme_match.get(1)?.as_str();
    let authority = &url[scheme_match.get(0)?.end()..];

    userinfo_ends(authority).into_iter().find_map(|userinfo_end| {
        let userinfo = (userinfo_end > 0).then(|| &authority[..userinfo_end - 1]);
        let remainder = &authority[userinfo_end..];
        let host = match_host(remainder)?;

        let (port, path, query, rest) = split_tail(&remainder[host.len()..]);
        Some(UrlMatch {
            scheme,
            userinfo,
            host,
            port,
            path,
            query,
            rest,
        })
    })
}

/// Offsets right after each possible userinfo, longest first. `0` stands for
/// no userinfo at all.
fn userinfo_ends(authority: &str) -> Vec<usize> {
    let mut ends = vec![0];
    let mut offset = 0;

    for _ in 0..MAX_USERINFO_SEGMENTS {
        match URL_USERINFO_SEGMENT_REGEX.find(&authority[offset..]) {
            Some(segment) => {
                offset += segment.end();
                ends.push(offset);
            }
            None => break,
        }
    }

    ends.reverse();
    ends
}

fn match_host(input: &str) -> Option<&str> {
    let run = URL_HOST_RUN_REGEX.find(input)?.as_str();
    if run.len() > MAX_HOST_LENGTH || !URL_HOST_REGEX.is_match(run) {
        return None;
    }
    Some(run)
}

type Tail<'a> = (Option<&'a str>, Option<&'a str>, Option<&'a str>, &'a str);

fn split_tail(input: &str) -> Tail<'_> {
    let Some(tail) = URL_TAIL_REGEX.captures(input) else {
        return (None, None, None, input);
    };

    let consumed = tail.get(0).map_or(0, |m| m.end());
    (
        tail.get(1).map(|m| m.as_str()),
        tail.get(2).map(|m| m.as_str()),
        tail.get(3).map(|m| m.as_str()),
        &input[consumed..],
    )
}
