//! Channel link parsing.
//!
//! Pulls the channel identifier (path segment after `/channel/`) and the
//! group identifier (`groupId` query value) out of a Teams channel link.
//! There is no URL validation beyond the pattern itself.

mod percent;

pub use percent::{percent_decode, DecodeError};

use regex::Regex;
use std::sync::OnceLock;

use crate::pair::IdentifierPair;

/// `/channel/<segment>/` followed anywhere later by `groupId=<value>`.
/// `.*` is greedy, so the last `groupId` in the line wins.
const CHANNEL_LINK_PATTERN: &str = r"/channel/([^/]+)/.*groupId=([^&]+)";

fn channel_link_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(CHANNEL_LINK_PATTERN).expect("channel link pattern compiles"))
}

/// Raw (still encoded) captures from a matching line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMatch<'a> {
    pub encoded_channel: &'a str,
    pub group_id: &'a str,
}

/// First match of the channel link pattern in `url`, without decoding.
pub fn match_channel_link(url: &str) -> Option<RawMatch<'_>> {
    let caps = channel_link_regex().captures(url)?;
    Some(RawMatch {
        encoded_channel: caps.get(1)?.as_str(),
        group_id: caps.get(2)?.as_str(),
    })
}

/// Parses one line into an identifier pair.
///
/// A line that does not match yields an absent pair silently. A line whose
/// channel segment fails to decode yields an absent pair and a warning
/// carrying the URL.
pub fn parse_url(url: &str) -> IdentifierPair {
    let Some(raw) = match_channel_link(url) else {
        return IdentifierPair::absent();
    };

    match percent_decode(raw.encoded_channel) {
        Ok(channel_id) => IdentifierPair::new(raw.group_id, channel_id),
        Err(err) => {
            tracing::warn!("error parsing URL {}: {}", url, err);
            IdentifierPair::absent()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEAMS_LINK: &str = "https://teams.microsoft.com/l/channel/19%3Aabc123%40thread.tacv2/General?groupId=11111111-2222-3333-4444-555555555555&tenantId=xyz";

    #[test]
    fn parses_teams_channel_link() {
        assert_eq!(
            parse_url(TEAMS_LINK),
            IdentifierPair::new(
                "11111111-2222-3333-4444-555555555555",
                "19:abc123@thread.tacv2"
            )
        );
    }

    #[test]
    fn group_id_at_end_of_line() {
        let pair = parse_url("https://teams.microsoft.com/l/channel/abc/General?tenantId=t&groupId=g-1");
        assert_eq!(pair, IdentifierPair::new("g-1", "abc"));
    }

    #[test]
    fn group_id_is_not_decoded() {
        let pair = parse_url("https://x/l/channel/c/n?groupId=a%20b");
        assert_eq!(pair.group_id.as_deref(), Some("a%20b"));
    }

    #[test]
    fn last_group_id_wins() {
        let pair = parse_url("https://x/l/channel/c/n?groupId=first&groupId=second");
        assert_eq!(pair.group_id.as_deref(), Some("second"));
    }

    #[test]
    fn first_channel_segment_wins() {
        let line = "https://x/l/channel/one/n?groupId=g1 https://x/l/channel/two/n?groupId=g2";
        let pair = parse_url(line);
        assert_eq!(pair.channel_id.as_deref(), Some("one"));
    }

    #[test]
    fn non_matching_lines_are_absent() {
        for line in [
            "",
            "not a url",
            "https://teams.microsoft.com/l/team/19%3Aabc/General?groupId=g",
            // channel segment must be followed by another '/'
            "https://x/l/channel/abc?groupId=g",
            "https://x/l/channel/abc/General?tenantId=t",
            // case-sensitive
            "https://x/l/Channel/abc/General?groupId=g",
            "https://x/l/channel/abc/General?groupid=g",
            "https://x/l/channel/abc/General?groupId=&tenantId=t",
        ] {
            assert_eq!(parse_url(line), IdentifierPair::absent(), "line: {line:?}");
        }
    }

    #[test]
    fn malformed_escape_is_absent() {
        let pair = parse_url("https://x/l/channel/19%ZZabc/General?groupId=g");
        assert_eq!(pair, IdentifierPair::absent());
    }

    #[test]
    fn raw_match_keeps_encoding() {
        let raw = match_channel_link(TEAMS_LINK).unwrap();
        assert_eq!(raw.encoded_channel, "19%3Aabc123%40thread.tacv2");
        assert_eq!(raw.group_id, "11111111-2222-3333-4444-555555555555");
    }
}
