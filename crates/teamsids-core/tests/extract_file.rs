//! Integration test: link list on disk through the full read/parse/render pipeline.

use std::io::Write;

use teamsids_core::extract::extract_file;
use teamsids_core::format::OutputFormat;
use tempfile::{tempdir, NamedTempFile};

const LINKS: &str = "\
# Engineering team
https://teams.microsoft.com/l/channel/19%3Aabc123%40thread.tacv2/General?groupId=11111111-2222-3333-4444-555555555555&tenantId=xyz

not a channel link
   # indented comment
https://teams.microsoft.com/l/channel/19%3Adef456%40thread.tacv2/Random?groupId=66666666-7777-8888-9999-000000000000&tenantId=xyz
https://teams.microsoft.com/l/channel/19%ZZbroken/General?groupId=bad
";

fn links_file() -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(LINKS.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn pair_output() {
    let f = links_file();
    let out = extract_file(f.path(), OutputFormat::Pair).unwrap();
    assert_eq!(
        out,
        "11111111-2222-3333-4444-555555555555;19:abc123@thread.tacv2,\
         66666666-7777-8888-9999-000000000000;19:def456@thread.tacv2"
    );
}

#[test]
fn channels_and_groups_output() {
    let f = links_file();
    assert_eq!(
        extract_file(f.path(), OutputFormat::Channels).unwrap(),
        "19:abc123@thread.tacv2,19:def456@thread.tacv2"
    );
    assert_eq!(
        extract_file(f.path(), OutputFormat::Groups).unwrap(),
        "11111111-2222-3333-4444-555555555555,66666666-7777-8888-9999-000000000000"
    );
}

#[test]
fn json_output_parses_back_in_order() {
    let f = links_file();
    let out = extract_file(f.path(), OutputFormat::Json).unwrap();
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0]["group_id"], "11111111-2222-3333-4444-555555555555");
    assert_eq!(parsed[0]["channel_id"], "19:abc123@thread.tacv2");
    assert_eq!(parsed[1]["group_id"], "66666666-7777-8888-9999-000000000000");
    assert_eq!(parsed[1]["channel_id"], "19:def456@thread.tacv2");
}

#[test]
fn repeated_runs_are_identical() {
    let f = links_file();
    for format in [
        OutputFormat::Pair,
        OutputFormat::Channels,
        OutputFormat::Groups,
        OutputFormat::Json,
    ] {
        let first = extract_file(f.path(), format).unwrap();
        let second = extract_file(f.path(), format).unwrap();
        assert_eq!(first, second, "format {format}");
    }
}

#[test]
fn missing_file_renders_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("channels.txt");
    assert_eq!(extract_file(&path, OutputFormat::Pair).unwrap(), "");
    assert_eq!(extract_file(&path, OutputFormat::Channels).unwrap(), "");
    assert_eq!(extract_file(&path, OutputFormat::Groups).unwrap(), "");
    assert_eq!(extract_file(&path, OutputFormat::Json).unwrap(), "[]");
}

#[test]
fn comments_only_file_renders_empty() {
    let mut f = NamedTempFile::new().unwrap();
    writeln!(f, "# nothing here\n#https://x/l/channel/A/n?groupId=G").unwrap();
    f.flush().unwrap();
    assert_eq!(extract_file(f.path(), OutputFormat::Pair).unwrap(), "");
    assert_eq!(extract_file(f.path(), OutputFormat::Json).unwrap(), "[]");
}
