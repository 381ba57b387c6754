//! Output rendering for extracted pairs.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};
use std::fmt;
use std::io;

use crate::pair::{IdentifierPair, PairRecord};

/// Output representation selected on the command line or in config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `group;channel` pairs joined with `,`. Also accepted as `glean`.
    #[default]
    #[serde(alias = "glean")]
    Pair,
    /// Channel identifiers joined with `,`.
    Channels,
    /// Group identifiers joined with `,`.
    Groups,
    /// Pretty-printed JSON array of `{group_id, channel_id}` objects.
    Json,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Pair => "pair",
            OutputFormat::Channels => "channels",
            OutputFormat::Groups => "groups",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const LIST_SEPARATOR: &str = ",";
const PAIR_SEPARATOR: &str = ";";
const JSON_INDENT: &[u8] = b"    ";

/// Renders `pairs` as a single string. Incomplete pairs are skipped; input
/// order is kept.
pub fn render(pairs: &[IdentifierPair], format: OutputFormat) -> Result<String> {
    let records: Vec<PairRecord<'_>> = pairs.iter().filter_map(IdentifierPair::complete).collect();

    let out = match format {
        OutputFormat::Channels => join(records.iter().map(|r| r.channel_id.to_string())),
        OutputFormat::Groups => join(records.iter().map(|r| r.group_id.to_string())),
        OutputFormat::Pair => join(
            records
                .iter()
                .map(|r| format!("{}{}{}", r.group_id, PAIR_SEPARATOR, r.channel_id)),
        ),
        OutputFormat::Json => to_pretty_json(&records)?,
    };
    Ok(out)
}

fn join(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join(LIST_SEPARATOR)
}

/// Pretty printer that escapes every non-ASCII char as `\uXXXX`
/// (UTF-16 surrogate pairs above U+FFFF).
struct AsciiPrettyFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl<'a> AsciiPrettyFormatter<'a> {
    fn with_indent(indent: &'a [u8]) -> Self {
        Self {
            inner: PrettyFormatter::with_indent(indent),
        }
    }
}

impl Formatter for AsciiPrettyFormatter<'_> {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if c.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

fn to_pretty_json(records: &[PairRecord<'_>]) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser =
        Serializer::with_formatter(&mut buf, AsciiPrettyFormatter::with_indent(JSON_INDENT));
    records
        .serialize(&mut ser)
        .context("serialize pairs as JSON")?;
    String::from_utf8(buf).context("JSON output is not UTF-8")
}
