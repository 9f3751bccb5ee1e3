//! Parsing for plain `KEY=VALUE` connection files.

use std::collections::HashMap;

/// Parse `KEY=VALUE` lines into a map.
///
/// Keys and values are trimmed of surrounding whitespace; lines without an
/// `=` are ignored. Later lines win on duplicate keys.
pub fn parse_env_file(contents: &str) -> HashMap<String, String> {
  contents
    .lines()
    .filter_map(|line| {
      let (key, value) = line.split_once('=')?;
      Some((key.trim().to_owned(), value.trim().to_owned()))
    })
    .collect()
}
