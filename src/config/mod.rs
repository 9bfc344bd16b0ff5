pub mod parse;

pub use parse::*;

/// How positional and batch counts are turned into cell values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// `atoi`-compatible: malformed input falls back to a number instead of
    /// failing.
    #[default]
    Lenient,
    /// Only plain non-negative integers that fit in a `u32` are accepted.
    Strict,
}

impl std::str::FromStr for ParseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lenient" | "atoi" => Ok(ParseMode::Lenient),
            "strict" => Ok(ParseMode::Strict),
            _ => Err(format!(
                "Unknown parse mode: {}. Use 'lenient' or 'strict'",
                s
            )),
        }
    }
}

impl std::fmt::Display for ParseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseMode::Lenient => write!(f, "lenient"),
            ParseMode::Strict => write!(f, "strict"),
        }
    }
}

/// Settings shared by single-table and batch runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunConfig {
    pub parse_mode: ParseMode,
    pub verbose: bool,
}

impl RunConfig {
    /// Parse one count under the configured mode.
    pub fn parse_count(&self, s: &str) -> Result<ParsedCount, String> {
        parse_count(s, self.parse_mode)
    }
}
