use crate::utils::error::{Result, SortError};
use regex::Regex;

/// Filename rule for one program: `-`, any number of bracketed tags like
/// `[字]` or `[XY]`, the literal title, then ` #`. Matches anywhere in the name.
/// Tags may be longer than one character so `-[XY]Title #01` is accepted too.
#[derive(Debug, Clone)]
pub struct TitlePattern {
    regex: Regex,
}

impl TitlePattern {
    pub fn new(title: &str) -> Result<Self> {
        let pattern = format!(r"-(\[[^\]]+\])*{} #", regex::escape(title));
        let regex = Regex::new(&pattern).map_err(|source| SortError::PatternCompile {
            title: title.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }

    pub fn is_match(&self, file_name: &str) -> bool {
        self.regex.is_match(file_name)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
