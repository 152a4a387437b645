//! The stream parser: a single forward pass over a line source.
//!
//! The parser is a two-state machine. Before the first group header it is
//! in `NoGroup`, where any setting line is fatal. Each `[name]` header
//! moves it into (or between) groups; a repeated group name is fatal, as
//! is any line matching no known shape. Blank and comment lines never
//! change state. Lines are consumed exactly once, so arbitrarily large
//! files stream through without being buffered whole.
//!
//! Override resolution happens during the same pass. A line like
//! `path<production> = /srv/` is accepted whether or not `production` is
//! enabled, but only mutates the tree when it is. An enabled override
//! wins over the unconditional setting of the same key regardless of
//! which line comes first in the file.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};

use camino::Utf8PathBuf;
use tracing::{debug, trace};

use crate::coerce::coerce;
use crate::config::Config;
use crate::error::ParseError;
use crate::line;

/// The set of override names enabled for a parse call.
///
/// Built once, immutable for the duration of the parse. Membership is an
/// exact string match on the trimmed override name.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    names: HashSet<String>,
}

impl Overrides {
    /// An empty set: no override lines take effect.
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether an override name is enabled.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of enabled override names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no override names are enabled.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Overrides {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// A configured parser: the source identity used in error reporting plus
/// the enabled override set.
#[derive(Debug, Clone)]
pub struct Parser {
    source: Utf8PathBuf,
    overrides: Overrides,
}

/// Transient state for one parse call. Created at parse start, mutated
/// line by line, and either turned into the final tree or abandoned on
/// the first error.
#[derive(Default)]
struct ParseState {
    config: Config,
    current_group: Option<String>,
    line_number: usize,
    /// Keys in the current group already written by an enabled override.
    /// An unconditional line never clobbers these.
    overridden_keys: HashSet<String>,
}

impl Parser {
    /// Create a parser for the given source. For in-memory parses the
    /// source is only used as the file identity in error messages.
    pub fn new(source: impl Into<Utf8PathBuf>) -> Self {
        Self {
            source: source.into(),
            overrides: Overrides::none(),
        }
    }

    /// Set the enabled override names.
    pub fn overrides<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.overrides = names.into_iter().collect();
        self
    }

    /// Open the source file and parse it line by line.
    ///
    /// The file is streamed, never held in memory whole. I/O failures
    /// surface with the underlying [`std::io::Error`] as their source.
    pub fn load(&self) -> Result<Config, ParseError> {
        let file = File::open(self.source.as_std_path()).map_err(|e| ParseError::Io {
            file: self.source.clone(),
            source: e,
        })?;
        let reader = BufReader::new(file);

        let mut state = ParseState::default();
        for line in reader.lines() {
            let line = line.map_err(|e| ParseError::Io {
                file: self.source.clone(),
                source: e,
            })?;
            self.parse_line(&mut state, &line)?;
        }
        self.finish(state)
    }

    /// Parse configuration from a string.
    pub fn parse_str(&self, contents: &str) -> Result<Config, ParseError> {
        self.parse_lines(contents.lines())
    }

    /// Parse configuration from an arbitrary line source.
    pub fn parse_lines<'a, I>(&self, lines: I) -> Result<Config, ParseError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut state = ParseState::default();
        for line in lines {
            self.parse_line(&mut state, line)?;
        }
        self.finish(state)
    }

    /// Classify and apply one raw line.
    fn parse_line(&self, state: &mut ParseState, raw: &str) -> Result<(), ParseError> {
        state.line_number += 1;

        let stripped = line::strip_comment(raw);
        let text: &str = &stripped;
        if text.is_empty() {
            return Ok(());
        }

        if let Some(name) = line::group_name(text) {
            if state.config.contains_group(name) {
                return Err(ParseError::DuplicateGroup {
                    group: name.to_string(),
                    file: self.source.clone(),
                    line: state.line_number,
                });
            }
            debug!(group = name, line = state.line_number, "opening group");
            state.config.insert_group(name.to_string());
            state.current_group = Some(name.to_string());
            state.overridden_keys.clear();
            return Ok(());
        }

        if let Some((key, raw_value)) = line::setting(text) {
            let Some(group) = state.current_group.clone() else {
                return Err(ParseError::MissingGroup {
                    file: self.source.clone(),
                    line: state.line_number,
                });
            };

            // Re-examine the whole line: the setting pattern's greedy key
            // capture swallows any `<override>` marker, so the override
            // pattern gets its own pass.
            match line::setting_override(text) {
                Some((base_key, override_name, value)) => {
                    if self.overrides.is_enabled(override_name) {
                        state
                            .config
                            .group_mut(&group)
                            .insert(base_key.to_string(), coerce(value));
                        state.overridden_keys.insert(base_key.to_string());
                    } else {
                        trace!(
                            key = base_key,
                            name = override_name,
                            line = state.line_number,
                            "skipping disabled override"
                        );
                    }
                }
                None => {
                    if !state.overridden_keys.contains(key) {
                        state
                            .config
                            .group_mut(&group)
                            .insert(key.to_string(), coerce(raw_value));
                    }
                }
            }
            return Ok(());
        }

        Err(ParseError::InvalidLine {
            file: self.source.clone(),
            line: state.line_number,
        })
    }

    fn finish(&self, state: ParseState) -> Result<Config, ParseError> {
        debug!(
            file = %self.source,
            groups = state.config.len(),
            lines = state.line_number,
            "parse complete"
        );
        Ok(state.config)
    }
}
