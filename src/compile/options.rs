use bitflags::bitflags;
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SIZE_LIMIT: usize = 10 * (1 << 20);
pub const DEFAULT_DFA_SIZE_LIMIT: usize = 2 * (1 << 20);
pub const DEFAULT_NEST_LIMIT: u32 = 250;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct CompileFlags: u8 {
        const CASE_INSENSITIVE = 1 << 0;
        /// `^` and `$` match at line boundaries instead of only at the ends of the input.
        const MULTI_LINE = 1 << 1;
        const DOT_MATCHES_NEW_LINE = 1 << 2;
        /// With `MULTI_LINE`, treat `\r\n` as a line terminator.
        const CRLF = 1 << 3;
    }
}

impl Default for CompileFlags {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileOptions {
    pub flags: CompileFlags,
    pub size_limit: usize,
    pub dfa_size_limit: usize,
    pub nest_limit: u32,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            flags: CompileFlags::default(),
            size_limit: DEFAULT_SIZE_LIMIT,
            dfa_size_limit: DEFAULT_DFA_SIZE_LIMIT,
            nest_limit: DEFAULT_NEST_LIMIT,
        }
    }
}

impl CompileOptions {
    pub fn builder() -> CompileOptionsBuilder {
        CompileOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.size_limit == 0 {
            return Err(OptionsError::SizeLimitZero);
        }
        if self.dfa_size_limit == 0 {
            return Err(OptionsError::DfaSizeLimitZero);
        }
        if self.nest_limit == 0 {
            return Err(OptionsError::NestLimitZero);
        }
        Ok(())
    }

    pub(crate) fn regex_builder(&self, pattern: &str) -> RegexBuilder {
        let mut builder = RegexBuilder::new(pattern);
        builder
            .case_insensitive(self.flags.contains(CompileFlags::CASE_INSENSITIVE))
            .multi_line(self.flags.contains(CompileFlags::MULTI_LINE))
            .dot_matches_new_line(self.flags.contains(CompileFlags::DOT_MATCHES_NEW_LINE))
            .crlf(self.flags.contains(CompileFlags::CRLF))
            .size_limit(self.size_limit)
            .dfa_size_limit(self.dfa_size_limit)
            .nest_limit(self.nest_limit);
        builder
    }
}

#[derive(Debug, Default, Clone)]
pub struct CompileOptionsBuilder {
    options: CompileOptions,
}

impl CompileOptionsBuilder {
    pub fn flags(mut self, flags: CompileFlags) -> Self {
        self.options.flags = flags;
        self
    }

    pub fn case_insensitive(self, value: bool) -> Self {
        self.toggle(CompileFlags::CASE_INSENSITIVE, value)
    }

    pub fn multi_line(self, value: bool) -> Self {
        self.toggle(CompileFlags::MULTI_LINE, value)
    }

    pub fn dot_matches_new_line(self, value: bool) -> Self {
        self.toggle(CompileFlags::DOT_MATCHES_NEW_LINE, value)
    }

    pub fn crlf(self, value: bool) -> Self {
        self.toggle(CompileFlags::CRLF, value)
    }

    pub fn size_limit(mut self, value: usize) -> Self {
        self.options.size_limit = value;
        self
    }

    pub fn dfa_size_limit(mut self, value: usize) -> Self {
        self.options.dfa_size_limit = value;
        self
    }

    pub fn nest_limit(mut self, value: u32) -> Self {
        self.options.nest_limit = value;
        self
    }

    pub fn build(self) -> Result<CompileOptions, OptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }

    fn toggle(mut self, flag: CompileFlags, value: bool) -> Self {
        self.options.flags.set(flag, value);
        self
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("size_limit must be greater than zero")]
    SizeLimitZero,
    #[error("dfa_size_limit must be greater than zero")]
    DfaSizeLimitZero,
    #[error("nest_limit must be greater than zero")]
    NestLimitZero,
}
