use std::sync::OnceLock;

use super::Pattern;
use crate::compile::{CompileOptions, compile_with};
use crate::errors::PatternResult;
use crate::expr::Expr;

/// Caller-owned slot that compiles an expression on first use and hands out
/// the same [`Pattern`] afterwards.
///
/// Threads that race on the first `get` may each compile; the first result
/// stored wins and the rest are dropped. The outcome is the same either way,
/// only the work is repeated.
#[derive(Debug)]
pub struct PatternCell {
    slot: OnceLock<Pattern>,
    factory: fn() -> PatternResult<Expr>,
    options: Option<CompileOptions>,
}

impl PatternCell {
    pub const fn new(factory: fn() -> PatternResult<Expr>) -> Self {
        Self {
            slot: OnceLock::new(),
            factory,
            options: None,
        }
    }

    pub fn with_options(factory: fn() -> PatternResult<Expr>, options: CompileOptions) -> Self {
        Self {
            slot: OnceLock::new(),
            factory,
            options: Some(options),
        }
    }

    pub fn get(&self) -> PatternResult<&Pattern> {
        if let Some(pattern) = self.slot.get() {
            return Ok(pattern);
        }

        let expr = (self.factory)()?;
        let options = self.options.clone().unwrap_or_default();
        let pattern = compile_with(&expr, &options)?;
        Ok(self.slot.get_or_init(|| pattern))
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.get().is_some()
    }
}
