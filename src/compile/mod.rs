mod error;
mod options;
mod registry;
mod render;

pub use error::{CompileError, CompileResult};
pub use options::{
    CompileFlags, CompileOptions, CompileOptionsBuilder, DEFAULT_DFA_SIZE_LIMIT,
    DEFAULT_NEST_LIMIT, DEFAULT_SIZE_LIMIT, OptionsError,
};
pub use registry::NameRegistry;
pub use render::{Rendered, render};

use crate::expr::Expr;
use crate::pattern::Pattern;
use regex::Regex;

/// Renders and compiles `expr` with default options.
///
/// Every call does the full render and engine compile; keep the returned
/// [`Pattern`] around (see [`crate::PatternCell`]) instead of calling this in
/// a loop.
pub fn compile(expr: &Expr) -> CompileResult<Pattern> {
    compile_with(expr, &CompileOptions::default())
}

#[tracing::instrument(level = "trace", skip_all, fields(flags = ?options.flags))]
pub fn compile_with(expr: &Expr, options: &CompileOptions) -> CompileResult<Pattern> {
    options.validate()?;

    let Rendered { text, names } = render(expr)?;
    let regex = build_regex(options, &text)?;
    let anchored = build_regex(options, &format!(r"\A(?:{text})"))?;

    if let Err(detail) = names.verify(&regex) {
        tracing::error!(pattern = %text, %detail, "name registry out of sync with engine");
        return Err(CompileError::RegistryMismatch {
            pattern: text,
            detail,
        });
    }

    tracing::debug!(
        pattern = %text,
        groups = names.group_count(),
        named = names.len(),
        "compiled pattern"
    );

    Ok(Pattern::from_parts(text, regex, anchored, names))
}

fn build_regex(options: &CompileOptions, text: &str) -> CompileResult<Regex> {
    options.regex_builder(text).build().map_err(|source| {
        tracing::error!(pattern = %text, error = %source, "regex engine rejected rendered pattern");
        CompileError::Engine {
            pattern: text.to_string(),
            source,
        }
    })
}
