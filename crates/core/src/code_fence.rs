//! Code fence detection for line-by-line sanitization.
//!
//! Every sanitization pass must leave fenced code content byte-identical,
//! so each pass threads a fence state through a fold over lines.

/// Fence phases tracked across lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FenceState {
    /// Not currently inside a fenced code block.
    #[default]
    Outside,
    /// Within fence contents.
    Inside,
}

impl FenceState {
    /// Returns whether we are inside fence contents.
    pub fn is_inside(self) -> bool {
        matches!(self, FenceState::Inside)
    }
}

/// Outcome of advancing the fence state over a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineOutcome {
    /// State to carry into the next line.
    pub next_state: FenceState,
    /// Whether the line must pass through untouched (a delimiter line or
    /// fence content).
    pub skip_escaping: bool,
}

/// Whether the whole trimmed line is a fence delimiter: three backticks,
/// optionally followed by a language tag, and nothing else.
///
/// Exact-line-match rather than substring match, so a backtick run
/// appearing mid-sentence never toggles the state.
pub fn is_fence_delimiter(line: &str) -> bool {
    let Some(rest) = line.trim().strip_prefix("```") else {
        return false;
    };
    rest.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '+' | '.' | '#'))
}

/// Advance the fence state for one line.
///
/// Pure function of `(line, state)`; the caller owns the fold. An
/// unterminated fence at end of document simply leaves the state
/// `Inside`, so the remainder passes through unescaped.
pub fn advance_fence_state(line: &str, state: FenceState) -> LineOutcome {
    if is_fence_delimiter(line) {
        let next_state = match state {
            FenceState::Outside => FenceState::Inside,
            FenceState::Inside => FenceState::Outside,
        };
        return LineOutcome {
            next_state,
            skip_escaping: true,
        };
    }
    LineOutcome {
        next_state: state,
        skip_escaping: state.is_inside(),
    }
}
