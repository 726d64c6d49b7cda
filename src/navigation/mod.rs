//! Step navigation: prompt, handle, retry, step back, or go home.
//!
//! Every interactive question in the desk runs through [`Navigator::run_step`].
//! The user can always type the cancel token to step back one level or the
//! home token to return to the start menu. A handler decides what the rest of
//! the input means by returning a [`StepOutcome`].
//!
//! Steps nest: a handler may run further steps and fold their [`Navigation`]
//! result into its own outcome with [`Navigation::into_outcome`]. A nested
//! `Cancelled` keeps the user at the enclosing prompt, while `Home` passes
//! through every enclosing step without prompting again.

pub mod console;

pub use console::{Console, StdConsole};

use crate::config::Config;
use std::io;
use tracing::debug;

/// Result of a completed step, as seen by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation<T> {
    /// The user stepped back one level.
    Cancelled,

    /// The user asked for the start menu.
    Home,

    /// The handler accepted the input.
    Value(T),
}

impl<T> Navigation<T> {
    /// Fold a nested step's result into the enclosing handler's outcome.
    pub fn into_outcome(self) -> StepOutcome<T> {
        match self {
            Navigation::Cancelled => StepOutcome::Stay,
            Navigation::Home => StepOutcome::Home,
            Navigation::Value(value) => StepOutcome::Value(value),
        }
    }

    /// Like [`into_outcome`](Self::into_outcome) but discards the value, for
    /// nested menus whose completion should bring the user back here.
    pub fn stay_unless_home<U>(self) -> StepOutcome<U> {
        match self {
            Navigation::Home => StepOutcome::Home,
            _ => StepOutcome::Stay,
        }
    }

    pub fn value(self) -> Option<T> {
        match self {
            Navigation::Value(value) => Some(value),
            _ => None,
        }
    }
}

/// What a step handler made of one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome<T> {
    /// Accepted; the step ends with this value.
    Value(T),

    /// Rejected; print the step's warning and prompt again.
    Invalid,

    /// Prompt again without a warning. The handler has already told the user
    /// what happened, or a nested step was cancelled.
    Stay,

    /// Return to the start menu.
    Home,
}

impl<T> From<Option<T>> for StepOutcome<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => StepOutcome::Value(value),
            None => StepOutcome::Invalid,
        }
    }
}

/// Which navigation hint is printed above a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavHint {
    None,
    Back,
    BackAndHome,
}

/// Presentation of one step.
#[derive(Debug, Clone)]
pub struct Step<'a> {
    indent: &'a str,
    hint: NavHint,
    prompt: &'a str,
    warning: &'a str,
}

impl<'a> Step<'a> {
    pub fn new(prompt: &'a str) -> Self {
        Self {
            indent: "",
            hint: NavHint::None,
            prompt,
            warning: "Invalid input. Please, use options above.",
        }
    }

    pub fn indent(mut self, indent: &'a str) -> Self {
        self.indent = indent;
        self
    }

    pub fn hint(mut self, hint: NavHint) -> Self {
        self.hint = hint;
        self
    }

    pub fn warning(mut self, warning: &'a str) -> Self {
        self.warning = warning;
        self
    }
}

/// Runs steps with a fixed pair of navigation tokens.
#[derive(Debug, Clone)]
pub struct Navigator {
    cancel_token: String,
    home_token: String,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new("x", "q")
    }
}

impl Navigator {
    pub fn new(cancel_token: impl Into<String>, home_token: impl Into<String>) -> Self {
        Self {
            cancel_token: cancel_token.into(),
            home_token: home_token.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.cancel_token.clone(), config.home_token.clone())
    }

    pub fn cancel_token(&self) -> &str {
        &self.cancel_token
    }

    pub fn home_token(&self) -> &str {
        &self.home_token
    }

    /// Render a navigation hint with the configured tokens.
    pub fn hint_text(&self, hint: NavHint) -> Option<String> {
        match hint {
            NavHint::None => None,
            NavHint::Back => Some(format!("{} - <==", self.cancel_token)),
            NavHint::BackAndHome => Some(format!(
                "{} - <== // {} - home",
                self.cancel_token, self.home_token
            )),
        }
    }

    /// Prompt until the handler accepts the input or the user navigates away.
    ///
    /// The handler is never called with a navigation token. Invalid input is
    /// retried without limit.
    ///
    /// # Errors
    ///
    /// Console failures and any error the handler returns.
    pub fn run_step<C, T, E, F>(
        &self,
        ctx: &mut C,
        step: &Step<'_>,
        mut handler: F,
    ) -> Result<Navigation<T>, E>
    where
        C: Console,
        E: From<io::Error>,
        F: FnMut(&mut C, &str) -> Result<StepOutcome<T>, E>,
    {
        loop {
            if let Some(hint) = self.hint_text(step.hint) {
                ctx.print(&format!("\n{}{}", step.indent, hint))?;
            }
            let input = ctx.read_line(&format!("{}{}", step.indent, step.prompt))?;

            if input == self.cancel_token {
                debug!("Step cancelled: {}", step.prompt.trim());
                return Ok(Navigation::Cancelled);
            }
            if input == self.home_token {
                debug!("Home requested at: {}", step.prompt.trim());
                return Ok(Navigation::Home);
            }

            match handler(ctx, &input)? {
                StepOutcome::Value(value) => return Ok(Navigation::Value(value)),
                StepOutcome::Home => return Ok(Navigation::Home),
                StepOutcome::Invalid => {
                    ctx.print(&format!("{}{}", step.indent, step.warning))?;
                }
                StepOutcome::Stay => {}
            }
        }
    }
}
