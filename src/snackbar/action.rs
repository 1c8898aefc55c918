// SPDX-License-Identifier: MPL-2.0
//! Action button of a snackbar.

use super::host::SnackbarId;
use super::text::Text;
use std::fmt;

/// Passed to an action callback when the action button is clicked.
#[derive(Debug)]
pub struct ClickContext {
    id: SnackbarId,
    dismiss_requested: bool,
}

impl ClickContext {
    #[must_use]
    pub fn new(id: SnackbarId) -> Self {
        Self {
            id,
            dismiss_requested: false,
        }
    }

    /// The snackbar whose action was clicked.
    #[must_use]
    pub fn id(&self) -> SnackbarId {
        self.id
    }

    /// Asks the host to dismiss the snackbar once the callback returns.
    pub fn dismiss(&mut self) {
        self.dismiss_requested = true;
    }

    #[must_use]
    pub fn dismiss_requested(&self) -> bool {
        self.dismiss_requested
    }
}

/// What happens when the action button is clicked.
#[derive(Default)]
pub enum ActionHandler {
    /// Dismiss the snackbar.
    #[default]
    Dismiss,
    /// Run a callback. The snackbar stays visible unless the callback calls
    /// [`ClickContext::dismiss`].
    Callback(Box<dyn FnMut(&mut ClickContext)>),
}

impl ActionHandler {
    pub fn callback<F>(f: F) -> Self
    where
        F: FnMut(&mut ClickContext) + 'static,
    {
        ActionHandler::Callback(Box::new(f))
    }

    /// Runs the handler for one click.
    pub fn invoke(&mut self, ctx: &mut ClickContext) {
        match self {
            ActionHandler::Dismiss => ctx.dismiss(),
            ActionHandler::Callback(callback) => callback(ctx),
        }
    }
}

impl fmt::Debug for ActionHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionHandler::Dismiss => f.write_str("Dismiss"),
            ActionHandler::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

/// Label and handler of the action button.
#[derive(Debug)]
pub struct SnackbarAction {
    pub label: Text,
    pub handler: ActionHandler,
}

impl SnackbarAction {
    /// `None` falls back to [`ActionHandler::Dismiss`].
    pub fn new(label: impl Into<Text>, handler: Option<ActionHandler>) -> Self {
        Self {
            label: label.into(),
            handler: handler.unwrap_or_default(),
        }
    }
}
