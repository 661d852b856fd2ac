//! Built-in `help` command listing registered commands.

use async_trait::async_trait;
use minijinja::{Environment, context};
use thiserror::Error;

use super::CommandSummary;
use crate::command::domain::{CommandContext, CommandRequest};
use crate::command::ports::{CommandHandler, ResponseResult, ResponseWriter};

/// Pattern under which the help listing is registered.
pub const HELP_PATTERN: &str = "help";

const HELP_DESCRIPTION: &str = "List the commands this bot understands";

const HELP_TEMPLATE: &str = "\
{%- for command in commands -%}
*{{ command.pattern }}*{% if command.description %} - _{{ command.description }}_{% endif %}
{% for example in command.examples -%}
> _Example:_ `{{ example }}`
{% endfor -%}
{%- endfor -%}";

/// Rendering the help listing failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("help listing could not be rendered: {0}")]
pub struct HelpTemplateError(pub String);

/// Replies with a pre-rendered listing of commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpHandler {
    listing: String,
}

impl HelpHandler {
    /// Renders the listing for `commands` followed by the help command itself.
    ///
    /// # Errors
    ///
    /// Returns [`HelpTemplateError`] when the listing cannot be rendered.
    pub fn new(commands: impl IntoIterator<Item = CommandSummary>) -> Result<Self, HelpTemplateError> {
        let mut summaries: Vec<CommandSummary> = commands
            .into_iter()
            .filter(|summary| summary.pattern != HELP_PATTERN)
            .collect();
        summaries.push(Self::summary());

        let environment = Environment::new();
        let listing = environment
            .render_str(HELP_TEMPLATE, context! { commands => summaries })
            .map_err(|error| HelpTemplateError(error.to_string()))?;
        Ok(Self {
            listing: listing.trim_end().to_owned(),
        })
    }

    /// Summary describing the help command.
    #[must_use]
    pub fn summary() -> CommandSummary {
        CommandSummary {
            pattern: HELP_PATTERN.to_owned(),
            description: Some(HELP_DESCRIPTION.to_owned()),
            examples: Vec::new(),
        }
    }

    /// Description registered alongside the handler.
    #[must_use]
    pub const fn description() -> &'static str {
        HELP_DESCRIPTION
    }

    /// The rendered listing.
    #[must_use]
    pub fn listing(&self) -> &str {
        &self.listing
    }
}

#[async_trait]
impl CommandHandler for HelpHandler {
    async fn handle(
        &self,
        _context: &CommandContext,
        _request: &CommandRequest,
        response: &dyn ResponseWriter,
    ) -> ResponseResult<()> {
        response.reply(&self.listing).await
    }
}
