//! Console output formatter for catalogues, prompts and readings

use arcana_application::{InterpretOutput, Interpretation};
use arcana_domain::{CatalogSource, ComposedPrompt, ModelCatalog, PromptRule};
use colored::Colorize;
use serde::Serialize;

/// JSON view of one reading
#[derive(Debug, Serialize)]
struct InterpretationView<'a> {
    model: Option<String>,
    catalog_source: CatalogSource,
    rule: String,
    interpretation: &'a Interpretation,
}

/// Formats command results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the model catalogue, marking the recommended entry
    pub fn format_catalog(catalog: &ModelCatalog) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Available Models"));
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n",
            "Source:".cyan().bold(),
            Self::source_label(catalog.source)
        ));
        if let Some(reason) = &catalog.fetch_error {
            output.push_str(&format!("{} {}\n", "Config error:".red().bold(), reason));
        }
        output.push('\n');

        for (i, model) in catalog.models.iter().enumerate() {
            let marker = if i == 0 {
                "*".green().bold().to_string()
            } else {
                " ".to_string()
            };
            output.push_str(&format!(
                "{} {:<36} {}\n",
                marker,
                model.composite_id().to_string(),
                model.display_name().dimmed()
            ));
        }

        output.push_str(&format!("\n{}\n", "* recommended".dimmed()));
        output
    }

    pub fn format_catalog_json(catalog: &ModelCatalog) -> String {
        serde_json::to_string_pretty(catalog).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a composed template with the rule that produced it
    pub fn format_prompt(prompt: &ComposedPrompt) -> String {
        format!(
            "{} {}\n{}\n{}\n",
            "Rule:".cyan().bold(),
            Self::rule_label(&prompt.rule),
            "-".repeat(40),
            prompt.template
        )
    }

    /// Format one reading
    pub fn format_interpretation(output: &InterpretOutput) -> String {
        let mut text = String::new();

        if let Some(model) = &output.model {
            text.push_str(&format!(
                "{} {} ({})\n",
                "Model:".dimmed(),
                model.display_name(),
                model.composite_id()
            ));
        }
        text.push_str(&format!(
            "{} {}\n\n",
            "Layout:".dimmed(),
            Self::rule_label(&output.rule)
        ));

        match &output.interpretation {
            Interpretation::Success { text: body } => {
                text.push_str(body.trim_end());
            }
            Interpretation::Empty { message } => {
                text.push_str(&message.yellow().to_string());
            }
            Interpretation::Failed(error) => {
                text.push_str(&format!(
                    "{} {}",
                    format!("[{}]", error.kind).red().bold(),
                    error.user_message
                ));
            }
        }
        text.push('\n');

        text
    }

    pub fn format_interpretation_json(output: &InterpretOutput) -> String {
        let view = InterpretationView {
            model: output.model.as_ref().map(|m| m.composite_id().to_string()),
            catalog_source: output.catalog_source,
            rule: Self::rule_label(&output.rule),
            interpretation: &output.interpretation,
        };
        serde_json::to_string_pretty(&view).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn rule_label(rule: &PromptRule) -> String {
        match rule {
            PromptRule::Known(spread) => format!("{} ({})", spread.display_name(), spread.id()),
            PromptRule::Inferred(spread) => {
                format!("{} ({}, from card count)", spread.display_name(), spread.id())
            }
            PromptRule::Fallback { card_count } => format!("free-form, {} cards", card_count),
        }
    }

    fn source_label(source: CatalogSource) -> String {
        match source {
            CatalogSource::Configured => source.to_string().green().to_string(),
            CatalogSource::CredentialFallback => source.to_string().yellow().to_string(),
            CatalogSource::Placeholder => source.to_string().red().to_string(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }
}
