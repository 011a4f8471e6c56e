//! Interactive collection of the view name and route.

use dialoguer::Input;
use kogen_core::ViewSpec;

/// Source of free-text answers.
pub trait Prompter {
    /// Ask once and block until a line is entered. Empty answers are allowed.
    fn ask(&mut self, label: &str) -> Result<String, Box<dyn std::error::Error>>;
}

/// Prompts on the terminal with `dialoguer`.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, label: &str) -> Result<String, Box<dyn std::error::Error>> {
        let answer = Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }
}

/// Build a [`ViewSpec`], prompting for whichever of `name` and `route` was
/// not supplied (or supplied empty). The name is asked first.
pub fn collect(
    name: Option<String>,
    route: Option<String>,
    template_only: bool,
    prompter: &mut dyn Prompter,
) -> Result<ViewSpec, Box<dyn std::error::Error>> {
    let name = match name {
        Some(name) if !name.is_empty() => name,
        _ => prompter.ask("name")?,
    };
    let route = match route {
        Some(route) if !route.is_empty() => route,
        _ => prompter.ask("route")?,
    };

    tracing::debug!(%name, %route, template_only, "collected view");
    Ok(ViewSpec::new(name, route, template_only))
}
