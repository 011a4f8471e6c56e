use colored::Colorize;
use kogen_core::GeneratorConfig;
use std::path::PathBuf;

use crate::prompt::{self, Prompter, TerminalPrompter};

/// Arguments of `kogen view`.
pub struct ViewArgs {
    pub name: Option<String>,
    pub route: Option<String>,
    pub template_only: bool,
    pub force: bool,
    /// Project root.
    pub dir: PathBuf,
}

/// Generate a view, prompting on the terminal for missing values.
pub fn run(args: ViewArgs) -> Result<(), Box<dyn std::error::Error>> {
    run_with(args, &mut TerminalPrompter, |key| std::env::var(key).ok())
}

/// Generate a view with answers taken from `prompter` and setting overrides
/// looked up through `env`.
///
/// Settings are loaded before prompting, so a broken `.yo-rc.json` fails the
/// run without asking anything.
pub fn run_with(
    args: ViewArgs,
    prompter: &mut dyn Prompter,
    env: impl Fn(&str) -> Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let resolved = GeneratorConfig::load_with_env(&args.dir, env)?;
    let spec = prompt::collect(args.name, args.route, args.template_only, prompter)?;

    let report = kogen_core::emit(&args.dir, &spec, &resolved.config, args.force)?;

    println!(
        "{} Registered {} -> {} in {}",
        "✓".green(),
        format!("'{}'", spec.route).cyan(),
        spec.name.cyan(),
        report.routes.display()
    );
    for file in &report.files {
        println!(
            "{} Created {}",
            "✓".green(),
            file.display().to_string().cyan()
        );
    }

    Ok(())
}
