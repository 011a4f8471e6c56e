use colored::Colorize;
use kogen_core::config::{self, Origin, ResolvedConfig};
use kogen_core::GeneratorConfig;
use std::path::Path;

/// Print the resolved generator settings for the project at `dir`.
pub fn run(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let resolved = GeneratorConfig::load(dir)?;

    println!("{}", "Generator settings:".bold());
    println!();
    for (key, value, origin) in describe(&resolved) {
        println!(
            "  {:<20} {:<10} {}",
            key,
            value.cyan(),
            format!("({origin})").dimmed()
        );
    }

    Ok(())
}

/// Setting name, value, and origin for every setting.
pub fn describe(resolved: &ResolvedConfig) -> Vec<(&'static str, String, Origin)> {
    vec![
        (
            config::USE_REQUIRE_SYNTAX,
            resolved.config.use_require_syntax.to_string(),
            resolved.use_require_syntax_origin,
        ),
        (
            config::TEST_FRAMEWORK,
            resolved.config.test_framework.to_string(),
            resolved.test_framework_origin,
        ),
    ]
}
