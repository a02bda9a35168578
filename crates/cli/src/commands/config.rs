// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notelink Contributors

//! Configuration management commands.
//!
//! Every mutation loads the settings, edits them addressed by stable
//! identity (title or URL for instances, abbreviation for projects), and
//! saves them back in one invocation.

use crate::cli::{ConfigCommand, OutputFormat};
use crate::config::{find_note_dir, Settings};
use crate::error::Result;

/// Execute a config subcommand.
pub fn run(cmd: ConfigCommand) -> Result<()> {
    let note_dir = find_note_dir()?;
    let mut settings = Settings::load(&note_dir)?;

    match cmd {
        ConfigCommand::Show { output } => {
            show(&settings, output)?;
            return Ok(());
        }
        ConfigCommand::AddInstance {
            url,
            title,
            default,
        } => {
            let name = settings
                .add_instance(&url, title.as_deref(), default)
                .display_name()
                .to_string();
            println!("Added instance {}", name);
        }
        ConfigCommand::RemoveInstance { instance } => {
            let removed = settings.remove_instance(&instance)?;
            println!("Removed instance {}", removed.display_name());
        }
        ConfigCommand::DefaultInstance { instance } => {
            let name = settings.set_default_instance(&instance)?.display_name().to_string();
            println!("{} is now the default instance", name);
        }
        ConfigCommand::AddProject { abbreviation, name } => {
            settings.add_project(&abbreviation, &name);
            println!("Added project {} ({})", name, abbreviation);
        }
        ConfigCommand::RemoveProject { abbreviation } => {
            let removed = settings.remove_project(&abbreviation)?;
            println!("Removed project {} ({})", removed.name, removed.abbreviation);
        }
        ConfigCommand::IssuePath { path } => {
            settings.local.issue_path = path.clone();
            println!("Set local issue path to {}", path);
        }
        ConfigCommand::InfoFile { name } => {
            settings.local.info_file = name.clone();
            println!("Set local info file to {}", name);
        }
        ConfigCommand::Newline { value } => {
            settings.input.insert_newline_on_enter = value;
            println!("Set insert-newline-on-enter to {}", value);
        }
        ConfigCommand::AutoProject { value } => {
            settings.input.use_first_project_as_default = value;
            println!("Set use-first-project-as-default to {}", value);
        }
    }

    settings.save(&note_dir)
}

/// Print the configuration without modifying it.
fn show(settings: &Settings, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Text => {
            println!("Instances:");
            if settings.instances.is_empty() {
                println!("  (none configured)");
            }
            for instance in &settings.instances {
                let marker = if instance.is_default { " (default)" } else { "" };
                if instance.title.is_empty() {
                    println!("  {}{}", instance.url, marker);
                } else {
                    println!("  {}: {}{}", instance.title, instance.url, marker);
                }
            }

            println!("Projects:");
            if settings.projects.is_empty() {
                println!("  (none configured)");
            }
            for project in &settings.projects {
                println!("  {}: {}", project.abbreviation, project.name);
            }

            println!("Local references:");
            println!("  issue path: {}", settings.local.issue_path);
            println!("  info file: {}", settings.local.info_file);

            println!("Input:");
            println!(
                "  insert newline on enter: {}",
                settings.input.insert_newline_on_enter
            );
            println!(
                "  use first project as default: {}",
                settings.input.use_first_project_as_default
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(settings).map_err(|e| {
                crate::error::Error::Config(format!("failed to serialize config: {}", e))
            })?);
        }
    }
    Ok(())
}
