//! Config subcommand handlers.

use dialoguer::Input;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output;

// ── Helpers ─────────────────────────────────────────────────────────

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

fn parse_server(value: &str) -> Result<String, CliError> {
    let url: url::Url = value.parse().map_err(|_| CliError::Validation {
        field: "server".into(),
        reason: format!("invalid URL: {value}"),
    })?;
    Ok(url.to_string())
}

fn save_config(cfg: &Config) -> Result<(), CliError> {
    config::save_config(cfg)?;
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init ────────────────────────────────────────────────────
        ConfigCommand::Init { name, url } => {
            let mut cfg = config::load_config_or_default();

            let profile_name = match name {
                Some(n) => n,
                None => Input::new()
                    .with_prompt("Profile name")
                    .default("default".into())
                    .interact_text()
                    .map_err(prompt_err)?,
            };
            let server = match url {
                Some(u) => u,
                None => Input::new()
                    .with_prompt("Catalog server URL")
                    .default("http://localhost:8080".into())
                    .interact_text()
                    .map_err(prompt_err)?,
            };
            let server = parse_server(&server)?;

            cfg.profiles.insert(
                profile_name.clone(),
                Profile {
                    server,
                    timeout: None,
                },
            );
            if cfg.default_profile.is_none() || cfg.profiles.len() == 1 {
                cfg.default_profile = Some(profile_name.clone());
            }
            save_config(&cfg)?;

            if !global.quiet {
                eprintln!(
                    "✓ Profile '{profile_name}' saved to {}",
                    config::config_path().display()
                );
            }
            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            let toml_text = toml::to_string_pretty(&cfg).map_err(config::ConfigError::from)?;
            let out = output::render_single(
                &global.output,
                &cfg,
                |_| toml_text.trim_end().to_owned(),
                |c| config::active_profile_name(global, c),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            println!("{}", config::config_path().display());
            Ok(())
        }

        // ── Set <key> <value> ───────────────────────────────────────
        ConfigCommand::Set { key, value } => {
            let mut cfg = config::load_config_or_default();
            let profile_name = config::active_profile_name(global, &cfg);

            let profile = cfg
                .profiles
                .entry(profile_name.clone())
                .or_insert_with(|| Profile {
                    server: String::new(),
                    timeout: None,
                });

            match key.as_str() {
                "server" | "url" => profile.server = parse_server(&value)?,
                "timeout" => {
                    profile.timeout = Some(value.parse().map_err(|_| CliError::Validation {
                        field: "timeout".into(),
                        reason: "must be a number (seconds)".into(),
                    })?);
                }
                other => {
                    return Err(CliError::Validation {
                        field: other.into(),
                        reason: format!("unknown config key '{other}'. Valid keys: server, timeout"),
                    });
                }
            }

            save_config(&cfg)?;
            if !global.quiet {
                eprintln!("✓ Set {key} on profile '{profile_name}'");
            }
            Ok(())
        }

        // ── Profiles ────────────────────────────────────────────────
        ConfigCommand::Profiles => {
            let cfg = config::load_config_or_default();
            let default = cfg.default_profile.as_deref().unwrap_or("default");
            if cfg.profiles.is_empty() {
                eprintln!("No profiles configured. Run: coinly config init");
            } else {
                let mut names: Vec<_> = cfg.profiles.keys().collect();
                names.sort();
                for name in names {
                    let marker = if name == default { " *" } else { "" };
                    println!("{name}{marker}");
                }
            }
            Ok(())
        }

        // ── Use <name> ─────────────────────────────────────────────
        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config_or_default();

            if !cfg.profiles.contains_key(&name) {
                return Err(CliError::ProfileNotFound {
                    available: config::available_profiles(&cfg),
                    name,
                });
            }

            cfg.default_profile = Some(name.clone());
            save_config(&cfg)?;
            if !global.quiet {
                eprintln!("✓ Default profile set to '{name}'");
            }
            Ok(())
        }
    }
}
