//! Parley CLI - Speech broadcast preview
//!
//! Runs emits and says against a scene file and prints what every
//! recipient receives.

mod config;
mod console;
mod scene;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use parley::{Actor, BroadcastCoordinator, NoPoseBreak, Plane, Utterance};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use config::Config;
use console::{ConsolePoseBreak, ConsoleSink};
use scene::Scene;

#[derive(Parser)]
#[command(name = "parley")]
#[command(about = "Parley CLI - Plane- and language-aware speech broadcast", long_about = None)]
#[command(version)]
struct Cli {
    /// Log pipeline details to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SceneArgs {
    /// Scene file (defaults to the configured scene)
    #[arg(short, long)]
    scene: Option<PathBuf>,
    /// Override the speaker's speaking language ("none" clears it)
    #[arg(long)]
    speaking: Option<String>,
    /// Print display tokens such as |/ and |- untranslated
    #[arg(long)]
    raw: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Send narration to the room without a name attached
    Emit {
        /// Speaking actor
        speaker: String,
        /// Message; wrap speech as "~..." to tag it with the speaking language
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
        /// The entire message is in the speaking language
        #[arg(short, long)]
        language: bool,
        #[command(flatten)]
        target: SceneArgs,
    },

    /// Speak as a character (start with ~ to speak in the speaking language)
    Say {
        /// Speaking actor
        speaker: String,
        /// Message
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
        #[command(flatten)]
        target: SceneArgs,
    },

    /// Show the per-recipient delivery plan without delivering
    Plan {
        /// Speaking actor
        speaker: String,
        /// Message
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
        /// The entire message is in the speaking language
        #[arg(short, long)]
        language: bool,
        /// Frame as a say instead of an emit
        #[arg(long)]
        say: bool,
        /// Output the plan as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        target: SceneArgs,
    },

    /// List the actors in a scene
    Scene {
        /// Scene file (defaults to the configured scene)
        #[arg(short, long)]
        scene: Option<PathBuf>,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Set the glyph used to garble speech a listener doesn't understand
    SetGlyph {
        glyph: char,
    },
    /// Set the default scene file
    SetScene {
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match cli.command {
        // Leave a broken [speech] section fixable with `config set-glyph`
        Commands::Config { .. } => Config::load_unchecked()?,
        _ => Config::load()?,
    };
    if !config.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Emit { speaker, text, language, target } => {
            let utterance = build_utterance(text, false, language);
            cmd_broadcast(&config, &speaker, utterance, target)
        }
        Commands::Say { speaker, text, target } => {
            let utterance = build_utterance(text, true, false);
            cmd_broadcast(&config, &speaker, utterance, target)
        }
        Commands::Plan { speaker, text, language, say, json, target } => {
            let utterance = build_utterance(text, say, language);
            cmd_plan(&config, &speaker, utterance, json, target)
        }
        Commands::Scene { scene } => cmd_scene(&config, scene.as_deref()),
        Commands::Config { action } => cmd_config(config, action),
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "parley=debug,parley_cli=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// ============================================
// Command Implementations
// ============================================

fn cmd_broadcast(config: &Config, speaker: &str, utterance: Utterance, target: SceneArgs) -> Result<()> {
    let scene = Arc::new(load_scene(config, target.scene.as_deref())?);
    let speaker = resolve_speaker(&scene, speaker, target.speaking.as_deref())?;

    let coordinator = BroadcastCoordinator::with_config(
        scene.clone(),
        Arc::new(ConsoleSink::new(target.raw)),
        Arc::new(ConsolePoseBreak),
        &config.speech,
    )?;

    let report = coordinator
        .broadcast(&utterance, &speaker, &scene.location)
        .context("Nothing was delivered")?;

    for failure in &report.failures {
        eprintln!("{} {}", "✗".red(), failure);
    }

    let summary = format!("{} of {} recipients reached", report.delivered, report.attempted);
    if report.is_complete() {
        eprintln!("{} {}", "✓".green(), summary.dimmed());
    } else {
        eprintln!("{} {}", "!".yellow(), summary);
    }

    Ok(())
}

fn cmd_plan(
    config: &Config,
    speaker: &str,
    utterance: Utterance,
    json: bool,
    target: SceneArgs,
) -> Result<()> {
    let scene = Arc::new(load_scene(config, target.scene.as_deref())?);
    let speaker = resolve_speaker(&scene, speaker, target.speaking.as_deref())?;

    let coordinator = BroadcastCoordinator::with_config(
        scene.clone(),
        Arc::new(ConsoleSink::new(target.raw)),
        Arc::new(NoPoseBreak),
        &config.speech,
    )?;

    let plan = coordinator
        .plan(&utterance, &speaker, &scene.location)
        .context("No plan: the broadcast would be rejected")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!(
        "{} {} ({}) in {}",
        "Plan for".dimmed(),
        speaker.name.cyan().bold(),
        utterance.style,
        scene.name
    );
    for delivery in plan.iter() {
        let text = if target.raw {
            delivery.text.clone()
        } else {
            console::to_terminal(&delivery.text)
        };
        println!(
            "  {} {} {}",
            format!("{:>14}", delivery.recipient_name).cyan(),
            "│".dimmed(),
            text
        );
    }

    let excluded = scene.actors.len().saturating_sub(plan.len());
    if excluded > 0 {
        println!("{}", format!("  ({} in the room will not perceive it)", excluded).dimmed());
    }

    Ok(())
}

fn cmd_scene(config: &Config, explicit: Option<&Path>) -> Result<()> {
    let scene = load_scene(config, explicit)?;

    let ooc = if scene.out_of_character { " [OOC]" } else { "" };
    println!("{} {} ({}){}", "Scene:".bold(), scene.name.cyan(), scene.location, ooc.yellow());
    if scene.actors.is_empty() {
        println!("  No actors.");
        return Ok(());
    }

    for actor in &scene.actors {
        let plane = match actor.plane {
            Plane::Material => actor.plane.to_string().normal(),
            Plane::Shadow => actor.plane.to_string().magenta(),
        };
        let languages = if actor.languages.is_empty() {
            "-".to_string()
        } else {
            actor
                .languages
                .iter()
                .map(|l| l.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        let speaking = actor
            .speaking_language
            .as_ref()
            .map(|l| l.to_string())
            .unwrap_or_else(|| "None".to_string());
        let account = if actor.has_account { "" } else { " [no account]" };

        println!(
            "  {} [{}]{} speaks {} / knows {}",
            actor.name.cyan().bold(),
            plane,
            account.dimmed(),
            speaking.green(),
            languages.dimmed()
        );
        if !actor.capabilities.is_empty() {
            let merits: Vec<String> = actor.capabilities.iter().map(|c| c.to_string()).collect();
            println!("      merits: {}", merits.join(", ").dimmed());
        }
    }

    Ok(())
}

fn cmd_config(mut config: Config, action: Option<ConfigAction>) -> Result<()> {
    match action {
        None => {
            println!("{}", "Configuration:".bold());
            println!("  Path: {:?}", Config::config_path()?);
            println!(
                "  Default Scene: {}",
                config
                    .default_scene
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "None".to_string())
                    .cyan()
            );
            println!("  Color: {}", if config.color { "On".green() } else { "Off".red() });
            println!("  Garble Glyph: {}", config.speech.placeholder);
            let tokens: Vec<String> = config
                .speech
                .universal_tokens
                .iter()
                .map(|t| t.to_string())
                .collect();
            println!("  Universal Comprehension: {}", tokens.join(", "));
            for rule in &config.speech.escapes {
                println!("  Escape: {} -> {}", rule.token, rule.replacement);
            }
            if let Err(e) = config.speech.validate() {
                println!("{} {}", "!".yellow(), e);
            }
        }

        Some(ConfigAction::SetGlyph { glyph }) => {
            config.set_placeholder(glyph)?;
            config.save()?;
            println!("{} Garble glyph set to '{}'", "✓".green(), glyph);
        }

        Some(ConfigAction::SetScene { path }) => {
            if !path.exists() {
                println!("{} {:?} does not exist yet", "!".yellow(), path);
            }
            config.set_default_scene(path.clone());
            config.save()?;
            println!("{} Default scene set to {:?}", "✓".green(), path);
        }
    }

    Ok(())
}

// ============================================
// Helpers
// ============================================

fn load_scene(config: &Config, explicit: Option<&Path>) -> Result<Scene> {
    let path = config
        .scene_path(explicit)
        .context("No scene given. Use --scene <FILE> or `parley config set-scene <FILE>`.")?;
    let scene = Scene::load(&path)?;
    tracing::debug!(scene = %scene.name, actors = scene.actors.len(), "Loaded scene");
    Ok(scene)
}

fn resolve_speaker(scene: &Scene, name: &str, speaking: Option<&str>) -> Result<Actor> {
    let mut speaker = scene
        .find(name)
        .cloned()
        .with_context(|| format!("No actor named '{}' in {}", name, scene.name))?;

    if let Some(language) = speaking {
        let language = if language.eq_ignore_ascii_case("none") {
            None
        } else {
            Some(language)
        };
        speaker.set_speaking_language(language)?;
    }

    Ok(speaker)
}

fn build_utterance(text: Vec<String>, say: bool, language: bool) -> Utterance {
    let text = text.join(" ");
    let utterance = if say {
        Utterance::say(text)
    } else {
        Utterance::emit(text)
    };

    if language {
        utterance.with_forced_language(true)
    } else {
        utterance
    }
}
