//! # CLI Layer
//!
//! The CLI layer is the **only** place in worklaunch that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs a logger
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: convert shell arguments into typed commands via clap
//! 2. **Logging**: `simplelog` on stderr, warnings by default, debug with `-v`
//! 3. **Context Setup**: resolve the data directory and open the API
//! 4. **Dispatch**: route each command to its handler
//! 5. **Output Formatting**: hand results to `render`

use super::render::{
    print_config, print_launch_report, print_messages, print_paths, print_profile_list,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use worklaunchapp::commands::config::ConfigAction;
use worklaunchapp::error::Result;
use worklaunchapp::init::{initialize, WorklaunchContext};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = initialize(cli.data_dir.clone())?;
    log::debug!("Dispatching {:?}", cli.command);

    match cli.command {
        Some(Commands::Create { name }) => handle_create(&mut ctx, name),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Delete { profile }) => handle_delete(&mut ctx, profile),
        Some(Commands::Rename { profile, name }) => handle_rename(&mut ctx, profile, name),
        Some(Commands::Select { profile }) => handle_select(&mut ctx, profile),
        Some(Commands::Add { path, profile }) => handle_add(&mut ctx, path, profile),
        Some(Commands::Remove { path, profile }) => handle_remove(&mut ctx, path, profile),
        Some(Commands::Paths { profile }) => handle_paths(&ctx, profile),
        Some(Commands::Launch { profile }) => handle_launch(&ctx, profile),
        Some(Commands::Appearance { mode }) => handle_appearance(&mut ctx, mode),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .build();
    // Only fails if a logger is already installed
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

fn handle_create(ctx: &mut WorklaunchContext, name: Vec<String>) -> Result<()> {
    let result = ctx.api.create_profile(&name.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &WorklaunchContext) -> Result<()> {
    let result = ctx.api.list_profiles()?;
    print_profile_list(&result.profiles);
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut WorklaunchContext, profile: String) -> Result<()> {
    let result = ctx.api.delete_profile(&profile)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_rename(ctx: &mut WorklaunchContext, profile: String, name: Vec<String>) -> Result<()> {
    let result = ctx.api.rename_profile(&profile, &name.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_select(ctx: &mut WorklaunchContext, profile: String) -> Result<()> {
    let result = ctx.api.select_profile(&profile)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut WorklaunchContext, path: String, profile: Option<String>) -> Result<()> {
    let result = ctx.api.add_path(profile.as_deref(), &path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut WorklaunchContext, path: String, profile: Option<String>) -> Result<()> {
    let result = ctx.api.remove_path(profile.as_deref(), &path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_paths(ctx: &WorklaunchContext, profile: Option<String>) -> Result<()> {
    let result = ctx.api.profile_paths(profile.as_deref())?;
    print_paths(&result.paths);
    print_messages(&result.messages);
    Ok(())
}

fn handle_launch(ctx: &WorklaunchContext, profile: Option<String>) -> Result<()> {
    let result = ctx.api.launch(profile.as_deref())?;
    if let Some(report) = &result.launch_report {
        print_launch_report(report);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_appearance(ctx: &mut WorklaunchContext, mode: Option<String>) -> Result<()> {
    let result = ctx.api.appearance(mode.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut WorklaunchContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if let (true, Some(config)) = (show_all, &result.config) {
        print_config(&config.list_all());
    }
    print_messages(&result.messages);
    Ok(())
}
