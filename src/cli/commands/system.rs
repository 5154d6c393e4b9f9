use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output::{info as output_info, section as output_section};
use crate::cli::views;
use crate::utils::build_info;

use super::CommandDefinition;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("movies", "List the movie catalog", "movies", cmd_movies),
        CommandDefinition::new("show", "Redraw the current view", "show", cmd_show),
        CommandDefinition::new("version", "Show build metadata", "version", cmd_version),
        CommandDefinition::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandDefinition::new("exit", "Exit the shell", "exit", cmd_exit),
        CommandDefinition::new("quit", "Exit the shell", "quit", cmd_exit),
    ]
}

fn cmd_movies(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output_section("Movies");
    println!("{}", views::render_catalog(context.catalog()));
    Ok(())
}

fn cmd_show(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.render_current();
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output_section(format!("Favorite Movie {}", meta.version));
    println!("  Build hash   : {} ({})", meta.git_hash, meta.git_status);
    println!("  Built at     : {}", meta.timestamp);
    println!("  Target       : {}", meta.target);
    println!("  Profile      : {}", meta.profile);
    println!("  Rustc        : {}", meta.rustc);
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        match context.registry().get(&name.to_lowercase()) {
            Some(command) => {
                output_section(format!("Help: {}", command.name));
                println!("  Description: {}", command.description);
                println!("  Usage: {}", command.usage);
            }
            None => context.suggest_command(name),
        }
        return Ok(());
    }

    output_section("Available commands");
    for command in context.registry().iter() {
        println!("  {:<34} {}", command.usage, command.description);
    }
    output_info("Use `help <command>` for details. Press Tab to complete command names.");
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
