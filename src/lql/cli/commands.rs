//! # CLI Layer
//!
//! One possible client of the lql library. This is the only code that reads
//! the terminal, writes to stdout/stderr, or decides exit codes.
//!
//! - `run()`: parse arguments, set up logging and context, dispatch
//! - `handle_*()`: call the API, hand the `CmdResult` to `render`

use super::prompt::collect_entry;
use super::render::{
    categories_json, notes_json, print_messages, render_category_list, render_notes,
    render_text_list,
};
use super::setup::{Cli, Commands, NewArgs, OutputFormat};
use clap::Parser;
use console::Term;
use lql::api::{ConfigAction, LqlApi};
use lql::config::LqlConfig;
use lql::error::Result;
use lql::init::{initialize, resolve_home};
use lql::store::fs::FileStore;

struct AppContext {
    api: LqlApi<FileStore>,
    config: LqlConfig,
    output: OutputFormat,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    if cli.clear && ctx.output == OutputFormat::Text {
        // Best effort: there may be no terminal to clear.
        let _ = Term::stdout().clear_screen();
    }

    match cli.command {
        Some(Commands::New(args)) => handle_new(&mut ctx, args),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::View { index }) => handle_view(&ctx, &index),
        Some(Commands::Path { index }) => handle_path(&ctx, index.as_deref()),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    // A second init (only possible in tests) is harmless.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let home = resolve_home()?;
    let ctx = initialize(home)?;

    Ok(AppContext {
        api: ctx.api,
        config: ctx.config,
        output: cli.output,
    })
}

fn handle_new(ctx: &mut AppContext, args: NewArgs) -> Result<()> {
    let entry = collect_entry(args, ctx.config.max_rating)?;
    let result = ctx.api.create_note(entry)?;

    if ctx.output == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&result.affected_notes)?);
        return Ok(());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_categories()?;

    match ctx.output {
        OutputFormat::Json => println!("{}", categories_json(&result.listed_categories)?),
        OutputFormat::Text => {
            print!("{}", render_category_list(&result.listed_categories));
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn handle_view(ctx: &AppContext, index: &str) -> Result<()> {
    let result = ctx.api.view_category(index)?;
    let Some(category) = &result.category else {
        print_messages(&result.messages);
        return Ok(());
    };

    match ctx.output {
        OutputFormat::Json => println!("{}", notes_json(category, &result.listed_notes)?),
        OutputFormat::Text => {
            print!(
                "{}",
                render_notes(category, &result.listed_notes, ctx.config.max_rating)
            );
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn handle_path(ctx: &AppContext, index: Option<&str>) -> Result<()> {
    let result = ctx.api.category_path(index)?;
    let lines: Vec<String> = result
        .paths
        .iter()
        .map(|path| path.display().to_string())
        .collect();
    print!("{}", render_text_list(&lines, "No paths found."));
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = action == ConfigAction::ShowAll;

    let result = ctx.api.config(action)?;
    if show_all {
        let lines: Vec<String> = result
            .config
            .iter()
            .flat_map(|config| config.entries())
            .map(|(k, v)| format!("{} = {}", k, v))
            .collect();
        print!("{}", render_text_list(&lines, "No configuration values."));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}
