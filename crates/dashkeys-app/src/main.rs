mod cli;
mod shell;

use std::path::Path;
use std::rc::Rc;

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

use dashkeys_common::DashkeysError;
use dashkeys_config::DashkeysConfig;
use dashkeys_platform::StorageService;

use shell::script::{parse_script, read_script};
use shell::DashboardShell;

fn main() {
    let args = cli::parse();

    // Config is loaded before logging so `[logging] level` can apply; the
    // load error is reported once the subscriber exists.
    let loaded = dashkeys_config::load_config(args.config.as_deref().map(Path::new));
    let default_directive = match &loaded {
        Ok(config) => format!("dashkeys={}", config.logging.level.as_str()),
        Err(_) => "dashkeys=info".to_string(),
    };

    let log_directive = args.log_level.clone().unwrap_or(default_directive);
    let directive: Directive = log_directive.parse().unwrap_or_else(|e| {
        eprintln!("dashkeys: ignoring log level '{log_directive}': {e}");
        LevelFilter::INFO.into()
    });
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();

    tracing::info!("dashkeys v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        DashkeysConfig::default()
    });

    if let Err(e) = run(&args, config) {
        tracing::error!("{e}");
        eprintln!("dashkeys: {e}");
        std::process::exit(1);
    }
}

fn run(args: &cli::Args, config: DashkeysConfig) -> Result<(), DashkeysError> {
    if !config.storage.in_memory && config.storage.path.is_none() {
        if let Err(e) = dashkeys_platform::paths::ensure_dirs() {
            tracing::warn!("Failed to create directories: {e}");
        }
    }
    let storage = StorageService::from_config(&config.storage).unwrap_or_else(|e| {
        tracing::warn!("Storage unavailable, state will not persist: {e}");
        StorageService::in_memory(&config.storage.prefix)
    });

    let url_theme = args.theme.clone().or_else(|| config.theme.name.clone());
    let prefers_dark = args.prefers_dark || config.theme.prefers_dark;

    let mut shell = DashboardShell::new(config, Rc::new(storage))?;
    let theme = shell.init(url_theme.as_deref(), prefers_dark);
    tracing::info!("Theme: {theme}");

    if args.list {
        println!("{}", shell.help().render_text());
        return Ok(());
    }

    let text = read_script(args.script.as_deref().map(Path::new))?;
    for (line, step) in parse_script(&text)? {
        let outcome = shell.run_step(step);
        println!("{line:>4}  {outcome}");
    }

    println!(
        "view: {}  theme: {}  sidebar: {}  search: {}  open: {}",
        shell.outlet().current_view().unwrap_or("-"),
        shell.theme().current().unwrap_or("-"),
        if shell.sidebar_open() { "open" } else { "closed" },
        if shell.search_focused() { "focused" } else { "-" },
        shell.transients().borrow().len(),
    );
    tracing::info!("Shutdown complete");
    Ok(())
}
