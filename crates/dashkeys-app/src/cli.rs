use clap::Parser;

/// dashkeys: replay keyboard input against the dashboard shortcut layer.
#[derive(Parser, Debug)]
#[command(name = "dashkeys", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (directive such as `debug` or `dashkeys=trace`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Script of key presses and UI steps. Reads stdin when omitted.
    #[arg(short = 's', long)]
    pub script: Option<String>,

    /// Print the keyboard shortcuts overlay and exit.
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Theme to start with, taking precedence over the stored choice.
    #[arg(long)]
    pub theme: Option<String>,

    /// Report a dark system color scheme.
    #[arg(long)]
    pub prefers_dark: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
