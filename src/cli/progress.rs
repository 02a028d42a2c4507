//! Progress command implementation

use anyhow::{anyhow, Context, Result};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use questview::config::{load_challenges, load_user_state, ColorMode, Config};
use questview::progress::{AnsiStyle, PlainStyle, ProgressView, TimeDisplay};
use questview::render::{render_details, render_tree};

/// Per-run overrides from the command line
#[derive(Debug, Default)]
pub struct ProgressArgs {
    pub user: Option<PathBuf>,
    pub challenges: Option<PathBuf>,
    pub json: bool,
    pub no_color: bool,
    pub utc: bool,
}

fn resolve_path(flag: Option<PathBuf>, configured: Option<&Path>, what: &str) -> Result<PathBuf> {
    flag.or_else(|| configured.map(Path::to_path_buf))
        .ok_or_else(|| {
            anyhow!(
                "No {} file given. Pass it on the command line or set it under [data] in {}",
                what,
                Config::global_config_path().display()
            )
        })
}

fn use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
    }
}

/// Build the progress tree for a user and print it
pub async fn progress_command(config: &Config, args: ProgressArgs) -> Result<()> {
    let user_path = resolve_path(args.user, config.data.user_state.as_deref(), "user state")?;
    let challenges_path = resolve_path(
        args.challenges,
        config.data.challenges.as_deref(),
        "challenge catalog",
    )?;

    let user = load_user_state(&user_path)
        .with_context(|| "Failed to load user state")?;
    let challenges = load_challenges(&challenges_path)
        .with_context(|| "Failed to load challenge catalog")?;

    let time_display = if args.utc {
        TimeDisplay::Utc
    } else {
        config.display.time
    };

    let color_mode = if args.no_color || args.json {
        ColorMode::Never
    } else {
        config.display.color
    };

    let view = ProgressView::new(&user, &challenges).with_time_display(time_display);
    let view = if use_color(color_mode) {
        colored::control::set_override(true);
        view.with_style(AnsiStyle)
    } else {
        view.with_style(PlainStyle)
    };

    let tree = view.build_progress_tree();

    if args.json {
        let json = serde_json::to_string_pretty(&tree)
            .with_context(|| "Failed to serialize progress tree")?;
        println!("{}", json);
    } else {
        println!("{}", render_tree(&tree));
        println!("{}", render_details(&tree));
    }

    Ok(())
}
