use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::info;

use menuconf::{
    config,
    config::CapabilityConfig,
    logging,
    menu::{ActionDispatcher, Localizer, MenuAction, TableLocalizer},
    state::{AppState, TabState},
    MenuConfiguration,
};

#[derive(Parser, Debug)]
#[command(name = "menuctl", version, about = "Browser action menu resolver")]
struct Cli {
    /// Raise log verbosity (-v, -vv, -vvv). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prints the menu configuration for a screen.
    Resolve {
        #[command(flatten)]
        query: StateArgs,
        /// Emit JSON instead of a listing.
        #[arg(long)]
        json: bool,
    },
    /// Resolves the menu, then dispatches the entry at --index.
    Select {
        #[command(flatten)]
        query: StateArgs,
        /// 0-based position in the item list (or toolbar row with --toolbar).
        #[arg(short, long)]
        index: usize,
        /// Pick from the toolbar shortcut row.
        #[arg(long)]
        toolbar: bool,
    },
    /// Lists every menu action with its command id.
    Actions,
    /// Turns a capability on or off in the config file.
    SetCapability {
        /// "private_browsing" or "desktop_toggle".
        name: String,
        #[arg(action = ArgAction::Set)]
        enabled: bool,
    },
    /// Writes a config template if none exists and prints its path.
    InitConfig,
    /// Prints the config path that would be used (if any).
    ConfigPath,
}

#[derive(Args, Debug)]
struct StateArgs {
    /// Screen the menu opens from: tab, home, tab-tray, loading.
    #[arg(required_unless_present = "state_json")]
    screen: Option<String>,
    /// Full app state as JSON, e.g. '{"screen":"tab","is_bookmarked":true}'.
    /// Unknown screens resolve to an empty menu.
    #[arg(long, conflicts_with = "screen")]
    state_json: Option<String>,
    /// The current page is bookmarked.
    #[arg(long, conflicts_with = "state_json")]
    bookmarked: bool,
    /// The current page is rendered as the desktop site.
    #[arg(long, conflicts_with = "state_json")]
    desktop_site: bool,
    /// The session is private.
    #[arg(long, conflicts_with = "state_json")]
    private: bool,
    /// Treat private browsing as unsupported.
    #[arg(long)]
    no_private_browsing: bool,
    /// Treat the desktop/mobile toggle as unsupported.
    #[arg(long)]
    no_desktop_toggle: bool,
}

impl StateArgs {
    fn app_state(&self) -> Result<AppState> {
        if let Some(json) = self.state_json.as_deref() {
            return AppState::from_json(json);
        }
        let Some(screen) = self.screen.as_deref() else {
            bail!("A screen name or --state-json is required");
        };
        AppState::from_screen(
            screen,
            TabState {
                is_bookmarked: self.bookmarked,
                desktop_site: self.desktop_site,
                is_private: self.private,
            },
        )
    }

    fn overrides(&self) -> CapabilityConfig {
        CapabilityConfig {
            private_browsing: self.no_private_browsing.then_some(false),
            desktop_toggle: self.no_desktop_toggle.then_some(false),
        }
    }

    fn resolve(&self) -> Result<(AppState, MenuConfiguration, TableLocalizer)> {
        let state = self.app_state()?;
        let cfg = config::load_optional()?;
        let resolved = config::resolve(cfg.as_ref(), self.overrides());
        let menu = menuconf::resolve(&state, resolved.capabilities);
        Ok((state, menu, TableLocalizer::new(resolved.strings)))
    }
}

struct PrintDispatcher;

impl ActionDispatcher for PrintDispatcher {
    fn perform(&self, action: MenuAction, app_state: &AppState) -> Result<()> {
        info!(action = %action, screen = app_state.screen_name(), "dispatching");
        println!("{action} ({}) from {}", action.id(), app_state.screen_name());
        Ok(())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Command::Resolve { query, json } => {
            let (state, menu, localizer) = query.resolve()?;
            if json {
                let out = serde_json::json!({
                    "state": state,
                    "configuration": menu,
                    "theme": menu.theme(),
                });
                let s = serde_json::to_string_pretty(&out).context("serialize configuration")?;
                println!("{s}");
            } else {
                print_listing(&state, &menu, &localizer);
            }
        }
        Command::Select {
            query,
            index,
            toolbar,
        } => {
            let (state, menu, _) = query.resolve()?;
            let action = if toolbar {
                let row = menu.toolbar_items().unwrap_or_default();
                row.get(index).map(|item| item.action).with_context(|| {
                    format!("no toolbar item {index} ({} available)", row.len())
                })?
            } else {
                let items = menu.items();
                items.get(index).map(|item| item.action).with_context(|| {
                    format!("no menu item {index} ({} available)", items.len())
                })?
            };
            PrintDispatcher.perform(action, &state)?;
        }
        Command::Actions => {
            for action in MenuAction::ALL {
                println!("{:>5}  {action}", action.id());
            }
        }
        Command::SetCapability { name, enabled } => {
            let path = config::patch_capability(&name, enabled)
                .with_context(|| format!("set capability {name}"))?;
            println!("{}", path.display());
        }
        Command::InitConfig => {
            let path = config::ensure_config_file_exists()?;
            println!("{}", path.display());
        }
        Command::ConfigPath => {
            if let Some(path) = config::resolve_config_path() {
                println!("{}", path.display());
            }
        }
    }

    Ok(())
}

fn print_listing(state: &AppState, menu: &MenuConfiguration, localizer: &dyn Localizer) {
    let private = menu.is_private_mode();
    println!(
        "{} ({}), {} per row",
        state.screen_name(),
        if private { "private" } else { "normal" },
        menu.items_per_row()
    );

    if menu.items().is_empty() {
        println!("  <no items>");
    }
    for (i, item) in menu.items().iter().enumerate() {
        println!(
            "  [{i}] {:<20} {:<24} {}",
            localizer.localize(&item.title),
            item.action,
            item.icon_for(private)
        );
    }

    if let Some(row) = menu.toolbar_items() {
        println!("toolbar:");
        for (i, item) in row.iter().enumerate() {
            println!(
                "  [{i}] {:<20} {:<24} {}",
                localizer.localize(&item.title),
                item.action,
                item.icon
            );
        }
    }

    let theme = menu.theme();
    println!("theme:");
    println!("  toolbar        {} tint {}", theme.toolbar_color, theme.toolbar_tint_color);
    println!("  menu           {} tint {}", theme.menu_background_color, theme.menu_tint_color);
    println!("  selected tint  {}", theme.selected_item_tint_color);
    println!("  shadow         {}", theme.shadow_color);
    println!("  icon           {}", theme.menu_icon);
    println!("  font           {} {}", theme.menu_font.family, theme.menu_font.size);
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn state_json_rejects_per_tab_flags() {
        for flag in ["--bookmarked", "--desktop-site", "--private"] {
            let parsed = Cli::try_parse_from([
                "menuctl",
                "resolve",
                "--state-json",
                r#"{"screen":"tab"}"#,
                flag,
            ]);
            assert!(parsed.is_err(), "{flag} accepted with --state-json");
        }
    }

    #[test]
    fn state_json_keeps_capability_flags() {
        let cli = Cli::try_parse_from([
            "menuctl",
            "select",
            "--state-json",
            r#"{"screen":"reader_view"}"#,
            "--no-private-browsing",
            "--index",
            "0",
        ])
        .unwrap();
        let Command::Select { query, index, .. } = cli.command else {
            panic!("expected select");
        };
        assert_eq!(index, 0);
        assert_eq!(query.app_state().unwrap(), AppState::Other);
        assert_eq!(query.overrides().private_browsing, Some(false));
    }

    #[test]
    fn screen_flags_build_tab_state() {
        let cli =
            Cli::try_parse_from(["menuctl", "resolve", "tab", "--bookmarked", "--private"]).unwrap();
        let Command::Resolve { query, .. } = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(
            query.app_state().unwrap(),
            AppState::Tab(TabState {
                is_bookmarked: true,
                desktop_site: false,
                is_private: true,
            })
        );
    }
}
