use dialoguer::theme::ColorfulTheme;

use rentbook_config::{Config, ConfigManager};
use rentbook_core::{BaselineRule, InFlightGuard, ReportService};
use rentbook_store_json::JsonRecordStore;

use crate::cli::{delete_flat, expenses, io, output, reports, rooms, CliError};

/// Everything the interactive menus need: the operator's preferences, the
/// open record store, and the report state held between fetches.
pub struct CliContext {
    pub theme: ColorfulTheme,
    pub config: Config,
    pub store: JsonRecordStore,
    pub reports: ReportService,
    pub baseline_rule: BaselineRule,
    /// One mutation round trip at a time across all menus.
    pub submit_guard: InFlightGuard,
}

impl CliContext {
    pub fn new(config: Config, store: JsonRecordStore) -> Self {
        Self {
            theme: ColorfulTheme::default(),
            config,
            store,
            reports: ReportService::new(),
            baseline_rule: BaselineRule::default(),
            submit_guard: InFlightGuard::new(),
        }
    }
}

const MAIN_MENU: &[&str] = &[
    "Flats",
    "Cash Outflow",
    "Financial Report",
    "Delete Flat",
    "Exit",
];

/// Runs the interactive menu loop until the operator exits.
pub fn run_cli() -> Result<(), CliError> {
    let config = ConfigManager::with_base_dir(Config::default().resolve_data_root())?.load()?;
    let data_root = config.resolve_data_root();
    let store = JsonRecordStore::with_data_root(&data_root)?;
    let mut ctx = CliContext::new(config, store);

    output::section(format!("{} Rent Book", ctx.config.branding));
    loop {
        let choice = io::select_index(&ctx.theme, "Main menu", MAIN_MENU)?;
        let result = match choice {
            0 => rooms::run(&mut ctx),
            1 => expenses::run(&mut ctx),
            2 => reports::run(&mut ctx),
            3 => delete_flat::run(&mut ctx),
            _ => break,
        };
        if let Err(err) = result {
            io::print_error(&err);
        }
    }
    Ok(())
}
