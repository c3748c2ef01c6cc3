//! Delete-flat menu: search a room's history, then remove all of it after
//! an explicit confirmation.

use rentbook_core::{format::format_amount, DeletionWorkflow, RentLedgerService};
use rentbook_domain::dates;

use crate::cli::{io, output, CliContext, CliError};

pub fn run(ctx: &mut CliContext) -> Result<(), CliError> {
    let raw = io::prompt_text(&ctx.theme, "Flat number to delete")?;
    let room: u32 = raw
        .trim()
        .parse()
        .map_err(|_| CliError::Message(format!("`{}` is not a flat number", raw.trim())))?;

    let mut flow: DeletionWorkflow<u32> = DeletionWorkflow::new();
    flow.begin_search()?;
    let view = RentLedgerService::room_view(&ctx.store, room, ctx.baseline_rule)?;
    if view.entries.is_empty() {
        flow.resolve_search(None)?;
        io::print_warning(format!("No records found for flat {room}"));
        return Ok(());
    }
    flow.resolve_search(Some(room))?;

    output::section(format!("Flat {room}"));
    for entry in &view.entries {
        output::info(format!(
            "{}  {}  paid {}{}",
            dates::format_date(entry.date),
            entry.name,
            ctx.config.currency_symbol,
            format_amount(entry.total_paid()),
        ));
    }

    flow.request_confirmation()?;
    let prompt = format!(
        "Delete all {} record(s) for flat {room}? This cannot be undone",
        view.entries.len()
    );
    if !io::confirm_action(&ctx.theme, &prompt, false)? {
        flow.cancel();
        io::print_info("Deletion cancelled");
        return Ok(());
    }

    let mut removed = 0;
    flow.confirm(|room| {
        removed = RentLedgerService::delete_room(&ctx.store, *room)?;
        Ok(())
    })?;
    io::print_success(format!("Deleted {removed} record(s) for flat {room}"));
    Ok(())
}
