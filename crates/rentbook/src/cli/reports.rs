//! Financial report menu: monthly aggregation, HTML export, and the
//! destructive clear-all flow.

use std::fs;

use chrono::Datelike;

use rentbook_core::{format::format_amount, ReportExporter, ReportSnapshot};
use rentbook_domain::{dates, MONTH_NAMES};

use crate::cli::{io, output, CliContext, CliError};

const REPORT_MENU: &[&str] = &["Export HTML", "Clear all report data", "Back"];

pub fn run(ctx: &mut CliContext) -> Result<(), CliError> {
    let month0 = io::select_index(&ctx.theme, "Report month", MONTH_NAMES.as_slice())? as u32;
    let current_year = dates::today().year();
    let year: i32 = io::prompt_with_default(&ctx.theme, "Year", &current_year.to_string())?
        .trim()
        .parse()
        .map_err(|_| CliError::Message("year must be a number".into()))?;

    let snapshot = ctx.reports.fetch(&ctx.store, year, month0)?.clone();
    print_snapshot(ctx, &snapshot);

    loop {
        let result = match io::select_index(&ctx.theme, "Report menu", REPORT_MENU)? {
            0 => export(ctx, &snapshot),
            1 => {
                if clear(ctx, &snapshot)? {
                    return Ok(());
                }
                Ok(())
            }
            _ => return Ok(()),
        };
        if let Err(err) = result {
            io::print_error(&err);
        }
    }
}

fn print_snapshot(ctx: &CliContext, snapshot: &ReportSnapshot) {
    let currency = &ctx.config.currency_symbol;
    output::section(format!("Financial Report - {}", snapshot.window.month_name()));
    output::info(format!(
        "Date range: {} to {}",
        dates::format_date(snapshot.window.start),
        dates::format_date(snapshot.window.end)
    ));

    output::info("Cash Inflow");
    for entry in &snapshot.inflows {
        output::info(format!(
            "  Flat {}  {}  {}  rent {currency}{} / paid {currency}{} / due {currency}{}",
            entry.room_number,
            entry.name,
            dates::format_date(entry.date),
            format_amount(entry.total_rent()),
            format_amount(entry.total_paid()),
            format_amount(entry.remaining()),
        ));
    }
    output::info(format!(
        "Total Income: {currency}{}",
        format_amount(snapshot.total_income)
    ));

    output::info("Cash Outflow");
    for expense in &snapshot.outflows {
        output::info(format!(
            "  {}  {}  {}  {currency}{}",
            expense.person,
            expense.purpose,
            dates::format_date(expense.date),
            format_amount(expense.amount),
        ));
    }
    output::info(format!(
        "Total Outcome: {currency}{}",
        format_amount(snapshot.total_outcome)
    ));
    output::info(format!(
        "Remaining Balance: {currency}{}",
        format_amount(snapshot.remaining_balance)
    ));
    output::separator();
}

fn export(ctx: &mut CliContext, snapshot: &ReportSnapshot) -> Result<(), CliError> {
    let html = ReportExporter::render(
        snapshot,
        &ctx.config.branding,
        &ctx.config.currency_symbol,
    );
    let file_name = format!(
        "report-{}-{}.html",
        snapshot.window.month_name().to_lowercase(),
        snapshot.window.start.year()
    );
    let path = ctx.config.resolve_data_root().join(file_name);
    fs::write(&path, html)?;
    io::print_success(format!("Report exported to {}", path.display()));
    Ok(())
}

/// Returns `true` when the data was cleared and the menu should close.
fn clear(ctx: &mut CliContext, snapshot: &ReportSnapshot) -> Result<bool, CliError> {
    if snapshot.is_empty() {
        io::print_warning("Nothing to clear for this report");
        return Ok(false);
    }
    let confirmed = io::confirm_action(
        &ctx.theme,
        "Permanently delete ALL ledger and expense data? This cannot be undone",
        false,
    )?;
    if !confirmed {
        io::print_info("Clear cancelled");
        return Ok(false);
    }

    let Some(_token) = ctx.submit_guard.try_begin() else {
        io::print_warning("Another operation is already in progress");
        return Ok(false);
    };
    ctx.reports.clear(&ctx.store)?;
    io::print_success("All report data cleared");
    Ok(true)
}
