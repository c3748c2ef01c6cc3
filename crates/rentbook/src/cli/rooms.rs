//! Flat menu: per-room payment history, new collections, and edits.

use rentbook_core::{format::format_amount, LedgerEntryForm, RentLedgerService, RoomView};
use rentbook_domain::{dates, LedgerEntry, PaymentMode, PaymentStatus, RoomRegistry};

use crate::cli::{io, output, CliContext, CliError};

const ROOM_MENU: &[&str] = &["Add collection", "Edit collection", "Refresh", "Back"];

pub fn run(ctx: &mut CliContext) -> Result<(), CliError> {
    let rooms = RoomRegistry::all();
    let labels: Vec<String> = rooms.iter().map(|room| format!("Flat {room}")).collect();
    let room = rooms[io::select_index(&ctx.theme, "Select a flat", &labels)?];

    loop {
        let view = RentLedgerService::room_view(&ctx.store, room, ctx.baseline_rule)?;
        print_view(ctx, &view);

        match io::select_index(&ctx.theme, "Flat menu", ROOM_MENU)? {
            0 => {
                if let Err(err) = add_entry(ctx, &view) {
                    io::print_error(&err);
                }
            }
            1 => {
                if let Err(err) = edit_entry(ctx, &view) {
                    io::print_error(&err);
                }
            }
            2 => continue,
            _ => return Ok(()),
        }
    }
}

fn print_view(ctx: &CliContext, view: &RoomView) {
    let currency = &ctx.config.currency_symbol;
    output::section(format!("Flat {}", view.room));
    match view.baseline_advance {
        Some(advance) => output::info(format!(
            "Rent advance fixed at {currency}{}",
            format_amount(advance)
        )),
        None => output::info("No collections yet; the first entry fixes the rent advance"),
    }
    for entry in &view.entries {
        output::info(format!(
            "{}  {}  {}  {}  rent {currency}{} / paid {currency}{} / due {currency}{}",
            dates::format_date(entry.date),
            entry.name,
            entry.payment_status,
            entry.payment_mode,
            format_amount(entry.total_rent()),
            format_amount(entry.total_paid()),
            format_amount(entry.remaining()),
        ));
    }
    output::separator();
}

fn add_entry(ctx: &mut CliContext, view: &RoomView) -> Result<(), CliError> {
    let Some(_token) = ctx.submit_guard.try_begin() else {
        io::print_warning("A submission is already in progress");
        return Ok(());
    };
    let form = collect_form(ctx, view, None)?;
    let refreshed = RentLedgerService::submit(&ctx.store, form, ctx.baseline_rule)?;
    io::print_success(format!(
        "Collection recorded for flat {} ({} entries on file)",
        refreshed.room,
        refreshed.entries.len()
    ));
    Ok(())
}

fn edit_entry(ctx: &mut CliContext, view: &RoomView) -> Result<(), CliError> {
    if view.entries.is_empty() {
        io::print_info("Nothing to edit for this flat");
        return Ok(());
    }
    let labels: Vec<String> = view
        .entries
        .iter()
        .map(|entry| {
            format!(
                "{}  {}  paid {}{}",
                dates::format_date(entry.date),
                entry.name,
                ctx.config.currency_symbol,
                format_amount(entry.total_paid())
            )
        })
        .collect();
    let picked = &view.entries[io::select_index(&ctx.theme, "Select a collection", &labels)?];

    let Some(_token) = ctx.submit_guard.try_begin() else {
        io::print_warning("A submission is already in progress");
        return Ok(());
    };
    let form = collect_form(ctx, view, Some(picked))?;
    RentLedgerService::upsert(&ctx.store, picked.id, form, ctx.baseline_rule)?;
    io::print_success("Collection updated");
    Ok(())
}

/// Prompts for a full collection form. The rent advance is only asked for
/// on a room's first entry; afterwards the baseline value is reused.
fn collect_form(
    ctx: &CliContext,
    view: &RoomView,
    existing: Option<&LedgerEntry>,
) -> Result<LedgerEntryForm, CliError> {
    let theme = &ctx.theme;
    let name = match existing {
        Some(entry) => io::prompt_with_default(theme, "Customer name", &entry.name)?,
        None => io::prompt_text(theme, "Customer name")?,
    };
    let mobile_number = match existing {
        Some(entry) => io::prompt_with_default(theme, "Mobile number", &entry.mobile_number)?,
        None => io::prompt_text(theme, "Mobile number")?,
    };

    let rent_advance = match (existing, view.baseline_advance) {
        (Some(entry), _) => format_amount(entry.rent_advance),
        (None, Some(baseline)) => {
            io::print_info(format!(
                "Rent advance is fixed at {}{}",
                ctx.config.currency_symbol,
                format_amount(baseline)
            ));
            format_amount(baseline)
        }
        (None, None) => io::prompt_text(theme, "Rent advance")?,
    };

    let rent_month = prompt_money(ctx, "Monthly rent", existing.map(|e| e.rent_month))?;
    let rent_paid = prompt_money(ctx, "Rent paid", existing.map(|e| e.rent_paid))?;
    let maintenance = prompt_money(ctx, "Maintenance", existing.map(|e| e.maintenance))?;
    let electricity_bill =
        prompt_money(ctx, "Electricity bill", existing.map(|e| e.electricity_bill))?;
    let parking_bill = prompt_money(ctx, "Parking bill", existing.map(|e| e.parking_bill))?;

    let default_date = existing
        .map(|entry| dates::format_date(entry.date))
        .unwrap_or_else(|| dates::format_date(dates::today()));
    let date = io::prompt_with_default(theme, "Date (dd-mm-yyyy)", &default_date)?;

    let payment_status = prompt_status(ctx)?;
    let payment_mode = prompt_mode(ctx)?;

    Ok(LedgerEntryForm {
        room_number: view.room,
        name,
        mobile_number,
        rent_advance,
        rent_month,
        rent_paid,
        maintenance,
        electricity_bill,
        parking_bill,
        date,
        payment_status,
        payment_mode,
    })
}

fn prompt_money(
    ctx: &CliContext,
    label: &str,
    current: Option<f64>,
) -> Result<String, CliError> {
    match current {
        Some(value) => io::prompt_with_default(&ctx.theme, label, &format_amount(value)),
        None => io::prompt_text(&ctx.theme, label),
    }
}

fn prompt_status(ctx: &CliContext) -> Result<PaymentStatus, CliError> {
    let options = [PaymentStatus::Paid, PaymentStatus::NotPaid];
    let index = io::select_index(&ctx.theme, "Payment status", &options)?;
    Ok(options[index])
}

fn prompt_mode(ctx: &CliContext) -> Result<PaymentMode, CliError> {
    match io::select_index(&ctx.theme, "Payment mode", &["Cash", "Cheque", "UPI"])? {
        0 => Ok(PaymentMode::Cash),
        1 => {
            let cheque_number = io::prompt_text(&ctx.theme, "Cheque number")?;
            let proof_image = io::prompt_optional(&ctx.theme, "Proof image reference (optional)")?;
            Ok(PaymentMode::Cheque {
                cheque_number,
                proof_image,
            })
        }
        _ => {
            let proof_image = io::prompt_optional(&ctx.theme, "Proof image reference (optional)")?;
            Ok(PaymentMode::Upi { proof_image })
        }
    }
}
