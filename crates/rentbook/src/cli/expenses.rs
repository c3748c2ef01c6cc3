//! Cash outflow menu: batch expense capture and guarded deletion.

use rentbook_core::{
    format::format_amount, DeletionState, DeletionWorkflow, ExpenseForm, ExpenseService,
};
use rentbook_domain::{dates, ExpenseEntry};

use crate::cli::{io, output, CliContext, CliError};

const EXPENSE_MENU: &[&str] = &["Add expenses", "List expenses", "Delete expense", "Back"];

pub fn run(ctx: &mut CliContext) -> Result<(), CliError> {
    loop {
        let result = match io::select_index(&ctx.theme, "Cash outflow", EXPENSE_MENU)? {
            0 => add_batch(ctx),
            1 => list(ctx),
            2 => delete(ctx),
            _ => return Ok(()),
        };
        if let Err(err) = result {
            io::print_error(&err);
        }
    }
}

fn add_batch(ctx: &mut CliContext) -> Result<(), CliError> {
    let mut forms = Vec::new();
    loop {
        forms.push(collect_row(ctx)?);
        if !io::confirm_action(&ctx.theme, "Add another row?", false)? {
            break;
        }
    }

    let Some(_token) = ctx.submit_guard.try_begin() else {
        io::print_warning("A submission is already in progress");
        return Ok(());
    };
    let outcome = ExpenseService::submit_batch(&ctx.store, forms)?;
    if outcome.fully_succeeded() {
        io::print_success(format!("{} expense(s) recorded", outcome.created.len()));
    } else {
        io::print_warning(format!(
            "{} expense(s) recorded, {} row(s) failed",
            outcome.created.len(),
            outcome.failures.len()
        ));
        for (row, err) in &outcome.failures {
            io::print_error(format!("Row {}: {err}", row + 1));
        }
    }
    Ok(())
}

fn collect_row(ctx: &CliContext) -> Result<ExpenseForm, CliError> {
    let theme = &ctx.theme;
    let person = io::prompt_optional(theme, "Person")?.unwrap_or_default();
    let purpose = io::prompt_optional(theme, "Purpose")?.unwrap_or_default();
    let date = io::prompt_with_default(
        theme,
        "Date (dd-mm-yyyy)",
        &dates::format_date(dates::today()),
    )?;
    let amount = io::prompt_text(theme, "Amount")?;
    Ok(ExpenseForm {
        person,
        purpose,
        date,
        amount,
    })
}

fn list(ctx: &mut CliContext) -> Result<(), CliError> {
    let expenses = ExpenseService::list(&ctx.store)?;
    if expenses.is_empty() {
        io::print_info("No expenses recorded");
        return Ok(());
    }
    output::section("Cash Outflow");
    for expense in &expenses {
        output::info(describe(ctx, expense));
    }
    output::separator();
    Ok(())
}

fn delete(ctx: &mut CliContext) -> Result<(), CliError> {
    let mut flow: DeletionWorkflow<ExpenseEntry> = DeletionWorkflow::new();
    flow.begin_search()?;

    let expenses = ExpenseService::list(&ctx.store)?;
    if expenses.is_empty() {
        flow.resolve_search(None)?;
        io::print_info("No expenses to delete");
        return Ok(());
    }
    let labels: Vec<String> = expenses.iter().map(|e| describe(ctx, e)).collect();
    let index = io::select_index(&ctx.theme, "Select an expense", &labels)?;
    flow.resolve_search(Some(expenses[index].clone()))?;

    let target = flow.request_confirmation()?;
    let prompt = format!("Delete `{}`?", describe(ctx, target));
    if !io::confirm_action(&ctx.theme, &prompt, false)? {
        flow.cancel();
        io::print_info("Deletion cancelled");
        return Ok(());
    }

    flow.confirm(|expense| ExpenseService::delete(&ctx.store, expense.id))?;
    debug_assert!(matches!(flow.state(), DeletionState::Deleted));
    io::print_success("Expense deleted");
    Ok(())
}

fn describe(ctx: &CliContext, expense: &ExpenseEntry) -> String {
    format!(
        "{}  {}  {}  {}{}",
        dates::format_date(expense.date),
        expense.person,
        expense.purpose,
        ctx.config.currency_symbol,
        format_amount(expense.amount)
    )
}
