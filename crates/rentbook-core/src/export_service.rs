//! Renders an aggregated report into a shareable document.

use std::fmt::Write as _;

use rentbook_domain::dates;

use crate::{format::format_amount, report_service::ReportSnapshot};

/// Produces the printable/shareable report artifact. Rendering is pure;
/// delivery of the document belongs to the caller.
pub struct ReportExporter;

impl ReportExporter {
    /// Renders the snapshot as a self-contained HTML document with the
    /// branding banner, inflow/outflow tables, and computed totals.
    pub fn render(snapshot: &ReportSnapshot, branding: &str, currency: &str) -> String {
        let mut inflow_rows = String::new();
        for entry in &snapshot.inflows {
            let _ = write!(
                inflow_rows,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{currency}{}</td><td>{currency}{}</td><td>{currency}{}</td></tr>\n",
                entry.room_number,
                entry.name,
                dates::format_date(entry.date),
                format_amount(entry.total_rent()),
                format_amount(entry.total_paid()),
                format_amount(entry.remaining()),
            );
        }

        let mut outflow_rows = String::new();
        for expense in &snapshot.outflows {
            let _ = write!(
                outflow_rows,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{currency}{}</td></tr>\n",
                expense.person,
                expense.purpose,
                dates::format_date(expense.date),
                format_amount(expense.amount),
            );
        }

        format!(
            r#"<html>
  <head>
    <style>
      body {{ font-family: Arial, sans-serif; padding: 20px; }}
      h1, h2, h3 {{ text-align: center; }}
      .branding {{ background-color: #4B0082; color: white; padding: 10px 0; text-align: center; font-size: 24px; font-weight: bold; margin-bottom: 30px; }}
      table {{ width: 100%; border-collapse: collapse; margin-top: 10px; }}
      th, td {{ border: 1px solid #ccc; padding: 8px; text-align: center; }}
      p {{ font-size: 16px; font-weight: bold; }}
    </style>
  </head>
  <body>
    <div class="branding">{branding}</div>
    <h1>Financial Report</h1>
    <h2>Month: {month}</h2>
    <p><strong>Date Range:</strong> {start} to {end}</p>

    <h2>Cash Inflow</h2>
    <table>
      <tr><th>Flat No</th><th>Person</th><th>Date</th><th>Total Rent</th><th>Rent Paid</th><th>Remaining</th></tr>
      {inflow_rows}
    </table>
    <p>Total Income: {currency}{total_income}</p>

    <h2>Cash Outflow</h2>
    <table>
      <tr><th>Person</th><th>Purpose</th><th>Date</th><th>Amount</th></tr>
      {outflow_rows}
    </table>
    <p>Total Outcome: {currency}{total_outcome}</p>

    <h3>Remaining Balance: {currency}{remaining_balance}</h3>
  </body>
</html>
"#,
            month = snapshot.window.month_name(),
            start = dates::format_date(snapshot.window.start),
            end = dates::format_date(snapshot.window.end),
            total_income = format_amount(snapshot.total_income),
            total_outcome = format_amount(snapshot.total_outcome),
            remaining_balance = format_amount(snapshot.remaining_balance),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        memory::MemoryStore,
        rent_service::{BaselineRule, RentLedgerService},
        report_service::ReportService,
        test_support::{expense_form, ledger_form},
        ExpenseService,
    };

    #[test]
    fn render_contains_all_sections() {
        let store = MemoryStore::new();
        RentLedgerService::submit(
            &store,
            ledger_form(101, "5000", "10-03-2025"),
            BaselineRule::Chronological,
        )
        .unwrap();
        ExpenseService::submit_batch(&store, vec![expense_form("Mohan", "450", "05-03-2025")])
            .unwrap();

        let mut reports = ReportService::new();
        let snapshot = reports.fetch(&store, 2025, 2).unwrap().clone();
        let html = ReportExporter::render(&snapshot, "SAINI TRADERS", "\u{20b9}");

        assert!(html.contains("SAINI TRADERS"));
        assert!(html.contains("Month: March"));
        assert!(html.contains("02-03-2025 to 01-04-2025"));
        assert!(html.contains("<td>101</td>"));
        assert!(html.contains("<td>Mohan</td>"));
        assert!(html.contains("Total Income: \u{20b9}10000"));
        assert!(html.contains("Total Outcome: \u{20b9}450"));
        assert!(html.contains("Remaining Balance: \u{20b9}9550"));
    }

    #[test]
    fn render_is_pure() {
        let store = MemoryStore::new();
        RentLedgerService::submit(
            &store,
            ledger_form(101, "5000", "10-03-2025"),
            BaselineRule::Chronological,
        )
        .unwrap();
        let mut reports = ReportService::new();
        let snapshot = reports.fetch(&store, 2025, 2).unwrap().clone();
        let first = ReportExporter::render(&snapshot, "X", "Rs ");
        let second = ReportExporter::render(&snapshot, "X", "Rs ");
        assert_eq!(first, second);
    }
}
