//! Pure HTML rendering for the stats report.

use std::fmt::Write;

use rust_decimal::Decimal;

use super::AccountSection;

/// Formats a metric with an explicit sign. Absent values render as "0.00".
pub fn value_of(value: Option<Decimal>) -> String {
    match value {
        Some(v) if v > Decimal::ZERO => format!("+{:.2}", v),
        Some(v) if v < Decimal::ZERO => format!("{:.2}", v),
        _ => "0.00".to_string(),
    }
}

/// Formats a metric without a plus sign. Absent values render as "0.00".
pub fn plain_value_of(value: Option<Decimal>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "0.00".to_string(),
    }
}

/// CSS class for a metric cell. Empty for absent or zero values.
pub fn color_of(value: Option<Decimal>) -> &'static str {
    match value {
        Some(v) if v > Decimal::ZERO => "green",
        Some(v) if v < Decimal::ZERO => "red",
        _ => "",
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn signed_cell(out: &mut String, value: Option<Decimal>) {
    let _ = write!(
        out,
        "<td class=\"{}\">{}</td>",
        color_of(value),
        value_of(value)
    );
}

fn plain_cell(out: &mut String, value: Option<Decimal>) {
    let _ = write!(out, "<td>{}</td>", plain_value_of(value));
}

pub(super) fn render_page(title: &str, sections: &[AccountSection]) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>\n\
         body {{ font-family: sans-serif; }}\n\
         table {{ border-collapse: collapse; }}\n\
         th, td {{ border: 1px solid #ccc; padding: 4px 8px; text-align: right; }}\n\
         th:first-child, td:first-child {{ text-align: left; }}\n\
         td.green {{ color: #0a7d00; }}\n\
         td.red {{ color: #c00; }}\n\
         </style>\n</head>\n<body>\n<h1>{title}</h1>\n",
        title = escape(title)
    );

    out.push_str(
        "<table>\n<tr><th>Account</th><th>Currency</th><th>Balance</th><th>Equity</th>\
         <th>Profit</th><th>Drawdown</th><th>Overall DD</th>\
         <th>Day</th><th>Week</th><th>Month</th><th>Year</th></tr>\n",
    );

    for section in sections {
        let stats = &section.stats;
        out.push_str("<tr>");
        let _ = write!(
            out,
            "<td>{}</td><td>{}</td>",
            escape(&section.config.name),
            escape(&section.config.currency)
        );
        plain_cell(&mut out, stats.balance);
        plain_cell(&mut out, stats.equity);
        signed_cell(&mut out, stats.profit);
        signed_cell(&mut out, stats.drawdown);
        signed_cell(&mut out, stats.overall_drawdown);
        signed_cell(&mut out, stats.day_profit_money);
        signed_cell(&mut out, stats.week_profit_money);
        signed_cell(&mut out, stats.month_profit_money);
        signed_cell(&mut out, stats.year_profit_money);
        out.push_str("</tr>\n");
    }
    out.push_str("</table>\n");

    for section in sections {
        if section.stats.symbol_stats.is_empty() {
            continue;
        }
        let _ = write!(out, "<h2>{}</h2>\n", escape(&section.config.name));
        out.push_str("<table>\n<tr><th>Symbol</th><th>Profit</th><th>Gain %</th></tr>\n");
        for symbol in &section.stats.symbol_stats {
            out.push_str("<tr>");
            let _ = write!(out, "<td>{}</td>", escape(&symbol.name));
            signed_cell(&mut out, Some(symbol.profit));
            signed_cell(&mut out, Some(symbol.profit_percent));
            out.push_str("</tr>\n");
        }
        out.push_str("</table>\n");
    }

    out.push_str("</body>\n</html>\n");
    out
}
