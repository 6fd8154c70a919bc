//! Tests for the extraction engine.

use rust_decimal::Decimal;

use crate::dom::parse;
use crate::domain::SymbolStats;

use super::landmark::*;
use super::metrics::*;
use super::numeric::*;
use super::paging::*;
use super::symbols::*;

fn dec(s: &str) -> Decimal {
    s.parse().expect("test decimal")
}

// ==================== Numeric normalizer tests ====================

#[test]
fn test_parse_numeric_currency_prefix() {
    assert_eq!(parse_numeric("$ 1,234.56").unwrap(), Some(dec("1234.56")));
}

#[test]
fn test_parse_numeric_currency_code_suffix() {
    assert_eq!(parse_numeric("-12.30 USD").unwrap(), Some(dec("-12.30")));
}

#[test]
fn test_parse_numeric_no_digits_is_absent() {
    // An em-dash placeholder means "no value", not zero and not an error.
    assert_eq!(parse_numeric("\u{2014}").unwrap(), None);
}

#[test]
fn test_parse_numeric_empty_is_absent() {
    assert_eq!(parse_numeric("").unwrap(), None);
    assert_eq!(parse_numeric("   ").unwrap(), None);
}

#[test]
fn test_parse_numeric_garbled_is_error() {
    assert!(parse_numeric("1.2.3").is_err());
    assert!(parse_numeric("1-2").is_err());
}

#[test]
fn test_parse_numeric_plain_integer() {
    assert_eq!(parse_numeric("42").unwrap(), Some(dec("42")));
}

#[test]
fn test_normalize_currency_divides_and_rounds() {
    assert_eq!(normalize_currency(dec("123.456"), 100), dec("1.23"));
}

#[test]
fn test_normalize_currency_zero_divider_unchanged() {
    assert_eq!(normalize_currency(dec("123.456"), 0), dec("123.456"));
    assert_eq!(normalize_currency(dec("123.456"), 1), dec("123.456"));
}

#[test]
fn test_round2_half_away_from_zero() {
    assert_eq!(round2(dec("10.005")), dec("10.01"));
    assert_eq!(round2(dec("-10.005")), dec("-10.01"));
}

// ==================== Metric deriver tests ====================

#[test]
fn test_drawdown_basic() {
    assert_eq!(
        drawdown(Some(dec("1000")), Some(dec("900"))),
        Some(dec("-10.00"))
    );
}

#[test]
fn test_drawdown_zero_balance_guarded() {
    assert_eq!(drawdown(Some(dec("0")), Some(dec("900"))), None);
}

#[test]
fn test_drawdown_missing_inputs() {
    assert_eq!(drawdown(None, Some(dec("900"))), None);
    assert_eq!(drawdown(Some(dec("1000")), None), None);
}

#[test]
fn test_drawdown_equity_above_balance_is_positive() {
    assert_eq!(
        drawdown(Some(dec("1000")), Some(dec("1100"))),
        Some(dec("10.00"))
    );
}

#[test]
fn test_overall_drawdown_zero_adjusted_deposit() {
    assert_eq!(
        overall_drawdown(Some(dec("500")), Some(dec("500")), Some(dec("900"))),
        None
    );
}

#[test]
fn test_overall_drawdown_basic() {
    // 100 - 100 * 9500 / 11000 = 13.6363..., negated and rounded.
    assert_eq!(
        overall_drawdown(Some(dec("12000")), Some(dec("1000")), Some(dec("9500"))),
        Some(dec("-13.64"))
    );
}

// ==================== Landmark extractor tests ====================

const LABEL_SEL: &str = "span.floatLeft";
const VALUE_SEL: &str = "span.floatNone";

#[test]
fn test_labeled_value_match() {
    let doc = parse(
        r#"<li><span class="floatLeft">Balance:</span><span class="floatNone">$ 10,000.00</span></li>"#,
    );
    let li = doc.select("li")[0];
    assert_eq!(
        labeled_value(&li, "Balance", LABEL_SEL, VALUE_SEL),
        Some("$ 10,000.00".to_string())
    );
}

#[test]
fn test_labeled_value_substring_match_with_decoration() {
    let doc = parse(
        r#"<li><span class="floatLeft">Total Profit (all time):</span><span class="floatNone">55.00</span></li>"#,
    );
    let li = doc.select("li")[0];
    assert_eq!(
        labeled_value(&li, "Profit", LABEL_SEL, VALUE_SEL),
        Some("55.00".to_string())
    );
}

#[test]
fn test_labeled_value_no_match_is_absent() {
    let doc = parse(
        r#"<li><span class="floatLeft">Equity:</span><span class="floatNone">1.00</span></li>"#,
    );
    let li = doc.select("li")[0];
    assert_eq!(labeled_value(&li, "Balance", LABEL_SEL, VALUE_SEL), None);
}

#[test]
fn test_labeled_numeric_bad_value_is_absent() {
    let doc = parse(
        r#"<li><span class="floatLeft">Balance:</span><span class="floatNone">1.2.3</span></li>"#,
    );
    let li = doc.select("li")[0];
    assert_eq!(labeled_numeric(&li, "Balance", LABEL_SEL, VALUE_SEL), None);
}

#[test]
fn test_money_after_last_space() {
    assert_eq!(money_after_last_space("+5% 9,500.00"), Some("9,500.00"));
    assert_eq!(money_after_last_space("  -0.3% 123.45  "), Some("123.45"));
    assert_eq!(money_after_last_space("9500.00"), None);
}

// ==================== Period-profit extractor tests ====================

#[test]
fn test_period_profit_offsets() {
    let doc = parse(
        r#"<tr><td>Today</td><td><span>1.5%</span></td><td><span>$ 25.40</span></td></tr>"#,
    );
    let row = doc.select("tr")[0];
    let (money, percent) = period_profit(&row, "Today", "td").unwrap();
    assert_eq!(money, Some(dec("25.40")));
    assert_eq!(percent, Some(dec("1.5")));
}

#[test]
fn test_period_profit_marker_not_found() {
    let doc = parse(r#"<tr><td>This Week</td><td><span>1%</span></td><td><span>2</span></td></tr>"#);
    let row = doc.select("tr")[0];
    assert_eq!(period_profit(&row, "Today", "td").unwrap(), (None, None));
}

#[test]
fn test_period_profit_header_row_without_cells() {
    let doc = parse(r#"<tr><th>Today</th><th>Gain</th></tr>"#);
    let row = doc.select("tr")[0];
    // No td label cell, so the lookup never fires on divider/header rows.
    assert_eq!(period_profit(&row, "Today", "td").unwrap(), (None, None));
}

#[test]
fn test_period_profit_unparsable_cell_is_error() {
    let doc = parse(
        r#"<tr><td>This Month</td><td><span>1.2.3</span></td><td><span>5</span></td></tr>"#,
    );
    let row = doc.select("tr")[0];
    assert!(period_profit(&row, "This Month", "td").is_err());
}

#[test]
fn test_period_profit_missing_sibling_cells() {
    let doc = parse(r#"<tr><td>This Year</td></tr>"#);
    let row = doc.select("tr")[0];
    assert_eq!(period_profit(&row, "This Year", "td").unwrap(), (None, None));
}

// ==================== Pagination planner tests ====================

#[test]
fn test_page_count_last_indicator_wins() {
    let doc = parse(
        r#"<div id="openTrades"><span class="paging">1</span><span class="paging">2</span><span class="paging">3</span></div>"#,
    );
    assert_eq!(page_count(&doc.root(), "#openTrades .paging"), 3);
}

#[test]
fn test_page_count_defaults_to_one() {
    let doc = parse(r#"<div id="openTrades"></div>"#);
    assert_eq!(page_count(&doc.root(), "#openTrades .paging"), 1);
}

#[test]
fn test_page_count_unparsable_defaults_to_one() {
    let doc = parse(r#"<div id="openTrades"><span class="paging">next</span></div>"#);
    assert_eq!(page_count(&doc.root(), "#openTrades .paging"), 1);
}

#[test]
fn test_account_id_from_location() {
    assert_eq!(
        account_id("https://www.myfxbook.com/members/user/account/1234567/"),
        Some("1234567")
    );
    assert_eq!(
        account_id("https://www.myfxbook.com/portfolio/view/1234567"),
        Some("1234567")
    );
}

#[test]
fn test_page_urls_one_per_page() {
    let urls = page_urls("https://www.myfxbook.com", "1234567", 3);
    assert_eq!(urls.len(), 3);
    assert_eq!(
        urls[0],
        "https://www.myfxbook.com/paging.html?pt=15&p=1&ts=20000&l=x&id=1234567"
    );
    assert!(urls[1].contains("&p=2&"));
    assert!(urls[2].contains("&p=3&"));
}

// ==================== Symbol aggregator tests ====================

const HEADER_HTML: &str = r#"<tr>
    <th>Open Date</th><th>Symbol</th><th>Action</th><th>Lots</th>
    <th>Profit (USD)</th><th>Gain</th>
</tr>"#;

fn data_row(symbol: &str, profit: &str, gain: &str) -> String {
    // Leading cell is the broker-time column absent from the header.
    format!(
        "<tr><td>2024.01.02 10:00</td><td>2024.01.02</td><td>{}</td><td>buy</td>\
         <td>0.10</td><td>{}</td><td>{}</td></tr>",
        symbol, profit, gain
    )
}

#[test]
fn test_resolve_columns_applies_broker_time_shift() {
    let doc = parse(HEADER_HTML);
    let roles = ColumnRoles::resolve(&doc.select("tr")[0]);
    assert_eq!(roles.name, Some(2));
    assert_eq!(roles.profit, Some(5));
    assert_eq!(roles.profit_percent, Some(6));
    assert!(roles.complete());
}

#[test]
fn test_resolve_columns_partial_header() {
    let doc = parse("<tr><th>Open Date</th><th>Symbol</th></tr>");
    let roles = ColumnRoles::resolve(&doc.select("tr")[0]);
    assert_eq!(roles.name, Some(2));
    assert_eq!(roles.profit, None);
    assert!(!roles.complete());
}

fn resolved_roles() -> ColumnRoles {
    let doc = parse(HEADER_HTML);
    ColumnRoles::resolve(&doc.select("tr")[0])
}

#[test]
fn test_read_row_triple() {
    let doc = parse(&data_row("EURUSD", "10.50", "1.2"));
    let row = read_row(&doc.select("tr")[0], &resolved_roles()).unwrap();
    assert_eq!(row.name, "EURUSD");
    assert_eq!(row.profit, dec("10.50"));
    assert_eq!(row.profit_percent, dec("1.2"));
}

#[test]
fn test_read_row_empty_name_skipped() {
    let doc = parse(&data_row("  ", "10.50", "1.2"));
    let err = read_row(&doc.select("tr")[0], &resolved_roles()).unwrap_err();
    assert!(matches!(err, RowError::EmptyName(_)));
}

#[test]
fn test_read_row_bad_profit_skipped() {
    let doc = parse(&data_row("EURUSD", "1.2.3", "1.2"));
    let err = read_row(&doc.select("tr")[0], &resolved_roles()).unwrap_err();
    assert!(matches!(err, RowError::BadNumber { .. }));
}

#[test]
fn test_read_row_unresolved_roles() {
    let doc = parse(&data_row("EURUSD", "10.50", "1.2"));
    let err = read_row(&doc.select("tr")[0], &ColumnRoles::default()).unwrap_err();
    assert!(matches!(err, RowError::UnresolvedColumns));
}

#[test]
fn test_read_row_short_row() {
    let doc = parse("<tr><td>x</td><td>y</td></tr>");
    let err = read_row(&doc.select("tr")[0], &resolved_roles()).unwrap_err();
    assert!(matches!(err, RowError::MissingCell(_)));
}

fn row(name: &str, profit: &str, percent: &str) -> SymbolRow {
    SymbolRow {
        name: name.to_string(),
        profit: dec(profit),
        profit_percent: dec(percent),
    }
}

#[test]
fn test_merge_rounds_on_each_step() {
    // Round after each merge, not once over the exact sum.
    let mut aggregate = Vec::new();
    merge_symbol(&mut aggregate, row("EURUSD", "10.005", "0.1"));
    merge_symbol(&mut aggregate, row("EURUSD", "5.004", "0.2"));
    assert_eq!(aggregate.len(), 1);
    assert_eq!(aggregate[0].profit, dec("15.01"));
    assert_eq!(aggregate[0].profit_percent, dec("0.30"));
}

#[test]
fn test_merge_distinct_names_append_in_order() {
    let mut aggregate = Vec::new();
    merge_symbol(&mut aggregate, row("EURUSD", "1", "0.1"));
    merge_symbol(&mut aggregate, row("GBPUSD", "2", "0.2"));
    merge_symbol(&mut aggregate, row("EURUSD", "3", "0.3"));
    let names: Vec<&str> = aggregate.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["EURUSD", "GBPUSD"]);
    assert_eq!(aggregate[0].profit, dec("4.00"));
}

#[test]
fn test_merge_commutative_across_page_order() {
    let page1 = vec![row("EURUSD", "10.25", "1.1"), row("GBPUSD", "-3.50", "-0.4")];
    let page2 = vec![row("EURUSD", "5.75", "0.6"), row("USDJPY", "2.00", "0.2")];

    let mut forward = Vec::new();
    for r in page1.iter().chain(page2.iter()).cloned() {
        merge_symbol(&mut forward, r);
    }

    let mut backward = Vec::new();
    for r in page2.iter().chain(page1.iter()).cloned() {
        merge_symbol(&mut backward, r);
    }

    let totals = |stats: &[SymbolStats]| {
        let mut pairs: Vec<(String, Decimal, Decimal)> = stats
            .iter()
            .map(|s| (s.name.clone(), s.profit, s.profit_percent))
            .collect();
        pairs.sort();
        pairs
    };
    assert_eq!(totals(&forward), totals(&backward));
}
