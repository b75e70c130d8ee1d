use rust_decimal::Decimal;
use tabled::builder::Builder;
use tabled::settings::Style;

/// Display-time money formatting: two decimal places, nothing more.
pub fn money(value: Decimal) -> String {
    format!("{value:.2}")
}

pub fn table(header: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut builder = Builder::default();
    builder.push_record(header.iter().map(|cell| cell.to_string()));
    for row in rows {
        builder.push_record(row);
    }
    builder.build().with(Style::rounded()).to_string()
}
