use serde_json::Value;

use super::plain;

/// Print just the answer: the fee for a single quote, or one
/// `<amount> <fee>` line per row for batches and schedules.
pub fn print_minimal(value: &Value) {
    for line in minimal_lines(value) {
        println!("{}", line);
    }
}

fn minimal_lines(value: &Value) -> Vec<String> {
    if let Some(fee) = value.pointer("/result/fee") {
        return vec![plain(fee)];
    }

    if let Some(Value::Array(rows)) = value.get("results") {
        return rows
            .iter()
            .map(|row| match (row.get("amount"), row.get("fee")) {
                (Some(amount), Some(fee)) => format!("{} {}", plain(amount), plain(fee)),
                _ => plain(row),
            })
            .collect();
    }

    vec![plain(value)]
}
