use serde_json::{Map, Value};
use std::io::{self, Write};

/// Write output as CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let _ = write_csv(value, stdout.lock());
}

/// A result holding a list of rows (quote allocations, ranked lenders) is
/// written as that table; anything else becomes a two-column field/value
/// listing.
pub fn write_csv<W: Write>(value: &Value, out: W) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    match value {
        Value::Object(map) => {
            let body = match map.get("result") {
                Some(Value::Object(result)) => result,
                _ => map,
            };
            match first_row_list(body) {
                Some(rows) => write_array_csv(&mut wtr, rows)?,
                None => write_fields_csv(&mut wtr, body)?,
            }
        }
        Value::Array(arr) => write_array_csv(&mut wtr, arr)?,
        _ => wtr.write_record([&format_csv_value(value)])?,
    }

    wtr.flush()?;
    Ok(())
}

fn first_row_list(map: &Map<String, Value>) -> Option<&Vec<Value>> {
    map.values().find_map(|v| match v {
        Value::Array(rows) if !rows.is_empty() && rows.iter().all(Value::is_object) => Some(rows),
        _ => None,
    })
}

fn write_fields_csv<W: Write>(wtr: &mut csv::Writer<W>, map: &Map<String, Value>) -> csv::Result<()> {
    wtr.write_record(["field", "value"])?;
    for (key, val) in map {
        wtr.write_record([key.as_str(), &format_csv_value(val)])?;
    }
    Ok(())
}

fn write_array_csv<W: Write>(wtr: &mut csv::Writer<W>, arr: &[Value]) -> csv::Result<()> {
    if arr.is_empty() {
        return Ok(());
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
        wtr.write_record(&headers)?;

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(*h).map(format_csv_value).unwrap_or_default())
                    .collect();
                wtr.write_record(&row)?;
            }
        }
    } else {
        for item in arr {
            wtr.write_record([&format_csv_value(item)])?;
        }
    }
    Ok(())
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
