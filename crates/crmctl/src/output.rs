//! Output dispatch: render a JSON-compatible value as JSON, YAML, CSV, or
//! a plain table.

use std::io::Write;

use serde_json::Value;
use unicode_width::UnicodeWidthStr;

/// Output format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    Json,
    Yaml,
    Csv,
    #[default]
    Table,
}

impl Format {
    /// Parse a format name; anything unrecognized renders as a table.
    pub fn parse(name: &str) -> Format {
        match name.to_ascii_lowercase().as_str() {
            "json" => Format::Json,
            "yaml" => Format::Yaml,
            "csv" => Format::Csv,
            _ => Format::Table,
        }
    }
}

/// Per-invocation output settings.
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    pub format: Format,
    pub projection: Option<String>,
}

impl OutputOptions {
    /// Render a value to stdout.
    pub fn write(&self, value: &Value) -> anyhow::Result<()> {
        let stdout = std::io::stdout();
        render(
            &mut stdout.lock(),
            value,
            self.format,
            self.projection.as_deref(),
        )
    }
}

/// Render a value in the given format, applying the optional dot-path
/// projection first. JSON and YAML get the whole value pretty-printed;
/// CSV and table reduce it to rows and derive columns from the first
/// record's keys.
pub fn render(
    w: &mut impl Write,
    value: &Value,
    format: Format,
    projection: Option<&str>,
) -> anyhow::Result<()> {
    let projected;
    let value = match projection {
        Some(path) if !path.trim().is_empty() => {
            projected = project(value, path);
            &projected
        }
        _ => value,
    };

    match format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut *w, value)?;
            writeln!(w)?;
        }
        Format::Yaml => serde_yaml::to_writer(&mut *w, value)?,
        Format::Csv => render_csv(w, value)?,
        Format::Table => render_table(w, value)?,
    }

    Ok(())
}

/// Walk a dot-path through objects (by key) and arrays (by index).
/// A missing path yields `null`.
pub fn project(value: &Value, path: &str) -> Value {
    let mut current = value;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment).unwrap_or(&Value::Null),
            Value::Array(items) => segment
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get(index))
                .unwrap_or(&Value::Null),
            _ => &Value::Null,
        };
    }
    current.clone()
}

/// Reduce a value to the rows it represents.
///
/// A `{"data": {<key>: [...]}}` envelope unwraps to the inner list; a
/// `{"data": {<key>: {...}}}` envelope to the inner record; plain arrays
/// and objects pass through; scalars become a one-cell row.
fn rows_of(value: &Value) -> Vec<Value> {
    let inner = match value.get("data") {
        Some(Value::Object(map)) => map
            .values()
            .find(|v| v.is_array())
            .or_else(|| map.values().find(|v| v.is_object()))
            .cloned()
            .unwrap_or_else(|| Value::Object(map.clone())),
        Some(other) => other.clone(),
        None => value.clone(),
    };

    match inner {
        Value::Array(items) => items,
        Value::Object(_) => vec![inner],
        other => vec![serde_json::json!({ "value": other })],
    }
}

/// Flatten one cell to display text. Scalars print bare; nested values
/// print as compact JSON.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Column names from the first row.
fn columns_of(rows: &[Value]) -> Vec<String> {
    match rows.first() {
        Some(Value::Object(map)) => map.keys().cloned().collect(),
        Some(_) => vec!["value".to_string()],
        None => Vec::new(),
    }
}

fn cell_of(row: &Value, column: &str) -> String {
    match row {
        Value::Object(map) => cell_text(map.get(column).unwrap_or(&Value::Null)),
        other => cell_text(other),
    }
}

fn render_csv(w: &mut impl Write, value: &Value) -> anyhow::Result<()> {
    let rows = rows_of(value);
    let columns = columns_of(&rows);
    if columns.is_empty() {
        return Ok(());
    }

    let mut writer = csv::Writer::from_writer(w);
    writer.write_record(&columns)?;
    for row in &rows {
        let record: Vec<String> = columns.iter().map(|c| cell_of(row, c)).collect();
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

fn render_table(w: &mut impl Write, value: &Value) -> anyhow::Result<()> {
    let rows = rows_of(value);
    let columns = columns_of(&rows);
    if columns.is_empty() {
        return Ok(());
    }

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| columns.iter().map(|c| cell_of(row, c)).collect())
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            cells
                .iter()
                .map(|row| row[i].width())
                .chain(std::iter::once(column.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    write_row(w, &columns, &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_row(w, &rule, &widths)?;
    for row in &cells {
        write_row(w, row, &widths)?;
    }
    Ok(())
}

fn write_row(w: &mut impl Write, cells: &[String], widths: &[usize]) -> anyhow::Result<()> {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        // Pad by display width, not byte length
        let pad = widths[i].saturating_sub(cell.width());
        if i < cells.len() - 1 {
            line.push_str(&" ".repeat(pad));
        }
    }
    writeln!(w, "{}", line.trim_end())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render_string(value: &Value, format: Format, projection: Option<&str>) -> String {
        let mut buf = Vec::new();
        render(&mut buf, value, format, projection).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_format_parse_fallback() {
        assert_eq!(Format::parse("json"), Format::Json);
        assert_eq!(Format::parse("YAML"), Format::Yaml);
        assert_eq!(Format::parse("csv"), Format::Csv);
        assert_eq!(Format::parse("table"), Format::Table);
        assert_eq!(Format::parse("whatever"), Format::Table);
    }

    #[test]
    fn test_projection_walks_objects_and_arrays() {
        let value = json!({"data": {"people": [{"id": "1"}, {"id": "2"}]}});
        assert_eq!(project(&value, "data.people.1.id"), json!("2"));
        assert_eq!(project(&value, "data.missing"), Value::Null);
        assert_eq!(project(&value, "data.people.x"), Value::Null);
    }

    #[test]
    fn test_json_output_is_pretty() {
        let out = render_string(&json!({"a": 1}), Format::Json, None);
        assert!(out.contains("{\n"));
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_projection_applies_to_every_format() {
        let value = json!({"data": {"people": [{"id": "1"}]}});
        for format in [Format::Json, Format::Yaml, Format::Csv, Format::Table] {
            let out = render_string(&value, format, Some("data.people.0.id"));
            assert!(out.contains('1'), "{format:?}: {out}");
        }
    }

    #[test]
    fn test_csv_from_data_envelope() {
        let value = json!({
            "data": {"people": [
                {"id": "1", "name": "Ada"},
                {"id": "2", "name": "Grace"}
            ]},
            "totalCount": 2
        });
        let out = render_string(&value, Format::Csv, None);
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("id,name"));
        assert_eq!(lines.next(), Some("1,Ada"));
        assert_eq!(lines.next(), Some("2,Grace"));
    }

    #[test]
    fn test_csv_from_flat_object() {
        let value = json!({"id": "1", "name": "Ada"});
        let out = render_string(&value, Format::Csv, None);
        assert!(out.starts_with("id,name"));
        assert!(out.contains("1,Ada"));
    }

    #[test]
    fn test_csv_nested_cells_are_compact_json() {
        let value = json!([{"id": "1", "emails": {"primary": "a@b.c"}}]);
        let out = render_string(&value, Format::Csv, None);
        assert!(out.contains("\"\"primary\"\"") || out.contains("primary"));
    }

    #[test]
    fn test_table_columns_from_first_record() {
        let value = json!({"data": {"people": [
            {"id": "1", "name": "Ada"},
            {"id": "2", "name": "Grace", "extra": true}
        ]}});
        let out = render_string(&value, Format::Table, None);
        let header = out.lines().next().unwrap();
        assert!(header.contains("id"));
        assert!(header.contains("name"));
        // Column set comes from the FIRST record
        assert!(!header.contains("extra"));
    }

    #[test]
    fn test_table_single_record_envelope() {
        let value = json!({"data": {"person": {"id": "1", "name": "Ada"}}});
        let out = render_string(&value, Format::Table, None);
        assert!(out.contains("Ada"));
    }

    #[test]
    fn test_empty_list_renders_nothing_tabular() {
        let value = json!({"data": {"people": []}});
        assert_eq!(render_string(&value, Format::Csv, None), "");
        assert_eq!(render_string(&value, Format::Table, None), "");
    }
}
