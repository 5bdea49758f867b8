//! Result rendering
//!
//! Every command builds a [`Report`] of named fields and prints it either as
//! a boxed table or as a JSON object.

use clap::ValueEnum;
use serde_json::{Map, Value};

use crate::Result;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Named result fields of one command
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    title: String,
    fields: Vec<(String, Value)>,
}

impl Report {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Append a serialisable value as a nested field
    pub fn nested<T: serde::Serialize>(self, name: impl Into<String>, value: &T) -> Result<Self> {
        Ok(self.field(name, serde_json::to_value(value)?))
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    /// JSON object with the title under `"instrument"`
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert("instrument".to_string(), Value::String(self.title.clone()));
        for (name, value) in &self.fields {
            map.insert(name.clone(), value.clone());
        }
        Value::Object(map)
    }

    /// Two-column box-drawn table
    pub fn to_table(&self) -> String {
        let rows: Vec<(&str, String)> = self
            .fields
            .iter()
            .map(|(name, value)| (name.as_str(), display_value(value)))
            .collect();

        let key_width = rows
            .iter()
            .map(|(k, _)| k.chars().count())
            .chain(std::iter::once(self.title.chars().count()))
            .max()
            .unwrap_or(0);
        let value_width = rows
            .iter()
            .map(|(_, v)| v.chars().count())
            .max()
            .unwrap_or(0)
            .max(5);

        let bar = |left: char, mid: char, right: char| {
            format!(
                "{}{}{}{}{}",
                left,
                "─".repeat(key_width + 2),
                mid,
                "─".repeat(value_width + 2),
                right
            )
        };

        let mut out = Vec::with_capacity(rows.len() + 4);
        out.push(bar('┌', '┬', '┐'));
        out.push(format!(
            "│ {:<kw$} │ {:<vw$} │",
            self.title,
            "value",
            kw = key_width,
            vw = value_width
        ));
        out.push(bar('├', '┼', '┤'));
        for (key, value) in &rows {
            out.push(format!(
                "│ {:<kw$} │ {:>vw$} │",
                key,
                value,
                kw = key_width,
                vw = value_width
            ));
        }
        out.push(bar('└', '┴', '┘'));
        out.join("\n")
    }

    /// Render in the requested format
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(self.to_table()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&self.to_json())?),
        }
    }

    /// Print to stdout
    pub fn emit(&self, format: OutputFormat) -> Result<()> {
        println!("{}", self.render(format)?);
        Ok(())
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> Report {
        Report::new("equity")
            .field("price", 10.450583572185565)
            .field("option_type", "call")
            .field("seed", Value::Null)
    }

    #[test]
    fn test_json_contains_all_fields() {
        let json = report().to_json();
        assert_eq!(json["instrument"], "equity");
        assert_eq!(json["price"], 10.450583572185565);
        assert_eq!(json["option_type"], "call");
        assert!(json["seed"].is_null());
    }

    #[test]
    fn test_table_layout() {
        let table = report().to_table();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with('┌'));
        assert!(lines[1].contains("equity"));
        assert!(lines[3].contains("10.450583572185565"));
        assert!(lines[4].contains("call"));
        assert!(lines[5].ends_with("- │"));

        let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|&w| w == widths[0]));
    }

    #[test]
    fn test_get_and_nested() {
        #[derive(serde::Serialize)]
        struct Legs {
            premium: f64,
        }
        let report = report().nested("legs", &Legs { premium: 1.5 }).unwrap();
        assert_eq!(report.get("legs").unwrap()["premium"], 1.5);
        assert!(report.get("missing").is_none());
    }
}
