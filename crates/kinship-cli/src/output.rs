//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use kinship_domain::{PersonId, RelationshipResult};
use kinship_resolver::{BuildReport, KinshipResolver};
use std::collections::BTreeMap;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format one or more pairwise results.
    pub fn format_relationships(
        &self,
        results: &[RelationshipResult],
        resolver: &KinshipResolver<'_>,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let values: Vec<serde_json::Value> =
                    results.iter().map(|r| result_json(r, resolver)).collect();
                if values.len() == 1 {
                    Ok(serde_json::to_string_pretty(&values[0])?)
                } else {
                    Ok(serde_json::to_string_pretty(&values)?)
                }
            }
            OutputFormat::Table => {
                let lines: Vec<String> = results
                    .iter()
                    .map(|result| self.sentence(result, resolver))
                    .collect();
                Ok(lines.join("\n"))
            }
            OutputFormat::Quiet => {
                let labels: Vec<String> = results.iter().map(RelationshipResult::label).collect();
                Ok(labels.join("\n"))
            }
        }
    }

    /// Format the results of a sweep from one origin.
    pub fn format_sweep(
        &self,
        origin: &PersonId,
        results: &BTreeMap<PersonId, RelationshipResult>,
        resolver: &KinshipResolver<'_>,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let relatives: Vec<serde_json::Value> =
                    results.values().map(|r| result_json(r, resolver)).collect();
                let value = serde_json::json!({
                    "origin": origin.as_str(),
                    "origin_name": resolver.graph().display_name(origin),
                    "relatives": relatives,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                if results.is_empty() {
                    return Ok(self.colorize("No relatives found.", "yellow"));
                }

                let graph = resolver.graph();
                let mut builder = Builder::default();
                builder.push_record(["ID", "Name", "Relationship", "Common Ancestor", "Path"]);

                for (id, result) in results {
                    let ancestor = result
                        .common_ancestor
                        .as_ref()
                        .map(|a| graph.display_name(a))
                        .unwrap_or_default();
                    builder.push_record([
                        id.to_string(),
                        graph.display_name(id),
                        result.label(),
                        ancestor,
                        format_path(&result.path),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                Ok(table.to_string())
            }
            OutputFormat::Quiet => {
                let lines: Vec<String> = results
                    .iter()
                    .map(|(id, result)| format!("{}\t{}", id, result.label()))
                    .collect();
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format an ancestor listing.
    pub fn format_ancestors(
        &self,
        person: &PersonId,
        ancestors: &[(PersonId, u32)],
        resolver: &KinshipResolver<'_>,
    ) -> Result<String> {
        let graph = resolver.graph();

        match self.format {
            OutputFormat::Json => {
                let entries: Vec<serde_json::Value> = ancestors
                    .iter()
                    .map(|(id, generation)| {
                        serde_json::json!({
                            "id": id.as_str(),
                            "name": graph.display_name(id),
                            "generation": generation,
                        })
                    })
                    .collect();
                let value = serde_json::json!({
                    "person": person.as_str(),
                    "ancestors": entries,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                if ancestors.is_empty() {
                    return Ok(self.colorize("No ancestors found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Generation", "ID", "Name"]);
                for (id, generation) in ancestors {
                    builder.push_record([
                        generation.to_string(),
                        id.to_string(),
                        graph.display_name(id),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                Ok(table.to_string())
            }
            OutputFormat::Quiet => {
                let ids: Vec<String> = ancestors.iter().map(|(id, _)| id.to_string()).collect();
                Ok(ids.join("\n"))
            }
        }
    }

    /// Format a graph build report.
    pub fn format_report(&self, report: &BuildReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "people": report.people,
                    "edges_indexed": report.edges_indexed,
                    "skipped": report.skipped(),
                    "unknown_kind": report.unknown_kind,
                    "self_referential": report.self_referential,
                    "dangling": report.dangling,
                    "duplicate_people": report.duplicate_people,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Metric", "Count"]);
                let rows = [
                    ("People", report.people),
                    ("Edges indexed", report.edges_indexed),
                    ("Unknown kind", report.unknown_kind),
                    ("Self-referential", report.self_referential),
                    ("Dangling", report.dangling),
                    ("Duplicate people", report.duplicate_people),
                ];
                for (metric, count) in rows {
                    builder.push_record([metric.to_string(), count.to_string()]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                Ok(table.to_string())
            }
            OutputFormat::Quiet => Ok(report.summary()),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn sentence(&self, result: &RelationshipResult, resolver: &KinshipResolver<'_>) -> String {
        let text = resolver.describe(result);
        if result.is_related() {
            self.colorize(&text, "green")
        } else {
            self.colorize(&text, "yellow")
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn result_json(result: &RelationshipResult, resolver: &KinshipResolver<'_>) -> serde_json::Value {
    let graph = resolver.graph();
    let kinship = &result.kinship;

    serde_json::json!({
        "from": result.from.as_str(),
        "from_name": graph.display_name(&result.from),
        "to": result.to.as_str(),
        "to_name": graph.display_name(&result.to),
        "kind": kinship.kind().as_str(),
        "label": result.label(),
        "degree": kinship.degree(),
        "removal": kinship.removal(),
        "generations": kinship.generations(),
        "direction": kinship.direction().map(|d| d.as_str()),
        "in_law": kinship.is_in_law(),
        "common_ancestor": result.common_ancestor.as_ref().map(PersonId::as_str),
        "path": result.path.iter().map(PersonId::as_str).collect::<Vec<_>>(),
        "sentence": resolver.describe(result),
    })
}

fn format_path(path: &[PersonId]) -> String {
    path.iter().map(PersonId::as_str).collect::<Vec<_>>().join(" → ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinship_domain::{Person, RelationshipEdge};
    use kinship_resolver::FamilyGraph;

    fn family() -> FamilyGraph {
        let people = vec![
            Person::new("gran", "Grandma Rose"),
            Person::new("mum", "Mum"),
            Person::new("aunt", "Aunt Jo"),
            Person::new("me", "Me"),
        ];
        let edges = vec![
            RelationshipEdge::parent_child("gran", "mum"),
            RelationshipEdge::parent_child("gran", "aunt"),
            RelationshipEdge::parent_child("mum", "me"),
        ];
        FamilyGraph::build(&people, &edges)
    }

    #[test]
    fn test_json_relationship() {
        let graph = family();
        let resolver = KinshipResolver::with_defaults(&graph);
        let result = resolver.resolve(&"aunt".into(), &"me".into());

        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_relationships(&[result], &resolver).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["kind"], "aunt_uncle");
        assert_eq!(value["label"], "aunt/uncle");
        assert_eq!(value["common_ancestor"], "gran");
        assert_eq!(value["path"][0], "aunt");
        assert_eq!(value["in_law"], false);
    }

    #[test]
    fn test_table_relationship_sentence() {
        let graph = family();
        let resolver = KinshipResolver::with_defaults(&graph);
        let result = resolver.resolve(&"gran".into(), &"me".into());

        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_relationships(&[result], &resolver).unwrap();
        assert_eq!(output, "Grandma Rose is the grandparent of Me");
    }

    #[test]
    fn test_quiet_sweep() {
        let graph = family();
        let resolver = KinshipResolver::with_defaults(&graph);
        let results = resolver.relatives(&"me".into());

        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_sweep(&"me".into(), &results, &resolver).unwrap();
        assert!(output.contains("gran\tgrandchild"));
        assert!(output.contains("aunt\tniece/nephew"));
    }

    #[test]
    fn test_table_sweep_columns() {
        let graph = family();
        let resolver = KinshipResolver::with_defaults(&graph);
        let results = resolver.relatives(&"me".into());

        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_sweep(&"me".into(), &results, &resolver).unwrap();
        assert!(output.contains("Relationship"));
        assert!(output.contains("Grandma Rose"));
    }

    #[test]
    fn test_empty_ancestors() {
        let graph = family();
        let resolver = KinshipResolver::with_defaults(&graph);

        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_ancestors(&"gran".into(), &[], &resolver).unwrap();
        assert!(output.contains("No ancestors found"));
    }

    #[test]
    fn test_report_json() {
        let graph = family();
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_report(graph.report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["people"], 4);
        assert_eq!(value["edges_indexed"], 3);
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
