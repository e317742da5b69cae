//! Graph text parsing.
//!
//! Two encodings are accepted and told apart without any header:
//!
//! - **Edge list**: `source,target` per line, `source,` declares a lone node.
//! - **Adjacency list**: a node count line followed by one line per node,
//!   `<neighbor count> <neighbor index>...`.
//!
//! Text with a comma on any non-blank line is an edge list, anything else is
//! an adjacency list. Mixed input is therefore read as an edge list.

mod adjacency;
mod edge_list;
mod error;

use log::{debug, warn};

pub use error::ParseError;

use crate::config::ParserConfig;
use crate::graph::GraphData;

/// Encoding detected for a piece of graph text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphFormat {
	/// `source,target` lines.
	EdgeList,
	/// Node count followed by neighbor index lines.
	AdjacencyList,
}

impl GraphFormat {
	/// Short human-readable name.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::EdgeList => "edge list",
			Self::AdjacencyList => "adjacency list",
		}
	}
}

#[derive(Debug, Default)]
struct Decoded {
	graph: GraphData,
	issues: Vec<ParseError>,
}

fn significant_lines(text: &str) -> Vec<&str> {
	text.lines().filter(|line| !line.trim().is_empty()).collect()
}

fn detect_lines(lines: &[&str]) -> GraphFormat {
	if lines.iter().any(|line| line.contains(',')) {
		GraphFormat::EdgeList
	} else {
		GraphFormat::AdjacencyList
	}
}

/// Decide which encoding `text` uses.
pub fn detect_format(text: &str) -> GraphFormat {
	detect_lines(&significant_lines(text))
}

/// Parser carrying its limits. [`parse`] and [`try_parse`] use the defaults.
#[derive(Clone, Copy, Debug, Default)]
pub struct GraphTextParser {
	config: ParserConfig,
}

impl GraphTextParser {
	/// Parser with the given limits.
	pub fn new(config: ParserConfig) -> Self {
		Self { config }
	}

	fn decode(&self, text: &str) -> (GraphFormat, Decoded) {
		let lines = significant_lines(text);
		let format = detect_lines(&lines);
		let decoded = match format {
			GraphFormat::EdgeList => edge_list::decode(&lines),
			GraphFormat::AdjacencyList => adjacency::decode(&lines, &self.config),
		};
		(format, decoded)
	}

	/// Best-effort parse. Problems are logged and the affected tokens dropped,
	/// so every input yields a graph.
	pub fn parse(&self, text: &str) -> GraphData {
		let (format, Decoded { graph, issues }) = self.decode(text);
		for issue in &issues {
			warn!("{}: {issue}", format.as_str());
		}
		debug!(
			"parsed {} with {} nodes, {} links",
			format.as_str(),
			graph.nodes.len(),
			graph.links.len()
		);
		graph
	}

	/// Strict parse, failing on the first problem found.
	pub fn try_parse(&self, text: &str) -> Result<GraphData, ParseError> {
		let (_, Decoded { graph, issues }) = self.decode(text);
		match issues.into_iter().next() {
			Some(issue) => Err(issue),
			None => Ok(graph),
		}
	}
}

/// Best-effort parse with default limits.
pub fn parse(text: &str) -> GraphData {
	GraphTextParser::default().parse(text)
}

/// Strict parse with default limits.
pub fn try_parse(text: &str) -> Result<GraphData, ParseError> {
	GraphTextParser::default().try_parse(text)
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use proptest::prelude::*;

	use super::*;
	use crate::graph::{GraphLink, GraphNode};

	#[test]
	fn empty_input_is_an_empty_graph() {
		assert_eq!(parse(""), GraphData::default());
		assert_eq!(parse("\n  \n\t\n"), GraphData::default());
		assert_eq!(try_parse(""), Ok(GraphData::default()));
	}

	#[test]
	fn edge_list_scenario() {
		let graph = parse("v0,\nv0,v1\nv1,");
		assert_eq!(graph.nodes, [GraphNode::new("v0"), GraphNode::new("v1")]);
		assert_eq!(graph.links, [GraphLink::new("v0", "v1")]);
	}

	#[test]
	fn adjacency_scenario() {
		let graph = parse("3\n1 1\n0\n0");
		let ids: Vec<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, ["v0", "v1", "v2"]);
		assert_eq!(graph.links, [GraphLink::new("v0", "v1")]);
	}

	#[test]
	fn any_comma_selects_edge_list() {
		assert_eq!(detect_format("3\n1 1\na,b"), GraphFormat::EdgeList);
		assert_eq!(detect_format("a,"), GraphFormat::EdgeList);
		let graph = parse("2\n1 1\nx,y");
		let ids: Vec<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, ["2", "1 1", "x", "y"]);
	}

	#[test]
	fn no_comma_selects_adjacency_list_even_if_not_numeric() {
		assert_eq!(detect_format("hello\nworld"), GraphFormat::AdjacencyList);
		assert_eq!(detect_format(""), GraphFormat::AdjacencyList);
		assert!(parse("hello\nworld").nodes.is_empty());
	}

	#[test]
	fn blank_lines_are_ignored() {
		assert_eq!(parse("\n3\n\n1 1\n  \n0\n0\n"), parse("3\n1 1\n0\n0"));
		assert_eq!(parse("a,b\r\n\r\nb,c\r\n"), parse("a,b\nb,c"));
	}

	#[test]
	fn strict_mode_reports_bad_count() {
		assert_eq!(
			try_parse("three\n1 1"),
			Err(ParseError::InvalidNodeCount {
				line: 1,
				token: "three".into()
			})
		);
	}

	#[test]
	fn lenient_mode_keeps_links_after_bad_count() {
		let graph = parse("three\n1 1");
		assert!(graph.nodes.is_empty());
		assert_eq!(graph.links, [GraphLink::new("v0", "v1")]);
	}

	#[test]
	fn configured_limit_applies() {
		let parser = GraphTextParser::new(ParserConfig { max_nodes: 2 });
		assert_eq!(parser.parse("5").nodes.len(), 2);
		assert!(matches!(
			parser.try_parse("5"),
			Err(ParseError::TooManyNodes { declared: 5, limit: 2 })
		));
	}

	fn edge_line() -> impl Strategy<Value = String> {
		("[a-d]{0,2}", "[a-d]{0,2}").prop_map(|(s, t)| format!("{s},{t}"))
	}

	proptest! {
		#![proptest_config(ProptestConfig::with_cases(64))]

		#[test]
		fn prop_parse_is_deterministic(input in "[0-9a-c ,\n]{0,64}") {
			prop_assert_eq!(parse(&input), parse(&input));
			prop_assert_eq!(try_parse(&input), try_parse(&input));
		}

		#[test]
		fn prop_edge_list_nodes_unique_in_first_seen_order(
			lines in prop::collection::vec(edge_line(), 1..12)
		) {
			let text = lines.join("\n");
			let graph = parse(&text);

			let mut seen = HashSet::new();
			let mut expected = Vec::new();
			for line in &lines {
				for token in line.split(',').take(2) {
					if !token.is_empty() && seen.insert(token.to_owned()) {
						expected.push(token.to_owned());
					}
				}
			}
			let ids: Vec<_> = graph.nodes.iter().map(|n| n.id.clone()).collect();
			prop_assert_eq!(ids, expected);
		}

		#[test]
		fn prop_comma_free_text_is_adjacency(input in "[0-9a-z \n]{0,64}") {
			prop_assert_eq!(detect_format(&input), GraphFormat::AdjacencyList);
		}

		#[test]
		fn prop_count_token_is_discarded(count in 0usize..1000, n in 1usize..5) {
			let text = format!("{n}\n{count} 0");
			let graph = parse(&text);
			prop_assert_eq!(graph.nodes.len(), n);
			prop_assert_eq!(graph.links, vec![GraphLink::new("v0", "v0")]);
		}
	}
}
