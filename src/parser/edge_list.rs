//! Comma edge lists: one `source,target` pair per line, an empty target
//! declares an isolated node.

use indexmap::IndexSet;

use super::{Decoded, ParseError};
use crate::graph::{GraphData, GraphLink, GraphNode};

pub(super) fn decode(lines: &[&str]) -> Decoded {
	let mut ids: IndexSet<&str> = IndexSet::new();
	let mut links = Vec::new();
	let mut issues = Vec::new();

	for (i, line) in lines.iter().enumerate() {
		let mut fields = line.split(',');
		let source = fields.next().unwrap_or_default();
		let target = fields.next().unwrap_or_default();
		let extra = fields.count();
		if extra > 0 {
			issues.push(ParseError::ExtraFields {
				line: i + 1,
				fields: extra + 2,
			});
		}

		if !source.is_empty() {
			ids.insert(source);
		}
		if !target.is_empty() {
			ids.insert(target);
		}
		if !source.is_empty() && !target.is_empty() {
			links.push(GraphLink::new(source, target));
		}
	}

	Decoded {
		graph: GraphData {
			nodes: ids.into_iter().map(GraphNode::new).collect(),
			links,
		},
		issues,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ids(data: &GraphData) -> Vec<&str> {
		data.nodes.iter().map(|n| n.id.as_str()).collect()
	}

	#[test]
	fn empty_target_declares_node_only() {
		let decoded = decode(&["a,"]);
		assert_eq!(ids(&decoded.graph), ["a"]);
		assert!(decoded.graph.links.is_empty());
		assert!(decoded.issues.is_empty());
	}

	#[test]
	fn pair_declares_both_nodes_and_a_link() {
		let decoded = decode(&["a,b"]);
		assert_eq!(ids(&decoded.graph), ["a", "b"]);
		assert_eq!(decoded.graph.links, [GraphLink::new("a", "b")]);
	}

	#[test]
	fn nodes_keep_first_appearance_order() {
		let decoded = decode(&["c,a", "b,c", "a,d", "d,"]);
		assert_eq!(ids(&decoded.graph), ["c", "a", "b", "d"]);
		assert_eq!(decoded.graph.links.len(), 3);
	}

	#[test]
	fn empty_source_declares_target_without_link() {
		let decoded = decode(&[",b"]);
		assert_eq!(ids(&decoded.graph), ["b"]);
		assert!(decoded.graph.links.is_empty());
	}

	#[test]
	fn line_without_comma_is_a_node_declaration() {
		let decoded = decode(&["a", "a,b"]);
		assert_eq!(ids(&decoded.graph), ["a", "b"]);
		assert_eq!(decoded.graph.links, [GraphLink::new("a", "b")]);
	}

	#[test]
	fn tokens_are_not_trimmed() {
		let decoded = decode(&["a, b"]);
		assert_eq!(ids(&decoded.graph), ["a", " b"]);
		assert_eq!(decoded.graph.links, [GraphLink::new("a", " b")]);
	}

	#[test]
	fn extra_fields_are_ignored_and_reported() {
		let decoded = decode(&["a,b,c"]);
		assert_eq!(ids(&decoded.graph), ["a", "b"]);
		assert_eq!(
			decoded.issues,
			[ParseError::ExtraFields { line: 1, fields: 3 }]
		);
	}
}
