//! Adjacency-count lists. The first line holds the node count `N`, line `i`
//! after it lists the neighbors of `v(i-1)` behind a neighbor-count token.

use super::{Decoded, ParseError};
use crate::config::ParserConfig;
use crate::graph::{GraphData, GraphLink, GraphNode};

fn vertex(index: usize) -> String {
	format!("v{index}")
}

pub(super) fn decode(lines: &[&str], config: &ParserConfig) -> Decoded {
	let mut issues = Vec::new();
	let Some((count_line, adjacency)) = lines.split_first() else {
		return Decoded::default();
	};

	let count_token = count_line.split_whitespace().next().unwrap_or_default();
	let node_count = match count_token.parse::<usize>() {
		Ok(n) if n > config.max_nodes => {
			issues.push(ParseError::TooManyNodes {
				declared: n,
				limit: config.max_nodes,
			});
			config.max_nodes
		}
		Ok(n) => n,
		Err(_) => {
			issues.push(ParseError::InvalidNodeCount {
				line: 1,
				token: count_token.to_owned(),
			});
			0
		}
	};

	let nodes = (0..node_count).map(|i| GraphNode::new(vertex(i))).collect();

	let mut links = Vec::new();
	for (i, line) in adjacency.iter().enumerate() {
		let source = vertex(i);
		// The leading token is the neighbor count; it is not checked.
		for token in line.split_whitespace().skip(1) {
			match token.parse::<usize>() {
				Ok(k) => links.push(GraphLink::new(source.clone(), vertex(k))),
				Err(_) => issues.push(ParseError::InvalidNeighbor {
					line: i + 2,
					token: token.to_owned(),
				}),
			}
		}
	}

	Decoded {
		graph: GraphData { nodes, links },
		issues,
	}
}
