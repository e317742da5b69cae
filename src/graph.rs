//! Normalized node/link graph shared by the parser and the canvas.

/// A graph node. `name` is the display label and always equals `id`.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	/// Unique identifier, referenced by [`GraphLink`] endpoints.
	pub id: String,
	/// Display label.
	pub name: String,
	/// Visual weight.
	pub val: f64,
}

impl GraphNode {
	/// Node with `name` mirroring `id` and unit weight.
	pub fn new(id: impl Into<String>) -> Self {
		let id = id.into();
		Self {
			name: id.clone(),
			id,
			val: 1.0,
		}
	}
}

/// A directed link between two node ids. Endpoints are not checked against
/// the node list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphLink {
	/// Source node id.
	pub source: String,
	/// Target node id.
	pub target: String,
}

impl GraphLink {
	/// Link from `source` to `target`.
	pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
		}
	}
}

/// Nodes and links in the order they were produced by the parser.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	/// Nodes, without duplicate ids.
	pub nodes: Vec<GraphNode>,
	/// Links, in input line order.
	pub links: Vec<GraphLink>,
}

impl GraphData {
	/// True when there are neither nodes nor links.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty() && self.links.is_empty()
	}

	/// Links with at least one endpoint missing from `nodes`.
	pub fn dangling_links(&self) -> impl Iterator<Item = &GraphLink> {
		self.links.iter().filter(|link| {
			!self.nodes.iter().any(|n| n.id == link.source)
				|| !self.nodes.iter().any(|n| n.id == link.target)
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn node_name_mirrors_id() {
		let node = GraphNode::new("v3");
		assert_eq!(node.id, "v3");
		assert_eq!(node.name, "v3");
		assert_eq!(node.val, 1.0);
	}

	#[test]
	fn dangling_links_reports_missing_endpoints() {
		let data = GraphData {
			nodes: vec![GraphNode::new("a"), GraphNode::new("b")],
			links: vec![GraphLink::new("a", "b"), GraphLink::new("b", "c")],
		};
		let dangling: Vec<_> = data.dangling_links().collect();
		assert_eq!(dangling, vec![&GraphLink::new("b", "c")]);
	}

	#[test]
	fn default_graph_is_empty() {
		assert!(GraphData::default().is_empty());
	}
}
