use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData};
use log::debug;

use crate::config::{CanvasConfig, SimulationConfig};
use crate::graph::GraphData;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub name: String,
	pub color: String,
	pub radius: f64,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
	pub highlight_t: f64,
	pub prev_node: Option<DefaultNodeIdx>,
	pub prev_neighbors: HashSet<DefaultNodeIdx>,
	delay_t: f64,
}

pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	pub flow_time: f64,
	pub canvas: CanvasConfig,
	simulation: SimulationConfig,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx)>,
	dangling: usize,
}

impl ForceGraphState {
	pub fn new(
		data: &GraphData,
		width: f64,
		height: f64,
		simulation: SimulationConfig,
		canvas: CanvasConfig,
	) -> Self {
		let mut state = Self {
			graph: ForceGraph::new(simulation.parameters()),
			edges: Vec::new(),
			dangling: 0,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			animation_running: true,
			flow_time: 0.0,
			canvas,
			simulation,
		};
		state.load(data);
		state
	}

	/// Replace the simulated graph with a fresh snapshot. Pins, hover and
	/// drag state from the previous graph are dropped; the view is kept.
	pub fn reload(&mut self, data: &GraphData) {
		self.graph = ForceGraph::new(self.simulation.parameters());
		self.edges.clear();
		self.dangling = 0;
		self.drag = DragState::default();
		self.hover = HoverState::default();
		self.load(data);
	}

	fn load(&mut self, data: &GraphData) {
		let mut id_to_idx = HashMap::new();

		// Positions are in world space, centred on the origin.
		for (i, node) in data.nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
			let idx = self.graph.add_node(NodeData {
				x: (100.0 * angle.cos()) as f32,
				y: (100.0 * angle.sin()) as f32,
				mass: self.simulation.node_mass * node.val as f32,
				is_anchor: false,
				user_data: NodeInfo {
					name: node.name.clone(),
					color: self.canvas.color_for(i).into(),
					radius: self.canvas.radius_for(node.val),
				},
			});
			id_to_idx.insert(node.id.as_str(), idx);
		}

		for link in &data.links {
			match (
				id_to_idx.get(link.source.as_str()),
				id_to_idx.get(link.target.as_str()),
			) {
				(Some(&src), Some(&tgt)) => {
					self.graph.add_edge(src, tgt, EdgeData::default());
					self.edges.push((src, tgt));
				}
				_ => self.dangling += 1,
			}
		}

		if self.dangling > 0 {
			debug!("skipped {} links with undeclared endpoints", self.dangling);
		}
	}

	pub fn node_count(&self) -> usize {
		let mut count = 0;
		self.graph.visit_nodes(|_| count += 1);
		count
	}

	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// Links left out because an endpoint is not a declared node.
	pub fn dangling_links(&self) -> usize {
		self.dangling
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			// Hit radius is in world space, scales with zoom like nodes
			let hit = self.canvas.hit_radius.max(node.data.user_data.radius);
			if (dx * dx + dy * dy).sqrt() < hit {
				found = Some(node.index());
			}
		});
		found
	}

	/// Start dragging the node under the pointer, or panning if there is none.
	/// Returns true when a node was grabbed.
	pub fn press(&mut self, x: f64, y: f64) -> bool {
		let Some(idx) = self.node_at_position(x, y) else {
			self.pan = PanState {
				active: true,
				start_x: x,
				start_y: y,
				transform_start_x: self.transform.x,
				transform_start_y: self.transform.y,
			};
			return false;
		};
		let mut start = (0.0, 0.0);
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				start = (node.x(), node.y());
			}
		});
		self.drag = DragState {
			active: true,
			node_idx: Some(idx),
			start_x: x,
			start_y: y,
			node_start_x: start.0,
			node_start_y: start.1,
		};
		true
	}

	pub fn pointer_moved(&mut self, x: f64, y: f64) {
		if !self.drag.active {
			let hovered = self.node_at_position(x, y);
			self.set_hover(hovered);
		}

		if self.drag.active {
			let Some(idx) = self.drag.node_idx else {
				return;
			};
			let (dx, dy) = (
				(x - self.drag.start_x) / self.transform.k,
				(y - self.drag.start_y) / self.transform.k,
			);
			let (nx, ny) = (
				self.drag.node_start_x + dx as f32,
				self.drag.node_start_y + dy as f32,
			);
			// Held in place while dragging so the simulation does not fight it.
			self.graph.visit_nodes_mut(|node| {
				if node.index() == idx {
					node.data.x = nx;
					node.data.y = ny;
					node.data.is_anchor = true;
				}
			});
		} else if self.pan.active {
			self.transform.x = self.pan.transform_start_x + (x - self.pan.start_x);
			self.transform.y = self.pan.transform_start_y + (y - self.pan.start_y);
		}
	}

	/// Finish a drag, pinning the node where it was dropped.
	pub fn release(&mut self) {
		if self.drag.active {
			if let Some(idx) = self.drag.node_idx {
				self.pin(idx);
			}
		}
		self.drag = DragState::default();
		self.pan.active = false;
	}

	pub fn leave(&mut self) {
		self.release();
		self.set_hover(None);
	}

	pub fn pin(&mut self, idx: DefaultNodeIdx) {
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.is_anchor = true;
			}
		});
	}

	pub fn is_pinned(&self, idx: DefaultNodeIdx) -> bool {
		let mut pinned = false;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				pinned = node.data.is_anchor;
			}
		});
		pinned
	}

	pub fn zoom(&mut self, x: f64, y: f64, zoom_in: bool) {
		let factor = if zoom_in { 1.1 } else { 0.9 };
		let new_k = (self.transform.k * factor).clamp(0.1, 10.0);
		let ratio = new_k / self.transform.k;
		self.transform.x = x - (x - self.transform.x) * ratio;
		self.transform.y = y - (y - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// Save previous state for fade-out
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			for &(src, tgt) in &self.edges {
				if src == idx {
					self.hover.neighbors.insert(tgt);
				} else if tgt == idx {
					self.hover.neighbors.insert(src);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	pub fn step(&mut self) {
		self.tick(self.simulation.tick);
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.flow_time += dt as f64;

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt as f64).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::parser::parse;

	const W: f64 = 800.0;
	const H: f64 = 600.0;

	fn state(text: &str) -> ForceGraphState {
		ForceGraphState::new(
			&parse(text),
			W,
			H,
			SimulationConfig::default(),
			CanvasConfig::default(),
		)
	}

	fn locate(s: &ForceGraphState, name: &str) -> (DefaultNodeIdx, f64, f64) {
		let mut found = None;
		s.graph.visit_nodes(|node| {
			if node.data.user_data.name == name {
				found = Some((
					node.index(),
					node.x() as f64 * s.transform.k + s.transform.x,
					node.y() as f64 * s.transform.k + s.transform.y,
				));
			}
		});
		found.expect("node present")
	}

	#[test]
	fn dangling_links_are_skipped() {
		let s = state("3\n2 1 7\n1 0");
		assert_eq!(s.node_count(), 3);
		assert_eq!(s.edge_count(), 2);
		assert_eq!(s.dangling_links(), 1);
	}

	#[test]
	fn reload_replaces_graph_and_drops_pins() {
		let mut s = state("a,b");
		let (idx, x, y) = locate(&s, "a");
		assert!(s.press(x, y));
		s.release();
		assert!(s.is_pinned(idx));

		s.reload(&parse("x,y\ny,z"));
		assert_eq!(s.node_count(), 3);
		assert_eq!(s.edge_count(), 2);
		let (idx, _, _) = locate(&s, "x");
		assert!(!s.is_pinned(idx));
	}

	#[test]
	fn drag_moves_then_pins_node() {
		let mut s = state("a,b\nb,c");
		let (idx, x, y) = locate(&s, "b");
		assert!(s.press(x, y));
		s.pointer_moved(x + 40.0, y - 10.0);
		let (_, nx, ny) = locate(&s, "b");
		assert!((nx - (x + 40.0)).abs() < 1e-3);
		assert!((ny - (y - 10.0)).abs() < 1e-3);
		s.release();
		assert!(s.is_pinned(idx));
		assert!(!s.drag.active);
	}

	#[test]
	fn press_on_background_pans() {
		let mut s = state("a,");
		assert!(!s.press(5.0, 5.0));
		s.pointer_moved(25.0, 15.0);
		assert_eq!(s.transform.x, W / 2.0 + 20.0);
		assert_eq!(s.transform.y, H / 2.0 + 10.0);
		s.release();
		assert!(!s.pan.active);
	}

	#[test]
	fn hover_collects_neighbors() {
		let mut s = state("a,b\nb,c\nd,");
		let (a, _, _) = locate(&s, "a");
		let (b, _, _) = locate(&s, "b");
		let (c, _, _) = locate(&s, "c");
		let (d, _, _) = locate(&s, "d");
		s.set_hover(Some(b));
		assert!(s.is_highlighted(a) && s.is_highlighted(c));
		assert!(!s.is_highlighted(d));
	}

	#[test]
	fn zoom_is_clamped() {
		let mut s = state("");
		for _ in 0..100 {
			s.zoom(0.0, 0.0, true);
		}
		assert!((s.transform.k - 10.0).abs() < 1e-9);
	}
}
