//! Tunable values for parsing, simulation and drawing.

use force_graph::SimulationParameters;

/// Limits applied while parsing graph text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParserConfig {
	/// Upper bound on the node count declared by an adjacency list.
	pub max_nodes: usize,
}

impl Default for ParserConfig {
	fn default() -> Self {
		Self { max_nodes: 10_000 }
	}
}

/// Force simulation settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
	/// Repulsion between nodes.
	pub force_charge: f32,
	/// Attraction along links.
	pub force_spring: f32,
	/// Clamp on the force applied per step.
	pub force_max: f32,
	/// Velocity scale.
	pub node_speed: f32,
	/// Velocity retained each step.
	pub damping_factor: f32,
	/// Base node mass, multiplied by the node's `val`.
	pub node_mass: f32,
	/// Seconds advanced per animation frame.
	pub tick: f32,
}

impl Default for SimulationConfig {
	fn default() -> Self {
		Self {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
			node_mass: 10.0,
			tick: 0.016,
		}
	}
}

impl SimulationConfig {
	pub(crate) fn parameters(&self) -> SimulationParameters {
		SimulationParameters {
			force_charge: self.force_charge,
			force_spring: self.force_spring,
			force_max: self.force_max,
			node_speed: self.node_speed,
			damping_factor: self.damping_factor,
		}
	}
}

/// Canvas look and hit testing.
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasConfig {
	/// Radius of a node with `val == 1`, in world units.
	pub node_radius: f64,
	/// Pointer distance that still counts as touching a node.
	pub hit_radius: f64,
	/// Fill behind the graph.
	pub background: &'static str,
	/// Link color as `r, g, b`, alpha is computed per frame.
	pub link_rgb: (u8, u8, u8),
	/// Node fill colors, cycled by node position.
	pub palette: &'static [&'static str],
}

const PALETTE: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

impl Default for CanvasConfig {
	fn default() -> Self {
		Self {
			node_radius: 5.0,
			hit_radius: 12.0,
			background: "#1a1a2e",
			link_rgb: (100, 180, 255),
			palette: PALETTE,
		}
	}
}

impl CanvasConfig {
	/// Palette entry for the node at `index`.
	pub fn color_for(&self, index: usize) -> &'static str {
		if self.palette.is_empty() {
			return "#ffffff";
		}
		self.palette[index % self.palette.len()]
	}

	/// Radius for a node of weight `val`; area grows linearly with `val`.
	pub fn radius_for(&self, val: f64) -> f64 {
		self.node_radius * val.max(0.0).sqrt()
	}
}
