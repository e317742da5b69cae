/// How nodes are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
	/// Circles only.
	Plain,
	/// Circles with the node name beside them.
	#[default]
	Labeled,
}

impl RenderMode {
	pub fn toggled(self) -> Self {
		match self {
			Self::Plain => Self::Labeled,
			Self::Labeled => Self::Plain,
		}
	}

	pub fn shows_labels(self) -> bool {
		self == Self::Labeled
	}
}
