use thiserror::Error;

/// Problems found while decoding graph text. Line numbers are 1-based and
/// count only non-blank lines.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
	/// The first adjacency line is not an unsigned node count.
	#[error("line {line}: node count `{token}` is not a non-negative integer")]
	InvalidNodeCount {
		/// Line holding the count.
		line: usize,
		/// Offending token.
		token: String,
	},
	/// A neighbor index is not an unsigned integer.
	#[error("line {line}: neighbor `{token}` is not a non-negative integer")]
	InvalidNeighbor {
		/// Adjacency line.
		line: usize,
		/// Offending token.
		token: String,
	},
	/// The declared node count exceeds the configured limit.
	#[error("line 1: declared {declared} nodes, limit is {limit}")]
	TooManyNodes {
		/// Count found in the text.
		declared: usize,
		/// Configured maximum.
		limit: usize,
	},
	/// An edge-list line has more than two comma-separated fields.
	#[error("line {line}: expected `source,target`, found {fields} fields")]
	ExtraFields {
		/// Edge-list line.
		line: usize,
		/// Number of fields found.
		fields: usize,
	},
}
