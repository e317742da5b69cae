use leptos::prelude::*;

use crate::components::force_graph::{ForceGraphCanvas, RenderMode};
use crate::components::graph_input::GraphInput;
use crate::parser::parse;

const TARGET_SAMPLE: &str = "v0,
v0,v5
v0,v6
v0,v7
v0,v8
v1,
v1,v3
v1,v5
v1,v7
v2,
v2,v7
v2,v9
v2,v11
v3,
v3,v4
v3,v5
v3,v6
v3,v7
v4,
v4,v7
v4,v8
v4,v11
v5,
v6,
v6,v9
v6,v11
v7,
v7,v10
v8,
v9,
v9,v11
v10,
v11,";

const PATTERN_SAMPLE: &str = "v0,
v0,v5
v0,v6
v0,v7
v0,v8
v1,";

/// Which of the two panels is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum ActiveGraph {
	#[default]
	Target,
	Pattern,
}

impl ActiveGraph {
	fn other(self) -> Self {
		match self {
			Self::Target => Self::Pattern,
			Self::Pattern => Self::Target,
		}
	}

	fn name(self) -> &'static str {
		match self {
			Self::Target => "Target",
			Self::Pattern => "Pattern",
		}
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let target_text = RwSignal::new(TARGET_SAMPLE.to_string());
	let pattern_text = RwSignal::new(PATTERN_SAMPLE.to_string());
	let active = RwSignal::new(ActiveGraph::default());
	let mode = RwSignal::new(RenderMode::default());

	let target_graph = Memo::new(move |_| parse(&target_text.get()));
	let pattern_graph = Memo::new(move |_| parse(&pattern_text.get()));
	let graph_data = Signal::derive(move || match active.get() {
		ActiveGraph::Target => target_graph.get(),
		ActiveGraph::Pattern => pattern_graph.get(),
	});

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-graph">
				<ForceGraphCanvas data=graph_data mode=mode fullscreen=true />
				<div class="graph-overlay">
					<div class="panel">
						<GraphInput label="Target Graph Input" text=target_text />
					</div>

					<div class="panel controls">
						<button on:click=move |_| active.update(|a| *a = a.other())>
							{move || format!("Switch to {} Graph", active.get().other().name())}
						</button>
						<button on:click=move |_| mode.update(|m| *m = m.toggled())>
							{move || if mode.get().shows_labels() { "Hide Labels" } else { "Show Labels" }}
						</button>
						<p class="subtitle">"Drag a node to pin it. Scroll to zoom. Drag background to pan."</p>
					</div>

					<div class="panel">
						<GraphInput label="Pattern Graph Input" text=pattern_text />
					</div>
				</div>
			</div>
		</ErrorBoundary>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::GraphLink;

	#[test]
	fn switching_alternates_panels() {
		let active = ActiveGraph::default();
		assert_eq!(active, ActiveGraph::Target);
		assert_eq!(active.other(), ActiveGraph::Pattern);
		assert_eq!(active.other().other(), active);
	}

	#[test]
	fn samples_parse_as_edge_lists() {
		let target = parse(TARGET_SAMPLE);
		assert_eq!(target.nodes.len(), 12);
		assert_eq!(target.links.len(), 21);
		assert_eq!(target.dangling_links().count(), 0);

		let pattern = parse(PATTERN_SAMPLE);
		let ids: Vec<_> = pattern.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, ["v0", "v5", "v6", "v7", "v8", "v1"]);
		assert_eq!(pattern.links[0], GraphLink::new("v0", "v5"));
	}
}
