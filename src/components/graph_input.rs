use leptos::prelude::*;

/// Labelled multi-line text box bound to `text`; every keystroke writes back.
#[component]
pub fn GraphInput(
	#[prop(into)] label: String,
	text: RwSignal<String>,
	#[prop(default = 20)] rows: u32,
) -> impl IntoView {
	view! {
		<label class="graph-input">
			<span class="graph-input-label">{label}</span>
			<textarea
				rows=rows
				spellcheck="false"
				prop:value=move || text.get()
				on:input=move |ev| text.set(event_target_value(&ev))
			/>
		</label>
	}
}
