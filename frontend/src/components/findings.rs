use leptos::prelude::*;

use crate::models::{FallacyFinding, ImprovementFinding};
use crate::state::AppState;

/// Fallacies and argument improvements gathered during the session.
#[component]
pub fn FindingsPanel() -> impl IntoView {
    let state = expect_context::<AppState>();
    let fallacies = move || state.session.with(|s| s.fallacies().to_vec());
    let improvements = move || state.session.with(|s| s.improvements().to_vec());
    let is_empty = move || state.session.with(|s| s.fallacies().is_empty() && s.improvements().is_empty());

    view! {
        <section class="findings-panel">
            <div class="panel-header">
                <h3>"Argument Analysis"</h3>
                <button
                    class="clear-btn"
                    disabled=is_empty
                    on:click=move |_| state.session.update(|s| s.clear_findings())
                >
                    "Clear all"
                </button>
            </div>

            <Show when=is_empty>
                <p class="empty-state">"Enable fallacy detection or steel-manning to see feedback here."</p>
            </Show>

            <For each=fallacies key=|f| f.id.clone() let:finding>
                <FallacyCard finding=finding />
            </For>
            <For each=improvements key=|i| i.id.clone() let:finding>
                <ImprovementCard finding=finding />
            </For>
        </section>
    }
}

fn detected_time(millis: f64) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(millis));
    String::from(date.to_locale_time_string("en-US"))
}

#[component]
fn FallacyCard(finding: FallacyFinding) -> impl IntoView {
    view! {
        <div class="finding fallacy">
            <div class="finding-title">{finding.name}</div>
            <div class="finding-time">{detected_time(finding.detected_at)}</div>
            <p>{finding.explanation}</p>
            <p class="finding-suggestion">{finding.suggestion}</p>
        </div>
    }
}

#[component]
fn ImprovementCard(finding: ImprovementFinding) -> impl IntoView {
    view! {
        <div class="finding improvement">
            <div class="finding-title">{finding.category}</div>
            <div class="finding-time">{detected_time(finding.detected_at)}</div>
            <p class="finding-suggestion">{finding.suggestion}</p>
            <p>{finding.reason}</p>
            {finding.example.map(|example| view! { <blockquote>{example}</blockquote> })}
        </div>
    }
}
