use leptos::prelude::*;

use crate::models::{AnalysisItem, ReferenceRecord, SourceKind};
use crate::state::AppState;

/// Right panel: topics surfaced from the conversation and the selected entry.
#[component]
pub fn ReferencePanel() -> impl IntoView {
    let state = expect_context::<AppState>();
    let busy = move || state.is_analyzing.get();

    view! {
        <aside class="reference-panel">
            <div class="panel-header">
                <h3>"Context & References"</h3>
                <button
                    class="analyze-btn"
                    disabled=busy
                    on:click=move |_| state.analyze_conversation()
                >
                    {move || if busy() { "Analyzing…" } else { "Analyze conversation" }}
                </button>
            </div>

            {move || state.reference_error.get().map(|err| view! { <div class="error-banner">{err}</div> })}

            {move || {
                state.analysis.get().map(|analysis| {
                    view! {
                        <TopicGroup title="Concepts" items=analysis.concepts source=SourceKind::Wikipedia />
                        <TopicGroup title="Philosophers" items=analysis.philosophers source=SourceKind::Sep />
                        <TopicGroup title="Schools of thought" items=analysis.schools source=SourceKind::Sep />
                        <TopicGroup title="Fallacies" items=analysis.fallacies source=SourceKind::Wikipedia />
                    }
                })
            }}

            <Show when=move || state.is_looking_up.get()>
                <div class="loading">"Looking up…"</div>
            </Show>

            {move || state.reference.get().map(|record| view! { <ReferenceCard record=record /> })}
        </aside>
    }
}

#[component]
fn TopicGroup(title: &'static str, items: Vec<AnalysisItem>, source: SourceKind) -> impl IntoView {
    let state = expect_context::<AppState>();
    if items.is_empty() {
        return ().into_any();
    }

    view! {
        <div class="topic-group">
            <h4>{title}</h4>
            {items
                .into_iter()
                .map(|item| {
                    let term = item.name.clone();
                    view! {
                        <button
                            class="topic-chip"
                            title=format!("Mentioned {} time(s)", item.mentions)
                            on:click=move |_| state.look_up(term.clone(), source)
                        >
                            {item.name}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

#[component]
fn ReferenceCard(record: ReferenceRecord) -> impl IntoView {
    let list = |heading: &'static str, items: Vec<String>| {
        (!items.is_empty()).then(|| {
            view! {
                <h5>{heading}</h5>
                <ul>{items.into_iter().map(|i| view! { <li>{i}</li> }).collect_view()}</ul>
            }
        })
    };

    view! {
        <article class="reference-card">
            <h4>{record.title}</h4>
            <div class="reference-source">{record.source.label()}</div>
            {record.thumbnail.map(|src| view! { <img class="reference-thumb" src=src /> })}
            <p>{record.definition}</p>
            {list("Key points", record.key_points)}
            {list("Related concepts", record.related_concepts)}
            {list("Related philosophers", record.related_philosophers)}
            {list("Further reading", record.further_reading)}
            {record.url.map(|url| {
                view! { <a href=url target="_blank" rel="noopener">"Read more"</a> }
            })}
        </article>
    }
}
