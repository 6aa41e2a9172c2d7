use leptos::prelude::*;

use crate::models::{ConversationMode, DebateStyle};
use crate::orchestrator::QUICK_TOPICS;
use crate::state::AppState;

/// Left panel: quick topics, debate style and mode toggles.
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = expect_context::<AppState>();
    let mode = move || state.session.with(|s| s.mode());
    let busy = move || state.is_busy();

    view! {
        <aside class="sidebar">
            <div class="sidebar-header">
                <h2>"Debate Settings"</h2>
                <p>"Configure your philosophical debate experience"</p>
            </div>

            <section class="sidebar-section">
                <h3>"Quick Topics"</h3>
                {QUICK_TOPICS
                    .into_iter()
                    .map(|topic| {
                        view! {
                            <button
                                class="topic-btn"
                                disabled=busy
                                on:click=move |_| state.select_topic(topic)
                            >
                                {topic}
                            </button>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="sidebar-section">
                <h3>"Debate Style"</h3>
                <StyleOption style=DebateStyle::None />
                {DebateStyle::ALL
                    .into_iter()
                    .map(|style| view! { <StyleOption style=style /> })
                    .collect_view()}
            </section>

            <section class="sidebar-section">
                <h3>"Modes"</h3>
                <Toggle
                    label="Debate Mode"
                    description="The bot argues against your position"
                    checked=Signal::derive(move || mode().is_debate_mode)
                    on_change=move |on| state.session.update(|s| s.set_debate_mode(on))
                />
                <Toggle
                    label="Fallacy Detection"
                    description="Flag logical fallacies in your messages"
                    checked=Signal::derive(move || mode().fallacy_detection_enabled)
                    on_change=move |on| state.session.update(|s| s.set_fallacy_detection(on))
                />
                <Toggle
                    label="Steel-Manning"
                    description="Strengthen your argument before the debate"
                    checked=Signal::derive(move || mode().steel_manning_enabled)
                    on_change=move |on| state.session.update(|s| s.set_steel_manning(on))
                />
                {move || {
                    let ConversationMode { is_in_strengthening_phase, .. } = mode();
                    is_in_strengthening_phase
                        .then(|| view! { <div class="phase-badge">"Strengthening your argument…"</div> })
                }}
            </section>
        </aside>
    }
}

#[component]
fn StyleOption(style: DebateStyle) -> impl IntoView {
    let state = expect_context::<AppState>();
    let selected = move || state.session.with(|s| s.mode().debate_style == style);

    view! {
        <label class="style-option" class:active=selected>
            <input
                type="radio"
                name="debate-style"
                prop:checked=selected
                on:change=move |_| state.session.update(|s| s.select_style(style))
            />
            <div>
                <div class="style-name">{style.label()}</div>
                <div class="style-description">{style.description()}</div>
            </div>
        </label>
    }
}

#[component]
fn Toggle(
    label: &'static str,
    description: &'static str,
    #[prop(into)] checked: Signal<bool>,
    on_change: impl Fn(bool) + 'static,
) -> impl IntoView {
    view! {
        <label class="toggle">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change(event_target_checked(&ev))
            />
            <div>
                <div class="toggle-label">{label}</div>
                <div class="toggle-description">{description}</div>
            </div>
        </label>
    }
}
