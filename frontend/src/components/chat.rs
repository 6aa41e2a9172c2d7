use leptos::ev;
use leptos::prelude::*;

use crate::models::{Message, Sender};
use crate::state::AppState;

/// Main chat area with the transcript and the input box.
#[component]
pub fn ChatArea() -> impl IntoView {
    let state = expect_context::<AppState>();
    let messages = move || state.session.with(|s| s.messages().to_vec());

    view! {
        <main class="chat-area">
            <header class="chat-header">
                <h1>"sophron-bot"</h1>
                <p>"Debate philosophical ideas with an AI trained in logical reasoning"</p>
            </header>

            <div class="messages-container">
                <For each=messages key=|m| m.id.clone() let:msg>
                    <MessageBubble message=msg />
                </For>
            </div>

            <ChatInput />

            <footer class="chat-footer">"Powered by OpenAI gpt-4o-mini-2024-07-18"</footer>
        </main>
    }
}

/// A single transcript entry; the loading placeholder renders as a typing indicator.
#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let (css_class, label) = match message.sender {
        Sender::User => ("message user", "You"),
        Sender::Bot => ("message assistant", "sophron-bot"),
    };

    view! {
        <div class=css_class>
            <div class="role-label">{label}</div>
            {if message.is_loading {
                view! { <div class="typing-indicator"><span></span><span></span><span></span></div> }
                    .into_any()
            } else {
                view! { <div class="message-text">{message.text}</div> }.into_any()
            }}
        </div>
    }
}

/// Chat input form with textarea and send button.
#[component]
fn ChatInput() -> impl IntoView {
    let state = expect_context::<AppState>();
    let (input, set_input) = signal(String::new());

    let is_sending = move || state.is_busy();

    let send = move || {
        let text = input.get().trim().to_string();
        if text.is_empty() || is_sending() {
            return;
        }
        set_input.set(String::new());
        state.send_message(text);
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send();
        }
    };

    view! {
        <div class="input-area">
            <div class="input-row">
                <textarea
                    rows="1"
                    placeholder="State a claim… (Enter to send, Shift+Enter for newline)"
                    prop:value=input
                    on:input=move |ev| {
                        set_input.set(event_target_value(&ev));
                    }
                    on:keydown=on_keydown
                    disabled=is_sending
                />
                <button
                    class="send-btn"
                    on:click=move |_| send()
                    disabled=move || is_sending() || input.get().trim().is_empty()
                >
                    {move || if is_sending() { "Thinking…" } else { "Send" }}
                </button>
            </div>
        </div>
    }
}
