//! Support chat panel displaying the transcript and sending new messages.

use leptos::prelude::*;

use crate::state::chat::ChatState;

/// Chat panel showing the support transcript and an input for new messages.
///
/// The message list follows its bottom edge: a forced scroll when the panel
/// mounts, then an unforced follow whenever a message is appended, so a
/// reader scrolled up into older messages is never yanked back down.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let panel_ref = NodeRef::<leptos::html::Div>::new();
    let followed_once = RwSignal::new(false);

    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "csr")]
        {
            if followed_once.get_untracked() {
                if let Some(el) = panel_ref.get() {
                    crate::util::scroll::scroll_to_bottom(&el, false);
                }
            } else {
                followed_once.set(true);
                // Let layout settle before the initial forced follow.
                gloo_timers::callback::Timeout::new(0, move || {
                    if let Some(el) = panel_ref.get_untracked() {
                        crate::util::scroll::scroll_to_bottom(&el, true);
                    }
                })
                .forget();
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = followed_once;
        }
    });

    let do_send = move || {
        let text = input.get();
        if text.trim().is_empty() {
            return;
        }

        chat.update(|c| c.push_visitor(text));
        input.set(String::new());
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty();

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages" node_ref=panel_ref>
                {move || {
                    let messages = chat.get().messages;
                    if messages.is_empty() {
                        return view! {
                            <div class="chat-panel__empty">"No messages yet"</div>
                        }
                            .into_any();
                    }

                    messages
                        .iter()
                        .map(|msg| {
                            let bubble_class = if msg.from_support {
                                "chat-panel__message chat-panel__message--support"
                            } else {
                                "chat-panel__message chat-panel__message--visitor"
                            };
                            let author = msg.author.clone();
                            let body = msg.body.clone();
                            view! {
                                <div class=bubble_class>
                                    <span class="chat-panel__author">{author}</span>
                                    <span class="chat-panel__text">{body}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Write a message..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat-panel__send" on:click=on_click disabled=move || !can_send()>
                    "Send"
                </button>
            </div>
        </div>
    }
}
