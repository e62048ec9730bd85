//! Search Bar Component
//!
//! Free-text title search. Typing is debounced; Enter applies immediately,
//! Escape clears.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_catalog_context;

#[component]
pub fn SearchBar(debounce_ms: u32) -> impl IntoView {
    let ctx = use_catalog_context();
    let (input_value, set_input_value) = signal(ctx.query.get_untracked());
    // Bumped on every keystroke; a pending apply only runs if it is still the latest
    let (generation, set_generation) = signal(0u32);

    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        set_input_value.set(value.clone());

        let current = generation.get_untracked().wrapping_add(1);
        set_generation.set(current);
        spawn_local(async move {
            TimeoutFuture::new(debounce_ms).await;
            if generation.get_untracked() == current {
                ctx.set_query(&value);
            }
        });
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            set_generation.update(|g| *g = g.wrapping_add(1));
            ctx.set_query(&input_value.get_untracked());
        }
        "Escape" => {
            set_generation.update(|g| *g = g.wrapping_add(1));
            set_input_value.set(String::new());
            ctx.set_query("");
        }
        _ => {}
    };

    let clear = move |_| {
        set_generation.update(|g| *g = g.wrapping_add(1));
        set_input_value.set(String::new());
        ctx.set_query("");
    };

    view! {
        <div class="search-bar">
            <input
                type="search"
                class="search-input"
                placeholder="Search titles · མཚན་བྱང་འཚོལ།"
                prop:value=input_value
                on:input=on_input
                on:keydown=on_keydown
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="clear-btn" on:click=clear>"×"</button>
            </Show>
        </div>
    }
}
