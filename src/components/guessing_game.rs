//! Guessing Game Component
//!
//! High-low game against a hidden target in [1, 100]. A win disables input
//! and shows a confetti burst; the reset button starts a fresh round and
//! clears both.

use leptos::html::Input;
use leptos::prelude::*;
use leptos_confetti::ConfettiBurst;

use crate::game::{target_from_unit, Feedback, GameRound};

const PROMPT: &str = "Guess a number between 1 and 100!";

fn fresh_round() -> GameRound {
    let target = target_from_unit(js_sys::Math::random());
    web_sys::console::log_1(&format!("secret target (debug): {target}").into());
    GameRound::new(target)
}

#[component]
pub fn GuessingGame() -> impl IntoView {
    let (round, set_round) = signal(fresh_round());
    let (entry, set_entry) = signal(String::new());
    let (message, set_message) = signal(PROMPT.to_string());
    let (tone, set_tone) = signal("message");
    let input_ref = NodeRef::<Input>::new();

    let won = move || round.get().is_won();

    let refocus = move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    };

    let on_guess = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let raw = entry.get();
        let mut current = round.get();
        match current.guess(&raw) {
            Ok(feedback) => {
                let win = matches!(feedback, Feedback::Win { .. });
                set_tone.set(if win { "message win" } else { "message miss" });
                set_message.set(feedback.message());
            }
            Err(invalid) => {
                set_tone.set("message");
                set_message.set(invalid.message().to_string());
            }
        }
        set_round.set(current);
        set_entry.set(String::new());
        refocus();
    };

    let on_reset = move |_| {
        set_round.set(fresh_round());
        set_tone.set("message");
        set_message.set(PROMPT.to_string());
        set_entry.set(String::new());
        refocus();
    };

    view! {
        <form class="guess-form" on:submit=on_guess>
            <input
                type="number"
                class="guess-input"
                min="1"
                max="100"
                node_ref=input_ref
                prop:value=move || entry.get()
                on:input=move |ev| set_entry.set(event_target_value(&ev))
                prop:disabled=won
            />
            <button type="submit" class="guess-btn" prop:disabled=won>
                "Guess"
            </button>
            <button type="button" class="reset-btn" on:click=on_reset>
                "New game"
            </button>
        </form>
        <p class=move || tone.get()>{move || message.get()}</p>
        <p class="attempts">{move || format!("Attempts: {}", round.get().attempts())}</p>
        <Show when=won>
            <ConfettiBurst />
        </Show>
    }
}
