//! Image Carousel Component
//!
//! Cycles a fixed slide set on a 3 s interval, with manual prev/next
//! navigation. Manual navigation replaces the interval, so the auto-advance
//! period always measures from the last user interaction.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::rotation::Rotation;

const AUTO_ADVANCE_MS: u32 = 3_000;

/// Sliding image strip with prev/next controls
///
/// An empty slide set renders nothing and starts no timer.
#[component]
pub fn Carousel(slides: Vec<String>) -> impl IntoView {
    let total = slides.len();
    (total > 0).then(move || {
        let (rotation, set_rotation) = signal(Rotation::new(total));
        let timer = StoredValue::new_local(None::<Interval>);

        // Replacing the stored handle drops the old interval, cancelling it
        let restart_auto = move || {
            timer.set_value(Some(Interval::new(AUTO_ADVANCE_MS, move || {
                set_rotation.update(|rotation| rotation.advance());
            })));
        };
        restart_auto();
        on_cleanup(move || timer.set_value(None));

        let track_style = move || {
            format!("transform: translateX(-{}%);", rotation.get().offset_percent())
        };

        view! {
            <div class="carousel-viewport">
                <div class="carousel-track" style=track_style>
                    {slides
                        .into_iter()
                        .map(|src| view! { <img class="carousel-img" src=src /> })
                        .collect_view()}
                </div>
            </div>
            <div class="carousel-nav">
                <button
                    type="button"
                    class="carousel-btn prev"
                    on:click=move |_| {
                        set_rotation.update(|rotation| rotation.retreat());
                        restart_auto();
                    }
                >
                    "\u{2039}"
                </button>
                <button
                    type="button"
                    class="carousel-btn next"
                    on:click=move |_| {
                        set_rotation.update(|rotation| rotation.advance());
                        restart_auto();
                    }
                >
                    "\u{203A}"
                </button>
            </div>
        }
    })
}
