//! Confetti Burst for Leptos
//!
//! Renders a one-shot shower of falling particles over the whole viewport.
//! Each piece is an absolutely-positioned square whose fall vector and delay
//! are handed to CSS via the `--x-end`/`--y-end` variables consumed by the
//! host page's `confetti-fall` keyframes. Unmounting the component removes
//! every piece.

use leptos::prelude::*;

/// Piece count used when the caller does not specify one
pub const DEFAULT_PIECES: usize = 50;

/// Horizontal drift range in pixels (total spread, centered on the start x)
const DRIFT_PX: f64 = 400.0;

/// Maximum animation delay in seconds
const MAX_DELAY_S: f64 = 2.0;

fn rand_unit() -> f64 {
    js_sys::Math::random()
}

/// Viewport size with a fallback when no window is available
fn viewport() -> (f64, f64) {
    let Some(win) = web_sys::window() else {
        return (800.0, 600.0);
    };
    let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(800.0);
    let height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0);
    (width, height)
}

/// Inline style for one piece: start position, hue, fall vector, delay.
///
/// `rand` supplies uniform samples from [0, 1); pieces start just above the
/// top edge and end just below the bottom edge.
fn piece_style(width: f64, height: f64, rand: &mut dyn FnMut() -> f64) -> String {
    let x_start = rand() * width;
    let y_start = rand() * -100.0;
    let x_drift = (rand() - 0.5) * DRIFT_PX;
    let y_end = height + 100.0 - y_start;
    let hue = rand() * 360.0;
    let delay = rand() * MAX_DELAY_S;
    format!(
        "left: {x_start:.0}px; top: {y_start:.0}px; \
         background-color: hsl({hue:.0}, 100%, 50%); \
         animation-delay: {delay:.2}s; \
         --x-end: {x_drift:.0}px; --y-end: {y_end:.0}px;"
    )
}

/// Full-viewport confetti shower
///
/// The container is fixed and pointer-transparent, so it never intercepts
/// input while the animation runs.
#[component]
pub fn ConfettiBurst(#[prop(default = DEFAULT_PIECES)] pieces: usize) -> impl IntoView {
    let (width, height) = viewport();
    let mut rand = rand_unit as fn() -> f64;

    view! {
        <div class="confetti-container">
            {(0..pieces)
                .map(|_| {
                    let style = piece_style(width, height, &mut rand);
                    view! { <div class="confetti" style=style></div> }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_style_uses_samples_in_order() {
        // x, y, drift, hue, delay drawn in a fixed order
        let mut samples = [0.5, 0.0, 1.0, 0.25, 0.5].into_iter();
        let mut rand = move || samples.next().unwrap();

        let style = piece_style(1000.0, 600.0, &mut rand);

        assert!(style.contains("left: 500px"));
        assert!(style.contains("top: -0px") || style.contains("top: 0px"));
        assert!(style.contains("--x-end: 200px"));
        assert!(style.contains("--y-end: 700px"));
        assert!(style.contains("hsl(90, 100%, 50%)"));
        assert!(style.contains("animation-delay: 1.00s"));
    }
}
