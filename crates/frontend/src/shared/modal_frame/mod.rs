use leptos::ev;
use leptos::prelude::*;

/// Overlay + positioned surface container for the search overlay and the
/// product detail modal.
///
/// Renders no header of its own; callers draw their own chrome inside.
#[component]
pub fn ModalFrame(
    /// Called when the frame should close (overlay click).
    on_close: Callback<()>,
    /// Close when clicking on the overlay (default: true).
    #[prop(default = true)]
    close_on_overlay: bool,
    /// Extra class on the overlay element.
    #[prop(optional, into)]
    overlay_class: String,
    /// Extra class on the surface element.
    #[prop(optional, into)]
    surface_class: String,
    children: Children,
) -> impl IntoView {
    let handle_overlay_click = move |_| {
        if close_on_overlay {
            on_close.run(());
        }
    };

    // Clicks inside the surface must not bubble up to the overlay.
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div
            class=format!("modal-overlay {}", overlay_class)
            on:click=handle_overlay_click
        >
            <div
                class=format!("modal-surface {}", surface_class)
                on:click=stop_propagation
            >
                {children()}
            </div>
        </div>
    }
}
