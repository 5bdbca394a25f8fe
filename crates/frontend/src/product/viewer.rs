use leptos::prelude::*;
use web_sys::MouseEvent;

/// How far one pixel of horizontal drag turns the product, in degrees.
const DRAG_FACTOR: f64 = 0.5;

/// Simulated 360° viewer: a 2D image under a `rotateY` transform driven by
/// horizontal drags. No real 3D model behind it.
#[component]
pub fn Viewer360(image: String) -> impl IntoView {
    let rotation = RwSignal::new(0.0_f64);
    let dragging = RwSignal::new(false);
    let last_x = StoredValue::new(0_i32);

    let on_mouse_down = move |ev: MouseEvent| {
        dragging.set(true);
        last_x.set_value(ev.client_x());
    };

    let on_mouse_move = move |ev: MouseEvent| {
        if !dragging.get_untracked() {
            return;
        }
        let delta = ev.client_x() - last_x.get_value();
        rotation.update(|r| *r += f64::from(delta) * DRAG_FACTOR);
        last_x.set_value(ev.client_x());
    };

    let end_drag = move |_| dragging.set(false);

    view! {
        <div
            class="viewer"
            class=("viewer--dragging", move || dragging.get())
            on:mousedown=on_mouse_down
            on:mousemove=on_mouse_move
            on:mouseup=end_drag
            on:mouseleave=end_drag
        >
            <div
                class="viewer__stage"
                style=move || format!("transform: rotateY({}deg);", rotation.get())
            >
                <img src=image alt="360 view" class="viewer__image" draggable="false" />
            </div>
            <div class="viewer__hint">"Drag to Rotate"</div>
        </div>
    }
}
