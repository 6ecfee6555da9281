//! Delete Confirm Button Component
//!
//! Delete button guarded by a blocking browser confirmation.

use leptos::prelude::*;

/// Delete button
///
/// Shows `prompt` in `window.confirm`; `on_confirm` only runs when the user
/// accepts. There is no undo.
///
/// # Arguments
/// * `prompt` - Confirmation question, e.g. "Are you sure you want to delete this notice?"
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] prompt: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="delete-btn"
            on:click=move |ev| {
                ev.stop_propagation();
                if window().confirm_with_message(&prompt).unwrap_or(false) {
                    on_confirm.run(());
                }
            }
        >
            "Delete"
        </button>
    }
}
