//! Gallery Panel Component
//!
//! Admin image upload form and preview grid with delete.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::resource_panel::{apply_mutation, apply_reload, picked_file};
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::{GalleryImage, Record};

const NO_FILE_SELECTED: &str = "Please select an image to upload.";

#[component]
pub fn GalleryPanel() -> impl IntoView {
    let ctx = use_app_context();
    let images = RwSignal::new(Vec::<GalleryImage>::new());
    let form_ref = NodeRef::<html::Form>::new();
    let file_ref = NodeRef::<html::Input>::new();

    Effect::new(move |_| {
        spawn_local(async move {
            apply_reload(images, ctx.client().list::<GalleryImage>().await, "load");
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(file) = picked_file(file_ref) else {
            let _ = window().alert_with_message(NO_FILE_SELECTED);
            return;
        };
        web_sys::console::log_1(&format!("[GALLERY] Uploading {} ({} bytes)", file.name(), file.size()).into());
        spawn_local(async move {
            let result = ctx.client().upload_then_list::<GalleryImage>(file).await;
            if let Some(el) = form_ref.get_untracked() {
                el.reset();
            }
            apply_mutation(images, result, "upload");
        });
    };

    let on_delete = move |id: u64| {
        spawn_local(async move {
            apply_mutation(images, ctx.client().delete_then_list::<GalleryImage>(id).await, "delete");
        });
    };

    let prompt = format!("Are you sure you want to delete this {}?", GalleryImage::NOUN);

    view! {
        <section class="admin-panel">
            <h2>"Gallery"</h2>

            <form class="record-form" node_ref=form_ref on:submit=on_submit>
                <label class="form-field">
                    <span>"Image"</span>
                    <input type="file" accept="image/*" name="image" node_ref=file_ref />
                </label>
                <div class="form-actions">
                    <button type="submit">"Upload"</button>
                </div>
            </form>

            <div class="gallery-preview">
                <For
                    each=move || images.get()
                    key=|image| image.id
                    children=move |image| {
                        let id = image.id;
                        let src = ctx.upload_url(&image.filename);
                        view! {
                            <div class="gallery-item">
                                <img src=src alt="Gallery image" />
                                <DeleteConfirmButton prompt=prompt.clone() on_confirm=move |_| on_delete(id) />
                            </div>
                        }
                    }
                />
            </div>
        </section>
    }
}
