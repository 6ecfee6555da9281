//! Resource Panel Component
//!
//! Generic admin CRUD panel: list table, create/update form, edit and
//! delete actions. One instance per editable record type.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::Mutation;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::form::RecordForm;
use crate::models::{Editable, FieldKind, Record};

/// Replace the panel rows with a reloaded list, or log why it failed.
/// On failure the previous rows stay on screen.
pub(crate) fn apply_reload<R: Record>(rows: RwSignal<Vec<R>>, result: Result<Vec<R>, String>, action: &str) {
    match result {
        Ok(loaded) => {
            web_sys::console::log_1(&format!("[ADMIN] {} {}: {} rows", action, R::COLLECTION, loaded.len()).into());
            rows.set(loaded);
        }
        Err(e) => {
            web_sys::console::error_1(&format!("[ADMIN] {} {} failed: {}", action, R::COLLECTION, e).into());
        }
    }
}

/// Log a rejected mutation, then apply the reload that followed it.
/// A mutation that never reached the server leaves the rows untouched.
pub(crate) fn apply_mutation<R: Record>(rows: RwSignal<Vec<R>>, result: Result<Mutation<R>, String>, action: &str) {
    match result {
        Ok(Mutation { rejected, list }) => {
            if let Some(e) = rejected {
                web_sys::console::error_1(&format!("[ADMIN] {} {} rejected: {}", action, R::COLLECTION, e).into());
            }
            apply_reload(rows, list, action);
        }
        Err(e) => apply_reload(rows, Err(e), action),
    }
}

/// First file picked in a file input
pub(crate) fn picked_file(input: NodeRef<html::Input>) -> Option<web_sys::File> {
    input.get_untracked()?.files()?.get(0)
}

/// One table row: the record's text cells plus Edit and Delete
pub(crate) fn record_row<R: Editable>(
    record: R,
    prompt: String,
    on_edit: Callback<R>,
    on_delete: Callback<u64>,
) -> impl IntoView {
    let id = record.id();
    let cells = R::FIELDS
        .iter()
        .zip(record.values())
        .filter(|(f, _)| !f.is_file())
        .map(|(_, value)| view! { <td>{value}</td> })
        .collect_view();
    view! {
        <tr>
            {cells}
            <td class="row-actions">
                <button type="button" class="edit-btn" on:click=move |_| on_edit.run(record.clone())>
                    "Edit"
                </button>
                <DeleteConfirmButton prompt=prompt on_confirm=move |_| on_delete.run(id) />
            </td>
        </tr>
    }
}

#[component]
pub fn ResourcePanel<R>(
    #[prop(into)] title: String,
    #[prop(optional)] _marker: std::marker::PhantomData<R>,
) -> impl IntoView
where
    R: Editable,
{
    let ctx = use_app_context();
    let rows = RwSignal::new(Vec::<R>::new());
    let form = RwSignal::new(RecordForm::blank(R::FIELDS));
    let form_ref = NodeRef::<html::Form>::new();
    let file_ref = NodeRef::<html::Input>::new();

    // Initial load
    Effect::new(move |_| {
        spawn_local(async move {
            apply_reload(rows, ctx.client().list::<R>().await, "load");
        });
    });

    let reset_form = move || {
        if let Some(el) = form_ref.get_untracked() {
            el.reset();
        }
        form.update(|f| f.reset(R::FIELDS));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = form.with_untracked(|f| f.request::<R>(picked_file(file_ref)));
        spawn_local(async move {
            let result = ctx.client().send_then_list::<R>(request).await;
            reset_form();
            apply_mutation(rows, result, "save");
        });
    };

    let on_edit = Callback::new(move |record: R| {
        // Clears any file picked for another record
        reset_form();
        form.update(|f| f.edit(&record));
        if let Some(el) = form_ref.get_untracked() {
            window().scroll_to_with_x_and_y(0.0, el.offset_top() as f64);
        }
    });

    let on_delete = Callback::new(move |id: u64| {
        spawn_local(async move {
            apply_mutation(rows, ctx.client().delete_then_list::<R>(id).await, "delete");
        });
    });

    let prompt = format!("Are you sure you want to delete this {}?", R::NOUN);

    view! {
        <section class="admin-panel">
            <h2>{title}</h2>

            <form class="record-form" node_ref=form_ref on:submit=on_submit>
                {R::FIELDS.iter().enumerate().map(|(index, field)| {
                    let field = *field;
                    match field.kind {
                        FieldKind::Image => view! {
                            <label class="form-field">
                                <span>{field.label}</span>
                                <input
                                    type="file"
                                    accept="image/*"
                                    name=field.name
                                    node_ref=file_ref
                                    on:change=move |_| form.update(|f| f.choose_file())
                                />
                            </label>
                        }.into_any(),
                        FieldKind::Text | FieldKind::Url => {
                            let input_type = if field.kind == FieldKind::Url { "url" } else { "text" };
                            view! {
                                <label class="form-field">
                                    <span>{field.label}</span>
                                    <input
                                        type=input_type
                                        name=field.name
                                        prop:value=move || form.with(|f| f.value(index))
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            form.update(|f| f.set_value(index, value));
                                        }
                                    />
                                </label>
                            }.into_any()
                        }
                    }
                }).collect_view()}

                <div class="form-actions">
                    <button type="submit">
                        {move || if form.with(|f| f.id.is_some()) { "Update" } else { "Save" }}
                    </button>
                    {move || form.with(|f| f.id).map(|id| view! {
                        <button type="button" class="cancel-btn" on:click=move |_| reset_form()>
                            "Cancel (#" {id} ")"
                        </button>
                    })}
                </div>
            </form>

            <table class="admin-table">
                <thead>
                    <tr>
                        {R::FIELDS.iter().filter(|f| !f.is_file()).map(|f| view! { <th>{f.label}</th> }).collect_view()}
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        // Values are part of the key so edited rows re-render
                        key=|record| (record.id(), record.values())
                        children=move |record| record_row(record, prompt.clone(), on_edit, on_delete)
                    />
                </tbody>
            </table>
        </section>
    }
}
