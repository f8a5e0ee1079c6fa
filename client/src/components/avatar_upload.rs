//! Avatar picker with selected-file preview and remove/change actions.

use leptos::html::Input;
use leptos::prelude::*;

use crate::state::registration::AvatarMeta;
use crate::util::avatar_file::preview_label;
use crate::util::validation::accept_attribute;

/// Hidden native file input plus the visible drop zone.
///
/// The zone and the "Change Image" action are both `<label for>` targets of
/// the input, so clicking either opens the browser picker.
#[component]
pub fn AvatarUpload(
    #[prop(into)] selected: Signal<Option<AvatarMeta>>,
    input_ref: NodeRef<Input>,
    on_change: Callback<leptos::ev::Event>,
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="avatar-upload">
            <span class="form-label">"Upload Avatar"</span>
            {move || match selected.get() {
                Some(meta) => {
                    view! {
                        <div class="avatar-upload__zone avatar-upload__zone--selected">
                            <p class="avatar-upload__file">"File selected: " {preview_label(&meta)}</p>
                            <div class="avatar-upload__actions">
                                <button
                                    type="button"
                                    class="avatar-upload__action"
                                    on:click=move |_| on_remove.run(())
                                >
                                    "Remove Image"
                                </button>
                                <label for="avatar" class="avatar-upload__action">
                                    "Change Image"
                                </label>
                            </div>
                        </div>
                    }
                        .into_any()
                }
                None => {
                    view! {
                        <label for="avatar" class="avatar-upload__zone">
                            <svg class="avatar-upload__icon" viewBox="0 0 24 24" aria-hidden="true">
                                <path d="M12 16V4"></path>
                                <path d="M7 9l5-5 5 5"></path>
                                <path d="M4 20h16"></path>
                            </svg>
                            <p>"Click to upload"</p>
                        </label>
                    }
                        .into_any()
                }
            }}
            <input
                id="avatar"
                type="file"
                class="visually-hidden"
                accept=accept_attribute()
                aria-describedby="avatar-error"
                node_ref=input_ref
                on:change=move |ev| on_change.run(ev)
            />
            <p class="avatar-upload__hint">"Upload your photo (JPG, PNG, or WEBP, max size: 2MB)."</p>
        </div>
    }
}
