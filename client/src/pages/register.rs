//! Registration page: avatar upload plus name, email, and GitHub handle.
//!
//! On a valid submit the page creates an object URL for the chosen file,
//! drops a [`TicketPayload`] into the shared [`TicketState`], and navigates to
//! the ticket page. Nothing leaves the browser.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::html::Input;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use uuid::Uuid;

use crate::app::TICKET_PATH;
use crate::components::avatar_upload::AvatarUpload;
use crate::components::field_error::FieldErrorText;
use crate::state::registration::{RegistrationDraft, SubmitState};
use crate::state::ticket::{TicketPayload, TicketState};
use crate::util::avatar_file::revoke_object_url;
use crate::util::validation::{FieldError, FieldErrors, field_errors, validate};

/// Result of one press of the submit button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum SubmitOutcome {
    /// A previous submit is still in flight.
    Busy,
    Rejected(FieldErrors),
    /// Validation passed but the browser gave no object URL for the file.
    ObjectUrlUnavailable,
    Ready(TicketPayload),
}

/// Errors to render. Nothing is shown until the first submit attempt; after
/// that, errors track the draft as it changes. A rule failure on the avatar
/// outranks the unreadable-file notice.
pub(crate) fn visible_errors(submit: SubmitState, draft: &RegistrationDraft) -> FieldErrors {
    if !submit.attempted {
        return FieldErrors::default();
    }
    let mut errors = field_errors(draft);
    if submit.avatar_unreadable {
        errors.avatar = errors.avatar.or(Some(FieldError::AvatarUnreadable));
    }
    errors
}

/// Validate `draft` and, if it passes, build the ticket payload.
///
/// `object_url` is only called once validation succeeds, so no URL is ever
/// created for a rejected or oversized file. `submit` stays in flight on
/// `Ready`; the page unmounts on navigation.
pub(crate) fn plan_submit<F>(
    draft: &RegistrationDraft,
    submit: &mut SubmitState,
    ticket_id: Uuid,
    object_url: F,
) -> SubmitOutcome
where
    F: FnOnce() -> Option<String>,
{
    if !submit.try_begin() {
        return SubmitOutcome::Busy;
    }
    let registration = match validate(draft) {
        Ok(registration) => registration,
        Err(errors) => {
            submit.finish();
            return SubmitOutcome::Rejected(errors);
        }
    };
    let Some(url) = object_url() else {
        submit.fail_avatar_read();
        return SubmitOutcome::ObjectUrlUnavailable;
    };
    SubmitOutcome::Ready(TicketPayload::new(registration, url, ticket_id))
}

fn log_outcome(outcome: &SubmitOutcome) {
    #[cfg(feature = "hydrate")]
    {
        match outcome {
            SubmitOutcome::Busy => log::debug!("submit ignored: already in flight"),
            SubmitOutcome::Rejected(errors) => log::debug!("submit rejected: {} field error(s)", errors.count()),
            SubmitOutcome::ObjectUrlUnavailable => log::warn!("submit aborted: avatar object url unavailable"),
            SubmitOutcome::Ready(payload) => log::info!("ticket {} issued", payload.ticket_number),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = outcome;
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ticket = expect_context::<RwSignal<TicketState>>();
    let navigate = use_navigate();

    let draft = RwSignal::new(RegistrationDraft::default());
    let submit = RwSignal::new(SubmitState::default());
    let input_ref = NodeRef::<Input>::new();

    // The `File` handle is not `Send`, so it lives beside the draft rather
    // than inside it.
    #[cfg(feature = "hydrate")]
    let avatar_file = StoredValue::new_local(None::<web_sys::File>);

    let errors = Memo::new(move |_| draft.with(|d| visible_errors(submit.get(), d)));
    let avatar = Signal::derive(move || draft.with(|d| d.avatar.clone()));

    let on_avatar_change = Callback::new(move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let file = crate::util::avatar_file::selected_file(&ev);
            let meta = file.as_ref().map(crate::util::avatar_file::describe);
            avatar_file.set_value(file);
            draft.update(|d| d.set_avatar(meta));
            submit.update(SubmitState::clear_avatar_notice);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    });

    let on_avatar_remove = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            avatar_file.set_value(None);
            // Reset the native input so picking the same file again fires `change`.
            if let Some(input) = input_ref.get_untracked() {
                input.set_value("");
            }
        }
        draft.update(|d| d.set_avatar(None));
        submit.update(SubmitState::clear_avatar_notice);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let object_url = move || -> Option<String> {
            #[cfg(feature = "hydrate")]
            {
                avatar_file.with_value(|f| f.as_ref().and_then(crate::util::avatar_file::create_object_url))
            }
            #[cfg(not(feature = "hydrate"))]
            {
                None
            }
        };

        let mut state = submit.get_untracked();
        let outcome = draft.with_untracked(|d| plan_submit(d, &mut state, Uuid::new_v4(), object_url));
        submit.set(state);
        log_outcome(&outcome);

        if let SubmitOutcome::Ready(payload) = outcome {
            if let Some(previous) = ticket.try_update(|t| t.hand_off(payload)).flatten() {
                revoke_object_url(&previous.avatar_url);
            }
            navigate(TICKET_PATH, NavigateOptions::default());
        }
    };

    view! {
        <section class="register-page">
            <p class="brand">"Coding Conf"</p>
            <h1 class="register-page__title">"Your Journey to Coding Conf 2025 Starts Here!"</h1>
            <p class="register-page__subtitle">"Secure your spot at next year's biggest coding conference."</p>

            <form class="register-form" novalidate=true on:submit=on_submit>
                <AvatarUpload
                    selected=avatar
                    input_ref=input_ref
                    on_change=on_avatar_change
                    on_remove=on_avatar_remove
                />
                <FieldErrorText error=Signal::derive(move || errors.get().avatar) id="avatar-error"/>

                <div class="form-field">
                    <label class="form-label" for="full-name">"Full Name"</label>
                    <input
                        id="full-name"
                        class="form-input"
                        type="text"
                        placeholder="John Doe"
                        autocomplete="name"
                        prop:value=move || draft.with(|d| d.full_name.clone())
                        on:input=move |ev| draft.update(|d| d.full_name = event_target_value(&ev))
                    />
                    <FieldErrorText error=Signal::derive(move || errors.get().full_name) id="full-name-error"/>
                </div>

                <div class="form-field">
                    <label class="form-label" for="email">"Email Address"</label>
                    <input
                        id="email"
                        class="form-input"
                        type="email"
                        placeholder="johndoe@email.com"
                        autocomplete="email"
                        prop:value=move || draft.with(|d| d.email.clone())
                        on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                    />
                    <FieldErrorText error=Signal::derive(move || errors.get().email) id="email-error"/>
                </div>

                <div class="form-field">
                    <label class="form-label" for="username">"GitHub Username"</label>
                    <input
                        id="username"
                        class="form-input"
                        type="text"
                        placeholder="@yourusername"
                        autocomplete="username"
                        prop:value=move || draft.with(|d| d.username.clone())
                        on:input=move |ev| draft.update(|d| d.username = event_target_value(&ev))
                    />
                    <FieldErrorText error=Signal::derive(move || errors.get().username) id="username-error"/>
                </div>

                <button
                    class="register-form__submit"
                    type="submit"
                    disabled=move || submit.get().in_flight
                >
                    "Generate My Ticket"
                </button>
            </form>
        </section>
    }
}
