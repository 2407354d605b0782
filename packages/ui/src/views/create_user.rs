use dioxus::prelude::*;

use api::UserService;
use directory::form::VALIDATION_MESSAGE;
use directory::{CreateUserForm, DraftGenerator, SubmitOutcome};

use crate::icons::{FaArrowsRotate, FaCamera, FaTrash, FaUserPlus};
use crate::platform::{PERMISSIONS_MESSAGE, PERMISSIONS_TITLE};
use crate::{
    make_service, push_notice, request_device_permissions, use_notices, use_refresh_request, Icon,
    NoticeLevel,
};

/// The user creation screen.
///
/// Starts with a generated draft. `on_created` fires after a successful
/// submission, once the refresh request for the list screen has been raised.
#[component]
pub fn CreateUserView(on_created: EventHandler<()>) -> Element {
    let mut generator = use_signal(DraftGenerator::from_entropy);
    let mut form = use_signal(move || CreateUserForm::new(&mut generator.write()));
    let mut notices = use_notices();
    let mut refresh = use_refresh_request();
    let service = use_hook(make_service);

    use_hook(move || {
        spawn(async move {
            let permissions = request_device_permissions().await;
            if !permissions.all_granted() {
                tracing::warn!(?permissions, "device permissions not granted");
                push_notice(&mut notices, NoticeLevel::Warning, PERMISSIONS_TITLE, PERMISSIONS_MESSAGE);
            }
        });
    });

    use_drop(move || {
        if let Ok(mut form) = form.try_write() {
            form.teardown();
        }
    });

    let handle_capture = move |evt: FormEvent| async move {
        // No engine or no file means the capture was cancelled.
        let Some(engine) = evt.files() else {
            return;
        };
        let Some(path) = engine.files().into_iter().next() else {
            return;
        };
        if engine.read_file(&path).await.is_some() {
            form.write().set_photo(path);
        } else {
            tracing::error!(%path, "captured photo is not readable");
            push_notice(&mut notices, NoticeLevel::Error, "Error", "Could not open the camera.");
        }
    };

    let handle_regenerate = move |_| {
        form.write().regenerate(&mut generator.write());
        push_notice(
            &mut notices,
            NoticeLevel::Info,
            "Data refreshed!",
            "The fields were filled with new values.",
        );
    };

    let handle_submit = move |_| {
        let pending = match form.write().begin_submit() {
            Ok(Some(pending)) => pending,
            Ok(None) => return,
            Err(err) => {
                tracing::debug!("{err}");
                push_notice(&mut notices, NoticeLevel::Error, "Error", VALIDATION_MESSAGE);
                return;
            }
        };
        let service = service.clone();
        // Not tied to this scope: a response that lands after the screen is
        // gone finds the form signal dropped and is reported as stale.
        spawn_forever(async move {
            let result = service.create_user(&pending.draft).await;
            if let Err(err) = &result {
                tracing::error!("create user failed: {err}");
            }
            let outcome = match form.try_write() {
                Ok(mut form) => form.complete_submit(pending.token, result),
                Err(_) => SubmitOutcome::Stale,
            };
            match &outcome {
                SubmitOutcome::Created(created) => {
                    tracing::info!(id = ?created.as_ref().map(|u| &u.id), "user created");
                    push_notice(&mut notices, NoticeLevel::Success, "Success", "User created successfully!");
                    refresh.write().after_submit(&outcome);
                    on_created.call(());
                }
                SubmitOutcome::Failed => {
                    push_notice(&mut notices, NoticeLevel::Error, "Error", "Could not create the user.");
                }
                SubmitOutcome::Stale => {
                    tracing::warn!(token = pending.token.id(), "dropping create response for a discarded form");
                }
            }
        });
    };

    let draft = form.read().draft().clone();
    let submitting = form.read().is_submitting();

    rsx! {
        div {
            class: "screen create-user",

            h1 { class: "screen__title", "Create user" }

            label { class: "field__label", r#for: "user-name", "Name" }
            input {
                id: "user-name",
                class: "field__input",
                r#type: "text",
                placeholder: "Enter the name",
                value: "{draft.name}",
                oninput: move |evt: FormEvent| form.write().set_name(evt.value()),
            }

            label { class: "field__label", r#for: "user-email", "Email" }
            input {
                id: "user-email",
                class: "field__input",
                r#type: "email",
                placeholder: "Enter the email",
                value: "{draft.email}",
                oninput: move |evt: FormEvent| form.write().set_email(evt.value()),
            }

            label { class: "field__label", r#for: "user-password", "Password" }
            input {
                id: "user-password",
                class: "field__input",
                r#type: "password",
                placeholder: "Enter the password",
                value: "{draft.password}",
                oninput: move |evt: FormEvent| form.write().set_password(evt.value()),
            }

            label {
                class: "button button--primary",
                r#for: "user-photo",
                Icon { icon: FaCamera, width: 16, height: 16 }
                span { "Take photo" }
            }
            input {
                id: "user-photo",
                class: "visually-hidden",
                r#type: "file",
                accept: "image/*",
                "capture": "environment",
                onchange: handle_capture,
            }

            if draft.has_photo() {
                div {
                    class: "photo-preview",
                    img { class: "avatar avatar--preview", src: "{draft.profile_picture}", alt: "Profile photo" }
                    button {
                        class: "photo-preview__remove",
                        title: "Remove photo",
                        onclick: move |_| form.write().clear_photo(),
                        Icon { icon: FaTrash, width: 14, height: 14 }
                    }
                }
            }

            button {
                class: if submitting { "button button--primary button--disabled" } else { "button button--primary" },
                disabled: submitting,
                onclick: handle_submit,
                if submitting {
                    span { class: "spinner", role: "progressbar" }
                } else {
                    Icon { icon: FaUserPlus, width: 16, height: 16 }
                    span { "Create" }
                }
            }

            button {
                class: "fab",
                title: "Generate new values",
                disabled: submitting,
                onclick: handle_regenerate,
                Icon { icon: FaArrowsRotate, width: 18, height: 18 }
            }
        }
    }
}
