use dioxus::prelude::*;

use crate::model::file::{FileEntityType, UploadedFileDto};

#[cfg(feature = "web")]
use crate::client::api::file::{delete_file, get_files};

/// Uploads the file picked in `input_id` as multipart form data and sends back
/// `[status, message]`.
#[cfg(feature = "web")]
fn upload_script(input_id: &str, entity_type: FileEntityType, entity_id: i32) -> String {
    format!(
        r#"
        const input = document.getElementById("{input_id}");
        if (!input || !input.files || input.files.length === 0) {{
            dioxus.send([400, "Choose a file first"]);
        }} else {{
            const form = new FormData();
            form.append("entity_type", "{entity_type}");
            form.append("entity_id", "{entity_id}");
            form.append("file", input.files[0]);
            try {{
                const res = await fetch("/api/files", {{ method: "POST", body: form, credentials: "include" }});
                let message = "";
                if (!res.ok) {{
                    try {{ message = (await res.json()).error; }} catch (_) {{ message = res.statusText; }}
                }}
                input.value = "";
                dioxus.send([res.status, message]);
            }} catch (e) {{
                dioxus.send([500, String(e)]);
            }}
        }}
        "#
    )
}

/// Files attached to one record, with upload and delete for staff.
#[component]
pub fn Attachments(entity_type: FileEntityType, entity_id: i32) -> Element {
    #[allow(unused_mut)]
    let mut files = use_signal(Vec::<UploadedFileDto>::new);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut refetch_trigger = use_signal(|| 0u32);
    #[allow(unused_mut)]
    let mut is_uploading = use_signal(|| false);

    let input_id = format!("upload-{}-{}", entity_type, entity_id);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_files(entity_type, entity_id).await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(list) => files.set(list.clone()),
                Err(err) => {
                    dioxus_logger::tracing::error!("Failed to fetch files: {}", err);
                    error.set(Some(err.message.clone()));
                }
            }
        }
    });

    #[allow(unused_variables)]
    let script_input_id = input_id.clone();
    let on_upload = move |_| {
        #[cfg(feature = "web")]
        {
            let script = upload_script(&script_input_id, entity_type, entity_id);
            spawn(async move {
                is_uploading.set(true);
                let mut eval = document::eval(&script);
                match eval.recv::<(u16, String)>().await {
                    Ok((status, _)) if (200..300).contains(&status) => {
                        error.set(None);
                        refetch_trigger.set(refetch_trigger() + 1);
                    }
                    Ok((_, message)) => error.set(Some(message)),
                    Err(err) => error.set(Some(format!("Upload failed: {:?}", err))),
                }
                is_uploading.set(false);
            });
        }
    };

    rsx!(
        div {
            class: "flex flex-col gap-2 mt-4",
            h4 { class: "font-semibold", "Attachments" }
            if files().is_empty() {
                p { class: "text-sm opacity-50", "No files attached" }
            } else {
                ul {
                    class: "flex flex-col gap-1",
                    for file in files() {
                        {
                            #[allow(unused_variables)]
                            let file_id = file.id;
                            let size_kb = (file.size_bytes + 1023) / 1024;
                            rsx! {
                                li {
                                    key: "{file.id}",
                                    class: "flex items-center justify-between gap-2 text-sm",
                                    a {
                                        class: "link",
                                        href: "{file.url}",
                                        target: "_blank",
                                        "{file.file_name}"
                                    }
                                    span { class: "opacity-60", "{size_kb} KB" }
                                    button {
                                        r#type: "button",
                                        class: "btn btn-xs btn-ghost text-error",
                                        onclick: move |_| {
                                            #[cfg(feature = "web")]
                                            spawn(async move {
                                                match delete_file(file_id).await {
                                                    Ok(()) => refetch_trigger.set(refetch_trigger() + 1),
                                                    Err(err) => error.set(Some(err.message)),
                                                }
                                            });
                                        },
                                        "Remove"
                                    }
                                }
                            }
                        }
                    }
                }
            }
            div {
                class: "flex items-center gap-2",
                input {
                    id: "{input_id}",
                    r#type: "file",
                    class: "file-input file-input-bordered file-input-sm w-full",
                }
                button {
                    r#type: "button",
                    class: "btn btn-sm",
                    disabled: is_uploading(),
                    onclick: on_upload,
                    if is_uploading() { "Uploading..." } else { "Upload" }
                }
            }
            if let Some(err) = error() {
                div { class: "alert alert-error text-sm", span { "{err}" } }
            }
        }
    )
}
