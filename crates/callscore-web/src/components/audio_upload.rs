//! Audio upload flow: drag-and-drop or file picker, local validation,
//! multipart submission and the post-upload result panel

use crate::services::upload::{status_display, upload_file, validate_file};
use callscore_core::types::UploadResult;
use callscore_core::utils::format_size_mb;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

/// A validated file waiting for submission
#[derive(Clone)]
struct SelectedFile {
    file: SendWrapper<File>,
    name: String,
    size_bytes: f64,
}

/// Upload panel
#[component]
pub fn AudioUpload() -> impl IntoView {
    let selected = RwSignal::new(None::<SelectedFile>);
    let upload_result = RwSignal::new(None::<UploadResult>);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(false);
    let drag_over = RwSignal::new(false);

    // Validation failures never reach the network; an oversized file also
    // clears the previous selection
    let take_file = move |file: File| match validate_file(&file.type_(), file.size()) {
        Ok(()) => {
            let name = file.name();
            let size_bytes = file.size();
            selected.set(Some(SelectedFile {
                file: SendWrapper::new(file),
                name,
                size_bytes,
            }));
            error.set(None);
            success.set(None);
            upload_result.set(None);
        }
        Err(message) => {
            error.set(Some(message));
            selected.set(None);
        }
    };

    let on_file_change = move |ev: Event| {
        let input = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok());
        if let Some(file) = input.and_then(|input| input.files()).and_then(|files| files.get(0)) {
            take_file(file);
        }
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        drag_over.set(true);
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        drag_over.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        drag_over.set(false);
        if let Some(file) = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0))
        {
            take_file(file);
        }
    };

    let on_upload = move |_| {
        let Some(selection) = selected.get_untracked() else {
            error.set(Some("Будь ласка, виберіть файл".to_string()));
            return;
        };

        is_loading.set(true);
        error.set(None);
        success.set(None);

        leptos::task::spawn_local(async move {
            match upload_file(&selection.file).await {
                Ok(result) => {
                    success.set(Some("Файл успішно завантажено та оброблено".to_string()));
                    upload_result.set(Some(result));
                    selected.set(None);
                }
                Err(message) => error.set(Some(message)),
            }
            is_loading.set(false);
        });
    };

    let reset = move |_| {
        upload_result.set(None);
        selected.set(None);
        success.set(None);
        error.set(None);
    };

    view! {
        <section class="feature-section">
            <h2>"🎤 Завантаження аудіо"</h2>

            {move || match upload_result.get() {
                Some(result) => {
                    let transcription = result.text.clone().map(|text| {
                        view! {
                            <div class="result-item">
                                <strong>"Транскрипція:"</strong>
                                <p>{text}</p>
                            </div>
                        }
                    });

                    view! {
                        <div class="upload-result">
                            <div class="result-header">
                                <h3>"Інформація про запис"</h3>
                            </div>
                            <div class="result-content">
                                <div class="result-item">
                                    <strong>"ID запису: "</strong>
                                    {result.id}
                                </div>
                                <div class="result-item">
                                    <strong>"Статус: "</strong>
                                    {status_display(result.status.as_deref())}
                                </div>
                                {transcription}
                                <button class="upload-button" on:click=reset>
                                    "Завантажити та обробити ще один файл"
                                </button>
                            </div>
                        </div>
                    }
                        .into_any()
                }
                None => {
                    view! {
                        <div
                            class=move || {
                                if drag_over.get() { "upload-zone drag-over" } else { "upload-zone" }
                            }
                            on:dragover=on_drag_over
                            on:dragleave=on_drag_leave
                            on:drop=on_drop
                        >
                            <div class="upload-content">
                                <div class="upload-icon">"🎵"</div>
                                <p>"Перетягніть аудіо файл сюди або"</p>
                                <label class="file-input-label">
                                    "Виберіть файл"
                                    <input
                                        type="file"
                                        class="file-input"
                                        accept="audio/mp3,audio/wav,audio/m4a,audio/ogg"
                                        on:change=on_file_change
                                    />
                                </label>
                                <p class="file-types">
                                    "Підтримувані формати: MP3, WAV, M4A, OGG"
                                    <br />
                                    <small>"Максимальний розмір файлу: 50MB"</small>
                                </p>
                            </div>
                        </div>

                        {move || {
                            selected
                                .get()
                                .map(|selection| {
                                    view! {
                                        <div class="selected-file">
                                            <span>
                                                "Вибрано: " {selection.name.clone()} " ("
                                                {format_size_mb(selection.size_bytes)} "MB)"
                                            </span>
                                            <button
                                                class="upload-button"
                                                on:click=on_upload
                                                disabled=move || is_loading.get()
                                            >
                                                {move || {
                                                    if is_loading.get() {
                                                        "Завантаження..."
                                                    } else {
                                                        "Завантажити та обробити"
                                                    }
                                                }}
                                            </button>
                                        </div>
                                    }
                                })
                        }}
                    }
                        .into_any()
                }
            }}

            {move || success.get().map(|message| view! { <div class="success-message">{message}</div> })}
            {move || error.get().map(|message| view! { <div class="error-message">{message}</div> })}
        </section>
    }
}
