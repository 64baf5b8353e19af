//! Form field widgets shared by the add/edit screens.

use leptos::*;

const LABEL_CLASS: &str = "block mb-2 text-sm font-medium text-gray-700";
const INPUT_CLASS: &str =
    "w-full p-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500";

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] input_type: String,
) -> impl IntoView {
    let input_type = if input_type.is_empty() {
        "text".to_string()
    } else {
        input_type
    };
    view! {
        <div class="mb-6">
            <label class=LABEL_CLASS>{label}</label>
            <input
                type=input_type
                class=INPUT_CLASS
                required=required
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional)] required: bool,
    #[prop(default = 6)] rows: u32,
) -> impl IntoView {
    view! {
        <div class="mb-6">
            <label class=LABEL_CLASS>{label}</label>
            <textarea
                class=INPUT_CLASS
                rows=rows
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            >
                {value.get_untracked()}
            </textarea>
        </div>
    }
}

/// Dropdown over `(value, label)` pairs with a leading blank choice.
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(into)] options: MaybeSignal<Vec<(String, String)>>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let blank_label = if placeholder.is_empty() {
        "Not selected".to_string()
    } else {
        placeholder
    };
    view! {
        <div class="mb-6">
            <label class=LABEL_CLASS>{label}</label>
            <select
                class=INPUT_CLASS
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                <option value="">{blank_label}</option>
                <For
                    each=move || options.get()
                    key=|(option_value, _)| option_value.clone()
                    children=move |(option_value, option_label)| {
                        let selected_value = option_value.clone();
                        view! {
                            <option
                                value=option_value
                                selected=move || value.get() == selected_value
                            >
                                {option_label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

#[component]
pub fn FileField(
    #[prop(into)] label: String,
    on_file: Callback<web_sys::File>,
    #[prop(optional, into)] accept: String,
) -> impl IntoView {
    let accept = if accept.is_empty() {
        "image/*".to_string()
    } else {
        accept
    };
    view! {
        <div class="mb-6">
            <label class=LABEL_CLASS>{label}</label>
            <input
                type="file"
                accept=accept
                class="w-full text-sm text-gray-700 file:mr-4 file:py-2 file:px-4 file:rounded-lg file:border-0 file:bg-blue-50 file:text-blue-700 hover:file:bg-blue-100"
                on:change=move |ev| {
                    let input: web_sys::HtmlInputElement = event_target(&ev);
                    if let Some(file) = input.files().and_then(|files| files.get(0)) {
                        on_file.call(file);
                    }
                }
            />
        </div>
    }
}

/// Cancel link plus submit button, disabled while a request is in flight.
#[component]
pub fn SubmitRow(
    cancel_href: &'static str,
    #[prop(into)] submit_label: String,
    pending: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="flex gap-4 mt-2">
            <a
                href=cancel_href
                class="px-6 py-3 rounded-lg border border-gray-300 text-gray-700 hover:bg-gray-50"
            >
                "Cancel"
            </a>
            <button
                type="submit"
                disabled=move || pending.get()
                class="px-6 py-3 rounded-lg bg-blue-600 text-white font-semibold hover:bg-blue-700 disabled:opacity-50"
            >
                {move || {
                    if pending.get() {
                        "Saving...".to_string()
                    } else {
                        submit_label.clone()
                    }
                }}
            </button>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn text_field_marks_required_inputs() {
        let html = render_to_string(|| {
            let value = create_rw_signal(String::new());
            view! { <TextField label="Title (English)" value=value required=true/> }
        });
        assert!(html.contains("Title (English)"));
        assert!(html.contains("required"));
    }

    #[test]
    fn select_field_renders_options_and_placeholder() {
        let html = render_to_string(|| {
            let value = create_rw_signal("2".to_string());
            let options = vec![
                ("1".to_string(), "Tea".to_string()),
                ("2".to_string(), "Sweets".to_string()),
            ];
            view! {
                <SelectField
                    label="Category"
                    value=value
                    options=options
                    placeholder="No category"
                />
            }
        });
        assert!(html.contains("No category"));
        assert!(html.contains("Tea"));
        assert!(html.contains("Sweets"));
    }

    #[test]
    fn submit_row_shows_progress_label_while_pending() {
        let html = render_to_string(|| {
            view! {
                <SubmitRow
                    cancel_href="/admin/products"
                    submit_label="Save"
                    pending=Signal::derive(|| true)
                />
            }
        });
        assert!(html.contains("Saving..."));
        assert!(html.contains("disabled"));
    }
}
