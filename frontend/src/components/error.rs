use crate::api::ApiError;
use leptos::*;

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-red-50 border border-red-300 text-red-800 px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    // The raw error body may carry per-field messages.
                    if let Some(messages) = e
                        .details
                        .as_ref()
                        .and_then(|details| details.get("errors"))
                        .and_then(|v| v.as_array())
                    {
                        let items = messages
                            .iter()
                            .filter_map(|entry| {
                                entry
                                    .get("msg")
                                    .and_then(|msg| msg.as_str())
                                    .or_else(|| entry.as_str())
                            })
                            .map(|msg| view! { <li>{msg.to_string()}</li> })
                            .collect_view();
                        return view! {
                            <ul class="list-disc list-inside text-sm">{items}</ul>
                        }
                        .into_view();
                    }
                    if e.code != "UNKNOWN" && !e.code.is_empty() {
                        view! { <div class="text-xs opacity-75">{"Code: "}{e.code.clone()}</div> }.into_view()
                    } else {
                        ().into_view()
                    }
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}
