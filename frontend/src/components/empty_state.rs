use leptos::*;

pub const EMPTY_ROW_TEXT: &str = "No data available";

/// Placeholder row for an empty table body.
#[component]
pub fn EmptyRow(colspan: u32) -> impl IntoView {
    view! {
        <tr>
            <td colspan=colspan class="text-center py-4 text-gray-500">{EMPTY_ROW_TEXT}</td>
        </tr>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn empty_row_spans_the_requested_columns() {
        let html = render_to_string(|| view! { <EmptyRow colspan=4/> });
        assert!(html.contains("colspan=\"4\""));
        assert!(html.contains(EMPTY_ROW_TEXT));
    }
}
