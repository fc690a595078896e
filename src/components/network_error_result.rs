use yew::prelude::*;

/// Generic network-error panel shown when a list fetch failed.
#[function_component(NetworkErrorResult)]
pub fn network_error_result() -> Html {
    html! {
        <div class="network-error-result">
            <span class="network-error-icon">{"⚠️"}</span>
            <h3>{"Network error"}</h3>
            <p>{"Something went wrong, please try again later."}</p>
        </div>
    }
}
