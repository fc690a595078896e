use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::network_error_result::NetworkErrorResult;
use crate::components::notification::{Notification, NotificationData};
use crate::hooks::use_fetch;
use crate::models::{remove_application, TransportApplication};
use crate::services::ApiClient;
use crate::utils::constants::BACKEND_URL;

const NOTIFICATION_MS: u32 = 4_500;

/// The two review actions, each with its own notification content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    Approve,
    Reject,
}

impl Decision {
    fn notification(self) -> NotificationData {
        match self {
            Decision::Approve => NotificationData {
                icon: "✅",
                description: "Approved!",
            },
            Decision::Reject => NotificationData {
                icon: "❌",
                description: "Rejected!",
            },
        }
    }
}

/// Review page for pending transport applications: one row per application,
/// approve/reject links mutate remote state and patch the local list
/// optimistically. No re-fetch on success, no change at all on failure.
#[function_component(TransportApplicationsPage)]
pub fn transport_applications_page() -> Html {
    let fetch = use_fetch::<Vec<TransportApplication>>("/transport-application/pending", Vec::new());
    let notification = use_state(|| None::<NotificationData>);

    let on_decide = {
        let fetch = fetch.clone();
        let notification = notification.clone();

        Callback::from(move |(id, decision): (u64, Decision)| {
            let fetch = fetch.clone();
            let notification = notification.clone();
            let api = ApiClient::new();

            wasm_bindgen_futures::spawn_local(async move {
                fetch.set_loading(true);
                let result = match decision {
                    Decision::Approve => api.approve_application(id).await,
                    Decision::Reject => api.reject_application(id).await,
                };
                fetch.set_loading(false);

                match result {
                    Ok(()) => {
                        if let Some(remaining) = remove_application(fetch.data(), id) {
                            fetch.set_data(remaining);
                        }
                        notification.set(Some(decision.notification()));

                        let notification = notification.clone();
                        Timeout::new(NOTIFICATION_MS, move || {
                            notification.set(None);
                        })
                        .forget();
                    }
                    Err(e) => {
                        // Silent for the user; the row stays put.
                        log::error!("❌ Error decidiendo solicitud {}: {}", id, e);
                    }
                }
            });
        })
    };

    let render_row = |app: &TransportApplication| -> Html {
        let id = app.id;
        let on_approve = {
            let on_decide = on_decide.clone();
            Callback::from(move |_: MouseEvent| on_decide.emit((id, Decision::Approve)))
        };
        let on_reject = {
            let on_decide = on_decide.clone();
            Callback::from(move |_: MouseEvent| on_decide.emit((id, Decision::Reject)))
        };
        let document_url = format!("{}/document/{}", BACKEND_URL, app.document_public_id);

        html! {
            <tr key={id.to_string()}>
                <td><a>{app.driver.full_name()}</a></td>
                <td>
                    <a href={document_url} target="_blank" class="document-link">
                        {"⬇ Document"}
                    </a>
                </td>
                <td class="actions">
                    <a onclick={on_approve}>{"Approve"}</a>
                    <a onclick={on_reject}>{"Reject"}</a>
                </td>
            </tr>
        }
    };

    // Loading and error deliberately share one indicator, same as the table
    // has always behaved.
    let busy = fetch.is_loading() || fetch.has_error();

    html! {
        <div class="page transport-applications-page">
            <h2>{"Transport Applications"}</h2>

            <div class="table-wrapper">
                {
                    if busy {
                        html! { <div class="table-loading"><span class="spinner"></span></div> }
                    } else {
                        html! {}
                    }
                }
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Driver"}</th>
                            <th>{"Document"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for fetch.data().iter().map(render_row) }
                    </tbody>
                </table>
            </div>

            {
                if fetch.has_error() {
                    html! { <NetworkErrorResult /> }
                } else {
                    html! {}
                }
            }

            {
                if let Some(data) = (*notification).clone() {
                    html! { <Notification {data} /> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
