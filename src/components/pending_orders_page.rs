use yew::prelude::*;

use crate::components::network_error_result::NetworkErrorResult;
use crate::hooks::use_pending_orders;
use crate::models::Order;

/// Review page for pending orders, driven by the tagged query layer: a
/// successful approve/decline invalidates the order's cache tag and the
/// list re-renders from the refreshed query result.
#[function_component(PendingOrdersPage)]
pub fn pending_orders_page() -> Html {
    let orders = use_pending_orders();

    let render_row = |order: &Order| -> Html {
        let id = order.id;
        let on_approve = {
            let approve = orders.approve.clone();
            Callback::from(move |_: MouseEvent| approve.emit(id))
        };
        let on_decline = {
            let decline = orders.decline.clone();
            Callback::from(move |_: MouseEvent| decline.emit(id))
        };

        html! {
            <tr key={id.to_string()}>
                <td>{format!("#{}", id)}</td>
                <td>{order.summary()}</td>
                <td class="actions">
                    <a onclick={on_approve}>{"Approve"}</a>
                    <a onclick={on_decline}>{"Decline"}</a>
                </td>
            </tr>
        }
    };

    html! {
        <div class="page pending-orders-page">
            <h2>{"Pending Orders"}</h2>

            <div class="table-wrapper">
                {
                    if orders.is_loading() {
                        html! { <div class="table-loading"><span class="spinner"></span></div> }
                    } else {
                        html! {}
                    }
                }
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Order"}</th>
                            <th>{"Details"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for orders.orders().iter().map(render_row) }
                    </tbody>
                </table>
            </div>

            {
                if orders.has_error() {
                    html! { <NetworkErrorResult /> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
