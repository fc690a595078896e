use yew::prelude::*;

use crate::components::create_order_page::CreateOrderPage;
use crate::components::pending_orders_page::PendingOrdersPage;
use crate::components::transport_applications_page::TransportApplicationsPage;
use crate::services::{ApiClient, QueryClient};

#[derive(Clone, Copy, PartialEq, Eq)]
enum AdminPage {
    Orders,
    TransportApplications,
    CreateOrder,
}

impl AdminPage {
    fn title(self) -> &'static str {
        match self {
            AdminPage::Orders => "Orders",
            AdminPage::TransportApplications => "Transport Applications",
            AdminPage::CreateOrder => "Create Order",
        }
    }
}

const PAGES: [AdminPage; 3] = [
    AdminPage::Orders,
    AdminPage::TransportApplications,
    AdminPage::CreateOrder,
];

/// App shell: header with page switcher, shared query client in context.
/// Not a router, just screen state switched like any other page state.
#[function_component(App)]
pub fn app() -> Html {
    let page = use_state(|| AdminPage::Orders);
    let queries = use_state(|| QueryClient::new(ApiClient::new()));

    let nav_button = |target: AdminPage| -> Html {
        let page = page.clone();
        let class = if *page == target {
            "nav-button active"
        } else {
            "nav-button"
        };
        let onclick = Callback::from(move |_: MouseEvent| page.set(target));

        html! {
            <button {class} {onclick}>{target.title()}</button>
        }
    };

    html! {
        <ContextProvider<QueryClient> context={(*queries).clone()}>
            <header class="app-header">
                <h1>{"Transport Admin"}</h1>
                <nav class="header-actions">
                    { for PAGES.iter().map(|target| nav_button(*target)) }
                </nav>
            </header>

            <main class="app-content">
                {
                    match *page {
                        AdminPage::Orders => html! { <PendingOrdersPage /> },
                        AdminPage::TransportApplications => html! { <TransportApplicationsPage /> },
                        AdminPage::CreateOrder => html! { <CreateOrderPage /> },
                    }
                }
            </main>
        </ContextProvider<QueryClient>>
    }
}
