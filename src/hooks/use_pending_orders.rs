use std::cell::Cell;

use yew::prelude::*;

use crate::models::Order;
use crate::services::{QueryClient, PENDING_ORDERS_KEY};
use crate::state::FetchState;

/// Handle returned by [`use_pending_orders`]: the query state plus the two
/// order mutations. Mutations never touch the list directly; a successful
/// one invalidates the order's cache tag and the subscription re-fetches.
pub struct UsePendingOrdersHandle {
    state: UseStateHandle<FetchState<Vec<Order>>>,
    pub approve: Callback<u64>,
    pub decline: Callback<u64>,
}

impl UsePendingOrdersHandle {
    pub fn orders(&self) -> &[Order] {
        self.state.data()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn has_error(&self) -> bool {
        self.state.has_error()
    }
}

/// Pending-orders query bound to the shared [`QueryClient`] from context.
#[hook]
pub fn use_pending_orders() -> UsePendingOrdersHandle {
    let client = use_context::<QueryClient>().expect("QueryClient context not mounted");
    let state = use_state(|| FetchState::new(Vec::<Order>::new()));
    let refresh_tick = use_state(|| 0u32);

    // Fetch on mount and again every time an invalidation bumps the tick.
    {
        let state = state.clone();
        let client = client.clone();
        use_effect_with(*refresh_tick, move |_| {
            state.set(state.start());
            wasm_bindgen_futures::spawn_local(async move {
                match client.pending_orders().await {
                    Ok(orders) => {
                        state.set(state.resolve(orders));
                    }
                    Err(e) => {
                        log::error!("❌ Error obteniendo órdenes pendientes: {}", e);
                        state.set(state.reject());
                    }
                }
            });
            || ()
        });
    }

    // Subscribe to invalidations of the pending-orders key for the lifetime
    // of the page. The Cell keeps its own counter: the state handle captured
    // here is the mount-time snapshot, so `*refresh_tick + 1` would stick at 1.
    {
        let client = client.clone();
        let refresh_tick = refresh_tick.clone();
        use_effect_with((), move |_| {
            let tick = Cell::new(*refresh_tick);
            let subscription = client.subscribe(PENDING_ORDERS_KEY, move || {
                tick.set(tick.get() + 1);
                refresh_tick.set(tick.get());
            });
            move || client.unsubscribe(subscription)
        });
    }

    let approve = {
        let client = client.clone();
        Callback::from(move |id: u64| {
            let client = client.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = client.approve_order(id).await {
                    log::error!("❌ Error aprobando orden {}: {}", id, e);
                }
            });
        })
    };

    let decline = {
        let client = client.clone();
        Callback::from(move |id: u64| {
            let client = client.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = client.decline_order(id).await {
                    log::error!("❌ Error rechazando orden {}: {}", id, e);
                }
            });
        })
    };

    UsePendingOrdersHandle {
        state,
        approve,
        decline,
    }
}
