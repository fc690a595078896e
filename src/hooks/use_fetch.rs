use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use yew::prelude::*;

use crate::state::FetchState;
use crate::utils::constants::BACKEND_URL;

/// Handle returned by [`use_fetch`]: the page-local fetch state plus the
/// imperative setters pages use for optimistic updates after a mutation.
pub struct UseFetchHandle<T: Clone + 'static> {
    state: UseStateHandle<FetchState<T>>,
}

impl<T: Clone + 'static> Clone for UseFetchHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<T: Clone + 'static> UseFetchHandle<T> {
    pub fn data(&self) -> &T {
        self.state.data()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn has_error(&self) -> bool {
        self.state.has_error()
    }

    /// Replace the data without touching the phase. Used to patch a list
    /// locally after a follow-up action succeeded, without re-fetching.
    pub fn set_data(&self, data: T) {
        self.state.set(self.state.with_data(data));
    }

    /// Bracket a follow-up mutation with a loading flag.
    pub fn set_loading(&self, loading: bool) {
        self.state.set(self.state.with_loading(loading));
    }
}

/// Generic data-loading hook: one GET on mount. No retry, no cancellation,
/// no caching across mounts (a new mount always re-fetches).
///
/// On failure the data stays at `initial` and the error flag is set.
#[hook]
pub fn use_fetch<T>(path: &str, initial: T) -> UseFetchHandle<T>
where
    T: Clone + PartialEq + DeserializeOwned + 'static,
{
    let state = use_state(|| FetchState::new(initial));

    {
        let state = state.clone();
        let url = format!("{}{}", BACKEND_URL, path);

        use_effect_with((), move |_| {
            state.set(state.start());

            wasm_bindgen_futures::spawn_local(async move {
                match Request::get(&url).send().await {
                    Ok(response) if response.ok() => match response.json::<T>().await {
                        Ok(data) => {
                            state.set(state.resolve(data));
                        }
                        Err(e) => {
                            log::error!("❌ Parse error en {}: {}", url, e);
                            state.set(state.reject());
                        }
                    },
                    Ok(response) => {
                        log::error!("❌ HTTP {} en {}", response.status(), url);
                        state.set(state.reject());
                    }
                    Err(e) => {
                        log::error!("❌ Network error en {}: {}", url, e);
                        state.set(state.reject());
                    }
                }
            });
            || ()
        });
    }

    UseFetchHandle { state }
}
