use serde::de::DeserializeOwned;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::error::AppError;
use crate::services::catalog_api::fetch_json;

/// Result of the most recent request issued by [`use_fetch`].
#[derive(Debug, PartialEq)]
pub struct FetchState<T> {
    /// URL the current `data`/`error` came from
    pub url: Option<String>,
    /// Bumped each time a response lands, even when its body is unchanged
    pub revision: u32,
    pub data: Option<Rc<T>>,
    pub loading: bool,
    pub error: Option<AppError>,
}

impl<T> Clone for FetchState<T> {
    fn clone(&self) -> Self {
        Self {
            url: self.url.clone(),
            revision: self.revision,
            data: self.data.clone(),
            loading: self.loading,
            error: self.error.clone(),
        }
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::idle()
    }
}

impl<T> FetchState<T> {
    /// No request issued.
    pub const fn idle() -> Self {
        Self {
            url: None,
            revision: 0,
            data: None,
            loading: false,
            error: None,
        }
    }

    /// Request in flight; the previous outcome stays visible until it lands.
    pub fn begin(&self) -> Self {
        Self {
            loading: true,
            ..self.clone()
        }
    }

    pub fn loaded(url: impl Into<String>, revision: u32, data: T) -> Self {
        Self {
            url: Some(url.into()),
            revision,
            data: Some(Rc::new(data)),
            loading: false,
            error: None,
        }
    }

    pub fn failed(url: impl Into<String>, revision: u32, error: AppError) -> Self {
        Self {
            url: Some(url.into()),
            revision,
            data: None,
            loading: false,
            error: Some(error),
        }
    }

    pub const fn data(&self) -> Option<&Rc<T>> {
        self.data.as_ref()
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Identifies one landed response. Effects keyed on this re-run for every
    /// response, including a refetch that returns the same body.
    pub fn landing(&self) -> (Option<String>, u32) {
        (self.url.clone(), self.revision)
    }

    /// True when the held outcome was fetched from `url`.
    pub fn is_for(&self, url: Option<&str>) -> bool {
        url.is_some() && self.url.as_deref() == url
    }
}

/// Fetches `url` once per change. `None` means no request.
///
/// A response that arrives after the URL has changed again (or after the
/// component unmounted) is discarded.
#[hook]
pub fn use_fetch<T>(url: Option<String>) -> UseStateHandle<FetchState<T>>
where
    T: DeserializeOwned + 'static,
{
    let state = use_state(FetchState::<T>::idle);
    let landed = use_mut_ref(|| 0u32);

    {
        let state = state.clone();

        use_effect_with(url, move |url| {
            let aborted = Rc::new(Cell::new(false));

            match url.clone() {
                None => state.set(FetchState::idle()),
                Some(url) => {
                    state.set(state.begin());
                    let aborted_check = aborted.clone();

                    spawn_local(async move {
                        let result = fetch_json::<T>(&url).await;

                        if let Err(e) = &result {
                            gloo::console::error!(&format!("Failed to fetch {url}: {e}"));
                        }
                        if aborted_check.get() {
                            gloo::console::debug!(&format!("Discarding superseded response for {url}"));
                            return;
                        }

                        let revision = {
                            let mut count = landed.borrow_mut();
                            *count = count.wrapping_add(1);
                            *count
                        };
                        match result {
                            Ok(data) => state.set(FetchState::loaded(url, revision, data)),
                            Err(e) => state.set(FetchState::failed(url, revision, e)),
                        }
                    });
                }
            }

            move || aborted.set(true)
        });
    }

    state
}
