use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::Config;
use crate::services::api::fetch_districts;
use crate::state::list::{ListAction, ListState};

/// Loads the district catalog once per mount.
#[hook]
pub fn use_districts() -> UseReducerHandle<ListState> {
    let state = use_reducer(ListState::default);

    {
        let state = state.clone();

        use_effect_with((), move |()| {
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            spawn_local(async move {
                let action = match fetch_districts().await {
                    Ok(envelope) => match envelope.into_data() {
                        Some(districts) => ListAction::Loaded(districts),
                        None => {
                            gloo::console::warn!(format!(
                                "District catalog for {} returned success: false",
                                Config::STATE_CODE
                            ));
                            ListAction::Unsuccessful
                        }
                    },
                    Err(e) => {
                        gloo::console::error!(format!("Error fetching districts: {e}"));
                        ListAction::Failed(e.to_string())
                    }
                };

                // Unmounted before the response arrived
                if !aborted_check.get() {
                    state.dispatch(action);
                }
            });

            move || {
                aborted.set(true);
            }
        });
    }

    state
}
