use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::performance::is_chronological;
use crate::services::api::fetch_district_bundle;
use crate::state::detail::{DetailAction, DetailState, RequestKey};

/// Fetches snapshot, history and comparison whenever `district_code` changes.
///
/// Each fetch is tagged with a [`RequestKey`]; the reducer drops results whose
/// key is no longer current, so a slow response for a previous district never
/// replaces data for the new one.
#[hook]
pub fn use_district_data(district_code: AttrValue) -> UseReducerHandle<DetailState> {
    let state = use_reducer(DetailState::default);
    let generation = use_mut_ref(|| 0u64);

    {
        let state = state.clone();

        use_effect_with(district_code, move |district_code| {
            let key = {
                let mut generation = generation.borrow_mut();
                *generation += 1;
                RequestKey::new(district_code.to_string(), *generation)
            };
            state.dispatch(DetailAction::Begin(key.clone()));

            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            spawn_local(async move {
                let outcome = fetch_district_bundle(&key.district_code).await;

                match &outcome {
                    Ok(bundle) => {
                        if bundle
                            .history
                            .as_deref()
                            .is_some_and(|points| !is_chronological(points))
                        {
                            gloo::console::warn!(format!(
                                "History for {} is not in chronological order",
                                key.district_code
                            ));
                        }
                    }
                    Err(e) => {
                        gloo::console::error!(format!(
                            "Error fetching data for {}: {e}",
                            key.district_code
                        ));
                    }
                }

                if !aborted_check.get() {
                    state.dispatch(DetailAction::Settled {
                        key,
                        outcome: outcome.map_err(|e| e.to_string()),
                    });
                }
            });

            move || {
                aborted.set(true);
            }
        });
    }

    state
}
