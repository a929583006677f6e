//! Guard components for routed views

use crate::routes::Route;
use internport_frontend_common::auth::use_session;
use internport_frontend_common::guard::{guard, Navigation};
use internport_frontend_common::session::SessionEvent;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GuardedProps {
    pub route: Route,
    pub children: Children,
}

/// Renders its children only if the guard allows `route` for the current
/// session, otherwise redirects. Runs on every render, so every navigation
/// and every session change is re-checked.
#[function_component(Guarded)]
pub fn guarded(props: &GuardedProps) -> Html {
    let session = use_session();

    match guard(&props.route.meta(), &session.snapshot) {
        Navigation::Allow => html! { <>{ props.children.clone() }</> },
        Navigation::Redirect(path) => {
            tracing::debug!(from = %props.route.to_path(), to = path, "Navigation redirected");
            html! { <Redirect<Route> to={Route::from_redirect(path)} /> }
        }
    }
}

/// Sends the user to the login screen when the API rejects the session
#[function_component(RedirectOnInvalidation)]
pub fn redirect_on_invalidation() -> Html {
    let session = use_session();
    let navigator = use_navigator();

    use_effect_with(session.store().clone(), move |store| {
        let subscription = navigator.map(|navigator| {
            store.subscribe(move |event| {
                if *event == SessionEvent::Invalidated {
                    navigator.push(&Route::Login);
                }
            })
        });

        move || drop(subscription)
    });

    html! {}
}
