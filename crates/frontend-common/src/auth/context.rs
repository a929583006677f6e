//! Session context and provider

use crate::client_wrapper::SessionClient;
use crate::session::{SessionSnapshot, SessionStore};
use yew::prelude::*;

/// Session context data: the shared client plus the snapshot rendered from
#[derive(Clone, PartialEq)]
pub struct SessionContext {
    pub client: SessionClient,
    pub snapshot: SessionSnapshot,
}

impl SessionContext {
    pub fn store(&self) -> &SessionStore {
        self.client.session()
    }
}

/// Session provider props
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub client: SessionClient,
    pub children: Children,
}

/// Session provider component
///
/// Re-renders its subtree whenever the store emits an event, so every
/// consumer (including the route guard) sees post-mutation state.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let snapshot = use_state(|| props.client.session().snapshot());

    {
        let snapshot = snapshot.clone();
        use_effect_with(props.client.session().clone(), move |store| {
            let reader = store.clone();
            let subscription = store.subscribe(move |event| {
                tracing::debug!(?event, "Session changed");
                snapshot.set(reader.snapshot());
            });

            // Unsubscribe on unmount
            move || drop(subscription)
        });
    }

    let context = SessionContext {
        client: props.client.clone(),
        snapshot: (*snapshot).clone(),
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// Hook to use the session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}
