use crate::auth_guard::{Guarded, RedirectOnInvalidation};
use crate::routes::Route;
use crate::views;
use internport_frontend_common::{SessionClient, SessionProvider};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub client: SessionClient,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider client={props.client.clone()}>
                <RedirectOnInvalidation />
                <Switch<Route> render={switch} />
            </SessionProvider>
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    html! {
        <Guarded route={route.clone()}>
            { views::render(route) }
        </Guarded>
    }
}
