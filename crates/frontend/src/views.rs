//! Routed views
//!
//! Dashboards and lists are placeholders; the session-facing parts (sign-in
//! and registration forms, header with the signed-in user, logout) are real.

use crate::routes::Route;
use internport_frontend_common::auth::use_session;
use internport_http::types::{LoginRequest, RegisterRequest, Role};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

pub fn render(route: Route) -> Html {
    match route {
        Route::Login => html! { <Login /> },
        Route::Register => html! { <Register /> },
        route => html! { <Page {route} /> },
    }
}

/// Keep a text field in sync with its state
fn bind(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub route: Route,
}

#[function_component(Page)]
pub fn page(props: &PageProps) -> Html {
    html! {
        <div class="min-h-screen bg-gray-50">
            <Header />
            <main class="max-w-5xl mx-auto p-6">
                <h1 class="text-2xl font-bold mb-4">{ props.route.title() }</h1>
                if props.route == Route::NotFound {
                    <Link<Route> to={Route::Dashboard}>{"Back to the dashboard"}</Link<Route>>
                }
            </main>
        </div>
    }
}

#[function_component(Header)]
fn header() -> Html {
    let session = use_session();

    let on_logout = {
        let client = session.client.clone();
        Callback::from(move |_: MouseEvent| client.logout())
    };

    let Some(user) = session.snapshot.user().cloned() else {
        return html! {
            <header class="p-4 flex justify-between bg-white border-b">
                <span class="font-bold">{"InternPort"}</span>
                <Link<Route> to={Route::Login}>{"Sign in"}</Link<Route>>
            </header>
        };
    };

    let nav = match user.role {
        Role::Student => html! {
            <>
                <Link<Route> to={Route::InternshipList}>{"Internships"}</Link<Route>>
                <Link<Route> to={Route::MyApplications}>{"My applications"}</Link<Route>>
            </>
        },
        Role::Company => html! {
            <>
                <Link<Route> to={Route::CompanyInternships}>{"Internships"}</Link<Route>>
                <Link<Route> to={Route::ApplicationList}>{"Applications"}</Link<Route>>
            </>
        },
        _ => html! {},
    };

    html! {
        <header class="p-4 flex justify-between bg-white border-b">
            <span class="font-bold">{"InternPort"}</span>
            <nav class="flex gap-4">
                { nav }
                <Link<Route> to={Route::Profile}>{"Profile"}</Link<Route>>
            </nav>
            <div class="flex items-center gap-3">
                <span>{ user.display_name().unwrap_or(user.email.as_str()).to_string() }</span>
                <button onclick={on_logout}>{"Logout"}</button>
            </div>
        </header>
    }
}

#[function_component(Login)]
fn login() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_submit = {
        let client = session.client.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = LoginRequest {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let client = client.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let submitting = submitting.clone();

            submitting.set(true);
            spawn_local(async move {
                match client.login(&request).await {
                    // The session is stored by now, so the guard sees it
                    Ok(home) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::from_redirect(home));
                        }
                    }
                    Err(err) => {
                        tracing::debug!(error = %err, "Login failed");
                        error.set(Some(err.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50">
            <form class="bg-white p-8 rounded shadow w-96 space-y-4" onsubmit={on_submit}>
                <h1 class="text-xl font-bold">{ Route::Login.title() }</h1>
                if let Some(message) = (*error).clone() {
                    <p class="text-red-600 text-sm">{ message }</p>
                }
                <input
                    type="email"
                    placeholder="Email"
                    value={(*email).clone()}
                    oninput={bind(&email)}
                />
                <input
                    type="password"
                    placeholder="Password"
                    value={(*password).clone()}
                    oninput={bind(&password)}
                />
                <button type="submit" disabled={*submitting}>{"Sign in"}</button>
                <p class="text-sm">
                    <Link<Route> to={Route::Register}>{"Create an account"}</Link<Route>>
                </p>
            </form>
        </div>
    }
}

#[function_component(Register)]
fn register() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let name = use_state(String::new);
    let is_company = use_state(|| false);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_company = {
        let is_company = is_company.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            is_company.set(input.checked());
        })
    };

    let on_submit = {
        let client = session.client.clone();
        let email = email.clone();
        let password = password.clone();
        let name = name.clone();
        let is_company = is_company.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let entered = Some((*name).clone()).filter(|name| !name.is_empty());
            let (role, full_name, company_name) = if *is_company {
                (Role::Company, None, entered)
            } else {
                (Role::Student, entered, None)
            };
            let request = RegisterRequest {
                email: (*email).clone(),
                password: (*password).clone(),
                role,
                full_name,
                company_name,
                description: None,
            };
            let client = client.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let submitting = submitting.clone();

            submitting.set(true);
            spawn_local(async move {
                match client.register(&request).await {
                    Ok(home) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::from_redirect(home));
                        }
                    }
                    Err(err) => {
                        tracing::debug!(error = %err, "Registration failed");
                        error.set(Some(err.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let name_placeholder = if *is_company { "Company name" } else { "Full name" };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50">
            <form class="bg-white p-8 rounded shadow w-96 space-y-4" onsubmit={on_submit}>
                <h1 class="text-xl font-bold">{ Route::Register.title() }</h1>
                if let Some(message) = (*error).clone() {
                    <p class="text-red-600 text-sm">{ message }</p>
                }
                <input
                    type="email"
                    placeholder="Email"
                    value={(*email).clone()}
                    oninput={bind(&email)}
                />
                <input
                    type="password"
                    placeholder="Password"
                    value={(*password).clone()}
                    oninput={bind(&password)}
                />
                <label class="flex items-center gap-2 text-sm">
                    <input type="checkbox" checked={*is_company} onchange={on_company} />
                    {"Registering a company"}
                </label>
                <input
                    type="text"
                    placeholder={name_placeholder}
                    value={(*name).clone()}
                    oninput={bind(&name)}
                />
                <button type="submit" disabled={*submitting}>{"Create account"}</button>
                <p class="text-sm">
                    <Link<Route> to={Route::Login}>{"Already have an account? Sign in"}</Link<Route>>
                </p>
            </form>
        </div>
    }
}
