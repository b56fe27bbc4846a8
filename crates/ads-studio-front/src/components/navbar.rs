use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub chevron: &'static str,
    pub on_toggle: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let on_toggle = {
        let callback = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };

    html! {
        <nav class="navbar">
            <button class="sidebar-toggle" id="sidebarToggle" onclick={on_toggle} title="Toggle sidebar">
                <span class="chevron">{ props.chevron }</span>
            </button>
            <div class="navbar-brand">
                <Link<Route> to={Route::Home}>
                    <h1>{"Ads Studio"}</h1>
                </Link<Route>>
            </div>
            <div class="navbar-menu">
                <Link<Route> to={Route::CampaignCreate} classes="nav-link nav-link-primary">
                    {"+ Create Ads"}
                </Link<Route>>
            </div>
        </nav>
    }
}
