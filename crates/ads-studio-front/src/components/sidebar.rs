use crate::models::nav::{NavState, NAV_SECTIONS};
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub nav: NavState,
    pub on_submenu: Callback<usize>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let nav = &props.nav;

    html! {
        <aside class={classes!("sidebar", nav.collapsed.then_some("collapsed"))}>
            { for NAV_SECTIONS.iter().enumerate().map(|(s, section)| {
                let on_header = {
                    let on_submenu = props.on_submenu.clone();
                    Callback::from(move |_: MouseEvent| on_submenu.emit(s))
                };
                let open = nav.is_open(s);
                html! {
                    <div class="sidebar-section" key={section.title}>
                        <button class="sidebar-section-title" onclick={on_header}>
                            <span class="sidebar-link-icon">{ section.icon }</span>
                            <span class="sidebar-link-text">{ section.title }</span>
                            <span class="submenu-caret">{ if open { "▾" } else { "▸" } }</span>
                        </button>
                        <nav class={classes!("sidebar-nav", "submenu", open.then_some("show"))}>
                            { for section.items.iter().enumerate().map(|(i, item)| {
                                let route = Route::recognize(item.path).unwrap_or(Route::NotFound);
                                let active = nav.is_active(s, i);
                                html! {
                                    <Link<Route>
                                        to={route}
                                        classes={classes!("sidebar-link", active.then_some("active"))}
                                    >
                                        <span class="sidebar-link-icon">{ item.icon }</span>
                                        <span class="sidebar-link-text">{ item.label }</span>
                                    </Link<Route>>
                                }
                            })}
                        </nav>
                    </div>
                }
            })}
        </aside>
    }
}
