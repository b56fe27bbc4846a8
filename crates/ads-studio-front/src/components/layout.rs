use crate::components::{Navbar, Sidebar};
use crate::models::nav::NavState;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let nav = use_state(NavState::new);
    let location = use_location();
    let pathname = location.map(|l| l.path().to_string()).unwrap_or_default();

    {
        let nav = nav.clone();
        use_effect_with(pathname, move |path| {
            let mut next = (*nav).clone();
            next.activate(path);
            nav.set(next);
            || ()
        });
    }

    let on_toggle = {
        let nav = nav.clone();
        Callback::from(move |_: ()| {
            let mut next = (*nav).clone();
            next.toggle_collapsed();
            nav.set(next);
        })
    };

    let on_submenu = {
        let nav = nav.clone();
        Callback::from(move |section: usize| {
            let mut next = (*nav).clone();
            next.toggle_submenu(section);
            nav.set(next);
        })
    };

    html! {
        <div class={classes!("layout", nav.collapsed.then_some("sidebar-collapsed"))}>
            <Navbar chevron={nav.chevron()} on_toggle={on_toggle} />
            <Sidebar nav={(*nav).clone()} on_submenu={on_submenu} />
            <main class={classes!("main-content", nav.collapsed.then_some("expanded"))}>
                {for props.children.iter()}
            </main>
        </div>
    }
}
