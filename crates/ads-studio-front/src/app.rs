use crate::components::{Layout, ToastProvider};
use crate::config::AppConfig;
use crate::pages::{ApprovalsPage, CampaignBuilderPage, CampaignTablePage, Home, RulesPage};
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<AppConfig> context={props.config.clone()}>
            <ToastProvider duration_ms={props.config.toast_duration_ms}>
                <BrowserRouter>
                    <Layout>
                        <Switch<Route> render={switch} />
                    </Layout>
                </BrowserRouter>
            </ToastProvider>
        </ContextProvider<AppConfig>>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::CampaignList => html! { <CampaignTablePage /> },
        Route::CampaignCreate => html! { <CampaignBuilderPage /> },
        Route::RuleList => html! { <RulesPage /> },
        Route::ApprovalList => html! { <ApprovalsPage /> },
        Route::NotFound => html! { <div class="container"><h2>{"404 - Page Not Found"}</h2></div> },
    }
}
