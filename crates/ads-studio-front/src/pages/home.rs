use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="container">
            <h1>{"Ads Studio"}</h1>
            <p>{"Build campaigns, assign creatives to ad sets and follow their review."}</p>

            <div class="dashboard-cards">
                <Link<Route> to={Route::CampaignCreate}>
                    <div class="dashboard-card">
                        <h3>{"Create Ads"}</h3>
                        <p>{"Pick assets and drop them onto Meta and TikTok ad sets"}</p>
                    </div>
                </Link<Route>>

                <Link<Route> to={Route::CampaignList}>
                    <div class="dashboard-card">
                        <h3>{"Campaigns"}</h3>
                        <p>{"Budget, spend and delivery across platforms"}</p>
                    </div>
                </Link<Route>>

                <Link<Route> to={Route::RuleList}>
                    <div class="dashboard-card">
                        <h3>{"Automated Rules"}</h3>
                        <p>{"Pause, scale or notify when conditions are met"}</p>
                    </div>
                </Link<Route>>

                <Link<Route> to={Route::ApprovalList}>
                    <div class="dashboard-card">
                        <h3>{"My Approvals"}</h3>
                        <p>{"Fix rejected creatives and resubmit them"}</p>
                    </div>
                </Link<Route>>
            </div>
        </div>
    }
}
