use yew_router::Routable;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/campaigns")]
    CampaignList,
    #[at("/campaigns/create")]
    CampaignCreate,

    #[at("/rules")]
    RuleList,

    #[at("/approvals")]
    ApprovalList,

    #[not_found]
    #[at("/404")]
    NotFound,
}
