use crate::models::campaign::{sample_campaigns, CampaignFilter, CampaignRow, CampaignStatus};
use crate::routes::Route;
use crate::utils::format::{format_count, format_currency, format_percent};
use common::Platform;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(CampaignTablePage)]
pub fn campaign_table_page() -> Html {
    let rows = use_memo((), |_| sample_campaigns());
    let filter = use_state(CampaignFilter::default);

    let on_search = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*filter).clone();
            next.search = input.value();
            filter.set(next);
        })
    };

    let on_status = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*filter).clone();
            next.status = CampaignStatus::from_value(&select.value());
            filter.set(next);
        })
    };

    let on_platform = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*filter).clone();
            next.platform = select.value().parse::<Platform>().ok();
            filter.set(next);
        })
    };

    let visible = filter.apply(&rows);

    html! {
        <div class="container">
            <div class="header">
                <h1>{ "Campaigns" }</h1>
                <Link<Route> to={Route::CampaignCreate}>
                    <button class="btn-primary">{ "Create Ads" }</button>
                </Link<Route>>
            </div>

            <div class="table-filters">
                <input type="search" placeholder="Search campaigns" value={filter.search.clone()} oninput={on_search} />
                <select onchange={on_status}>
                    <option value="" selected={filter.status.is_none()}>{ "All statuses" }</option>
                    { for CampaignStatus::ALL.iter().map(|status| html! {
                        <option value={status.value()} selected={filter.status == Some(*status)}>{ status.label() }</option>
                    })}
                </select>
                <select onchange={on_platform}>
                    <option value="" selected={filter.platform.is_none()}>{ "All platforms" }</option>
                    { for Platform::ALL.iter().map(|platform| html! {
                        <option value={platform.slug()} selected={filter.platform == Some(*platform)}>{ platform.label() }</option>
                    })}
                </select>
            </div>

            if visible.is_empty() {
                <div class="empty-state">
                    <p>{ "No campaigns match the current filters." }</p>
                </div>
            } else {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{ "Campaign" }</th>
                            <th>{ "Platform" }</th>
                            <th>{ "Status" }</th>
                            <th class="numeric">{ "Budget" }</th>
                            <th class="numeric">{ "Spend" }</th>
                            <th class="numeric">{ "Impressions" }</th>
                            <th class="numeric">{ "Clicks" }</th>
                            <th class="numeric">{ "CTR" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for visible.into_iter().map(campaign_row) }
                    </tbody>
                </table>
            }
        </div>
    }
}

fn campaign_row(row: &CampaignRow) -> Html {
    html! {
        <tr key={row.id.clone()}>
            <td>{ &row.name }</td>
            <td>{ row.platform.label() }</td>
            <td><span class={classes!("status-badge", row.status.value())}>{ row.status.label() }</span></td>
            <td class="numeric">{ format_currency(row.budget) }</td>
            <td class="numeric">{ format_currency(row.spend) }</td>
            <td class="numeric">{ format_count(row.impressions) }</td>
            <td class="numeric">{ format_count(row.clicks) }</td>
            <td class="numeric">{ format_percent(row.ctr()) }</td>
        </tr>
    }
}
