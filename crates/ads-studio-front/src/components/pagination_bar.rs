use crate::models::pagination::Pagination;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationBarProps {
    pub pagination: Pagination,
    pub on_page: Callback<usize>,
}

#[function_component(PaginationBar)]
pub fn pagination_bar(props: &PaginationBarProps) -> Html {
    let p = props.pagination;
    if p.total_items() == 0 {
        return html! {};
    }

    let on_prev = {
        let on_page = props.on_page.clone();
        Callback::from(move |_: MouseEvent| on_page.emit(p.page().saturating_sub(1)))
    };
    let on_next = {
        let on_page = props.on_page.clone();
        Callback::from(move |_: MouseEvent| on_page.emit(p.page() + 1))
    };
    let range = p.range();

    html! {
        <div class="pagination">
            <button type="button" class="btn-secondary-small" onclick={on_prev} disabled={!p.has_prev()}>
                { "‹ Prev" }
            </button>
            <span class="pagination-info">
                { format!("Page {} of {} ({}–{} of {})", p.page(), p.total_pages(), range.start + 1, range.end, p.total_items()) }
            </span>
            <button type="button" class="btn-secondary-small" onclick={on_next} disabled={!p.has_next()}>
                { "Next ›" }
            </button>
        </div>
    }
}
