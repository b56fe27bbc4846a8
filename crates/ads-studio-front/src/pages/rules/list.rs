use crate::components::{use_toast, ConfirmDialog, ConfirmPrompt};
use crate::models::rule::RuleBook;
use yew::prelude::*;

#[function_component(RulesPage)]
pub fn rules_page() -> Html {
    let book = use_state(RuleBook::sample);
    let pending_delete = use_state(|| None::<u32>);
    let toast = use_toast();

    let on_confirm_delete = {
        let book = book.clone();
        let pending_delete = pending_delete.clone();
        let toast = toast.clone();
        Callback::from(move |_: ()| {
            if let Some(id) = *pending_delete {
                let mut next = (*book).clone();
                if let Some(rule) = next.remove(id) {
                    log::info!("Deleted rule {}", rule.id);
                    toast.success(format!("Rule \"{}\" deleted", rule.name));
                    book.set(next);
                }
            }
            pending_delete.set(None);
        })
    };

    let on_cancel_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_: ()| pending_delete.set(None))
    };

    let delete_prompt = pending_delete.and_then(|id| book.get(id)).map(|rule| {
        ConfirmPrompt::destructive(
            "Delete rule",
            format!("Delete the rule \"{}\"? This cannot be undone.", rule.name),
            "Delete",
        )
    });

    html! {
        <div class="container">
            <div class="header">
                <h1>{ "Automated Rules" }</h1>
                <span class="summary">{ format!("{} of {} active", book.active_count(), book.rules().len()) }</span>
            </div>

            if book.rules().is_empty() {
                <div class="empty-state">
                    <p>{ "No rules defined." }</p>
                </div>
            } else {
                <table class="data-table rules-table">
                    <thead>
                        <tr>
                            <th>{ "Rule" }</th>
                            <th>{ "Platform" }</th>
                            <th>{ "Condition" }</th>
                            <th>{ "Action" }</th>
                            <th>{ "Status" }</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for book.rules().iter().map(|rule| {
                            let id = rule.id;
                            let on_toggle = {
                                let book = book.clone();
                                let toast = toast.clone();
                                Callback::from(move |_: MouseEvent| {
                                    let mut next = (*book).clone();
                                    if let Some(active) = next.toggle(id) {
                                        toast.info(if active { "Rule activated" } else { "Rule paused" });
                                        book.set(next);
                                    }
                                })
                            };
                            let on_delete = {
                                let pending_delete = pending_delete.clone();
                                Callback::from(move |_: MouseEvent| pending_delete.set(Some(id)))
                            };
                            html! {
                                <tr key={id} class={classes!((!rule.active).then_some("inactive"))}>
                                    <td>{ &rule.name }</td>
                                    <td>{ rule.platform.label() }</td>
                                    <td>{ &rule.condition }</td>
                                    <td>{ &rule.action }</td>
                                    <td>
                                        <span class={classes!("status-badge", if rule.active { "active" } else { "paused" })}>
                                            { if rule.active { "Active" } else { "Paused" } }
                                        </span>
                                    </td>
                                    <td class="actions">
                                        <button class="btn-secondary-small" onclick={on_toggle}>
                                            { if rule.active { "Pause" } else { "Activate" } }
                                        </button>
                                        <button class="btn-danger-small" onclick={on_delete}>{ "Delete" }</button>
                                    </td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            }

            <ConfirmDialog
                prompt={delete_prompt}
                on_confirm={on_confirm_delete}
                on_cancel={on_cancel_delete}
            />
        </div>
    }
}
