//! View rendering for the admin dashboard.
//!
//! Layout: a header with the logout button, the form manager (add, edit in
//! place, delete) and the analytics section with one card per form type.
//! While feedback is loading, or after a failed load, the whole page is
//! replaced by a spinner or an error screen with a retry button.

use common::model::analytics::AnalyticsGroup;
use common::model::feedback::NormalizedFeedback;
use common::model::template::FormTemplate;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{AdminDashboard, EditingForm, LoadState};

pub fn view(component: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    let link = ctx.link();

    match &component.load_state {
        LoadState::Loading => html! {
            <div class="admin-status">
                <div class="spinner"></div>
                <p>{ "Loading feedback..." }</p>
            </div>
        },
        LoadState::Failed(message) => html! {
            <div class="admin-status error">
                <p>{ message.clone() }</p>
                <button onclick={link.callback(|_| Msg::Reload)}>{ "Retry" }</button>
            </div>
        },
        LoadState::Ready => html! {
            <div class="admin-root">
                <header class="admin-header">
                    <h1>{ "Admin Dashboard" }</h1>
                    <button onclick={link.callback(|_| Msg::Logout)}>{ "Logout" }</button>
                </header>
                { build_form_manager(component, link) }
                { build_analytics(component, link) }
            </div>
        },
    }
}

fn build_form_manager(component: &AdminDashboard, link: &Scope<AdminDashboard>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::AddForm
    });

    html! {
        <section class="form-manager">
            <h2>{ "Manage Feedback Forms" }</h2>
            <form class="add-form" {onsubmit}>
                <input type="text" placeholder="Form title" value={component.new_title.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::UpdateNewTitle(input.value())
                    })} />
                <textarea placeholder="Description (optional)"
                    value={component.new_description.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        Msg::UpdateNewDescription(input.value())
                    })} />
                <button type="submit">{ "Add Form" }</button>
            </form>
            <ul class="form-list">
                { for component.forms().iter().map(|form| {
                    match &component.editing {
                        Some(editing) if editing.id == form.id => build_edit_row(editing, link),
                        _ => build_form_row(form, link),
                    }
                }) }
            </ul>
        </section>
    }
}

fn build_form_row(form: &FormTemplate, link: &Scope<AdminDashboard>) -> Html {
    let edited = form.clone();
    let deleted = form.id.clone();
    let on_delete = link.callback(move |_| Msg::DeleteForm(deleted.clone()));

    html! {
        <li key={form.id.clone()} class="form-row">
            <div>
                <h3>{ form.title.clone() }</h3>
                <p>{ form.description_or_placeholder().to_string() }</p>
            </div>
            <div class="row-actions">
                <button onclick={link.callback(move |_| Msg::StartEdit(edited.clone()))}>
                    { "Edit" }
                </button>
                <button class="danger" onclick={on_delete}>
                    { "Delete" }
                </button>
            </div>
        </li>
    }
}

fn build_edit_row(editing: &EditingForm, link: &Scope<AdminDashboard>) -> Html {
    html! {
        <li key={editing.id.clone()} class="form-row editing">
            <input type="text" value={editing.title.clone()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::UpdateEditTitle(input.value())
                })} />
            <textarea value={editing.description.clone()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    Msg::UpdateEditDescription(input.value())
                })} />
            <div class="row-actions">
                <button onclick={link.callback(|_| Msg::SaveEdit)}>{ "Save" }</button>
                <button onclick={link.callback(|_| Msg::CancelEdit)}>{ "Cancel" }</button>
            </div>
        </li>
    }
}

fn build_analytics(component: &AdminDashboard, link: &Scope<AdminDashboard>) -> Html {
    html! {
        <section class="analytics">
            <div class="analytics-header">
                <h2>{ "Feedback Analytics" }</h2>
                if !component.feedbacks.is_empty() {
                    <button class="danger" disabled={component.clearing}
                        onclick={link.callback(|_| Msg::ClearAnalytics)}>
                        { if component.clearing { "Clearing..." } else { "Clear Analytics" } }
                    </button>
                }
            </div>
            if component.analytics.is_empty() {
                <p class="empty">{ "No feedback submitted yet." }</p>
            } else {
                { for component.analytics.iter().map(build_group) }
            }
        </section>
    }
}

fn build_group(group: &AnalyticsGroup) -> Html {
    html! {
        <div key={group.form_type.clone()} class="analytics-card">
            <h3>{ group.form_type.clone() }</h3>
            <div class="summary">
                <span class="avg">{ format!("{} / 5", group.avg) }</span>
                <span class="total">{ format!("{} responses", group.total) }</span>
            </div>
            <div class="histogram">
                { for group.rating_counts.iter().map(|bar| {
                    let width = format!("width: {:.1}%;", bar.share_of(group.total) * 100.0);
                    html! {
                        <div key={bar.rating.to_string()} class="histogram-row">
                            <span class="label">{ format!("{}★", bar.rating) }</span>
                            <div class="bar"><div class="fill" style={width}></div></div>
                            <span class="count">{ bar.count.to_string() }</span>
                        </div>
                    }
                }) }
            </div>
            <div class="feedback-list">
                { for group.feedbacks.iter().map(build_feedback_card) }
            </div>
        </div>
    }
}

fn build_feedback_card(feedback: &NormalizedFeedback) -> Html {
    html! {
        <div key={feedback.id.clone()} class="feedback-card">
            <div class="feedback-meta">
                <strong>{ feedback.name.clone() }</strong>
                <span>{ feedback.email.clone() }</span>
                <span class="rating">{ format!("{}★", feedback.rating) }</span>
            </div>
            <p>{ feedback.comments.clone() }</p>
            <small>{ feedback.created_at.clone() }</small>
        </div>
    }
}
