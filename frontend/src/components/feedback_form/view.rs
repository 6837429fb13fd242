//! View rendering for the submission page: a navigation bar, then either the
//! grid of available forms or the selected form (or its thank-you note).

use common::model::feedback::{rating_label, MAX_RATING};
use common::model::template::FormTemplate;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::FeedbackFormComponent;

pub fn view(component: &FeedbackFormComponent, ctx: &Context<FeedbackFormComponent>) -> Html {
    let link = ctx.link();
    let on_admin_login = ctx.props().on_admin_login.clone();

    html! {
        <div class="portal-root">
            <nav class="portal-nav">
                <h1 onclick={link.callback(|_| Msg::Back)}>{ "Feedback Portal" }</h1>
                <button onclick={move |_| on_admin_login.emit(())}>{ "Admin Login" }</button>
            </nav>
            <main class="portal-main">
                {
                    match &component.selected {
                        None => build_form_grid(component, link),
                        Some(form) if component.submitted => build_thank_you(form, link),
                        Some(form) => build_submission_form(component, form, link),
                    }
                }
            </main>
        </div>
    }
}

fn build_form_grid(component: &FeedbackFormComponent, link: &Scope<FeedbackFormComponent>) -> Html {
    html! {
        <>
            <h2>{ "Choose a Feedback Form" }</h2>
            <p>
                { "Select a form below to share your thoughts and help us improve our services." }
            </p>
            <div class="form-grid">
                { for component.forms.iter().map(|form| {
                    let selected = form.clone();
                    html! {
                        <div key={form.id.clone()} class="form-card"
                             onclick={link.callback(move |_| Msg::SelectForm(selected.clone()))}>
                            <h3>{ form.title.clone() }</h3>
                            <p>{ form.description_or_placeholder().to_string() }</p>
                            <button>{ "Fill Form" }</button>
                        </div>
                    }
                }) }
            </div>
        </>
    }
}

fn build_submission_form(
    component: &FeedbackFormComponent,
    form: &FormTemplate,
    link: &Scope<FeedbackFormComponent>,
) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <div class="submission">
            <h2>{ form.title.clone() }</h2>
            <form {onsubmit}>
                <label>{ "Name" }
                    <input type="text" required=true value={component.name.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::UpdateName(input.value())
                        })} />
                </label>
                <label>{ "Email" }
                    <input type="email" required=true value={component.email.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::UpdateEmail(input.value())
                        })} />
                </label>
                { build_star_picker(component, link) }
                <label>{ "Comments" }
                    <textarea rows="4" placeholder="Share your feedback..."
                        value={component.comments.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            Msg::UpdateComments(input.value())
                        })} />
                </label>
                <div class="actions">
                    <button type="button" onclick={link.callback(|_| Msg::Back)}>{ "Back" }</button>
                    <button type="submit" disabled={component.submitting}>
                        { if component.submitting { "Submitting..." } else { "Submit" } }
                    </button>
                </div>
            </form>
        </div>
    }
}

fn build_star_picker(
    component: &FeedbackFormComponent,
    link: &Scope<FeedbackFormComponent>,
) -> Html {
    let lit = if component.hovered > 0 { component.hovered } else { component.rating };

    html! {
        <div class="rating">
            <span>{ "Rating" }</span>
            <div class="stars">
                { for (1..=MAX_RATING).map(|star| html! {
                    <button type="button" key={star.to_string()}
                        class={classes!("star", (star <= lit).then_some("lit"))}
                        onmouseenter={link.callback(move |_| Msg::HoverRating(star))}
                        onmouseleave={link.callback(|_| Msg::HoverRating(0))}
                        onclick={link.callback(move |_| Msg::SetRating(star))}>
                        { "★" }
                    </button>
                }) }
            </div>
            if let Some(label) = rating_label(i64::from(component.rating)) {
                <p class="rating-label">{ label }</p>
            }
        </div>
    }
}

fn build_thank_you(form: &FormTemplate, link: &Scope<FeedbackFormComponent>) -> Html {
    html! {
        <div class="thank-you">
            <h3>{ "Thank You!" }</h3>
            <p>{ format!("Your feedback for {} has been recorded.", form.title) }</p>
            <button onclick={link.callback(|_| Msg::Back)}>{ "Submit Another" }</button>
        </div>
    }
}
