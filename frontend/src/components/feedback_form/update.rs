//! Elm-style update for the submission page: mutate state for `msg` and
//! report whether the view must re-render.

use common::error::SubmitError;
use common::store::submit_feedback;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::{report_network_error, show_toast};

use super::messages::Msg;
use super::state::FeedbackFormComponent;

pub fn update(
    component: &mut FeedbackFormComponent,
    ctx: &Context<FeedbackFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SelectForm(form) => {
            component.selected = Some(form);
            component.submitted = false;
            true
        }
        Msg::UpdateName(value) => {
            component.name = value;
            true
        }
        Msg::UpdateEmail(value) => {
            component.email = value;
            true
        }
        Msg::UpdateComments(value) => {
            component.comments = value;
            true
        }
        Msg::SetRating(value) => {
            component.rating = value;
            true
        }
        Msg::HoverRating(value) => {
            component.hovered = value;
            true
        }
        Msg::Submit => {
            if component.submitting {
                return false;
            }
            let submission = component.submission();
            if let Err(e) = submission.validate() {
                show_toast(&format!("Please check the form: {}.", e));
                return false;
            }

            component.submitting = true;
            let store = component.store.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match submit_feedback(&store, &submission).await {
                    Ok(()) => link.send_message(Msg::SubmitSucceeded),
                    Err(SubmitError::Network(e)) => {
                        report_network_error(
                            "Failed to submit feedback. Please try again later.",
                            &e,
                        );
                        link.send_message(Msg::SubmitFailed);
                    }
                    Err(SubmitError::Validation(e)) => {
                        show_toast(&format!("Please check the form: {}.", e));
                        link.send_message(Msg::SubmitFailed);
                    }
                }
            });
            true
        }
        Msg::SubmitSucceeded => {
            component.submitting = false;
            component.submitted = true;
            true
        }
        Msg::SubmitFailed => {
            // Entered values stay so the visitor can simply retry.
            component.submitting = false;
            true
        }
        Msg::Back => {
            component.reset();
            true
        }
    }
}
