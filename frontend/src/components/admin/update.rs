//! Update function for the admin dashboard.
//!
//! Key behaviors
//! - Loading feedback from the store, normalizing it and recomputing analytics.
//! - Managing form templates through the injected `FormCatalog`; validation
//!   failures are reported with a toast and leave the catalog untouched.
//! - Clearing all analytics: every record is deleted concurrently, then the
//!   store is listed again so the dashboard shows what is really left.
//! - Logging out, which clears the admin session flag.

use common::error::{CatalogError, ClearError};
use common::session::AdminSession;
use common::store::{clear_all_and_refresh, load_feedback};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::{confirm, report_network_error, show_toast};
use crate::services::local_storage::LocalStorage;

use super::messages::Msg;
use super::state::{AdminDashboard, EditingForm, LoadState};

pub fn update(component: &mut AdminDashboard, ctx: &Context<AdminDashboard>, msg: Msg) -> bool {
    match msg {
        Msg::Reload => {
            component.load_state = LoadState::Loading;
            let store = component.store.clone();
            let normalizer = component.normalizer;
            let link = ctx.link().clone();
            spawn_local(async move {
                match load_feedback(&store, &normalizer).await {
                    Ok(feedbacks) => link.send_message(Msg::FeedbackLoaded(feedbacks)),
                    Err(e) => {
                        report_network_error("Failed to load feedbacks", &e);
                        link.send_message(Msg::LoadFailed(
                            "Failed to load feedbacks. Please try again later.".to_string(),
                        ));
                    }
                }
            });
            true
        }
        Msg::FeedbackLoaded(feedbacks) => {
            component.set_feedbacks(feedbacks);
            component.load_state = LoadState::Ready;
            true
        }
        Msg::LoadFailed(message) => {
            component.load_state = LoadState::Failed(message);
            true
        }

        Msg::UpdateNewTitle(value) => {
            component.new_title = value;
            true
        }
        Msg::UpdateNewDescription(value) => {
            component.new_description = value;
            true
        }
        Msg::AddForm => {
            let Some(catalog) = component.catalog.as_mut() else {
                return false;
            };
            let result = catalog
                .add(&component.new_title, Some(component.new_description.as_str()))
                .map(|_| ());
            if handle_catalog_result(result, "Please enter a form title.") {
                component.new_title.clear();
                component.new_description.clear();
            }
            true
        }
        Msg::StartEdit(form) => {
            component.editing = Some(EditingForm::from(form));
            true
        }
        Msg::UpdateEditTitle(value) => {
            if let Some(editing) = component.editing.as_mut() {
                editing.title = value;
            }
            true
        }
        Msg::UpdateEditDescription(value) => {
            if let Some(editing) = component.editing.as_mut() {
                editing.description = value;
            }
            true
        }
        Msg::SaveEdit => {
            let (Some(catalog), Some(editing)) =
                (component.catalog.as_mut(), component.editing.as_ref())
            else {
                return false;
            };
            let result = catalog.update(
                &editing.id,
                &editing.title,
                Some(editing.description.as_str()),
            );
            if handle_catalog_result(result, "Please enter a title.") {
                component.editing = None;
            }
            true
        }
        Msg::CancelEdit => {
            component.editing = None;
            true
        }
        Msg::DeleteForm(id) => {
            if let Some(catalog) = component.catalog.as_mut() {
                handle_catalog_result(catalog.remove(&id), "");
            }
            true
        }

        Msg::ClearAnalytics => {
            if component.clearing
                || !confirm("Are you sure you want to clear all feedback analytics?")
            {
                return false;
            }
            component.clearing = true;
            let store = component.store.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match clear_all_and_refresh(&store).await {
                    Ok(remaining) => link.send_message(Msg::ClearFinished(remaining)),
                    Err(ClearError::Fetch(e)) | Err(ClearError::Refresh(e)) => {
                        report_network_error("Failed to clear analytics. Please try again.", &e);
                        link.send_message(Msg::ClearFailed);
                    }
                    Err(err @ ClearError::PartialBulkFailure { .. }) => {
                        gloo_console::error!(format!("Error clearing analytics: {}", err));
                        show_toast("Failed to clear analytics. Please try again.");
                        link.send_message(Msg::ClearFailed);
                    }
                }
            });
            true
        }
        Msg::ClearFinished(remaining) => {
            component.clearing = false;
            if remaining.is_empty() {
                show_toast("All analytics cleared successfully!");
            }
            let feedbacks = component.normalizer.normalize_all(&remaining);
            component.set_feedbacks(feedbacks);
            true
        }
        Msg::ClearFailed => {
            // Some deletes may have gone through; re-read the store.
            component.clearing = false;
            ctx.link().send_message(Msg::Reload);
            false
        }

        Msg::Logout => {
            if let Err(e) = AdminSession::new(LocalStorage).logout() {
                gloo_console::error!(format!("Could not clear admin session: {}", e));
            }
            ctx.props().on_logout.emit(());
            false
        }
    }
}

/// Reports a failed catalog mutation. Returns `true` when it succeeded.
fn handle_catalog_result(result: Result<(), CatalogError>, validation_message: &str) -> bool {
    match result {
        Ok(()) => true,
        Err(CatalogError::Validation(_)) => {
            show_toast(validation_message);
            false
        }
        Err(e) => {
            gloo_console::error!(format!("Could not save feedback forms: {}", e));
            show_toast("Could not save feedback forms.");
            false
        }
    }
}
