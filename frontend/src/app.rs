//! Root component. Switches between the public submission page and the admin
//! dashboard; the choice survives reloads through the `isAdmin` session flag.

use common::session::AdminSession;
use yew::{html, Component, Context, Html};

use crate::components::admin::AdminDashboard;
use crate::components::feedback_form::FeedbackFormComponent;
use crate::services::local_storage::LocalStorage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Portal,
    Admin,
}

pub enum Msg {
    OpenAdmin,
    LoggedOut,
}

pub struct App {
    page: Page,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let page = match AdminSession::new(LocalStorage).is_active() {
            Ok(true) => Page::Admin,
            Ok(false) => Page::Portal,
            Err(e) => {
                gloo_console::warn!(format!("Could not read admin session: {}", e));
                Page::Portal
            }
        };
        Self { page }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let next = match msg {
            Msg::OpenAdmin => {
                if let Err(e) = AdminSession::new(LocalStorage).login() {
                    gloo_console::error!(format!("Could not store admin session: {}", e));
                }
                Page::Admin
            }
            Msg::LoggedOut => Page::Portal,
        };
        let changed = self.page != next;
        self.page = next;
        changed
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        match self.page {
            Page::Portal => html! {
                <FeedbackFormComponent on_admin_login={link.callback(|_| Msg::OpenAdmin)} />
            },
            Page::Admin => html! {
                <AdminDashboard on_logout={link.callback(|_| Msg::LoggedOut)} />
            },
        }
    }
}
