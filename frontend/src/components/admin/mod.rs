//! Admin dashboard: manages the feedback form catalog and shows per-form
//! analytics. Feedback is fetched after the first render and whenever the
//! error screen's retry button is pressed.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::AdminDashboardProps;
pub use state::AdminDashboard;

impl Component for AdminDashboard {
    type Message = Msg;
    type Properties = AdminDashboardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AdminDashboard::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Reload);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.store.abort();
    }
}
