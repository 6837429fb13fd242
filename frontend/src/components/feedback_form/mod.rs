//! Visitor-facing submission page: pick a feedback form, rate, comment and
//! submit. Wires the Yew `Component` implementation to the `state`, `update`
//! and `view` submodules.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::FeedbackFormProps;
pub use state::FeedbackFormComponent;

impl Component for FeedbackFormComponent {
    type Message = Msg;
    type Properties = FeedbackFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FeedbackFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.store.abort();
    }
}
