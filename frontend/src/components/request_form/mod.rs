//! Product-video request form: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `RequestFormProps`, `RequestFormComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - On first render, fetch the runtime configuration from the backend so the
//!   form knows where to submit. Failures are reported with a toast (in
//!   Indonesian, warning or error level depending on whether the backend
//!   answered) and leave the form usable; a submit then ends in a
//!   "not configured" error.

use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::config::ClientConfig;
use common::model::error_body::message_from_body;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::{ConfigFailure, Msg};
pub use props::RequestFormProps;
pub use state::RequestFormComponent;

impl Component for RequestFormComponent {
    type Message = Msg;
    type Properties = RequestFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        RequestFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            let config_path = ctx.props().config_path.to_string();
            spawn_local(async move {
                let response = Request::get(&config_path).send().await;

                match response {
                    Ok(resp) if resp.ok() => match resp.json::<ClientConfig>().await {
                        Ok(config) => link.send_message(Msg::ConfigLoaded(config)),
                        Err(err) => link.send_message(Msg::ConfigFailed(
                            ConfigFailure::Unreachable(err.to_string()),
                        )),
                    },
                    Ok(resp) => {
                        let status = resp.status();
                        let body = resp.text().await.unwrap_or_default();
                        let reason = message_from_body(&body)
                            .ok()
                            .flatten()
                            .unwrap_or_else(|| format!("status {}", status));
                        link.send_message(Msg::ConfigFailed(ConfigFailure::Unavailable(reason)));
                    }
                    Err(err) => link.send_message(Msg::ConfigFailed(ConfigFailure::Unreachable(
                        err.to_string(),
                    ))),
                }
            });
        }
    }
}
