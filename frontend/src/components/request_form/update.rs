//! Update function for the request form component.
//!
//! Elm-style: receives the current `RequestFormComponent`, the `Context` and a
//! `Msg`, mutates the state and returns whether the view should re-render.
//! The form rules themselves (validation, transitions) are in
//! `common::form::FormState`; this module wires them to the browser.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::error::SubmissionError;

use super::helpers::{report_config_failure, send_request};
use super::messages::Msg;
use super::state::RequestFormComponent;

pub fn update(
    component: &mut RequestFormComponent,
    ctx: &Context<RequestFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetProductImageLink(value) => {
            component.form.set_product_image_link(value);
            true
        }
        Msg::SetDescription(value) => {
            component.form.set_description(value);
            true
        }
        Msg::SetVideoCount(raw) => {
            component.form.set_video_count(&raw);
            true
        }
        Msg::Submit => {
            let Some(request) = component.form.submit() else {
                // Validation failed, or a request is already in flight.
                return true;
            };

            match component.submit_url.clone() {
                Some(url) => {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let outcome = send_request(&url, &request).await;
                        link.send_message(Msg::Completed(outcome));
                    });
                }
                None => {
                    component.form.abort(SubmissionError::NotConfigured);
                }
            }
            true
        }
        Msg::Completed(outcome) => {
            let changed = component.form.complete(outcome);
            if let (true, Some(error)) = (changed, component.form.status().error()) {
                gloo_console::warn!(format!("Submission failed: {}", error));
            }
            changed
        }
        Msg::Reset => {
            component.form.reset();
            true
        }
        Msg::ConfigLoaded(config) => {
            gloo_console::log!(format!(
                "Submitting to {} (relay: {})",
                config.submit_url, config.relay
            ));
            component.submit_url = Some(config.submit_url);
            false
        }
        Msg::ConfigFailed(failure) => {
            report_config_failure(&failure);
            false
        }
    }
}
