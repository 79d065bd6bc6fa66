//! View rendering for the request form component.
//!
//! The page shows either the form (with an optional error alert under the
//! submit button) or the success panel. Which one, the submit label and
//! whether the button is disabled all come from `common::form::FormView`, so
//! this module only translates that view model into markup.
//!
//! All user-facing text is in Indonesian.

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use common::form::{Alert, FormView, Panel};
use common::model::request::{MAX_VIDEO_COUNT, MIN_VIDEO_COUNT};

use super::messages::Msg;
use super::state::RequestFormComponent;

/// Main view function. Renders the header and the active panel.
pub fn view(component: &RequestFormComponent, ctx: &Context<RequestFormComponent>) -> Html {
    let link = ctx.link();
    let view = component.form.view();

    html! {
        <div class="request-form-root">
            <div class="card">
                { build_header() }
                {
                    match &view.panel {
                        Panel::Success => build_success_panel(link),
                        Panel::Form { alert } => build_form(&view, alert.as_ref(), link),
                    }
                }
            </div>
        </div>
    }
}

fn build_header() -> Html {
    html! {
        <div class="header">
            <h1>{"Panen Konten"}</h1>
            <p>
                {"Platform otomatis untuk memproduksi konten video secara massal. Masukkan link gambar produk, tulis deskripsi, dan biarkan sistem kami yang bekerja."}
            </p>
        </div>
    }
}

fn build_success_panel(link: &Scope<RequestFormComponent>) -> Html {
    html! {
        <div class="success-panel">
            { success_icon() }
            <h2>{"Permintaan Berhasil Dikirim!"}</h2>
            <p>
                {"Permintaan Anda telah kami terima dan sedang diproses. Hasilnya akan dikirimkan jika sudah selesai."}
            </p>
            <button class="primary-btn" onclick={link.callback(|_| Msg::Reset)}>
                {"Buat Permintaan Baru"}
            </button>
        </div>
    }
}

/// Builds the form: image link and video count side by side, the
/// description below, then the submit button and the error alert.
fn build_form(
    view: &FormView<'_>,
    alert: Option<&Alert>,
    link: &Scope<RequestFormComponent>,
) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="request-form" {onsubmit}>
            <div class="field-grid">
                <div class="field">
                    <label for="product-image-link">
                        {"Link Gambar Produk "}{ required_marker() }
                    </label>
                    <input
                        type="text"
                        id="product-image-link"
                        name="product-image-link"
                        value={view.product_image_link.to_string()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetProductImageLink(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                        placeholder="Contoh: https://example.com/image.jpg"
                        required=true
                    />
                    <p class="hint">{"Masukan Link Gambar Produk"}</p>
                </div>

                <div class="field">
                    <label for="video-count">
                        {"Jumlah Video "}{ required_marker() }
                    </label>
                    <input
                        type="number"
                        id="video-count"
                        name="video-count"
                        min={MIN_VIDEO_COUNT.to_string()}
                        max={MAX_VIDEO_COUNT.to_string()}
                        value={view.video_count.to_string()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetVideoCount(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                        required=true
                    />
                    <p class="hint">
                        { format!("Jumlah video yang ingin dibuat ({}-{}).", MIN_VIDEO_COUNT, MAX_VIDEO_COUNT) }
                    </p>
                </div>
            </div>

            <div class="field">
                <label for="description">
                    {"Deskripsi Video "}{ required_marker() }
                </label>
                <textarea
                    id="description"
                    name="description"
                    rows="5"
                    value={view.description.to_string()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetDescription(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                    })}
                    placeholder="Contoh: Buatkan video iklan sinematik yang menampilkan produk ini dari berbagai sudut..."
                    required=true
                />
            </div>

            <button type="submit" class="primary-btn submit-btn" disabled={view.submit_disabled}>
                { view.submit_label }
            </button>

            { alert.map(build_alert).unwrap_or_default() }
        </form>
    }
}

fn build_alert(alert: &Alert) -> Html {
    html! {
        <div class="error-alert" role="alert">
            { alert_icon() }
            <div class="error-text">
                <p class="error-title">{ alert.title }</p>
                <p class="error-message">{ alert.message.clone() }</p>
            </div>
        </div>
    }
}

fn required_marker() -> Html {
    html! { <span class="required">{"*"}</span> }
}

fn alert_icon() -> Html {
    html! {
        <svg class="icon" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2">
            <path stroke-linecap="round" stroke-linejoin="round" d="M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z" />
        </svg>
    }
}

fn success_icon() -> Html {
    html! {
        <svg class="success-icon" fill="none" viewBox="0 0 24 24" stroke="currentColor">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z" />
        </svg>
    }
}
