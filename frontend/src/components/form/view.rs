//! View rendering for the add-image form: file input with thumbnail, title
//! and description inputs, each followed by its inline validation message,
//! and the submit button.

use common::validation::Field;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::files_of;
use super::messages::Msg;
use super::state::FormAddImage;
use super::update::upload_status;

pub fn view(form: &FormAddImage, ctx: &Context<FormAddImage>) -> Html {
    let link = ctx.link();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="form-add-image" onsubmit={onsubmit}>
            <div class="form-stack" style="display:flex;flex-direction:column;gap:1rem;">
                { build_file_input(form, link) }
                { build_text_input(form, link, Field::Title, "Image title...") }
                { build_text_input(form, link, Field::Description, "Image description...") }
            </div>

            <button
                type="submit"
                class="form-submit"
                disabled={!form.can_submit()}
                style="width:100%;margin:1.5rem 0;padding:0.75rem;"
            >
                { if form.submitting { "Sending..." } else { "Send" } }
            </button>
        </form>
    }
}

fn build_file_input(form: &FormAddImage, link: &Scope<FormAddImage>) -> Html {
    let accept = form.pipeline.rules().limits().accepted_mime_types.join(",");
    let onchange = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FilesSelected(files_of(input.files()))
    });

    html! {
        <div class={classes!("field", form.errors.error_for(Field::Image).map(|_| "invalid"))}>
            <label class="file-input" style="display:flex;flex-direction:column;align-items:center;cursor:pointer;">
                {
                    if let Some(url) = &form.local_image_url {
                        html! { <img src={url.clone()} alt="Selected image" style="max-width:100%;max-height:12rem;" /> }
                    } else {
                        html! { <span class="file-input-placeholder">{ "Click to pick an image" }</span> }
                    }
                }
                <input
                    ref={form.file_input_ref.clone()}
                    type="file"
                    name={Field::Image.name()}
                    accept={accept}
                    style="display:none;"
                    onchange={onchange}
                />
            </label>
            {
                if let Some(status) = upload_status(form.pending.phase()) {
                    html! { <span class="field-status">{ status }</span> }
                } else {
                    html! {}
                }
            }
            { field_message(form, Field::Image) }
        </div>
    }
}

fn build_text_input(
    form: &FormAddImage,
    link: &Scope<FormAddImage>,
    field: Field,
    placeholder: &'static str,
) -> Html {
    let (value, oninput) = match field {
        Field::Description => (
            form.pending.description.clone(),
            link.callback(|e: InputEvent| {
                Msg::UpdateDescription(e.target_unchecked_into::<HtmlInputElement>().value())
            }),
        ),
        _ => (
            form.pending.title.clone(),
            link.callback(|e: InputEvent| {
                Msg::UpdateTitle(e.target_unchecked_into::<HtmlInputElement>().value())
            }),
        ),
    };

    html! {
        <div class={classes!("field", form.errors.error_for(field).map(|_| "invalid"))}>
            <input
                type="text"
                name={field.name()}
                placeholder={placeholder}
                value={value}
                oninput={oninput}
            />
            { field_message(form, field) }
        </div>
    }
}

fn field_message(form: &FormAddImage, field: Field) -> Html {
    match form.errors.message_for(field) {
        Some(message) => html! {
            <span class="field-error" role="alert" style="color:#e53935;font-size:0.85rem;">
                { message.to_string() }
            </span>
        },
        None => html! {},
    }
}
