//! Card image with a blurhash placeholder.
//!
//! The placeholder is the decoded blurhash painted onto a small canvas
//! that CSS scales to fill the image region. The real image carries
//! `loading="lazy"`, so the browser decides when to start the fetch.
//! Once its `onload` fires the component switches to the image and never
//! switches back. A failed load leaves the placeholder in place.

use blurhash::decode;
use gloo_console::error;
use wasm_bindgen::{Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

// Decode resolution of the placeholder; the canvas is CSS-scaled up.
const PLACEHOLDER_WIDTH: u32 = 32;
const PLACEHOLDER_HEIGHT: u32 = 32;

/// The two phases of the image region. The only transition is
/// `Placeholder` to `Loaded`, fired once by the image's load event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Placeholder,
    Loaded,
}

pub enum Msg {
    ImageLoaded,
}

#[derive(Properties, PartialEq)]
pub struct BlurhashImageProps {
    pub src: String,
    pub blurhash: String,
}

pub struct BlurhashImage {
    phase: Phase,
    canvas_ref: NodeRef,
}

impl Component for BlurhashImage {
    type Message = Msg;
    type Properties = BlurhashImageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            phase: Phase::Placeholder,
            canvas_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ImageLoaded => {
                if self.phase == Phase::Placeholder {
                    self.phase = Phase::Loaded;
                    true
                } else {
                    false
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let props = ctx.props();

        html! {
            <>
                {
                    if self.phase == Phase::Placeholder {
                        html! {
                            <canvas
                                ref={self.canvas_ref.clone()}
                                class="card-placeholder"
                                width={PLACEHOLDER_WIDTH.to_string()}
                                height={PLACEHOLDER_HEIGHT.to_string()}
                            />
                        }
                    } else {
                        html! {}
                    }
                }
                <img
                    class="card-image"
                    loading="lazy"
                    src={props.src.clone()}
                    onload={link.callback(|_| Msg::ImageLoaded)}
                />
            </>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.paint_placeholder(&ctx.props().blurhash);
        }
    }
}

impl BlurhashImage {
    /// Decodes the blurhash and paints it onto the placeholder canvas.
    /// A decode failure is logged and leaves the canvas blank.
    fn paint_placeholder(&self, blurhash: &str) {
        let Some(canvas) = self.canvas_ref.cast::<HtmlCanvasElement>() else {
            return;
        };

        let pixels = match decode(blurhash, PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT, 1.0) {
            Ok(pixels) => pixels,
            Err(err) => {
                error!(format!("blurhash decode failed: {err:?}"));
                return;
            }
        };

        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());

        if let Some(context) = context {
            if let Ok(image_data) = web_sys::ImageData::new_with_u8_clamped_array_and_sh(
                Clamped(&pixels),
                PLACEHOLDER_WIDTH,
                PLACEHOLDER_HEIGHT,
            ) {
                context.put_image_data(&image_data, 0.0, 0.0).ok();
            }
        }
    }
}
