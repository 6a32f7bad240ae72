//! Inline SVG icon set. Stroke icons drawn in a 24×24 viewBox, colored by
//! `currentColor` so the surrounding text color drives them.

use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ServiceIcon {
    Scale,
    Shield,
    Gavel,
    Book,
}

impl ServiceIcon {
    fn paths(&self) -> &'static [&'static str] {
        match self {
            ServiceIcon::Scale => &[
                "m16 16 3-8 3 8c-.87.65-1.92 1-3 1s-2.13-.35-3-1Z",
                "m2 16 3-8 3 8c-.87.65-1.92 1-3 1s-2.13-.35-3-1Z",
                "M7 21h10",
                "M12 3v18",
                "M3 7h2c2 0 5-1 7-2 2 1 5 2 7 2h2",
            ],
            ServiceIcon::Shield => &[
                "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
            ],
            ServiceIcon::Gavel => &[
                "m14.5 12.5-8 8a2.119 2.119 0 1 1-3-3l8-8",
                "m16 16 6-6",
                "m8 8 6-6",
                "m9 7 8 8",
                "m21 11-8-8",
            ],
            ServiceIcon::Book => &[
                "M12 7v14",
                "M3 18a1 1 0 0 1-1-1V4a1 1 0 0 1 1-1h5a4 4 0 0 1 4 4 4 4 0 0 1 4-4h5a1 1 0 0 1 1 1v13a1 1 0 0 1-1 1h-6a3 3 0 0 0-3 3 3 3 0 0 0-3-3z",
            ],
        }
    }

    pub fn svg(&self, size: u32) -> Html {
        stroke_svg(size, self.paths(), "1.5")
    }

    /// Oversized watermark variant with a hairline stroke.
    pub fn watermark(&self, size: u32) -> Html {
        stroke_svg(size, self.paths(), "1")
    }
}

pub fn arrow_right(size: u32) -> Html {
    stroke_svg(size, &["M5 12h14", "m12 5 7 7-7 7"], "2")
}

fn stroke_svg(size: u32, paths: &'static [&'static str], width: &'static str) -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width={size.to_string()}
            height={size.to_string()}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width={width}
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for paths.iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}
