//! Main window and page renderers

mod dashboard_page;
mod innovation_page;
mod lab_window;
mod settings_page;

pub use lab_window::LabWindow;

use gpui::Rgba;
use researchlab_ui::Rgba as ThemeRgba;

fn rgb(c: ThemeRgba) -> Rgba {
    Rgba {
        r: c.r,
        g: c.g,
        b: c.b,
        a: 1.0,
    }
}

fn rgba(c: ThemeRgba) -> Rgba {
    Rgba {
        r: c.r,
        g: c.g,
        b: c.b,
        a: c.a,
    }
}
