//! Click a message link, fade the form in and out.

use std::fs::File;

use fadedom::{Element, Event, Size, Style};
use fader::{FadeSpec, InstantFade, Speed, Stage};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("toggle_form.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let root = Element::col()
        .id("page")
        .child(
            Element::box_()
                .class("message")
                .child(Element::link("Toggle the form").id("toggle-link")),
        )
        .child(
            Element::form()
                .id("contact-form")
                .height(Size::Fixed(5))
                .style(Style::new().hidden()),
        );

    let mut stage = Stage::new(root, Box::new(InstantFade::new()));
    stage.bind_fade(".message link", "#contact-form", FadeSpec::toggle(), Speed::Slow, None)?;

    for round in 1..=2 {
        let result = stage.dispatch(&Event::click_on("toggle-link"));
        if !result.is_handled() {
            return Err("click did not reach the binding".into());
        }
        let form = fadedom::find_element(stage.root(), "contact-form")
            .ok_or("form missing from tree")?;
        println!(
            "round {round}: display {:?}, opacity {}, height {:?}",
            form.style.display, form.style.opacity, form.height
        );
    }

    Ok(())
}
