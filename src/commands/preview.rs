use anyhow::Result;
use repeatcal_core::preview::RepeatPreview;
use repeatcal_core::{EventForm, Expander};

use crate::render::Render;

pub fn run(expander: &Expander, form: &EventForm) -> Result<()> {
    let preview = RepeatPreview::new(expander, form);
    println!("{}", preview.render());
    Ok(())
}
