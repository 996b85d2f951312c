use crate::{
    convert::Converter,
    error::AscseeResult,
    model::{RenderSpec, TargetType},
    prompt::{FONT_SIZE_MAX, FONT_SIZE_MIN, Prompt},
    settings::Settings,
};

/// Interactively collects one fully-populated [`RenderSpec`].
///
/// `path` and `output` are forced inputs; the remaining fields are pre-filled
/// from the converter's defaults and the session [`Settings`], then optionally
/// overridden through the advanced flow.
pub fn collect(
    target_type: TargetType,
    settings: &Settings,
    converter: &dyn Converter,
    prompt: &mut dyn Prompt,
) -> AscseeResult<RenderSpec> {
    let path = prompt.input_forced(&format!(
        "Enter the filepath of the source {target_type}"
    ))?;
    let output = prompt.input_forced("Enter the name for the output file (without extension)")?;

    let mut warp = converter.default_warp();
    let mut font_size = settings.font_size;
    let mut font_colors = converter.default_text_colors();
    let mut background_color = converter.default_background_color();

    if prompt.confirm("Modify advanced options?", true)? {
        (warp, font_size, font_colors, background_color) =
            advanced_options(settings, converter, prompt)?;
    }

    Ok(RenderSpec {
        target_type,
        path,
        output,
        warp,
        font_file: settings.font_file.clone(),
        font_size,
        font_colors,
        background_color,
    })
}

/// The advanced flow: warp, font size, font colors, background color, in that
/// fixed order. Each step is final once accepted.
fn advanced_options(
    settings: &Settings,
    converter: &dyn Converter,
    prompt: &mut dyn Prompt,
) -> AscseeResult<(f64, u32, Vec<String>, String)> {
    println!("\nDefault warp is {}.", converter.default_warp());
    let warp = prompt.number_forced("Enter a warp value")?;

    println!("\nDefault font size is {}.", settings.font_size);
    let font_size = prompt.number_in_range("Enter a new font size", FONT_SIZE_MIN, FONT_SIZE_MAX)?;

    let palette = converter.palette();
    let labels: Vec<&str> = palette.iter().map(String::as_str).collect();

    println!(
        "\nDefault text colors: {}",
        converter.default_text_colors().join(", ")
    );
    let chosen = prompt.multi_select("Select font colors", &labels, 1)?;
    let font_colors: Vec<String> = chosen.iter().map(|&i| palette[i].clone()).collect();

    println!(
        "\nDefault background color is {}.",
        converter.default_background_color()
    );
    let bg_idx = prompt.select_one("Select a background color", &labels)?;
    let background_color = palette[bg_idx].clone();

    Ok((warp, font_size, font_colors, background_color))
}
