use crate::{
    builder,
    convert::Converter,
    error::AscseeResult,
    model::{Order, TargetType},
    prompt::Prompt,
    runner::{self, RunReport},
    settings::Settings,
    store,
};

/// Builds an order one spec at a time: the loop body always runs at least
/// once, then continues while the user keeps answering yes (default yes).
/// Append-only; nothing is removed once collected.
pub fn build_order(
    settings: &Settings,
    converter: &dyn Converter,
    prompt: &mut dyn Prompt,
) -> AscseeResult<Order> {
    let mut order = Order::new();
    loop {
        let kinds = ["image", "video"];
        let choice = prompt.select_one("Select the type of media being added to the order", &kinds)?;
        let target_type = match choice {
            0 => TargetType::Image,
            _ => TargetType::Video,
        };
        order.push(builder::collect(target_type, settings, converter, prompt)?);

        if !prompt.confirm("Would you like to add another task?", true)? {
            break;
        }
    }
    Ok(order)
}

/// The full wizard: build, then two independent optional gates. Saving (or a
/// save failure) never affects whether the order runs, and vice versa.
pub fn run_wizard(
    settings: &Settings,
    converter: &dyn Converter,
    prompt: &mut dyn Prompt,
) -> AscseeResult<Option<RunReport>> {
    println!("\n[ Render Order Wizard ]");
    let order = build_order(settings, converter, prompt)?;

    if prompt.confirm("Do you want to save the order to a file?", true)? {
        let base = prompt.input_forced("Enter the desired order file's name (without extension)")?;
        let path = format!("{base}.{}", store::ORDER_EXT);
        match store::save(&order, &path) {
            Ok(()) => println!("Order saved to {path}."),
            Err(e) => println!("Could not save the order: {e}"),
        }
    }

    if prompt.confirm("Do you want to run the order now?", true)? {
        return Ok(Some(runner::run(&order, converter)));
    }
    Ok(None)
}
