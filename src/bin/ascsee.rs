use anyhow::Context as _;
use clap::Parser;

use ascsee::{
    AsciiConverter, AscseeError, ConsolePrompt, Converter, FONT_SIZE_MAX, FONT_SIZE_MIN, Prompt,
    Settings, TargetType, builder, runner, store, wizard,
};

#[derive(Parser, Debug)]
#[command(name = "ascsee", version)]
struct Cli {
    /// Run an order file directly and exit, skipping the menu.
    #[arg(long)]
    order: Option<std::path::PathBuf>,

    /// Report each artifact as the converter writes it.
    #[arg(long)]
    verbose: bool,

    /// Font file used for new render specs.
    #[arg(long)]
    font_file: Option<String>,

    /// Font size used for new render specs.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    font_size: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    let mut converter = AsciiConverter::new();
    converter.set_verbose(cli.verbose);

    let mut settings = Settings::default();
    if let Some(font_file) = cli.font_file {
        settings.set_font_file(font_file);
    }
    if let Some(font_size) = cli.font_size {
        settings.set_font_size(font_size);
    }

    if let Some(order_path) = cli.order {
        let order = store::load(&order_path)
            .with_context(|| format!("failed to load order '{}'", order_path.display()))?;
        let report = runner::run(&order, &converter);
        println!(
            "\n{} of {} jobs completed.",
            report.completed(),
            report.jobs.len()
        );
        return Ok(());
    }

    let mut prompt = ConsolePrompt;
    loop {
        let choice = prompt.choose(
            "AscSee",
            &[
                "Process Order",
                "Order Creation Wizard",
                "Convert Image",
                "Convert Video",
                "Settings",
            ],
        )?;

        let result = match choice {
            None => break, // quit: success
            Some(0) => process_order(&converter, &mut prompt),
            Some(1) => wizard::run_wizard(&settings, &converter, &mut prompt).map(|_| ()),
            Some(2) => convert_one(TargetType::Image, &settings, &converter, &mut prompt),
            Some(3) => convert_one(TargetType::Video, &settings, &converter, &mut prompt),
            Some(4) => settings_menu(&mut settings, &mut prompt),
            Some(_) => Ok(()),
        };

        // Errors surface as messages; the menu loop continues.
        if let Err(e) = result {
            println!("{e}");
        }
    }
    Ok(())
}

fn process_order(converter: &dyn Converter, prompt: &mut dyn Prompt) -> ascsee::AscseeResult<()> {
    let Some(order_path) = prompt.input("Enter the path to the desired order file")? else {
        return Ok(());
    };

    match store::load(&order_path) {
        Ok(order) => {
            let report = runner::run(&order, converter);
            println!(
                "\n{} of {} jobs completed.",
                report.completed(),
                report.jobs.len()
            );
        }
        Err(AscseeError::NotFound(_)) => {
            println!("File at '{order_path}' could not be found.");
        }
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn convert_one(
    target_type: TargetType,
    settings: &Settings,
    converter: &dyn Converter,
    prompt: &mut dyn Prompt,
) -> ascsee::AscseeResult<()> {
    let spec = builder::collect(target_type, settings, converter, prompt)?;
    runner::dispatch(&spec, converter);
    Ok(())
}

fn settings_menu(settings: &mut Settings, prompt: &mut dyn Prompt) -> ascsee::AscseeResult<()> {
    loop {
        match prompt.choose("AscSee Settings", &["Set Font File", "Set Font Size"])? {
            None => return Ok(()), // back
            Some(0) => {
                println!("\nCurrent font file is at: {}.", settings.font_file);
                if let Some(answer) = prompt.input("Enter the file path to the font file")? {
                    settings.set_font_file(answer);
                    println!("\nFont changed to {}", settings.font_file);
                }
            }
            Some(_) => {
                println!("\nCurrent font size is {}.", settings.font_size);
                let size =
                    prompt.number_in_range("Enter a new font size", FONT_SIZE_MIN, FONT_SIZE_MAX)?;
                settings.set_font_size(size);
                println!("\nFont size changed to {}", settings.font_size);
            }
        }
    }
}
