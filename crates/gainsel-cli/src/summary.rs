use console::Style;
use gainsel_core::pipeline::config::PipelineConfig;
use gainsel_core::pipeline::PipelineOutput;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_selection_summary(config: &PipelineConfig, output: &PipelineOutput) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Gain Selection"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(14)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Shape"),
        s.value.apply_to(format!(
            "{:?} -> ({}, {})",
            output.input_shape, output.output_shape.0, output.output_shape.1
        ))
    );

    if output.passthrough {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Selector"),
            s.disabled.apply_to("skipped (single channel input)")
        );
    } else {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Selector"),
            s.method.apply_to(&config.selector)
        );
        println!(
            "  {:<14}{}",
            s.label.apply_to("High gain"),
            s.value.apply_to(output.high_gain_pixels)
        );
        println!(
            "  {:<14}{}",
            s.label.apply_to("Low gain"),
            s.value.apply_to(output.low_gain_pixels)
        );
    }
    println!();
}
