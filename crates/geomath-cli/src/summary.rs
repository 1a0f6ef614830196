use std::path::Path;

use console::Style;
use geomath_core::tool::ToolMode;

pub struct Styles {
    pub title: Style,
    pub header: Style,
    pub label: Style,
    pub value: Style,
    pub disabled: Style,
    pub path: Style,
}

impl Styles {
    pub fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_render_summary(
    mode: ToolMode,
    rotation: f64,
    scale: f64,
    size: (u32, u32),
    output: &Path,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Geomathiques Render"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(19)));
    println!();
    println!("  {:<12}{}", s.label.apply_to("Tool"), s.value.apply_to(mode));
    println!(
        "  {:<12}{}",
        s.label.apply_to("Rotation"),
        s.value.apply_to(format!("{rotation}\u{b0}"))
    );
    println!(
        "  {:<12}{}",
        s.label.apply_to("Scale"),
        s.value.apply_to(format!("{scale}x"))
    );
    println!(
        "  {:<12}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(format!("{}x{}", size.0, size.1))
    );
    println!(
        "  {:<12}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output.display())
    );
    println!();
}
