use onepage_pdf::{Document, PageConfig, TextInstruction};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = PageConfig::letter();
    let mut doc = Document::new(config);

    doc.add_text(TextInstruction::bold(24.0, config.margin_x, 700.0, "\u{a1}Hola, mundo!"))
        .add_text(TextInstruction::regular(
            12.0,
            config.margin_x,
            670.0,
            "This is a single-page document (one content stream, two fonts).",
        ));

    let path = doc.save("hello_world.pdf")?;
    println!("{}", path.display());

    Ok(())
}
