use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
    println!("Effective configuration:");
    match &config.notebook_path {
        Some(path) => println!("  Notebook: {}", path.display()),
        None => println!("  Notebook: (embedded sample)"),
    }
    println!(
        "  UI theme: {}",
        config
            .theme
            .as_deref()
            .unwrap_or("(use the library default)")
    );
    println!("  Animate transitions: {}", bool_to_word(config.animate));
}

fn bool_to_word(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
