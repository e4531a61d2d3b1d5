use console::style;

pub fn header(msg: &str) {
    println!();
    println!(" {}", style(msg).cyan().underlined());
    println!();
}

pub fn success(msg: impl std::fmt::Display) {
    println!("  {} {}", style("✓").green(), msg);
}

pub fn error(msg: impl std::fmt::Display) {
    println!("  {} {}", style("✗").red(), msg);
}
