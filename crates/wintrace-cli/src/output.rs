use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

/// Plain progress line on stdout.
pub fn status(msg: &str) {
    println!("{}", msg);
}

/// Completion line on stdout.
pub fn success(msg: &str) {
    if std::io::stdout().is_terminal() {
        println!("{}", msg.green());
    } else {
        println!("{}", msg);
    }
}

/// Warning on stderr.
pub fn warn(msg: &str) {
    if std::io::stderr().is_terminal() {
        eprintln!("{} {}", "Warning:".yellow(), msg);
    } else {
        eprintln!("Warning: {}", msg);
    }
}

/// Verbose-only detail on stderr.
pub fn detail(msg: &str) {
    if std::io::stderr().is_terminal() {
        eprintln!("{}", msg.dimmed());
    } else {
        eprintln!("{}", msg);
    }
}
