// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    // Using a raw string literal for the multi-line banner
    let banner = r#"
  ___ _   _ _ __ ___  _ __ ___   __ _ _ __(_)_______
 / __| | | | '_ ` _ \| '_ ` _ \ / _` | '__| |_  / _ \
 \__ \ |_| | | | | | | | | | | | (_| | |  | |/ /  __/
 |___/\__,_|_| |_| |_|_| |_| |_|\__,_|_|  |_/___\___|

    Extractive Summarization Relay
"#;
    println!("{}", banner);
}
