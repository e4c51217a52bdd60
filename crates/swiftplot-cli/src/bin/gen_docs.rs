//! Binary that emits command-line options markdown to stdout.

fn main() {
    print!("{}", swiftplot_cli::render_options_markdown());
}
