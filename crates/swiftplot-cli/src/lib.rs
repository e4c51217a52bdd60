//! Shared CLI definitions for swiftplot.
//!
//! Used by the main application and by the build script (manpage) and
//! gen_docs binary (command-line-options markdown).

use clap::{CommandFactory, Parser, ValueEnum};
use std::path::PathBuf;

/// How traces are drawn: connected lines, point markers, or both.
#[derive(Debug, Default, Clone, Copy, ValueEnum, PartialEq, Eq, Hash)]
pub enum ChartStyle {
    /// Lines connecting the points, with a marker on every point
    #[default]
    LinesAndMarkers,
    /// Lines only
    Lines,
    /// Markers only (scatter)
    Markers,
}

impl ChartStyle {
    pub const ALL: [Self; 3] = [Self::LinesAndMarkers, Self::Lines, Self::Markers];

    /// Label shown in the style selector.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LinesAndMarkers => "Lines + Scatter",
            Self::Lines => "Lines",
            Self::Markers => "Scatter",
        }
    }

    /// Kebab-case name accepted by `--style` and the config file.
    pub fn name(self) -> &'static str {
        match self {
            Self::LinesAndMarkers => "lines-and-markers",
            Self::Lines => "lines",
            Self::Markers => "markers",
        }
    }

    /// plotly.js `mode` value for a scatter trace.
    pub fn plotly_mode(self) -> &'static str {
        match self {
            Self::LinesAndMarkers => "lines+markers",
            Self::Lines => "lines",
            Self::Markers => "markers",
        }
    }

    pub fn draws_lines(self) -> bool {
        matches!(self, Self::LinesAndMarkers | Self::Lines)
    }

    pub fn draws_markers(self) -> bool {
        matches!(self, Self::LinesAndMarkers | Self::Markers)
    }

    /// Position in [`ChartStyle::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Parse the kebab-case name used on the command line and in config files.
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name.trim(), true).ok()
    }
}

/// Command-line arguments for swiftplot
#[derive(Clone, Parser, Debug)]
#[command(
    name = "swiftplot",
    version,
    about = "Quick, easy and interactive plots from pasted tables",
    long_about = "Type or paste tabular data into a grid, name the x axis and up to five \
                  series, and render a line/scatter chart in the terminal. The chart can be \
                  exported as plot.png or as a standalone interactive plot.html."
)]
pub struct Args {
    /// Directory that exported plot.png / plot.html files are written to (default: current directory)
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Initial chart style (overrides config [chart] default_style)
    #[arg(long = "style", value_enum)]
    pub style: Option<ChartStyle>,

    /// Initial chart title
    #[arg(long = "title", value_name = "TEXT")]
    pub title: Option<String>,

    /// Enable debug mode: show the debug overlay and log at debug level
    #[arg(long = "debug", action)]
    pub debug: bool,

    /// Clear all cache data (including the log file) and exit
    #[arg(long = "clear-cache", action)]
    pub clear_cache: bool,

    /// Generate default configuration file at ~/.config/swiftplot/config.toml
    #[arg(long = "generate-config", action)]
    pub generate_config: bool,

    /// Force overwrite existing config file when using --generate-config
    #[arg(long = "force", requires = "generate_config", action)]
    pub force: bool,
}

/// Escape `|` and newlines for use in markdown table cells.
fn escape_table_cell(s: &str) -> String {
    s.replace('|', "\\|").replace(['\n', '\r'], " ")
}

/// Render command-line options as markdown.
pub fn render_options_markdown() -> String {
    let mut cmd = Args::command();
    cmd.build();

    let mut out = String::from("# Command Line Options\n\n");

    out.push_str("## Usage\n\n```\n");
    let usage = cmd.render_usage();
    out.push_str(&usage.to_string());
    out.push_str("\n```\n\n");

    out.push_str("## Options\n\n");
    out.push_str("| Option | Description |\n");
    out.push_str("|--------|-------------|\n");

    for arg in cmd.get_arguments() {
        let id = arg.get_id().as_ref().to_string();
        if id == "help" || id == "version" {
            continue;
        }

        let mut parts = Vec::new();
        if let Some(s) = arg.get_short() {
            parts.push(format!("-{s}"));
        }
        if let Some(l) = arg.get_long() {
            parts.push(format!("--{l}"));
        }
        let op = parts.join(", ");
        let placeholder: String = if arg.get_action().takes_values() {
            arg.get_value_names()
                .map(|names| {
                    names
                        .iter()
                        .map(|n: &clap::builder::Str| format!("<{}>", n.as_ref() as &str))
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .unwrap_or_default()
        } else {
            String::new()
        };
        let option_str = if placeholder.is_empty() {
            op
        } else {
            format!("{op} {placeholder}")
        };

        let help = arg
            .get_help()
            .map(|h| escape_table_cell(&h.to_string()))
            .unwrap_or_else(|| "-".to_string());

        out.push_str(&format!("| `{option_str}` | {help} |\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_labels_and_modes() {
        assert_eq!(ChartStyle::LinesAndMarkers.as_str(), "Lines + Scatter");
        assert_eq!(ChartStyle::Markers.as_str(), "Scatter");
        assert_eq!(ChartStyle::LinesAndMarkers.plotly_mode(), "lines+markers");
        assert_eq!(ChartStyle::Lines.plotly_mode(), "lines");
        assert_eq!(ChartStyle::Markers.plotly_mode(), "markers");
        assert_eq!(ChartStyle::default(), ChartStyle::LinesAndMarkers);
    }

    #[test]
    fn test_style_from_name() {
        assert_eq!(
            ChartStyle::from_name("lines-and-markers"),
            Some(ChartStyle::LinesAndMarkers)
        );
        assert_eq!(ChartStyle::from_name(" Markers "), Some(ChartStyle::Markers));
        assert_eq!(ChartStyle::from_name("bar"), None);
        for style in ChartStyle::ALL {
            assert_eq!(ChartStyle::from_name(style.name()), Some(style));
        }
    }

    #[test]
    fn test_style_index_matches_all() {
        for (i, style) in ChartStyle::ALL.iter().enumerate() {
            assert_eq!(style.index(), i);
        }
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "swiftplot",
            "--style",
            "markers",
            "--title",
            "Run 4",
            "--output-dir",
            "out",
        ])
        .unwrap();
        assert_eq!(args.style, Some(ChartStyle::Markers));
        assert_eq!(args.title.as_deref(), Some("Run 4"));
        assert_eq!(args.output_dir, Some(PathBuf::from("out")));
        assert!(!args.debug);
    }

    #[test]
    fn test_force_requires_generate_config() {
        assert!(Args::try_parse_from(["swiftplot", "--force"]).is_err());
        assert!(Args::try_parse_from(["swiftplot", "--generate-config", "--force"]).is_ok());
    }

    #[test]
    fn test_options_markdown_lists_flags() {
        let md = render_options_markdown();
        assert!(md.contains("`--output-dir <DIR>`"));
        assert!(md.contains("`--generate-config`"));
        assert!(!md.contains("--help"));
    }
}
