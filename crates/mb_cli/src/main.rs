use clap::{Parser, ValueEnum};
use mb_core::logging::init_logging;
use mb_core::{Error, NavigationContext, Result, SiteConfig};
use mb_web::{Presenter, RenderedPage};
use std::process::ExitCode;
use tracing::{error, info, Level};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render the Majalah Bitcoin news pages from a static JSON collection",
    long_about = None
)]
pub struct Cli {
    /// Where the article collection lives: a path, file:// URL, http(s):// URL or memory://
    #[arg(long, default_value = mb_core::config::DEFAULT_DATA_LOCATION)]
    data: String,
    /// File name that identifies the detail page
    #[arg(long, default_value = mb_core::config::DEFAULT_DETAIL_PAGE)]
    detail_page: String,
    /// Display time zone, in hours east of UTC
    #[arg(long, default_value_t = 8, allow_hyphen_values = true)]
    utc_offset: i32,
    /// Truncate card summaries to this many characters
    #[arg(long)]
    summary_limit: Option<usize>,
    /// Maximum number of related articles on the detail page
    #[arg(long, default_value_t = mb_core::config::DEFAULT_RELATED_LIMIT)]
    related_limit: usize,
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print the fragments a page location would receive
    Render {
        /// Page location, e.g. index.html or berita.html?id=...
        #[arg(default_value = "index.html")]
        location: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,
    },
    /// Fetch the collection and report whether it loaded
    Check,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Html,
    Json,
}

impl Cli {
    fn site_config(&self) -> Result<SiteConfig> {
        SiteConfig::new()
            .with_data_location(self.data.clone())
            .with_detail_page(self.detail_page.clone())
            .with_summary_limit(self.summary_limit)
            .with_related_limit(self.related_limit)
            .with_utc_offset_hours(self.utc_offset)
    }
}

fn print_page(page: &RenderedPage, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Html => {
            for mount in &page.mounts {
                println!("<!-- mount: {} -->", mount.id);
                println!("{}", mount.html);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(page)?),
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.site_config()?;
    let source = mb_storage::create_source(&config.data_location)?;

    match cli.command {
        Commands::Render { location, format } => {
            let ctx = NavigationContext::from_location(&location, &config)?;
            info!("🧭 {:?} view for {}", ctx.mode, location);
            let presenter = Presenter::new(source, config);
            let page = presenter.render(&ctx).await;
            print_page(&page, format)?;
        }
        Commands::Check => {
            let articles = source.fetch().await?;
            if articles.is_empty() {
                println!("✅ {} loaded, but contains no articles", source.name());
            } else {
                println!("✅ {} loaded {} articles", source.name(), articles.len());
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(if cli.verbose { Level::DEBUG } else { Level::INFO });

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ Error::Config(_)) | Err(e @ Error::InvalidUrl(_)) => {
            error!("{}", e);
            ExitCode::from(2)
        }
        Err(e) => {
            error!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_render() {
        let cli = Cli::parse_from([
            "mb",
            "--data",
            "memory://",
            "--utc-offset",
            "-5",
            "render",
            "berita.html?id=a1",
            "--format",
            "json",
        ]);
        let config = cli.site_config().unwrap();
        assert_eq!(config.data_location, "memory://");
        assert_eq!(config.utc_offset().local_minus_utc(), -5 * 3600);
        assert!(matches!(cli.command, Commands::Render { format: OutputFormat::Json, .. }));
    }

    #[test]
    fn test_cli_rejects_bad_offset() {
        let cli = Cli::parse_from(["mb", "--utc-offset", "30", "check"]);
        assert!(matches!(cli.site_config(), Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_render_memory_source() {
        let cli = Cli::parse_from(["mb", "--data", "memory://", "render"]);
        assert!(run(cli).await.is_ok());
    }
}
